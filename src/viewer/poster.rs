//! Placeholder poster links.

/// Black 300x450 placeholder with red text.
pub const DEFAULT_POSTER_BASE: &str = "https://via.placeholder.com/300x450/000000/E50914";

/// Placeholder poster URL showing `title`, spaces encoded as `+`.
pub fn poster_url(base: &str, title: &str) -> String {
    format!("{}?text={}", base.trim_end_matches('?'), title.replace(' ', "+"))
}
