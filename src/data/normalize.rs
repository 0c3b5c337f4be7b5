//! Micro-parser for the legacy pseudo-list text columns.
//!
//! `genres` and `production_countries` arrive as the string rendering of a
//! list, e.g. `"['Drama', 'Comedy']"`. They are not parsed into a list: the
//! bracket and single-quote characters are removed and the result is
//! lowercased, so the separators stay exactly as they were
//! (`"drama, comedy"`).

/// Characters stripped from pseudo-list values.
pub const STRIPPED_CHARS: [char; 3] = ['[', ']', '\''];

/// Normalize one pseudo-list value.
pub fn normalize_list_field(raw: &str) -> String {
    raw.chars()
        .filter(|c| !STRIPPED_CHARS.contains(c))
        .collect::<String>()
        .to_lowercase()
}
