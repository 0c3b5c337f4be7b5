//! Netflix Insights - cleaning pipeline and insights dashboard.

fn main() -> anyhow::Result<()> {
    netflix_insights::cli::run()
}
