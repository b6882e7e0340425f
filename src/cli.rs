use std::path::PathBuf;

use clap::Parser;

use hn_upvoted::config::{DEFAULT_BASE_URL, DEFAULT_DELAY_MS, DEFAULT_OUTPUT};

/// Export Hacker News upvoted posts to JSON.
#[derive(Parser, Debug)]
#[command(name = "hn-upvoted")]
#[command(author, version)]
pub struct Args {
    /// Hacker News username (falls back to HN_USERNAME, then a prompt)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Hacker News password (falls back to HN_PASSWORD, then a hidden prompt)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Output filename
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Replace the output file if it already exists
    #[arg(long)]
    pub overwrite: bool,

    /// Log every extracted record
    #[arg(long)]
    pub debug: bool,

    /// Site to scrape
    #[arg(long, default_value = DEFAULT_BASE_URL, hide = true)]
    pub base_url: String,

    /// Pause between page fetches in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let args = Args::try_parse_from(["hn-upvoted"]).unwrap();
        assert_eq!(args.username, None);
        assert_eq!(args.password, None);
        assert_eq!(args.output, PathBuf::from("upvoted_posts.json"));
        assert!(!args.overwrite);
        assert!(!args.debug);
        assert_eq!(args.base_url, "https://news.ycombinator.com");
        assert_eq!(args.delay_ms, 1000);
    }

    #[test]
    fn test_cli_short_flags() {
        let args =
            Args::try_parse_from(["hn-upvoted", "-u", "pg", "-p", "secret", "-o", "out.json"])
                .unwrap();
        assert_eq!(args.username.as_deref(), Some("pg"));
        assert_eq!(args.password.as_deref(), Some("secret"));
        assert_eq!(args.output, PathBuf::from("out.json"));
    }

    #[test]
    fn test_cli_long_flags() {
        let args = Args::try_parse_from([
            "hn-upvoted",
            "--username",
            "pg",
            "--overwrite",
            "--debug",
            "--delay-ms",
            "0",
        ])
        .unwrap();
        assert_eq!(args.username.as_deref(), Some("pg"));
        assert!(args.overwrite);
        assert!(args.debug);
        assert_eq!(args.delay_ms, 0);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let err = Args::try_parse_from(["hn-upvoted", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
