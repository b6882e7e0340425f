use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::Result;

pub const DEFAULT_BASE_URL: &str = "https://news.ycombinator.com";
pub const DEFAULT_OUTPUT: &str = "upvoted_posts.json";
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Everything a run needs to know, resolved once from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    /// Site origin. Login, listing and "More" links are resolved against it.
    pub base_url: Url,
    /// Pause between two page fetches.
    pub delay: Duration,
    pub output: PathBuf,
    pub overwrite: bool,
    pub debug: bool,
}

impl Config {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        // Relative joins replace the last segment unless the path ends in '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self {
            base_url,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            output: PathBuf::from(DEFAULT_OUTPUT),
            overwrite: false,
            debug: false,
        })
    }

    pub fn login_url(&self) -> Result<Url> {
        Ok(self.base_url.join("login")?)
    }

    /// First page of the upvoted listing for `username`.
    pub fn upvoted_url(&self, username: &str) -> Result<Url> {
        let mut url = self.base_url.join("upvoted")?;
        url.query_pairs_mut().append_pair("id", username);
        Ok(url)
    }
}
