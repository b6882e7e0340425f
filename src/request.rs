use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::{config::Config, credentials::Credentials, Error, Result};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const BAD_LOGIN_PHRASE: &str = "Bad login";

/// An HN session. Cookies handed out at login are replayed on every later request.
pub struct Session {
    client: Client,
    login_url: Url,
}

impl Session {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            login_url: config.login_url()?,
        })
    }

    /// Submits the login form once. A page saying "Bad login", or ending up
    /// on the login page again, means the credentials were rejected.
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        let form = [
            ("acct", credentials.username.as_str()),
            ("pw", credentials.password.as_str()),
        ];

        let res = self
            .client
            .post(self.login_url.clone())
            .form(&form)
            .send()
            .await?;
        let landed_on = res.url().clone();
        let body = res.text().await?;
        debug!(%landed_on, "login response");

        if body.contains(BAD_LOGIN_PHRASE) || landed_on.path() == self.login_url.path() {
            return Err(Error::AuthFailed);
        }
        info!(user = %credentials.username, "logged in");
        Ok(())
    }

    /// Requests a page and returns the HTML.
    pub async fn get(&self, url: &Url) -> Result<String> {
        let res = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?;
        let html = res.text().await?;
        Ok(html)
    }
}
