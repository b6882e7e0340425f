use chrono::Local;
use tracing::info;
use url::Url;

use crate::config::Config;
use crate::credentials::Credentials;
use crate::export::export_json;
use crate::parse::{parse_html, UpvotedRecord};
use crate::request::Session;
use crate::{info_time, Result};

/// Where the page walk stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    Fetching(Url),
    Done,
}

/// Logs in, walks the whole upvoted listing and writes it to `config.output`.
/// Returns how many records were exported. Nothing is written unless every page was fetched.
/// Callers check the output path up front with `export::ensure_writable`; the
/// write itself still refuses to replace a file without `config.overwrite`.
pub async fn process_site(config: &Config, credentials: &Credentials) -> Result<usize> {
    let session = Session::new(config)?;
    session.login(credentials).await?;
    info!(user = %credentials.username, "Scraping upvoted posts");

    let records = scrape_upvoted(&session, config, &credentials.username).await?;

    let local_now = Local::now();
    export_json(&records, &config.output, config.overwrite).await?;
    info_time!(
        local_now,
        "Exported {} upvoted posts to '{}'",
        records.len(),
        config.output.display()
    );

    Ok(records.len())
}

/// Follows "More" links from the first listing page until a page has none,
/// sleeping `config.delay` before each follow-up fetch.
pub async fn scrape_upvoted(
    session: &Session,
    config: &Config,
    username: &str,
) -> Result<Vec<UpvotedRecord>> {
    let mut upvotes = Vec::new();
    let mut cursor = Cursor::Fetching(config.upvoted_url(username)?);
    let mut pages = 0usize;

    while let Cursor::Fetching(url) = cursor {
        let start_page_time = Local::now();
        info!(%url, "Scraping page");

        let html = session.get(&url).await?;
        let page = parse_html(html, config.base_url.clone()).await?;
        pages += 1;

        info_time!(
            start_page_time,
            "Page {} gave {} records, skipped {} rows",
            pages,
            page.records.len(),
            page.skipped.len()
        );
        upvotes.extend(page.records);

        cursor = match page.next {
            Some(next) => {
                tokio::time::sleep(config.delay).await;
                Cursor::Fetching(next)
            }
            None => Cursor::Done,
        };
    }

    info!(pages, records = upvotes.len(), "Reached the last page");
    Ok(upvotes)
}
