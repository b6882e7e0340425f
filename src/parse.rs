use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use tokio::task::spawn_blocking;
use tracing::{debug, warn};
use url::Url;

use crate::{Error, Result};

const ROW: &str = "tr.athing.submission";
const TITLELINE: &str = "span.titleline";
const LINK: &str = "a";
const AGE: &str = "span.age[title]";
const MORE_LABEL: &str = "More";

/// One upvoted item as it appears on the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpvotedRecord {
    pub id: String,
    pub title: String,
    /// Empty for flagged or dead items that have no outbound link.
    pub url: String,
    /// Unix epoch seconds, empty when the age indicator is missing.
    pub timestamp: String,
}

/// A row that had to be dropped because it lacked its title link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub id: String,
    pub missing: &'static str,
}

#[derive(Debug, Default)]
pub struct Page {
    pub records: Vec<UpvotedRecord>,
    pub skipped: Vec<SkippedRow>,
    /// Where the "More" link points, if the page has one.
    pub next: Option<Url>,
}

/// Parses the page on the blocking pool, `Html` is not `Send`.
pub async fn parse_html(html: String, base: Url) -> Result<Page> {
    let page = spawn_blocking(move || parse_page(&html, &base)).await??;
    Ok(page)
}

/// Extracts every submission row and the next page link from one listing page.
/// Rows without a title link are logged and skipped.
pub fn parse_page(html: &str, base: &Url) -> Result<Page> {
    let doc = Html::parse_document(html);

    let row_selector = create_selector(ROW)?;
    let titleline_selector = create_selector(TITLELINE)?;
    let link_selector = create_selector(LINK)?;
    let age_selector = create_selector(AGE)?;

    // A listing page holds 30 items.
    let mut page = Page {
        records: Vec::with_capacity(30),
        ..Default::default()
    };

    for row in doc.select(&row_selector) {
        let id = row.value().attr("id").unwrap_or_default().to_owned();

        let Some(titleline) = row.select(&titleline_selector).next() else {
            warn!(item_id = %id, "no {TITLELINE} found, skipping row");
            page.skipped.push(SkippedRow { id, missing: TITLELINE });
            continue;
        };
        let Some(link) = titleline.select(&link_selector).next() else {
            warn!(item_id = %id, "no {LINK} found in {TITLELINE}, skipping row");
            page.skipped.push(SkippedRow { id, missing: LINK });
            continue;
        };

        let title = link.text().collect::<String>().trim().to_owned();
        let url = link.value().attr("href").unwrap_or_default().trim().to_owned();
        let timestamp = find_companion_row(row)
            .and_then(|companion| age_timestamp(companion, &age_selector))
            .unwrap_or_default();

        debug!(item_id = %id, %title, %url, %timestamp, "extracted record");
        page.records.push(UpvotedRecord {
            id,
            title,
            url,
            timestamp,
        });
    }

    page.next = doc
        .select(&link_selector)
        .filter(|a| a.text().collect::<String>() == MORE_LABEL)
        .find_map(|a| a.value().attr("href"))
        .map(|href| base.join(href))
        .transpose()?;

    Ok(page)
}

/// The metadata row that belongs to an item row: the next `tr` sibling.
/// This is the only place that relies on how the listing pairs its rows.
pub fn find_companion_row(row: ElementRef<'_>) -> Option<ElementRef<'_>> {
    row.next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == "tr")
}

/// The age title reads like `2024-01-31T09:15:04 1706692504`, the second token is the epoch.
fn age_timestamp(companion: ElementRef<'_>, age_selector: &Selector) -> Option<String> {
    let age = companion.select(age_selector).next()?;
    age.value()
        .attr("title")?
        .split_whitespace()
        .nth(1)
        .map(str::to_owned)
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}
