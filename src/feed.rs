// src/feed.rs
//
// Feed loader: fetch the published sheet CSV and parse it into records.
// The in-memory list is only ever replaced after a successful parse; on
// failure callers keep whatever they had (the source dashboard cleared the
// list before fetching, which blanked the UI on every refresh — fixed here).

use std::error::Error;
use std::fmt;

use crate::config::consts::{CACHE_BUST_PARAM, FEED_URL};
use crate::core::net;
use crate::csv;
use crate::record::RecordSet;

/// Network or parse failure fetching the feed. Previous data stays visible.
#[derive(Debug)]
pub enum FeedError {
    Unavailable(String),
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedError::Unavailable(why) => write!(f, "feed unavailable: {why}"),
        }
    }
}

impl Error for FeedError {}

/// Fetch + parse one snapshot of the feed.
pub fn load() -> Result<RecordSet, FeedError> {
    let url = net::cache_busted(FEED_URL, CACHE_BUST_PARAM);
    let text = net::http_get(&url).map_err(|e| FeedError::Unavailable(e.to_string()))?;
    let set = parse(&text)?;
    logf!("Feed: loaded {} records", set.len());
    Ok(set)
}

/// Parse CSV text: first row is the header, every cell trimmed, rows kept in
/// feed order. A feed with a header and no data rows is valid (zero records);
/// a body with no header row at all is not.
pub fn parse(text: &str) -> Result<RecordSet, FeedError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut rows = csv::parse_rows(text);
    if rows.is_empty() {
        return Err(FeedError::Unavailable(s!("no header row in response")));
    }
    let header = rows.remove(0);
    Ok(RecordSet::from_rows(&header, rows))
}
