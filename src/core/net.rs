// src/core/net.rs

// HTTPS GET for the published sheet feed (blocking reqwest, rustls).

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::consts::HTTP_TIMEOUT_SECS;

pub fn http_get(url: &str) -> Result<String, Box<dyn std::error::Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}

/// Append a cache-defeating query parameter derived from the current time,
/// so repeated polls observe fresh data instead of an intermediary's copy.
pub fn cache_busted(url: &str, param: &str) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}{param}={millis}")
}
