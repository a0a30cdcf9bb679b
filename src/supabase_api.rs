// Listing retrieval from the Supabase-style REST backend.
// One GET per load attempt; errors are classified into the two kinds the
// page distinguishes (connectivity vs everything else).

use reqwest::Client;
use thiserror::Error;

use crate::config::Settings;
use crate::models::{Listing, RawListing};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error while contacting the listings backend: {0}")]
    Connectivity(#[source] reqwest::Error),
    #[error("listings backend returned an error: {0}")]
    Backend(String),
    #[error("could not decode the listings response: {0}")]
    Malformed(String),
}

// Fetches all published listings, newest first, already normalized.
pub async fn fetch_listings(client: &Client, settings: &Settings) -> Result<Vec<Listing>, FetchError> {
    let url = format!(
        "{}/rest/v1/listings",
        settings.supabase_url.trim_end_matches('/')
    );
    tracing::debug!(%url, "fetching listings from backend");

    let response = client
        .get(&url)
        .query(&[
            ("select", "*"),
            ("status", "eq.active"),
            ("order", "created_at.desc"),
        ])
        .header("apikey", settings.supabase_anon_key.as_str())
        .bearer_auth(&settings.supabase_anon_key)
        .send()
        .await
        .map_err(classify)?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "[unreadable response body]".to_string());
        tracing::warn!(%status, body, "backend rejected the listings request");
        return Err(FetchError::Backend(format!("HTTP {status}")));
    }

    let raw: Vec<RawListing> = response.json().await.map_err(classify)?;

    let listings: Vec<Listing> = raw.into_iter().map(Listing::from_raw).collect();
    tracing::info!(count = listings.len(), "fetched listings from backend");
    Ok(listings)
}

fn classify(err: reqwest::Error) -> FetchError {
    if err.is_decode() {
        FetchError::Malformed(err.to_string())
    } else {
        // Connect, timeout, DNS and request-build errors all read as
        // connectivity to the user.
        FetchError::Connectivity(err)
    }
}
