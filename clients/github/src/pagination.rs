use log::debug;
use log::error;
use reqwest::header::HeaderMap;
use reqwest::header::LINK;
use reqwest::Client;
use reqwest::Response;
use serde::de::DeserializeOwned;

/// Fetches every page of a listing endpoint, following the `Link` header's
/// `rel="next"` target until exhausted.
///
/// A transport failure, a non-success status, or a malformed body ends the
/// walk early and whatever was accumulated so far is returned. No retries,
/// no backoff.
pub(crate) async fn fetch_all<T: DeserializeOwned>(client: &Client, url: String) -> Vec<T> {
    let mut results = Vec::new();
    let mut next = Some(url);
    while let Some(url) = next {
        debug!("Fetching: {}", url);
        let response = match client.get(&url).send().await.and_then(Response::error_for_status) {
            Ok(response) => response,
            Err(err) => {
                error!("Error fetching {}: {}", url, err);
                break;
            }
        };
        next = next_link(response.headers());
        match response.json::<Vec<T>>().await {
            Ok(mut page) => results.append(&mut page),
            Err(err) => {
                error!("Error decoding response from {}: {}", url, err);
                break;
            }
        }
    }
    results
}

/// Extracts the `rel="next"` target from an RFC 5988 `Link` header.
pub(crate) fn next_link(headers: &HeaderMap) -> Option<String> {
    let link = headers.get(LINK)?.to_str().ok()?;
    for part in link.split(',') {
        let mut sections = part.trim().split(';');
        let target = sections.next().unwrap_or("").trim();
        if !sections.any(|param| param.trim() == r#"rel="next""#) {
            continue;
        }
        if let Some(url) = target.strip_prefix('<').and_then(|target| target.strip_suffix('>')) {
            return Some(url.to_string());
        }
    }
    None
}
