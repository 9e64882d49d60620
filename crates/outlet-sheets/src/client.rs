//! HTTP client for the Google Sheets `values` endpoint and the published
//! `url-mapping.json`.

use std::time::Duration;

use outlet_core::UrlMappingTable;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::error::SheetsError;
use crate::rate_limit::retry_with_backoff;
use crate::types::ValueRange;

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com/";

/// Fallback wait when a 429 carries no parseable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Fetches spreadsheet rows and the mapping table.
///
/// Use [`SheetsClient::new`] for production or [`SheetsClient::with_base_url`]
/// to point at a mock server in tests. Transient errors (429, network
/// failures) are retried with exponential backoff.
pub struct SheetsClient {
    client: Client,
    api_key: String,
    base_url: Url,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl SheetsClient {
    /// Creates a client pointed at the production Sheets API.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, SheetsError> {
        Self::with_base_url(
            api_key,
            timeout_secs,
            user_agent,
            max_retries,
            backoff_base_secs,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SheetsError::Http`] if the `reqwest::Client` cannot be
    /// constructed, or [`SheetsError::InvalidBaseUrl`] if `base_url` does not
    /// parse as a URL that can carry path segments.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
        base_url: &str,
    ) -> Result<Self, SheetsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| SheetsError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(SheetsError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot carry path segments".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches the rows of `sheet_name!range`.
    ///
    /// An empty range yields an empty `Vec`. Rows are returned as the API
    /// sends them; trailing blank cells are already trimmed by the API.
    ///
    /// # Errors
    ///
    /// - [`SheetsError::RateLimited`] / [`SheetsError::Http`] after retries are exhausted.
    /// - [`SheetsError::NotFound`] for an unknown spreadsheet (not retried).
    /// - [`SheetsError::UnexpectedStatus`] for any other non-2xx (not retried).
    /// - [`SheetsError::Deserialize`] if the body is not a `ValueRange`.
    pub async fn fetch_rows(
        &self,
        sheet_id: &str,
        sheet_name: &str,
        range: &str,
    ) -> Result<Vec<Vec<String>>, SheetsError> {
        let url = self.values_url(sheet_id, &format!("{sheet_name}!{range}"));
        let body: ValueRange = self
            .get_json(url, &format!("values {sheet_name}!{range}"))
            .await?;
        tracing::debug!(
            sheet = sheet_name,
            range = body.range.as_deref().unwrap_or(range),
            rows = body.values.len(),
            "fetched sheet rows"
        );
        Ok(body.values)
    }

    /// Fetches a published `url-mapping.json`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_rows`]; additionally [`SheetsError::InvalidBaseUrl`]
    /// if `url` does not parse.
    pub async fn fetch_mapping(&self, url: &str) -> Result<UrlMappingTable, SheetsError> {
        let parsed = Url::parse(url).map_err(|e| SheetsError::InvalidBaseUrl {
            base_url: url.to_owned(),
            reason: e.to_string(),
        })?;
        self.get_json(parsed, "url mapping").await
    }

    fn values_url(&self, sheet_id: &str, a1_range: &str) -> Url {
        let mut url = self.base_url.clone();
        // `with_base_url` rejects cannot-be-a-base URLs, so this always applies.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v4", "spreadsheets", sheet_id, "values", a1_range]);
        }
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, context: &str) -> Result<T, SheetsError> {
        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self.client.get(url.clone()).send().await?;
                let status = response.status();

                if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                    let retry_after_secs = response
                        .headers()
                        .get(reqwest::header::RETRY_AFTER)
                        .and_then(|v| v.to_str().ok())
                        .and_then(|s| s.parse::<u64>().ok())
                        .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
                    return Err(SheetsError::RateLimited {
                        host: url.host_str().unwrap_or_default().to_owned(),
                        retry_after_secs,
                    });
                }

                if status == reqwest::StatusCode::NOT_FOUND {
                    return Err(SheetsError::NotFound {
                        url: redact_key(&url),
                    });
                }

                if !status.is_success() {
                    return Err(SheetsError::UnexpectedStatus {
                        status: status.as_u16(),
                        url: redact_key(&url),
                    });
                }

                let body = response.text().await?;
                serde_json::from_str::<T>(&body).map_err(|e| SheetsError::Deserialize {
                    context: context.to_owned(),
                    source: e,
                })
            }
        })
        .await
    }
}

/// Renders `url` for error messages with the `key` query parameter removed.
fn redact_key(url: &Url) -> String {
    let mut shown = url.clone();
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "key")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if kept.is_empty() {
        shown.set_query(None);
    } else {
        shown.query_pairs_mut().clear().extend_pairs(kept);
    }
    shown.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> SheetsClient {
        SheetsClient::with_base_url("test-key", 5, "outlet-test/0.1", 0, 0, base).unwrap()
    }

    #[test]
    fn values_url_encodes_range_segment() {
        let url = client("https://sheets.googleapis.com").values_url("sheet-id", "Sheet1!A2:M");
        assert_eq!(
            url.as_str(),
            "https://sheets.googleapis.com/v4/spreadsheets/sheet-id/values/Sheet1!A2:M?key=test-key"
        );
    }

    #[test]
    fn values_url_keeps_base_path_prefix() {
        let url = client("http://127.0.0.1:9999/proxy/").values_url("id", "시트!A2:M");
        assert!(url.path().starts_with("/proxy/v4/spreadsheets/id/values/"));
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let result = SheetsClient::with_base_url("k", 5, "ua", 0, 0, "not a url");
        assert!(matches!(result, Err(SheetsError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn redact_key_drops_api_key() {
        let url = Url::parse("https://example.com/v4/x?key=secret&foo=bar").unwrap();
        assert_eq!(redact_key(&url), "https://example.com/v4/x?foo=bar");
        let url = Url::parse("https://example.com/v4/x?key=secret").unwrap();
        assert_eq!(redact_key(&url), "https://example.com/v4/x");
    }
}
