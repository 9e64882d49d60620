//! Builds a [`SessionCache`] from the configured sources.
//!
//! The mapping table is loaded first since every row's URL resolution
//! depends on it. A failed mapping load degrades to an empty table, which
//! drops every event. Sheet fetches then run concurrently; a sheet that fails
//! contributes no events and the others still load.

use chrono::NaiveDate;
use futures::future::join_all;
use outlet_core::{AppConfig, Outlet, UrlMappingTable};
use outlet_events::{demo_events, RawRow, SessionCache};
use outlet_sheets::{load_mapping_file, SheetsClient};

pub(crate) async fn load_session(
    config: &AppConfig,
    today: NaiveDate,
) -> anyhow::Result<SessionCache> {
    let client = SheetsClient::new(
        config.google_api_key.as_deref().unwrap_or_default(),
        config.request_timeout_secs,
        &config.user_agent,
        config.max_retries,
        config.retry_backoff_base_secs,
    )?;

    let mapping = load_mapping(config, &client).await;

    if config.google_api_key.is_none() {
        tracing::warn!("GOOGLE_API_KEY is not configured; using built-in demo events");
        return Ok(SessionCache::from_events(demo_events(today), mapping));
    }

    let sources = outlet_core::load_sources(&config.sources_path)?;
    let sheets = fetch_sheets(config, &client, &sources.sources).await;
    Ok(SessionCache::from_sheets(sheets, mapping, today))
}

async fn load_mapping(config: &AppConfig, client: &SheetsClient) -> UrlMappingTable {
    let location = config.mapping_location.as_str();
    let result = if config.mapping_is_remote() {
        client.fetch_mapping(location).await
    } else {
        load_mapping_file(std::path::Path::new(location))
    };

    match result {
        Ok(table) => {
            tracing::info!(location, entries = table.len(), "url mapping loaded");
            table
        }
        Err(e) => {
            tracing::warn!(
                location,
                error = %e,
                "url mapping failed to load; every event will be dropped"
            );
            UrlMappingTable::default()
        }
    }
}

async fn fetch_sheets(
    config: &AppConfig,
    client: &SheetsClient,
    sources: &[outlet_core::SheetSource],
) -> Vec<(Outlet, Vec<RawRow>)> {
    let fetches = sources.iter().map(move |source| async move {
        let result = client
            .fetch_rows(&config.sheet_id, &source.sheet, &config.sheet_range)
            .await;
        (source, result)
    });

    join_all(fetches)
        .await
        .into_iter()
        .filter_map(|(source, result)| match result {
            Ok(rows) => {
                tracing::info!(
                    outlet = %source.outlet,
                    sheet = %source.sheet,
                    rows = rows.len(),
                    "sheet fetched"
                );
                Some((source.outlet, rows))
            }
            Err(e) => {
                tracing::warn!(
                    outlet = %source.outlet,
                    sheet = %source.sheet,
                    error = %e,
                    "sheet fetch failed; outlet will have no events"
                );
                None
            }
        })
        .collect()
}
