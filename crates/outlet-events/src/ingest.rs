//! Spreadsheet rows → [`NormalizedEvent`]s.
//!
//! Rows are positional. Each usable row contributes one [`EventItem`]; rows
//! sharing `(title, start, end)` collapse into a single event. Problem rows
//! are skipped and counted, never surfaced as errors.

use std::collections::HashMap;

use chrono::NaiveDate;
use outlet_core::{EventItem, NormalizedEvent, Outlet, UrlMappingTable};

use crate::dates::resolve_range;
use crate::url_mapping::{self, short_id};

/// One spreadsheet row as returned by the Sheets API.
pub type RawRow = Vec<String>;

/// Rows shorter than this lack the event id column and are rejected.
pub const MIN_ROW_CELLS: usize = 13;

const COL_TITLE: usize = 0;
const COL_PERIOD: usize = 1;
const COL_ISO_START: usize = 2;
const COL_ISO_END: usize = 3;
const COL_THUMBNAIL: usize = 4;
const COL_DESCRIPTION: usize = 6;
const COL_BRAND: usize = 7;
const COL_PRODUCT: usize = 8;
const COL_PRICE: usize = 9;
const COL_EVENT_ID: usize = 12;

/// Per-outlet ingestion counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub received: usize,
    pub events: usize,
    /// Too few cells, or blank title/period.
    pub malformed: usize,
    pub invalid_date: usize,
    /// No mapping-table entry for the event id.
    pub unmapped: usize,
}

impl IngestReport {
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.malformed + self.invalid_date + self.unmapped
    }
}

/// Output of [`ingest`].
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub events: Vec<NormalizedEvent>,
    pub report: IngestReport,
}

type GroupKey = (String, NaiveDate, NaiveDate);

/// Normalizes one outlet's rows.
///
/// Events come out in the order their group key was first seen. URL
/// resolution is fail-closed: an empty `table` drops every row.
#[must_use]
pub fn ingest(
    rows: &[RawRow],
    outlet: Outlet,
    table: &UrlMappingTable,
    today: NaiveDate,
) -> Ingested {
    let mut report = IngestReport {
        received: rows.len(),
        ..IngestReport::default()
    };
    let mut events: Vec<NormalizedEvent> = Vec::new();
    let mut groups: HashMap<GroupKey, usize> = HashMap::new();

    for row in rows {
        if !is_usable(row) {
            report.malformed += 1;
            continue;
        }

        let title = cell(row, COL_TITLE);
        let period = cell(row, COL_PERIOD);

        let Some(range) = resolve_range(
            period,
            Some(cell(row, COL_ISO_START)),
            Some(cell(row, COL_ISO_END)),
            today,
        ) else {
            tracing::warn!(%outlet, title, period, "skipping row with unparseable dates");
            report.invalid_date += 1;
            continue;
        };

        let event_id = cell(row, COL_EVENT_ID);
        if url_mapping::resolve(event_id, table).is_none() {
            tracing::debug!(
                %outlet,
                event_id,
                short_id = short_id(event_id),
                title,
                "skipping row without a detail-page mapping"
            );
            report.unmapped += 1;
            continue;
        }

        let item = EventItem {
            brand: cell(row, COL_BRAND).to_owned(),
            product: cell(row, COL_PRODUCT).to_owned(),
            price: cell(row, COL_PRICE).to_owned(),
        };

        let key = (title.to_owned(), range.start, range.end);
        if let Some(&idx) = groups.get(&key) {
            events[idx].items.push(item);
        } else {
            groups.insert(key, events.len());
            events.push(NormalizedEvent {
                title: title.to_owned(),
                start: range.start,
                end: range.end,
                end_exclusive: range.end_exclusive(),
                description: cell(row, COL_DESCRIPTION).to_owned(),
                outlet,
                items: vec![item],
                thumbnail: cell(row, COL_THUMBNAIL).to_owned(),
                event_id: event_id.to_owned(),
            });
        }
    }

    report.events = events.len();
    tracing::info!(
        %outlet,
        received = report.received,
        events = report.events,
        malformed = report.malformed,
        invalid_date = report.invalid_date,
        unmapped = report.unmapped,
        "ingested outlet sheet"
    );

    Ingested { events, report }
}

fn is_usable(row: &[String]) -> bool {
    row.len() >= MIN_ROW_CELLS
        && !cell(row, COL_TITLE).trim().is_empty()
        && !cell(row, COL_PERIOD).trim().is_empty()
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map_or("", String::as_str)
}

#[cfg(test)]
#[path = "ingest_test.rs"]
mod tests;
