//! Per-load cache of normalized events and the mapping table.

use chrono::NaiveDate;
use outlet_core::{NormalizedEvent, Outlet, UrlMappingTable};

use crate::filter::{derive_view, FilterState, FilterView};
use crate::highlight::highlights;
use crate::ingest::{ingest, IngestReport, RawRow};
use crate::links::{static_links, EventLink};
use crate::url_mapping::{resolve_link, ResolutionPolicy};

/// Notice shown when a clicked event has no detail page.
pub const NOT_FOUND_NOTICE: &str = "상세 페이지를 찾을 수 없습니다.";

/// Where a click came from. The calendar only opens verified pages; the
/// featured panel falls back to a synthesized path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickSite {
    Calendar,
    Highlight,
}

impl ClickSite {
    fn policy(self) -> ResolutionPolicy {
        match self {
            ClickSite::Calendar => ResolutionPolicy::FailClosed,
            ClickSite::Highlight => ResolutionPolicy::Synthesize,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Open { path: String },
    NotFound { notice: &'static str },
}

/// Immutable result of one load: every outlet's events plus the table they
/// were resolved against.
#[derive(Debug, Clone, Default)]
pub struct SessionCache {
    events: Vec<NormalizedEvent>,
    mapping: UrlMappingTable,
    reports: Vec<(Outlet, IngestReport)>,
}

impl SessionCache {
    /// Ingests each outlet's rows against `mapping` and concatenates the
    /// results in the given outlet order.
    #[must_use]
    pub fn from_sheets(
        sheets: Vec<(Outlet, Vec<RawRow>)>,
        mapping: UrlMappingTable,
        today: NaiveDate,
    ) -> Self {
        let mut events = Vec::new();
        let mut reports = Vec::with_capacity(sheets.len());

        for (outlet, rows) in sheets {
            let ingested = ingest(&rows, outlet, &mapping, today);
            events.extend(ingested.events);
            reports.push((outlet, ingested.report));
        }

        tracing::info!(
            total_events = events.len(),
            mapping_entries = mapping.len(),
            "session loaded"
        );

        Self {
            events,
            mapping,
            reports,
        }
    }

    /// Wraps an already-normalized event list, e.g. the demo set.
    #[must_use]
    pub fn from_events(events: Vec<NormalizedEvent>, mapping: UrlMappingTable) -> Self {
        Self {
            events,
            mapping,
            reports: Vec::new(),
        }
    }

    #[must_use]
    pub fn events(&self) -> &[NormalizedEvent] {
        &self.events
    }

    #[must_use]
    pub fn mapping(&self) -> &UrlMappingTable {
        &self.mapping
    }

    #[must_use]
    pub fn reports(&self) -> &[(Outlet, IngestReport)] {
        &self.reports
    }

    #[must_use]
    pub fn view(&self, state: &FilterState) -> FilterView<'_> {
        derive_view(&self.events, state)
    }

    #[must_use]
    pub fn highlights(&self, today: NaiveDate) -> Vec<&NormalizedEvent> {
        highlights(&self.events, today)
    }

    #[must_use]
    pub fn static_links(&self) -> Vec<EventLink> {
        static_links(&self.events, &self.mapping)
    }

    /// Resolves a click on `event_id` under the policy of `site`.
    #[must_use]
    pub fn click(&self, event_id: &str, site: ClickSite) -> ClickOutcome {
        match resolve_link(event_id, &self.mapping, site.policy()) {
            Some(link) => {
                if link.synthesized {
                    tracing::debug!(event_id, path = %link.path, "using synthesized detail path");
                }
                ClickOutcome::Open { path: link.path }
            }
            None => {
                tracing::warn!(event_id, ?site, "clicked event has no detail page");
                ClickOutcome::NotFound {
                    notice: NOT_FOUND_NOTICE,
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
