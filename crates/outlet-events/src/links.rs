//! Crawlable link list: one anchor per event, independent of the calendar.

use chrono::{Datelike, NaiveDate};
use outlet_core::{NormalizedEvent, UrlMappingTable};
use serde::Serialize;

use crate::url_mapping::{resolve_link, ResolutionPolicy};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventLink {
    pub href: String,
    pub label: String,
}

/// `"M.D ~ M.D"` without zero padding, e.g. `"12.20 ~ 1.5"`.
#[must_use]
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}.{} ~ {}.{}",
        start.month(),
        start.day(),
        end.month(),
        end.day()
    )
}

/// One link per event in order. Unmapped ids get the synthesized
/// `/pages/event-<shortId>.html` path; events with a blank id are skipped.
#[must_use]
pub fn static_links(events: &[NormalizedEvent], table: &UrlMappingTable) -> Vec<EventLink> {
    events
        .iter()
        .filter_map(|event| {
            let link = resolve_link(&event.event_id, table, ResolutionPolicy::Synthesize)?;
            Some(EventLink {
                href: link.path,
                label: format!(
                    "{} ({})",
                    event.display_title(),
                    format_date_range(event.start, event.end)
                ),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use outlet_core::{EventItem, Outlet};

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(event_id: &str) -> NormalizedEvent {
        NormalizedEvent {
            title: "연말 세일".to_owned(),
            start: date(2026, 12, 20),
            end: date(2027, 1, 5),
            end_exclusive: date(2027, 1, 6),
            description: String::new(),
            outlet: Outlet::Gimpo,
            items: vec![EventItem {
                brand: "K2".to_owned(),
                product: String::new(),
                price: String::new(),
            }],
            thumbnail: String::new(),
            event_id: event_id.to_owned(),
        }
    }

    #[test]
    fn formats_without_zero_padding() {
        assert_eq!(
            format_date_range(date(2026, 12, 20), date(2027, 1, 5)),
            "12.20 ~ 1.5"
        );
    }

    #[test]
    fn mapped_event_links_to_mapped_page() {
        let table: UrlMappingTable = [("abc123", "gimpo-year-end-sale.html")].into_iter().collect();
        let links = static_links(&[event("4f6e-abc123")], &table);
        assert_eq!(
            links,
            vec![EventLink {
                href: "/pages/gimpo-year-end-sale.html".to_owned(),
                label: "[김포] 연말 세일 (12.20 ~ 1.5)".to_owned(),
            }]
        );
    }

    #[test]
    fn unmapped_event_gets_synthesized_link() {
        let links = static_links(&[event("4f6e-abc123")], &UrlMappingTable::default());
        assert_eq!(links[0].href, "/pages/event-abc123.html");
    }

    #[test]
    fn blank_event_id_is_skipped() {
        let links = static_links(&[event("")], &UrlMappingTable::default());
        assert!(links.is_empty());
    }
}
