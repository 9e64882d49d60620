//! Event normalization and filtering for the outlet promotions calendar.
//!
//! Raw sheet rows flow through [`ingest`] (which uses [`dates`] and
//! [`url_mapping`]) into a [`SessionCache`]; [`filter`] and [`highlight`]
//! derive views from it without mutating it.

pub mod dates;
pub mod demo;
pub mod filter;
pub mod highlight;
pub mod ingest;
pub mod links;
pub mod session;
pub mod url_mapping;

pub use dates::{resolve_range, DateRange};
pub use demo::demo_events;
pub use filter::{brands_available, derive_view, filter_events, visible, FilterState, FilterView};
pub use highlight::highlights;
pub use ingest::{ingest, IngestReport, Ingested, RawRow};
pub use links::{format_date_range, static_links, EventLink};
pub use session::{ClickOutcome, ClickSite, SessionCache, NOT_FOUND_NOTICE};
pub use url_mapping::{resolve, resolve_link, short_id, DetailLink, ResolutionPolicy};
