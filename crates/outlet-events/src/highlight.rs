//! Featured-panel selection: currently running promotions per outlet.

use chrono::NaiveDate;
use outlet_core::{NormalizedEvent, Outlet};

/// Featured slots per outlet.
pub const MAX_PER_OUTLET: usize = 2;

/// Up to [`MAX_PER_OUTLET`] events per outlet that are active on `today`,
/// taken in input order. Outlets appear in [`Outlet::ALL`] order.
#[must_use]
pub fn highlights(events: &[NormalizedEvent], today: NaiveDate) -> Vec<&NormalizedEvent> {
    Outlet::ALL
        .into_iter()
        .flat_map(move |outlet| {
            events
                .iter()
                .filter(move |e| e.outlet == outlet && e.is_active_on(today))
                .take(MAX_PER_OUTLET)
        })
        .collect()
}
