//! Outlet/brand filtering over the session's event list.
//!
//! The event list is never mutated; every view is re-derived from
//! [`FilterState`].

use std::collections::BTreeSet;

use outlet_core::{NormalizedEvent, OutletFilter};

/// Current filter-bar selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    outlet: OutletFilter,
    /// Empty means no brand restriction.
    brands: BTreeSet<String>,
}

impl FilterState {
    #[must_use]
    pub fn outlet(&self) -> OutletFilter {
        self.outlet
    }

    #[must_use]
    pub fn brands(&self) -> &BTreeSet<String> {
        &self.brands
    }

    /// Switches outlet. Any brand selection is cleared, since brand choices
    /// are scoped to the outlet.
    pub fn select_outlet(&mut self, outlet: OutletFilter) {
        self.outlet = outlet;
        self.brands.clear();
    }

    /// Adds `brand` to the selection, or removes it if already selected.
    /// A blank brand is the "all brands" button and clears the selection.
    pub fn toggle_brand(&mut self, brand: &str) {
        if brand.trim().is_empty() {
            self.brands.clear();
        } else if !self.brands.remove(brand) {
            self.brands.insert(brand.to_owned());
        }
    }

    pub fn clear_brands(&mut self) {
        self.brands.clear();
    }
}

/// What the calendar and brand bar show after a filter action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterView<'a> {
    pub visible: Vec<&'a NormalizedEvent>,
    pub brands_available: Vec<String>,
}

/// Events passing the outlet filter and, if any brands are selected, having
/// at least one item from one of them.
#[must_use]
pub fn visible<'a>(
    events: &'a [NormalizedEvent],
    outlet: OutletFilter,
    brands: &BTreeSet<String>,
) -> Vec<&'a NormalizedEvent> {
    events
        .iter()
        .filter(|e| outlet.matches(e.outlet))
        .filter(|e| brands.is_empty() || e.items.iter().any(|item| brands.contains(&item.brand)))
        .collect()
}

/// Distinct non-blank brands among events at `outlet`, in first-seen order.
/// Independent of the current brand selection.
#[must_use]
pub fn brands_available(events: &[NormalizedEvent], outlet: OutletFilter) -> Vec<String> {
    let mut seen = BTreeSet::new();
    events
        .iter()
        .filter(|e| outlet.matches(e.outlet))
        .flat_map(|e| e.brands())
        .filter(|b| seen.insert(*b))
        .map(str::to_owned)
        .collect()
}

/// Derives the view for `state` without changing it.
#[must_use]
pub fn derive_view<'a>(events: &'a [NormalizedEvent], state: &FilterState) -> FilterView<'a> {
    FilterView {
        visible: visible(events, state.outlet, &state.brands),
        brands_available: brands_available(events, state.outlet),
    }
}

/// Applies an outlet change and returns the new view. The brand selection is
/// always empty afterwards.
pub fn filter_events<'a>(
    events: &'a [NormalizedEvent],
    state: &mut FilterState,
    outlet: OutletFilter,
) -> FilterView<'a> {
    state.select_outlet(outlet);
    tracing::debug!(%outlet, "outlet filter changed");
    derive_view(events, state)
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
