//! Event identifier → detail-page resolution.
//!
//! Sheet identifiers drift from the ids the page generator used: some rows
//! carry a full UUID while the table is keyed by its last segment, and
//! duplicated pages are suffixed `_02`. Resolution tries a fixed sequence of
//! lookups and stops at the first hit.

use outlet_core::UrlMappingTable;

/// Separator between UUID groups; the short id is the text after the last one.
const SHORT_ID_SEPARATOR: char = '-';

/// Suffix marking an alternate page for the same logical event.
const VARIANT_SUFFIX: &str = "_02";

/// Prefix of every detail-page path.
pub const PAGES_PREFIX: &str = "/pages/";

/// A single lookup attempt: `(identifier, table) -> filename`.
type Strategy = for<'t> fn(&str, &'t UrlMappingTable) -> Option<&'t str>;

/// Lookups in the order they are tried.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("direct", direct),
    ("short_id", by_short_id),
    ("strip_variant", strip_variant),
    ("add_variant", add_variant),
];

/// What to do when no strategy matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPolicy {
    /// No path at all. Used by ingestion: an event without a verified page is dropped.
    FailClosed,
    /// Fall back to `/pages/event-<shortId>.html`.
    Synthesize,
}

/// A resolved detail-page path and whether it came from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailLink {
    pub path: String,
    /// `true` when the path was synthesized from the short id rather than found.
    pub synthesized: bool,
}

/// The part of `identifier` after its last `-`, or the whole identifier.
#[must_use]
pub fn short_id(identifier: &str) -> &str {
    identifier
        .rsplit_once(SHORT_ID_SEPARATOR)
        .map_or(identifier, |(_, tail)| tail)
}

/// Resolves `identifier` to a filename using the first matching strategy.
///
/// Returns `None` for an empty identifier or when no strategy matches, which
/// is always the case for an empty table.
#[must_use]
pub fn resolve<'t>(identifier: &str, table: &'t UrlMappingTable) -> Option<&'t str> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return None;
    }

    STRATEGIES.iter().find_map(|(name, strategy)| {
        let hit = strategy(identifier, table);
        if hit.is_some() {
            tracing::trace!(identifier, strategy = *name, "mapping resolved");
        }
        hit
    })
}

/// Resolves `identifier` to a full `/pages/...` path under `policy`.
#[must_use]
pub fn resolve_link(
    identifier: &str,
    table: &UrlMappingTable,
    policy: ResolutionPolicy,
) -> Option<DetailLink> {
    if let Some(filename) = resolve(identifier, table) {
        return Some(DetailLink {
            path: format!("{PAGES_PREFIX}{filename}"),
            synthesized: false,
        });
    }

    match policy {
        ResolutionPolicy::FailClosed => None,
        ResolutionPolicy::Synthesize => {
            let short = short_id(identifier.trim());
            if short.is_empty() {
                return None;
            }
            Some(DetailLink {
                path: format!("{PAGES_PREFIX}event-{short}.html"),
                synthesized: true,
            })
        }
    }
}

fn direct<'t>(identifier: &str, table: &'t UrlMappingTable) -> Option<&'t str> {
    table.get(identifier)
}

fn by_short_id<'t>(identifier: &str, table: &'t UrlMappingTable) -> Option<&'t str> {
    let short = short_id(identifier);
    if short == identifier {
        return None;
    }
    table.get(short)
}

fn strip_variant<'t>(identifier: &str, table: &'t UrlMappingTable) -> Option<&'t str> {
    short_id(identifier)
        .strip_suffix(VARIANT_SUFFIX)
        .and_then(|base| table.get(base))
}

fn add_variant<'t>(identifier: &str, table: &'t UrlMappingTable) -> Option<&'t str> {
    let short = short_id(identifier);
    if short.ends_with(VARIANT_SUFFIX) {
        return None;
    }
    table.get(&format!("{short}{VARIANT_SUFFIX}"))
}
