use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One of the three retail locations that partition every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Outlet {
    #[serde(rename = "송도", alias = "songdo")]
    Songdo,
    #[serde(rename = "김포", alias = "gimpo")]
    Gimpo,
    #[serde(rename = "스페이스원", alias = "spaceone")]
    SpaceOne,
}

impl Outlet {
    /// Every outlet, in featured-panel display order.
    pub const ALL: [Outlet; 3] = [Outlet::Songdo, Outlet::Gimpo, Outlet::SpaceOne];

    /// Korean display label, as written in the spreadsheet and on the site.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Outlet::Songdo => "송도",
            Outlet::Gimpo => "김포",
            Outlet::SpaceOne => "스페이스원",
        }
    }

    /// ASCII slug used in generated page paths.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Outlet::Songdo => "songdo",
            Outlet::Gimpo => "gimpo",
            Outlet::SpaceOne => "spaceone",
        }
    }
}

impl std::fmt::Display for Outlet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Outlet {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Outlet::ALL
            .into_iter()
            .find(|o| o.label() == trimmed || o.slug().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ConfigError::UnknownOutlet(s.to_string()))
    }
}

/// Outlet selection in the filter bar: everything, or a single outlet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutletFilter {
    #[default]
    All,
    Only(Outlet),
}

impl OutletFilter {
    #[must_use]
    pub fn matches(self, outlet: Outlet) -> bool {
        match self {
            OutletFilter::All => true,
            OutletFilter::Only(selected) => selected == outlet,
        }
    }
}

impl std::fmt::Display for OutletFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutletFilter::All => f.write_str("ALL"),
            OutletFilter::Only(outlet) => outlet.fmt(f),
        }
    }
}

impl FromStr for OutletFilter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(OutletFilter::All)
        } else {
            s.parse().map(OutletFilter::Only)
        }
    }
}

/// A spreadsheet tab that feeds one outlet's events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSource {
    pub outlet: Outlet,
    pub sheet: String,
}

#[derive(Debug, Deserialize)]
pub struct SourcesFile {
    pub sources: Vec<SheetSource>,
}

/// Load and validate the sheet source list from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_sources(path: &Path) -> Result<SourcesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SourcesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let sources_file: SourcesFile = serde_yaml::from_str(&content)?;

    validate_sources(&sources_file)?;

    Ok(sources_file)
}

fn validate_sources(sources_file: &SourcesFile) -> Result<(), ConfigError> {
    if sources_file.sources.is_empty() {
        return Err(ConfigError::Validation(
            "at least one sheet source is required".to_string(),
        ));
    }

    let mut seen_outlets = HashSet::new();
    let mut seen_sheets = HashSet::new();

    for source in &sources_file.sources {
        if source.sheet.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "sheet name for outlet '{}' must be non-empty",
                source.outlet
            )));
        }

        if !seen_outlets.insert(source.outlet) {
            return Err(ConfigError::Validation(format!(
                "duplicate outlet: '{}'",
                source.outlet
            )));
        }

        if !seen_sheets.insert(source.sheet.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate sheet: '{}'",
                source.sheet
            )));
        }
    }

    Ok(())
}
