use serde::Deserialize;

/// Body of `GET /v4/spreadsheets/{id}/values/{range}`.
///
/// The API omits `values` entirely when the range is empty, and trims
/// trailing empty cells from each row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<String>>,
}
