use std::path::Path;

use outlet_core::UrlMappingTable;

use crate::error::SheetsError;

/// Reads a `url-mapping.json` object from disk.
///
/// # Errors
///
/// Returns [`SheetsError::MappingFileIo`] if the file cannot be read, or
/// [`SheetsError::Deserialize`] if it is not a flat string→string object.
pub fn load_mapping_file(path: &Path) -> Result<UrlMappingTable, SheetsError> {
    let content = std::fs::read_to_string(path).map_err(|e| SheetsError::MappingFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| SheetsError::Deserialize {
        context: format!("mapping file {}", path.display()),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("outlet-sheets-{}-{name}", std::process::id()))
    }

    #[test]
    fn loads_mapping_from_disk() {
        let path = temp_path("ok.json");
        std::fs::write(&path, r#"{"abc123": "songdo-sale.html", "abc123_02": "songdo-sale-2.html"}"#)
            .unwrap();
        let table = load_mapping_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("abc123_02"), Some("songdo-sale-2.html"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_mapping_file(Path::new("/nonexistent/url-mapping.json")).unwrap_err();
        assert!(matches!(err, SheetsError::MappingFileIo { .. }));
    }

    #[test]
    fn non_object_is_deserialize_error() {
        let path = temp_path("bad.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        let err = load_mapping_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, SheetsError::Deserialize { .. }));
    }
}
