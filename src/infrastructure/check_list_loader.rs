//! Check list loading
//!
//! The check list is a JSON array of selector strings on disk.

use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

use crate::domain::check_list::CheckList;
use crate::infrastructure::grader_error::{GraderError, GraderResult};

/// Fail fast when the check list file is absent, before anything is parsed
pub fn ensure_exists(path: &Path) -> GraderResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(GraderError::ChecksFileMissing {
            path: path.to_path_buf(),
        })
    }
}

/// Read and decode the check list at `path`
pub async fn load(path: &Path) -> GraderResult<CheckList> {
    debug!("Reading check list from {:?}", path);

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| GraderError::io(path, e))?;

    let selectors: Vec<String> =
        serde_json::from_str(&content).map_err(|source| GraderError::InvalidCheckList {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded {} selectors from {:?}", selectors.len(), path);
    Ok(CheckList::new(selectors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_exists_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checks.json");
        let err = ensure_exists(&path).unwrap_err();
        assert!(matches!(err, GraderError::ChecksFileMissing { .. }));
    }

    #[tokio::test]
    async fn test_load_keeps_order_and_duplicates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checks.json");
        std::fs::write(&path, r#"["h1", "a[href]", "h1", ".nav > li"]"#).unwrap();

        ensure_exists(&path).unwrap();
        let checks = load(&path).await.unwrap();
        assert_eq!(
            checks.selectors(),
            ["h1", "a[href]", "h1", ".nav > li"].map(String::from)
        );
    }

    #[tokio::test]
    async fn test_load_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checks.json");
        std::fs::write(&path, "[]").unwrap();

        let checks = load(&path).await.unwrap();
        assert!(checks.is_empty());
    }

    #[tokio::test]
    async fn test_load_rejects_non_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checks.json");
        std::fs::write(&path, r#"{"h1": true}"#).unwrap();

        let err = load(&path).await.unwrap_err();
        assert!(matches!(err, GraderError::InvalidCheckList { .. }));
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("checks.json");
        std::fs::write(&path, r#"["h1", "#).unwrap();

        let err = load(&path).await.unwrap_err();
        assert!(matches!(err, GraderError::InvalidCheckList { .. }));
    }
}
