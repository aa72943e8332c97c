use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::layout_map::LayoutMap;
use crate::resolver::{KeyboardLayoutSource, LayoutSourceError};

/// A layout source backed by a JSON file of the form
/// `{"KeyA": "q", "Digit0": "à", ...}`.
///
/// The file is read with `tokio::fs` on every query, so edits to the file are
/// picked up by the next resolution and nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct JsonFileLayoutSource {
    path: PathBuf,
}

impl JsonFileLayoutSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl KeyboardLayoutSource for JsonFileLayoutSource {
    async fn layout_map(&self) -> Result<LayoutMap, LayoutSourceError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| LayoutSourceError::Io {
                path: self.path.clone(),
                source,
            })?;

        let map: LayoutMap =
            serde_json::from_str(&content).map_err(|source| LayoutSourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!("loaded {} layout entries from {}", map.len(), self.path.display());
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uuid::Uuid;

    /// Writes `content` to `name` inside a fresh directory under the system
    /// temp directory.  Returns `(dir, path)`; callers remove `dir`.
    fn temp_layout_file(name: &str, content: &str) -> (PathBuf, PathBuf) {
        let dir = std::env::temp_dir().join(format!("keylabel_test_{}", Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[tokio::test]
    async fn test_reads_layout_map_from_file() {
        // Arrange
        let (dir, path) = temp_layout_file("azerty.json", r#"{"KeyQ": "a", "KeyA": "q"}"#);
        let source = JsonFileLayoutSource::new(&path);

        // Act
        let map = source.layout_map().await.unwrap();

        // Assert
        assert_eq!(map.get("KeyQ"), Some("a"));
        assert_eq!(map.get("KeyA"), Some("q"));

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_rereads_file_on_every_query() {
        let (dir, path) = temp_layout_file("changing.json", r#"{"KeyQ": "q"}"#);
        let source = JsonFileLayoutSource::new(&path);
        assert_eq!(source.layout_map().await.unwrap().get("KeyQ"), Some("q"));

        std::fs::write(&path, r#"{"KeyQ": "a"}"#).unwrap();

        assert_eq!(source.layout_map().await.unwrap().get("KeyQ"), Some("a"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let source = JsonFileLayoutSource::new("/definitely/not/here/layout.json");

        let err = source.layout_map().await.unwrap_err();

        assert!(matches!(err, LayoutSourceError::Io { .. }));
        assert!(err.to_string().contains("layout.json"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_parse_error() {
        let (dir, path) = temp_layout_file("broken.json", "{ not json");
        let source = JsonFileLayoutSource::new(&path);

        let err = source.layout_map().await.unwrap_err();

        assert!(matches!(err, LayoutSourceError::Parse { .. }));

        std::fs::remove_dir_all(&dir).ok();
    }
}
