//! Config files: a relative path plus a JSON payload, persisted under a
//! workspace root directory.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Errors from reading or writing an artifact file.
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("artifact I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("artifact is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One serialized configuration artifact.
///
/// The path is always relative to the workspace root, e.g.
/// `server/policy-config.json`. The artifact exists only transiently: it is
/// created per save and consumed per load.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: String,
    pub data: Value,
}

impl ConfigFile {
    pub fn new(path: impl Into<String>, data: Value) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }

    /// Resolve the file's content from disk into `data`.
    pub fn load(&mut self, root: &Path) -> Result<(), ArtifactError> {
        let file = File::open(root.join(&self.path))?;
        self.data = serde_json::from_reader(BufReader::new(file))?;
        Ok(())
    }

    /// Write `data` to disk, creating parent directories as needed.
    pub fn save(&self, root: &Path) -> Result<(), ArtifactError> {
        let target = root.join(&self.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(target)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let root = tempfile::tempdir().unwrap();
        let data = serde_json::json!({"mappings": [{"name": "m1"}]});
        let file = ConfigFile::new("server/policy-config.json", data.clone());
        file.save(root.path()).unwrap();

        let mut loaded = ConfigFile::new("server/policy-config.json", Value::Null);
        loaded.load(root.path()).unwrap();
        assert_eq!(loaded.data, data);
    }

    #[test]
    fn load_of_missing_file_is_an_io_error() {
        let root = tempfile::tempdir().unwrap();
        let mut file = ConfigFile::new("server/policy-config.json", Value::Null);
        assert!(matches!(
            file.load(root.path()),
            Err(ArtifactError::Io(_))
        ));
    }
}
