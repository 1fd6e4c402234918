//! JSON file scenario store.
//!
//! One pretty-printed JSON file per key under a root directory. Keys are
//! restricted to `[A-Za-z0-9._-]` and may not contain `..`, so a key can
//! never escape the root.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::application::dto::CalculatorState;
use crate::application::ports::{ScenarioStorePort, StoreError};

/// File-backed implementation of [`ScenarioStorePort`].
#[derive(Debug, Clone)]
pub struct JsonFileScenarioStore {
    root: PathBuf,
}

impl JsonFileScenarioStore {
    /// Create a store rooted at `root`. The directory is created on first save.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File path for a key.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn validate_key(key: &str) -> Result<(), StoreError> {
    let invalid = |reason: &str| StoreError::InvalidKey {
        key: key.to_string(),
        reason: reason.to_string(),
    };

    if key.is_empty() {
        return Err(invalid("key is empty"));
    }
    if key.contains("..") {
        return Err(invalid("key contains '..'"));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
    {
        return Err(invalid("key may only contain ASCII letters, digits, '.', '_' or '-'"));
    }
    Ok(())
}

impl ScenarioStorePort for JsonFileScenarioStore {
    fn save(&self, key: &str, state: &CalculatorState) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let io_err = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.root).map_err(io_err)?;
        let json = serde_json::to_string_pretty(state).map_err(|source| {
            StoreError::Serialization {
                key: key.to_string(),
                source,
            }
        })?;

        // Atomic replace via a sibling temp file
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)?;

        tracing::debug!(path = %path.display(), "scenario written");
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<CalculatorState>, StoreError> {
        let path = self.path_for(key)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    key: key.to_string(),
                    source,
                });
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| StoreError::Serialization {
                key: key.to_string(),
                source,
            })
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }
}
