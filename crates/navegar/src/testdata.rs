//! JSON test fixtures.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::NavResult;

/// Loads and saves JSON fixtures under the test-data directory
#[derive(Debug, Clone)]
pub struct TestData {
    dir: PathBuf,
}

impl TestData {
    /// Bind to a fixture directory
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load `{name}.json` into a typed value
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> NavResult<T> {
        let content = std::fs::read_to_string(self.fixture_path(name))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save a value as pretty-printed `{name}.json`
    pub fn save<T: Serialize>(&self, name: &str, value: &T) -> NavResult<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.fixture_path(name);
        std::fs::write(&path, serde_json::to_string_pretty(value)?)?;
        Ok(path)
    }

    fn fixture_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// The fixture directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
