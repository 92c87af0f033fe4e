use super::Backend;
use crate::error::Result;
use crate::model::Task;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Production backend: one JSON file holding the full task collection as an
/// ordered array of `{id, title, completed}` records, rewritten whole on
/// every save.
///
/// Content that exists but fails to parse is treated as no prior state, so
/// a damaged task file never prevents the application from starting.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode the file content, record by record. Any structural failure or
    /// any single malformed record discards the whole file.
    fn decode(content: &str) -> Option<Vec<Task>> {
        let records: Vec<Value> = serde_json::from_str(content).ok()?;
        records
            .into_iter()
            .map(|record| Task::from_record(record).ok())
            .collect()
    }
}

impl Backend for FileBackend {
    fn load(&self) -> Result<Vec<Task>> {
        if !self.path.is_file() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(Self::decode(&content).unwrap_or_default())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
