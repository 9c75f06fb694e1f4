//! Where snapshots come from. Sources hand back a whole validated snapshot or an error,
//! never a partial reading.

use std::{fs, path::PathBuf};

use tracing::debug;

use crate::error::MetricsError;
use crate::types::MetricsSnapshot;

pub trait MetricsSource {
    fn snapshot(&mut self) -> Result<MetricsSnapshot, MetricsError>;
}

/// Always serves the same snapshot.
#[derive(Debug, Clone)]
pub struct StaticSource(MetricsSnapshot);

impl StaticSource {
    pub fn new(snapshot: MetricsSnapshot) -> Self {
        Self(snapshot)
    }

    pub fn demo() -> Self {
        Self(MetricsSnapshot::demo())
    }
}

impl MetricsSource for StaticSource {
    fn snapshot(&mut self) -> Result<MetricsSnapshot, MetricsError> {
        self.0.validate()?;
        Ok(self.0.clone())
    }
}

/// Reads a single JSON snapshot from disk on each call.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MetricsSource for FileSource {
    fn snapshot(&mut self) -> Result<MetricsSnapshot, MetricsError> {
        debug!(path = %self.path.display(), "reading snapshot");
        let data = fs::read_to_string(&self.path)
            .map_err(|e| MetricsError::Unavailable(format!("{}: {e}", self.path.display())))?;
        let snapshot: MetricsSnapshot = serde_json::from_str(&data)?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}

/// Source picked at startup from the resolved settings.
pub enum AnySource {
    Static(StaticSource),
    File(FileSource),
}

impl MetricsSource for AnySource {
    fn snapshot(&mut self) -> Result<MetricsSnapshot, MetricsError> {
        match self {
            AnySource::Static(s) => s.snapshot(),
            AnySource::File(s) => s.snapshot(),
        }
    }
}
