//! Load and save the report document on disk.

use super::defaults::default_document;
use super::types::ReportDocument;
use crate::error::{UpdateError, UpdateResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File-backed report document. Single writer, direct overwrite.
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document, falling back to the built-in seed when the file is
    /// missing, unreadable or not a valid report.
    pub fn load(&self) -> ReportDocument {
        match self.try_load() {
            Ok(doc) => {
                debug!("loaded report data from {}", self.path.display());
                doc
            }
            Err(UpdateError::Io { source, .. }) if source.kind() == ErrorKind::NotFound => {
                debug!(
                    "{} does not exist, starting from the default document",
                    self.path.display()
                );
                default_document()
            }
            Err(e) => {
                warn!("ignoring unusable report data: {e}");
                default_document()
            }
        }
    }

    /// Load the document, surfacing any read or parse error.
    pub fn try_load(&self) -> UpdateResult<ReportDocument> {
        let raw = fs::read_to_string(&self.path).map_err(|e| UpdateError::io(&self.path, e))?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write the document with 2-space indentation, creating parent
    /// directories as needed.
    pub fn save(&self, doc: &ReportDocument) -> UpdateResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| UpdateError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, json).map_err(|e| UpdateError::io(&self.path, e))?;
        debug!("wrote report data to {}", self.path.display());
        Ok(())
    }
}
