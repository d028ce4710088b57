//! Whole-document persistence
//!
//! - `DocumentStore` trait defines the load/save interface
//! - `JsonFileStore` keeps the document in a local JSON file
//! - `MemoryStore` keeps it in process (tests, throwaway sessions)
//!
//! Loads always run legacy migration before handing the document back.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::migrate::migrate_document;
use crate::models::Document;

/// Storage backend for the application document
pub trait DocumentStore: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Load the document. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Document>>;

    /// Replace the stored document
    fn save(&self, doc: &Document) -> Result<()>;

    /// Set aside a stored document that failed to load so the next save
    /// does not destroy it. Returns where the copy went, if one was made.
    fn backup_unreadable(&self) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}

/// JSON file on local disk
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<data file>.bak`, next to the data file
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }
}

impl DocumentStore for JsonFileStore {
    fn name(&self) -> &str {
        "json-file"
    }

    fn load(&self) -> Result<Option<Document>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No data file yet");
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let mut doc: Document = serde_json::from_str(&content)?;
        migrate_document(&mut doc);

        debug!(
            path = %self.path.display(),
            areas = doc.roda_scores.len(),
            goals = doc.smart_goals.len(),
            "Loaded data file"
        );
        Ok(Some(doc))
    }

    fn save(&self, doc: &Document) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
            info!("Created data directory: {}", dir.display());
        }

        // Write beside the target, then rename over it
        let mut tmp = NamedTempFile::new_in(&dir)?;
        serde_json::to_writer_pretty(&mut tmp, doc)?;
        tmp.write_all(b"\n")?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        debug!(path = %self.path.display(), "Saved data file");
        Ok(())
    }

    fn backup_unreadable(&self) -> Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let backup = self.backup_path();
        fs::copy(&self.path, &backup)?;
        info!(backup = %backup.display(), "Copied unreadable data file");
        Ok(Some(backup))
    }
}

/// In-memory store
#[derive(Default)]
pub struct MemoryStore {
    document: Mutex<Option<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a previously saved document
    pub fn with_document(doc: Document) -> Self {
        Self {
            document: Mutex::new(Some(doc)),
        }
    }
}

impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn load(&self) -> Result<Option<Document>> {
        let guard = self
            .document
            .lock()
            .map_err(|_| Error::Store("memory store lock poisoned".to_string()))?;
        Ok(guard.clone().map(|mut doc| {
            migrate_document(&mut doc);
            doc
        }))
    }

    fn save(&self, doc: &Document) -> Result<()> {
        let mut guard = self
            .document
            .lock()
            .map_err(|_| Error::Store("memory store lock poisoned".to_string()))?;
        *guard = Some(doc.clone());
        Ok(())
    }
}
