//! # Snapshot File
//!
//! Reads and writes the store as a single JSON file.
//!
//! ## Save Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  save(&store)                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  coop.json.tmp  ◄── write + flush + fsync                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  rename(coop.json.tmp → coop.json)   ← readers see old or new, never    │
//! │       │                                half a file                      │
//! │       └── on failure: remove coop.json.tmp, keep coop.json              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use coop_core::Store;

use crate::error::{PersistError, PersistResult};
use crate::snapshot::{Snapshot, SnapshotHeader, SnapshotRef};

/// Location of a saved store.
///
/// ## Example
/// ```rust,no_run
/// use coop_core::Store;
/// use coop_persist::SnapshotFile;
///
/// let file = SnapshotFile::new("./coop.json");
/// file.save(&Store::new())?;
/// let store = file.load()?;
/// # Ok::<(), coop_persist::PersistError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Sibling file the next save is written to before the rename.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    // =========================================================================
    // Load
    // =========================================================================

    /// Reads the store back, id counters included.
    ///
    /// ## Errors
    /// - `NotFound` if there is no file
    /// - `UnsupportedFormat` if the format tag is not ours
    /// - `Json` if the document is damaged
    pub fn load(&self) -> PersistResult<Store> {
        if !self.exists() {
            return Err(PersistError::NotFound(self.path.clone()));
        }

        let bytes = fs::read(&self.path).map_err(|e| PersistError::io(&self.path, e))?;

        let header: SnapshotHeader =
            serde_json::from_slice(&bytes).map_err(|e| PersistError::json(&self.path, e))?;
        header.check()?;

        let snapshot: Snapshot =
            serde_json::from_slice(&bytes).map_err(|e| PersistError::json(&self.path, e))?;
        debug!(saved_at = %snapshot.saved_at, "Snapshot parsed");

        let store = snapshot.into_store();
        info!(
            path = %self.path.display(),
            products = store.products().len(),
            members = store.members().len(),
            "Store loaded"
        );
        Ok(store)
    }

    /// Like [`load`](Self::load), but a missing file is `Ok(None)`.
    pub fn load_if_exists(&self) -> PersistResult<Option<Store>> {
        match self.load() {
            Ok(store) => Ok(Some(store)),
            Err(PersistError::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    // =========================================================================
    // Save
    // =========================================================================

    /// Writes the whole store, replacing any previous snapshot atomically.
    pub fn save(&self, store: &Store) -> PersistResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| PersistError::io(parent, e))?;
        }

        let temp_path = self.temp_path();
        if let Err(e) = self.write_temp(&temp_path, store) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            warn!(path = %self.path.display(), error = %e, "Rename failed, keeping previous snapshot");
            let _ = fs::remove_file(&temp_path);
            return Err(PersistError::io(&self.path, e));
        }

        info!(path = %self.path.display(), "Store saved");
        Ok(())
    }

    fn write_temp(&self, temp_path: &Path, store: &Store) -> PersistResult<()> {
        let file = File::create(temp_path).map_err(|e| PersistError::io(temp_path, e))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, &SnapshotRef::capture(store))
            .map_err(|e| PersistError::json(temp_path, e))?;
        writer.flush().map_err(|e| PersistError::io(temp_path, e))?;

        let file = writer
            .into_inner()
            .map_err(|e| PersistError::io(temp_path, e.into_error()))?;
        file.sync_all().map_err(|e| PersistError::io(temp_path, e))?;

        debug!(temp = %temp_path.display(), "Snapshot written");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
