//! # coop-persist: Snapshot Storage for the Co-op Store
//!
//! Saves the whole [`Store`](coop_core::Store) to one JSON file and reads it
//! back. There is no incremental storage: every save rewrites the file.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Co-op Store Data Flow                            │
//! │                                                                         │
//! │  Console menu (13: save, startup: load)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   coop-persist (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ SnapshotFile  │    │   Snapshot    │    │ PersistError │  │   │
//! │  │   │  (file.rs)    │───►│ (snapshot.rs) │    │  (error.rs)  │  │   │
//! │  │   │ load / save   │    │ format tag    │    │              │  │   │
//! │  │   │ temp + rename │    │ counters      │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/coop-store/coop.json (or --data-file)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod file;
pub mod snapshot;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{PersistError, PersistResult};
pub use file::SnapshotFile;
pub use snapshot::{Snapshot, SNAPSHOT_FORMAT};
