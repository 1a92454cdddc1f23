//! # Snapshot Document
//!
//! The on-disk shape of a saved store.
//!
//! ## Layout
//! ```text
//! {
//!   "format":   "coop-store/1",           ← checked before anything else
//!   "saved_at": "2026-10-19T14:03:11Z",
//!   "counters": { "members": 5, "orders": 22 },
//!   "store": {
//!     "products": [ { "id": "P1", "name": "Eggs 12pk", "price": 450, ... } ],
//!     "members":  [ { "id": "M1", ..., "transactions": [ ... ] } ],
//!     "orders":   [ { "id": "O1", "product_id": "P1", "outstanding": true } ]
//!   }
//! }
//! ```
//!
//! Counters come first so a reader can restore id generation without
//! walking the aggregate. Money is stored as integer cents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use coop_core::{IdCounters, Store};

use crate::error::{PersistError, PersistResult};

/// Format tag written into every snapshot.
pub const SNAPSHOT_FORMAT: &str = "coop-store/1";

/// Borrowed view written to disk, so saving never clones the store.
#[derive(Debug, Serialize)]
pub(crate) struct SnapshotRef<'a> {
    pub format: &'static str,
    pub saved_at: DateTime<Utc>,
    pub counters: IdCounters,
    pub store: &'a Store,
}

impl<'a> SnapshotRef<'a> {
    pub fn capture(store: &'a Store) -> Self {
        SnapshotRef {
            format: SNAPSHOT_FORMAT,
            saved_at: Utc::now(),
            counters: store.counters(),
            store,
        }
    }
}

/// Only the tag, read first so an unknown format is reported as such
/// instead of as whatever field fails to parse.
#[derive(Debug, Deserialize)]
pub(crate) struct SnapshotHeader {
    pub format: String,
}

impl SnapshotHeader {
    pub fn check(&self) -> PersistResult<()> {
        if self.format != SNAPSHOT_FORMAT {
            return Err(PersistError::UnsupportedFormat {
                found: self.format.clone(),
                expected: SNAPSHOT_FORMAT,
            });
        }
        Ok(())
    }
}

/// A snapshot read back from disk.
#[derive(Debug, Deserialize)]
pub struct Snapshot {
    pub format: String,
    pub saved_at: DateTime<Utc>,
    pub counters: IdCounters,
    pub store: Store,
}

impl Snapshot {
    /// The store with its id counters restored.
    pub fn into_store(self) -> Store {
        self.store.with_counters(self.counters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coop_core::testbed;

    #[test]
    fn test_counters_serialized_ahead_of_store() {
        let mut store = Store::new();
        testbed::populate(&mut store).unwrap();

        let json = serde_json::to_string(&SnapshotRef::capture(&store)).unwrap();
        let counters_at = json.find("\"counters\"").unwrap();
        let store_at = json.find("\"store\"").unwrap();

        assert!(json.starts_with("{\"format\":\"coop-store/1\""));
        assert!(counters_at < store_at);
        assert!(json.contains("\"counters\":{\"members\":5,\"orders\":20}"));
    }

    #[test]
    fn test_header_check() {
        let ok: SnapshotHeader = serde_json::from_str(r#"{"format":"coop-store/1"}"#).unwrap();
        assert!(ok.check().is_ok());

        let old: SnapshotHeader =
            serde_json::from_str(r#"{"format":"coop-store/0","store":null}"#).unwrap();
        assert!(matches!(
            old.check(),
            Err(PersistError::UnsupportedFormat { found, .. }) if found == "coop-store/0"
        ));
    }
}
