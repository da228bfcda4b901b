//! # Storage Layer
//!
//! The [`DataStore`] trait abstracts where the inventory lives, so commands
//! can run against the real file or an in-memory buffer in tests.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: one JSON file, by default `storage_data.json` next to
//!   the executable. Writes go through a temporary sibling file and a rename.
//! - [`memory::InMemoryStore`]: keeps the serialized JSON text in memory, so
//!   tests can feed it corrupt content or make writes fail.
//!
//! ## Storage Format
//!
//! ```text
//! {
//!     "厨房": {
//!         "橱柜": [
//!             "盘子",
//!             "碗"
//!         ]
//!     }
//! }
//! ```
//!
//! Four-space indentation, keys in sorted order, non-ASCII text written as-is.
//!
//! ## Load Policy
//!
//! Every operation re-reads the whole file. [`DataStore::load`] never fails
//! because of bad content: a corrupt or vanished file is reset to an empty
//! inventory and a [`StoreNotice`] tells the caller what happened. The only
//! error it returns is a file that cannot be created at all.

use crate::error::{InventoryError, Result};
use crate::model::Inventory;
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

pub mod fs;
pub mod memory;

/// Something the user should hear about after a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreNotice {
    /// Content was unreadable and has been replaced with an empty inventory.
    Corrupted,
    /// The file could not be read for a reason other than its content.
    ReadFailed(String),
    /// Resetting a corrupt file to an empty inventory failed.
    ResetFailed(String),
}

impl fmt::Display for StoreNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreNotice::Corrupted => write!(f, "数据文件格式错误或损坏，已创建新文件。"),
            StoreNotice::ReadFailed(reason) => write!(f, "读取数据文件时发生错误: {}", reason),
            StoreNotice::ResetFailed(reason) => write!(f, "重置数据文件时发生错误: {}", reason),
        }
    }
}

/// Result of [`DataStore::load`].
#[derive(Debug, Default)]
pub struct Loaded {
    pub inventory: Inventory,
    pub notices: Vec<StoreNotice>,
}

/// Abstract interface for inventory persistence.
pub trait DataStore {
    /// Write an empty inventory if nothing is stored yet.
    ///
    /// Failure here is fatal: [`InventoryError::StoreUnavailable`].
    fn ensure_exists(&mut self) -> Result<()>;

    /// Read and parse the stored inventory without any recovery.
    fn read(&self) -> Result<Inventory>;

    /// Overwrite the stored inventory.
    fn save(&mut self, inventory: &Inventory) -> Result<()>;

    /// Overwrite the stored inventory with an empty one.
    fn clear(&mut self) -> Result<()>;

    /// Load with self-healing: corrupt content is reset, other read failures
    /// degrade to an empty inventory.
    fn load(&mut self) -> Result<Loaded> {
        self.ensure_exists()?;

        match self.read() {
            Ok(inventory) => {
                debug!(rooms = inventory.rooms.len(), "inventory loaded");
                Ok(Loaded {
                    inventory,
                    notices: Vec::new(),
                })
            }
            Err(e) if e.is_corruption() => {
                warn!(error = %e, "data file is corrupt, resetting");
                let mut notices = vec![StoreNotice::Corrupted];
                if let Err(reset) = self.clear() {
                    warn!(error = %reset, "failed to reset data file");
                    notices.push(StoreNotice::ResetFailed(reset.to_string()));
                }
                Ok(Loaded {
                    inventory: Inventory::new(),
                    notices,
                })
            }
            Err(e) => {
                warn!(error = %e, "failed to read data file");
                Ok(Loaded {
                    inventory: Inventory::new(),
                    notices: vec![StoreNotice::ReadFailed(e.to_string())],
                })
            }
        }
    }
}

/// Serialize with 4-space indentation. serde_json leaves non-ASCII unescaped.
pub fn to_pretty_json(inventory: &Inventory) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    inventory.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| InventoryError::InvalidData(e.to_string()))
}

/// Parse stored text and check the key invariants.
pub fn from_json(content: &str) -> Result<Inventory> {
    let inventory: Inventory = serde_json::from_str(content)?;
    inventory.validate()?;
    Ok(inventory)
}
