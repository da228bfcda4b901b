use super::{from_json, to_pretty_json, DataStore};
use crate::error::{InventoryError, Result};
use crate::model::Inventory;
use std::io;

/// In-memory storage for testing.
///
/// Holds the serialized text rather than the parsed inventory, so the same
/// load policy that guards the real file applies here too.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    contents: Option<String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw stored text, valid or not.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            fail_writes: false,
        }
    }

    /// Make every write fail with a permission error.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    fn write(&mut self, content: String) -> Result<()> {
        if self.fail_writes {
            return Err(InventoryError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        self.contents = Some(content);
        Ok(())
    }
}

impl DataStore for InMemoryStore {
    fn ensure_exists(&mut self) -> Result<()> {
        if self.contents.is_none() {
            let empty = to_pretty_json(&Inventory::new())?;
            self.write(empty).map_err(|e| InventoryError::StoreUnavailable {
                path: "<memory>".into(),
                source: io::Error::other(e.to_string()),
            })?;
        }
        Ok(())
    }

    fn read(&self) -> Result<Inventory> {
        let content = self.contents.as_deref().ok_or_else(|| {
            InventoryError::Io(io::Error::new(io::ErrorKind::NotFound, "no stored data"))
        })?;
        from_json(content)
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        let content = to_pretty_json(inventory)?;
        self.write(content)
    }

    fn clear(&mut self) -> Result<()> {
        self.save(&Inventory::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        inventory: Inventory,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                inventory: Inventory::new(),
            }
        }

        pub fn with_items(mut self, room: &str, storage: &str, items: &[&str]) -> Self {
            self.inventory
                .storage_mut(room, storage)
                .extend(items.iter().map(|i| i.to_string()));
            self.store.save(&self.inventory).unwrap();
            self
        }

        /// A kitchen cupboard with three items.
        pub fn with_kitchen(self) -> Self {
            self.with_items("厨房", "橱柜", &["盘子", "碗", "筷子"])
        }
    }
}
