//! # API Facade
//!
//! A thin layer over the commands. It owns the store and the item separators
//! so callers only pass the text the user typed.
//!
//! `InventoryApi<S: DataStore>` is generic over the storage backend:
//! - Production: `InventoryApi<FileStore>`
//! - Testing: `InventoryApi<InMemoryStore>`
//!
//! Every method returns a [`CmdResult`] describing what happened. The only
//! `Err` that escapes is a backing file that cannot be created at all.

use crate::commands;
use crate::config::InventoryConfig;
use crate::error::Result;
use crate::model::Inventory;
use crate::store::DataStore;

pub struct InventoryApi<S: DataStore> {
    store: S,
    separators: String,
}

impl<S: DataStore> InventoryApi<S> {
    pub fn new(store: S, config: &InventoryConfig) -> Self {
        Self {
            store,
            separators: config.item_separators.clone(),
        }
    }

    pub fn add_items(&mut self, room: &str, storage: &str, items: &str) -> Result<CmdResult> {
        commands::add::run(&mut self.store, room, storage, items, &self.separators)
    }

    pub fn find_items(&mut self, term: &str) -> Result<CmdResult> {
        commands::find::run(&mut self.store, term)
    }

    pub fn statistics(&mut self) -> Result<CmdResult> {
        commands::stats::run(&mut self.store)
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.store)
    }

    /// Current inventory, after the same recovery every command applies.
    pub fn inventory(&mut self) -> Result<Inventory> {
        Ok(self.store.load()?.inventory)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
