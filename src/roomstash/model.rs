use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Storage locations of one room, each holding its ordered item list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Room {
    pub storages: BTreeMap<String, Vec<String>>,
}

impl Room {
    pub fn item_count(&self) -> usize {
        self.storages.values().map(Vec::len).sum()
    }
}

/// The whole dataset: room name -> storage name -> items.
///
/// Serialized as a plain nested JSON object so the backing file stays
/// readable and hand-editable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    pub rooms: BTreeMap<String, Room>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Items at a storage location, if both the room and the storage exist.
    pub fn items_at(&self, room: &str, storage: &str) -> Option<&[String]> {
        self.rooms
            .get(room)
            .and_then(|r| r.storages.get(storage))
            .map(Vec::as_slice)
    }

    /// Item list for a storage location, creating the room and storage if absent.
    pub fn storage_mut(&mut self, room: &str, storage: &str) -> &mut Vec<String> {
        self.rooms
            .entry(room.to_string())
            .or_default()
            .storages
            .entry(storage.to_string())
            .or_default()
    }

    /// Every item whose name contains `term`, in room/storage/list order.
    ///
    /// Matching is plain case-sensitive substring containment.
    pub fn locate(&self, term: &str) -> Vec<ItemLocation> {
        let mut found = Vec::new();
        for (room_name, room) in &self.rooms {
            for (storage_name, items) in &room.storages {
                for item in items.iter().filter(|item| item.contains(term)) {
                    found.push(ItemLocation {
                        room: room_name.clone(),
                        storage: storage_name.clone(),
                        item: item.clone(),
                    });
                }
            }
        }
        found
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats {
            rooms: self.rooms.len(),
            items: self.rooms.values().map(Room::item_count).sum(),
        }
    }

    /// Rejects datasets with empty room or storage names.
    pub fn validate(&self) -> Result<()> {
        for (room_name, room) in &self.rooms {
            if room_name.is_empty() {
                return Err(InventoryError::InvalidData("empty room name".to_string()));
            }
            if room.storages.keys().any(String::is_empty) {
                return Err(InventoryError::InvalidData(format!(
                    "empty storage name in room {}",
                    room_name
                )));
            }
        }
        Ok(())
    }
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLocation {
    pub room: String,
    pub storage: String,
    pub item: String,
}

impl fmt::Display for ItemLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "房间: {}  存储地点: {}  物品: {}",
            self.room, self.storage, self.item
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryStats {
    pub rooms: usize,
    pub items: usize,
}

impl InventoryStats {
    pub fn is_empty(&self) -> bool {
        self.rooms == 0
    }
}

impl fmt::Display for InventoryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "房间总数: {}\n物品总数: {}", self.rooms, self.items)
    }
}
