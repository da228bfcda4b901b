use crate::commands::helpers::{load_inventory, parse_items};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::info;

pub const MISSING_FIELDS: &str = "请填写所有字段。";

/// Add items to a storage location.
///
/// All-or-nothing: if any parsed item is already stored there, nothing is
/// written and the conflicting names are reported.
pub fn run<S: DataStore>(
    store: &mut S,
    room: &str,
    storage: &str,
    items_text: &str,
    separators: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if room.is_empty() || storage.is_empty() || items_text.is_empty() {
        result.add_message(CmdMessage::warning(MISSING_FIELDS));
        return Ok(result);
    }

    let items = parse_items(items_text, separators);
    if items.is_empty() {
        result.add_message(CmdMessage::warning(MISSING_FIELDS));
        return Ok(result);
    }

    let mut inventory = load_inventory(store, &mut result)?;

    let existing = inventory.items_at(room, storage).unwrap_or_default();
    let duplicates: Vec<&str> = items
        .iter()
        .filter(|item| existing.contains(*item))
        .map(String::as_str)
        .collect();

    if !duplicates.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "已存在以下物品：{}",
            duplicates.join(", ")
        )));
        return Ok(result);
    }

    let count = items.len();
    inventory.storage_mut(room, storage).extend(items);

    match store.save(&inventory) {
        Ok(()) => {
            info!(room, storage, count, "items added");
            result.add_message(CmdMessage::success("物品已成功添加！"));
        }
        Err(e) => {
            result.add_message(CmdMessage::error(format!("保存数据文件时发生错误: {}", e)));
        }
    }

    Ok(result)
}
