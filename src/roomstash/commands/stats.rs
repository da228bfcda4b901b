use crate::commands::helpers::load_inventory;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub const NO_DATA: &str = "当前没有任何数据。";

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let inventory = load_inventory(store, &mut result)?;
    let stats = inventory.stats();

    if stats.is_empty() {
        result.add_message(CmdMessage::info(NO_DATA));
    }

    Ok(result.with_stats(stats))
}
