use crate::commands::helpers::load_inventory;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;
use tracing::debug;

pub fn run<S: DataStore>(store: &mut S, term: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if term.is_empty() {
        result.add_message(CmdMessage::warning("请输入要查找的物品。"));
        return Ok(result);
    }

    let inventory = load_inventory(store, &mut result)?;
    let matches = inventory.locate(term);
    debug!(term, hits = matches.len(), "search finished");

    if matches.is_empty() {
        result.add_message(CmdMessage::info("未找到任何匹配的物品。"));
        return Ok(result);
    }

    Ok(result.with_matches(matches))
}
