use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Wipe every room. No confirmation is asked for.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.clear() {
        Ok(()) => result.add_message(CmdMessage::success("数据已成功清空！")),
        Err(e) => result.add_message(CmdMessage::error(format!("清空数据时发生错误: {}", e))),
    }
    Ok(result)
}
