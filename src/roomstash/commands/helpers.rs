use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Inventory;
use crate::store::DataStore;

pub const DEFAULT_SEPARATORS: &str = ";；";

/// Load the inventory, turning any store notices into warnings on `result`.
pub fn load_inventory<S: DataStore>(store: &mut S, result: &mut CmdResult) -> Result<Inventory> {
    let loaded = store.load()?;
    for notice in loaded.notices {
        result.add_message(CmdMessage::warning(notice.to_string()));
    }
    Ok(loaded.inventory)
}

/// Split an item list on any of `separators`, trimming each name.
///
/// Empty names are dropped and repeats keep only their first occurrence.
pub fn parse_items(text: &str, separators: &str) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    for token in text.split(|c: char| separators.contains(c)) {
        let name = token.trim();
        if !name.is_empty() && !items.iter().any(|i| i == name) {
            items.push(name.to_string());
        }
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_ascii_and_fullwidth_semicolons() {
        assert_eq!(
            parse_items("盘子;碗；筷子", DEFAULT_SEPARATORS),
            vec!["盘子", "碗", "筷子"]
        );
    }

    #[test]
    fn trims_and_drops_empty_tokens() {
        assert_eq!(
            parse_items("  盘子 ;; ;碗 ;", DEFAULT_SEPARATORS),
            vec!["盘子", "碗"]
        );
        assert!(parse_items(" ; ；", DEFAULT_SEPARATORS).is_empty());
    }

    #[test]
    fn collapses_repeats_in_one_input() {
        assert_eq!(parse_items("碗;盘子;碗", DEFAULT_SEPARATORS), vec!["碗", "盘子"]);
    }

    #[test]
    fn honours_custom_separators() {
        assert_eq!(parse_items("a,b;c", ","), vec!["a", "b;c"]);
    }
}
