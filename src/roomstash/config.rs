use crate::commands::helpers::DEFAULT_SEPARATORS;
use crate::error::{InventoryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Optional settings, read from a JSON file passed with `--config`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Where the inventory is kept. Defaults to a file next to the executable.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Characters that split an item list.
    #[serde(default = "default_separators")]
    pub item_separators: String,

    /// Clear the terminal between screens.
    #[serde(default = "default_clear_screen")]
    pub clear_screen: bool,
}

fn default_separators() -> String {
    DEFAULT_SEPARATORS.to_string()
}

fn default_clear_screen() -> bool {
    true
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            item_separators: default_separators(),
            clear_screen: default_clear_screen(),
        }
    }
}

impl InventoryConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(InventoryError::Io)?;
        let config: InventoryConfig = serde_json::from_str(&content)
            .map_err(|e| InventoryError::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.item_separators.is_empty() {
            return Err(InventoryError::Config(
                "item_separators must contain at least one character".to_string(),
            ));
        }
        if self.item_separators.chars().any(char::is_whitespace) {
            return Err(InventoryError::Config(
                "item_separators cannot contain whitespace".to_string(),
            ));
        }
        Ok(())
    }
}
