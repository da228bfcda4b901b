use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// The backing file could not be created. Nothing else can work after this.
    #[error("创建数据文件时发生错误 ({}): {source}", .path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),
}

impl InventoryError {
    /// True when the read failed because the content itself is unusable
    /// (bad JSON, invalid keys, or the file vanished mid-read).
    pub fn is_corruption(&self) -> bool {
        match self {
            InventoryError::Serialization(_) | InventoryError::InvalidData(_) => true,
            InventoryError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
