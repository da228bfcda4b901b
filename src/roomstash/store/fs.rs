use super::{from_json, to_pretty_json, DataStore};
use crate::error::{InventoryError, Result};
use crate::model::Inventory;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "storage_data.json";

static WRITE_LOCK: Mutex<()> = Mutex::new(());

/// Block until no file write is in flight and keep new ones from starting
/// while the guard lives. Lets a process exit without stranding a temp file.
pub fn hold_writes() -> MutexGuard<'static, ()> {
    WRITE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store next to the running executable, falling back to the working directory.
    pub fn beside_executable() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(DEFAULT_DATA_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn write_atomic(&self, content: &str) -> Result<()> {
        let dir = self.parent_dir();
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());

        let _guard = hold_writes();
        let tmp_file = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(InventoryError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(InventoryError::Io(e));
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn ensure_exists(&mut self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        info!(path = %self.path.display(), "creating empty data file");
        let unavailable = |source: std::io::Error| InventoryError::StoreUnavailable {
            path: self.path.clone(),
            source,
        };
        let dir = self.parent_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(unavailable)?;
        }
        let empty = to_pretty_json(&Inventory::new())?;
        fs::write(&self.path, empty).map_err(unavailable)?;
        Ok(())
    }

    fn read(&self) -> Result<Inventory> {
        let content = fs::read_to_string(&self.path).map_err(InventoryError::Io)?;
        from_json(&content)
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        let content = to_pretty_json(inventory)?;
        self.write_atomic(&content)?;
        debug!(path = %self.path.display(), rooms = inventory.rooms.len(), "inventory saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let empty = to_pretty_json(&Inventory::new())?;
        self.write_atomic(&empty)?;
        info!(path = %self.path.display(), "data file cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreNotice;
    use std::thread;
    use std::time::Duration;
    use tempfile::TempDir;

    fn tmp_files(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .filter(|name| name.ends_with(".tmp"))
            .collect()
    }

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join(DEFAULT_DATA_FILE));
        (dir, store)
    }

    #[test]
    fn ensure_exists_writes_empty_object() {
        let (_dir, mut store) = setup();
        store.ensure_exists().unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{}");
    }

    #[test]
    fn ensure_exists_keeps_existing_content() {
        let (_dir, mut store) = setup();
        fs::write(store.path(), r#"{"厨房": {"橱柜": ["碗"]}}"#).unwrap();
        store.ensure_exists().unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded.inventory.items_at("厨房", "橱柜").unwrap(), ["碗"]);
    }

    #[test]
    fn ensure_exists_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("nested/deeper/data.json"));
        store.ensure_exists().unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn ensure_exists_fails_when_parent_is_a_file() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let mut store = FileStore::new(blocker.join("data.json"));
        let err = store.ensure_exists().unwrap_err();
        assert!(matches!(err, InventoryError::StoreUnavailable { .. }));
    }

    #[test]
    fn save_then_load_keeps_order_and_text() {
        let (_dir, mut store) = setup();
        let mut inv = Inventory::new();
        inv.storage_mut("厨房", "橱柜")
            .extend(["盘子", "碗", "筷子"].map(String::from));
        store.save(&inv).unwrap();

        let on_disk = fs::read_to_string(store.path()).unwrap();
        assert!(on_disk.contains("\"盘子\""));
        assert!(on_disk.contains("\n    \"厨房\""));

        let loaded = store.load().unwrap();
        assert_eq!(loaded.inventory, inv);
    }

    #[test]
    fn save_leaves_no_tmp_files() {
        let (dir, mut store) = setup();
        store.save(&Inventory::new()).unwrap();
        assert_eq!(tmp_files(dir.path()), Vec::<String>::new());
    }

    #[test]
    fn held_writes_wait_for_release() {
        let (dir, mut store) = setup();
        store.ensure_exists().unwrap();

        let guard = hold_writes();
        let writer = thread::spawn(move || {
            let mut inv = Inventory::new();
            inv.storage_mut("厨房", "橱柜").push("碗".to_string());
            store.save(&inv).unwrap();
        });
        thread::sleep(Duration::from_millis(100));

        let path = dir.path().join(DEFAULT_DATA_FILE);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(tmp_files(dir.path()).is_empty());

        drop(guard);
        writer.join().unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("\"碗\""));
        assert!(tmp_files(dir.path()).is_empty());
    }

    #[test]
    fn corrupt_file_is_reset() {
        let (_dir, mut store) = setup();
        fs::write(store.path(), "this is not json").unwrap();

        let loaded = store.load().unwrap();
        assert!(loaded.inventory.is_empty());
        assert_eq!(loaded.notices, vec![StoreNotice::Corrupted]);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "{}");
    }

    #[test]
    fn clear_empties_existing_data() {
        let (_dir, mut store) = setup();
        let mut inv = Inventory::new();
        inv.storage_mut("卧室", "衣柜").push("毛衣".to_string());
        store.save(&inv).unwrap();

        store.clear().unwrap();
        assert!(store.load().unwrap().inventory.is_empty());
    }

    #[test]
    fn unreadable_path_degrades_to_empty() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());

        let loaded = store.load().unwrap();
        assert!(loaded.inventory.is_empty());
        assert!(matches!(loaded.notices[..], [StoreNotice::ReadFailed(_)]));
        assert!(dir.path().is_dir());
    }
}
