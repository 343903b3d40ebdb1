use web_sys::window;
use wheel_shared::{KeyValueStorage, MemoryStorage, StorageError};

/// localStorage when the browser grants it, otherwise an in-memory map that
/// lasts for the page session.
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => Self::Local(storage),
            Some(Err(e)) => {
                log::warn!("localStorage refused ({:?}), keeping state in memory", e);
                Self::Memory(MemoryStorage::new())
            }
            _ => {
                log::warn!("localStorage unavailable, keeping state in memory");
                Self::Memory(MemoryStorage::new())
            }
        }
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            Self::Local(storage) => storage
                .get_item(key)
                .map_err(|e| StorageError::Read(format!("{:?}", e))),
            Self::Memory(memory) => memory.get_item(key),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write(format!("{:?}", e))),
            Self::Memory(memory) => memory.set_item(key, value),
        }
    }
}
