use crate::types::Block;

pub const BLOCKS_STORAGE_KEY: &str = "chat-blocks";

/// Cache for the most recent organize result. One fixed key, whole value
/// replaced on every save; last write wins.
pub trait BlockStore {
    fn load(&self) -> Vec<Block>;
    fn save(&self, blocks: &[Block]);
}

/// Browser local storage. Read failures (storage unavailable, key absent,
/// stale JSON) degrade to an empty list; write failures are dropped.
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl BlockStore for LocalStorageStore {
    fn load(&self) -> Vec<Block> {
        match Self::storage() {
            Some(storage) => storage
                .get_item(BLOCKS_STORAGE_KEY)
                .ok()
                .flatten()
                .and_then(|raw| serde_json::from_str(&raw).ok())
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }

    fn save(&self, blocks: &[Block]) {
        if let Some(storage) = Self::storage() {
            if let Ok(raw) = serde_json::to_string(blocks) {
                let _ = storage.set_item(BLOCKS_STORAGE_KEY, &raw);
            }
        }
    }
}

/// In-memory stand-in for tests.
#[derive(Default)]
pub struct MemoryStore {
    blocks: std::cell::RefCell<Vec<Block>>,
}

impl BlockStore for MemoryStore {
    fn load(&self) -> Vec<Block> {
        self.blocks.borrow().clone()
    }

    fn save(&self, blocks: &[Block]) {
        *self.blocks.borrow_mut() = blocks.to_vec();
    }
}
