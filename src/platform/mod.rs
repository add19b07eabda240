//! Platform collaborators: key-value storage, template persistence,
//! favorites and clipboard access
//!
//! The rendering engine never reaches for ambient state. Hosts hand it a
//! [`PlatformApi`] and everything shared (saved templates, favorites) flows
//! through the observable [`KeyValueStore`] behind it.

use std::path::Path;
use std::sync::Arc;

pub mod clipboard;
pub mod favorites;
pub mod file_kv;
pub mod kv;
pub mod store;

pub use clipboard::{copy_with_fallback, ClipboardStrategy, CopyOutcome, MemoryClipboard};
pub use favorites::{Favorites, FAVORITES_KEY};
pub use file_kv::JsonFileStore;
pub use kv::{Callback, KeyValueStore, MemoryKvStore, StoreEvent, Subscription};
pub use store::{KvTemplateStore, TemplateStore, TEMPLATES_KEY};

use crate::Result;

/// A small composite trait that hosts implement to give the editor typed
/// access to its collaborators.
pub trait PlatformApi: Send + Sync {
    fn key_value_store(&self) -> Arc<dyn KeyValueStore>;
    fn template_store(&self) -> Box<dyn TemplateStore>;
    fn favorites(&self) -> Favorites;
    /// Strategies in the order they should be attempted
    fn clipboard_strategies(&self) -> Vec<Arc<dyn ClipboardStrategy>>;

    /// Copy `text` using the platform's strategies in order
    fn copy_text(&self, text: &str) -> Result<CopyOutcome> {
        let strategies = self.clipboard_strategies();
        let refs: Vec<&dyn ClipboardStrategy> = strategies.iter().map(|s| s.as_ref()).collect();
        copy_with_fallback(&refs, text)
    }
}

/// Platform backed by one shared key-value store and an in-memory clipboard.
///
/// With [`MemoryPlatform::new`] nothing touches the filesystem; use
/// [`MemoryPlatform::with_store`] to put a [`JsonFileStore`] behind it.
pub struct MemoryPlatform {
    kv: Arc<dyn KeyValueStore>,
    clipboard: Arc<MemoryClipboard>,
}

impl MemoryPlatform {
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryKvStore::new()))
    }

    pub fn with_store(kv: Arc<dyn KeyValueStore>) -> Self {
        MemoryPlatform {
            kv,
            clipboard: Arc::new(MemoryClipboard::new("memory")),
        }
    }

    /// Persist to a JSON file at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_store(Arc::new(JsonFileStore::open(path)?)))
    }

    pub fn clipboard(&self) -> &MemoryClipboard {
        &self.clipboard
    }
}

impl Default for MemoryPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformApi for MemoryPlatform {
    fn key_value_store(&self) -> Arc<dyn KeyValueStore> {
        self.kv.clone()
    }

    fn template_store(&self) -> Box<dyn TemplateStore> {
        Box::new(KvTemplateStore::new(self.kv.clone()))
    }

    fn favorites(&self) -> Favorites {
        Favorites::new(self.kv.clone())
    }

    fn clipboard_strategies(&self) -> Vec<Arc<dyn ClipboardStrategy>> {
        let clipboard: Arc<dyn ClipboardStrategy> = self.clipboard.clone();
        vec![clipboard]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Template;

    #[test]
    fn memory_platform_shares_one_store() {
        let p = MemoryPlatform::new();
        p.template_store().put(Template::new("t1", "Hello")).unwrap();
        p.favorites().add("t1").unwrap();

        let kv = p.key_value_store();
        assert!(kv.get(TEMPLATES_KEY).unwrap().is_some());
        assert!(kv.get(FAVORITES_KEY).unwrap().is_some());

        let out = p.copy_text("<p>hi</p>").unwrap();
        assert_eq!(out.strategy, "memory");
        assert_eq!(p.clipboard().contents().as_deref(), Some("<p>hi</p>"));
    }
}
