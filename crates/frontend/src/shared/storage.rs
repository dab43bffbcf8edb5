//! Key-value persistence behind a small trait, so drafts can be stored in
//! `localStorage` in the browser and in memory in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use web_sys::window;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// Browser `localStorage`
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Option<Self> {
        let storage = window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            log::warn!("localStorage: failed to write '{}': {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

thread_local! {
    static FALLBACK: Rc<MemoryStore> = Rc::new(MemoryStore::default());
}

/// `localStorage` when the browser offers it, otherwise a per-session memory store
pub fn browser_store() -> Rc<dyn KeyValueStore> {
    match LocalStorage::open() {
        Some(storage) => Rc::new(storage),
        None => {
            log::warn!("localStorage unavailable, drafts are kept in memory only");
            FALLBACK.with(|store| store.clone() as Rc<dyn KeyValueStore>)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::default();
        assert_eq!(store.get("k"), None);
        store.set("k", "v1");
        store.set("k", "v2");
        assert_eq!(store.get("k").as_deref(), Some("v2"));
        store.remove("k");
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_rc_forwards() {
        let store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::default());
        let shared = store.clone();
        store.set("draft", "{}");
        assert_eq!(shared.get("draft").as_deref(), Some("{}"));
    }
}
