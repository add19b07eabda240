//! Key-value store persisted as a single JSON object file

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::kv::{Callback, KeyValueStore, Subscribers, Subscription};
use crate::{Error, Result};

/// Every write rewrites the whole file (via a sibling temp file and rename)
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, Value>>,
    subscribers: Arc<Subscribers>,
}

impl JsonFileStore {
    /// Open `path`, starting empty when the file does not exist yet
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let text = fs::read_to_string(&path)?;
            if text.trim().is_empty() {
                BTreeMap::new()
            } else {
                match serde_json::from_str::<Value>(&text)? {
                    Value::Object(map) => map.into_iter().collect(),
                    other => {
                        return Err(Error::Store(format!(
                            "{} does not hold a JSON object (found {})",
                            path.display(),
                            kind_of(&other)
                        )))
                    }
                }
            }
        } else {
            BTreeMap::new()
        };
        log::debug!("opened {} with {} key(s)", path.display(), entries.len());
        Ok(Self {
            path,
            entries: Mutex::new(entries),
            subscribers: Subscribers::new(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, Value>) -> Result<()> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, Value>>> {
        self.entries
            .lock()
            .map_err(|_| Error::Store(format!("{} lock poisoned", self.path.display())))
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        if key.is_empty() {
            return Err(Error::Store("empty key".to_string()));
        }
        {
            let mut entries = self.entries()?;
            let mut next = entries.clone();
            next.insert(key.to_string(), value);
            self.flush(&next)?;
            *entries = next;
        }
        self.subscribers.notify(key);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        {
            let mut entries = self.entries()?;
            if !entries.contains_key(key) {
                return Ok(());
            }
            let mut next = entries.clone();
            next.remove(key);
            self.flush(&next)?;
            *entries = next;
        }
        self.subscribers.notify(key);
        Ok(())
    }

    fn subscribe(&self, callback: Callback) -> Subscription {
        self.subscribers.add(callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("blockprint-{}-{}.json", name, uuid::Uuid::new_v4().simple()))
    }

    #[test]
    fn values_survive_reopen() {
        let path = temp_path("reopen");
        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set("email-templates", json!([{"id": "t1"}])).unwrap();
            store.set("gone", json!(true)).unwrap();
            store.remove("gone").unwrap();
        }
        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("email-templates").unwrap(), Some(json!([{"id": "t1"}])));
        assert_eq!(store.get("gone").unwrap(), None);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn failed_write_leaves_memory_unchanged() {
        let dir = std::env::temp_dir().join(format!("blockprint-dir-{}", uuid::Uuid::new_v4().simple()));
        let store = JsonFileStore::open(dir.join("store.json")).unwrap();
        store.set("kept", json!(1)).unwrap();

        // the parent directory turns into a regular file, so no write can land
        fs::remove_dir_all(&dir).unwrap();
        fs::write(&dir, "").unwrap();

        assert!(store.set("fresh", json!(2)).is_err());
        assert!(store.set("kept", json!(3)).is_err());
        assert!(store.remove("kept").is_err());
        assert_eq!(store.get("fresh").unwrap(), None);
        assert_eq!(store.get("kept").unwrap(), Some(json!(1)));
        fs::remove_file(&dir).ok();
    }

    #[test]
    fn non_object_file_is_rejected() {
        let path = temp_path("array");
        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(JsonFileStore::open(&path), Err(Error::Store(_))));
        fs::remove_file(&path).ok();
    }
}
