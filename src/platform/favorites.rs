//! Favorite template ids, kept in their own namespace

use std::sync::Arc;

use serde_json::Value;

use super::kv::KeyValueStore;
use crate::Result;

pub const FAVORITES_KEY: &str = "prospect:favorites";

pub struct Favorites {
    kv: Arc<dyn KeyValueStore>,
}

impl Favorites {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Favorites { kv }
    }

    pub fn list(&self) -> Result<Vec<String>> {
        match self.kv.get(FAVORITES_KEY)? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(v) => Ok(serde_json::from_value(v)?),
        }
    }

    pub fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.list()?.iter().any(|f| f == id))
    }

    /// Returns false when `id` was already a favorite
    pub fn add(&self, id: &str) -> Result<bool> {
        let mut ids = self.list()?;
        if ids.iter().any(|f| f == id) {
            return Ok(false);
        }
        ids.push(id.to_string());
        self.kv.set(FAVORITES_KEY, serde_json::to_value(ids)?)?;
        Ok(true)
    }

    /// Returns false when `id` was not a favorite
    pub fn remove(&self, id: &str) -> Result<bool> {
        let mut ids = self.list()?;
        let before = ids.len();
        ids.retain(|f| f != id);
        if ids.len() == before {
            return Ok(false);
        }
        self.kv.set(FAVORITES_KEY, serde_json::to_value(ids)?)?;
        Ok(true)
    }

    pub fn toggle(&self, id: &str) -> Result<bool> {
        if self.contains(id)? {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }
}
