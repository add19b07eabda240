//! Named template persistence

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use super::kv::KeyValueStore;
use crate::model::Template;
use crate::Result;

/// Key under which all templates live, as one JSON array
pub const TEMPLATES_KEY: &str = "email-templates";

pub trait TemplateStore: Send + Sync {
    fn list(&self) -> Result<Vec<Template>>;
    fn get(&self, id: &str) -> Result<Option<Template>>;
    /// Insert or replace by id; stamps `updated_at`. Returns the stored value.
    fn put(&self, template: Template) -> Result<Template>;
    /// Remove by id; unknown ids are not an error
    fn delete(&self, id: &str) -> Result<()>;
}

/// Template store on top of any [`KeyValueStore`]
pub struct KvTemplateStore {
    kv: Arc<dyn KeyValueStore>,
    key: String,
}

impl KvTemplateStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(kv, TEMPLATES_KEY)
    }

    pub fn with_key(kv: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self { kv, key: key.into() }
    }

    fn load(&self) -> Result<Vec<Template>> {
        match self.kv.get(&self.key)? {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(v) => Ok(serde_json::from_value(v)?),
        }
    }

    fn save(&self, templates: &[Template]) -> Result<()> {
        self.kv.set(&self.key, serde_json::to_value(templates)?)
    }
}

impl TemplateStore for KvTemplateStore {
    fn list(&self) -> Result<Vec<Template>> {
        self.load()
    }

    fn get(&self, id: &str) -> Result<Option<Template>> {
        Ok(self.load()?.into_iter().find(|t| t.id == id))
    }

    fn put(&self, mut template: Template) -> Result<Template> {
        template.updated_at = Utc::now();
        let mut all = self.load()?;
        match all.iter_mut().find(|t| t.id == template.id) {
            Some(slot) => *slot = template.clone(),
            None => all.push(template.clone()),
        }
        self.save(&all)?;
        log::debug!("saved template {} ({} total)", template.id, all.len());
        Ok(template)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut all = self.load()?;
        let before = all.len();
        all.retain(|t| t.id != id);
        if all.len() != before {
            self.save(&all)?;
            log::debug!("deleted template {}", id);
        }
        Ok(())
    }
}
