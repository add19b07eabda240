//! Block model: templates, typed blocks and their style bags
//!
//! A [`Template`] is an ordered list of [`Block`]s. Order is the only layout
//! model: there is no positioning or z-index. Blocks are values; every edit
//! produces a new block (see [`edit`]) and every list operation a new
//! template (see [`ops`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

use crate::{Error, Result};

pub mod content;
pub mod dimension;
pub mod edit;
pub mod image;
pub mod ops;
pub mod palette;
pub mod style;

pub use content::*;
pub use dimension::{Dimension, Extent, Unit};
pub use edit::BlockEdit;
pub use palette::{IdGenerator, SequentialIds, UuidIds};
pub use style::{Alignment, ElementKey, FontStyle, FontWeight, StyleBag};

/// Every block kind the builder knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Header,
    Text,
    Title,
    Image,
    Hero,
    Features,
    Testimonials,
    About,
    ContactForm,
    Footer,
    Spacer,
    Pricing,
    Faq,
    Signup,
}

impl BlockKind {
    pub const ALL: [BlockKind; 14] = [
        BlockKind::Header,
        BlockKind::Text,
        BlockKind::Title,
        BlockKind::Image,
        BlockKind::Hero,
        BlockKind::Features,
        BlockKind::Testimonials,
        BlockKind::About,
        BlockKind::ContactForm,
        BlockKind::Footer,
        BlockKind::Spacer,
        BlockKind::Pricing,
        BlockKind::Faq,
        BlockKind::Signup,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Header => "header",
            BlockKind::Text => "text",
            BlockKind::Title => "title",
            BlockKind::Image => "image",
            BlockKind::Hero => "hero",
            BlockKind::Features => "features",
            BlockKind::Testimonials => "testimonials",
            BlockKind::About => "about",
            BlockKind::ContactForm => "contact-form",
            BlockKind::Footer => "footer",
            BlockKind::Spacer => "spacer",
            BlockKind::Pricing => "pricing",
            BlockKind::Faq => "faq",
            BlockKind::Signup => "signup",
        }
    }

    /// The sub-element that inherits block-level style, if the kind has one
    pub fn primary_element(self) -> Option<ElementKey> {
        match self {
            BlockKind::Text | BlockKind::Title => Some(ElementKey::Text),
            BlockKind::Image => Some(ElementKey::Image),
            _ => None,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single content block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Unique within its template and stable across edits
    pub id: String,
    #[serde(flatten)]
    pub content: BlockContent,
    /// Block-level style
    #[serde(default, skip_serializing_if = "StyleBag::is_empty")]
    pub style: StyleBag,
    /// Sparse per-element overrides
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub element_styles: BTreeMap<ElementKey, StyleBag>,
}

impl Block {
    pub fn new(id: impl Into<String>, content: BlockContent) -> Self {
        Self {
            id: id.into(),
            content,
            style: StyleBag::default(),
            element_styles: BTreeMap::new(),
        }
    }

    pub fn with_style(mut self, style: StyleBag) -> Self {
        self.style = style;
        self
    }

    pub fn with_element_style(mut self, key: ElementKey, style: StyleBag) -> Self {
        self.element_styles.insert(key, style);
        self
    }

    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }

    pub fn element_style(&self, key: ElementKey) -> Option<&StyleBag> {
        self.element_styles.get(&key)
    }
}

/// A named, ordered list of blocks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// An empty template stamped with the current time
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            subject: String::new(),
            blocks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn with_blocks(mut self, blocks: Vec<Block>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Clone into a new template with a fresh id and name
    pub fn cloned_as(&self, id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            subject: self.subject.clone(),
            blocks: self.blocks.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn position(&self, block_id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == block_id)
    }

    pub fn block(&self, block_id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == block_id)
    }

    /// Check the unique-id invariant
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.blocks.len());
        for b in &self.blocks {
            if !seen.insert(b.id.as_str()) {
                return Err(Error::DuplicateBlockId(b.id.clone()));
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
