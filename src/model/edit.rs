//! Immutable block edits
//!
//! A [`BlockEdit`] describes one change coming from the settings panel or
//! from direct interaction on the canvas. Applying it yields a new block;
//! the input block is left as it was.

use super::dimension::{Dimension, Extent, Unit};
use super::style::{ElementKey, StyleBag};
use super::{Block, BlockContent};
use crate::style;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum BlockEdit {
    /// Replace the text of a `text` or `title` block
    SetContent(String),
    /// Replace the picture reference of an `image` block (URL or data URI)
    SetImageSource(String),
    /// Commit a new size, as produced by a resize gesture
    SetDimensions { width: Dimension, height: Extent },
    /// Change the width number, keeping its unit
    SetWidthValue(f64),
    /// Re-base the width onto another unit
    SwitchWidthUnit(Unit),
    /// Overlay fields onto the block-level style
    SetStyle(StyleBag),
    /// Overlay fields onto one element's override
    SetElementStyle(ElementKey, StyleBag),
    /// Drop an element override so it inherits again
    ClearElementStyle(ElementKey),
    /// Update a header/footer link by its id
    SetLink { link_id: String, text: String, url: String },
    /// Replace the whole content; the kind must not change
    ReplaceContent(BlockContent),
}

impl BlockEdit {
    pub fn apply(&self, block: &Block) -> Result<Block> {
        let mut next = block.clone();
        match self {
            BlockEdit::SetContent(text) => match &mut next.content {
                BlockContent::Text(t) | BlockContent::Title(t) => t.content = text.clone(),
                _ => log::debug!("SetContent ignored for {} block {}", block.kind(), block.id),
            },
            BlockEdit::SetImageSource(src) => match &mut next.content {
                BlockContent::Image(img) => {
                    if src.starts_with("data:") {
                        log::warn!(
                            "image block {} now embeds a data URI; email clients may not display it",
                            block.id
                        );
                    }
                    img.src = src.clone();
                }
                _ => log::debug!("SetImageSource ignored for {} block {}", block.kind(), block.id),
            },
            BlockEdit::SetDimensions { width, height } => {
                let bag = size_bag(&mut next);
                bag.width = Some(*width);
                bag.height = Some(*height);
            }
            BlockEdit::SetWidthValue(value) => {
                size_bag(&mut next).width = Some(current_width(block).with_value(*value)?);
            }
            BlockEdit::SwitchWidthUnit(unit) => {
                size_bag(&mut next).width = Some(current_width(block).switch_unit(*unit));
            }
            BlockEdit::SetStyle(patch) => {
                next.style = next.style.merged(patch);
            }
            BlockEdit::SetElementStyle(key, patch) => {
                let merged = next
                    .element_styles
                    .get(key)
                    .map(|existing| existing.merged(patch))
                    .unwrap_or_else(|| patch.clone());
                next.element_styles.insert(*key, merged);
            }
            BlockEdit::ClearElementStyle(key) => {
                next.element_styles.remove(key);
            }
            BlockEdit::SetLink { link_id, text, url } => {
                let links = match &mut next.content {
                    BlockContent::Header(h) => &mut h.links,
                    BlockContent::Footer(f) => &mut f.links,
                    _ => return Ok(next),
                };
                match links.iter_mut().find(|l| &l.id == link_id) {
                    Some(link) => {
                        link.text = text.clone();
                        link.url = url.clone();
                    }
                    None => log::debug!("link {} not found in block {}", link_id, block.id),
                }
            }
            BlockEdit::ReplaceContent(content) => {
                if content.kind() != block.kind() {
                    return Err(Error::KindMismatch {
                        expected: block.kind().to_string(),
                        found: content.kind().to_string(),
                    });
                }
                next.content = content.clone();
            }
        }
        Ok(next)
    }
}

/// The width the user currently sees, including the kind default when unset
fn current_width(block: &Block) -> Dimension {
    style::resolve(block, block.kind().primary_element()).width
}

/// Where a size edit lands: the primary element's override when it already
/// pins a width or height, else the block-level style
fn size_bag(block: &mut Block) -> &mut StyleBag {
    let pinned = block.kind().primary_element().filter(|key| {
        block
            .element_styles
            .get(key)
            .is_some_and(|s| s.width.is_some() || s.height.is_some())
    });
    match pinned {
        Some(key) => block.element_styles.entry(key).or_default(),
        None => &mut block.style,
    }
}
