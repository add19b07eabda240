//! Block list operations.
//!
//! Every operation borrows the current template and returns a new one; the
//! input is never modified. Only block order and membership change here;
//! block property values are carried over untouched.

use super::palette::{default_content, IdGenerator};
use super::{Block, BlockEdit, BlockKind, Template};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// How many ids to draw before giving up on a generator that keeps colliding
const ID_ATTEMPTS: usize = 16;

/// Draw an id for a new `kind` block that `template` does not use yet
fn unused_id(template: &Template, kind: BlockKind, ids: &dyn IdGenerator) -> Result<String> {
    let mut id = ids.next_id(kind);
    let mut attempts = 1;
    while template.position(&id).is_some() {
        if attempts == ID_ATTEMPTS {
            return Err(Error::DuplicateBlockId(id));
        }
        id = ids.next_id(kind);
        attempts += 1;
    }
    Ok(id)
}

fn index_of(template: &Template, block_id: &str) -> Result<usize> {
    template
        .position(block_id)
        .ok_or_else(|| Error::BlockNotFound(block_id.to_string()))
}

/// Insert `block` at `at` (0..=len)
pub fn insert_block(template: &Template, block: Block, at: usize) -> Result<Template> {
    let len = template.blocks.len();
    if at > len {
        return Err(Error::IndexOutOfRange { index: at, len });
    }
    if template.position(&block.id).is_some() {
        return Err(Error::DuplicateBlockId(block.id));
    }
    let mut next = template.clone();
    next.blocks.insert(at, block);
    Ok(next)
}

/// Insert a palette block of `kind` at `at`. Returns the new template and the new block's id.
pub fn insert_from_palette(
    template: &Template,
    kind: BlockKind,
    at: usize,
    ids: &dyn IdGenerator,
) -> Result<(Template, String)> {
    let id = unused_id(template, kind, ids)?;
    let block = Block::new(id.clone(), default_content(kind));
    log::debug!("palette insert {} as {} at {}", kind, id, at);
    Ok((insert_block(template, block, at)?, id))
}

/// Copy the block at `index` under a fresh id and insert it right after the original
pub fn duplicate_block(template: &Template, index: usize, ids: &dyn IdGenerator) -> Result<Template> {
    let len = template.blocks.len();
    let original = template
        .blocks
        .get(index)
        .ok_or(Error::IndexOutOfRange { index, len })?;

    let mut copy = original.clone();
    copy.id = unused_id(template, copy.kind(), ids)?;
    insert_block(template, copy, index + 1)
}

pub fn duplicate_block_by_id(template: &Template, block_id: &str, ids: &dyn IdGenerator) -> Result<Template> {
    duplicate_block(template, index_of(template, block_id)?, ids)
}

/// Swap a block with its neighbour. Moving past either end is a no-op.
pub fn move_block(template: &Template, block_id: &str, direction: Direction) -> Result<Template> {
    let index = index_of(template, block_id)?;
    let target = match direction {
        Direction::Up if index > 0 => index - 1,
        Direction::Down if index + 1 < template.blocks.len() => index + 1,
        _ => return Ok(template.clone()),
    };
    let mut next = template.clone();
    next.blocks.swap(index, target);
    Ok(next)
}

pub fn delete_block(template: &Template, block_id: &str) -> Result<Template> {
    let index = index_of(template, block_id)?;
    let mut next = template.clone();
    next.blocks.remove(index);
    Ok(next)
}

/// Replace the block that has the same id as `block`
pub fn replace_block(template: &Template, block: Block) -> Result<Template> {
    let index = index_of(template, &block.id)?;
    let mut next = template.clone();
    next.blocks[index] = block;
    Ok(next)
}

/// Apply an edit to one block and return the updated template
pub fn edit_block(template: &Template, block_id: &str, edit: BlockEdit) -> Result<Template> {
    let index = index_of(template, block_id)?;
    let updated = edit.apply(&template.blocks[index])?;
    let mut next = template.clone();
    next.blocks[index] = updated;
    Ok(next)
}
