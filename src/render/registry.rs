//! Kind -> renderer dispatch table

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::model::{Block, BlockKind};

use super::context::RenderContext;

/// Turns one block into a markup fragment.
///
/// Implemented for any `fn(&Block, &mut RenderContext) -> String`, so a
/// replacement renderer is usually a plain function.
pub trait BlockRenderer: Send + Sync {
    fn render(&self, block: &Block, ctx: &mut RenderContext<'_>) -> String;
}

impl<F> BlockRenderer for F
where
    F: Fn(&Block, &mut RenderContext<'_>) -> String + Send + Sync,
{
    fn render(&self, block: &Block, ctx: &mut RenderContext<'_>) -> String {
        self(block, ctx)
    }
}

/// Registry of block renderers
#[derive(Clone, Default)]
pub struct Registry {
    renderers: BTreeMap<BlockKind, Arc<dyn BlockRenderer>>,
}

impl Registry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding a renderer for every built-in kind
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        super::blocks::register_builtins(&mut registry);
        registry
    }

    /// Register (or replace) the renderer for `kind`
    pub fn register<R>(&mut self, kind: BlockKind, renderer: R) -> Option<Arc<dyn BlockRenderer>>
    where
        R: BlockRenderer + 'static,
    {
        self.renderers.insert(kind, Arc::new(renderer))
    }

    pub fn with<R>(mut self, kind: BlockKind, renderer: R) -> Self
    where
        R: BlockRenderer + 'static,
    {
        self.register(kind, renderer);
        self
    }

    pub fn unregister(&mut self, kind: BlockKind) -> Option<Arc<dyn BlockRenderer>> {
        self.renderers.remove(&kind)
    }

    pub fn get(&self, kind: BlockKind) -> Option<&dyn BlockRenderer> {
        self.renderers.get(&kind).map(|r| r.as_ref())
    }

    pub fn contains(&self, kind: BlockKind) -> bool {
        self.renderers.contains_key(&kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = BlockKind> + '_ {
        self.renderers.keys().copied()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kinds", &self.renderers.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// The built-in registry, constructed once per process
pub fn shared() -> Arc<Registry> {
    static BUILTIN: OnceLock<Arc<Registry>> = OnceLock::new();
    BUILTIN.get_or_init(|| Arc::new(Registry::builtin())).clone()
}
