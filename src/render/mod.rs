//! HTML serializer
//!
//! [`HtmlSerializer::render`] walks a template's blocks in order, dispatches
//! each through the [`Registry`] and wraps the fragments in a standalone
//! document. Rendering is pure and infallible: problems are reported as
//! [`RenderWarning`]s next to the markup, never as errors.
//!
//! ```
//! use blockprint::model::{Block, BlockContent, Template, TextContent};
//!
//! let template = Template::new("t1", "Welcome").with_blocks(vec![Block::new(
//!     "b1",
//!     BlockContent::Text(TextContent { content: "Hello".into() }),
//! )]);
//! let out = blockprint::render(&template);
//! assert!(out.html.contains(">Hello</p>"));
//! assert!(out.warnings.is_empty());
//! ```

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::model::{Block, Template};
use crate::RenderConfig;

mod blocks;
pub mod context;
pub mod document;
pub mod escape;
pub mod registry;
pub mod warnings;

pub use context::{RenderContext, RenderMode};
pub use registry::{BlockRenderer, Registry};
pub use warnings::{RenderWarning, WarningKind};

/// Exported markup plus the advisories raised while producing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub html: String,
    pub warnings: Vec<RenderWarning>,
    /// Number of blocks in the source template
    pub blocks: usize,
}

impl Rendered {
    /// SHA-256 of the markup, hex encoded
    pub fn digest(&self) -> String {
        hex::encode(Sha256::digest(self.html.as_bytes()))
    }

    pub fn stats(&self) -> SourceStats {
        SourceStats::of(&self.html, self.blocks)
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Counts shown next to the generated source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceStats {
    /// Newline-separated segments, so a trailing newline adds an empty line
    pub lines: usize,
    /// Unicode scalar values, not bytes
    pub characters: usize,
    pub blocks: usize,
}

impl SourceStats {
    pub fn of(html: &str, blocks: usize) -> Self {
        Self {
            lines: html.split('\n').count(),
            characters: html.chars().count(),
            blocks,
        }
    }
}

/// Download name for an exported template: `<name>.html`
pub fn export_file_name(template: &Template) -> String {
    let name: String = template
        .name
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => '-',
            c => c,
        })
        .collect();
    if name.is_empty() {
        "template.html".to_string()
    } else {
        format!("{name}.html")
    }
}

/// Renders templates to standalone HTML
#[derive(Debug, Clone)]
pub struct HtmlSerializer {
    config: RenderConfig,
    registry: Arc<Registry>,
}

impl Default for HtmlSerializer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl HtmlSerializer {
    /// A serializer backed by the shared built-in registry
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            registry: registry::shared(),
        }
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = Arc::new(registry);
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Render the full document
    pub fn render(&self, template: &Template) -> Rendered {
        let mut ctx = RenderContext::new(&self.config, RenderMode::Export);
        let fragments: Vec<String> = template
            .blocks
            .iter()
            .map(|block| {
                ctx.begin_block(&block.id, false);
                self.render_block(block, &mut ctx)
            })
            .collect();
        let html = document::wrap(&mut ctx, template, &fragments.join("\n"));
        let warnings = ctx.into_warnings();
        log::debug!(
            "rendered template {} ({} blocks, {} bytes, {} warnings)",
            template.id,
            template.blocks.len(),
            html.len(),
            warnings.len()
        );
        Rendered {
            html,
            warnings,
            blocks: template.blocks.len(),
        }
    }

    /// Render a single block's export fragment, without the document shell
    pub fn render_fragment(&self, block: &Block) -> Rendered {
        let mut ctx = RenderContext::new(&self.config, RenderMode::Export);
        ctx.begin_block(&block.id, false);
        let html = self.render_block(block, &mut ctx);
        Rendered {
            html,
            warnings: ctx.into_warnings(),
            blocks: 1,
        }
    }

    /// Dispatch one block through the registry in whatever mode `ctx` carries
    pub fn render_block(&self, block: &Block, ctx: &mut RenderContext<'_>) -> String {
        match self.registry.get(block.kind()) {
            Some(renderer) => renderer.render(block, ctx),
            None => {
                ctx.warn(
                    WarningKind::MissingRenderer,
                    format!("no renderer registered for `{}` blocks", block.kind()),
                );
                format!(
                    "<!-- blockprint: no renderer for {} block {} -->",
                    block.kind(),
                    escape::escape_comment(&block.id)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockContent, BlockKind, TextContent};

    fn hello() -> Template {
        Template::new("t1", "Welcome").with_blocks(vec![Block::new(
            "b1",
            BlockContent::Text(TextContent {
                content: "Hello".into(),
            }),
        )])
    }

    #[test]
    fn digest_is_stable_hex() {
        let s = HtmlSerializer::default();
        let a = s.render(&hello());
        let b = s.render(&hello());
        assert_eq!(a.digest(), b.digest());
        assert_eq!(a.digest().len(), 64);
    }

    #[test]
    fn missing_renderer_leaves_placeholder() {
        let mut registry = Registry::builtin();
        registry.unregister(BlockKind::Text);
        assert!(!HtmlSerializer::default().render(&hello()).has_warnings());
        let out = HtmlSerializer::default().with_registry(registry).render(&hello());
        assert!(out.has_warnings());
        assert!(out.html.contains("<!-- blockprint: no renderer for text block b1 -->"));
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.warnings[0].kind, WarningKind::MissingRenderer);
    }

    #[test]
    fn stats_count_lines_chars_and_blocks() {
        let stats = SourceStats::of("<p>é</p>\n<p>x</p>", 2);
        assert_eq!(stats.lines, 2);
        assert_eq!(stats.characters, 17);
        assert_eq!(stats.blocks, 2);
        assert_eq!(SourceStats::of("<p>x</p>\n", 1).lines, 2);
        assert_eq!(SourceStats::of("", 0).lines, 1);
    }

    #[test]
    fn export_names_are_path_safe() {
        let mut t = Template::new("t", "Spring/Summer: launch");
        assert_eq!(export_file_name(&t), "Spring-Summer- launch.html");
        t.name = "   ".into();
        assert_eq!(export_file_name(&t), "template.html");
    }
}
