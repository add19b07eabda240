use crate::model::{Block, BlockContent, ElementKey};
use crate::render::context::RenderContext;
use crate::render::escape::{escape_html, escape_multiline};
use crate::style::resolve;

use super::text_style;

pub(super) fn render_text(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    render_as(block, ctx, "p")
}

pub(super) fn render_title(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    render_as(block, ctx, "h1")
}

/// One element, no wrapper: the block container and its paragraph share a
/// box, so the resolved paragraph style already carries block-level values.
fn render_as(block: &Block, ctx: &mut RenderContext<'_>, tag: &str) -> String {
    let content = match &block.content {
        BlockContent::Text(t) | BlockContent::Title(t) => t.content.as_str(),
        _ => return String::new(),
    };
    let resolved = resolve(block, Some(ElementKey::Text));
    let element = ctx.element(ElementKey::Text);

    if ctx.is_editing() {
        let style = ctx.style(
            text_style(&resolved)
                .push("display", "block")
                .push("box-sizing", "border-box")
                .push("resize", "none"),
        );
        return format!(
            "<textarea{element} data-bp-editing=\"true\"{style}>{}</textarea>",
            escape_html(content)
        );
    }

    let style = ctx.style(text_style(&resolved));
    format!("<{tag}{element}{style}>{}</{tag}>", escape_multiline(content))
}
