use crate::model::{Block, BlockContent, Dimension, ElementKey, Extent};
use crate::render::context::RenderContext;
use crate::render::escape::escape_html;
use crate::style::{resolve, BoxSides, InlineStyle, ResolvedStyle};

use super::{container_style, section_styled};

pub(crate) fn picture_style(s: &ResolvedStyle) -> InlineStyle {
    InlineStyle::new()
        .push("display", "inline-block")
        .dimension("width", s.width)
        .extent("height", s.height)
        .push("max-width", "100%")
        .sides("margin", s.margin)
        .background(s)
        .border(&s.border)
}

fn placeholder(ctx: &mut RenderContext<'_>, s: &ResolvedStyle) -> String {
    let style = ctx.style(
        InlineStyle::new()
            .push("display", "inline-block")
            .dimension("width", s.width)
            .push("max-width", "100%")
            .push("padding", "40px 0")
            .push("background-color", "#f3f4f6")
            .push("color", "#9ca3af")
            .px("font-size", 14.0)
            .push("text-align", "center"),
    );
    format!("<div{}{style}>No image selected</div>", ctx.element(ElementKey::Image))
}

/// `<img>` for a data-carried source, or a placeholder when none is usable
pub(crate) fn picture(ctx: &mut RenderContext<'_>, block: &Block, key: ElementKey, src: &str, alt: &str) -> String {
    let resolved = resolve(block, Some(key));
    let Some(src) = ctx.image_src(src) else {
        return placeholder(ctx, &resolved);
    };
    let style = ctx.style(picture_style(&resolved));
    format!(
        "<img{}{} src=\"{src}\" alt=\"{}\"{style}>",
        ctx.element(key),
        ctx.image_fallback(alt),
        escape_html(alt)
    )
}

pub(super) fn render(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let BlockContent::Image(image) = &block.content else {
        return String::new();
    };
    let mut img = picture(ctx, block, ElementKey::Image, &image.src, &image.alt);

    if let Some(target) = image.link_target.as_deref().filter(|t| !t.trim().is_empty()) {
        let href = ctx.href(target);
        let title = image
            .link_tooltip
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .map(|t| format!(" title=\"{}\"", escape_html(t)))
            .unwrap_or_default();
        img = format!("<a href=\"{href}\"{title} style=\"text-decoration:none\">{img}</a>");
    }
    // size, margin and border belong to the picture; the container keeps
    // padding, background and alignment and always spans the row
    let mut container = resolve(block, None);
    container.width = Dimension::percent(100.0);
    container.height = Extent::Auto;
    container.margin = BoxSides::uniform(0.0);
    container.border.width = 0.0;
    container.border.radius = 0.0;
    section_styled(ctx, container_style(&container), vec![img])
}
