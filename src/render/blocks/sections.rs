use crate::model::{Block, BlockContent, ElementKey};
use crate::render::context::RenderContext;
use crate::render::escape::escape_html;
use crate::style::InlineStyle;

use super::image::picture;
use super::{columns_table, section, text_element};

fn icon(ctx: &mut RenderContext<'_>, icon: Option<&str>) -> String {
    let Some(icon) = icon.map(str::trim).filter(|i| !i.is_empty()) else {
        return String::new();
    };
    let style = ctx.style(
        InlineStyle::new()
            .px("font-size", 32.0)
            .number("line-height", 1.0)
            .push("margin", "0 0 8px 0"),
    );
    format!("<div{style}>{}</div>", escape_html(icon))
}

pub(super) fn render_features(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let BlockContent::Features(features) = &block.content else {
        return String::new();
    };
    let heading = text_element(ctx, block, ElementKey::Heading, "h2", &features.heading);
    let mut cells = Vec::with_capacity(features.items.len());
    for item in &features.items {
        let parts = [
            icon(ctx, item.icon.as_deref()),
            text_element(ctx, block, ElementKey::ItemTitle, "h3", &item.title),
            text_element(ctx, block, ElementKey::ItemBody, "p", &item.description),
        ];
        cells.push(join(&parts));
    }
    let grid = columns_table(cells, usize::from(features.columns));
    section(ctx, block, vec![heading, grid])
}

pub(super) fn render_testimonials(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let BlockContent::Testimonials(testimonials) = &block.content else {
        return String::new();
    };
    let mut parts = vec![text_element(ctx, block, ElementKey::Heading, "h2", &testimonials.heading)];
    for item in &testimonials.items {
        let quote = if item.quote.trim().is_empty() {
            String::new()
        } else {
            format!("\u{201c}{}\u{201d}", item.quote.trim())
        };
        parts.push(text_element(ctx, block, ElementKey::Body, "p", &quote));
        parts.push(text_element(ctx, block, ElementKey::ItemTitle, "p", &item.author));
        parts.push(text_element(ctx, block, ElementKey::ItemBody, "p", &item.role));
    }
    section(ctx, block, parts)
}

pub(super) fn render_about(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let BlockContent::About(about) = &block.content else {
        return String::new();
    };
    let copy = join(&[
        text_element(ctx, block, ElementKey::Heading, "h2", &about.heading),
        text_element(ctx, block, ElementKey::Body, "p", &about.body),
    ]);
    match about.image.as_deref().filter(|i| !i.trim().is_empty()) {
        Some(src) => {
            let img = picture(ctx, block, ElementKey::Image, src, &about.heading);
            let layout = columns_table(vec![img, copy], 2);
            section(ctx, block, vec![layout])
        }
        None => section(ctx, block, vec![copy]),
    }
}

pub(super) fn render_faq(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let BlockContent::Faq(faq) = &block.content else {
        return String::new();
    };
    let mut parts = vec![text_element(ctx, block, ElementKey::Heading, "h2", &faq.heading)];
    for item in &faq.items {
        parts.push(text_element(ctx, block, ElementKey::ItemTitle, "h3", &item.question));
        parts.push(text_element(ctx, block, ElementKey::ItemBody, "p", &item.answer));
    }
    section(ctx, block, parts)
}

fn join(parts: &[String]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
