//! Built-in renderers, one function per block kind
//!
//! Every renderer resolves its styles through [`crate::style::resolve`] and
//! emits inline declarations only. Multi-column layouts are
//! `role="presentation"` tables so they survive email clients.

use crate::model::dimension::format_number;
use crate::model::{Block, BlockKind, Dimension, ElementKey, Extent};
use crate::style::{resolve, InlineStyle, ResolvedStyle};

use super::context::RenderContext;
use super::escape::escape_multiline;
use super::registry::Registry;

mod footer;
mod forms;
mod header;
mod hero;
mod image;
mod pricing;
mod sections;
mod text;

pub(crate) fn register_builtins(registry: &mut Registry) {
    registry.register(BlockKind::Header, header::render);
    registry.register(BlockKind::Text, text::render_text);
    registry.register(BlockKind::Title, text::render_title);
    registry.register(BlockKind::Image, image::render);
    registry.register(BlockKind::Hero, hero::render);
    registry.register(BlockKind::Features, sections::render_features);
    registry.register(BlockKind::Testimonials, sections::render_testimonials);
    registry.register(BlockKind::About, sections::render_about);
    registry.register(BlockKind::ContactForm, forms::render_contact_form);
    registry.register(BlockKind::Footer, footer::render_footer);
    registry.register(BlockKind::Spacer, footer::render_spacer);
    registry.register(BlockKind::Pricing, pricing::render);
    registry.register(BlockKind::Faq, sections::render_faq);
    registry.register(BlockKind::Signup, forms::render_signup);
}

fn sized(mut style: InlineStyle, s: &ResolvedStyle) -> InlineStyle {
    if s.width != Dimension::percent(100.0) {
        style = style.dimension("width", s.width);
    }
    if s.height != Extent::Auto {
        style = style.extent("height", s.height);
    }
    style
}

/// Declarations for a text element (paragraph, heading, label)
pub(crate) fn text_style(s: &ResolvedStyle) -> InlineStyle {
    let style = InlineStyle::new()
        .px("font-size", s.font_size)
        .sides("padding", s.padding)
        .sides("margin", s.margin)
        .color("color", &s.color)
        .number("line-height", s.line_height)
        .push("font-weight", s.font_weight.to_string())
        .push("font-style", s.font_style.as_css())
        .push("text-align", s.text_align.as_css())
        .background(s)
        .border(&s.border);
    sized(style, s)
}

/// Declarations for a block's outer box
pub(crate) fn container_style(s: &ResolvedStyle) -> InlineStyle {
    let style = InlineStyle::new()
        .sides("padding", s.padding)
        .sides("margin", s.margin)
        .background(s)
        .color("color", &s.color)
        .px("font-size", s.font_size)
        .push("text-align", s.text_align.as_css())
        .border(&s.border);
    sized(style, s)
}

/// Wrap the non-empty `parts` in the block container
pub(crate) fn section(ctx: &mut RenderContext<'_>, block: &Block, parts: Vec<String>) -> String {
    section_styled(ctx, container_style(&resolve(block, None)), parts)
}

pub(crate) fn section_styled(ctx: &mut RenderContext<'_>, style: InlineStyle, parts: Vec<String>) -> String {
    let style = ctx.style(style);
    let inner: Vec<String> = parts.into_iter().filter(|p| !p.is_empty()).collect();
    if inner.is_empty() {
        format!("<div{style}></div>")
    } else {
        format!("<div{style}>\n{}\n</div>", inner.join("\n"))
    }
}

/// A styled text element; empty text renders nothing
pub(crate) fn text_element(
    ctx: &mut RenderContext<'_>,
    block: &Block,
    key: ElementKey,
    tag: &str,
    text: &str,
) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let style = ctx.style(text_style(&resolve(block, Some(key))));
    format!("<{tag}{}{style}>{}</{tag}>", ctx.element(key), escape_multiline(text))
}

pub(crate) fn button_style(s: &ResolvedStyle) -> InlineStyle {
    InlineStyle::new()
        .push("display", "inline-block")
        .sides("padding", s.padding)
        .sides("margin", s.margin)
        .background(s)
        .color("color", &s.color)
        .px("font-size", s.font_size)
        .push("font-weight", s.font_weight.to_string())
        .number("line-height", s.line_height)
        .push("text-decoration", "none")
        .border(&s.border)
}

/// Call-to-action link styled as a button; empty label renders nothing
pub(crate) fn button(ctx: &mut RenderContext<'_>, block: &Block, label: &str, url: &str) -> String {
    if label.trim().is_empty() {
        return String::new();
    }
    let href = ctx.href(url);
    let style = ctx.style(button_style(&resolve(block, Some(ElementKey::Button))));
    format!(
        "<a{} href=\"{href}\"{style}>{}</a>",
        ctx.element(ElementKey::Button),
        escape_multiline(label)
    )
}

/// Lay `cells` out in rows of `columns` (0 or more than the cell count: one row)
pub(crate) fn columns_table(cells: Vec<String>, columns: usize) -> String {
    if cells.is_empty() {
        return String::new();
    }
    let per_row = if columns == 0 { cells.len() } else { columns.min(cells.len()) };
    let width = format_number(100.0 / per_row as f64);
    let mut out = String::from(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\n",
    );
    for row in cells.chunks(per_row) {
        out.push_str("<tr>\n");
        for cell in row {
            out.push_str(&format!(
                "<td valign=\"top\" width=\"{width}%\" style=\"padding:12px; vertical-align:top\">\n{cell}\n</td>\n"
            ));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_split_into_rows() {
        let cells = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let html = columns_table(cells, 2);
        assert_eq!(html.matches("<tr>").count(), 2);
        assert_eq!(html.matches("width=\"50%\"").count(), 3);
        assert!(html.starts_with("<table role=\"presentation\""));
    }

    #[test]
    fn zero_columns_means_one_row() {
        let html = columns_table(vec!["a".into(), "b".into(), "c".into()], 0);
        assert_eq!(html.matches("<tr>").count(), 1);
        assert!(html.contains("width=\"33.33%\""));
    }
}
