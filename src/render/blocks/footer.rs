use crate::model::{Block, BlockContent, ElementKey, Extent};
use crate::render::context::RenderContext;
use crate::render::escape::escape_html;
use crate::style::{resolve, InlineStyle};

use super::{section, text_element, text_style};

pub(super) fn render_footer(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let BlockContent::Footer(footer) = &block.content else {
        return String::new();
    };

    let links = if footer.links.iter().all(|l| l.text.trim().is_empty()) {
        String::new()
    } else {
        let s = resolve(block, Some(ElementKey::Links));
        let mut anchors = Vec::with_capacity(footer.links.len());
        for link in footer.links.iter().filter(|l| !l.text.trim().is_empty()) {
            let href = ctx.href(&link.url);
            let style = ctx.style(
                InlineStyle::new()
                    .color("color", &s.color)
                    .px("font-size", s.font_size)
                    .push("text-decoration", "underline")
                    .push("margin", "0 8px"),
            );
            anchors.push(format!(
                "<a{} href=\"{href}\"{style}>{}</a>",
                ctx.element(ElementKey::Links),
                escape_html(&link.text)
            ));
        }
        let style = ctx.style(text_style(&s));
        format!("<p{style}>{}</p>", anchors.join(" "))
    };

    let unsubscribe = if footer.unsubscribe_text.trim().is_empty() {
        String::new()
    } else {
        let s = resolve(block, Some(ElementKey::ItemBody));
        let href = ctx.href(&footer.unsubscribe_url);
        let p_style = ctx.style(text_style(&s));
        let a_style = ctx.style(InlineStyle::new().color("color", &s.color).push("text-decoration", "underline"));
        format!(
            "<p{}{p_style}><a href=\"{href}\"{a_style}>{}</a></p>",
            ctx.element(ElementKey::ItemBody),
            escape_html(&footer.unsubscribe_text)
        )
    };

    let parts = vec![
        text_element(ctx, block, ElementKey::Company, "p", &footer.company_name),
        text_element(ctx, block, ElementKey::Text, "p", &footer.address),
        links,
        text_element(ctx, block, ElementKey::Body, "p", &footer.copyright),
        unsubscribe,
    ];
    section(ctx, block, parts)
}

pub(super) fn render_spacer(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let s = resolve(block, None);
    let mut style = InlineStyle::new()
        .sides("margin", s.margin)
        .background(&s)
        .extent("height", s.height);
    if let Extent::Length(h) = s.height {
        if !h.is_percent() {
            style = style.px("line-height", h.value);
        }
    }
    let style = ctx.style(style.push("font-size", "0"));
    format!("<div{style}>&nbsp;</div>")
}
