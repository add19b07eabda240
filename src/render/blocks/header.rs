use crate::model::{Block, BlockContent, Dimension, ElementKey, Extent, HeaderContent};
use crate::render::context::RenderContext;
use crate::render::escape::{escape_html, escape_multiline};
use crate::style::{resolve, InlineStyle};

use super::image::picture_style;
use super::{section, text_style};

fn logo(ctx: &mut RenderContext<'_>, block: &Block, header: &HeaderContent) -> String {
    let Some(raw) = header.logo.as_deref().filter(|l| !l.trim().is_empty()) else {
        return String::new();
    };
    let Some(src) = ctx.image_src(raw) else {
        return String::new();
    };
    let mut s = resolve(block, Some(ElementKey::Logo));
    // legacy content sizes apply only when no element override sets them
    let over = block.element_style(ElementKey::Logo);
    if over.and_then(|o| o.width).is_none() {
        if let Some(w) = header.logo_width.filter(|w| w.is_finite() && *w > 0.0) {
            s.width = Dimension::px(w);
        }
    }
    if over.and_then(|o| o.height).is_none() {
        if let Some(h) = header.logo_height.filter(|h| h.is_finite() && *h > 0.0) {
            s.height = Extent::Length(Dimension::px(h));
        }
    }
    let alt = if header.logo_alt.is_empty() { &header.company_name } else { &header.logo_alt };
    let style = ctx.style(picture_style(&s).push("vertical-align", "middle"));
    format!(
        "<img{}{} src=\"{src}\" alt=\"{}\"{style}>",
        ctx.element(ElementKey::Logo),
        ctx.image_fallback(alt),
        escape_html(alt)
    )
}

pub(super) fn render(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let BlockContent::Header(header) = &block.content else {
        return String::new();
    };

    let mut brand = logo(ctx, block, header);
    if !header.company_name.trim().is_empty() {
        let s = resolve(block, Some(ElementKey::Company));
        let style = ctx.style(text_style(&s).push("display", "inline-block").push("vertical-align", "middle"));
        brand.push_str(&format!(
            "<span{}{style}>{}</span>",
            ctx.element(ElementKey::Company),
            escape_multiline(&header.company_name)
        ));
    }

    let links_style = resolve(block, Some(ElementKey::Links));
    let mut nav = Vec::with_capacity(header.links.len());
    for link in header.links.iter().filter(|l| !l.text.trim().is_empty()) {
        let href = ctx.href(&link.url);
        let style = ctx.style(
            InlineStyle::new()
                .color("color", &links_style.color)
                .px("font-size", links_style.font_size)
                .push("font-weight", links_style.font_weight.to_string())
                .push("text-decoration", "none")
                .push("margin-left", "16px"),
        );
        nav.push(format!(
            "<a{} href=\"{href}\"{style}>{}</a>",
            ctx.element(ElementKey::Links),
            escape_html(&link.text)
        ));
    }

    let table = format!(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\n<tr>\n\
         <td style=\"vertical-align:middle\">{brand}</td>\n\
         <td style=\"vertical-align:middle; text-align:right\">{}</td>\n\
         </tr>\n</table>",
        nav.join(" ")
    );
    section(ctx, block, vec![table])
}
