//! The document shell around the block fragments

use crate::model::Template;
use crate::style::InlineStyle;

use super::context::RenderContext;
use super::escape::escape_html;

/// Page title: the subject line, falling back to the template name
pub fn title(template: &Template) -> &str {
    if template.subject.trim().is_empty() {
        template.name.trim()
    } else {
        template.subject.trim()
    }
}

/// Wrap block fragments (already joined) in a standalone HTML document.
///
/// Configuration values that needed sanitizing are reported through `ctx`
/// as document-level warnings.
pub fn wrap(ctx: &mut RenderContext<'_>, template: &Template, body: &str) -> String {
    let config = ctx.config();
    ctx.begin_block("", false);
    let body_style = ctx.style(
        InlineStyle::new()
            .push("margin", "0")
            .push("padding", "0")
            .color("background-color", &config.body_background)
            .font_family(&config.font_family),
    );
    let container_style = ctx.style(
        InlineStyle::new()
            .px("max-width", f64::from(config.container_width))
            .push("margin", "0 auto")
            .color("background-color", &config.content_background),
    );

    let mut out = String::with_capacity(body.len() + 512);
    out.push_str("<!DOCTYPE html>\n");
    out.push_str(&format!("<html lang=\"{}\">\n", escape_html(config.lang.trim())));
    out.push_str("<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(title(template))));
    out.push_str("</head>\n");
    out.push_str(&format!("<body{body_style}>\n"));
    out.push_str(&format!("<div{container_style}>\n"));
    if !body.is_empty() {
        out.push_str(body);
        out.push('\n');
    }
    out.push_str("</div>\n");
    out.push_str("</body>\n");
    out.push_str("</html>\n");
    out
}
