use crate::model::{Block, BlockContent, ElementKey, FieldType};
use crate::render::context::RenderContext;
use crate::render::escape::{escape_html, escape_multiline};
use crate::style::{resolve, InlineStyle};

use super::{button, button_style, section, text_element, text_style};

pub(super) fn render_contact_form(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let BlockContent::ContactForm(form) = &block.content else {
        return String::new();
    };
    let heading = text_element(ctx, block, ElementKey::Heading, "h2", &form.heading);
    let action = ctx.href(form.action.as_deref().unwrap_or_default());

    let label = resolve(block, Some(ElementKey::Text));
    let input = resolve(block, Some(ElementKey::Body));
    let mut fields = Vec::with_capacity(form.fields.len());
    for (i, field) in form.fields.iter().enumerate() {
        let name = format!("field-{}", i + 1);
        let label_style = ctx.style(text_style(&label).push("display", "block"));
        let marker = if field.required { " *" } else { "" };
        let required = if field.required { " required" } else { "" };
        let input_style = ctx.style(
            text_style(&input)
                .push("display", "block")
                .push("width", "100%")
                .push("box-sizing", "border-box"),
        );
        let control = match field.field_type {
            FieldType::Textarea => format!(
                "<textarea{} id=\"{name}\" name=\"{name}\" rows=\"4\"{required}{input_style}></textarea>",
                ctx.element(ElementKey::Body)
            ),
            other => format!(
                "<input{} type=\"{}\" id=\"{name}\" name=\"{name}\"{required}{input_style}>",
                ctx.element(ElementKey::Body),
                other.as_str()
            ),
        };
        fields.push(format!(
            "<label{} for=\"{name}\"{label_style}>{}{marker}</label>\n{control}",
            ctx.element(ElementKey::Text),
            escape_html(&field.label)
        ));
    }

    let submit = if form.submit_text.trim().is_empty() {
        String::new()
    } else {
        let style = ctx.style(button_style(&resolve(block, Some(ElementKey::Button))).push("cursor", "pointer"));
        format!(
            "<button type=\"submit\"{}{style}>{}</button>",
            ctx.element(ElementKey::Button),
            escape_multiline(&form.submit_text)
        )
    };
    fields.push(submit);
    let body: Vec<&str> = fields.iter().map(String::as_str).filter(|f| !f.is_empty()).collect();
    let form_html = format!(
        "<form action=\"{action}\" method=\"post\" style=\"margin:0\">\n{}\n</form>",
        body.join("\n")
    );
    section(ctx, block, vec![heading, form_html])
}

pub(super) fn render_signup(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let BlockContent::Signup(signup) = &block.content else {
        return String::new();
    };
    let heading = text_element(ctx, block, ElementKey::Heading, "h2", &signup.heading);
    let description = text_element(ctx, block, ElementKey::Body, "p", &signup.description);

    let field_style = ctx.style(
        InlineStyle::new()
            .push("width", "100%")
            .push("box-sizing", "border-box")
            .push("padding", "12px")
            .push("border", "1px solid #d1d5db")
            .push("border-radius", "6px")
            .px("font-size", 14.0),
    );
    let field = format!(
        "<input type=\"email\" placeholder=\"{}\"{field_style}>",
        escape_html(&signup.placeholder)
    );
    let cta = button(ctx, block, &signup.button_text, &signup.button_url);
    let row = format!(
        "<table role=\"presentation\" width=\"100%\" cellpadding=\"0\" cellspacing=\"0\" border=\"0\">\n<tr>\n\
         <td style=\"padding:0 8px 0 0; vertical-align:middle\">{field}</td>\n\
         <td width=\"1%\" style=\"vertical-align:middle; white-space:nowrap\">{cta}</td>\n\
         </tr>\n</table>"
    );
    section(ctx, block, vec![heading, description, row])
}
