use crate::model::{Block, BlockContent, ElementKey, PricingPlan};
use crate::render::context::RenderContext;
use crate::render::escape::escape_html;
use crate::style::{resolve, InlineStyle};

use super::{button, columns_table, section, text_element, text_style};

const HIGHLIGHT: &str = "#ff6a00";

fn plan_card(ctx: &mut RenderContext<'_>, block: &Block, plan: &PricingPlan) -> String {
    let border = if plan.highlighted {
        format!("2px solid {HIGHLIGHT}")
    } else {
        "1px solid #e5e7eb".to_string()
    };
    let card_style = ctx.style(
        InlineStyle::new()
            .push("padding", "24px")
            .push("border", border)
            .push("border-radius", "8px")
            .push("background-color", "#ffffff")
            .push("text-align", "center"),
    );

    let price = if plan.price.trim().is_empty() {
        String::new()
    } else {
        let style = ctx.style(text_style(&resolve(block, Some(ElementKey::Subheading))));
        let period = if plan.period.trim().is_empty() {
            String::new()
        } else {
            format!(
                "<span style=\"font-size:14px; font-weight:normal; color:#6b7280\">/{}</span>",
                escape_html(plan.period.trim().trim_start_matches('/'))
            )
        };
        format!(
            "<p{}{style}>{}{period}</p>",
            ctx.element(ElementKey::Subheading),
            escape_html(&plan.price)
        )
    };

    let features = if plan.features.is_empty() {
        String::new()
    } else {
        let item = resolve(block, Some(ElementKey::ItemBody));
        let mut items = Vec::with_capacity(plan.features.len());
        for feature in &plan.features {
            let style = ctx.style(text_style(&item));
            items.push(format!(
                "<li{}{style}>{}</li>",
                ctx.element(ElementKey::ItemBody),
                escape_html(feature)
            ));
        }
        format!(
            "<ul style=\"list-style:none; margin:0 0 16px 0; padding:0\">\n{}\n</ul>",
            items.join("\n")
        )
    };

    let parts = [
        text_element(ctx, block, ElementKey::ItemTitle, "h3", &plan.name),
        price,
        features,
        button(ctx, block, &plan.cta_text, &plan.cta_url),
    ];
    let inner: Vec<&str> = parts.iter().map(String::as_str).filter(|p| !p.is_empty()).collect();
    format!("<div{card_style}>\n{}\n</div>", inner.join("\n"))
}

pub(super) fn render(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let BlockContent::Pricing(pricing) = &block.content else {
        return String::new();
    };
    let heading = text_element(ctx, block, ElementKey::Heading, "h2", &pricing.heading);
    let cards: Vec<String> = pricing.plans.iter().map(|p| plan_card(ctx, block, p)).collect();
    let grid = columns_table(cards, 0);
    section(ctx, block, vec![heading, grid])
}
