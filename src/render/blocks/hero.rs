use crate::model::{Block, BlockContent, ElementKey};
use crate::render::context::RenderContext;
use crate::style::{css::css_url, resolve};

use super::{button, container_style, section_styled, text_element};

pub(super) fn render(block: &Block, ctx: &mut RenderContext<'_>) -> String {
    let BlockContent::Hero(hero) = &block.content else {
        return String::new();
    };

    let mut style = container_style(&resolve(block, None));
    if let Some(raw) = hero.background_image.as_deref().filter(|s| !s.trim().is_empty()) {
        // checked like any image source; image_src warns when it refuses one
        if ctx.image_src(raw).is_some() {
            style = style
                .push("background-image", css_url(raw.trim()))
                .push("background-size", "cover")
                .push("background-position", "center");
        }
    }

    let parts = vec![
        text_element(ctx, block, ElementKey::Heading, "h1", &hero.headline),
        text_element(ctx, block, ElementKey::Subheading, "p", &hero.subheading),
        button(ctx, block, &hero.cta_text, &hero.cta_url),
    ];
    section_styled(ctx, style, parts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeroContent;
    use crate::render::{RenderMode, WarningKind};
    use crate::RenderConfig;

    fn hero(background: &str) -> Block {
        Block::new(
            "h1",
            BlockContent::Hero(HeroContent {
                headline: "Launch".into(),
                background_image: Some(background.into()),
                ..Default::default()
            }),
        )
    }

    fn render_with_warnings(block: &Block) -> (String, Vec<WarningKind>) {
        let config = RenderConfig::default();
        let mut ctx = RenderContext::new(&config, RenderMode::Export);
        ctx.begin_block(&block.id, false);
        let html = render(block, &mut ctx);
        let kinds = ctx.into_warnings().into_iter().map(|w| w.kind).collect();
        (html, kinds)
    }

    #[test]
    fn data_uri_background_is_kept() {
        let (html, warnings) = render_with_warnings(&hero("data:image/png;base64,aGVsbG8="));
        assert!(html.contains("background-image:url(&#39;data:image/png;base64,aGVsbG8=&#39;)"));
        assert_eq!(warnings, vec![WarningKind::DataUriImage]);
    }

    #[test]
    fn awkward_remote_background_is_escaped() {
        let (html, warnings) = render_with_warnings(&hero("https://cdn.example.com/spring sale (1).jpg"));
        assert!(html.contains("spring%20sale%20(1).jpg"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn refused_background_is_reported() {
        let (html, warnings) = render_with_warnings(&hero("javascript:alert(1)"));
        assert!(!html.contains("background-image"));
        assert_eq!(warnings, vec![WarningKind::UnsafeLink]);
    }
}
