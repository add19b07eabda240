//! Style resolution
//!
//! [`resolve`] turns a block (plus an optional sub-element) into a fully
//! concrete [`ResolvedStyle`]. Every property walks the same chain:
//!
//! 1. the element override, if the element has one and the field is set;
//! 2. the block-level style, for the container and the kind's primary element;
//! 3. the kind default from [`defaults`].
//!
//! Presence is checked with `Option`, so an explicit zero never collapses to
//! the default. Both the HTML serializer and the preview renderer call this
//! function; neither computes styles on its own.

use crate::model::{Alignment, Block, Dimension, ElementKey, Extent, FontStyle, FontWeight, StyleBag};

pub mod css;
pub mod defaults;
pub mod sides;

pub use css::InlineStyle;
pub use sides::BoxSides;

use sides::{resolve_sides, SideProperty};

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBorder {
    pub width: f64,
    pub color: String,
    pub radius: f64,
}

impl ResolvedBorder {
    /// Border lines are drawn only for a positive width
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }
}

/// Every style property with a concrete value
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub padding: BoxSides,
    pub margin: BoxSides,
    pub background_color: String,
    pub color: String,
    pub font_size: f64,
    pub font_weight: FontWeight,
    pub font_style: FontStyle,
    pub line_height: f64,
    pub text_align: Alignment,
    pub border: ResolvedBorder,
    pub width: Dimension,
    pub height: Extent,
}

fn first<T: Clone>(levels: &[&StyleBag], get: impl Fn(&StyleBag) -> Option<T>) -> Option<T> {
    levels.iter().find_map(|bag| get(*bag))
}

/// Finite and non-negative; anything else falls through to the next level
fn first_len(levels: &[&StyleBag], get: impl Fn(&StyleBag) -> Option<f64>) -> Option<f64> {
    levels
        .iter()
        .find_map(|bag| get(*bag).filter(|v| v.is_finite() && *v >= 0.0))
}

/// Resolve the style of `block`, or of one of its sub-elements.
///
/// `element = None` resolves the block container.
pub fn resolve(block: &Block, element: Option<ElementKey>) -> ResolvedStyle {
    let kind = block.kind();
    let default = defaults::for_element(kind, element);

    let mut levels: Vec<&StyleBag> = Vec::with_capacity(2);
    if let Some(over) = element.and_then(|e| block.element_style(e)) {
        levels.push(over);
    }
    if element.is_none() || element == kind.primary_element() {
        levels.push(&block.style);
    }

    resolve_levels(&levels, default)
}

pub(crate) fn resolve_levels(levels: &[&StyleBag], default: ResolvedStyle) -> ResolvedStyle {
    let text_align = levels
        .iter()
        .find_map(|bag| bag.text_alignment.or(bag.alignment))
        .unwrap_or(default.text_align);

    ResolvedStyle {
        padding: resolve_sides(levels, SideProperty::Padding, default.padding),
        margin: resolve_sides(levels, SideProperty::Margin, default.margin),
        background_color: first(levels, |b| b.background_color.clone()).unwrap_or(default.background_color),
        color: first(levels, |b| b.font_color.clone()).unwrap_or(default.color),
        font_size: first_len(levels, |b| b.font_size).unwrap_or(default.font_size),
        font_weight: first(levels, |b| b.font_weight).unwrap_or(default.font_weight),
        font_style: first(levels, |b| b.font_style).unwrap_or(default.font_style),
        line_height: first_len(levels, |b| b.line_height).unwrap_or(default.line_height),
        text_align,
        border: ResolvedBorder {
            width: first_len(levels, |b| b.border_width).unwrap_or(default.border.width),
            color: first(levels, |b| b.border_color.clone()).unwrap_or(default.border.color),
            radius: first_len(levels, |b| b.border_radius).unwrap_or(default.border.radius),
        },
        width: first(levels, |b| b.width).unwrap_or(default.width),
        height: first(levels, |b| b.height).unwrap_or(default.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockContent, BlockKind, HeroContent, TextContent};

    fn text_block(style: StyleBag) -> Block {
        Block::new(
            "t",
            BlockContent::Text(TextContent {
                content: "Hello".into(),
            }),
        )
        .with_style(style)
    }

    #[test]
    fn empty_block_resolves_to_kind_defaults() {
        for kind in BlockKind::ALL {
            let block = Block::new("x", crate::model::palette::default_content(kind));
            assert_eq!(resolve(&block, None), defaults::for_element(kind, None), "{kind}");
        }
    }

    #[test]
    fn override_beats_block_beats_default() {
        let block = text_block(StyleBag {
            font_size: Some(18.0),
            font_color: Some("#111111".into()),
            ..Default::default()
        })
        .with_element_style(
            ElementKey::Text,
            StyleBag {
                font_size: Some(0.0),
                ..Default::default()
            },
        );
        let s = resolve(&block, Some(ElementKey::Text));
        assert_eq!(s.font_size, 0.0);
        assert_eq!(s.color, "#111111");
        assert_eq!(s.line_height, defaults::for_element(BlockKind::Text, Some(ElementKey::Text)).line_height);
    }

    #[test]
    fn explicit_zero_padding_is_kept() {
        let block = text_block(StyleBag {
            padding: Some(0.0),
            ..Default::default()
        });
        assert_eq!(resolve(&block, Some(ElementKey::Text)).padding, BoxSides::uniform(0.0));
    }

    #[test]
    fn text_alignment_prefers_specific_over_general() {
        let block = text_block(StyleBag {
            alignment: Some(Alignment::Right),
            ..Default::default()
        })
        .with_element_style(
            ElementKey::Text,
            StyleBag {
                alignment: Some(Alignment::Center),
                ..Default::default()
            },
        );
        assert_eq!(resolve(&block, Some(ElementKey::Text)).text_align, Alignment::Center);
        assert_eq!(resolve(&block, None).text_align, Alignment::Right);
    }

    #[test]
    fn secondary_elements_ignore_block_level_style() {
        let hero = Block::new("h", BlockContent::Hero(HeroContent::default())).with_style(StyleBag {
            padding: Some(99.0),
            ..Default::default()
        });
        let button = resolve(&hero, Some(ElementKey::Button));
        assert_eq!(button.padding, defaults::for_element(BlockKind::Hero, Some(ElementKey::Button)).padding);
        assert_eq!(resolve(&hero, None).padding, BoxSides::uniform(99.0));
    }

    #[test]
    fn negative_lengths_fall_back() {
        let block = text_block(StyleBag {
            font_size: Some(-4.0),
            border_width: Some(-1.0),
            ..Default::default()
        });
        let s = resolve(&block, Some(ElementKey::Text));
        let d = defaults::for_element(BlockKind::Text, Some(ElementKey::Text));
        assert_eq!(s.font_size, d.font_size);
        assert!(!s.border.is_visible());
    }
}
