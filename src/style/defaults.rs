//! Hardcoded per-kind defaults, the last link of every fallback chain

use super::sides::BoxSides;
use super::{ResolvedBorder, ResolvedStyle};
use crate::model::{Alignment, BlockKind, Dimension, ElementKey, Extent, FontStyle, FontWeight};

const INK: &str = "#1f2937";
const BODY: &str = "#4b5563";
const STRONG: &str = "#111827";
const ACCENT: &str = "#ff6a00";

fn base() -> ResolvedStyle {
    ResolvedStyle {
        padding: BoxSides::uniform(0.0),
        margin: BoxSides::uniform(0.0),
        background_color: "transparent".to_string(),
        color: "#333333".to_string(),
        font_size: 16.0,
        font_weight: FontWeight::NORMAL,
        font_style: FontStyle::Normal,
        line_height: 1.5,
        text_align: Alignment::Left,
        border: ResolvedBorder {
            width: 0.0,
            color: "#000000".to_string(),
            radius: 0.0,
        },
        width: Dimension::percent(100.0),
        height: Extent::Auto,
    }
}

fn section(background: &str, padding: f64, align: Alignment) -> ResolvedStyle {
    ResolvedStyle {
        padding: BoxSides::uniform(padding),
        background_color: background.to_string(),
        text_align: align,
        ..base()
    }
}

fn heading(size: f64) -> ResolvedStyle {
    ResolvedStyle {
        margin: BoxSides::new(0.0, 0.0, 16.0, 0.0),
        color: INK.to_string(),
        font_size: size,
        font_weight: FontWeight::BOLD,
        line_height: 1.2,
        ..base()
    }
}

fn copy(size: f64, color: &str) -> ResolvedStyle {
    ResolvedStyle {
        color: color.to_string(),
        font_size: size,
        ..base()
    }
}

fn strong(size: f64) -> ResolvedStyle {
    ResolvedStyle {
        color: STRONG.to_string(),
        font_size: size,
        font_weight: FontWeight::BOLD,
        line_height: 1.3,
        ..base()
    }
}

fn button() -> ResolvedStyle {
    ResolvedStyle {
        padding: BoxSides::symmetric(12.0, 24.0),
        background_color: ACCENT.to_string(),
        color: "#ffffff".to_string(),
        font_weight: FontWeight::BOLD,
        line_height: 1.2,
        text_align: Alignment::Center,
        border: ResolvedBorder {
            width: 0.0,
            color: ACCENT.to_string(),
            radius: 6.0,
        },
        width: Dimension::percent(100.0),
        ..base()
    }
}

fn with_bottom(mut style: ResolvedStyle, bottom: f64) -> ResolvedStyle {
    style.margin.bottom = bottom;
    style
}

/// Defaults for a kind's container (`element = None`) or one of its elements
pub fn for_element(kind: BlockKind, element: Option<ElementKey>) -> ResolvedStyle {
    use BlockKind as K;
    use ElementKey as E;

    match (kind, element) {
        (K::Text, _) => ResolvedStyle {
            padding: BoxSides::uniform(10.0),
            ..base()
        },
        (K::Title, _) => ResolvedStyle {
            padding: BoxSides::uniform(20.0),
            color: STRONG.to_string(),
            font_size: 32.0,
            font_weight: FontWeight::BOLD,
            line_height: 1.2,
            text_align: Alignment::Center,
            ..base()
        },

        (K::Image, Some(E::Image)) => ResolvedStyle {
            width: Dimension::px(300.0),
            ..base()
        },
        (K::Image, _) => section("transparent", 10.0, Alignment::Center),

        (K::Header, None) => section("#ffffff", 20.0, Alignment::Left),
        (K::Header, Some(E::Logo)) => ResolvedStyle {
            width: Dimension::px(120.0),
            height: Extent::Length(Dimension::px(40.0)),
            ..base()
        },
        (K::Header, Some(E::Company)) => ResolvedStyle {
            font_size: 18.0,
            font_weight: FontWeight::BOLD,
            ..base()
        },
        (K::Header, Some(E::Links)) => copy(14.0, "#666666"),

        (K::Hero, None) => section("#f3f4f6", 48.0, Alignment::Center),
        (K::Hero, Some(E::Heading)) => heading(40.0),
        (K::Hero, Some(E::Subheading)) => with_bottom(copy(18.0, BODY), 24.0),

        (K::Testimonials, None) => section("#f9fafb", 40.0, Alignment::Center),
        (K::Testimonials, Some(E::Body)) => ResolvedStyle {
            font_style: FontStyle::Italic,
            ..with_bottom(copy(16.0, "#374151"), 12.0)
        },
        (K::Testimonials, Some(E::ItemTitle)) => strong(14.0),
        (K::Testimonials, Some(E::ItemBody)) => with_bottom(copy(13.0, "#6b7280"), 24.0),

        (K::About, Some(E::Image)) => with_bottom(base(), 16.0),

        (K::ContactForm, None) => section("#ffffff", 40.0, Alignment::Left),
        (K::ContactForm, Some(E::Heading)) => heading(24.0),
        (K::ContactForm, Some(E::Body)) => ResolvedStyle {
            padding: BoxSides::uniform(10.0),
            margin: BoxSides::new(4.0, 0.0, 12.0, 0.0),
            border: ResolvedBorder {
                width: 1.0,
                color: "#d1d5db".to_string(),
                radius: 4.0,
            },
            ..copy(14.0, "#374151")
        },

        (K::Footer, None) => ResolvedStyle {
            color: "#9ca3af".to_string(),
            font_size: 12.0,
            ..section(INK, 32.0, Alignment::Center)
        },
        (K::Footer, Some(E::Company)) => ResolvedStyle {
            color: "#f9fafb".to_string(),
            ..strong(14.0)
        },
        (K::Footer, Some(E::Links)) => copy(12.0, "#d1d5db"),
        (K::Footer, Some(_)) => ResolvedStyle {
            line_height: 1.6,
            ..copy(12.0, "#9ca3af")
        },

        (K::Spacer, _) => ResolvedStyle {
            height: Extent::Length(Dimension::px(40.0)),
            ..base()
        },

        (K::Pricing, Some(E::ItemTitle)) => with_bottom(strong(20.0), 8.0),
        (K::Pricing, Some(E::Subheading)) => ResolvedStyle {
            color: INK.to_string(),
            font_size: 32.0,
            font_weight: FontWeight::BOLD,
            line_height: 1.2,
            ..with_bottom(base(), 12.0)
        },
        (K::Pricing, Some(E::ItemBody)) => ResolvedStyle {
            padding: BoxSides::symmetric(4.0, 0.0),
            ..copy(14.0, BODY)
        },

        (K::Faq, None) => section("#ffffff", 40.0, Alignment::Left),
        (K::Faq, Some(E::ItemTitle)) => with_bottom(strong(16.0), 6.0),
        (K::Faq, Some(E::ItemBody)) => with_bottom(copy(14.0, BODY), 16.0),

        (K::Signup, None) => section("#f3f4f6", 40.0, Alignment::Center),
        (K::Signup, Some(E::Body)) => with_bottom(copy(16.0, BODY), 16.0),

        // shared by the remaining section kinds
        (_, Some(E::Heading)) => with_bottom(heading(28.0), 24.0),
        (_, Some(E::Subheading)) => with_bottom(copy(18.0, BODY), 16.0),
        (_, Some(E::Button)) => button(),
        (_, Some(E::ItemTitle)) => with_bottom(strong(18.0), 8.0),
        (_, Some(E::ItemBody) | Some(E::Body)) => copy(14.0, BODY),
        (_, Some(E::Image) | Some(E::Logo)) => base(),
        (_, Some(E::Links) | Some(E::Company) | Some(E::Text)) => copy(14.0, BODY),
        (_, None) => section("#ffffff", 40.0, Alignment::Center),
    }
}
