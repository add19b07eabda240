//! Sparse style bags attached to blocks and their sub-elements

use serde::{Deserialize, Serialize};
use std::fmt;

use super::dimension::{Dimension, Extent};

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    pub fn as_css(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeightKeyword {
    Normal,
    Bold,
    Bolder,
    Lighter,
}

/// `font-weight` as either a keyword or a numeric weight (`600`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontWeight {
    Numeric(u16),
    Keyword(FontWeightKeyword),
}

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight::Keyword(FontWeightKeyword::Normal);
    pub const BOLD: FontWeight = FontWeight::Keyword(FontWeightKeyword::Bold);
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontWeight::Numeric(n) => write!(f, "{n}"),
            FontWeight::Keyword(FontWeightKeyword::Normal) => f.write_str("normal"),
            FontWeight::Keyword(FontWeightKeyword::Bold) => f.write_str("bold"),
            FontWeight::Keyword(FontWeightKeyword::Bolder) => f.write_str("bolder"),
            FontWeight::Keyword(FontWeightKeyword::Lighter) => f.write_str("lighter"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

impl FontStyle {
    pub fn as_css(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

/// Addressable sub-elements of a block that may carry their own overrides
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKey {
    Text,
    Heading,
    Subheading,
    Body,
    Button,
    Image,
    Logo,
    Company,
    Links,
    ItemTitle,
    ItemBody,
}

impl ElementKey {
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKey::Text => "text",
            ElementKey::Heading => "heading",
            ElementKey::Subheading => "subheading",
            ElementKey::Body => "body",
            ElementKey::Button => "button",
            ElementKey::Image => "image",
            ElementKey::Logo => "logo",
            ElementKey::Company => "company",
            ElementKey::Links => "links",
            ElementKey::ItemTitle => "item-title",
            ElementKey::ItemBody => "item-body",
        }
    }
}

/// A sparse bag of style properties.
///
/// Used both for block-level style and for per-element overrides. Every
/// field is optional and falls back independently; an explicit `Some(0.0)`
/// is a real value, distinct from `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleBag {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_alignment: Option<Alignment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Extent>,
}

impl StyleBag {
    pub fn is_empty(&self) -> bool {
        *self == StyleBag::default()
    }

    /// Overlay `patch` on top of `self`: fields set in the patch win.
    pub fn merged(&self, patch: &StyleBag) -> StyleBag {
        fn pick<T: Clone>(patch: &Option<T>, base: &Option<T>) -> Option<T> {
            patch.clone().or_else(|| base.clone())
        }
        StyleBag {
            padding: pick(&patch.padding, &self.padding),
            padding_top: pick(&patch.padding_top, &self.padding_top),
            padding_right: pick(&patch.padding_right, &self.padding_right),
            padding_bottom: pick(&patch.padding_bottom, &self.padding_bottom),
            padding_left: pick(&patch.padding_left, &self.padding_left),
            margin: pick(&patch.margin, &self.margin),
            margin_top: pick(&patch.margin_top, &self.margin_top),
            margin_right: pick(&patch.margin_right, &self.margin_right),
            margin_bottom: pick(&patch.margin_bottom, &self.margin_bottom),
            margin_left: pick(&patch.margin_left, &self.margin_left),
            background_color: pick(&patch.background_color, &self.background_color),
            font_color: pick(&patch.font_color, &self.font_color),
            font_size: pick(&patch.font_size, &self.font_size),
            font_weight: pick(&patch.font_weight, &self.font_weight),
            font_style: pick(&patch.font_style, &self.font_style),
            line_height: pick(&patch.line_height, &self.line_height),
            alignment: pick(&patch.alignment, &self.alignment),
            text_alignment: pick(&patch.text_alignment, &self.text_alignment),
            border_width: pick(&patch.border_width, &self.border_width),
            border_color: pick(&patch.border_color, &self.border_color),
            border_radius: pick(&patch.border_radius, &self.border_radius),
            width: pick(&patch.width, &self.width),
            height: pick(&patch.height, &self.height),
        }
    }
}
