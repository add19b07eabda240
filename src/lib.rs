//! Blockprint rendering engine
//!
//! A deterministic HTML rendering engine for block-based email templates and
//! landing pages. Templates are ordered lists of typed blocks; the engine
//! turns them into standalone, inline-styled HTML and drives a live preview
//! that resolves styles exactly like the export.
//!
//! # Features
//!
//! - **Deterministic export**: identical templates render byte-identical HTML
//! - **Total style resolution**: every property falls back to a kind default
//! - **Registry dispatch**: one renderer per block kind, replaceable at runtime
//! - **Preview parity** (`parity` feature): structural checks that the editor
//!   canvas matches the export
//!
//! # Example
//!
//! ```
//! use blockprint::model::{Block, BlockContent, StyleBag, Template, TextContent};
//! use blockprint::{HtmlSerializer, RenderConfig};
//!
//! let block = Block::new("b1", BlockContent::Text(TextContent { content: "Hello".into() }))
//!     .with_style(StyleBag { font_size: Some(16.0), padding: Some(10.0), ..Default::default() });
//! let template = Template::new("t1", "Welcome").with_blocks(vec![block]);
//!
//! let config = RenderConfig {
//!     container_width: 640,
//!     ..Default::default()
//! };
//! let out = HtmlSerializer::new(config).render(&template);
//! assert!(out.html.contains("font-size:16px; padding:10px"));
//! println!("{} ({})", blockprint::export_file_name(&template), out.digest());
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

// Block model: templates, blocks, style bags, edits and list operations
pub mod model;

// Style resolution and inline CSS emission
pub mod style;

// HTML serializer and the kind -> renderer registry
pub mod render;

// Editor canvas, resize gestures and parity checks
pub mod preview;

// Storage, favorites and clipboard collaborators
pub mod platform;

pub use model::{Block, BlockContent, BlockKind, Template};
pub use preview::{PreviewRenderer, PreviewState};
pub use render::{export_file_name, HtmlSerializer, Registry, RenderWarning, Rendered, SourceStats};

/// Configuration for the serializer and preview
///
/// The defaults match the common 600px single-column email layout:
/// - `container_width` is the max width of the centered content column, and
///   the reference width for percentage resize gestures
/// - data-URI images are reported, and those above 1 MiB are flagged as oversized
///
/// # Examples
///
/// ```
/// let cfg = blockprint::RenderConfig::default();
/// assert_eq!(cfg.container_width, 600);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Max width of the content column in px
    pub container_width: u32,
    /// Page background behind the content column
    pub body_background: String,
    /// Background of the content column
    pub content_background: String,
    /// Font stack applied to the whole document
    pub font_family: String,
    /// `lang` attribute of the document
    pub lang: String,
    /// Embedded images above this many decoded bytes raise `OversizedImage`
    pub oversized_image_bytes: usize,
    /// Whether embedded (data URI) images raise `DataUriImage`
    pub warn_on_data_uri: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            container_width: 600,
            body_background: "#f5f5f5".to_string(),
            content_background: "#ffffff".to_string(),
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            lang: "en".to_string(),
            oversized_image_bytes: model::image::DEFAULT_OVERSIZED_IMAGE_BYTES,
            warn_on_data_uri: true,
        }
    }
}

impl RenderConfig {
    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Render `template` with the default configuration and built-in renderers
pub fn render(template: &Template) -> Rendered {
    HtmlSerializer::default().render(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.container_width, 600);
        assert_eq!(config.oversized_image_bytes, 1024 * 1024);
        assert!(config.warn_on_data_uri);
    }

    #[test]
    fn test_partial_config_json() {
        let config = RenderConfig::from_json(r#"{"containerWidth": 720, "lang": "de"}"#).unwrap();
        assert_eq!(config.container_width, 720);
        assert_eq!(config.lang, "de");
        assert_eq!(config.body_background, "#f5f5f5");
    }
}
