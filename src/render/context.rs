//! Per-render state shared by every block renderer

use crate::model::image::parse_data_uri;
use crate::model::ElementKey;
use crate::style::InlineStyle;
use crate::RenderConfig;

use super::escape::{check_link, escape_html, LinkCheck, ALLOWED_IMAGE_SCHEMES, ALLOWED_LINK_SCHEMES};
use super::warnings::{RenderWarning, WarningKind};

/// Which surface a fragment is rendered for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Standalone export markup
    Export,
    /// Editor canvas: same markup plus `data-bp-*` selection hooks
    Preview,
}

/// Mutable state threaded through one render pass.
///
/// Renderers never touch the output document directly; they return fragments
/// and use the helpers here so escaping, link checks and warnings stay
/// uniform across kinds.
pub struct RenderContext<'a> {
    config: &'a RenderConfig,
    mode: RenderMode,
    block_id: String,
    editing: bool,
    warnings: Vec<RenderWarning>,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a RenderConfig, mode: RenderMode) -> Self {
        Self {
            config,
            mode,
            block_id: String::new(),
            editing: false,
            warnings: Vec::new(),
        }
    }

    pub fn config(&self) -> &'a RenderConfig {
        self.config
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn is_preview(&self) -> bool {
        self.mode == RenderMode::Preview
    }

    /// Whether the current block is in inline-edit mode (preview only)
    pub fn is_editing(&self) -> bool {
        self.is_preview() && self.editing
    }

    /// Point subsequent warnings at `block_id`
    pub fn begin_block(&mut self, block_id: &str, editing: bool) {
        self.block_id.clear();
        self.block_id.push_str(block_id);
        self.editing = editing;
    }

    pub fn block_id(&self) -> &str {
        &self.block_id
    }

    pub fn warn(&mut self, kind: WarningKind, message: impl Into<String>) {
        let warning = RenderWarning {
            block_id: self.block_id.clone(),
            kind,
            message: message.into(),
        };
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[RenderWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<RenderWarning> {
        self.warnings
    }

    /// ` data-bp-element="key"` in preview, nothing in export
    pub fn element(&self, key: ElementKey) -> String {
        if self.is_preview() {
            format!(" data-bp-element=\"{}\"", key.as_str())
        } else {
            String::new()
        }
    }

    /// ` style="..."`, or nothing for an empty declaration list
    pub fn style(&mut self, mut style: InlineStyle) -> String {
        for rejected in style.take_rejected() {
            self.warn(WarningKind::SanitizedCss, format!("unsafe characters removed from `{rejected}`"));
        }
        if style.is_empty() {
            String::new()
        } else {
            format!(" style=\"{}\"", escape_html(&style.to_string()))
        }
    }

    /// Escaped `href` value; disallowed schemes become `#`
    pub fn href(&mut self, raw: &str) -> String {
        match check_link(raw, ALLOWED_LINK_SCHEMES) {
            LinkCheck::Empty => "#".to_string(),
            LinkCheck::Relative(link) | LinkCheck::Allowed(link) => escape_html(link),
            LinkCheck::Rejected { scheme } => {
                self.warn(
                    WarningKind::UnsafeLink,
                    format!("link with scheme `{scheme}` replaced by `#`"),
                );
                "#".to_string()
            }
        }
    }

    /// Escaped image source, or `None` when there is nothing usable to show.
    ///
    /// Data URIs pass through unchanged with an advisory warning.
    pub fn image_src(&mut self, raw: &str) -> Option<String> {
        let trimmed = raw.trim();
        if let Some(uri) = parse_data_uri(trimmed) {
            if self.config.warn_on_data_uri {
                self.warn(
                    WarningKind::DataUriImage,
                    format!("embedded {} image may be blocked by email clients", uri.mime),
                );
            }
            let len = uri.decoded_len();
            if len > self.config.oversized_image_bytes {
                self.warn(
                    WarningKind::OversizedImage,
                    format!(
                        "embedded image is {:.2} MB (threshold {:.2} MB)",
                        len as f64 / 1024.0 / 1024.0,
                        self.config.oversized_image_bytes as f64 / 1024.0 / 1024.0
                    ),
                );
            }
            return Some(escape_html(trimmed));
        }
        match check_link(trimmed, ALLOWED_IMAGE_SCHEMES) {
            LinkCheck::Empty => {
                self.warn(WarningKind::MissingImageSource, "image has no source");
                None
            }
            LinkCheck::Relative(src) | LinkCheck::Allowed(src) => Some(escape_html(src)),
            LinkCheck::Rejected { scheme } => {
                self.warn(
                    WarningKind::UnsafeLink,
                    format!("image source with scheme `{scheme}` dropped"),
                );
                None
            }
        }
    }

    /// ` data-bp-fallback="..."` for images in preview
    pub fn image_fallback(&self, alt: &str) -> String {
        if !self.is_preview() {
            return String::new();
        }
        let label = if alt.trim().is_empty() { "Image unavailable" } else { alt.trim() };
        format!(" data-bp-fallback=\"{}\"", escape_html(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_hooks_only_in_preview() {
        let cfg = RenderConfig::default();
        let export = RenderContext::new(&cfg, RenderMode::Export);
        assert_eq!(export.element(ElementKey::Text), "");
        let preview = RenderContext::new(&cfg, RenderMode::Preview);
        assert_eq!(preview.element(ElementKey::Button), " data-bp-element=\"button\"");
    }

    #[test]
    fn unsafe_href_is_neutralized_with_warning() {
        let cfg = RenderConfig::default();
        let mut ctx = RenderContext::new(&cfg, RenderMode::Export);
        ctx.begin_block("b1", false);
        assert_eq!(ctx.href("javascript:alert(1)"), "#");
        assert_eq!(ctx.href("https://a.test/?q=1&r=2"), "https://a.test/?q=1&amp;r=2");
        let warnings = ctx.into_warnings();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].kind, WarningKind::UnsafeLink);
        assert_eq!(warnings[0].block_id, "b1");
    }

    #[test]
    fn data_uri_sources_warn_but_pass() {
        let cfg = RenderConfig {
            oversized_image_bytes: 2,
            ..Default::default()
        };
        let mut ctx = RenderContext::new(&cfg, RenderMode::Export);
        let src = ctx.image_src("data:image/png;base64,aGVsbG8=");
        assert_eq!(src.as_deref(), Some("data:image/png;base64,aGVsbG8="));
        let kinds: Vec<_> = ctx.warnings().iter().map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WarningKind::DataUriImage, WarningKind::OversizedImage]);
    }

    #[test]
    fn missing_source_is_reported() {
        let cfg = RenderConfig::default();
        let mut ctx = RenderContext::new(&cfg, RenderMode::Export);
        assert!(ctx.image_src("  ").is_none());
        assert_eq!(ctx.warnings()[0].kind, WarningKind::MissingImageSource);
    }
}
