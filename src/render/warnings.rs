//! Advisory problems found while rendering

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    /// Embedded image; most email clients block these
    DataUriImage,
    /// Embedded image above the configured size threshold
    OversizedImage,
    /// Image block without a source
    MissingImageSource,
    /// Link or image source with a disallowed scheme, replaced by `#`
    UnsafeLink,
    /// Style value that had to be stripped of unsafe characters
    SanitizedCss,
    /// No renderer registered for the block kind
    MissingRenderer,
}

impl WarningKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WarningKind::DataUriImage => "data-uri-image",
            WarningKind::OversizedImage => "oversized-image",
            WarningKind::MissingImageSource => "missing-image-source",
            WarningKind::UnsafeLink => "unsafe-link",
            WarningKind::SanitizedCss => "sanitized-css",
            WarningKind::MissingRenderer => "missing-renderer",
        }
    }
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-blocking problem attached to one block, or to the document shell
/// when `block_id` is empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderWarning {
    pub block_id: String,
    pub kind: WarningKind,
    pub message: String,
}

impl fmt::Display for RenderWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.block_id.is_empty() {
            write!(f, "[{}] document: {}", self.kind, self.message)
        } else {
            write!(f, "[{}] block {}: {}", self.kind, self.block_id, self.message)
        }
    }
}
