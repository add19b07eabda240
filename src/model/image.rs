//! Image references: remote URLs and embedded `data:` URIs

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Upload size above which an advisory warning is raised
pub const DEFAULT_OVERSIZED_IMAGE_BYTES: usize = 1024 * 1024;

/// A parsed `data:[<mime>][;base64],<payload>` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri<'a> {
    pub mime: &'a str,
    pub is_base64: bool,
    pub payload: &'a str,
}

impl DataUri<'_> {
    /// Size of the embedded bytes.
    ///
    /// Invalid base64 falls back to the 3/4 estimate of the payload length.
    pub fn decoded_len(&self) -> usize {
        if !self.is_base64 {
            return self.payload.len();
        }
        match STANDARD.decode(self.payload.trim()) {
            Ok(bytes) => bytes.len(),
            Err(_) => self.payload.len() / 4 * 3,
        }
    }
}

pub fn is_data_uri(src: &str) -> bool {
    src.trim_start()
        .get(..5)
        .map(|p| p.eq_ignore_ascii_case("data:"))
        .unwrap_or(false)
}

pub fn parse_data_uri(src: &str) -> Option<DataUri<'_>> {
    let src = src.trim();
    if !is_data_uri(src) {
        return None;
    }
    let rest = &src[5..];
    let (meta, payload) = rest.split_once(',')?;
    let (mime, is_base64) = match meta.strip_suffix(";base64") {
        Some(m) => (m, true),
        None => (meta, false),
    };
    Some(DataUri {
        mime: if mime.is_empty() { "text/plain" } else { mime },
        is_base64,
        payload,
    })
}

/// The result of turning an uploaded file into an embeddable reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub src: String,
    pub byte_len: usize,
    pub oversized: bool,
}

/// Encode raw image bytes as a data URI.
///
/// Size is never a hard limit: above `threshold` the result is flagged and a
/// warning is logged, and the upload still goes through.
pub fn embed_image(mime: &str, bytes: &[u8], threshold: usize) -> EmbeddedImage {
    let oversized = bytes.len() > threshold;
    if oversized {
        log::warn!(
            "large image embedded ({:.2} MB); consider a smaller file or a hosted URL",
            bytes.len() as f64 / 1024.0 / 1024.0
        );
    }
    log::warn!("embedded images are stored as data URIs and are blocked by most email clients; use https URLs for sending");
    EmbeddedImage {
        src: format!("data:{};base64,{}", mime, STANDARD.encode(bytes)),
        byte_len: bytes.len(),
        oversized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_base64_data_uri() {
        let uri = parse_data_uri("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(uri.mime, "image/png");
        assert!(uri.is_base64);
        assert_eq!(uri.decoded_len(), 5);
    }

    #[test]
    fn remote_urls_are_not_data_uris() {
        assert!(parse_data_uri("https://cdn.test/a.png").is_none());
        assert!(is_data_uri("DATA:image/gif;base64,R0lG"));
        assert!(!is_data_uri("dat"));
    }

    #[test]
    fn embed_flags_oversized_without_rejecting() {
        let bytes = vec![0u8; 32];
        let small = embed_image("image/png", &bytes, 64);
        assert!(!small.oversized);
        assert!(small.src.starts_with("data:image/png;base64,"));

        let big = embed_image("image/png", &bytes, 16);
        assert!(big.oversized);
        assert_eq!(parse_data_uri(&big.src).unwrap().decoded_len(), 32);
    }
}
