//! Text escaping and link checks

use url::Url;

/// Schemes a link may carry in exported markup
pub const ALLOWED_LINK_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Schemes an image source may carry (data URIs are handled separately)
pub const ALLOWED_IMAGE_SCHEMES: &[&str] = &["http", "https"];

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape, keeping author line breaks as `<br>`
pub fn escape_multiline(input: &str) -> String {
    escape_html(input).replace("\r\n", "\n").replace('\n', "<br>")
}

/// Text safe to place inside `<!-- ... -->`
pub fn escape_comment(input: &str) -> String {
    escape_html(input).replace("--", "- -")
}

/// Outcome of checking a link or source against a scheme allowlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkCheck<'a> {
    /// Empty input
    Empty,
    /// Relative reference or fragment
    Relative(&'a str),
    /// Absolute URL with an allowed scheme
    Allowed(&'a str),
    /// Absolute URL whose scheme is not on the list
    Rejected { scheme: String },
}

pub fn check_link<'a>(raw: &'a str, allowed: &[&str]) -> LinkCheck<'a> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return LinkCheck::Empty;
    }
    if trimmed.starts_with(|c| matches!(c, '#' | '/' | '?' | '.')) && !trimmed.starts_with("//") {
        return LinkCheck::Relative(trimmed);
    }
    match Url::parse(trimmed) {
        Ok(url) => {
            let scheme = url.scheme().to_ascii_lowercase();
            if allowed.contains(&scheme.as_str()) {
                LinkCheck::Allowed(trimmed)
            } else {
                LinkCheck::Rejected { scheme }
            }
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            // `page.html` is relative, but `javascript :x` style oddities are not
            if trimmed.contains(':') {
                LinkCheck::Rejected {
                    scheme: trimmed.split(':').next().unwrap_or_default().to_string(),
                }
            } else {
                LinkCheck::Relative(trimmed)
            }
        }
        Err(_) => LinkCheck::Rejected {
            scheme: String::new(),
        },
    }
}
