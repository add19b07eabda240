//! Inline `style="..."` emission

use std::fmt;

use super::sides::BoxSides;
use super::{ResolvedBorder, ResolvedStyle};
use crate::model::dimension::format_number;
use crate::model::{Dimension, Extent};

/// Strip characters that could terminate a declaration or the attribute.
///
/// Returns the cleaned value and whether anything was removed.
pub fn sanitize_value(raw: &str) -> (String, bool) {
    strip_chars(raw, |c| matches!(c, '"' | '\''))
}

/// Like [`sanitize_value`], but keeps balanced quotes around family names
/// such as `"Helvetica Neue"`.
pub fn sanitize_font_family(raw: &str) -> (String, bool) {
    let balanced = raw.matches('"').count() % 2 == 0 && raw.matches('\'').count() % 2 == 0;
    strip_chars(raw, |c| !balanced && matches!(c, '"' | '\''))
}

fn strip_chars(raw: &str, also: impl Fn(char) -> bool) -> (String, bool) {
    let cleaned: String = raw
        .chars()
        .filter(|&c| !matches!(c, ';' | '{' | '}' | '<' | '>' | '\\') && !c.is_control() && !also(c))
        .collect();
    let cleaned = cleaned.trim().to_string();
    let changed = cleaned != raw.trim();
    (cleaned, changed)
}

/// `url('...')` for a source that already passed link checks.
///
/// Quotes and backslashes are escaped and whitespace is percent-encoded, so
/// data URIs (which contain `;`) survive intact.
pub fn css_url(src: &str) -> String {
    let mut out = String::with_capacity(src.len() + 8);
    out.push_str("url('");
    for c in src.chars() {
        match c {
            '\\' | '\'' => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_whitespace() || c.is_control() => {
                let mut buf = [0u8; 4];
                for b in c.encode_utf8(&mut buf).bytes() {
                    out.push_str(&format!("%{b:02X}"));
                }
            }
            c => out.push(c),
        }
    }
    out.push_str("')");
    out
}

/// An ordered list of CSS declarations.
///
/// Declarations render in insertion order as `prop:value; prop:value`, so the
/// same sequence of calls always produces the same text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    decls: Vec<(&'static str, String)>,
    rejected: Vec<String>,
}

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a trusted, crate-generated value
    pub fn push(mut self, prop: &'static str, value: impl Into<String>) -> Self {
        self.decls.push((prop, value.into()));
        self
    }

    pub fn px(self, prop: &'static str, value: f64) -> Self {
        self.push(prop, format!("{}px", format_number(value)))
    }

    pub fn number(self, prop: &'static str, value: f64) -> Self {
        self.push(prop, format_number(value))
    }

    pub fn dimension(self, prop: &'static str, d: Dimension) -> Self {
        self.push(prop, d.to_string())
    }

    pub fn extent(self, prop: &'static str, e: Extent) -> Self {
        self.push(prop, e.to_string())
    }

    pub fn sides(self, prop: &'static str, sides: BoxSides) -> Self {
        self.push(prop, sides.to_css())
    }

    pub fn color(self, prop: &'static str, raw: &str) -> Self {
        self.untrusted(prop, raw)
    }

    /// Push a value that came from block data or configuration
    pub fn untrusted(self, prop: &'static str, raw: &str) -> Self {
        self.checked(prop, raw, sanitize_value(raw))
    }

    pub fn font_family(self, raw: &str) -> Self {
        self.checked("font-family", raw, sanitize_font_family(raw))
    }

    fn checked(mut self, prop: &'static str, raw: &str, (value, changed): (String, bool)) -> Self {
        if changed {
            self.rejected.push(format!("{prop}: {raw}"));
        }
        if value.is_empty() {
            return self;
        }
        self.decls.push((prop, value));
        self
    }

    /// `border` only when visible, `border-radius` only when rounded
    pub fn border(self, border: &ResolvedBorder) -> Self {
        let s = if border.is_visible() {
            let (color, _) = sanitize_value(&border.color);
            let s = self.push("border", format!("{}px solid {}", format_number(border.width), color));
            if color != border.color.trim() {
                let mut s = s;
                s.rejected.push(format!("border-color: {}", border.color));
                s
            } else {
                s
            }
        } else {
            self
        };
        if border.radius > 0.0 {
            s.px("border-radius", border.radius)
        } else {
            s
        }
    }

    /// Background, skipped when transparent
    pub fn background(self, style: &ResolvedStyle) -> Self {
        if style.background_color.trim().eq_ignore_ascii_case("transparent") {
            self
        } else {
            self.color("background-color", &style.background_color)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn get(&self, prop: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_str())
    }

    /// Values that had to be sanitized, as `prop: original`
    pub fn rejected(&self) -> &[String] {
        &self.rejected
    }

    pub fn take_rejected(&mut self) -> Vec<String> {
        std::mem::take(&mut self.rejected)
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (prop, value)) in self.decls.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{prop}:{value}")?;
        }
        Ok(())
    }
}
