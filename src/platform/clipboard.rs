//! Clipboard writes with ordered fallbacks

use std::sync::Mutex;

use crate::{Error, Result};

/// One way of putting text on the clipboard
pub trait ClipboardStrategy: Send + Sync {
    fn name(&self) -> &str;
    fn write_text(&self, text: &str) -> std::result::Result<(), String>;
}

/// Which strategy succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOutcome {
    pub strategy: String,
    /// Failures of the strategies tried before it, as `name: reason`
    pub skipped: Vec<String>,
}

/// Try `strategies` in order, stopping at the first success.
///
/// Only total failure is an error; callers keep their state untouched in
/// that case and surface the message.
pub fn copy_with_fallback(strategies: &[&dyn ClipboardStrategy], text: &str) -> Result<CopyOutcome> {
    let mut skipped = Vec::new();
    for strategy in strategies {
        match strategy.write_text(text) {
            Ok(()) => {
                log::debug!("copied {} chars via {}", text.chars().count(), strategy.name());
                return Ok(CopyOutcome {
                    strategy: strategy.name().to_string(),
                    skipped,
                });
            }
            Err(reason) => {
                log::warn!("clipboard strategy {} failed: {}", strategy.name(), reason);
                skipped.push(format!("{}: {}", strategy.name(), reason));
            }
        }
    }
    if skipped.is_empty() {
        return Err(Error::Clipboard("no clipboard strategy available".to_string()));
    }
    Err(Error::Clipboard(skipped.join("; ")))
}

/// In-memory clipboard used by tests and headless hosts
pub struct MemoryClipboard {
    name: String,
    contents: Mutex<Option<String>>,
    fail_with: Option<String>,
}

impl MemoryClipboard {
    pub fn new(name: impl Into<String>) -> Self {
        MemoryClipboard {
            name: name.into(),
            contents: Mutex::new(None),
            fail_with: None,
        }
    }

    /// A clipboard whose writes always fail with `reason`
    pub fn failing(name: impl Into<String>, reason: impl Into<String>) -> Self {
        MemoryClipboard {
            fail_with: Some(reason.into()),
            ..Self::new(name)
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl ClipboardStrategy for MemoryClipboard {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_text(&self, text: &str) -> std::result::Result<(), String> {
        if let Some(reason) = &self.fail_with {
            return Err(reason.clone());
        }
        let mut contents = self.contents.lock().map_err(|_| "clipboard lock poisoned".to_string())?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_in_order() {
        let primary = MemoryClipboard::failing("platform", "permission denied");
        let fallback = MemoryClipboard::new("selection");
        let out = copy_with_fallback(&[&primary, &fallback], "<p>x</p>").unwrap();
        assert_eq!(out.strategy, "selection");
        assert_eq!(out.skipped, vec!["platform: permission denied".to_string()]);
        assert_eq!(fallback.contents().as_deref(), Some("<p>x</p>"));
    }

    #[test]
    fn total_failure_is_an_error() {
        let a = MemoryClipboard::failing("platform", "denied");
        let b = MemoryClipboard::failing("selection", "no document");
        let err = copy_with_fallback(&[&a, &b], "x").unwrap_err();
        assert!(matches!(err, Error::Clipboard(msg) if msg.contains("denied") && msg.contains("no document")));
        assert!(copy_with_fallback(&[], "x").is_err());
    }
}
