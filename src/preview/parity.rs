//! Preview/export parity checks
//!
//! Parses the export fragment and the preview node of a block and compares
//! the inline declarations of every non-chrome element in document order.
//! Any difference means the two surfaces resolved styles differently.

use scraper::{ElementRef, Html};
use serde::Serialize;

use crate::model::{Block, Template};

use super::{PreviewRenderer, PreviewState};

/// An element with its parsed `style` attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledElement {
    pub tag: String,
    pub declarations: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Position among the compared elements
    pub position: usize,
    pub export: Option<StyledElement>,
    pub preview: Option<StyledElement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParityReport {
    pub block_id: String,
    pub compared: usize,
    pub mismatches: Vec<Mismatch>,
}

impl ParityReport {
    pub fn is_match(&self) -> bool {
        self.mismatches.is_empty()
    }
}

pub fn parse_declarations(style: &str) -> Vec<(String, String)> {
    split_declarations(style)
        .into_iter()
        .filter_map(|decl| {
            let (prop, value) = decl.split_once(':')?;
            let prop = prop.trim();
            (!prop.is_empty()).then(|| (prop.to_ascii_lowercase(), value.trim().to_string()))
        })
        .collect()
}

/// Split on `;` outside quoted strings (`url('data:...;base64,...')`)
fn split_declarations(style: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote = None;
    let mut escaped = false;
    let mut start = 0;
    for (i, c) in style.char_indices() {
        match (quote, c) {
            _ if escaped => escaped = false,
            (Some(_), '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (None, '\'' | '"') => quote = Some(c),
            (None, ';') => {
                parts.push(&style[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&style[start..]);
    parts
}

/// Non-chrome elements of a fragment, in document order
pub fn styled_elements(fragment: &str) -> Vec<StyledElement> {
    let doc = Html::parse_fragment(fragment);
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() != "html")
        .filter(|el| el.value().attr("data-bp-chrome").is_none())
        .map(|el| StyledElement {
            tag: el.value().name().to_string(),
            declarations: el.value().attr("style").map(parse_declarations).unwrap_or_default(),
        })
        .collect()
}

pub fn compare(block_id: &str, export: &str, preview: &str) -> ParityReport {
    let left = styled_elements(export);
    let right = styled_elements(preview);
    let compared = left.len().max(right.len());
    let mismatches = (0..compared)
        .filter_map(|i| {
            let (e, p) = (left.get(i), right.get(i));
            (e != p).then(|| Mismatch {
                position: i,
                export: e.cloned(),
                preview: p.cloned(),
            })
        })
        .collect();
    ParityReport {
        block_id: block_id.to_string(),
        compared,
        mismatches,
    }
}

/// Compare one block's export and (unselected, non-editing) preview markup
pub fn check_parity(renderer: &PreviewRenderer, block: &Block) -> ParityReport {
    let export = renderer.serializer().render_fragment(block);
    let node = renderer.render_block(block, 0, 1, &PreviewState::default());
    let report = compare(&block.id, &export.html, &node.html);
    if !report.is_match() {
        log::warn!(
            "preview diverges from export for block {} at {} element(s)",
            block.id,
            report.mismatches.len()
        );
    }
    report
}

/// [`check_parity`] with the default renderer
pub fn check_block_parity(block: &Block) -> ParityReport {
    check_parity(&PreviewRenderer::default(), block)
}

pub fn check_template_parity(renderer: &PreviewRenderer, template: &Template) -> Vec<ParityReport> {
    template.blocks.iter().map(|b| check_parity(renderer, b)).collect()
}
