//! Live preview renderer
//!
//! The preview runs every block through the same registry and style
//! resolution as the export, in [`RenderMode::Preview`]. Content markup is
//! therefore the export markup plus `data-bp-element` hooks; everything the
//! editor adds around it (frame, toolbar, resize handle) carries
//! `data-bp-chrome` so it can be told apart and stripped.

use serde::Serialize;

use crate::model::ops::{self, Direction};
use crate::model::{Block, BlockKind, IdGenerator, Template};
use crate::render::escape::escape_html;
use crate::render::{document, HtmlSerializer, Registry, RenderContext, RenderMode, RenderWarning};
use crate::style::{self, InlineStyle};
use crate::{RenderConfig, Result};

pub mod gesture;
#[cfg(feature = "parity")]
pub mod parity;

pub use gesture::{ListenerGuard, PointerEventKind, PointerSurface, ResizeBounds, ResizeGesture};

const SELECTION: &str = "#3b82f6";
const HOVER: &str = "#93c5fd";

/// Optional host callbacks. A missing capability hides its affordance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub duplicate: bool,
    pub delete: bool,
}

impl Capabilities {
    pub fn all() -> Self {
        Self {
            duplicate: true,
            delete: true,
        }
    }
}

/// Editor-side state the canvas reflects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    pub selected: Option<String>,
    pub hovered: Option<String>,
    /// Block whose text is being edited inline
    pub editing: Option<String>,
    pub capabilities: Capabilities,
}

impl PreviewState {
    pub fn selecting(id: impl Into<String>) -> Self {
        Self {
            selected: Some(id.into()),
            ..Default::default()
        }
    }

    fn is(slot: &Option<String>, id: &str) -> bool {
        slot.as_deref() == Some(id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Affordance {
    Edit,
    MoveUp,
    MoveDown,
    Duplicate,
    Delete,
    Resize,
}

impl Affordance {
    pub fn as_str(self) -> &'static str {
        match self {
            Affordance::Edit => "edit",
            Affordance::MoveUp => "move-up",
            Affordance::MoveDown => "move-down",
            Affordance::Duplicate => "duplicate",
            Affordance::Delete => "delete",
            Affordance::Resize => "resize",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Affordance::Edit => "Edit",
            Affordance::MoveUp => "Move up",
            Affordance::MoveDown => "Move down",
            Affordance::Duplicate => "Duplicate",
            Affordance::Delete => "Delete",
            Affordance::Resize => "Resize",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolbarAction {
    pub affordance: Affordance,
    pub enabled: bool,
}

/// One block as drawn on the canvas
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewNode {
    pub block_id: String,
    pub index: usize,
    pub kind: BlockKind,
    pub selected: bool,
    pub editing: bool,
    pub actions: Vec<ToolbarAction>,
    pub html: String,
    pub warnings: Vec<RenderWarning>,
}

impl PreviewNode {
    pub fn offers(&self, affordance: Affordance) -> bool {
        self.actions.iter().any(|a| a.affordance == affordance)
    }

    pub fn is_enabled(&self, affordance: Affordance) -> bool {
        self.actions
            .iter()
            .any(|a| a.affordance == affordance && a.enabled)
    }
}

fn actions_for(kind: BlockKind, index: usize, count: usize, selected: bool, caps: Capabilities) -> Vec<ToolbarAction> {
    let on = |affordance, enabled| ToolbarAction { affordance, enabled };
    let mut actions = vec![
        on(Affordance::Edit, true),
        on(Affordance::MoveUp, index > 0),
        on(Affordance::MoveDown, index + 1 < count),
    ];
    if caps.duplicate {
        actions.push(on(Affordance::Duplicate, true));
    }
    if caps.delete {
        actions.push(on(Affordance::Delete, true));
    }
    if selected && gesture::is_resizable(kind) {
        actions.push(on(Affordance::Resize, true));
    }
    actions
}

/// Renders the editor canvas
#[derive(Debug, Clone, Default)]
pub struct PreviewRenderer {
    serializer: HtmlSerializer,
}

impl PreviewRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            serializer: HtmlSerializer::new(config),
        }
    }

    /// Share the configuration and registry of an existing serializer
    pub fn from_serializer(serializer: HtmlSerializer) -> Self {
        Self { serializer }
    }

    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.serializer = self.serializer.with_registry(registry);
        self
    }

    pub fn serializer(&self) -> &HtmlSerializer {
        &self.serializer
    }

    pub fn render(&self, template: &Template, state: &PreviewState) -> Vec<PreviewNode> {
        let count = template.blocks.len();
        let nodes: Vec<PreviewNode> = template
            .blocks
            .iter()
            .enumerate()
            .map(|(index, block)| self.render_block(block, index, count, state))
            .collect();
        log::debug!(
            "preview of {}: {} nodes, selected={:?}",
            template.id,
            nodes.len(),
            state.selected
        );
        nodes
    }

    /// Render one block at `index` of a `count`-block template
    pub fn render_block(&self, block: &Block, index: usize, count: usize, state: &PreviewState) -> PreviewNode {
        let selected = PreviewState::is(&state.selected, &block.id);
        let hovered = PreviewState::is(&state.hovered, &block.id);
        let editing = PreviewState::is(&state.editing, &block.id);
        let actions = actions_for(block.kind(), index, count, selected, state.capabilities);

        let mut ctx = RenderContext::new(self.serializer.config(), RenderMode::Preview);
        ctx.begin_block(&block.id, editing);
        let content = self.serializer.render_block(block, &mut ctx);
        let html = frame(block, &content, selected, hovered, &actions);

        PreviewNode {
            block_id: block.id.clone(),
            index,
            kind: block.kind(),
            selected,
            editing,
            actions,
            html,
            warnings: ctx.into_warnings(),
        }
    }

    /// The whole canvas as one document, in the export's shell
    pub fn to_html(&self, template: &Template, state: &PreviewState) -> String {
        let body: Vec<String> = self.render(template, state).into_iter().map(|n| n.html).collect();
        let mut ctx = RenderContext::new(self.serializer.config(), RenderMode::Preview);
        document::wrap(&mut ctx, template, &body.join("\n"))
    }

    /// Run a toolbar action. Missing capabilities and disabled moves are no-ops.
    pub fn perform(
        &self,
        template: &Template,
        state: &PreviewState,
        block_id: &str,
        affordance: Affordance,
        ids: &dyn IdGenerator,
    ) -> Result<Template> {
        match affordance {
            Affordance::MoveUp => ops::move_block(template, block_id, Direction::Up),
            Affordance::MoveDown => ops::move_block(template, block_id, Direction::Down),
            Affordance::Duplicate if state.capabilities.duplicate => ops::duplicate_block_by_id(template, block_id, ids),
            Affordance::Delete if state.capabilities.delete => ops::delete_block(template, block_id),
            other => {
                log::debug!("{} on {} has no template effect", other.as_str(), block_id);
                Ok(template.clone())
            }
        }
    }
}

fn chrome_button(action: &ToolbarAction) -> String {
    let disabled = if action.enabled { "" } else { " disabled" };
    let style = InlineStyle::new()
        .push("border", "0")
        .push("background-color", "transparent")
        .push("color", "#ffffff")
        .px("font-size", 12.0)
        .push("padding", "2px 6px")
        .push("cursor", if action.enabled { "pointer" } else { "default" });
    format!(
        "<button type=\"button\" data-bp-chrome=\"action\" data-bp-action=\"{}\" title=\"{}\"{disabled} style=\"{}\">{}</button>",
        action.affordance.as_str(),
        action.affordance.label(),
        escape_html(&style.to_string()),
        action.affordance.label()
    )
}

fn frame(block: &Block, content: &str, selected: bool, hovered: bool, actions: &[ToolbarAction]) -> String {
    let outline = if selected {
        format!("2px solid {SELECTION}")
    } else if hovered {
        format!("1px dashed {HOVER}")
    } else {
        "none".to_string()
    };
    let frame_style = InlineStyle::new().push("position", "relative").push("outline", outline);

    let mut out = format!(
        "<div data-bp-chrome=\"frame\" data-bp-block=\"{}\" data-bp-kind=\"{}\"{} style=\"{}\">\n",
        escape_html(&block.id),
        block.kind(),
        if selected { " data-bp-selected=\"true\"" } else { "" },
        escape_html(&frame_style.to_string())
    );

    if selected || hovered {
        let toolbar_style = InlineStyle::new()
            .push("position", "absolute")
            .push("top", "4px")
            .push("right", "4px")
            .push("z-index", "10")
            .push("background-color", SELECTION)
            .push("border-radius", "4px");
        let buttons: Vec<String> = actions
            .iter()
            .filter(|a| a.affordance != Affordance::Resize)
            .map(chrome_button)
            .collect();
        out.push_str(&format!(
            "<div data-bp-chrome=\"toolbar\" style=\"{}\">{}</div>\n",
            escape_html(&toolbar_style.to_string()),
            buttons.join("")
        ));
    }

    out.push_str(content);
    out.push('\n');

    if actions.iter().any(|a| a.affordance == Affordance::Resize) {
        let unit = style::resolve(block, block.kind().primary_element()).width.unit;
        let handle_style = InlineStyle::new()
            .push("position", "absolute")
            .push("right", "-6px")
            .push("bottom", "-6px")
            .px("width", 12.0)
            .px("height", 12.0)
            .push("background-color", SELECTION)
            .push("cursor", "nwse-resize");
        out.push_str(&format!(
            "<div data-bp-chrome=\"resize-handle\" data-bp-unit=\"{}\" style=\"{}\"></div>\n",
            escape_html(unit.suffix()),
            escape_html(&handle_style.to_string())
        ));
    }
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockContent, SequentialIds, TextContent};

    fn three() -> Template {
        let text = |id: &str| {
            Block::new(
                id,
                BlockContent::Text(TextContent {
                    content: id.to_uppercase(),
                }),
            )
        };
        Template::new("t", "n").with_blocks(vec![text("a"), text("b"), text("c")])
    }

    #[test]
    fn moves_are_disabled_at_the_edges() {
        let nodes = PreviewRenderer::default().render(&three(), &PreviewState::default());
        assert!(!nodes[0].is_enabled(Affordance::MoveUp));
        assert!(nodes[0].is_enabled(Affordance::MoveDown));
        assert!(nodes[2].is_enabled(Affordance::MoveUp));
        assert!(!nodes[2].is_enabled(Affordance::MoveDown));
    }

    #[test]
    fn missing_capabilities_hide_affordances() {
        let r = PreviewRenderer::default();
        let nodes = r.render(&three(), &PreviewState::default());
        assert!(!nodes[1].offers(Affordance::Duplicate));
        assert!(!nodes[1].offers(Affordance::Delete));

        let state = PreviewState {
            capabilities: Capabilities::all(),
            ..Default::default()
        };
        let nodes = r.render(&three(), &state);
        assert!(nodes[1].offers(Affordance::Duplicate));
        assert!(nodes[1].offers(Affordance::Delete));
    }

    #[test]
    fn perform_without_capability_is_a_no_op() {
        let r = PreviewRenderer::default();
        let t = three();
        let ids = SequentialIds::new();
        let same = r
            .perform(&t, &PreviewState::default(), "b", Affordance::Delete, &ids)
            .unwrap();
        assert_eq!(same, t);

        let state = PreviewState {
            capabilities: Capabilities::all(),
            ..Default::default()
        };
        let fewer = r.perform(&t, &state, "b", Affordance::Delete, &ids).unwrap();
        assert_eq!(fewer.blocks.len(), 2);
    }

    #[test]
    fn selected_resizable_block_gets_a_handle() {
        let nodes = PreviewRenderer::default().render(&three(), &PreviewState::selecting("a"));
        assert!(nodes[0].offers(Affordance::Resize));
        assert!(nodes[0].html.contains("data-bp-chrome=\"resize-handle\""));
        assert!(nodes[0].html.contains("data-bp-chrome=\"toolbar\""));
        assert!(!nodes[1].html.contains("data-bp-chrome=\"toolbar\""));
    }

    #[test]
    fn editing_swaps_in_a_textarea() {
        let state = PreviewState {
            editing: Some("b".into()),
            ..Default::default()
        };
        let nodes = PreviewRenderer::default().render(&three(), &state);
        assert!(nodes[1].html.contains("<textarea data-bp-element=\"text\" data-bp-editing=\"true\""));
        assert!(nodes[1].html.contains(">B</textarea>"));
        assert!(!nodes[0].html.contains("<textarea"));
    }
}
