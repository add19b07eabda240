use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;

use blockprint::model::ops::{self, Direction};
use blockprint::model::{
    Block, BlockContent, BlockEdit, BlockKind, Dimension, ElementKey, ImageContent, SequentialIds, StyleBag, Template, TextContent,
    Unit,
};
use blockprint::preview::gesture::{GestureState, ListenerId, PointerEventKind, PointerSurface, ResizeGesture};
use blockprint::preview::{Affordance, Capabilities};
use blockprint::style::resolve;
use blockprint::{HtmlSerializer, PreviewRenderer, PreviewState};

#[derive(Default)]
struct Canvas {
    next: AtomicU64,
    live: Mutex<Vec<(ListenerId, PointerEventKind)>>,
}

impl Canvas {
    fn live(&self) -> usize {
        self.live.lock().unwrap().len()
    }
}

impl PointerSurface for Canvas {
    fn attach(&self, kind: PointerEventKind) -> ListenerId {
        let id = ListenerId(self.next.fetch_add(1, Ordering::Relaxed));
        self.live.lock().unwrap().push((id, kind));
        id
    }

    fn detach(&self, id: ListenerId) {
        self.live.lock().unwrap().retain(|(l, _)| *l != id);
    }
}

fn text(id: &str) -> Block {
    Block::new(
        id,
        BlockContent::Text(TextContent {
            content: format!("copy of {id}"),
        }),
    )
}

fn image_px(width: f64) -> Block {
    Block::new(
        "hero-shot",
        BlockContent::Image(ImageContent {
            src: "https://cdn.example.com/hero.png".into(),
            alt: "Hero".into(),
            ..Default::default()
        }),
    )
    .with_style(StyleBag {
        width: Some(Dimension::px(width)),
        ..Default::default()
    })
}

#[test]
fn image_drag_clamps_to_max_width() {
    let canvas = Arc::new(Canvas::default());
    let block = image_px(300.0);
    let mut gesture = ResizeGesture::new(&block, 600.0).unwrap();

    gesture.start(canvas.clone(), 100.0).unwrap();
    assert_eq!(canvas.live(), 2);

    let preview = gesture.pointer_move(400.0).unwrap();
    assert_eq!(resolve(&preview, Some(ElementKey::Image)).width, Dimension::px(600.0));

    let committed = gesture.release(700.0).unwrap();
    assert_eq!(gesture.state(), GestureState::Committed(Dimension::px(800.0)));
    assert_eq!(resolve(&committed, Some(ElementKey::Image)).width, Dimension::px(800.0));
    assert_eq!(canvas.live(), 0);

    let html = HtmlSerializer::default().render_fragment(&committed).html;
    assert!(html.contains("width:800px"));
}

#[test]
fn percent_drag_uses_container_width() {
    let canvas = Arc::new(Canvas::default());
    let block = text("t1").with_style(StyleBag {
        width: Some(Dimension::percent(50.0)),
        ..Default::default()
    });
    let mut gesture = ResizeGesture::new(&block, 800.0).unwrap();
    gesture.start(canvas.clone(), 0.0).unwrap();
    let committed = gesture.release(-200.0).unwrap();

    let width = resolve(&committed, Some(ElementKey::Text)).width;
    assert_eq!(width.unit, Unit::Percent);
    assert_eq!(width.value, 25.0);
}

#[test]
fn cancelled_drag_leaves_block_and_listeners_clean() {
    let canvas = Arc::new(Canvas::default());
    let block = image_px(300.0);
    {
        let mut gesture = ResizeGesture::new(&block, 600.0).unwrap();
        gesture.start(canvas.clone(), 0.0).unwrap();
        gesture.pointer_move(120.0).unwrap();
        assert_eq!(gesture.cancel(), block);
        assert!(gesture.release(10.0).is_err());
    }
    assert_eq!(canvas.live(), 0);

    // dropping mid-drag also releases the listeners
    {
        let mut gesture = ResizeGesture::new(&block, 600.0).unwrap();
        gesture.start(canvas.clone(), 0.0).unwrap();
        assert_eq!(canvas.live(), 2);
    }
    assert_eq!(canvas.live(), 0);
}

#[test]
fn spacers_are_not_resizable() {
    let ids = SequentialIds::new();
    let spacer = blockprint::model::palette::new_block(BlockKind::Spacer, &ids);
    assert!(ResizeGesture::new(&spacer, 600.0).is_err());
}

#[test]
fn duplicate_inserts_right_after_the_original() {
    let template = Template::new("t", "Ops").with_blocks(vec![text("a"), text("b"), text("c")]);
    let ids = SequentialIds::starting_at(7);

    let next = ops::duplicate_block(&template, 1, &ids).unwrap();
    let order: Vec<&str> = next.blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(order, vec!["a", "b", "text-7", "c"]);
    assert_eq!(next.blocks[2].content, template.blocks[1].content);
    assert_eq!(template.blocks.len(), 3);
}

#[test]
fn toolbar_actions_edit_the_template() {
    let template = Template::new("t", "Toolbar").with_blocks(vec![text("a"), text("b")]);
    let renderer = PreviewRenderer::default();
    let ids = SequentialIds::new();

    let locked = PreviewState::selecting("a");
    let same = renderer.perform(&template, &locked, "a", Affordance::Delete, &ids).unwrap();
    assert_eq!(same, template);

    let state = PreviewState {
        capabilities: Capabilities::all(),
        ..locked
    };
    let moved = renderer.perform(&template, &state, "a", Affordance::MoveDown, &ids).unwrap();
    assert_eq!(moved.blocks[1].id, "a");
    let edge = ops::move_block(&moved, "a", Direction::Down).unwrap();
    assert_eq!(edge, moved);

    let deleted = renderer.perform(&moved, &state, "a", Affordance::Delete, &ids).unwrap();
    assert_eq!(deleted.blocks.len(), 1);
}

#[test]
fn edits_flow_through_to_export() {
    let template = Template::new("t", "Edits").with_blocks(vec![text("a")]);
    let next = ops::edit_block(&template, "a", BlockEdit::SetContent("Updated copy".into())).unwrap();
    let next = ops::edit_block(&next, "a", BlockEdit::SwitchWidthUnit(Unit::Px)).unwrap();

    let html = HtmlSerializer::default().render(&next).html;
    assert!(html.contains(">Updated copy</p>"));
    assert!(html.contains("width:100px"));
    assert!(!HtmlSerializer::default().render(&template).html.contains("Updated copy"));
}

#[test]
fn resize_commits_through_an_element_width_override() {
    let block = image_px(300.0).with_element_style(
        ElementKey::Image,
        StyleBag {
            width: Some(Dimension::px(300.0)),
            ..Default::default()
        },
    );
    let block = Block {
        style: StyleBag::default(),
        ..block
    };
    let canvas = Arc::new(Canvas::default());
    let mut gesture = ResizeGesture::new(&block, 600.0).unwrap();
    gesture.start(canvas, 0.0).unwrap();
    let committed = gesture.release(200.0).unwrap();
    assert_eq!(gesture.state(), GestureState::Committed(Dimension::px(500.0)));

    let html = HtmlSerializer::default().render_fragment(&committed).html;
    assert!(html.contains("width:500px"));
    assert!(!html.contains("width:300px"));

    let switched = BlockEdit::SwitchWidthUnit(Unit::Percent).apply(&committed).unwrap();
    let html = HtmlSerializer::default().render_fragment(&switched).html;
    assert!(html.contains("display:inline-block; width:100%"));
    assert!(!html.contains("width:500px"));
}
