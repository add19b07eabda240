//! Drag-resize gesture
//!
//! A [`ResizeGesture`] walks `Idle -> Dragging -> Committed` (or
//! `Cancelled`). Starting a drag attaches pointer-move and pointer-up
//! listeners through a [`PointerSurface`]; the returned [`ListenerGuard`]
//! detaches both on commit, cancel or drop, so a torn-down editor never
//! leaks listeners. Intermediate widths are previews only: the block value
//! changes on release.

use std::sync::Arc;

use crate::model::{Block, BlockEdit, BlockKind, Dimension, Unit};
use crate::style;
use crate::{Error, Result};

/// Inclusive width range for one kind and unit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeBounds {
    pub min: f64,
    pub max: f64,
}

/// Width limits for resizable kinds; `None` for kinds without a handle
pub fn bounds(kind: BlockKind, unit: Unit) -> Option<ResizeBounds> {
    let b = |min, max| Some(ResizeBounds { min, max });
    match (kind, unit) {
        (BlockKind::Image, Unit::Px) => b(50.0, 800.0),
        (BlockKind::Text | BlockKind::Title, Unit::Px) => b(100.0, 800.0),
        (BlockKind::Image | BlockKind::Text | BlockKind::Title, Unit::Percent) => b(10.0, 100.0),
        _ => None,
    }
}

pub fn is_resizable(kind: BlockKind) -> bool {
    bounds(kind, Unit::Px).is_some()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Move,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Where pointer listeners live (a canvas, a window, a test double)
pub trait PointerSurface: Send + Sync {
    fn attach(&self, kind: PointerEventKind) -> ListenerId;
    fn detach(&self, id: ListenerId);
}

/// Detaches its listeners when dropped
pub struct ListenerGuard {
    surface: Arc<dyn PointerSurface>,
    ids: Vec<ListenerId>,
}

impl ListenerGuard {
    pub fn acquire(surface: Arc<dyn PointerSurface>, kinds: &[PointerEventKind]) -> Self {
        let ids = kinds.iter().map(|k| surface.attach(*k)).collect();
        Self { surface, ids }
    }

    pub fn ids(&self) -> &[ListenerId] {
        &self.ids
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            self.surface.detach(id);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureState {
    Idle,
    Dragging {
        start_x: f64,
        origin: Dimension,
        current: Dimension,
    },
    Committed(Dimension),
    Cancelled,
}

pub struct ResizeGesture {
    block: Block,
    container_width: f64,
    state: GestureState,
    guard: Option<ListenerGuard>,
}

impl ResizeGesture {
    /// A gesture for `block`; percent deltas are measured against `container_width` px
    pub fn new(block: &Block, container_width: f64) -> Result<Self> {
        if !is_resizable(block.kind()) {
            return Err(Error::Gesture(format!("{} blocks cannot be resized", block.kind())));
        }
        if !(container_width.is_finite() && container_width > 0.0) {
            return Err(Error::Gesture(format!("invalid container width {container_width}")));
        }
        Ok(Self {
            block: block.clone(),
            container_width,
            state: GestureState::Idle,
            guard: None,
        })
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Pointer-down on the handle
    pub fn start(&mut self, surface: Arc<dyn PointerSurface>, pointer_x: f64) -> Result<()> {
        if self.state != GestureState::Idle {
            return Err(Error::Gesture(format!("cannot start from {:?}", self.state)));
        }
        let origin = style::resolve(&self.block, self.block.kind().primary_element()).width;
        self.guard = Some(ListenerGuard::acquire(
            surface,
            &[PointerEventKind::Move, PointerEventKind::Up],
        ));
        self.state = GestureState::Dragging {
            start_x: pointer_x,
            origin,
            current: origin,
        };
        log::trace!("resize start on {} at x={} from {}", self.block.id, pointer_x, origin);
        Ok(())
    }

    fn width_at(&self, start_x: f64, origin: Dimension, pointer_x: f64) -> Dimension {
        let delta = pointer_x - start_x;
        let raw = match origin.unit {
            Unit::Px => origin.value + delta,
            Unit::Percent => origin.value + delta / self.container_width * 100.0,
        };
        match bounds(self.block.kind(), origin.unit) {
            Some(b) if raw.is_finite() => Dimension::new(raw.clamp(b.min, b.max), origin.unit).unwrap_or(origin),
            _ => origin,
        }
    }

    fn preview_block(&self, width: Dimension) -> Result<Block> {
        let height = style::resolve(&self.block, self.block.kind().primary_element()).height;
        BlockEdit::SetDimensions { width, height }.apply(&self.block)
    }

    /// Pointer-move: a preview of the block at the new width. Nothing is committed.
    pub fn pointer_move(&mut self, pointer_x: f64) -> Result<Block> {
        let GestureState::Dragging { start_x, origin, .. } = self.state else {
            return Err(Error::Gesture(format!("move while {:?}", self.state)));
        };
        let current = self.width_at(start_x, origin, pointer_x);
        self.state = GestureState::Dragging {
            start_x,
            origin,
            current,
        };
        log::trace!("resize move on {} to {}", self.block.id, current);
        self.preview_block(current)
    }

    /// Pointer-up: commit the final width and release the listeners
    pub fn release(&mut self, pointer_x: f64) -> Result<Block> {
        let GestureState::Dragging { start_x, origin, .. } = self.state else {
            return Err(Error::Gesture(format!("release while {:?}", self.state)));
        };
        let width = self.width_at(start_x, origin, pointer_x);
        self.state = GestureState::Committed(width);
        self.guard = None;
        log::debug!("resize committed on {}: {}", self.block.id, width);
        self.preview_block(width)
    }

    /// Abort the drag; the original block stays as it was
    pub fn cancel(&mut self) -> Block {
        if self.is_dragging() {
            log::trace!("resize cancelled on {}", self.block.id);
        }
        self.state = GestureState::Cancelled;
        self.guard = None;
        self.block.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BlockContent, ImageContent, StyleBag};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        next: Mutex<u64>,
        attached: Mutex<Vec<ListenerId>>,
    }

    impl PointerSurface for Recorder {
        fn attach(&self, _kind: PointerEventKind) -> ListenerId {
            let mut n = self.next.lock().unwrap();
            *n += 1;
            let id = ListenerId(*n);
            self.attached.lock().unwrap().push(id);
            id
        }

        fn detach(&self, id: ListenerId) {
            self.attached.lock().unwrap().retain(|a| *a != id);
        }
    }

    fn image(width: Dimension) -> Block {
        Block::new("img", BlockContent::Image(ImageContent::default())).with_style(StyleBag {
            width: Some(width),
            ..Default::default()
        })
    }

    #[test]
    fn percent_deltas_use_container_width() {
        let surface = Arc::new(Recorder::default());
        let mut g = ResizeGesture::new(&image(Dimension::percent(50.0)), 600.0).unwrap();
        g.start(surface, 0.0).unwrap();
        let b = g.pointer_move(60.0).unwrap();
        assert_eq!(b.style.width, Some(Dimension::percent(60.0)));
        let b = g.pointer_move(-600.0).unwrap();
        assert_eq!(b.style.width, Some(Dimension::percent(10.0)));
    }

    #[test]
    fn listeners_detach_on_release_and_cancel() {
        let surface = Arc::new(Recorder::default());
        let mut g = ResizeGesture::new(&image(Dimension::px(300.0)), 600.0).unwrap();
        g.start(surface.clone(), 10.0).unwrap();
        assert_eq!(surface.attached.lock().unwrap().len(), 2);
        g.release(20.0).unwrap();
        assert!(surface.attached.lock().unwrap().is_empty());

        let mut g = ResizeGesture::new(&image(Dimension::px(300.0)), 600.0).unwrap();
        g.start(surface.clone(), 0.0).unwrap();
        let original = g.cancel();
        assert_eq!(original.style.width, Some(Dimension::px(300.0)));
        assert!(surface.attached.lock().unwrap().is_empty());
    }

    #[test]
    fn dropping_a_live_gesture_detaches() {
        let surface = Arc::new(Recorder::default());
        {
            let mut g = ResizeGesture::new(&image(Dimension::px(300.0)), 600.0).unwrap();
            g.start(surface.clone(), 0.0).unwrap();
            g.pointer_move(5.0).unwrap();
        }
        assert!(surface.attached.lock().unwrap().is_empty());
    }

    #[test]
    fn out_of_order_transitions_are_errors() {
        let mut g = ResizeGesture::new(&image(Dimension::px(300.0)), 600.0).unwrap();
        assert!(matches!(g.pointer_move(1.0), Err(Error::Gesture(_))));
        assert!(matches!(g.release(1.0), Err(Error::Gesture(_))));
        let spacer = Block::new("s", BlockContent::Spacer(Default::default()));
        assert!(ResizeGesture::new(&spacer, 600.0).is_err());
    }
}
