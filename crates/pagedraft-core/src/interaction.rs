//! Pointer-driven drag and resize gestures.

use crate::canvas::CanvasDocument;
use crate::elements::{Element, ElementId, ElementPatch};
use crate::selection::ResizeHandle;
use kurbo::{Point, Size, Vec2};

/// Tunables for the interaction engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionConfig {
    /// Smallest width a resize can produce, in pixels.
    pub min_width: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self { min_width: 1.0 }
    }
}

/// What an active gesture does to its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Move the whole element.
    Drag,
    /// Change the width by dragging one edge.
    Resize(ResizeHandle),
}

/// An in-progress drag or resize.
///
/// Geometry is always derived from the net displacement since the gesture
/// started, never accumulated per move.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    /// The element being manipulated.
    pub element_id: ElementId,
    /// Drag or resize.
    pub kind: GestureKind,
    /// Pointer position when the gesture started.
    pub start_pointer: Point,
    /// Most recent pointer position.
    pub current_pointer: Point,
    /// Element position when the gesture started.
    pub start_position: Point,
    /// Element size when the gesture started.
    pub start_size: Size,
}

impl Gesture {
    fn new(element: &Element, kind: GestureKind, pointer: Point) -> Self {
        Self {
            element_id: element.id(),
            kind,
            start_pointer: pointer,
            current_pointer: pointer,
            start_position: element.position(),
            start_size: element.size(),
        }
    }

    /// Net pointer displacement since the gesture started.
    pub fn delta(&self) -> Vec2 {
        self.current_pointer - self.start_pointer
    }

    /// Geometry update for the current pointer position.
    fn patch(&self, config: &InteractionConfig) -> ElementPatch {
        let d = self.delta();
        let start_x = self.start_position.x;
        let start_width = self.start_size.width;
        match self.kind {
            GestureKind::Drag => ElementPatch::new().position(self.start_position + d),
            GestureKind::Resize(ResizeHandle::Right) => {
                ElementPatch::new().width((start_width + d.x).max(config.min_width))
            }
            GestureKind::Resize(ResizeHandle::Left) => {
                let width = start_width - d.x;
                if width >= config.min_width {
                    ElementPatch::new().width(width).x(start_x + d.x)
                } else {
                    // Pin the right edge
                    ElementPatch::new()
                        .width(config.min_width)
                        .x(start_x + start_width - config.min_width)
                }
            }
        }
    }

    /// Patch putting the element back where the gesture found it.
    fn restore_patch(&self) -> ElementPatch {
        ElementPatch::new()
            .position(self.start_position)
            .width(self.start_size.width)
            .height(self.start_size.height)
    }
}

/// State of the interaction engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InteractionState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture is in progress.
    Active(Gesture),
}

/// Drives drag and resize gestures against a [`CanvasDocument`].
///
/// At most one gesture is active at a time.
#[derive(Debug, Clone, Default)]
pub struct InteractionEngine {
    /// Tunables.
    pub config: InteractionConfig,
    state: InteractionState,
}

impl InteractionEngine {
    /// Create an idle engine with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an idle engine with the given configuration.
    pub fn with_config(config: InteractionConfig) -> Self {
        Self {
            config,
            state: InteractionState::Idle,
        }
    }

    /// Start dragging an element. Returns false if the element doesn't exist.
    pub fn begin_drag(&mut self, document: &CanvasDocument, id: ElementId, pointer: Point) -> bool {
        self.begin(document, id, GestureKind::Drag, pointer)
    }

    /// Start resizing an element from one edge. Returns false if the element doesn't exist.
    pub fn begin_resize(
        &mut self,
        document: &CanvasDocument,
        id: ElementId,
        handle: ResizeHandle,
        pointer: Point,
    ) -> bool {
        self.begin(document, id, GestureKind::Resize(handle), pointer)
    }

    fn begin(
        &mut self,
        document: &CanvasDocument,
        id: ElementId,
        kind: GestureKind,
        pointer: Point,
    ) -> bool {
        let Some(element) = document.get(id) else {
            log::debug!("Refusing {:?} gesture on missing element {}", kind, id);
            return false;
        };
        if let Some(previous) = self.end() {
            log::debug!(
                "Ending {:?} gesture on {} to start a new one",
                previous.kind,
                previous.element_id
            );
        }
        log::debug!("Begin {:?} gesture on {}", kind, id);
        self.state = InteractionState::Active(Gesture::new(element, kind, pointer));
        true
    }

    /// Apply a pointer move to the active gesture.
    ///
    /// Returns true if the element was updated. Moves while idle, or whose
    /// element has been removed, change nothing.
    pub fn pointer_move(&mut self, document: &mut CanvasDocument, pointer: Point) -> bool {
        let InteractionState::Active(gesture) = &mut self.state else {
            return false;
        };
        gesture.current_pointer = pointer;
        let patch = gesture.patch(&self.config);
        match document.update(gesture.element_id, patch) {
            Ok(applied) => applied,
            Err(e) => {
                log::warn!("Gesture update on {} rejected: {}", gesture.element_id, e);
                false
            }
        }
    }

    /// Finish the active gesture, wherever the pointer was released.
    pub fn pointer_up(&mut self) -> Option<Gesture> {
        let gesture = self.end();
        if let Some(g) = &gesture {
            log::debug!("End {:?} gesture on {}", g.kind, g.element_id);
        }
        gesture
    }

    /// Abort the active gesture and restore the element's starting geometry.
    ///
    /// Returns false if there was nothing to cancel.
    pub fn cancel(&mut self, document: &mut CanvasDocument) -> bool {
        let Some(gesture) = self.end() else {
            return false;
        };
        log::debug!("Cancel {:?} gesture on {}", gesture.kind, gesture.element_id);
        matches!(document.update(gesture.element_id, gesture.restore_patch()), Ok(true))
    }

    /// Check if a gesture is in progress.
    pub fn is_active(&self) -> bool {
        matches!(self.state, InteractionState::Active(_))
    }

    /// The active gesture, if any.
    pub fn active(&self) -> Option<&Gesture> {
        match &self.state {
            InteractionState::Active(gesture) => Some(gesture),
            InteractionState::Idle => None,
        }
    }

    /// Current engine state.
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    fn end(&mut self) -> Option<Gesture> {
        match std::mem::take(&mut self.state) {
            InteractionState::Active(gesture) => Some(gesture),
            InteractionState::Idle => None,
        }
    }
}
