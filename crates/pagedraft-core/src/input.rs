//! Pointer input events delivered by the presentation layer.

use crate::elements::ElementId;
use crate::selection::ResizeHandle;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// The body of an element.
    Body(ElementId),
    /// One of an element's resize handles.
    Handle(ElementId, ResizeHandle),
    /// Empty canvas.
    Canvas,
}

impl PointerTarget {
    /// The element involved, if any.
    pub fn element(&self) -> Option<ElementId> {
        match self {
            PointerTarget::Body(id) | PointerTarget::Handle(id, _) => Some(*id),
            PointerTarget::Canvas => None,
        }
    }
}

/// Pointer event in canvas-local coordinates.
///
/// Move and up events are observed anywhere on the page, not just over the
/// element that started the gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down {
        position: Point,
        button: MouseButton,
        target: PointerTarget,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
        button: MouseButton,
    },
}

impl PointerEvent {
    /// Pointer position carried by the event.
    pub fn position(&self) -> Point {
        match self {
            PointerEvent::Down { position, .. }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position, .. } => *position,
        }
    }
}
