//! Selection tracking and resize handle hit testing.

use crate::canvas::CanvasDocument;
use crate::elements::{Element, ElementId};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Width of the resize handle strips along an element's left and right edges, in pixels.
pub const HANDLE_WIDTH: f64 = 8.0;

/// Which edge a resize gesture grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    Left,
    Right,
}

impl ResizeHandle {
    /// Both handles.
    pub fn all() -> &'static [ResizeHandle] {
        &[ResizeHandle::Left, ResizeHandle::Right]
    }

    /// Hit area of this handle on the given element.
    ///
    /// The strip lies inside the element bounds, full height.
    pub fn rect(&self, element: &Element) -> Rect {
        let bounds = element.bounds();
        let strip = HANDLE_WIDTH.min(bounds.width().max(0.0));
        match self {
            ResizeHandle::Left => Rect::new(bounds.x0, bounds.y0, bounds.x0 + strip, bounds.y1),
            ResizeHandle::Right => Rect::new(bounds.x1 - strip, bounds.y0, bounds.x1, bounds.y1),
        }
    }
}

/// Find the handle of `element` under `point`, if any.
///
/// The right handle wins when the strips overlap on very narrow elements.
pub fn handle_at(element: &Element, point: Point) -> Option<ResizeHandle> {
    ResizeHandle::all()
        .iter()
        .rev()
        .copied()
        .find(|handle| handle.rect(element).contains(point))
}

/// The element the property panel is bound to.
///
/// Selection is not validated against the document: a stale id simply
/// resolves to nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<ElementId>,
}

impl Selection {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the selected element, replacing any previous selection.
    pub fn select(&mut self, id: Option<ElementId>) {
        self.current = id;
    }

    /// Clear the selection.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// The recorded selection, which may no longer exist in the document.
    pub fn current(&self) -> Option<ElementId> {
        self.current
    }

    /// Check if the given element is the selected one.
    pub fn is_selected(&self, id: ElementId) -> bool {
        self.current == Some(id)
    }

    /// Look up the selected element. A dangling id yields `None`.
    pub fn resolve<'a>(&self, document: &'a CanvasDocument) -> Option<&'a Element> {
        self.current.and_then(|id| document.get(id))
    }
}
