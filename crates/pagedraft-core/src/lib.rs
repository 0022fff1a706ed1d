//! PageDraft Core Library
//!
//! Platform-agnostic element model and direct-manipulation engine for the
//! PageDraft document editor.

pub mod canvas;
pub mod elements;
pub mod error;
pub mod input;
pub mod interaction;
pub mod selection;
pub mod serialize;

pub use canvas::{Canvas, CanvasDocument};
pub use elements::{
    Element, ElementContent, ElementId, ElementKind, ElementPatch, FONT_FAMILIES, FontStyle,
    ListKind, MAX_ELEMENT_ID, StyleProperty, TextAlign, TextStyle,
};
pub use error::{DocumentError, DocumentResult};
pub use input::{MouseButton, PointerEvent, PointerTarget};
pub use interaction::{Gesture, GestureKind, InteractionConfig, InteractionEngine};
pub use selection::{HANDLE_WIDTH, ResizeHandle, Selection};
