//! Canvas document and session state.

use crate::elements::{
    Element, ElementContent, ElementId, ElementKind, ElementPatch, IdAllocator, ListKind,
    MAX_ELEMENT_ID, StyleProperty, parse_list_items,
};
use crate::error::{DocumentError, DocumentResult};
use crate::input::{MouseButton, PointerEvent, PointerTarget};
use crate::interaction::{InteractionConfig, InteractionEngine};
use crate::selection::{Selection, handle_at};
use crate::serialize;
use kurbo::{Point, Rect};
use std::collections::HashMap;

/// The ordered collection of placed elements.
///
/// Insertion order is render order and z-order: later elements sit on top.
#[derive(Debug, Clone, Default)]
pub struct CanvasDocument {
    elements: HashMap<ElementId, Element>,
    order: Vec<ElementId>,
    ids: IdAllocator,
}

impl CanvasDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element of the given kind with default content and geometry.
    pub fn add(&mut self, kind: ElementKind) -> &Element {
        let id = self.fresh_id();
        log::debug!("Adding {} element {}", kind, id);
        self.order.push(id);
        self.elements
            .entry(id)
            .insert_entry(Element::new(id, kind))
            .into_mut()
    }

    /// Next unused identifier within range.
    ///
    /// Once the allocator runs past [`MAX_ELEMENT_ID`] the highest free
    /// identifier below it is taken instead.
    fn fresh_id(&mut self) -> ElementId {
        let id = self.ids.next_id();
        if id.is_in_range() {
            return id;
        }
        (0..=MAX_ELEMENT_ID)
            .rev()
            .map(ElementId::from_raw)
            .find(|id| !self.elements.contains_key(id))
            .unwrap_or(id)
    }

    /// Append an existing element, keeping its identifier.
    ///
    /// Identifiers above [`MAX_ELEMENT_ID`] and repeated identifiers are
    /// rejected. Fresh identifiers issued afterwards never collide with the
    /// inserted one.
    pub fn insert(&mut self, element: Element) -> DocumentResult<()> {
        let id = element.id();
        if !id.is_in_range() {
            return Err(DocumentError::IdOutOfRange(id));
        }
        if self.elements.contains_key(&id) {
            return Err(DocumentError::DuplicateId(id));
        }
        self.ids.observe(id);
        self.order.push(id);
        self.elements.insert(id, element);
        Ok(())
    }

    /// Merge a patch into the element with the given id.
    ///
    /// Returns `Ok(false)` and changes nothing if there is no such element.
    pub fn update(&mut self, id: ElementId, patch: ElementPatch) -> DocumentResult<bool> {
        let Some(element) = self.elements.get_mut(&id) else {
            log::debug!("Ignoring update of missing element {}", id);
            return Ok(false);
        };
        element.apply(patch).inspect_err(|e| {
            log::warn!("Rejected update of element {}: {}", id, e);
        })?;
        Ok(true)
    }

    /// Get an element by ID.
    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Get a mutable reference to an element by ID.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    /// Check if an element exists.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Elements in insertion order (back to front).
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.order.iter().filter_map(|id| self.elements.get(id))
    }

    /// Element ids in insertion order.
    pub fn ids(&self) -> &[ElementId] {
        &self.order
    }

    /// Find elements at a point, front to back.
    pub fn elements_at(&self, point: Point) -> Vec<ElementId> {
        self.order
            .iter()
            .rev()
            .filter_map(|&id| {
                self.elements
                    .get(&id)
                    .filter(|e| e.hit_test(point))
                    .map(|_| id)
            })
            .collect()
    }

    /// The topmost element at a point.
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        self.elements_at(point).into_iter().next()
    }

    /// Get the bounding box of all elements.
    pub fn bounds(&self) -> Option<Rect> {
        self.elements()
            .map(Element::bounds)
            .reduce(|acc, b| acc.union(b))
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Serialize the elements as a source dump.
    pub fn to_json(&self) -> DocumentResult<String> {
        serialize::to_source_dump(self)
    }

    /// Rebuild a document from a source dump.
    pub fn from_json(json: &str) -> DocumentResult<Self> {
        serialize::from_source_dump(json)
    }
}

/// Runtime editing session: the document plus selection and gesture state.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    /// The document being edited.
    pub document: CanvasDocument,
    /// Element bound to the property panel.
    pub selection: Selection,
    /// Drag and resize gestures.
    pub interaction: InteractionEngine,
}

impl Canvas {
    /// Create a new canvas with an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a canvas with an existing document.
    pub fn with_document(document: CanvasDocument) -> Self {
        Self {
            document,
            ..Self::default()
        }
    }

    /// Replace the interaction tunables.
    pub fn with_interaction_config(mut self, config: InteractionConfig) -> Self {
        self.interaction.config = config;
        self
    }

    /// Add an element with defaults for its kind. Selection is unchanged.
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        self.document.add(kind).id()
    }

    /// Select an element, or nothing.
    pub fn select(&mut self, id: Option<ElementId>) {
        self.selection.select(id);
    }

    /// The selected element, if it still exists.
    pub fn selected(&self) -> Option<&Element> {
        self.selection.resolve(&self.document)
    }

    /// Work out what a pointer-down at `point` would land on.
    ///
    /// Only the topmost element under the point is considered; its edge
    /// strips count as resize handles.
    pub fn target_at(&self, point: Point) -> PointerTarget {
        let Some(element) = self
            .document
            .element_at(point)
            .and_then(|id| self.document.get(id))
        else {
            return PointerTarget::Canvas;
        };
        match handle_at(element, point) {
            Some(handle) => PointerTarget::Handle(element.id(), handle),
            None => PointerTarget::Body(element.id()),
        }
    }

    /// Route a pointer event to selection and the interaction engine.
    ///
    /// Returns true if the event changed any state.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down {
                position,
                button,
                target,
            } => {
                if button != MouseButton::Left {
                    return false;
                }
                match target {
                    PointerTarget::Body(id) => {
                        if !self.interaction.begin_drag(&self.document, id, position) {
                            return false;
                        }
                        self.selection.select(Some(id));
                        true
                    }
                    PointerTarget::Handle(id, handle) => {
                        self.interaction
                            .begin_resize(&self.document, id, handle, position)
                    }
                    PointerTarget::Canvas => false,
                }
            }
            PointerEvent::Move { position } => {
                self.interaction.pointer_move(&mut self.document, position)
            }
            PointerEvent::Up { .. } => self.interaction.pointer_up().is_some(),
        }
    }

    /// Abort the active gesture, restoring the element's geometry.
    pub fn cancel_gesture(&mut self) -> bool {
        self.interaction.cancel(&mut self.document)
    }

    /// Replace the text of the selected text element.
    ///
    /// Returns `Ok(false)` when nothing suitable is selected.
    pub fn update_text_content(&mut self, content: impl Into<String>) -> DocumentResult<bool> {
        let Some(id) = self.selected_of(|k| k == ElementKind::Text) else {
            return Ok(false);
        };
        self.document
            .update(id, ElementPatch::new().content(ElementContent::Text(content.into())))
    }

    /// Change one style property of the selected text element.
    pub fn update_text_style(&mut self, property: StyleProperty, value: &str) -> DocumentResult<bool> {
        let Some(element) = self.selected().filter(|e| e.kind() == ElementKind::Text) else {
            return Ok(false);
        };
        let id = element.id();
        let style = element.style.with_property(property, value)?;
        self.document.update(id, ElementPatch::new().style(style))
    }

    /// Replace the items of the selected list from a newline-separated block.
    ///
    /// Empty lines are dropped; the list keeps its flavour.
    pub fn update_list_items(&mut self, block: &str) -> DocumentResult<bool> {
        let Some(element) = self.selected().filter(|e| e.kind().is_list()) else {
            return Ok(false);
        };
        let id = element.id();
        let kind = match element.kind() {
            ElementKind::OrderedList => ListKind::Ordered,
            _ => ListKind::Unordered,
        };
        let content = ElementContent::list(kind, parse_list_items(block));
        self.document.update(id, ElementPatch::new().content(content))
    }

    /// Switch the selected list between unordered and ordered, keeping its items.
    pub fn set_list_kind(&mut self, kind: ListKind) -> DocumentResult<bool> {
        let Some(element) = self.selected() else {
            return Ok(false);
        };
        let id = element.id();
        let Some(content) = element.content.clone().into_list(kind) else {
            return Ok(false);
        };
        self.document.update(id, ElementPatch::new().content(content))
    }

    fn selected_of(&self, accept: impl Fn(ElementKind) -> bool) -> Option<ElementId> {
        self.selected()
            .filter(|e| accept(e.kind()))
            .map(Element::id)
    }
}
