//! The editor façade tying the canvas, renderer and export observers together.

use crate::config::AppConfig;
use crate::error::AppResult;
use crate::toolbar::EditorAction;
use kurbo::{Point, Size};
use pagedraft_core::{
    Canvas, CanvasDocument, Element, ElementId, ElementKind, FONT_FAMILIES, ListKind, MouseButton,
    PointerEvent, PointerTarget, StyleProperty,
};
use pagedraft_render::{HtmlRenderer, RenderContext, Renderer};

/// Output of an export action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportEvent {
    /// Rendered HTML preview.
    Preview(String),
    /// Pretty-printed source dump.
    SourceDump(String),
}

impl ExportEvent {
    /// The exported text.
    pub fn content(&self) -> &str {
        match self {
            ExportEvent::Preview(s) | ExportEvent::SourceDump(s) => s,
        }
    }
}

/// Receives export output without blocking the editor.
pub trait ExportObserver {
    fn on_export(&mut self, event: &ExportEvent);
}

impl<F: FnMut(&ExportEvent)> ExportObserver for F {
    fn on_export(&mut self, event: &ExportEvent) {
        self(event)
    }
}

/// An editing session: canvas state plus the preview renderer and export plumbing.
pub struct Editor {
    canvas: Canvas,
    renderer: HtmlRenderer,
    config: AppConfig,
    observers: Vec<Box<dyn ExportObserver>>,
    last_preview: Option<String>,
    last_source: Option<String>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("canvas", &self.canvas)
            .field("config", &self.config)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Editor {
    /// Create an editor with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create an editor with the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self::with_document(config, CanvasDocument::new())
    }

    /// Create an editor over an existing document.
    pub fn with_document(config: AppConfig, document: CanvasDocument) -> Self {
        let canvas = Canvas::with_document(document).with_interaction_config(config.interaction);
        Self {
            canvas,
            renderer: HtmlRenderer::new(),
            config,
            observers: Vec::new(),
            last_preview: None,
            last_source: None,
        }
    }

    /// Create an editor from a source dump.
    pub fn load(config: AppConfig, source: &str) -> AppResult<Self> {
        let document = CanvasDocument::from_json(source)?;
        log::info!("Loaded document with {} elements", document.len());
        Ok(Self::with_document(config, document))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Window title shown by the host.
    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Size of the drawing surface in pixels.
    pub fn canvas_size(&self) -> Size {
        Size::new(
            f64::from(self.config.canvas_width),
            f64::from(self.config.canvas_height),
        )
    }

    /// Choices offered by the font-family dropdown.
    pub fn font_families(&self) -> &'static [&'static str] {
        FONT_FAMILIES
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn document(&self) -> &CanvasDocument {
        &self.canvas.document
    }

    /// Register an observer for preview and source dump output.
    pub fn add_observer(&mut self, observer: impl ExportObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // --- Toolbar ---

    /// Add an element with defaults for its kind.
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        self.canvas.add_element(kind)
    }

    // --- Selection and property panel ---

    /// Bind the property panel to an element, or to nothing.
    pub fn select(&mut self, id: Option<ElementId>) {
        self.canvas.select(id);
    }

    /// The element the property panel is bound to.
    pub fn selected(&self) -> Option<&Element> {
        self.canvas.selected()
    }

    pub fn update_text_content(&mut self, content: impl Into<String>) -> AppResult<bool> {
        Ok(self.canvas.update_text_content(content)?)
    }

    pub fn update_text_style(&mut self, property: StyleProperty, value: &str) -> AppResult<bool> {
        Ok(self.canvas.update_text_style(property, value)?)
    }

    pub fn update_list_items(&mut self, block: &str) -> AppResult<bool> {
        Ok(self.canvas.update_list_items(block)?)
    }

    pub fn set_list_kind(&mut self, kind: ListKind) -> AppResult<bool> {
        Ok(self.canvas.set_list_kind(kind)?)
    }

    // --- Pointer ---

    /// Primary-button press. Without an explicit target the point is hit-tested.
    pub fn pointer_down(&mut self, position: Point, target: Option<PointerTarget>) -> bool {
        let target = target.unwrap_or_else(|| self.canvas.target_at(position));
        self.canvas.handle_pointer_event(PointerEvent::Down {
            position,
            button: MouseButton::Left,
            target,
        })
    }

    pub fn pointer_move(&mut self, position: Point) -> bool {
        self.canvas
            .handle_pointer_event(PointerEvent::Move { position })
    }

    pub fn pointer_up(&mut self, position: Point) -> bool {
        self.canvas.handle_pointer_event(PointerEvent::Up {
            position,
            button: MouseButton::Left,
        })
    }

    /// Abort the active gesture, restoring the element's geometry.
    pub fn cancel_gesture(&mut self) -> bool {
        self.canvas.cancel_gesture()
    }

    // --- Export ---

    /// Render the HTML preview and hand it to observers.
    pub fn preview(&mut self) -> String {
        let ctx = RenderContext::new(&self.canvas.document).with_options(self.config.render);
        let html = self.renderer.render(&ctx);
        self.notify(ExportEvent::Preview(html.clone()));
        self.last_preview = Some(html.clone());
        html
    }

    /// Serialize the source dump and hand it to observers.
    pub fn source_dump(&mut self) -> AppResult<String> {
        let dump = self.canvas.document.to_json()?;
        self.notify(ExportEvent::SourceDump(dump.clone()));
        self.last_source = Some(dump.clone());
        Ok(dump)
    }

    /// Most recent preview output.
    pub fn last_preview(&self) -> Option<&str> {
        self.last_preview.as_deref()
    }

    /// Most recent source dump output.
    pub fn last_source(&self) -> Option<&str> {
        self.last_source.as_deref()
    }

    fn notify(&mut self, event: ExportEvent) {
        for observer in &mut self.observers {
            observer.on_export(&event);
        }
    }

    /// Perform a toolbar or property panel action.
    pub fn apply(&mut self, action: EditorAction) -> AppResult<()> {
        match action {
            EditorAction::AddElement(kind) => {
                self.add_element(kind);
            }
            EditorAction::Preview => {
                self.preview();
            }
            EditorAction::ShowSource => {
                self.source_dump()?;
            }
            EditorAction::UpdateTextContent(content) => {
                self.update_text_content(content)?;
            }
            EditorAction::UpdateTextStyle(property, value) => {
                self.update_text_style(property, &value)?;
            }
            EditorAction::UpdateListItems(block) => {
                self.update_list_items(&block)?;
            }
            EditorAction::SetListKind(kind) => {
                self.set_list_kind(kind)?;
            }
            EditorAction::CancelGesture => {
                self.cancel_gesture();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagedraft_core::TextStyle;
    use pagedraft_render::RenderOptions;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_observers_receive_exports() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let mut editor = Editor::new();
        editor.add_observer(move |event: &ExportEvent| sink.borrow_mut().push(event.clone()));

        editor.add_element(ElementKind::Table);
        let html = editor.preview();
        let dump = editor.source_dump().unwrap();

        assert_eq!(
            *events.borrow(),
            vec![ExportEvent::Preview(html.clone()), ExportEvent::SourceDump(dump.clone())]
        );
        assert_eq!(editor.last_preview(), Some(html.as_str()));
        assert_eq!(editor.last_source(), Some(dump.as_str()));
    }

    #[test]
    fn test_preview_uses_configured_render_options() {
        let config = AppConfig::default().with_render_options(RenderOptions::legacy());
        let mut editor = Editor::with_config(config);
        editor.add_element(ElementKind::OrderedList);
        assert_eq!(editor.preview(), "");
    }

    #[test]
    fn test_pointer_down_hit_tests_without_target() {
        let mut editor = Editor::new();
        let id = editor.add_element(ElementKind::Text);
        assert!(editor.pointer_down(Point::new(100.0, 60.0), None));
        assert_eq!(editor.selected().map(Element::id), Some(id));
        editor.pointer_move(Point::new(110.0, 70.0));
        editor.pointer_up(Point::new(110.0, 70.0));
        assert_eq!(editor.document().get(id).unwrap().position(), Point::new(60.0, 60.0));
    }

    #[test]
    fn test_host_settings_from_config() {
        let config = AppConfig::default()
            .with_title("Newsletter")
            .with_canvas_size(1024, 768);
        let editor = Editor::with_config(config);
        assert_eq!(editor.title(), "Newsletter");
        assert_eq!(editor.canvas_size(), Size::new(1024.0, 768.0));
        assert_eq!(
            editor.font_families(),
            &["Arial", "Georgia", "Times New Roman", "Verdana"]
        );
        assert!(editor.font_families().contains(&TextStyle::default().font_family.as_str()));
    }

    #[test]
    fn test_min_width_from_config() {
        let mut editor = Editor::with_config(AppConfig::default().with_min_width(40.0));
        let id = editor.add_element(ElementKind::Text);
        editor.pointer_down(Point::new(249.0, 60.0), None);
        editor.pointer_move(Point::new(0.0, 60.0));
        editor.pointer_up(Point::new(0.0, 60.0));
        assert_eq!(editor.document().get(id).unwrap().width, 40.0);
    }

    #[test]
    fn test_apply_actions() {
        let mut editor = Editor::new();
        editor.apply(EditorAction::AddElement(ElementKind::Text)).unwrap();
        let id = editor.document().ids()[0];
        editor.select(Some(id));
        editor
            .apply(EditorAction::UpdateTextContent("Hello".to_string()))
            .unwrap();
        editor
            .apply(EditorAction::UpdateTextStyle(
                StyleProperty::TextAlign,
                "center".to_string(),
            ))
            .unwrap();
        let el = editor.document().get(id).unwrap();
        assert_eq!(el.content.as_text(), Some("Hello"));
        assert_eq!(el.style.text_align.as_str(), "center");
    }

    #[test]
    fn test_apply_propagates_invalid_style() {
        let mut editor = Editor::new();
        let id = editor.add_element(ElementKind::Text);
        editor.select(Some(id));
        assert!(
            editor
                .apply(EditorAction::UpdateTextStyle(
                    StyleProperty::FontStyle,
                    "bold".to_string()
                ))
                .is_err()
        );
    }

    #[test]
    fn test_cancel_gesture_action() {
        let mut editor = Editor::new();
        let id = editor.add_element(ElementKind::Text);
        editor.pointer_down(Point::new(100.0, 60.0), None);
        editor.pointer_move(Point::new(300.0, 300.0));
        editor.apply(EditorAction::CancelGesture).unwrap();
        assert_eq!(editor.document().get(id).unwrap().position(), Point::new(50.0, 50.0));
    }
}
