//! WebAssembly bindings for browser front ends.

use crate::config::AppConfig;
use crate::editor::{Editor, ExportEvent};
use crate::error::AppError;
use kurbo::Point;
use pagedraft_core::{ElementId, ElementKind, ListKind, PointerTarget, ResizeHandle, StyleProperty};
use wasm_bindgen::prelude::*;

/// Set up panic reporting and console logging.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting PageDraft (WASM)");
}

fn js_error(e: impl Into<AppError>) -> JsValue {
    JsValue::from_str(&e.into().to_string())
}

// Element ids are millisecond timestamps, well inside the range JS numbers hold exactly.
fn id_from_js(id: f64) -> ElementId {
    ElementId::from_raw(id as u64)
}

fn id_to_js(id: ElementId) -> f64 {
    id.raw() as f64
}

/// Editor handle exported to JavaScript.
#[wasm_bindgen]
pub struct WebEditor {
    editor: Editor,
}

#[wasm_bindgen]
impl WebEditor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebEditor {
        WebEditor {
            editor: Editor::with_config(AppConfig::default()),
        }
    }

    /// Replace the document with one loaded from a source dump.
    pub fn load(&mut self, source: &str) -> Result<(), JsValue> {
        let config = self.editor.config().clone();
        self.editor = Editor::load(config, source).map_err(js_error)?;
        Ok(())
    }

    /// Add an element by kind name (`text`, `image`, `table`, `unordered-list`, `ordered-list`).
    #[wasm_bindgen(js_name = addElement)]
    pub fn add_element(&mut self, kind: &str) -> Result<f64, JsValue> {
        let kind: ElementKind = kind.parse().map_err(js_error)?;
        Ok(id_to_js(self.editor.add_element(kind)))
    }

    /// Select an element by id, or clear the selection with `undefined`.
    pub fn select(&mut self, id: Option<f64>) {
        self.editor.select(id.map(id_from_js));
    }

    /// Title for the host page.
    #[wasm_bindgen(getter)]
    pub fn title(&self) -> String {
        self.editor.title().to_string()
    }

    #[wasm_bindgen(getter, js_name = canvasWidth)]
    pub fn canvas_width(&self) -> f64 {
        self.editor.canvas_size().width
    }

    #[wasm_bindgen(getter, js_name = canvasHeight)]
    pub fn canvas_height(&self) -> f64 {
        self.editor.canvas_size().height
    }

    /// Font families for the property panel dropdown.
    #[wasm_bindgen(js_name = fontFamilies)]
    pub fn font_families(&self) -> js_sys::Array {
        self.editor
            .font_families()
            .iter()
            .map(|family| JsValue::from_str(family))
            .collect()
    }

    #[wasm_bindgen(js_name = selectedId)]
    pub fn selected_id(&self) -> Option<f64> {
        self.editor.selected().map(|e| id_to_js(e.id()))
    }

    /// Pointer press at a canvas point, hit-tested against the elements.
    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        self.editor.pointer_down(Point::new(x, y), None)
    }

    /// Pointer press on a known part of an element: `body`, `left` or `right`.
    #[wasm_bindgen(js_name = pointerDownOn)]
    pub fn pointer_down_on(&mut self, id: f64, part: &str, x: f64, y: f64) -> bool {
        let id = id_from_js(id);
        let target = match part {
            "left" => PointerTarget::Handle(id, ResizeHandle::Left),
            "right" => PointerTarget::Handle(id, ResizeHandle::Right),
            _ => PointerTarget::Body(id),
        };
        self.editor.pointer_down(Point::new(x, y), Some(target))
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f64, y: f64) -> bool {
        self.editor.pointer_move(Point::new(x, y))
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f64, y: f64) -> bool {
        self.editor.pointer_up(Point::new(x, y))
    }

    #[wasm_bindgen(js_name = cancelGesture)]
    pub fn cancel_gesture(&mut self) -> bool {
        self.editor.cancel_gesture()
    }

    #[wasm_bindgen(js_name = updateTextContent)]
    pub fn update_text_content(&mut self, content: &str) -> Result<bool, JsValue> {
        self.editor.update_text_content(content).map_err(js_error)
    }

    /// Change a style property by its camelCase or CSS name.
    #[wasm_bindgen(js_name = updateTextStyle)]
    pub fn update_text_style(&mut self, property: &str, value: &str) -> Result<bool, JsValue> {
        let property: StyleProperty = property.parse().map_err(js_error)?;
        self.editor
            .update_text_style(property, value)
            .map_err(js_error)
    }

    #[wasm_bindgen(js_name = updateListItems)]
    pub fn update_list_items(&mut self, block: &str) -> Result<bool, JsValue> {
        self.editor.update_list_items(block).map_err(js_error)
    }

    /// Switch the selected list: `unordered` or `ordered`.
    #[wasm_bindgen(js_name = setListKind)]
    pub fn set_list_kind(&mut self, kind: &str) -> Result<bool, JsValue> {
        let kind = match kind {
            "ordered" | "ordered-list" => ListKind::Ordered,
            "unordered" | "unordered-list" => ListKind::Unordered,
            other => return Err(JsValue::from_str(&format!("Unknown list kind: {}", other))),
        };
        self.editor.set_list_kind(kind).map_err(js_error)
    }

    pub fn preview(&mut self) -> String {
        self.editor.preview()
    }

    #[wasm_bindgen(js_name = sourceDump)]
    pub fn source_dump(&mut self) -> Result<String, JsValue> {
        self.editor.source_dump().map_err(js_error)
    }

    /// Register `callback(kind, text)` for export output, `kind` being
    /// `"preview"` or `"source"`.
    #[wasm_bindgen(js_name = onExport)]
    pub fn on_export(&mut self, callback: js_sys::Function) {
        self.editor.add_observer(move |event: &ExportEvent| {
            let kind = match event {
                ExportEvent::Preview(_) => "preview",
                ExportEvent::SourceDump(_) => "source",
            };
            if let Err(e) = callback.call2(
                &JsValue::NULL,
                &JsValue::from_str(kind),
                &JsValue::from_str(event.content()),
            ) {
                log::warn!("Export callback failed: {:?}", e);
            }
        });
    }

    /// Render the preview into the DOM element with the given id.
    #[wasm_bindgen(js_name = showPreviewIn)]
    pub fn show_preview_in(&mut self, element_id: &str) -> Result<(), JsValue> {
        let html = self.editor.preview();
        let target = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
            .ok_or_else(|| JsValue::from_str(&format!("No element with id {}", element_id)))?;
        target.set_inner_html(&html);
        Ok(())
    }
}

impl Default for WebEditor {
    fn default() -> Self {
        Self::new()
    }
}
