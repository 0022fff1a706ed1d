//! Preview output for editing sessions driven through the canvas.

use kurbo::Point;
use pagedraft_core::{
    Canvas, CanvasDocument, ElementKind, ListKind, MouseButton, PointerEvent, StyleProperty,
};
use pagedraft_render::{HtmlRenderer, RenderContext, Renderer};

fn preview(document: &CanvasDocument) -> String {
    HtmlRenderer::new().render(&RenderContext::new(document))
}

#[test]
fn test_empty_document_renders_nothing() {
    assert_eq!(preview(&CanvasDocument::new()), "");
}

#[test]
fn test_styled_text_session() {
    let mut canvas = Canvas::new();
    let id = canvas.add_element(ElementKind::Text);
    canvas.select(Some(id));
    canvas.update_text_style(StyleProperty::Color, "#ff0000").unwrap();

    assert_eq!(
        preview(&canvas.document),
        "<p style=\"font-size:16px; color:#ff0000; text-align:left; font-family:Arial; \
         font-style:normal; line-height:1.5; margin-bottom:0;\">Edit me!</p>"
    );
}

#[test]
fn test_elements_concatenate_in_insertion_order() {
    let mut canvas = Canvas::new();
    canvas.add_element(ElementKind::Table);
    canvas.add_element(ElementKind::UnorderedList);
    assert_eq!(
        preview(&canvas.document),
        "<table><tr></tr></table><ul><li>Item 1</li><li>Item 2</li><li>Item 3</li></ul>"
    );
}

#[test]
fn test_geometry_does_not_affect_text_preview() {
    let mut canvas = Canvas::new();
    let id = canvas.add_element(ElementKind::Text);
    let before = preview(&canvas.document);

    let target = canvas.target_at(Point::new(150.0, 60.0));
    canvas.handle_pointer_event(PointerEvent::Down {
        position: Point::new(150.0, 60.0),
        button: MouseButton::Left,
        target,
    });
    canvas.handle_pointer_event(PointerEvent::Move {
        position: Point::new(300.0, 200.0),
    });
    canvas.handle_pointer_event(PointerEvent::Up {
        position: Point::new(300.0, 200.0),
        button: MouseButton::Left,
    });

    assert_eq!(canvas.document.get(id).unwrap().position(), Point::new(200.0, 190.0));
    assert_eq!(preview(&canvas.document), before);
}

#[test]
fn test_list_edit_and_switch() {
    let mut canvas = Canvas::new();
    let id = canvas.add_element(ElementKind::UnorderedList);
    canvas.select(Some(id));
    canvas.update_list_items("Milk\n\nEggs").unwrap();
    assert_eq!(preview(&canvas.document), "<ul><li>Milk</li><li>Eggs</li></ul>");

    canvas.set_list_kind(ListKind::Ordered).unwrap();
    assert_eq!(preview(&canvas.document), "<ol><li>Milk</li><li>Eggs</li></ol>");
}

#[test]
fn test_reloaded_dump_renders_identically() {
    let mut canvas = Canvas::new();
    for kind in ElementKind::all() {
        canvas.add_element(*kind);
    }
    let reloaded = CanvasDocument::from_json(&canvas.document.to_json().unwrap()).unwrap();
    assert_eq!(preview(&reloaded), preview(&canvas.document));
}
