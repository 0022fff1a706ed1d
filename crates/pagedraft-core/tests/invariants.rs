//! Property tests for the element collection and interaction engine.

use kurbo::Point;
use pagedraft_core::{
    Canvas, CanvasDocument, ElementId, ElementKind, ElementPatch, InteractionEngine, MouseButton,
    PointerEvent, PointerTarget, ResizeHandle,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_kind() -> impl Strategy<Value = ElementKind> {
    prop_oneof![
        Just(ElementKind::Text),
        Just(ElementKind::Image),
        Just(ElementKind::Table),
        Just(ElementKind::UnorderedList),
        Just(ElementKind::OrderedList),
    ]
}

fn arb_point() -> impl Strategy<Value = Point> {
    (-2000i32..2000, -2000i32..2000).prop_map(|(x, y)| Point::new(x as f64, y as f64))
}

proptest! {
    #[test]
    fn prop_ids_unique_and_increasing(kinds in prop::collection::vec(arb_kind(), 1..40)) {
        let mut doc = CanvasDocument::new();
        for kind in &kinds {
            doc.add(*kind);
        }
        let ids = doc.ids().to_vec();
        prop_assert_eq!(ids.len(), kinds.len());
        let unique: HashSet<_> = ids.iter().copied().collect();
        prop_assert_eq!(unique.len(), ids.len());
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn prop_update_of_absent_id_changes_nothing(
        kinds in prop::collection::vec(arb_kind(), 0..10),
        raw in 0u64..1_000_000,
        x in -500.0f64..500.0,
    ) {
        let mut doc = CanvasDocument::new();
        for kind in &kinds {
            doc.add(*kind);
        }
        let before: Vec<_> = doc.elements().cloned().collect();
        let applied = doc.update(ElementId::from_raw(raw), ElementPatch::new().x(x)).unwrap();
        prop_assert!(!applied);
        prop_assert_eq!(doc.elements().cloned().collect::<Vec<_>>(), before);
    }

    #[test]
    fn prop_drag_depends_only_on_net_displacement(
        start in arb_point(),
        path in prop::collection::vec(arb_point(), 1..20),
    ) {
        let mut doc = CanvasDocument::new();
        let id = doc.add(ElementKind::Text).id();
        let mut engine = InteractionEngine::new();
        engine.begin_drag(&doc, id, start);
        for p in &path {
            engine.pointer_move(&mut doc, *p);
        }
        engine.pointer_up();

        let last = path[path.len() - 1];
        let el = doc.get(id).unwrap();
        prop_assert_eq!(el.x, 50.0 + (last.x - start.x));
        prop_assert_eq!(el.y, 50.0 + (last.y - start.y));
        prop_assert_eq!((el.width, el.height), (200.0, 30.0));
    }

    #[test]
    fn prop_right_resize_width(start in arb_point(), end in arb_point()) {
        let mut doc = CanvasDocument::new();
        let id = doc.add(ElementKind::Table).id();
        let mut engine = InteractionEngine::new();
        engine.begin_resize(&doc, id, ResizeHandle::Right, start);
        engine.pointer_move(&mut doc, end);
        let el = doc.get(id).unwrap();
        prop_assert_eq!(el.width, (200.0 + end.x - start.x).max(1.0));
        prop_assert_eq!((el.x, el.y, el.height), (50.0, 50.0, 100.0));
    }

    #[test]
    fn prop_left_resize_keeps_right_edge(start in arb_point(), end in arb_point()) {
        let mut doc = CanvasDocument::new();
        let id = doc.add(ElementKind::Text).id();
        let mut engine = InteractionEngine::new();
        engine.begin_resize(&doc, id, ResizeHandle::Left, start);
        engine.pointer_move(&mut doc, end);
        let el = doc.get(id).unwrap();
        prop_assert!(el.width >= 1.0);
        prop_assert_eq!(el.x + el.width, 250.0);
        prop_assert_eq!(el.y, 50.0);
    }

    #[test]
    fn prop_dump_round_trip_preserves_elements(kinds in prop::collection::vec(arb_kind(), 0..15)) {
        let mut doc = CanvasDocument::new();
        for kind in &kinds {
            doc.add(*kind);
        }
        let loaded = CanvasDocument::from_json(&doc.to_json().unwrap()).unwrap();
        let original: Vec<_> = doc.elements().cloned().collect();
        let restored: Vec<_> = loaded.elements().cloned().collect();
        prop_assert_eq!(original, restored);
    }
}

#[test]
fn test_drag_then_resize_session() {
    let mut canvas = Canvas::new();
    let id = canvas.add_element(ElementKind::Text);

    canvas.handle_pointer_event(PointerEvent::Down {
        position: Point::new(100.0, 100.0),
        button: MouseButton::Left,
        target: PointerTarget::Body(id),
    });
    canvas.handle_pointer_event(PointerEvent::Move {
        position: Point::new(130.0, 80.0),
    });
    canvas.handle_pointer_event(PointerEvent::Up {
        position: Point::new(130.0, 80.0),
        button: MouseButton::Left,
    });

    // Element now spans x 80..280
    let target = canvas.target_at(Point::new(279.0, 40.0));
    assert_eq!(target, PointerTarget::Handle(id, ResizeHandle::Right));
    canvas.handle_pointer_event(PointerEvent::Down {
        position: Point::new(279.0, 40.0),
        button: MouseButton::Left,
        target,
    });
    canvas.handle_pointer_event(PointerEvent::Move {
        position: Point::new(229.0, 40.0),
    });
    canvas.handle_pointer_event(PointerEvent::Up {
        position: Point::new(229.0, 40.0),
        button: MouseButton::Left,
    });

    let el = canvas.document.get(id).unwrap();
    assert_eq!((el.x, el.y, el.width, el.height), (80.0, 30.0, 150.0, 30.0));
    assert!(canvas.selection.is_selected(id));
}
