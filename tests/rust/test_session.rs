use super::*;
use crate::hierarchy::build_tree;
use crate::readers::json::rows_from_value;
use pretty_assertions::assert_eq;
use serde_json::json;

// Layers 1 and 2. Hub 1 at (100, 100), hub 2 at (100, 270).
// Default zoom 0.5 and no pan: screen = world / 2.
fn session() -> CanvasSession {
    let rows = rows_from_value(&json!([
        {"AccountNo": "A1", "Layer": 1, "State": "Kerala", "IFSC Code": "SBIN0001"},
        {"AccountNo": "A2", "Layer": 1, "parent_acc_no": "A1"},
        {"AccountNo": "A3", "Layer": 2, "parent_acc_no": "A2"}
    ]))
    .unwrap();
    CanvasSession::new(build_tree(&rows), &FlowConfig::default())
}

fn screen(world: Point) -> Point {
    world.scale(0.5)
}

#[test]
fn test_opens_collapsed_with_hubs() {
    let s = session();
    let frame = s.snapshot();
    assert_eq!(frame.hubs.len(), 2);
    assert_eq!(frame.hubs[0].rect, Rect::new(100.0, 100.0, 200.0, 120.0));
    assert_eq!(frame.hubs[0].account_count, 2);
    assert_eq!(frame.hubs[1].rect.y, 270.0);
    assert_eq!(frame.hubs[1].color, "#14b8a6");
    assert!(frame.leaves.is_empty());
    assert!(frame.connectors.is_empty());
    assert_eq!(frame.zoom, 0.5);
}

#[test]
fn test_toggle_lays_out_leaves() {
    let mut s = session();
    s.handle(InputEvent::ToggleLayer(1));
    let frame = s.snapshot();
    assert_eq!(frame.leaves.len(), 2);
    assert_eq!(frame.leaves[0].id, "A1");
    assert_eq!(frame.leaves[0].rect.x, 450.0);
    assert_eq!(frame.leaves[0].rect.y, 60.0);
    assert_eq!(frame.leaves[1].rect.x, 800.0);
    assert_eq!(frame.leaves[0].state.as_deref(), Some("Kerala"));
    assert_eq!(frame.leaves[0].ifsc_code.as_deref(), Some("SBIN0001"));
    assert_eq!(frame.leaves[1].state, None);
    assert_eq!(frame.connectors.len(), 2);
    assert!(frame.hubs[0].expanded);
    assert!(!frame.hubs[1].expanded);
}

#[test]
fn test_drag_leaf_by_events() {
    let mut s = session();
    s.toggle_layer(1);
    let grab = screen(Point::new(460.0, 70.0));
    assert_eq!(s.press(grab), HitTarget::Node(PositionKey::leaf(1, 0)));

    let to = grab + Point::new(50.0, 0.0);
    s.handle(InputEvent::PointerMove { pos: to });
    s.handle(InputEvent::PointerMove { pos: to });
    s.handle(InputEvent::PointerUp);

    // 50 screen px at zoom 0.5 is 100 world units.
    assert_eq!(s.engine().position(PositionKey::leaf(1, 0)), Point::new(550.0, 60.0));
    assert_eq!(s.gesture(), Gesture::Idle);

    let frame = s.snapshot();
    assert_eq!(frame.connectors[0].end, Point::new(550.0, 130.0));
}

#[test]
fn test_pan_by_events() {
    let mut s = session();
    let start = Point::new(1000.0, 1000.0);
    assert_eq!(s.press(start), HitTarget::Background);
    s.handle(InputEvent::PointerMove { pos: Point::new(1010.0, 1020.0) });
    assert_eq!(s.viewport().pan, Point::new(10.0, 20.0));
    s.handle(InputEvent::PointerMove { pos: Point::new(1010.0, 1020.0) });
    assert_eq!(s.viewport().pan, Point::new(10.0, 20.0));
    s.handle(InputEvent::PointerUp);
    s.handle(InputEvent::PointerMove { pos: Point::new(0.0, 0.0) });
    assert_eq!(s.viewport().pan, Point::new(10.0, 20.0));
}

#[test]
fn test_gesture_kind_fixed_at_pointer_down() {
    let mut s = session();
    let hub = screen(Point::new(150.0, 150.0));
    assert_eq!(s.press(hub), HitTarget::Node(PositionKey::Hub(1)));
    // Moving over empty canvas keeps dragging the hub.
    s.handle(InputEvent::PointerMove { pos: Point::new(900.0, 900.0) });
    assert!(matches!(s.gesture(), Gesture::DraggingNode { .. }));
    assert_eq!(s.viewport().pan, Point::ORIGIN);
}

#[test]
fn test_click_ignored_after_drag() {
    let mut s = session();
    s.toggle_layer(1);
    let key = PositionKey::leaf(1, 0);
    let grab = screen(Point::new(460.0, 70.0));

    s.press(grab);
    s.handle(InputEvent::PointerMove { pos: grab + Point::new(20.0, 0.0) });
    s.handle(InputEvent::PointerUp);
    s.handle(InputEvent::Click { key });
    assert_eq!(s.selected().map(|n| n.id.as_str()), None);

    s.press(grab + Point::new(20.0, 0.0));
    s.handle(InputEvent::PointerUp);
    s.handle(InputEvent::Click { key });
    assert_eq!(s.selected().map(|n| n.id.as_str()), Some("A1"));
    assert_eq!(s.snapshot().selected.as_deref(), Some("A1"));
    assert!(s.snapshot().leaves[0].selected);
}

#[test]
fn test_small_jitter_still_clicks() {
    let mut s = session();
    s.toggle_layer(2);
    let grab = screen(Point::new(460.0, 250.0));
    assert_eq!(s.press(grab), HitTarget::Node(PositionKey::leaf(2, 0)));
    s.handle(InputEvent::PointerMove { pos: grab + Point::new(3.0, -4.0) });
    s.handle(InputEvent::PointerUp);
    assert_eq!(
        s.click(PositionKey::leaf(2, 0)).map(|n| n.id.clone()),
        Some("A3".to_string())
    );
}

#[test]
fn test_hub_click_selects_nothing() {
    let mut s = session();
    assert!(s.click(PositionKey::Hub(1)).is_none());
}

#[test]
fn test_click_on_collapsed_layer_selects_nothing() {
    let mut s = session();
    assert!(s.click(PositionKey::leaf(1, 0)).is_none());
    assert!(s.selected().is_none());

    s.toggle_layer(1);
    assert!(s.click(PositionKey::leaf(1, 0)).is_some());
    s.clear_selection();
    s.toggle_layer(1);
    s.handle(InputEvent::Click { key: PositionKey::leaf(1, 1) });
    assert!(s.selected().is_none());
}

#[test]
fn test_second_pointer_down_keeps_first_gesture() {
    let mut s = session();
    s.toggle_layer(1);
    let start = Point::new(1000.0, 1000.0);
    assert_eq!(s.press(start), HitTarget::Background);

    let grab = screen(Point::new(460.0, 70.0));
    s.pointer_down(HitTarget::Node(PositionKey::leaf(1, 0)), grab);
    assert!(matches!(s.gesture(), Gesture::Panning { .. }));

    s.handle(InputEvent::PointerMove { pos: Point::new(1030.0, 1000.0) });
    assert_eq!(s.viewport().pan, Point::new(30.0, 0.0));
    assert_eq!(s.engine().position(PositionKey::leaf(1, 0)), Point::new(450.0, 60.0));

    s.pointer_up();
    s.pointer_down(HitTarget::Node(PositionKey::leaf(1, 0)), grab);
    assert!(matches!(s.gesture(), Gesture::DraggingNode { .. }));
}

#[test]
fn test_selected_details() {
    let mut s = session();
    s.toggle_layer(1);
    s.click(PositionKey::leaf(1, 0));
    let details = s.selected_details();
    assert_eq!(details[0].label, "Account Number");
    assert_eq!(details[0].value.to_string(), "A1");
    s.clear_selection();
    assert!(s.selected_details().is_empty());
}

#[test]
fn test_select_by_id() {
    let mut s = session();
    assert!(s.select("A3"));
    assert_eq!(s.selected().map(|n| n.layer), Some(2));
    assert!(!s.select("missing"));
    assert_eq!(s.selected().map(|n| n.id.as_str()), Some("A3"));
}

#[test]
fn test_toggle_press_starts_no_gesture() {
    let mut s = session();
    let toggle = screen(Point::new(300.0, 160.0));
    assert_eq!(s.press(toggle), HitTarget::Toggle(1));
    assert_eq!(s.gesture(), Gesture::Idle);
}

#[test]
fn test_leaf_on_top_of_hub() {
    let mut s = session();
    let point = screen(Point::new(150.0, 150.0));
    assert_eq!(s.hit_test(point), HitTarget::Node(PositionKey::Hub(1)));

    s.toggle_layer(1);
    // Drag leaf 0 from (450, 60) onto hub 1 at (100, 100).
    let key = PositionKey::leaf(1, 0);
    let down = Point::new(500.0, 500.0);
    s.pointer_down(HitTarget::Node(key), down);
    s.pointer_move(down + Point::new(-175.0, 20.0));
    s.pointer_up();
    assert_eq!(s.engine().position(key), Point::new(100.0, 100.0));

    assert_eq!(s.hit_test(point), HitTarget::Node(key));
}

#[test]
fn test_collapse_and_reexpand_resets_leaves() {
    let mut s = session();
    s.toggle_layer(1);
    let key = PositionKey::leaf(1, 1);
    let laid_out = s.engine().position(key);

    s.pointer_down(HitTarget::Node(key), Point::ORIGIN);
    s.pointer_move(Point::new(40.0, 40.0));
    s.pointer_up();
    assert_ne!(s.engine().position(key), laid_out);

    assert!(!s.toggle_layer(1));
    assert!(s.snapshot().leaves.is_empty());
    assert!(s.toggle_layer(1));
    assert_eq!(s.engine().position(key), laid_out);
}

#[test]
fn test_expanded_leaves_follow_moved_hub() {
    let mut s = session();
    s.pointer_down(HitTarget::Node(PositionKey::Hub(2)), Point::ORIGIN);
    s.pointer_move(Point::new(50.0, 0.0));
    s.pointer_up();
    s.toggle_layer(2);
    // Hub 2 moved to (200, 270); single leaf grid starts at x + 350.
    assert_eq!(s.engine().position(PositionKey::leaf(2, 0)), Point::new(550.0, 230.0));
}

#[test]
fn test_zoom_events() {
    let mut s = session();
    for _ in 0..40 {
        s.handle(InputEvent::ZoomIn);
    }
    assert_eq!(s.viewport().zoom, 2.0);
    for _ in 0..40 {
        s.handle(InputEvent::ZoomOut);
    }
    assert_eq!(s.viewport().zoom, 0.2);
    s.handle(InputEvent::ResetView);
    assert_eq!(s.viewport().zoom, 0.5);
    assert_eq!(s.viewport().pan, Point::ORIGIN);
}

#[test]
fn test_pointer_up_without_gesture() {
    let mut s = session();
    s.handle(InputEvent::PointerUp);
    assert_eq!(s.gesture(), Gesture::Idle);
}

#[test]
fn test_expand_all() {
    let mut s = session();
    s.expand_all();
    assert!(s.is_expanded(1));
    assert!(s.is_expanded(2));
    assert_eq!(s.snapshot().leaves.len(), 3);
    assert!(!s.expand_layer(1));
}

#[test]
fn test_no_data_session() {
    let s = CanvasSession::new(build_tree(&[]), &FlowConfig::default());
    let frame = s.snapshot();
    assert!(frame.hubs.is_empty());
    assert_eq!(s.hit_test(Point::new(50.0, 50.0)), HitTarget::Background);
}

#[test]
fn test_snapshot_serializes_keys_as_strings() {
    let mut s = session();
    s.toggle_layer(1);
    let v = serde_json::to_value(s.snapshot()).unwrap();
    assert_eq!(v["hubs"][0]["key"], json!("hub-1"));
    assert_eq!(v["leaves"][1]["key"], json!("node-1-1"));
    assert_eq!(v["connectors"][0]["id"], json!("wire-node-1-0"));
}
