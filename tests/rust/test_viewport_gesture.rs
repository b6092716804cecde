use super::*;

fn panning() -> Gesture {
    Gesture::Panning {
        start_pointer: Point::new(100.0, 100.0),
        start_pan: Point::ORIGIN,
    }
}

#[test]
fn test_idle_has_no_delta() {
    let mut tracker = GestureTracker::new(5.0);
    assert_eq!(tracker.delta(Point::new(1.0, 1.0)), None);
    assert!(!tracker.gesture().is_active());
}

#[test]
fn test_delta_from_start() {
    let mut tracker = GestureTracker::new(5.0);
    tracker.begin(panning());
    assert_eq!(tracker.delta(Point::new(110.0, 95.0)), Some(Point::new(10.0, -5.0)));
    assert_eq!(tracker.delta(Point::new(110.0, 95.0)), Some(Point::new(10.0, -5.0)));
}

#[test]
fn test_threshold_marks_drag() {
    let mut tracker = GestureTracker::new(5.0);
    tracker.begin(panning());
    tracker.delta(Point::new(104.0, 105.0));
    assert!(!tracker.has_dragged());
    tracker.delta(Point::new(100.0, 106.0));
    assert!(tracker.has_dragged());
}

#[test]
fn test_end_keeps_drag_flag_until_next_begin() {
    let mut tracker = GestureTracker::new(5.0);
    tracker.begin(panning());
    tracker.delta(Point::new(200.0, 100.0));
    assert_eq!(tracker.end(), panning());
    assert_eq!(tracker.gesture(), Gesture::Idle);
    assert!(tracker.has_dragged());

    tracker.begin(panning());
    assert!(!tracker.has_dragged());
}

#[test]
fn test_begin_ignored_while_active() {
    let mut tracker = GestureTracker::new(5.0);
    assert!(tracker.begin(panning()));
    tracker.delta(Point::new(120.0, 100.0));
    let drag = Gesture::DraggingNode {
        key: PositionKey::leaf(1, 0),
        start_pointer: Point::new(0.0, 0.0),
        start_pos: Point::ORIGIN,
    };
    assert!(!tracker.begin(drag));
    assert_eq!(tracker.gesture(), panning());
    assert!(tracker.has_dragged());
    assert_eq!(tracker.delta(Point::new(130.0, 100.0)), Some(Point::new(30.0, 0.0)));

    tracker.end();
    assert!(tracker.begin(drag));
    assert_eq!(tracker.gesture(), drag);
}

#[test]
fn test_end_when_idle() {
    let mut tracker = GestureTracker::new(5.0);
    assert_eq!(tracker.end(), Gesture::Idle);
}

#[test]
fn test_start_pointer() {
    let drag = Gesture::DraggingNode {
        key: PositionKey::leaf(1, 0),
        start_pointer: Point::new(3.0, 4.0),
        start_pos: Point::ORIGIN,
    };
    assert_eq!(drag.start_pointer(), Some(Point::new(3.0, 4.0)));
    assert_eq!(Gesture::Idle.start_pointer(), None);
}
