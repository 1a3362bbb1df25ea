use glam::Vec2;
use timeline_view::geometry::Rect;
use timeline_view::{TimeUnit, ViewController, VisibleWindow};

fn window() -> VisibleWindow {
    VisibleWindow::new(TimeUnit::new(0), TimeUnit::new(10_000))
}

#[test]
fn position_maps_linearly() {
    let canvas = Rect::new(0.0, 0.0, 1000.0, 100.0);
    let t = ViewController::position_to_time(canvas, window(), Vec2::new(250.0, 50.0));
    assert_eq!(t, Some(TimeUnit::new(2500)));
}

#[test]
fn position_outside_canvas_is_rejected() {
    let canvas = Rect::new(0.0, 0.0, 1000.0, 100.0);
    for pos in [
        Vec2::new(-1.0, 50.0),
        Vec2::new(1001.0, 50.0),
        Vec2::new(500.0, -1.0),
        Vec2::new(500.0, 101.0),
    ] {
        assert_eq!(ViewController::position_to_time(canvas, window(), pos), None);
    }
}

#[test]
fn position_respects_canvas_origin() {
    let canvas = Rect::new(100.0, 10.0, 1000.0, 100.0);
    let t = ViewController::position_to_time(canvas, window(), Vec2::new(600.0, 60.0));
    assert_eq!(t, Some(TimeUnit::new(5000)));
}

#[test]
fn stream_index_resolves_bands() {
    assert_eq!(ViewController::stream_index_on_canvas(0.0, 4), Some(0));
    assert_eq!(ViewController::stream_index_on_canvas(0.3, 4), Some(1));
    assert_eq!(ViewController::stream_index_on_canvas(0.99, 4), Some(3));
}

#[test]
fn stream_index_bottom_edge_resolves_to_last_band() {
    // y exactly on the bottom edge belongs to the last stream, not one past
    // the end.
    assert_eq!(ViewController::stream_index_on_canvas(1.0, 3), Some(2));
}

#[test]
fn stream_index_invalid_inputs() {
    assert_eq!(ViewController::stream_index_on_canvas(-0.1, 3), None);
    assert_eq!(ViewController::stream_index_on_canvas(0.5, 0), None);
}

#[test]
fn position_to_stream_and_time() {
    let canvas = Rect::new(0.0, 0.0, 1000.0, 100.0);
    let (time, stream) = ViewController::position_to_stream_and_time(
        canvas,
        window(),
        2,
        Vec2::new(500.0, 75.0),
    );
    assert_eq!(time, Some(TimeUnit::new(5000)));
    assert_eq!(stream, Some(1));
}

#[test]
fn jump_preserves_pixel_offset() {
    // Clicked at 500 with the window starting at 0; the found item at 5000
    // must land under the same screen x.
    let left = ViewController::jump_scroll_left(
        TimeUnit::new(0),
        TimeUnit::new(500),
        TimeUnit::new(5000),
    );
    assert_eq!(left, TimeUnit::new(4500));

    // Same geometry with a scrolled window.
    let left = ViewController::jump_scroll_left(
        TimeUnit::new(2000),
        TimeUnit::new(2500),
        TimeUnit::new(9000),
    );
    assert_eq!(left, TimeUnit::new(8500));
}

#[test]
fn touches_right_bound() {
    let range = TimeUnit::new(10_000);
    assert!(ViewController::touches_right_bound(
        TimeUnit::new(2000),
        range,
        TimeUnit::new(12_000)
    ));
    assert!(!ViewController::touches_right_bound(
        TimeUnit::new(1999),
        range,
        TimeUnit::new(12_000)
    ));
}

#[test]
fn scrollbar_conversion_round_trip() {
    for ms in [0, 1000, 16_000, 123_456] {
        let t = TimeUnit::new(ms);
        let back = ViewController::scrollbar_to_time(ViewController::time_to_scrollbar(t));
        assert!((back.millis() - ms).abs() <= 1, "{} -> {}", ms, back.millis());
    }
}
