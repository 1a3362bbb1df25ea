use timeline_view::{DataBridge, DataState, Rgba, StreamDataItem, StreamMeta, TimeUnit, VecDataBridge};

fn item(start: i64, end: i64) -> StreamDataItem {
    StreamDataItem::new(TimeUnit::new(start), TimeUnit::new(end), DataState::Loaded)
}

fn bridge_with_items(items: &[(i64, i64)]) -> VecDataBridge {
    let mut bridge = VecDataBridge::new();
    let s = bridge.add_stream(StreamMeta::new("a", Rgba::opaque(1.0, 0.0, 0.0)));
    for &(start, end) in items {
        bridge.add_item(s, item(start, end));
    }
    bridge
}

#[test]
fn stream_data_returns_intersecting_items() {
    let bridge = bridge_with_items(&[(0, 100), (2000, 3000), (9000, 9500), (20_000, 21_000)]);
    let hits = bridge.stream_data(0, TimeUnit::new(1000), TimeUnit::new(10_000));
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].start, TimeUnit::new(2000));
    assert_eq!(hits[1].start, TimeUnit::new(9000));
}

#[test]
fn stream_data_includes_long_item_spanning_window() {
    // Starts before the window but still intersects it.
    let bridge = bridge_with_items(&[(0, 50_000)]);
    let hits = bridge.stream_data(0, TimeUnit::new(10_000), TimeUnit::new(20_000));
    assert_eq!(hits.len(), 1);
}

#[test]
fn stream_data_unknown_stream_is_empty() {
    let bridge = bridge_with_items(&[(0, 100)]);
    assert!(bridge.stream_data(5, TimeUnit::new(0), TimeUnit::new(100)).is_empty());
}

#[test]
fn nearest_queries() {
    let bridge = bridge_with_items(&[(1000, 1500), (5000, 6000)]);

    assert_eq!(
        bridge.nearest_at_or_before(0, TimeUnit::new(4999)).map(|i| i.start),
        Some(TimeUnit::new(1000))
    );
    assert_eq!(
        bridge.nearest_at_or_before(0, TimeUnit::new(5000)).map(|i| i.start),
        Some(TimeUnit::new(5000))
    );
    assert_eq!(bridge.nearest_at_or_before(0, TimeUnit::new(999)), None);

    assert_eq!(
        bridge.nearest_at_or_after(0, TimeUnit::new(1001)).map(|i| i.start),
        Some(TimeUnit::new(5000))
    );
    assert_eq!(
        bridge.nearest_at_or_after(0, TimeUnit::new(1000)).map(|i| i.start),
        Some(TimeUnit::new(1000))
    );
    assert_eq!(bridge.nearest_at_or_after(0, TimeUnit::new(6001)), None);
}

#[test]
fn count_and_time_range() {
    let mut bridge = VecDataBridge::new();
    let a = bridge.add_stream(StreamMeta::new("a", Rgba::opaque(1.0, 0.0, 0.0)));
    let b = bridge.add_stream(StreamMeta::new("b", Rgba::opaque(0.0, 1.0, 0.0)));

    assert_eq!(bridge.time_range(), None);

    bridge.add_item(a, item(500, 900));
    bridge.add_item(b, item(-200, 100));
    bridge.add_item(b, item(8000, 12_000));

    assert_eq!(bridge.data_count(a), 1);
    assert_eq!(bridge.data_count(b), 2);
    assert_eq!(
        bridge.time_range(),
        Some((TimeUnit::new(-200), TimeUnit::new(12_000)))
    );
}

#[test]
fn set_items_sorts_by_start() {
    let mut bridge = VecDataBridge::new();
    let s = bridge.add_stream(StreamMeta::new("a", Rgba::opaque(1.0, 0.0, 0.0)));
    bridge.set_items(s, vec![item(3000, 3100), item(1000, 1100), item(2000, 2100)]);

    let hits = bridge.stream_data(0, TimeUnit::new(0), TimeUnit::new(10_000));
    let starts: Vec<i64> = hits.iter().map(|i| i.start.millis()).collect();
    assert_eq!(starts, vec![1000, 2000, 3000]);
}

#[test]
fn streams_are_ordered() {
    let mut bridge = VecDataBridge::new();
    bridge.add_stream(StreamMeta::new("first", Rgba::opaque(1.0, 0.0, 0.0)));
    bridge.add_stream(StreamMeta::new("second", Rgba::opaque(0.0, 1.0, 0.0)));
    let names: Vec<String> = bridge.streams().iter().map(|s| s.name.clone()).collect();
    assert_eq!(names, vec!["first", "second"]);
}
