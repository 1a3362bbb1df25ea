use rand::Rng;
use timeline_view::geometry::Rect;
use timeline_view::rendering::{render_timeline, RenderParams};
use timeline_view::{
    DataBridge, DataState, RecordingSurface, Rgba, StreamDataItem, StreamMeta, TimeUnit,
    TimelineConfig, TimelineTheme, VecDataBridge, VisibleWindow,
};

#[test]
fn dense_data_is_capped_at_the_draw_budget() {
    let mut rng = rand::rng();
    let mut bridge = VecDataBridge::new();
    let colors = [
        Rgba::opaque(1.0, 0.0, 0.0),
        Rgba::opaque(0.0, 1.0, 0.0),
        Rgba::opaque(0.0, 0.0, 1.0),
        Rgba::opaque(1.0, 1.0, 0.0),
    ];
    for (i, &color) in colors.iter().enumerate() {
        let s = bridge.add_stream(StreamMeta::new(format!("s{i}"), color));
        let mut items = Vec::with_capacity(5000);
        for _ in 0..5000 {
            let start = TimeUnit::new(rng.random_range(0..10_000));
            // Zero duration: one rect per item, no notches.
            items.push(StreamDataItem::new(start, start, DataState::Loaded));
        }
        bridge.set_items(s, items);
    }

    let config = TimelineConfig::default();
    let theme = TimelineTheme::default();
    let streams = bridge.streams();
    let mut surface = RecordingSurface::new();
    render_timeline(
        &mut surface,
        &bridge,
        &RenderParams {
            canvas: Rect::new(0.0, 0.0, 1000.0, 400.0),
            window: VisibleWindow::new(TimeUnit::ZERO, TimeUnit::new(10_000)),
            selection: None,
            hover: None,
            drag: None,
            streams: &streams,
            theme: &theme,
            config: &config,
        },
    );

    let block_rects: usize = colors
        .iter()
        .map(|&c| surface.rects_with_color(c).len())
        .sum();
    assert_eq!(block_rects, config.max_data_draws as usize);
}

#[test]
fn nearest_queries_agree_with_a_linear_scan() {
    let mut rng = rand::rng();
    let mut bridge = VecDataBridge::new();
    let s = bridge.add_stream(StreamMeta::new("a", Rgba::opaque(1.0, 0.0, 0.0)));

    let mut starts = Vec::with_capacity(2000);
    for _ in 0..2000 {
        let start = rng.random_range(-50_000..50_000i64);
        starts.push(start);
        bridge.add_item(
            s,
            StreamDataItem::new(
                TimeUnit::new(start),
                TimeUnit::new(start + rng.random_range(0..500)),
                DataState::Loaded,
            ),
        );
    }

    for _ in 0..200 {
        let probe = rng.random_range(-60_000..60_000i64);

        let before = starts.iter().copied().filter(|&v| v <= probe).max();
        assert_eq!(
            bridge
                .nearest_at_or_before(s, TimeUnit::new(probe))
                .map(|i| i.start.millis()),
            before,
            "at-or-before {probe}"
        );

        let after = starts.iter().copied().filter(|&v| v >= probe).min();
        assert_eq!(
            bridge
                .nearest_at_or_after(s, TimeUnit::new(probe))
                .map(|i| i.start.millis()),
            after,
            "at-or-after {probe}"
        );
    }
}
