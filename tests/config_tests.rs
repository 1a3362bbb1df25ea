use timeline_view::{DataState, StreamDataItem, TimeUnit, TimelineConfig, TimelineTheme};

#[test]
fn default_tunables() {
    let config = TimelineConfig::default();
    assert_eq!(config.scroll_rate_ms, 1000);
    assert_eq!(config.visible_range_ms, 10_000);
    assert_eq!(config.marker_duration_ms, 16);
    assert_eq!(config.min_block_width_px, 1.0);
    assert_eq!(config.notch_interval_ms, 1000);
    assert_eq!(config.max_data_draws, 9000);
}

#[test]
fn config_round_trips_through_json() {
    let mut config = TimelineConfig::default();
    config.visible_range_ms = 60_000;
    config.max_data_draws = 500;

    let json = serde_json::to_string(&config).unwrap();
    let back: TimelineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn theme_round_trips_through_json() {
    let theme = TimelineTheme::default();
    let json = serde_json::to_string(&theme).unwrap();
    let back: TimelineTheme = serde_json::from_str(&json).unwrap();
    assert_eq!(back, theme);
}

#[test]
fn data_items_serialize_for_host_persistence() {
    let item = StreamDataItem::new(TimeUnit::new(2000), TimeUnit::new(3000), DataState::Exists);
    let json = serde_json::to_string(&item).unwrap();
    let back: StreamDataItem = serde_json::from_str(&json).unwrap();
    assert_eq!(back, item);
    assert_eq!(back.duration(), TimeUnit::new(1000));
}
