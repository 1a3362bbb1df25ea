use serde::{Deserialize, Serialize};

/// Tunables for layout, interaction and the render budget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    /// Time shift per vertical scroll unit, in milliseconds.
    pub scroll_rate_ms: i64,
    /// Width of the visible window, in milliseconds.
    pub visible_range_ms: i64,
    /// Duration used to draw hover/selection markers so they reuse the
    /// normal block path.
    pub marker_duration_ms: i64,
    /// Floor applied to every drawn block so zero-duration data stays
    /// visible and clickable.
    pub min_block_width_px: f32,
    /// Height of one stripe band for not-yet-loaded blocks.
    pub stripe_height_px: f32,
    /// Spacing of duration notches inside long blocks.
    pub notch_interval_ms: i64,
    /// Hard cap on fill calls per frame, in case something goes wrong.
    pub max_data_draws: u32,
    /// Border between adjacent stream bands.
    pub stream_border_px: f32,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            scroll_rate_ms: 1000,
            visible_range_ms: 10_000,
            marker_duration_ms: 16,
            min_block_width_px: 1.0,
            stripe_height_px: 2.0,
            notch_interval_ms: 1000,
            max_data_draws: 9000,
            stream_border_px: 1.0,
        }
    }
}
