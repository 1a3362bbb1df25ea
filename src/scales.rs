use crate::data_types::TimeUnit;
use crate::geometry::Rect;

/// Linear position of `value` between `min` and `max`. Deliberately not
/// clamped: off-window data lands outside [0, 1] and is clipped downstream.
pub fn normalize(min: TimeUnit, max: TimeUnit, value: TimeUnit) -> f64 {
    let span = (max.millis() - min.millis()) as f64;
    if span == 0.0 {
        return 0.0;
    }
    (value.millis() - min.millis()) as f64 / span
}

/// Inverse of [`normalize`]. Callers must reject `t` outside [0, 1] before
/// trusting the result; position-to-time lookups treat those as "outside
/// canvas" rather than extrapolating.
pub fn denormalize(min: TimeUnit, max: TimeUnit, t: f64) -> TimeUnit {
    let ms = min.millis() as f64 + (max.millis() - min.millis()) as f64 * t;
    TimeUnit::new(ms as i64)
}

/// Maps a rectangle in normalized [0, 1] coordinates into a pixel target,
/// linear on both axes.
pub fn map_rect(norm: Rect, target: Rect) -> Rect {
    Rect::new(
        target.min_x() + norm.origin.x * target.width(),
        target.min_y() + norm.origin.y * target.height(),
        norm.width() * target.width(),
        norm.height() * target.height(),
    )
}
