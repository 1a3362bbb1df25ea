use crate::data_types::{TimeUnit, VisibleWindow};
use crate::geometry::{inverse_lerp, Rect};
use crate::scales;
use glam::Vec2;

/// Scale between TimeUnit and the host scrollbar's float units, chosen to
/// keep values small enough that float error stays under a millisecond.
pub const SCROLLBAR_TIME_SCALAR: f32 = 16.0 * 1000.0;

/// Pure interaction math, kept free of any view state so it can be tested
/// in isolation.
pub struct ViewController;

impl ViewController {
    /// Maps a screen position inside `canvas` to a time in `window`.
    /// Positions outside the canvas return None rather than extrapolating.
    pub fn position_to_time(canvas: Rect, window: VisibleWindow, position: Vec2) -> Option<TimeUnit> {
        let xf = inverse_lerp(canvas.min_x(), canvas.max_x(), position.x) as f64;
        let yf = inverse_lerp(canvas.min_y(), canvas.max_y(), position.y) as f64;
        if !(0.0..=1.0).contains(&xf) || !(0.0..=1.0).contains(&yf) {
            return None;
        }
        Some(scales::denormalize(window.left, window.right, xf))
    }

    /// As [`Self::position_to_time`], also resolving which stream band the
    /// position falls in.
    pub fn position_to_stream_and_time(
        canvas: Rect,
        window: VisibleWindow,
        stream_count: usize,
        position: Vec2,
    ) -> (Option<TimeUnit>, Option<usize>) {
        let Some(time) = Self::position_to_time(canvas, window, position) else {
            return (None, None);
        };
        let yf = inverse_lerp(canvas.min_y(), canvas.max_y(), position.y);
        (Some(time), Self::stream_index_on_canvas(yf, stream_count))
    }

    /// Resolves a normalized y position into a stream band index.
    pub fn stream_index_on_canvas(y_normalized: f32, stream_count: usize) -> Option<usize> {
        if y_normalized < 0.0 || stream_count == 0 {
            return None;
        }
        let index = (y_normalized * stream_count as f32) as usize;
        // y == 1.0 resolves to the bottom band rather than one past it.
        Some(index.min(stream_count - 1))
    }

    /// New window-left after a jump, placing `item_time` under the same
    /// screen x the user clicked at.
    pub fn jump_scroll_left(
        window_left: TimeUnit,
        clicked_time: TimeUnit,
        item_time: TimeUnit,
    ) -> TimeUnit {
        let offset = clicked_time - window_left;
        item_time - offset
    }

    /// Whether a manually scrolled window still touches the data's right
    /// bound, re-arming auto-follow.
    pub fn touches_right_bound(
        window_left: TimeUnit,
        visible_range: TimeUnit,
        right_bound: TimeUnit,
    ) -> bool {
        window_left + visible_range >= right_bound
    }

    pub fn time_to_scrollbar(time: TimeUnit) -> f32 {
        time.millis() as f32 / SCROLLBAR_TIME_SCALAR
    }

    pub fn scrollbar_to_time(value: f32) -> TimeUnit {
        TimeUnit::new((value * SCROLLBAR_TIME_SCALAR) as i64)
    }
}
