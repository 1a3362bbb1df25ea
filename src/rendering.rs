use crate::config::TimelineConfig;
use crate::data_types::{DataBridge, DataState, DragMeta, StreamMeta, TimeUnit, VisibleWindow};
use crate::geometry::{lerp, Rect};
use crate::scales;
use crate::surface::{Anchor, CursorHint, DrawSurface};
use crate::theme::{Rgba, TimelineTheme};
use std::sync::Arc;
use tracing::warn;

/// Inputs for one render pass. Pure: the pass reads these plus the bridge's
/// query results and mutates nothing but the surface.
pub struct RenderParams<'a> {
    pub canvas: Rect,
    pub window: VisibleWindow,
    pub selection: Option<TimeUnit>,
    pub hover: Option<TimeUnit>,
    pub drag: Option<&'a DragMeta>,
    pub streams: &'a [Arc<StreamMeta>],
    pub theme: &'a TimelineTheme,
    pub config: &'a TimelineConfig,
}

/// Splits the canvas vertically into one band per stream, each inset by the
/// configured border.
pub fn stream_rects(canvas: Rect, stream_count: usize, border: f32) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(stream_count);
    for s in 0..stream_count {
        let t0 = s as f32 / stream_count as f32;
        let t1 = (s + 1) as f32 / stream_count as f32;
        let top = lerp(canvas.min_y() + border, canvas.max_y(), t0);
        let bottom = lerp(canvas.min_y() + border, canvas.max_y(), t1) - border;
        let left = canvas.min_x() + border;
        let right = canvas.max_x() - border;
        rects.push(Rect::new(left, top, right - left, bottom - top));
    }
    rects
}

/// Draws blocks for one stream band.
struct BlockPainter<'a> {
    window: VisibleWindow,
    stream_rect: Rect,
    config: &'a TimelineConfig,
}

impl BlockPainter<'_> {
    /// Pixel rectangle for a time interval, with the minimum-width floor:
    /// anything at or under 2px snaps to exactly the floor so zero-duration
    /// data stays visible and clickable.
    fn block_rect(&self, t0: TimeUnit, t1: TimeUnit) -> Rect {
        let left_norm = scales::normalize(self.window.left, self.window.right, t0);
        let right_norm = scales::normalize(self.window.left, self.window.right, t1);
        let norm = Rect::new(left_norm as f32, 0.0, (right_norm - left_norm) as f32, 1.0);
        let mut rect = scales::map_rect(norm, self.stream_rect);

        rect.size.x = rect.size.x.max(self.config.min_block_width_px);
        if rect.size.x <= 2.0 {
            rect.size.x = self.config.min_block_width_px;
        }
        rect
    }

    /// Solid fill for loaded data, dashed diagonal-looking stripe bands for
    /// data that merely exists.
    fn draw_marker(
        &self,
        surface: &mut dyn DrawSurface,
        t0: TimeUnit,
        t1: TimeUnit,
        color: Rgba,
        state: DataState,
    ) -> Rect {
        let rect = self.block_rect(t0, t1);

        match state {
            DataState::Loaded => surface.fill_rect(rect, color),
            DataState::Exists => {
                let stripe = self.config.stripe_height_px;
                let y_offset = (rect.height() % stripe) - stripe / 2.0;
                let mut y = 0.0;
                let mut i = 0u32;
                while y < rect.height() + stripe {
                    // Skip every third band for the dashed look.
                    if i % 3 != 2 {
                        let top = (y + y_offset + rect.min_y()).max(rect.min_y());
                        let bottom = (y + y_offset + rect.min_y() + stripe).min(rect.max_y());
                        if top <= rect.max_y() && bottom > top {
                            surface.fill_rect(
                                Rect::new(rect.min_x(), top, rect.width(), bottom - top),
                                color,
                            );
                        }
                    }
                    y += stripe;
                    i += 1;
                }
            }
        }
        rect
    }

    /// A data block: the marker plus duration notches every configured
    /// interval past the first, and a pan-cursor hint when draggable.
    fn draw_block(
        &self,
        surface: &mut dyn DrawSurface,
        theme: &TimelineTheme,
        t0: TimeUnit,
        t1: TimeUnit,
        color: Rgba,
        state: DataState,
        draggable: bool,
    ) -> Rect {
        let rect = self.draw_marker(surface, t0, t1, color, state);

        let duration_ms = (t1 - t0).millis();
        let mut notch_ms = self.config.notch_interval_ms;
        while notch_ms < duration_ms {
            let notch_time = t0 + TimeUnit::new(notch_ms);
            let mut notch_rect = self.block_rect(notch_time, notch_time);
            notch_rect.size.x = self.config.min_block_width_px;
            surface.fill_rect(notch_rect, theme.block_notch);
            notch_ms += self.config.notch_interval_ms;
        }

        if draggable {
            surface.cursor_hint(rect, CursorHint::Pan);
        }
        rect
    }

    /// Hover/selection cursor: a fixed-small-duration block reusing the
    /// normal draw path for visual consistency.
    fn draw_line(&self, surface: &mut dyn DrawSurface, t: TimeUnit, color: Rgba) -> Rect {
        let t1 = t + TimeUnit::new(self.config.marker_duration_ms);
        self.draw_marker(surface, t, t1, color, DataState::Loaded)
    }
}

/// Renders one full frame of the timeline onto `surface`.
pub fn render_timeline(
    surface: &mut dyn DrawSurface,
    bridge: &dyn DataBridge,
    params: &RenderParams<'_>,
) {
    let theme = params.theme;
    let config = params.config;
    surface.fill_rect(params.canvas, theme.canvas_background);

    let rects = stream_rects(params.canvas, params.streams.len(), config.stream_border_px);

    // Shared across the whole frame; once spent, remaining data blocks in
    // every stream are skipped.
    let mut budget = config.max_data_draws as i64;
    let mut first_selection_rect: Option<Rect> = None;

    for (s, stream) in params.streams.iter().enumerate() {
        let stream_rect = rects[s];
        surface.fill_rect(stream_rect, theme.stream_background);

        let painter = BlockPainter {
            window: params.window,
            stream_rect,
            config,
        };

        // Hover marker underneath everything else.
        if let Some(hover) = params.hover {
            painter.draw_line(surface, hover, theme.hover);
        }

        let items = bridge.stream_data(s, params.window.left, params.window.right);
        for item in items {
            budget -= 1;
            if budget < 0 {
                break;
            }

            painter.draw_block(
                surface,
                theme,
                item.start,
                item.end,
                stream.color,
                item.state,
                stream.draggable(),
            );

            // Ghost of the same block offset by the live drag.
            if let Some(drag) = params.drag {
                if !drag.dead() && drag.stream_index == Some(s) {
                    painter.draw_block(
                        surface,
                        theme,
                        item.start + drag.drag_amount,
                        item.end + drag.drag_amount,
                        theme.drag_preview,
                        item.state,
                        stream.draggable(),
                    );
                }
            }
        }

        // Selection on top; remember the first stream's marker rect so the
        // selected-time label can anchor to it.
        if let Some(selection) = params.selection {
            let rect = painter.draw_line(surface, selection, theme.selection);
            if first_selection_rect.is_none() {
                first_selection_rect = Some(rect);
            }
        }

        surface.shadow_label(
            stream_rect,
            &stream.name,
            Anchor::LowerLeft,
            theme.stream_label_weight,
            theme.stream_label,
        );
    }

    surface.shadow_label(
        params.canvas,
        &format!("|< {}", params.window.left.label(false)),
        Anchor::UpperLeft,
        theme.time_label_weight,
        theme.time_label,
    );
    surface.shadow_label(
        params.canvas,
        &format!("{} >|", params.window.right.label(false)),
        Anchor::UpperRight,
        theme.time_label_weight,
        theme.time_label,
    );
    if let (Some(selection), Some(rect)) = (params.selection, first_selection_rect) {
        surface.shadow_label(
            rect,
            &format!("\n<<{}", selection.label(true)),
            Anchor::UpperLeft,
            theme.time_label_weight,
            theme.time_label,
        );
    }

    if budget < 0 {
        warn!(
            skipped = -budget,
            cap = config.max_data_draws,
            "exceeded draw cap, remaining blocks skipped this frame"
        );
    }
}

/// Paints where the visible window sits within the provider's global bounds,
/// for a host minimap strip.
pub fn render_overview(
    surface: &mut dyn DrawSurface,
    bridge: &dyn DataBridge,
    canvas: Rect,
    window: VisibleWindow,
    theme: &TimelineTheme,
) {
    let Some((min, max)) = bridge.time_range() else {
        return;
    };
    let left_norm = scales::normalize(min, max, window.left);
    let right_norm = scales::normalize(min, max, window.right);
    let norm = Rect::new(left_norm as f32, 0.0, (right_norm - left_norm) as f32, 1.0);
    surface.fill_rect(scales::map_rect(norm, canvas), theme.overview_window);
}
