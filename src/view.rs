use crate::config::TimelineConfig;
use crate::data_types::{
    DataBridge, DragMeta, StreamAndTime, StreamMeta, TimeUnit, VisibleWindow,
};
use crate::geometry::Rect;
use crate::input::{InputCache, InputEvent};
use crate::menu::MenuBuilder;
use crate::rendering::{render_timeline, RenderParams};
use crate::surface::{Anchor, DrawSurface};
use crate::theme::TimelineTheme;
use crate::utils::guard;
use crate::view_controller::ViewController;
use eyre::Result;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Emitted domain event handler carrying one time value.
pub type TimeHandler = Box<dyn Fn(TimeUnit) -> Result<()>>;
/// Receives a built context menu for the host menu widget to show.
pub type MenuSink = Box<dyn Fn(MenuBuilder) -> Result<()>>;

/// Snapshot for the host's horizontal scrollbar widget, in scrollbar float
/// units (see [`ViewController::time_to_scrollbar`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollbarState {
    pub value: f32,
    pub visible_size: f32,
    pub range_min: f32,
    pub range_max: f32,
}

/// Owns all interaction state and runs one full cycle per frame:
/// sticky recompute, render, then input resolution. Unbridged, it only
/// shows a placeholder.
pub struct TimelineView {
    bridge: Option<Arc<RwLock<dyn DataBridge>>>,
    pub config: TimelineConfig,
    pub theme: TimelineTheme,

    input: InputCache,
    selection: Option<TimeUnit>,
    hover: Option<TimeUnit>,
    drag: Option<DragMeta>,

    scroll_left: TimeUnit,
    /// Auto-follow: keep the window's right edge pinned to the newest data
    /// until the user pans away.
    sticky_scroll: bool,
    sticky_select: bool,
    last_sticky_select: Option<TimeUnit>,

    pub on_time_selected: Option<TimeHandler>,
    pub on_time_hover: Option<TimeHandler>,
    pub on_menu: Option<MenuSink>,
}

impl Default for TimelineView {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineView {
    pub fn new() -> Self {
        Self {
            bridge: None,
            config: TimelineConfig::default(),
            theme: TimelineTheme::default(),
            input: InputCache::new(),
            selection: None,
            hover: None,
            drag: None,
            scroll_left: TimeUnit::ZERO,
            sticky_scroll: true,
            sticky_select: false,
            last_sticky_select: None,
            on_time_selected: None,
            on_time_hover: None,
            on_menu: None,
        }
    }

    /// Attach (or with None, detach) the data provider.
    pub fn set_bridge(&mut self, bridge: Option<Arc<RwLock<dyn DataBridge>>>) {
        self.bridge = bridge;
    }

    pub fn bridged(&self) -> bool {
        self.bridge.is_some()
    }

    pub fn selection(&self) -> Option<TimeUnit> {
        self.selection
    }

    pub fn hover(&self) -> Option<TimeUnit> {
        self.hover
    }

    pub fn drag(&self) -> Option<&DragMeta> {
        self.drag.as_ref()
    }

    pub fn sticky_scroll(&self) -> bool {
        self.sticky_scroll
    }

    pub fn set_sticky_scroll(&mut self, on: bool) {
        self.sticky_scroll = on;
    }

    pub fn sticky_select(&self) -> bool {
        self.sticky_select
    }

    pub fn set_sticky_select(&mut self, on: bool) {
        self.sticky_select = on;
        if !on {
            self.last_sticky_select = None;
        }
    }

    pub fn visible_range(&self) -> TimeUnit {
        TimeUnit::new(self.config.visible_range_ms)
    }

    pub fn window(&self) -> VisibleWindow {
        VisibleWindow::new(self.scroll_left, self.scroll_left + self.visible_range())
    }

    /// Buffer one raw host event for the next cycle.
    pub fn handle_input(&mut self, event: InputEvent) {
        self.input.handle(event, self.config.scroll_rate_ms);
    }

    /// Runs one frame: recompute sticky state, render, resolve input.
    pub fn frame(&mut self, canvas: Rect, surface: &mut dyn DrawSurface) {
        let Some(bridge) = self.bridge.clone() else {
            surface.shadow_label(
                canvas,
                "No data bridge",
                Anchor::UpperLeft,
                self.theme.time_label_weight,
                self.theme.time_label,
            );
            return;
        };
        // Scope every read guard tightly: user callbacks (sticky select,
        // resolve) may write-lock the same bridge, which would deadlock
        // behind a guard still held on this thread.
        let (streams, right_bound) = {
            let bridge = bridge.read();
            let (_, right_bound) = bridge
                .time_range()
                .unwrap_or((TimeUnit::ZERO, TimeUnit::ZERO));
            (bridge.streams(), right_bound)
        };

        // Sticky select is edge-triggered: re-select only when the data's
        // upper bound has moved since last observed.
        if self.sticky_select {
            let moved = self.last_sticky_select.is_some_and(|t| t != right_bound);
            self.last_sticky_select = Some(right_bound);
            if moved {
                self.select_time(right_bound);
            }
        } else {
            self.last_sticky_select = None;
        }

        if self.sticky_scroll {
            self.scroll_left = right_bound - self.visible_range();
        }

        {
            let bridge = bridge.read();
            let params = RenderParams {
                canvas,
                window: self.window(),
                selection: self.selection,
                hover: self.hover,
                drag: self.drag.as_ref(),
                streams: &streams,
                theme: &self.theme,
                config: &self.config,
            };
            render_timeline(surface, &*bridge, &params);
        }

        self.resolve(canvas, &streams, &bridge, surface);
    }

    /// Drains pending intents in fixed order: scroll, select, hover, drag,
    /// jump-prev, jump-next, menu. Later steps see state mutated by earlier
    /// ones within the same cycle.
    fn resolve(
        &mut self,
        canvas: Rect,
        streams: &[Arc<StreamMeta>],
        bridge: &Arc<RwLock<dyn DataBridge>>,
        surface: &mut dyn DrawSurface,
    ) {
        let mut scrolled = None;
        self.input.process_scroll(|delta| scrolled = Some(delta));
        if let Some(delta) = scrolled {
            self.scroll_left += delta;
            // A user scroll always breaks auto-follow.
            self.sticky_scroll = false;
        }

        let window = self.window();
        let mut clicked = None;
        self.input.process_select(
            |pos| ViewController::position_to_time(canvas, window, pos),
            |time| clicked = Some(time),
        );
        if let Some(time) = clicked {
            self.sticky_select = false;
            self.last_sticky_select = None;
            if let Some(time) = time {
                self.select_time(time);
            }
        }

        let mut hovered = None;
        self.input.process_hover(
            |pos| ViewController::position_to_time(canvas, window, pos),
            |time| hovered = Some(time),
        );
        if let Some(time) = hovered {
            self.hover = time;
            if let Some(time) = time {
                if let Some(handler) = &self.on_time_hover {
                    guard("hover handler", handler(time));
                }
            }
        }

        self.resolve_drag(canvas, streams);
        if self.input.drag_end_pos.take().is_some() {
            self.commit_drag(streams);
        }

        self.resolve_jump(canvas, streams.len(), bridge, surface, false);
        self.resolve_jump(canvas, streams.len(), bridge, surface, true);

        self.resolve_menu(canvas, streams, surface);
    }

    fn select_time(&mut self, time: TimeUnit) {
        self.selection = Some(time);
        if let Some(handler) = &self.on_time_selected {
            guard("select handler", handler(time));
        }
    }

    fn resolve_drag(&mut self, canvas: Rect, streams: &[Arc<StreamMeta>]) {
        let Some(pos) = self.input.drag_pos.take() else {
            return;
        };
        let window = self.window();
        match &mut self.drag {
            None => {
                // First cycle of a drag: capture the grab point. A grab in a
                // bad place still creates the record, marked non-draggable,
                // so later frames don't keep starting new drags.
                let (grab_time, stream_index) = ViewController::position_to_stream_and_time(
                    canvas,
                    window,
                    streams.len(),
                    pos,
                );
                let draggable = grab_time.is_some()
                    && stream_index
                        .and_then(|i| streams.get(i))
                        .is_some_and(|s| s.draggable());
                self.drag = Some(DragMeta {
                    stream_index,
                    grab_time,
                    drag_amount: TimeUnit::ZERO,
                    draggable,
                });
            }
            Some(drag) if drag.draggable => {
                if let (Some(grab), Some(now)) = (
                    drag.grab_time,
                    ViewController::position_to_time(canvas, window, pos),
                ) {
                    drag.drag_amount = now - grab;
                }
            }
            Some(_) => {}
        }
    }

    /// Invokes the target stream's drag handler if it has one, then discards
    /// the drag unconditionally.
    fn commit_drag(&mut self, streams: &[Arc<StreamMeta>]) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        if let (Some(index), Some(grab)) = (drag.stream_index, drag.grab_time) {
            if let Some(handler) = streams.get(index).and_then(|s| s.on_dragged.as_ref()) {
                guard("drag handler", handler(grab, drag.drag_amount));
            }
        }
    }

    fn resolve_jump(
        &mut self,
        canvas: Rect,
        stream_count: usize,
        bridge: &Arc<RwLock<dyn DataBridge>>,
        surface: &mut dyn DrawSurface,
        forward: bool,
    ) {
        let slot = if forward {
            &mut self.input.jump_next_pos
        } else {
            &mut self.input.jump_prev_pos
        };
        let Some(pos) = slot.take() else {
            return;
        };

        let window = self.window();
        let (time, stream_index) =
            ViewController::position_to_stream_and_time(canvas, window, stream_count, pos);
        let found = time.zip(stream_index).and_then(|(time, index)| {
            let bridge = bridge.read();
            let item = if forward {
                bridge.nearest_at_or_after(index, time + TimeUnit::new(1))
            } else {
                bridge.nearest_at_or_before(index, time - TimeUnit::new(1))
            }?;
            Some((time, item.start))
        });

        match found {
            Some((clicked, item_time)) => {
                // Reposition so the found item lands under the click.
                self.scroll_left =
                    ViewController::jump_scroll_left(self.scroll_left, clicked, item_time);
            }
            None => {
                debug!(forward, "jump found no adjacent item");
                surface.beep();
            }
        }
    }

    fn resolve_menu(
        &mut self,
        canvas: Rect,
        streams: &[Arc<StreamMeta>],
        surface: &mut dyn DrawSurface,
    ) {
        let window = self.window();
        let mut target: Option<Option<StreamAndTime>> = None;
        self.input.process_menu(
            |pos| {
                let (time, index) = ViewController::position_to_stream_and_time(
                    canvas,
                    window,
                    streams.len(),
                    pos,
                );
                Some(StreamAndTime {
                    stream: index?,
                    time: time?,
                })
            },
            |hit| target = Some(hit),
        );
        let Some(hit) = target else {
            return;
        };
        let Some(hit) = hit else {
            debug!("menu click outside canvas");
            return;
        };

        let Some(provider) = streams
            .get(hit.stream)
            .and_then(|s| s.on_context_menu.as_ref())
        else {
            debug!(stream = hit.stream, "stream has no context menu");
            surface.beep();
            return;
        };

        let mut builder = MenuBuilder::new();
        guard("menu provider", provider(hit.time, &mut builder));
        if let Some(sink) = &self.on_menu {
            guard("menu sink", sink(builder));
        }
    }

    /// Scrollbar snapshot for the host widget, or None while unbridged.
    pub fn scrollbar_state(&self) -> Option<ScrollbarState> {
        let bridge = self.bridge.as_ref()?.read();
        let (min, max) = bridge
            .time_range()
            .unwrap_or((TimeUnit::ZERO, TimeUnit::ZERO));
        Some(ScrollbarState {
            value: ViewController::time_to_scrollbar(self.scroll_left),
            visible_size: ViewController::time_to_scrollbar(self.visible_range()),
            range_min: ViewController::time_to_scrollbar(min),
            range_max: ViewController::time_to_scrollbar(max),
        })
    }

    /// Applies a user change from the host scrollbar. Sticky scroll turns
    /// back on only when the new window still touches the data's right
    /// bound (snap-back), otherwise the manual pan disables it.
    pub fn apply_scrollbar(&mut self, value: f32) {
        self.scroll_left = ViewController::scrollbar_to_time(value);
        let right_bound = self
            .bridge
            .as_ref()
            .and_then(|b| b.read().time_range())
            .map(|(_, max)| max);
        self.sticky_scroll = right_bound.is_some_and(|right| {
            ViewController::touches_right_bound(self.scroll_left, self.visible_range(), right)
        });
    }
}
