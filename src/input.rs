use crate::data_types::{StreamAndTime, TimeUnit};
use glam::Vec2;

/// Domain-level button identities delivered by the host event source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Select,
    Drag,
    Menu,
    JumpPrev,
    JumpNext,
}

/// Raw pointer event as delivered by the host, in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerMove(Vec2),
    PointerEnter(Vec2),
    PointerLeave,
    Scroll { position: Vec2, delta: Vec2 },
    ButtonDown { position: Vec2, button: MouseButton },
    ButtonDrag { position: Vec2, button: MouseButton },
    ButtonUp { position: Vec2, button: MouseButton },
}

/// Buffers raw events into at most one pending value per intent kind.
/// Newer events of the same kind overwrite older ones; only the latest
/// matters per processing cycle. This is deliberate: several behaviors
/// (scroll-while-holding re-select among them) rely on last-writer-wins,
/// so do not turn this into a queue.
#[derive(Debug, Default)]
pub struct InputCache {
    /// Popped by the resolver once acted on.
    select_click_pos: Option<Vec2>,
    /// Remains set while the select button is held, so other handling can
    /// see the mouse is still down.
    select_down_pos: Option<Vec2>,
    hover_pos: Option<Vec2>,
    pointer_left: bool,

    pub drag_pos: Option<Vec2>,
    pub drag_end_pos: Option<Vec2>,

    menu_pos: Option<Vec2>,
    pub jump_prev_pos: Option<Vec2>,
    pub jump_next_pos: Option<Vec2>,

    pub scroll_delta: Option<TimeUnit>,
}

impl InputCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&mut self, event: InputEvent, scroll_rate_ms: i64) {
        match event {
            InputEvent::PointerMove(position) | InputEvent::PointerEnter(position) => {
                self.hover_pos = Some(position);
                self.pointer_left = false;
            }
            InputEvent::PointerLeave => {
                self.hover_pos = None;
                self.pointer_left = true;
            }
            InputEvent::Scroll { delta, .. } => {
                self.scroll_delta = Some(TimeUnit::new((scroll_rate_ms as f32 * delta.y) as i64));
                // As time shifts under a held select button, treat it like a
                // re-click so the user can hold the selector and scroll.
                if let Some(down) = self.select_down_pos {
                    self.select_click_pos = Some(down);
                    self.hover_pos = Some(down);
                }
            }
            InputEvent::ButtonDown { position, button } => match button {
                MouseButton::Select => {
                    self.select_click_pos = Some(position);
                    self.select_down_pos = Some(position);
                }
                MouseButton::Drag => self.drag_pos = Some(position),
                MouseButton::Menu => self.menu_pos = Some(position),
                MouseButton::JumpPrev => self.jump_prev_pos = Some(position),
                MouseButton::JumpNext => self.jump_next_pos = Some(position),
            },
            // Drag events only track the select and drag intents. Menu and
            // jump fire on the press alone; a held button must not re-arm
            // them every cycle.
            InputEvent::ButtonDrag { position, button } => match button {
                MouseButton::Select => {
                    self.select_click_pos = Some(position);
                    self.select_down_pos = Some(position);
                }
                MouseButton::Drag => self.drag_pos = Some(position),
                MouseButton::Menu | MouseButton::JumpPrev | MouseButton::JumpNext => {}
            },
            InputEvent::ButtonUp { position, button } => {
                self.hover_pos = Some(position);
                self.pointer_left = false;
                match button {
                    MouseButton::Select => self.select_down_pos = None,
                    MouseButton::Drag => self.drag_end_pos = Some(position),
                    _ => {}
                }
            }
        }
    }

    pub fn process_scroll(&mut self, on_scroll: impl FnOnce(TimeUnit)) {
        if let Some(delta) = self.scroll_delta.take() {
            on_scroll(delta);
        }
    }

    /// Consumes the pending click whether or not it maps to a valid time.
    pub fn process_select(
        &mut self,
        position_to_time: impl Fn(Vec2) -> Option<TimeUnit>,
        on_click: impl FnOnce(Option<TimeUnit>),
    ) {
        if let Some(pos) = self.select_click_pos.take() {
            on_click(position_to_time(pos));
        }
    }

    /// Hover is never consumed; it refreshes every cycle the pointer stays
    /// inside. A pointer-leave reports one explicit `None`.
    pub fn process_hover(
        &mut self,
        position_to_time: impl Fn(Vec2) -> Option<TimeUnit>,
        on_hover: impl FnOnce(Option<TimeUnit>),
    ) {
        if self.pointer_left {
            self.pointer_left = false;
            on_hover(None);
        } else if let Some(pos) = self.hover_pos {
            on_hover(position_to_time(pos));
        }
    }

    pub fn process_menu(
        &mut self,
        position_to_target: impl Fn(Vec2) -> Option<StreamAndTime>,
        on_menu: impl FnOnce(Option<StreamAndTime>),
    ) {
        if let Some(pos) = self.menu_pos.take() {
            on_menu(position_to_target(pos));
        }
    }
}
