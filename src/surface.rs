use crate::geometry::Rect;
use crate::theme::{FontWeight, Rgba};

/// Where a label sits inside its rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    UpperLeft,
    UpperRight,
    LowerLeft,
}

/// Cursor shape requested for a region of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorHint {
    Default,
    Pan,
}

/// Injected host drawing capability. The renderer only ever talks to this
/// trait, so the same logic runs headless in tests and under any toolkit.
pub trait DrawSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn shadow_label(&mut self, rect: Rect, text: &str, anchor: Anchor, weight: FontWeight, color: Rgba);
    fn cursor_hint(&mut self, rect: Rect, hint: CursorHint);

    /// Non-fatal audible diagnostic, e.g. for a jump that found nothing.
    fn beep(&mut self) {}
}

/// One captured primitive call, for asserting on render output.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Rect {
        rect: Rect,
        color: Rgba,
    },
    Label {
        rect: Rect,
        text: String,
        anchor: Anchor,
        weight: FontWeight,
        color: Rgba,
    },
    Cursor {
        rect: Rect,
        hint: CursorHint,
    },
    Beep,
}

/// Surface that records calls instead of painting, used by tests and hosts
/// that build their own draw list.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Rect { .. }))
            .count()
    }

    pub fn rects_with_color(&self, color: Rgba) -> Vec<Rect> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Rect { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Label { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn beeped(&self) -> bool {
        self.calls.iter().any(|c| matches!(c, DrawCall::Beep))
    }
}

impl DrawSurface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.calls.push(DrawCall::Rect { rect, color });
    }

    fn shadow_label(&mut self, rect: Rect, text: &str, anchor: Anchor, weight: FontWeight, color: Rgba) {
        self.calls.push(DrawCall::Label {
            rect,
            text: text.to_string(),
            anchor,
            weight,
            color,
        });
    }

    fn cursor_hint(&mut self, rect: Rect, hint: CursorHint) {
        self.calls.push(DrawCall::Cursor { rect, hint });
    }

    fn beep(&mut self) {
        self.calls.push(DrawCall::Beep);
    }
}
