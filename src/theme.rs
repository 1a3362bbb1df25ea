use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color, components in [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineTheme {
    pub canvas_background: Rgba,
    pub stream_background: Rgba,
    pub block_notch: Rgba,
    pub selection: Rgba,
    pub hover: Rgba,
    pub drag_preview: Rgba,
    pub stream_label: Rgba,
    pub stream_label_weight: FontWeight,
    pub time_label: Rgba,
    pub time_label_weight: FontWeight,
    pub overview_window: Rgba,
}

impl Default for TimelineTheme {
    fn default() -> Self {
        Self {
            canvas_background: Rgba::opaque(0.1, 0.1, 0.1),
            stream_background: Rgba::opaque(0.3, 0.3, 0.3),
            block_notch: Rgba::opaque(0.3, 0.3, 0.3),
            selection: Rgba::new(1.0, 1.0, 1.0, 0.5),
            hover: Rgba::opaque(0.1, 0.1, 0.1),
            drag_preview: Rgba::new(0.9, 0.9, 0.9, 0.3),
            stream_label: Rgba::new(1.0, 1.0, 1.0, 0.8),
            stream_label_weight: FontWeight::Bold,
            time_label: Rgba::opaque(1.0, 1.0, 1.0),
            time_label_weight: FontWeight::Bold,
            overview_window: Rgba::opaque(1.0, 0.0, 0.0),
        }
    }
}
