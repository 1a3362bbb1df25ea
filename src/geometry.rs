use glam::Vec2;

/// Axis-aligned pixel rectangle used for canvas layout and draw calls.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn min_x(&self) -> f32 {
        self.origin.x
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.x
    }

    pub fn min_y(&self) -> f32 {
        self.origin.y
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.y
    }

    pub fn width(&self) -> f32 {
        self.size.x
    }

    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min_x()
            && point.x <= self.max_x()
            && point.y >= self.min_y()
            && point.y <= self.max_y()
    }

    /// Shrinks the rectangle by `amount` on every edge.
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            origin: self.origin + Vec2::splat(amount),
            size: (self.size - Vec2::splat(amount * 2.0)).max(Vec2::ZERO),
        }
    }
}

/// Inverse lerp: linear position of `value` between `min` and `max`.
/// No clamping; callers decide what to do with results outside [0, 1].
pub fn inverse_lerp(min: f32, max: f32, value: f32) -> f32 {
    let span = max - min;
    if span == 0.0 {
        return 0.0;
    }
    (value - min) / span
}

pub fn lerp(min: f32, max: f32, t: f32) -> f32 {
    min + (max - min) * t
}
