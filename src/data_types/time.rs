use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Opaque millisecond timestamp. Typed so the unit can change later without
/// touching every call site.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeUnit(pub i64);

impl TimeUnit {
    pub const ZERO: TimeUnit = TimeUnit(0);

    pub fn new(ms: i64) -> Self {
        Self(ms)
    }

    pub fn millis(&self) -> i64 {
        self.0
    }

    /// Human-readable `[HH:][MM:]SS.mmm ms` label. Hour and minute segments
    /// are omitted while zero. `with_raw_ms` appends the raw value, e.g.
    /// `02.500 ms (2500)`.
    pub fn label(&self, with_raw_ms: bool) -> String {
        let ms = self.0.rem_euclid(1000);
        let secs = (self.0 / 1000) % 60;
        let mins = (self.0 / 1000 / 60) % 60;
        let hours = self.0 / 1000 / 60 / 60;

        let mut out = String::new();
        if hours > 0 {
            out.push_str(&format!("{:02}:", hours));
        }
        if mins > 0 || hours > 0 {
            out.push_str(&format!("{:02}:", mins));
        }
        out.push_str(&format!("{:02}.{:03} ms", secs, ms));

        if with_raw_ms {
            out.push_str(&format!(" ({})", self.0));
        }
        out
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label(false))
    }
}

impl Add for TimeUnit {
    type Output = TimeUnit;
    fn add(self, rhs: TimeUnit) -> TimeUnit {
        TimeUnit(self.0 + rhs.0)
    }
}

impl AddAssign for TimeUnit {
    fn add_assign(&mut self, rhs: TimeUnit) {
        self.0 += rhs.0;
    }
}

impl Sub for TimeUnit {
    type Output = TimeUnit;
    fn sub(self, rhs: TimeUnit) -> TimeUnit {
        TimeUnit(self.0 - rhs.0)
    }
}
