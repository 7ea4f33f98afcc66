use crate::geometry::{AxisRange, Degrees};
use std::f64::consts::PI;
use std::time::Duration;
use strum::Display;

pub mod driver;
pub mod set;

pub use driver::{AnimationDriver, AnimationHandle, FrameDriver};
pub use set::{AnimationSet, Track, TrackKind};

/// One revolution of the spin, and one cycle of the tilt.
pub const DURATION: Duration = Duration::from_millis(900);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// In-plane angles covered over one cycle.
    pub fn sweep(&self) -> AxisRange {
        match self {
            Self::Clockwise => AxisRange::new(Degrees::ZERO, Degrees::FULL_TURN),
            Self::CounterClockwise => AxisRange::new(Degrees::FULL_TURN, Degrees::ZERO),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Infinite,
    /// Total number of cycles to run.
    Count(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    AccelerateDecelerate,
}

impl Easing {
    pub fn apply(&self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub duration: Duration,
    pub repeat: Repeat,
    pub easing: Easing,
}

impl Timing {
    pub fn infinite(duration: Duration) -> Self {
        Self {
            duration,
            repeat: Repeat::Infinite,
            easing: Easing::Linear,
        }
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        match self.repeat {
            Repeat::Infinite => false,
            Repeat::Count(runs) => elapsed >= self.duration * runs,
        }
    }

    /// Eased progress through the current cycle, or `None` once the last
    /// cycle is over. A zero duration jumps straight to the end.
    pub fn fraction_at(&self, elapsed: Duration) -> Option<f64> {
        if self.duration.is_zero() {
            let done = matches!(self.repeat, Repeat::Count(_)) && !elapsed.is_zero();
            return (!done).then(|| self.easing.apply(1.0));
        }
        if self.is_finished(elapsed) {
            return None;
        }

        let (elapsed, cycle) = (elapsed.as_nanos(), self.duration.as_nanos());
        let t = (elapsed % cycle) as f64 / cycle as f64;
        Some(self.easing.apply(t))
    }
}
