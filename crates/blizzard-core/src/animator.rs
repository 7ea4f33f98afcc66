use crate::anim::{
    AnimationDriver, AnimationHandle, AnimationSet, DURATION, Direction, Timing, Track,
};
use crate::geometry::{Degrees, Rotate3d};
use crate::ring::Ring;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingAnimationSpec {
    pub tilt: Degrees,
    pub axis: Degrees,
    pub direction: Direction,
    pub offset: Degrees,
}

impl RingAnimationSpec {
    /// Tilt around X by `tilt`, around Y by `axis`, constant over the cycle.
    pub fn tilt_rotation(&self) -> Rotate3d {
        Rotate3d::new(
            self.tilt,
            self.tilt,
            self.axis,
            self.axis,
            Degrees::ZERO,
            Degrees::ZERO,
        )
    }

    pub fn animation(&self) -> AnimationSet {
        let timing = Timing::infinite(DURATION);
        AnimationSet::new()
            .with(Track::spin(self.direction, timing))
            .with(Track::tilt(self.tilt_rotation(), timing))
    }
}

/// Applies the starting offset to `ring` and schedules its spin and tilt.
pub fn rotate<D: AnimationDriver>(
    driver: &mut D,
    ring: &mut Ring,
    spec: &RingAnimationSpec,
) -> AnimationHandle {
    if spec.offset != Degrees::ZERO {
        ring.set_rotation(spec.offset);
    }

    let handle = driver.schedule_repeating(spec.animation());
    ring.set_animation(Some(handle));

    log::debug!(
        "Ring animation {} started: tilt {}, axis {}, {}, offset {}",
        handle,
        spec.tilt,
        spec.axis,
        spec.direction,
        spec.offset
    );
    handle
}
