use super::AnimationSet;
use crate::geometry::{Projection, Size};
use derive_more::{Display, From, Into};
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
pub struct AnimationHandle(u64);

/// Scheduler that animations are handed to. The host ticks it once per frame.
pub trait AnimationDriver {
    fn schedule_repeating(&mut self, animation: AnimationSet) -> AnimationHandle;

    /// Returns `false` if the handle was not running.
    fn cancel(&mut self, handle: AnimationHandle) -> bool;

    /// Current transform of a running animation on a surface of `size`.
    fn sample(&self, handle: AnimationHandle, size: Size) -> Option<Projection>;

    fn advance(&mut self, now: Duration);

    fn active(&self) -> usize;
}

#[derive(Debug)]
struct Running {
    animation: AnimationSet,
    started_at: Option<Duration>,
}

impl Running {
    fn elapsed(&self, now: Duration) -> Duration {
        self.started_at
            .map(|start| now.saturating_sub(start))
            .unwrap_or_default()
    }
}

/// Driver stepped by frame clock timestamps. Animations start on the first
/// frame after they were scheduled.
#[derive(Debug, Default)]
pub struct FrameDriver {
    now: Duration,
    next_handle: u64,
    running: BTreeMap<AnimationHandle, Running>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self, handle: AnimationHandle) -> Option<Duration> {
        self.running.get(&handle).map(|r| r.elapsed(self.now))
    }
}

impl AnimationDriver for FrameDriver {
    fn schedule_repeating(&mut self, animation: AnimationSet) -> AnimationHandle {
        let handle = AnimationHandle(self.next_handle);
        self.next_handle += 1;
        self.running.insert(
            handle,
            Running {
                animation,
                started_at: None,
            },
        );
        log::trace!("Scheduled animation {}", handle);
        handle
    }

    fn cancel(&mut self, handle: AnimationHandle) -> bool {
        let cancelled = self.running.remove(&handle).is_some();
        if cancelled {
            log::trace!("Cancelled animation {}", handle);
        }
        cancelled
    }

    fn sample(&self, handle: AnimationHandle, size: Size) -> Option<Projection> {
        self.running
            .get(&handle)
            .map(|r| r.animation.transform_at(r.elapsed(self.now), size))
    }

    fn advance(&mut self, now: Duration) {
        self.now = now;
        for running in self.running.values_mut() {
            running.started_at.get_or_insert(now);
        }
        self.running.retain(|handle, r| {
            let done = r.animation.is_finished(r.elapsed(now));
            if done {
                log::trace!("Animation {} finished", handle);
            }
            !done
        });
    }

    fn active(&self) -> usize {
        self.running.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::{DURATION, Direction, Repeat, Timing, Track};

    fn spin(repeat: Repeat) -> AnimationSet {
        AnimationSet::new().with(Track::spin(
            Direction::Clockwise,
            Timing::infinite(DURATION).with_repeat(repeat),
        ))
    }

    #[test]
    fn test_schedule_and_cancel() {
        let mut driver = FrameDriver::new();
        let a = driver.schedule_repeating(spin(Repeat::Infinite));
        let b = driver.schedule_repeating(spin(Repeat::Infinite));
        assert_ne!(a, b);
        assert_eq!(driver.active(), 2);

        assert!(driver.cancel(a));
        assert!(!driver.cancel(a));
        assert_eq!(driver.active(), 1);
        assert!(driver.sample(a, Size::default()).is_none());
        assert!(driver.sample(b, Size::default()).is_some());
    }

    #[test]
    fn test_starts_on_first_frame() {
        let mut driver = FrameDriver::new();
        driver.advance(Duration::from_secs(100));

        let handle = driver.schedule_repeating(spin(Repeat::Infinite));
        assert_eq!(driver.elapsed(handle), Some(Duration::ZERO));

        driver.advance(Duration::from_secs(200));
        assert_eq!(driver.elapsed(handle), Some(Duration::ZERO));

        driver.advance(Duration::from_secs(200) + Duration::from_millis(450));
        assert_eq!(driver.elapsed(handle), Some(Duration::from_millis(450)));
    }

    #[test]
    fn test_finite_animations_are_pruned() {
        let mut driver = FrameDriver::new();
        let once = driver.schedule_repeating(spin(Repeat::Count(1)));
        let forever = driver.schedule_repeating(spin(Repeat::Infinite));

        driver.advance(Duration::ZERO);
        driver.advance(Duration::from_millis(899));
        assert_eq!(driver.active(), 2);

        driver.advance(DURATION * 50);
        assert_eq!(driver.active(), 1);
        assert!(driver.sample(once, Size::default()).is_none());
        assert!(driver.sample(forever, Size::default()).is_some());
    }
}
