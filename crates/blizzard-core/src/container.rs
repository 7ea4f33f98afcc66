use crate::anim::{AnimationDriver, Direction};
use crate::animator::{self, RingAnimationSpec};
use crate::geometry::{Contour, Degrees, Projection};
use crate::ring::Ring;
use std::time::Duration;
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

pub const LEAN_ANGLE: Degrees = Degrees::new(70.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, Display)]
pub enum RingId {
    A,
    B,
    C,
}

impl RingId {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn spec(&self) -> RingAnimationSpec {
        let (axis, direction, offset) = match self {
            Self::A => (0.0, Direction::Clockwise, 0.0),
            Self::B => (120.0, Direction::CounterClockwise, 70.0),
            Self::C => (60.0, Direction::Clockwise, 150.0),
        };
        RingAnimationSpec {
            tilt: LEAN_ANGLE,
            axis: Degrees::new(axis),
            direction,
            offset: Degrees::new(offset),
        }
    }
}

/// Owns the three rings and runs their animations on `driver`.
#[derive(Debug)]
pub struct BlizzardContainer<D> {
    driver: D,
    rings: [Ring; RingId::COUNT],
    children: Vec<RingId>,
}

impl<D: AnimationDriver> BlizzardContainer<D> {
    pub fn new(driver: D, density: f64) -> Self {
        Self {
            driver,
            rings: std::array::from_fn(|_| Ring::new(density)),
            children: Vec::with_capacity(RingId::COUNT),
        }
    }

    /// Attaches the rings on first use, then restarts every animation from
    /// scratch.
    pub fn show(&mut self) {
        if self.children.is_empty() {
            self.children.extend(RingId::iter());
        }

        self.stop();
        for id in RingId::iter() {
            animator::rotate(&mut self.driver, &mut self.rings[id.as_index()], &id.spec());
        }
        log::debug!("Showing {} rings", self.children.len());
    }

    /// Cancels all running ring animations. Rings stay attached.
    pub fn stop(&mut self) {
        for ring in &mut self.rings {
            if let Some(handle) = ring.animation() {
                self.driver.cancel(handle);
            }
            ring.set_animation(None);
            ring.clear_rotation();
        }
    }

    pub fn is_running(&self) -> bool {
        self.rings.iter().any(|r| r.animation().is_some())
    }

    pub fn children(&self) -> &[RingId] {
        &self.children
    }

    pub fn ring(&self, id: RingId) -> &Ring {
        &self.rings[id.as_index()]
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        for ring in &mut self.rings {
            ring.on_size_changed(width, height);
        }
    }

    pub fn set_density(&mut self, density: f64) {
        for ring in &mut self.rings {
            ring.set_density(density);
        }
    }

    pub fn advance(&mut self, now: Duration) {
        self.driver.advance(now);
    }

    /// Contours of every attached ring for the current frame, in attach
    /// order.
    pub fn frames(&self) -> Vec<(RingId, Vec<Contour>)> {
        self.children
            .iter()
            .map(|&id| {
                let ring = self.ring(id);
                let animation = ring
                    .animation()
                    .and_then(|handle| self.driver.sample(handle, ring.size()))
                    .unwrap_or(Projection::IDENTITY);
                (id, ring.frame(&animation))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::FrameDriver;
    use crate::geometry::{Point, Rotate3d, Size};

    fn container() -> BlizzardContainer<FrameDriver> {
        BlizzardContainer::new(FrameDriver::new(), 1.0)
    }

    #[test]
    fn test_fresh_container_has_no_children() {
        let c = container();
        assert!(c.children().is_empty());
        assert!(!c.is_running());
        assert!(c.frames().is_empty());
    }

    #[test]
    fn test_show_twice_attaches_three_rings() {
        let mut c = container();
        c.show();
        c.show();
        assert_eq!(c.children(), &[RingId::A, RingId::B, RingId::C]);
    }

    #[test]
    fn test_restart_does_not_stack_animations() {
        let mut c = container();
        for _ in 0..5 {
            c.show();
            assert_eq!(c.driver().active(), 3);
        }

        c.stop();
        assert_eq!(c.driver().active(), 0);
        assert!(!c.is_running());
        assert_eq!(c.children().len(), 3);

        c.show();
        assert_eq!(c.driver().active(), 3);
    }

    #[test]
    fn test_ring_specs() {
        let specs: Vec<_> = RingId::iter().map(|id| id.spec()).collect();

        assert!(specs.iter().all(|s| s.tilt == Degrees::new(70.0)));
        assert_eq!(
            specs.iter().map(|s| s.axis.value()).collect::<Vec<_>>(),
            vec![0.0, 120.0, 60.0]
        );
        assert_eq!(
            specs.iter().map(|s| s.direction).collect::<Vec<_>>(),
            vec![
                Direction::Clockwise,
                Direction::CounterClockwise,
                Direction::Clockwise
            ]
        );
        assert_eq!(
            specs.iter().map(|s| s.offset.value()).collect::<Vec<_>>(),
            vec![0.0, 70.0, 150.0]
        );
    }

    #[test]
    fn test_show_applies_offsets() {
        let mut c = container();
        c.show();
        assert_eq!(c.ring(RingId::A).rotation(), None);
        assert_eq!(c.ring(RingId::B).rotation(), Some(Degrees::new(70.0)));
        assert_eq!(c.ring(RingId::C).rotation(), Some(Degrees::new(150.0)));
    }

    #[test]
    fn test_show_schedules_each_ring_spec() {
        let mut c = container();
        c.resize(200.0, 200.0);
        c.show();
        c.advance(Duration::ZERO);
        // a quarter turn
        let elapsed = Duration::from_millis(225);
        c.advance(elapsed);

        let size = Size::new(200.0, 200.0);
        let center = size.center();
        let points = [
            Point::new(150.0, 100.0),
            Point::new(100.0, 60.0),
            Point::new(130.0, 140.0),
        ];
        let close = |a: Point, b: Point| a.distance(b) < 1e-9;

        for (id, axis, spun) in [
            (RingId::A, 0.0, Point::new(100.0, 150.0)),
            (RingId::B, 120.0, Point::new(100.0, 50.0)),
            (RingId::C, 60.0, Point::new(100.0, 150.0)),
        ] {
            let handle = c.ring(id).animation().unwrap();
            let sampled = c.driver().sample(handle, size).unwrap();

            let expected = id.spec().animation().transform_at(elapsed, size);
            for p in points {
                assert!(close(sampled.map(p), expected.map(p)), "ring {}", id);
            }

            // spin a quarter turn in the ring's direction, then lean
            let tilt = Rotate3d::fixed(LEAN_ANGLE, Degrees::new(axis), Degrees::ZERO)
                .projection_at(0.0, center);
            assert!(
                close(sampled.map(Point::new(150.0, 100.0)), tilt.map(spun)),
                "ring {}",
                id
            );
        }
    }

    #[test]
    fn test_frames_follow_surface() {
        let mut c = container();
        c.show();
        c.resize(200.0, 200.0);
        c.advance(Duration::from_millis(10));
        c.advance(Duration::from_millis(460));

        let frames = c.frames();
        assert_eq!(
            frames.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            vec![RingId::A, RingId::B, RingId::C]
        );
        for (_, contours) in &frames {
            assert_eq!(contours.len(), 1);
            assert!(contours[0].is_closed());
            // perspective keeps everything near the 40 dp ring
            assert!(contours[0].points.iter().all(|p| {
                (p.x - 100.0).abs() < 50.0 && (p.y - 100.0).abs() < 50.0
            }));
        }
    }
}
