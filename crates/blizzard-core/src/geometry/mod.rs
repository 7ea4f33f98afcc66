use derive_more::{Display, From, Into};

pub mod annulus;
pub mod matrix;
pub mod rotate3d;

pub use annulus::{AnnulusGeometry, Circle, Contour};
pub use matrix::{Mat3, Projection, Vec3};
pub use rotate3d::{AxisRange, CAMERA_DISTANCE, Rotate3d};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Point at a fraction of the surface, `(0.5, 0.5)` being the center.
    pub fn relative(&self, fx: f64, fy: f64) -> Point {
        Point::new(self.width * fx, self.height * fy)
    }

    pub fn center(&self) -> Point {
        self.relative(0.5, 0.5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Display, From, Into)]
#[display("{_0}°")]
pub struct Degrees(f64);

crate::impl_angle_newtype!(Degrees);

impl Degrees {
    pub const ZERO: Degrees = Degrees(0.0);
    pub const FULL_TURN: Degrees = Degrees(360.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_center() {
        assert_eq!(Size::new(120.0, 80.0).center(), Point::new(60.0, 40.0));
        assert_eq!(Size::default().center(), Point::ORIGIN);
    }

    #[test]
    fn test_degrees_lerp() {
        let half = Degrees::lerp(Degrees::ZERO, Degrees::FULL_TURN, 0.5);
        assert_eq!(half, Degrees::new(180.0));

        let back = Degrees::lerp(Degrees::FULL_TURN, Degrees::ZERO, 0.25);
        assert_eq!(back, Degrees::new(270.0));
    }

    #[test]
    fn test_degrees_display() {
        assert_eq!(Degrees::new(70.0).to_string(), "70°");
    }
}
