use super::matrix::{Mat3, Projection};
use super::{Degrees, Point};

/// Distance between the camera and the drawing plane: 8 inches at 72 units
/// per inch.
pub const CAMERA_DISTANCE: f64 = 576.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisRange {
    pub from: Degrees,
    pub to: Degrees,
}

impl AxisRange {
    pub fn new(from: Degrees, to: Degrees) -> Self {
        Self { from, to }
    }

    pub fn fixed(angle: Degrees) -> Self {
        Self::new(angle, angle)
    }

    pub fn at(&self, fraction: f64) -> Degrees {
        Degrees::lerp(self.from, self.to, fraction)
    }
}

/// Rotation of the drawing plane around the X, Y and Z axes, seen through a
/// perspective camera. Each axis interpolates independently over the
/// animation interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotate3d {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
    pub camera_distance: f64,
}

impl Rotate3d {
    pub fn new(
        from_x: Degrees,
        to_x: Degrees,
        from_y: Degrees,
        to_y: Degrees,
        from_z: Degrees,
        to_z: Degrees,
    ) -> Self {
        Self {
            x: AxisRange::new(from_x, to_x),
            y: AxisRange::new(from_y, to_y),
            z: AxisRange::new(from_z, to_z),
            camera_distance: CAMERA_DISTANCE,
        }
    }

    pub fn fixed(x: Degrees, y: Degrees, z: Degrees) -> Self {
        Self::new(x, x, y, y, z, z)
    }

    pub fn angles_at(&self, fraction: f64) -> (Degrees, Degrees, Degrees) {
        (self.x.at(fraction), self.y.at(fraction), self.z.at(fraction))
    }

    /// Rotation applied to points: about Z first, then Y, then X.
    pub fn rotation_at(&self, fraction: f64) -> Mat3 {
        let (ax, ay, az) = self.angles_at(fraction);
        Mat3::rotation_x(ax)
            .mul(&Mat3::rotation_y(ay))
            .mul(&Mat3::rotation_z(az))
    }

    /// Plane transform for the given fraction of the interval, pivoted on
    /// `pivot` so the pivot maps onto itself.
    pub fn projection_at(&self, fraction: f64, pivot: Point) -> Projection {
        let r = self.rotation_at(fraction).rows;
        let d = self.camera_distance;

        // A plane point (x, y, 0) lands at R·(x, y, 0); the camera divides by
        // (d + z) / d. Only the first two columns of R matter.
        let camera = Mat3 {
            rows: [
                [r[0][0], r[0][1], 0.0],
                [r[1][0], r[1][1], 0.0],
                [r[2][0] / d, r[2][1] / d, 1.0],
            ],
        };
        Projection::from_matrix(camera).pivoted(pivot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAN: Degrees = Degrees::new(70.0);

    #[test]
    fn test_zero_angles_are_identity() {
        let rot = Rotate3d::fixed(Degrees::ZERO, Degrees::ZERO, Degrees::ZERO);
        let p = rot.projection_at(0.3, Point::new(20.0, 20.0));
        for q in [Point::new(0.0, 0.0), Point::new(13.0, -7.0)] {
            assert!(p.map(q).distance(q) < 1e-9);
        }
    }

    #[test]
    fn test_pivot_is_fixed() {
        let pivot = Point::new(100.0, 75.0);
        let rot = Rotate3d::fixed(LEAN, Degrees::new(120.0), Degrees::ZERO);
        assert!(rot.projection_at(0.0, pivot).map(pivot).distance(pivot) < 1e-9);
    }

    #[test]
    fn test_tilt_foreshortens_vertical_axis() {
        let rot = Rotate3d::fixed(LEAN, Degrees::ZERO, Degrees::ZERO);
        let p = rot.projection_at(0.0, Point::ORIGIN);

        let top = p.map(Point::new(0.0, 40.0));
        let flat = 40.0 * LEAN.to_radians().cos();
        assert!(top.x.abs() < 1e-9);
        assert!(top.y.abs() > 0.0);
        assert!(top.y.abs() < flat + 1.0, "{} not foreshortened", top.y);

        // the tilt axis itself is untouched
        let side = p.map(Point::new(40.0, 0.0));
        assert!(side.distance(Point::new(40.0, 0.0)) < 1e-9);
    }

    #[test]
    fn test_angles_interpolate_linearly() {
        let rot = Rotate3d::new(
            Degrees::ZERO,
            Degrees::new(90.0),
            Degrees::new(120.0),
            Degrees::new(120.0),
            Degrees::new(10.0),
            Degrees::new(-10.0),
        );
        let (x, y, z) = rot.angles_at(0.5);
        assert_eq!(x, Degrees::new(45.0));
        assert_eq!(y, Degrees::new(120.0));
        assert_eq!(z, Degrees::ZERO);
    }

    #[test]
    fn test_perspective_is_not_affine() {
        let rot = Rotate3d::fixed(LEAN, Degrees::new(60.0), Degrees::ZERO);
        assert!(!rot.projection_at(0.0, Point::ORIGIN).is_affine());
    }
}
