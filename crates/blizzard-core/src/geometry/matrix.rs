use super::{Degrees, Point};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// 3x3 matrix (row-major). Used both for 3D rotations and for
/// homogeneous plane transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    pub rows: [[f64; 3]; 3],
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    pub fn rotation_x(angle: Degrees) -> Self {
        let (s, c) = angle.to_radians().sin_cos();
        Self {
            rows: [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]],
        }
    }

    pub fn rotation_y(angle: Degrees) -> Self {
        let (s, c) = angle.to_radians().sin_cos();
        Self {
            rows: [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]],
        }
    }

    /// In-plane rotation. With y pointing down, positive angles turn clockwise.
    pub fn rotation_z(angle: Degrees) -> Self {
        let (s, c) = angle.to_radians().sin_cos();
        Self {
            rows: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// `self * other`: the result applies `other` first, then `self`.
    pub fn mul(&self, other: &Mat3) -> Mat3 {
        let mut rows = [[0.0f64; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[i][k] * other.rows[k][j]).sum();
            }
        }
        Mat3 { rows }
    }

    pub fn transform(&self, v: Vec3) -> Vec3 {
        let [r0, r1, r2] = self.rows;
        Vec3::new(
            r0[0] * v.x + r0[1] * v.y + r0[2] * v.z,
            r1[0] * v.x + r1[1] * v.y + r1[2] * v.z,
            r2[0] * v.x + r2[1] * v.y + r2[2] * v.z,
        )
    }
}

/// Homogeneous transform of the drawing plane, perspective included.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Projection {
    pub matrix: Mat3,
}

impl Projection {
    pub const IDENTITY: Projection = Projection {
        matrix: Mat3::IDENTITY,
    };

    pub fn from_matrix(matrix: Mat3) -> Self {
        Self { matrix }
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self::from_matrix(Mat3 {
            rows: [[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]],
        })
    }

    pub fn rotation(angle: Degrees) -> Self {
        Self::from_matrix(Mat3::rotation_z(angle))
    }

    pub fn rotation_about(angle: Degrees, pivot: Point) -> Self {
        Self::rotation(angle).pivoted(pivot)
    }

    /// Conjugates the transform so that it operates around `pivot`
    /// instead of the origin.
    pub fn pivoted(&self, pivot: Point) -> Self {
        Self::translation(pivot.x, pivot.y)
            .then(self)
            .then(&Self::translation(-pivot.x, -pivot.y))
    }

    /// `self * other`: the result applies `other` first, then `self`.
    pub fn then(&self, other: &Projection) -> Projection {
        Self::from_matrix(self.matrix.mul(&other.matrix))
    }

    pub fn map(&self, point: Point) -> Point {
        let v = self.matrix.transform(Vec3::new(point.x, point.y, 1.0));
        if v.z.abs() <= f64::EPSILON {
            // point projected to infinity; keep it finite
            return Point::new(v.x, v.y);
        }
        Point::new(v.x / v.z, v.y / v.z)
    }

    pub fn is_affine(&self) -> bool {
        let [_, _, last] = self.matrix.rows;
        last == [0.0, 0.0, 1.0]
    }
}
