use super::Point;
use super::matrix::Projection;
use std::f64::consts::{PI, TAU};

/// Polyline segments used for a full turn when flattening arcs.
pub const SEGMENTS_PER_TURN: usize = 96;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn point_at(&self, angle: f64) -> Point {
        let (s, c) = angle.sin_cos();
        self.center.offset(self.radius * c, self.radius * s)
    }

    /// Area of the lens shared by both circles.
    pub fn intersection_area(&self, other: &Circle) -> f64 {
        let d = self.center.distance(other.center);
        let (r0, r1) = (self.radius, other.radius);

        if d >= r0 + r1 {
            return 0.0;
        }
        if d <= (r0 - r1).abs() {
            return PI * r0.min(r1).powi(2);
        }

        let a0 = ((d * d + r0 * r0 - r1 * r1) / (2.0 * d * r0)).clamp(-1.0, 1.0).acos();
        let a1 = ((d * d + r1 * r1 - r0 * r0) / (2.0 * d * r1)).clamp(-1.0, 1.0).acos();
        let kite = ((-d + r0 + r1) * (d + r0 - r1) * (d - r0 + r1) * (d + r0 + r1)).sqrt();

        r0 * r0 * a0 + r1 * r1 * a1 - 0.5 * kite
    }

    fn arc(&self, start: f64, sweep: f64, out: &mut Vec<Point>) {
        let steps = ((sweep.abs() / TAU) * SEGMENTS_PER_TURN as f64).ceil().max(1.0) as usize;
        out.extend((0..=steps).map(|i| self.point_at(start + sweep * i as f64 / steps as f64)));
    }
}

/// A closed polygon. The last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    fn circle(circle: &Circle) -> Self {
        let mut points = Vec::with_capacity(SEGMENTS_PER_TURN + 1);
        circle.arc(0.0, TAU, &mut points);
        points.pop(); // closing point duplicates the first
        Self::new(points)
    }

    pub fn is_closed(&self) -> bool {
        self.points.len() >= 3 && self.signed_area().abs() > f64::EPSILON
    }

    /// Shoelace area; positive when the points turn clockwise on a y-down
    /// surface.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| {
                let (a, b) = (self.points[i], self.points[(i + 1) % n]);
                a.x * b.y - b.x * a.y
            })
            .sum::<f64>()
            / 2.0
    }

    pub fn transformed(&self, projection: &Projection) -> Self {
        Self::new(self.points.iter().map(|&p| projection.map(p)).collect())
    }
}

/// Outer circle minus inner circle, as contours to fill with the even-odd
/// rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnnulusGeometry {
    /// The inner circle covers the outer one.
    Empty,
    /// The circles do not overlap.
    Disc(Circle),
    /// The inner circle lies fully inside the outer one.
    Ring { outer: Circle, inner: Circle },
    /// Partial overlap: a single crescent bounded by one arc of each circle.
    Crescent { outer: Circle, inner: Circle },
}

impl AnnulusGeometry {
    /// Concentric-ish ring: the outer circle at the origin, the inner one
    /// shifted right by `padding`.
    pub fn new(outer_radius: f64, inner_radius: f64, padding: f64) -> Self {
        Self::difference(
            Circle::new(Point::ORIGIN, outer_radius),
            Circle::new(Point::new(padding, 0.0), inner_radius),
        )
    }

    pub fn difference(outer: Circle, inner: Circle) -> Self {
        let d = outer.center.distance(inner.center);
        let (big, small) = (outer.radius, inner.radius);

        if big <= 0.0 || d + big <= small {
            Self::Empty
        } else if small <= 0.0 || d >= big + small {
            Self::Disc(outer)
        } else if d + small <= big {
            Self::Ring { outer, inner }
        } else {
            Self::Crescent { outer, inner }
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Self::Empty => 0.0,
            Self::Disc(outer) => outer.area(),
            Self::Ring { outer, inner } | Self::Crescent { outer, inner } => {
                outer.area() - outer.intersection_area(inner)
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn contours(&self) -> Vec<Contour> {
        match self {
            Self::Empty => Vec::new(),
            Self::Disc(outer) => vec![Contour::circle(outer)],
            Self::Ring { outer, inner } => vec![Contour::circle(outer), Contour::circle(inner)],
            Self::Crescent { outer, inner } => vec![crescent(outer, inner)],
        }
    }
}

fn crescent(outer: &Circle, inner: &Circle) -> Contour {
    let d = outer.center.distance(inner.center);
    let (big, small) = (outer.radius, inner.radius);
    let base = (inner.center.y - outer.center.y).atan2(inner.center.x - outer.center.x);

    // half-angles subtended by the intersection chord, seen from each center
    let alpha = ((d * d + big * big - small * small) / (2.0 * d * big))
        .clamp(-1.0, 1.0)
        .acos();
    let beta = ((d * d + small * small - big * big) / (2.0 * d * small))
        .clamp(-1.0, 1.0)
        .acos();

    let mut points = Vec::with_capacity(2 * SEGMENTS_PER_TURN);
    // far side of the outer circle, away from the inner center
    outer.arc(base + alpha, TAU - 2.0 * alpha, &mut points);
    points.pop();
    // back along the inner circle, through the side facing the outer center
    inner.arc(base + PI + beta, -2.0 * beta, &mut points);
    points.pop();

    Contour::new(points)
}
