use crate::anim::AnimationHandle;
use crate::geometry::{AnnulusGeometry, Contour, Degrees, Projection, Size};

pub const OUTER_CIRCLE_RADIUS: f64 = 40.0; // dp
pub const INNER_CIRCLE_RADIUS: f64 = 35.0; // dp
pub const RING_PADDING: f64 = 8.0; // inner circle shift to the right, dp

/// One of the three spinning rings. Each ring draws over the whole surface
/// of its container, centered.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    size: Size,
    density: f64,
    rotation: Option<Degrees>,
    animation: Option<AnimationHandle>,
}

impl Ring {
    pub fn new(density: f64) -> Self {
        Self {
            size: Size::default(),
            density,
            rotation: None,
            animation: None,
        }
    }

    /// Records the new surface size. Drawing picks it up on the next paint.
    pub fn on_size_changed(&mut self, width: f64, height: f64) {
        self.size = Size::new(width, height);
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_density(&mut self, density: f64) {
        self.density = density;
    }

    pub fn rotation(&self) -> Option<Degrees> {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Degrees) {
        self.rotation = Some(rotation);
    }

    pub fn clear_rotation(&mut self) {
        self.rotation = None;
    }

    pub fn animation(&self) -> Option<AnimationHandle> {
        self.animation
    }

    pub(crate) fn set_animation(&mut self, handle: Option<AnimationHandle>) {
        self.animation = handle;
    }

    fn dp(&self, value: f64) -> f64 {
        value * self.density
    }

    /// Built fresh for every paint, centered on the origin.
    pub fn geometry(&self) -> AnnulusGeometry {
        AnnulusGeometry::new(
            self.dp(OUTER_CIRCLE_RADIUS),
            self.dp(INNER_CIRCLE_RADIUS),
            self.dp(RING_PADDING),
        )
    }

    /// Static rotation around the surface center, applied under any running
    /// animation.
    pub fn static_transform(&self) -> Projection {
        self.rotation
            .map(|angle| Projection::rotation_about(angle, self.size.center()))
            .unwrap_or_default()
    }

    /// Contours to fill for this frame, in surface coordinates.
    pub fn frame(&self, animation: &Projection) -> Vec<Contour> {
        let center = self.size.center();
        let transform = animation
            .then(&self.static_transform())
            .then(&Projection::translation(center.x, center.y));

        self.geometry()
            .contours()
            .iter()
            .map(|contour| contour.transformed(&transform))
            .collect()
    }
}
