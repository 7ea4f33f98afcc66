#[macro_export]
macro_rules! impl_angle_newtype {
    ($name:ty) => {
        impl $name {
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            pub const fn value(&self) -> f64 {
                self.0
            }

            pub fn to_radians(&self) -> f64 {
                self.0.to_radians()
            }

            pub fn lerp(from: Self, to: Self, fraction: f64) -> Self {
                Self(from.0 + (to.0 - from.0) * fraction)
            }
        }
    };
}
