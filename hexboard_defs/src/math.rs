/// The floating-point type used for pixel-space math.
pub type Float = f64;

/// A 2D point or vector in pixel space.
pub type Vec2 = glam::DVec2;

pub const SQRT_3: Float = 1.732_050_807_568_877_2;

/// Normalizes an angle in degrees to the range `[0, 360)`.
#[inline]
pub fn wrap_degrees(deg: Float) -> Float {
    deg.rem_euclid(360.0)
}
