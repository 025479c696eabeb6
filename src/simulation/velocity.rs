//! Polar velocity: a heading in degrees plus a scalar speed.

/// Velocity expressed as a heading and a speed.
///
/// The angle is kept in `[0, 360)` degrees. Speed is in units per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    angle: f32,
    /// Speed in units per second.
    pub speed: f32,
}

impl Velocity {
    /// Creates a velocity, normalizing `angle` into `[0, 360)`.
    pub fn new(angle: f32, speed: f32) -> Self {
        Self {
            angle: normalize_angle(angle),
            speed,
        }
    }

    /// Heading in degrees, always in `[0, 360)`.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Sets the heading, normalizing it into `[0, 360)`.
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = normalize_angle(angle);
    }

    /// Velocity components along each axis, as `(vx, vy)`.
    pub fn axial_motion(&self) -> (f32, f32) {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        (cos * self.speed, sin * self.speed)
    }

    /// Heading in degrees of the vector `(x, y)`.
    ///
    /// Axis-aligned vectors are special-cased so no ratio is ever taken with a
    /// zero denominator; the zero vector maps to 90°.
    pub fn calculate_angle(x: f32, y: f32) -> f32 {
        if x == 0.0 {
            return if y >= 0.0 { 90.0 } else { 270.0 };
        }
        if y == 0.0 {
            return if x >= 0.0 { 0.0 } else { 180.0 };
        }

        let angle = (y / x).abs().atan().to_degrees();

        let reflected = match (x > 0.0, y > 0.0) {
            (true, true) => angle,
            (false, true) => 180.0 - angle,
            (true, false) => 360.0 - angle,
            (false, false) => 180.0 + angle,
        };
        normalize_angle(reflected)
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn normalize_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

impl std::fmt::Display for Velocity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} u/s at {:.1}°", self.speed, self.angle)
    }
}
