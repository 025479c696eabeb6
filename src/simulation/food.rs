//! Food particles that agents consume to grow.
//!
//! Food lives for a fixed number of seconds after it is spawned and is
//! removed either when that time runs out or when an agent eats it.

use super::color::Color;
use super::geometry::{Circular, Position, Size};
use super::render::{Drawable, Shape, Surface};

/// A food particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    /// Center of the particle.
    pub position: Position,
    /// Particle radius.
    pub radius: f32,
    /// Fill color.
    pub color: Color,
    /// Seconds left before the particle expires.
    pub remaining_life: f32,
    /// Total lifetime in seconds, fixed at creation.
    existence_length: f32,
}

impl Food {
    /// Lifetime of a default food particle, in seconds.
    pub const DEFAULT_EXISTENCE_LENGTH: f32 = 5.0;
    /// Radius of a default food particle.
    pub const DEFAULT_RADIUS: f32 = 5.0;
    /// Color of a default food particle.
    pub const DEFAULT_COLOR: Color = Color::opaque(153, 184, 152);

    /// Creates a default food particle at `position`.
    pub fn new(position: Position) -> Self {
        Self::with_properties(
            position,
            Self::DEFAULT_RADIUS,
            Self::DEFAULT_EXISTENCE_LENGTH,
            Self::DEFAULT_COLOR,
        )
    }

    /// Creates a food particle with explicit radius, lifetime and color.
    pub fn with_properties(
        position: Position,
        radius: f32,
        existence_length: f32,
        color: Color,
    ) -> Self {
        Self {
            position,
            radius,
            color,
            remaining_life: existence_length,
            existence_length,
        }
    }

    /// Total lifetime this particle was created with.
    pub fn existence_length(&self) -> f32 {
        self.existence_length
    }

    /// Fraction of the lifetime still left, in `[0, 1]`.
    pub fn life_fraction(&self) -> f32 {
        if self.existence_length <= 0.0 {
            return 0.0;
        }
        (self.remaining_life / self.existence_length).clamp(0.0, 1.0)
    }

    /// Whether the particle still has life left.
    pub fn is_alive(&self) -> bool {
        self.remaining_life > 0.0
    }

    /// Marks the particle as eaten so the next sweep removes it.
    pub fn consume(&mut self) {
        self.remaining_life = 0.0;
    }

    /// Ages the particle by one frame of `dt` seconds.
    pub fn age_by(&mut self, dt: f32) {
        self.remaining_life -= dt;
        // Snap sub-half-frame remainders so a lifetime of L seconds lasts
        // exactly L / dt frames regardless of float drift.
        if self.remaining_life < dt / 2.0 {
            self.remaining_life = 0.0;
        }
    }

    /// Bounding box of the particle.
    pub fn rectangular_size(&self) -> Size {
        Size::new(self.radius * 2.0, self.radius * 2.0)
    }
}

impl Circular for Food {
    fn center(&self) -> Position {
        self.position
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

impl Drawable for Food {
    fn is_visible(&self) -> bool {
        self.is_alive()
    }

    fn draw_self(&self, surface: &mut dyn Surface) {
        surface.draw(Shape::Circle {
            center: self.position,
            radius: self.radius,
            color: self.color,
        });
    }
}
