//! The pointer-controlled point agents steer toward.

use super::color::Color;
use super::geometry::Position;
use super::render::{Drawable, Shape, Surface};

/// Steering target, drawn as a crosshair when visible.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    /// Where agents are heading.
    pub position: Position,
    /// Whether the crosshair is drawn.
    pub visible: bool,
    /// Length of each crosshair line.
    pub size: f32,
}

impl Target {
    /// Default crosshair line length.
    pub const DEFAULT_SIZE: f32 = 20.0;

    /// Creates a target at `position`.
    pub fn new(position: Position, visible: bool) -> Self {
        Self {
            position,
            visible,
            size: Self::DEFAULT_SIZE,
        }
    }

    /// Flips crosshair visibility.
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }
}

impl Drawable for Target {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn draw_self(&self, surface: &mut dyn Surface) {
        let half = self.size / 2.0;
        surface.draw(Shape::Line {
            from: self.position.shifted_by(-half, 0.0),
            to: self.position.shifted_by(half, 0.0),
            color: Color::WHITE,
        });
        surface.draw(Shape::Line {
            from: self.position.shifted_by(0.0, -half),
            to: self.position.shifted_by(0.0, half),
            color: Color::WHITE,
        });
    }
}
