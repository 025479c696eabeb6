//! Minimal draw contract between the simulation and the presentation layer.
//!
//! Entities describe themselves as [`Shape`]s; the presentation layer owns the
//! window and implements [`Surface`] to turn shapes into pixels.

use super::color::Color;
use super::geometry::Position;

/// A primitive the presentation layer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A filled circle.
    Circle {
        /// Circle center.
        center: Position,
        /// Circle radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// A straight line segment.
    Line {
        /// Segment start.
        from: Position,
        /// Segment end.
        to: Position,
        /// Stroke color.
        color: Color,
    },
}

/// Something shapes can be drawn onto.
pub trait Surface {
    /// Draws a single shape.
    fn draw(&mut self, shape: Shape);
}

/// Recording surface, mostly useful for tests and headless runs.
impl Surface for Vec<Shape> {
    fn draw(&mut self, shape: Shape) {
        self.push(shape);
    }
}

/// Entities that can be drawn.
///
/// Implementors supply the per-type drawing in [`Drawable::draw_self`]; callers
/// go through [`render`], which applies the visibility gate.
pub trait Drawable {
    /// Whether the entity should be drawn this frame.
    fn is_visible(&self) -> bool;

    /// Emits the shapes that make up the entity.
    fn draw_self(&self, surface: &mut dyn Surface);
}

/// Draws `item` onto `surface` if it is visible.
pub fn render<D: Drawable + ?Sized>(item: &D, surface: &mut dyn Surface) {
    if item.is_visible() {
        item.draw_self(surface);
    }
}
