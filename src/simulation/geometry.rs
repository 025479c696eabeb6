//! Geometry primitives shared by every entity in the simulation.
//!
//! Coordinates are screen space: `x` grows to the right and `y` grows
//! downward, so an angle of 90° points down the screen.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use serde::{Deserialize, Serialize};

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Position {
    /// Creates a position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    pub fn euclidean_distance_to(&self, other: &Position) -> f32 {
        Euclidean.distance(Point::from(*self), Point::from(*other))
    }

    /// Absolute distances along each axis, as `(|dx|, |dy|)`.
    pub fn axial_distances_to(&self, other: &Position) -> (f32, f32) {
        ((self.x - other.x).abs(), (self.y - other.y).abs())
    }

    /// Signed offset from `self` to `other`, as `(dx, dy)`.
    pub fn offset_to(&self, other: &Position) -> (f32, f32) {
        (other.x - self.x, other.y - self.y)
    }

    /// Position moved by `(dx, dy)`.
    pub fn shifted_by(&self, dx: f32, dy: f32) -> Position {
        Position::new(self.x + dx, self.y + dy)
    }

    /// Position moved `distance` units along `angle` degrees.
    pub fn shifted_polar(&self, angle: f32, distance: f32) -> Position {
        let (sin, cos) = angle.to_radians().sin_cos();
        self.shifted_by(cos * distance, sin * distance)
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(&self, other: &Position) -> Position {
        Position::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Coordinates as `(x, y)`.
    pub fn as_tuple(&self) -> (f32, f32) {
        (self.x, self.y)
    }
}

impl From<Position> for Point<f32> {
    fn from(position: Position) -> Self {
        Point::new(position.x, position.y)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// Width and height of a rectangular area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Creates a size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point of a rectangle of this size anchored at the origin.
    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }

    /// Dimensions as `(width, height)`.
    pub fn as_tuple(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

/// Anything with a circular footprint.
pub trait Circular {
    /// Center of the circle.
    fn center(&self) -> Position;

    /// Radius of the circle.
    fn radius(&self) -> f32;

    /// Area of the circle.
    fn area(&self) -> f32 {
        std::f32::consts::PI * self.radius().powi(2)
    }

    /// Whether two circles touch or overlap. Touching counts.
    fn overlaps<C: Circular + ?Sized>(&self, other: &C) -> bool {
        self.center().euclidean_distance_to(&other.center()) <= self.radius() + other.radius()
    }
}
