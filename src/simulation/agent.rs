//! Agents: the bubbles and snakes that chase the target and eat food.

use std::collections::VecDeque;

use super::color::Color;
use super::food::Food;
use super::geometry::{Circular, Position};
use super::motion::{MotionState, Movable};
use super::render::{Drawable, Shape, Surface};
use super::velocity::Velocity;

/// Shape-specific state of an agent.
///
/// Movement and drawing dispatch on this enum, so every kind must handle both.
#[derive(Debug, Clone, PartialEq)]
pub enum AgentKind {
    /// A single circle.
    Bubble,
    /// A head followed by a trail of joints that grows as it eats.
    Snake(Tail),
}

/// Trail of joints left behind a snake's head.
#[derive(Debug, Clone, PartialEq)]
pub struct Tail {
    joints: VecDeque<Position>,
    joint_gap: f32,
    travelled: f32,
    length: usize,
}

impl Tail {
    /// Creates an empty tail whose joints are spaced `joint_gap` apart.
    pub fn new(joint_gap: f32) -> Self {
        Self {
            joints: VecDeque::new(),
            joint_gap,
            travelled: 0.0,
            length: 1,
        }
    }

    /// Joint positions, nearest to the head first.
    pub fn joints(&self) -> impl Iterator<Item = &Position> {
        self.joints.iter()
    }

    /// Number of segments including the head.
    pub fn length(&self) -> usize {
        self.length
    }

    fn grow(&mut self) {
        self.length += 1;
    }

    /// Drops a joint every `joint_gap` units along the segment the head just
    /// travelled, so joints stay evenly spaced however long the step is.
    fn follow(&mut self, previous_head: Position, head: Position) {
        let step = previous_head.euclidean_distance_to(&head);
        self.travelled += step;
        if self.joint_gap <= 0.0 || self.travelled < self.joint_gap {
            self.joints.truncate(self.length - 1);
            return;
        }

        let crossings = (self.travelled / self.joint_gap).floor() as usize;
        self.travelled = (self.travelled - crossings as f32 * self.joint_gap).max(0.0);

        // unit vector pointing from the head back along the step
        let (dx, dy) = head.offset_to(&previous_head);
        let (ux, uy) = if step > 0.0 {
            (dx / step, dy / step)
        } else {
            (0.0, 0.0)
        };

        // older crossings beyond the tail length would be truncated anyway
        let kept = crossings.min(self.length - 1);
        for k in (0..kept).rev() {
            let back = self.travelled + k as f32 * self.joint_gap;
            self.joints.push_front(head.shifted_by(ux * back, uy * back));
        }
        self.joints.truncate(self.length - 1);
    }
}

/// A moving, growing agent.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    /// Bubble or snake specific state.
    pub kind: AgentKind,
    /// Center of the head.
    pub position: Position,
    /// Current heading and speed.
    pub velocity: Velocity,
    /// Speed the agent approaches when far from its target.
    pub max_velocity: f32,
    /// Upper bound of the slowdown caused by eating.
    pub max_friction: f32,
    /// Head radius.
    pub radius: f32,
    /// Fill color.
    pub color: Color,
    /// Health cap.
    pub max_health: f32,
    /// Current health.
    pub current_health: f32,
    /// Number of food particles eaten so far.
    pub food_eaten: u32,
    /// Whether the agent moves this frame.
    pub motion: MotionState,
    /// Whether the agent is drawn.
    pub visible: bool,
}

impl Agent {
    /// Default speed cap in units per second.
    pub const DEFAULT_MAX_VELOCITY: f32 = 300.0;
    /// Default head radius.
    pub const DEFAULT_RADIUS: f32 = 10.0;
    /// Default fill color.
    pub const DEFAULT_COLOR: Color = Color::opaque(254, 206, 168);
    /// Default health cap.
    pub const DEFAULT_MAX_HEALTH: f32 = 100.0;
    /// Default spacing between snake joints.
    pub const DEFAULT_JOINT_GAP: f32 = 10.0;

    /// Creates an agent of `kind` at `position` with default properties.
    pub fn new(kind: AgentKind, position: Position) -> Self {
        Self {
            kind,
            position,
            velocity: Velocity::default(),
            max_velocity: Self::DEFAULT_MAX_VELOCITY,
            max_friction: 0.0,
            radius: Self::DEFAULT_RADIUS,
            color: Self::DEFAULT_COLOR,
            max_health: Self::DEFAULT_MAX_HEALTH,
            current_health: Self::DEFAULT_MAX_HEALTH,
            food_eaten: 0,
            motion: MotionState::Free,
            visible: true,
        }
    }

    /// Creates a bubble at `position`.
    pub fn bubble(position: Position) -> Self {
        Self::new(AgentKind::Bubble, position)
    }

    /// Creates a snake at `position`.
    pub fn snake(position: Position) -> Self {
        Self::new(AgentKind::Snake(Tail::new(Self::DEFAULT_JOINT_GAP)), position)
    }

    /// Sets the initial velocity.
    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the speed cap.
    pub fn with_max_velocity(mut self, max_velocity: f32) -> Self {
        self.max_velocity = max_velocity;
        self
    }

    /// Sets the friction cap.
    pub fn with_max_friction(mut self, max_friction: f32) -> Self {
        self.max_friction = max_friction;
        self
    }

    /// Sets the head radius.
    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the fill color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the health cap; current health starts full unless `current` is given.
    pub fn with_health(mut self, max: f32, current: Option<f32>) -> Self {
        self.max_health = max;
        self.current_health = current.unwrap_or(max);
        self
    }

    /// Whether movement is currently suppressed.
    pub fn is_pinned(&self) -> bool {
        self.motion == MotionState::Pinned
    }

    /// Current health as a fraction of the cap, in `[0, 1]`.
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.current_health / self.max_health).clamp(0.0, 1.0)
    }

    /// Records a meal and grows the head so that its area gains the food's area.
    pub fn eaten(&mut self, food: &Food) {
        self.food_eaten += 1;
        self.radius = ((self.area() + food.area()) / std::f32::consts::PI).sqrt();
        if let AgentKind::Snake(tail) = &mut self.kind {
            tail.grow();
        }
    }

    /// Moves the agent one frame of `dt` seconds unless pinned.
    pub fn commit_movement(&mut self, dt: f32) {
        super::motion::commit_movement(self, dt);
    }
}

impl Circular for Agent {
    fn center(&self) -> Position {
        self.position
    }

    fn radius(&self) -> f32 {
        self.radius
    }
}

impl Movable for Agent {
    fn motion_state(&self) -> MotionState {
        self.motion
    }

    fn move_self(&mut self, dt: f32) {
        let (vx, vy) = self.velocity.axial_motion();
        let previous = self.position;
        self.position = previous.shifted_by(vx * dt, vy * dt);

        match &mut self.kind {
            AgentKind::Bubble => {}
            AgentKind::Snake(tail) => tail.follow(previous, self.position),
        }
    }
}

impl Drawable for Agent {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn draw_self(&self, surface: &mut dyn Surface) {
        if let AgentKind::Snake(tail) = &self.kind {
            // draw back to front so the head stays on top
            let joint_radius = self.radius * 0.8;
            for joint in tail.joints.iter().rev() {
                surface.draw(Shape::Circle {
                    center: *joint,
                    radius: joint_radius,
                    color: self.color,
                });
            }
        }
        surface.draw(Shape::Circle {
            center: self.position,
            radius: self.radius,
            color: self.color,
        });
    }
}
