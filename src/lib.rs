//! # Bubbles - Target-Chasing Agents That Eat and Grow
//!
//! A small real-time simulation: circular agents steer toward a
//! pointer-controlled target, eat food particles that spawn and expire over
//! time, and grow with every meal while slowing down.
//!
//! ## Features
//!
//! - Eased arrival at the target, with pinning once the target is reached
//! - Area-conserving growth and friction that builds up with every meal
//! - Rate-based food spawning with fixed particle lifetimes
//! - Circle overlap collision detection between agents and food
//! - Bubble and snake agents behind shared movement and drawing traits
//! - Shape-based draw contract so any window library can render the world
//!
//! ## Core Modules
//!
//! - [`simulation::world`] - Per-frame orchestration
//! - [`simulation::steering`] - Targeting and pin state machine
//! - [`simulation::food_generator`] - Food spawning and expiry
//! - [`simulation::collision`] - Agent/food collision detection
//! - [`simulation::agent`] - Agent state and growth

/// Core simulation logic and data structures.
pub mod simulation {
    /// Agent state, growth and per-kind movement and drawing.
    pub mod agent;
    /// Circle overlap tests between agents and food.
    pub mod collision;
    /// Validated RGBA colors.
    pub mod color;
    /// Error types.
    pub mod error;
    /// Recent events for display.
    pub mod event_log;
    /// Food particles.
    pub mod food;
    /// Food spawning and expiry.
    pub mod food_generator;
    /// Positions, sizes and the circular footprint trait.
    pub mod geometry;
    /// Movement capability and the pinned/free state.
    ///
    /// The [`motion::Movable`] trait is implemented by everything that travels
    /// across the surface; [`motion::commit_movement`] is the only way to move it.
    pub mod motion;
    /// Simulation parameters.
    pub mod params;
    /// Draw contract between the core and the presentation layer.
    pub mod render;
    /// Target-driven velocity and pinning.
    pub mod steering;
    /// Pointer-controlled steering target.
    pub mod target;
    /// Per-frame time context.
    pub mod time;
    /// Polar velocity type.
    pub mod velocity;
    /// Main world simulation.
    pub mod world;
}
