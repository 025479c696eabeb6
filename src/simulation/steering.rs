//! Targeting model: turns a target point into a heading and a speed.
//!
//! Speed follows a deceleration curve that approaches the agent's
//! `max_velocity` far from the target and falls to zero on top of it, minus a
//! friction term that grows with the amount of food eaten.

use super::agent::Agent;
use super::geometry::Position;
use super::motion::MotionState;
use super::velocity::Velocity;

/// Default curvature of the deceleration curve.
pub const DEFAULT_DECELERATION_EASING: f32 = 40.0;
/// Default curvature of the friction curve, in meals.
pub const DEFAULT_FRICTION_EASING: f32 = 20.0;

/// Speed for an agent `distance` units from its target.
///
/// Equals `max_velocity * distance / (distance + easing)`: zero at the target
/// and approaching `max_velocity` as the distance grows.
pub fn deceleration_speed(max_velocity: f32, distance: f32, easing: f32) -> f32 {
    max_velocity * easing / -(distance + easing) + max_velocity
}

/// Slowdown caused by `food_eaten` meals, saturating at `max_friction`.
pub fn friction(max_friction: f32, food_eaten: u32, friction_easing: f32) -> f32 {
    max_friction * (food_eaten as f32 / friction_easing).tanh()
}

/// Points the agent at `target` and sets its speed from the distance left.
///
/// The speed never drops below zero: once friction outweighs the deceleration
/// term the agent stands still instead of backing away.
pub fn set_velocity_for_target(
    agent: &mut Agent,
    target: &Position,
    deceleration_easing: f32,
    friction_easing: f32,
) {
    let (dx, dy) = agent.position.offset_to(target);
    let distance = agent.position.euclidean_distance_to(target);

    let speed = deceleration_speed(agent.max_velocity, distance, deceleration_easing)
        - friction(agent.max_friction, agent.food_eaten, friction_easing);

    agent.velocity = Velocity::new(Velocity::calculate_angle(dx, dy), speed.max(0.0));
}

/// Whether an agent `distance` away moving at `speed` would reach its target
/// within a frame of `dt` seconds.
pub fn should_pin(distance: f32, speed: f32, dt: f32) -> bool {
    distance < speed * dt
}

/// Runs the pin state machine for one frame and moves the agent if it is free.
///
/// An agent that would overshoot the target this frame snaps onto it and is
/// pinned; otherwise it is released and moved along its velocity.
pub fn follow_target(agent: &mut Agent, target: &Position, dt: f32) -> MotionState {
    let distance = agent.position.euclidean_distance_to(target);

    if should_pin(distance, agent.velocity.speed, dt) {
        agent.position = *target;
        agent.motion = MotionState::Pinned;
    } else {
        agent.motion = MotionState::Free;
    }
    agent.commit_movement(dt);
    agent.motion
}
