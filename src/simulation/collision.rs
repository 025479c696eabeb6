//! Circle overlap tests between agents and food.

use std::collections::HashSet;

use super::agent::Agent;
use super::food::Food;
use super::geometry::{Circular, Position};

/// An agent touching a food particle this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    /// Index of the agent in the slice passed to the detector.
    pub agent: usize,
    /// Index of the food in the slice passed to the detector.
    pub food: usize,
    /// Midpoint between the two centers.
    pub position: Position,
}

/// Finds every agent/food pair whose circles touch or overlap.
///
/// Pairs come out agent-major, food-minor. A food particle within reach of
/// several agents shows up once per agent; see [`resolve_feeding`].
pub fn detect_feeding(agents: &[Agent], foods: &[Food]) -> Vec<Collision> {
    let mut collisions = Vec::new();
    for (agent_idx, agent) in agents.iter().enumerate() {
        for (food_idx, food) in foods.iter().enumerate() {
            if agent.overlaps(food) {
                collisions.push(Collision {
                    agent: agent_idx,
                    food: food_idx,
                    position: agent.center().midpoint(&food.center()),
                });
            }
        }
    }
    collisions
}

/// Keeps only the first collision for each food particle.
///
/// With the agent-major order of [`detect_feeding`] this means the
/// lowest-indexed agent wins a contested particle.
pub fn resolve_feeding(collisions: Vec<Collision>) -> Vec<Collision> {
    let mut claimed = HashSet::new();
    collisions
        .into_iter()
        .filter(|collision| claimed.insert(collision.food))
        .collect()
}
