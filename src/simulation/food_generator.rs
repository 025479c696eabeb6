//! Spawns food over time and retires it when its lifetime runs out.

use rand::Rng;
use tracing::trace;

use super::color::Color;
use super::food::Food;
use super::geometry::{Position, Size};
use super::time::TimeContext;

/// What a single generator tick did to the food set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Particles added this tick (zero or one).
    pub spawned: usize,
    /// Particles removed because their lifetime ran out.
    pub expired: usize,
}

/// Owns the population dynamics of the food set.
///
/// Every tick ages all food, removes expired particles and, while
/// `generating` is on, spawns a particle each `fps / generation_rate` frames.
#[derive(Debug, Clone)]
pub struct FoodGenerator {
    /// Area new food is placed in.
    pub bounds: Size,
    /// Food items spawned per simulated second.
    pub generation_rate: f32,
    /// On/off switch for spawning.
    pub generating: bool,
    /// Radius of spawned food.
    pub food_radius: f32,
    /// Lifetime of spawned food, in seconds.
    pub food_lifetime: f32,
    /// Color of spawned food.
    pub food_color: Color,
    frame_counter: f32,
}

impl FoodGenerator {
    /// Creates a generator that spawns default food inside `bounds`.
    pub fn new(bounds: Size, generation_rate: f32, generating: bool) -> Self {
        Self {
            bounds,
            generation_rate,
            generating,
            food_radius: Food::DEFAULT_RADIUS,
            food_lifetime: Food::DEFAULT_EXISTENCE_LENGTH,
            food_color: Food::DEFAULT_COLOR,
            frame_counter: 0.0,
        }
    }

    /// Sets the radius, lifetime and color of spawned food.
    pub fn with_food(mut self, radius: f32, lifetime: f32, color: Color) -> Self {
        self.food_radius = radius;
        self.food_lifetime = lifetime;
        self.food_color = color;
        self
    }

    /// Frames counted toward the next spawn.
    pub fn frame_counter(&self) -> f32 {
        self.frame_counter
    }

    /// Frames between two spawns under `time`.
    pub fn spawn_interval(&self, time: &TimeContext) -> f32 {
        time.frames_per_simulated_second() / self.generation_rate
    }

    /// Creates one particle at a uniformly random spot inside the bounds.
    pub fn generate_single_food<R: Rng>(&self, rng: &mut R) -> Food {
        let position = Position::new(
            rng.random_range(0.0..self.bounds.width),
            rng.random_range(0.0..self.bounds.height),
        );
        Food::with_properties(
            position,
            self.food_radius,
            self.food_lifetime,
            self.food_color,
        )
    }

    /// Creates `n_foods` particles at once.
    pub fn generate_foods<R: Rng>(&self, n_foods: usize, rng: &mut R) -> Vec<Food> {
        (0..n_foods).map(|_| self.generate_single_food(rng)).collect()
    }

    /// Advances the food set by one frame.
    ///
    /// Existing food is aged and expired particles are swept out in one pass
    /// before at most one new particle is appended.
    pub fn tick<R: Rng>(
        &mut self,
        foods: &mut Vec<Food>,
        time: &TimeContext,
        rng: &mut R,
    ) -> TickReport {
        let dt = time.dt();
        for food in foods.iter_mut() {
            food.age_by(dt);
        }
        let before = foods.len();
        foods.retain(Food::is_alive);
        let expired = before - foods.len();

        let mut spawned = 0;
        if self.generating {
            self.frame_counter += 1.0;
            let interval = self.spawn_interval(time);
            if self.frame_counter >= interval {
                // at most one spawn per frame; drop any backlog beyond it
                self.frame_counter = (self.frame_counter - interval).min(interval);
                foods.push(self.generate_single_food(rng));
                spawned = 1;
            }
        }

        if spawned > 0 || expired > 0 {
            trace!(spawned, expired, alive = foods.len(), "food tick");
        }

        TickReport { spawned, expired }
    }
}
