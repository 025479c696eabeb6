use std::path::Path;

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::error::ConfigError;
use super::food::Food;
use super::geometry::Size;
use super::steering::{DEFAULT_DECELERATION_EASING, DEFAULT_FRICTION_EASING};
use super::target::Target;
use super::time::TimeContext;

/// Which kind of agent the world starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentShape {
    /// Single circle.
    Bubble,
    /// Head with a growing trail.
    Snake,
}

/// Where the per-frame time slice comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameTiming {
    /// Always step by `1 / fps`.
    Fixed,
    /// Step by the measured duration of the last rendered frame.
    Measured,
}

/// Simulation parameters that control world behavior.
///
/// Every field has a default, so a config file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Size of the simulated surface in pixels.
    pub surface: Size,
    /// Nominal frames per second.
    pub fps: f32,
    /// Global time dilation.
    pub time_factor: f32,
    /// Fixed or measured frame time.
    pub frame_timing: FrameTiming,
    /// Background fill color.
    pub background_color: Color,

    /// Food items spawned per simulated second.
    pub food_generation_rate: f32,
    /// Whether food spawns at all.
    pub food_generating: bool,
    /// Food particles placed at world creation.
    pub initial_food: usize,
    /// Radius of spawned food.
    pub food_radius: f32,
    /// Lifetime of spawned food in seconds.
    pub food_lifetime: f32,
    /// Color of spawned food.
    pub food_color: Color,

    /// Kind of agent to create.
    pub agent_shape: AgentShape,
    /// Number of agents to create.
    pub agent_count: usize,
    /// Speed cap in units per second.
    pub max_velocity: f32,
    /// Friction cap; zero disables slowdown from eating.
    pub max_friction: f32,
    /// Initial agent radius.
    pub agent_radius: f32,
    /// Agent fill color.
    pub agent_color: Color,
    /// Agent health cap.
    pub max_health: f32,
    /// Spacing of snake joints.
    pub joint_gap: f32,
    /// Curvature of the deceleration curve; larger means a softer arrival.
    pub deceleration_easing: f32,
    /// Meals needed to reach about 76% of `max_friction`.
    pub friction_easing: f32,

    /// Crosshair line length.
    pub target_size: f32,
    /// Whether the crosshair starts visible.
    pub target_visible: bool,

    /// Seed for food placement; random when absent.
    pub rng_seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            surface: Size::new(900.0, 675.0),
            fps: 60.0,
            time_factor: 1.0,
            frame_timing: FrameTiming::Fixed,
            background_color: Color::opaque(42, 54, 59),
            food_generation_rate: 10.0,
            food_generating: true,
            initial_food: 0,
            food_radius: Food::DEFAULT_RADIUS,
            food_lifetime: Food::DEFAULT_EXISTENCE_LENGTH,
            food_color: Food::DEFAULT_COLOR,
            agent_shape: AgentShape::Bubble,
            agent_count: 1,
            max_velocity: 300.0,
            max_friction: 100.0,
            agent_radius: 10.0,
            agent_color: Color::opaque(254, 206, 168),
            max_health: 100.0,
            joint_gap: 10.0,
            deceleration_easing: DEFAULT_DECELERATION_EASING,
            friction_easing: DEFAULT_FRICTION_EASING,
            target_size: Target::DEFAULT_SIZE,
            target_visible: false,
            rng_seed: None,
        }
    }
}

impl Params {
    /// Nominal time context built from `fps` and `time_factor`.
    pub fn time_context(&self) -> TimeContext {
        TimeContext::new(self.fps).with_time_factor(self.time_factor)
    }

    /// Checks that every rate, size and easing constant is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    name,
                    reason: "must be a positive finite number",
                })
            }
        }
        fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
            if value >= 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::Invalid {
                    name,
                    reason: "must be zero or a positive finite number",
                })
            }
        }

        positive("surface.width", self.surface.width)?;
        positive("surface.height", self.surface.height)?;
        positive("fps", self.fps)?;
        positive("time_factor", self.time_factor)?;
        non_negative("food_generation_rate", self.food_generation_rate)?;
        positive("food_radius", self.food_radius)?;
        positive("food_lifetime", self.food_lifetime)?;
        non_negative("max_velocity", self.max_velocity)?;
        non_negative("max_friction", self.max_friction)?;
        positive("agent_radius", self.agent_radius)?;
        non_negative("max_health", self.max_health)?;
        non_negative("joint_gap", self.joint_gap)?;
        positive("deceleration_easing", self.deceleration_easing)?;
        positive("friction_easing", self.friction_easing)?;
        non_negative("target_size", self.target_size)?;
        Ok(())
    }

    /// Loads and validates parameters from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }

    /// Writes the parameters to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
