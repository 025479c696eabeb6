//! Frame-driven world holding every agent, the food set and the target.
//!
//! One call to [`World::step`] runs a full frame in a fixed order:
//! - food is aged, swept and spawned
//! - agent/food collisions are detected and resolved
//! - every agent is steered toward the target and moved (or pinned)

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, trace};

use super::agent::{Agent, AgentKind, Tail};
use super::collision;
use super::error::ConfigError;
use super::event_log::{EventKind, EventLog};
use super::food::Food;
use super::food_generator::FoodGenerator;
use super::geometry::Position;
use super::motion::MotionState;
use super::params::{AgentShape, Params};
use super::render::{self, Surface};
use super::steering;
use super::target::Target;
use super::time::TimeContext;

/// What happened during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Food particles spawned.
    pub spawned: usize,
    /// Food particles that ran out of life.
    pub expired: usize,
    /// Food particles eaten.
    pub eaten: usize,
    /// Agents that became pinned this frame.
    pub pinned: usize,
}

/// The whole simulation state.
#[derive(Debug, Clone)]
pub struct World {
    /// All agents, never removed during a run.
    pub agents: Vec<Agent>,
    /// Active food particles.
    pub food: Vec<Food>,
    /// Shared steering target.
    pub target: Target,
    /// Spawns and retires food.
    pub generator: FoodGenerator,
    /// Curvature of the arrival slowdown.
    pub deceleration_easing: f32,
    /// Curvature of the slowdown from eating.
    pub friction_easing: f32,
    /// Recent events for display.
    pub event_log: EventLog,
    /// Total simulated time elapsed.
    pub time: f32,
    /// Frames stepped so far.
    pub frame: u64,
    /// Food eaten since the start.
    pub total_eaten: u64,
    /// Food expired since the start.
    pub total_expired: u64,
    rng: StdRng,
}

impl World {
    /// Creates a world from validated parameters.
    pub fn new(params: &Params) -> Result<Self, ConfigError> {
        params.validate()?;

        let mut rng = match params.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let center = params.surface.center();
        let spread = params.surface.width.min(params.surface.height) / 4.0;
        let agents = (0..params.agent_count)
            .map(|i| {
                let position = if params.agent_count == 1 {
                    center
                } else {
                    center.shifted_polar(i as f32 * 360.0 / params.agent_count as f32, spread)
                };
                spawn_agent(params, position)
            })
            .collect();

        let generator = FoodGenerator::new(
            params.surface,
            params.food_generation_rate,
            params.food_generating,
        )
        .with_food(params.food_radius, params.food_lifetime, params.food_color);
        let food = generator.generate_foods(params.initial_food, &mut rng);

        let mut target = Target::new(center, params.target_visible);
        target.size = params.target_size;

        info!(
            agents = params.agent_count,
            food = params.initial_food,
            width = params.surface.width,
            height = params.surface.height,
            "Created world"
        );

        Ok(Self {
            agents,
            food,
            target,
            generator,
            deceleration_easing: params.deceleration_easing,
            friction_easing: params.friction_easing,
            event_log: EventLog::default(),
            time: 0.0,
            frame: 0,
            total_eaten: 0,
            total_expired: 0,
            rng,
        })
    }

    /// Moves the steering target.
    pub fn set_target(&mut self, position: Position) {
        self.target.position = position;
    }

    /// Flips visibility of every agent.
    pub fn toggle_agents_visibility(&mut self) {
        for agent in &mut self.agents {
            agent.visible = !agent.visible;
        }
    }

    /// Advances the simulation by one frame.
    pub fn step(&mut self, time: &TimeContext) -> StepReport {
        let dt = time.dt();
        self.time += dt;
        self.frame += 1;

        let tick = self.generator.tick(&mut self.food, time, &mut self.rng);
        if tick.expired > 0 {
            debug!(count = tick.expired, "Food expired");
            self.total_expired += tick.expired as u64;
            self.event_log.log(
                self.time,
                EventKind::Expired {
                    count: tick.expired,
                },
            );
        }

        let eaten = self.resolve_feeding();
        let pinned = self.steer_agents(dt);

        trace!(
            frame = self.frame,
            food = self.food.len(),
            eaten,
            pinned,
            "Stepped world"
        );

        StepReport {
            spawned: tick.spawned,
            expired: tick.expired,
            eaten,
            pinned,
        }
    }

    /// Feeds every colliding agent, then sweeps the eaten food in one pass.
    fn resolve_feeding(&mut self) -> usize {
        let collisions =
            collision::resolve_feeding(collision::detect_feeding(&self.agents, &self.food));

        for hit in &collisions {
            let food = &mut self.food[hit.food];
            self.agents[hit.agent].eaten(food);
            food.consume();

            debug!(
                agent = hit.agent,
                radius = self.agents[hit.agent].radius,
                x = hit.position.x,
                y = hit.position.y,
                "Agent ate food"
            );
            self.event_log.log(
                self.time,
                EventKind::Eaten {
                    agent: hit.agent,
                    position: hit.position,
                },
            );
        }

        self.food.retain(Food::is_alive);
        self.total_eaten += collisions.len() as u64;
        collisions.len()
    }

    /// Steers every agent toward the target and moves it; returns how many
    /// agents became pinned this frame.
    fn steer_agents(&mut self, dt: f32) -> usize {
        let target = self.target.position;
        let mut newly_pinned = 0;

        for (idx, agent) in self.agents.iter_mut().enumerate() {
            let was_pinned = agent.is_pinned();
            steering::set_velocity_for_target(
                agent,
                &target,
                self.deceleration_easing,
                self.friction_easing,
            );
            let state = steering::follow_target(agent, &target, dt);

            if state == MotionState::Pinned && !was_pinned {
                newly_pinned += 1;
                self.event_log.log(
                    self.time,
                    EventKind::Pinned {
                        agent: idx,
                        position: target,
                    },
                );
            }
        }
        newly_pinned
    }

    /// Draws food, then agents, then the crosshair.
    pub fn render(&self, surface: &mut dyn Surface) {
        for food in &self.food {
            render::render(food, surface);
        }
        for agent in &self.agents {
            render::render(agent, surface);
        }
        render::render(&self.target, surface);
    }
}

fn spawn_agent(params: &Params, position: Position) -> Agent {
    let kind = match params.agent_shape {
        AgentShape::Bubble => AgentKind::Bubble,
        AgentShape::Snake => AgentKind::Snake(Tail::new(params.joint_gap)),
    };
    Agent::new(kind, position)
        .with_max_velocity(params.max_velocity)
        .with_max_friction(params.max_friction)
        .with_radius(params.agent_radius)
        .with_color(params.agent_color)
        .with_health(params.max_health, None)
}
