use bubbles::simulation::params::Params;
use bubbles::simulation::world::{StepReport, World};
use egui_macroquad::egui;
use std::collections::VecDeque;

const MAX_HISTORY_POINTS: usize = 500;

pub struct UIState {
    pub food_count_history: VecDeque<(f64, f64)>,
    pub radius_history: VecDeque<(f64, f64)>,
    last_update_time: f32,
    update_interval: f32,
    pub reset_requested: bool,
    pub status_message: Option<String>,
    pub paused: bool,
    pub time_factor: f32,
    pub generation_rate: f32,
    pub generating: bool,
    pub deceleration_easing: f32,
    pub friction_easing: f32,
    pub last_report: StepReport,
}

impl UIState {
    pub fn new(params: &Params) -> Self {
        Self {
            food_count_history: VecDeque::new(),
            radius_history: VecDeque::new(),
            last_update_time: 0.0,
            update_interval: 0.25, // Update every 0.25 simulated seconds
            reset_requested: false,
            status_message: None,
            paused: false,
            time_factor: params.time_factor,
            generation_rate: params.food_generation_rate,
            generating: params.food_generating,
            deceleration_easing: params.deceleration_easing,
            friction_easing: params.friction_easing,
            last_report: StepReport::default(),
        }
    }

    pub fn reset_history(&mut self) {
        self.food_count_history.clear();
        self.radius_history.clear();
        self.last_update_time = 0.0;
    }

    /// Pushes the tuning controls into the running world.
    pub fn apply_to(&self, world: &mut World) {
        world.generator.generation_rate = self.generation_rate;
        world.generator.generating = self.generating;
        world.deceleration_easing = self.deceleration_easing;
        world.friction_easing = self.friction_easing;
    }

    pub fn record_step(&mut self, world: &World, report: StepReport) {
        self.last_report = report;
        if world.time - self.last_update_time < self.update_interval {
            return;
        }
        self.last_update_time = world.time;

        let time = world.time as f64;
        self.food_count_history
            .push_back((time, world.food.len() as f64));
        if let Some(agent) = world.agents.first() {
            self.radius_history.push_back((time, agent.radius as f64));
        }

        if self.food_count_history.len() > MAX_HISTORY_POINTS {
            self.food_count_history.pop_front();
        }
        if self.radius_history.len() > MAX_HISTORY_POINTS {
            self.radius_history.pop_front();
        }
    }
}

pub fn draw_ui(state: &mut UIState, world: &World, params: &Params) {
    egui_macroquad::ui(|egui_ctx| {
        // Configure brighter text and UI
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state, world, params);
        super::events::draw_events_panel(egui_ctx, world);
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
