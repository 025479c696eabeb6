use bubbles::simulation::params::Params;
use bubbles::simulation::steering;
use bubbles::simulation::world::World;
use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use std::collections::VecDeque;

use super::ui::UIState;

pub(super) fn draw_stats_panel(
    egui_ctx: &egui::Context,
    state: &mut UIState,
    world: &World,
    params: &Params,
) {
    egui::SidePanel::right("stats_panel")
        .exact_width(300.0)
        .resizable(false)
        .show(egui_ctx, |ui| {
            ui.heading("Simulation Stats");
            ui.separator();

            ui.horizontal(|ui| {
                let pause_text = if state.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(pause_text).clicked() {
                    state.paused = !state.paused;
                }
                if ui.button("🔄 Reset").clicked() {
                    state.reset_requested = true;
                }
            });

            if let Some(ref msg) = state.status_message {
                ui.label(msg);
            }

            ui.separator();

            ui.label(format!("Time: {:.1}s", world.time));
            ui.label(format!("Frame: {}", world.frame));
            ui.label(format!(
                "Surface: {:.0} x {:.0}",
                params.surface.width, params.surface.height
            ));
            ui.label(format!("Food alive: {}", world.food.len()));
            ui.label(format!("Food eaten: {}", world.total_eaten));
            ui.label(format!("Food expired: {}", world.total_expired));
            let report = state.last_report;
            ui.label(format!(
                "Last frame: +{} spawned, -{} expired, {} eaten, {} pinned",
                report.spawned, report.expired, report.eaten, report.pinned
            ));

            ui.collapsing("Agents", |ui| {
                for (idx, agent) in world.agents.iter().enumerate() {
                    let drag = steering::friction(
                        agent.max_friction,
                        agent.food_eaten,
                        state.friction_easing,
                    );
                    ui.label(format!(
                        "#{idx}: r={:.1} eaten={} v={} friction={:.1}{}",
                        agent.radius,
                        agent.food_eaten,
                        agent.velocity,
                        drag,
                        if agent.is_pinned() { " (pinned)" } else { "" },
                    ));
                }
            });

            ui.separator();

            ui.label("Time Factor");
            ui.add(egui::Slider::new(&mut state.time_factor, 0.1..=5.0).text("x"));

            ui.checkbox(&mut state.generating, "Generate food");
            ui.add(
                egui::Slider::new(&mut state.generation_rate, 0.5..=60.0)
                    .text("Food / second"),
            );

            ui.collapsing("Steering", |ui| {
                ui.add(
                    egui::Slider::new(&mut state.deceleration_easing, 1.0..=200.0)
                        .text("Deceleration easing"),
                );
                ui.add(
                    egui::Slider::new(&mut state.friction_easing, 1.0..=100.0)
                        .text("Friction easing"),
                );
            });

            ui.separator();
            ui.label("Keys: T crosshair, V agents, Space pause, Esc quit");

            ui.separator();
            ui.heading("Food");
            draw_history_plot(ui, "food_plot", "Food", &state.food_count_history);

            ui.heading("Radius");
            draw_history_plot(ui, "radius_plot", "Radius", &state.radius_history);
        });
}

fn draw_history_plot(ui: &mut egui::Ui, id: &str, name: &str, data: &VecDeque<(f64, f64)>) {
    if data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new(id)
        .height(120.0)
        .show_axes([true, true])
        .label_formatter(|name, value| format!("{}\nTime: {:.1}s\n{:.1}", name, value.x, value.y))
        .show(ui, |plot_ui| {
            let points: PlotPoints = data.iter().map(|&(x, y)| [x, y]).collect();
            plot_ui.line(
                Line::new(points)
                    .color(egui::Color32::from_rgb(100, 200, 100))
                    .name(name),
            );
        });
}
