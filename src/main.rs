use std::path::PathBuf;

use anyhow::{Context, Result};
use bubbles::simulation::geometry::Position;
use bubbles::simulation::params::{FrameTiming, Params};
use bubbles::simulation::time::TimeContext;
use bubbles::simulation::world::World;
use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};

mod graphics;
mod ui;

/// Width reserved for the stats panel on the right of the surface.
const PANEL_WIDTH: f32 = 300.0;

#[derive(Parser, Debug)]
#[command(
    name = "bubbles",
    version,
    about = "Steer a bubble with the mouse and watch it eat"
)]
struct Cli {
    /// JSON file with simulation parameters; defaults are used when absent.
    #[arg(long, env = "BUBBLES_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for food placement, overriding the config.
    #[arg(long)]
    seed: Option<u64>,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Bubbles".to_owned(),
        window_width: 1200,
        window_height: 675,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_params(cli: &Cli) -> Result<Params> {
    let mut params = match &cli.config {
        Some(path) => Params::load_from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Params::default(),
    };
    if cli.seed.is_some() {
        params.rng_seed = cli.seed;
    }
    Ok(params)
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let params = load_params(&cli)?;
    let mut world = World::new(&params).context("creating world")?;
    let mut ui_state = ui::UIState::new(&params);

    request_new_screen_size(params.surface.width + PANEL_WIDTH, params.surface.height);
    info!("Starting bubbles simulation");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            info!("Quit requested");
            break;
        }

        // input sampling
        let (mouse_x, mouse_y) = mouse_position();
        if mouse_x <= params.surface.width && !ui_state.paused {
            world.set_target(Position::new(mouse_x, mouse_y));
        }
        if is_key_pressed(KeyCode::T) {
            world.target.toggle_visibility();
        }
        if is_key_pressed(KeyCode::V) {
            world.toggle_agents_visibility();
        }
        if is_key_pressed(KeyCode::Space) {
            ui_state.paused = !ui_state.paused;
        }

        if ui_state.reset_requested {
            ui_state.reset_requested = false;
            match World::new(&params) {
                Ok(fresh) => {
                    world = fresh;
                    ui_state.reset_history();
                    ui_state.status_message = Some("World reset".to_owned());
                }
                Err(err) => ui_state.status_message = Some(format!("Reset failed: {err}")),
            }
        }

        ui_state.apply_to(&mut world);

        if !ui_state.paused {
            let time = frame_time_context(&params, ui_state.time_factor);
            let report = world.step(&time);
            ui_state.record_step(&world, report);
        }

        clear_background(graphics::to_macroquad(params.background_color));
        graphics::draw_world(&world);

        ui::draw_ui(&mut ui_state, &world, &params);
        ui::process_egui();

        next_frame().await;
    }

    Ok(())
}

fn frame_time_context(params: &Params, time_factor: f32) -> TimeContext {
    let fps = match params.frame_timing {
        FrameTiming::Fixed => params.fps,
        // guard against a zero-length first frame
        FrameTiming::Measured => 1.0 / get_frame_time().max(1.0 / 1000.0),
    };
    TimeContext::new(fps).with_time_factor(time_factor)
}
