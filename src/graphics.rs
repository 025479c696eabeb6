use bubbles::simulation;
use bubbles::simulation::render::{Shape, Surface};
use macroquad::prelude::*;

/// Draws shapes straight onto the macroquad window.
pub struct ScreenSurface;

impl Surface for ScreenSurface {
    fn draw(&mut self, shape: Shape) {
        match shape {
            Shape::Circle {
                center,
                radius,
                color,
            } => draw_circle(center.x, center.y, radius, to_macroquad(color)),
            Shape::Line { from, to, color } => {
                draw_line(from.x, from.y, to.x, to.y, 1.0, to_macroquad(color));
            }
        }
    }
}

pub fn to_macroquad(color: simulation::color::Color) -> Color {
    Color::from_rgba(color.red, color.green, color.blue, color.alpha)
}

pub fn draw_world(world: &simulation::world::World) {
    world.render(&mut ScreenSurface);

    // agent health bars, only for visible agents
    for agent in world.agents.iter().filter(|agent| agent.visible) {
        let health_bar_width = agent.radius * 2.0;
        let health_bar_height = 2.0;
        let health_bar_offset = 3.0;
        let health_bar_x = agent.position.x - health_bar_width / 2.0;
        let health_bar_y = agent.position.y - agent.radius - health_bar_height - health_bar_offset;
        draw_rectangle(
            health_bar_x,
            health_bar_y,
            health_bar_width,
            health_bar_height,
            Color::from_rgba(100, 100, 100, 200),
        );
        draw_rectangle(
            health_bar_x,
            health_bar_y,
            health_bar_width * agent.health_fraction(),
            health_bar_height,
            Color::from_rgba(255, 0, 0, 255),
        );
    }
}
