#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use bubbles::simulation::agent::Agent;
use bubbles::simulation::geometry::Position;
use bubbles::simulation::motion::MotionState;
use bubbles::simulation::steering::{
    deceleration_speed, follow_target, friction, set_velocity_for_target, should_pin,
};
use bubbles::simulation::velocity::Velocity;

const FPS: f32 = 60.0;

fn approx_eq(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon
}

fn angle_toward(from: Position, to: Position) -> f32 {
    let mut agent = Agent::bubble(from);
    set_velocity_for_target(&mut agent, &to, 40.0, 20.0);
    agent.velocity.angle()
}

#[test]
fn test_axis_aligned_angles() {
    let origin = Position::new(400.0, 400.0);

    assert_eq!(angle_toward(origin, Position::new(500.0, 400.0)), 0.0);
    assert_eq!(angle_toward(origin, Position::new(400.0, 500.0)), 90.0);
    assert_eq!(angle_toward(origin, Position::new(300.0, 400.0)), 180.0);
    assert_eq!(angle_toward(origin, Position::new(400.0, 300.0)), 270.0);
}

#[test]
fn test_quadrant_angles() {
    assert!(approx_eq(Velocity::calculate_angle(1.0, 1.0), 45.0, 1e-3));
    assert!(approx_eq(Velocity::calculate_angle(-1.0, 1.0), 135.0, 1e-3));
    assert!(approx_eq(Velocity::calculate_angle(-1.0, -1.0), 225.0, 1e-3));
    assert!(approx_eq(Velocity::calculate_angle(1.0, -1.0), 315.0, 1e-3));

    // 30 degrees off the x-axis in each quadrant
    let (x, y) = (3.0_f32.sqrt(), 1.0);
    assert!(approx_eq(Velocity::calculate_angle(x, y), 30.0, 1e-3));
    assert!(approx_eq(Velocity::calculate_angle(-x, y), 150.0, 1e-3));
    assert!(approx_eq(Velocity::calculate_angle(-x, -y), 210.0, 1e-3));
    assert!(approx_eq(Velocity::calculate_angle(x, -y), 330.0, 1e-3));
}

#[test]
fn test_zero_vector_angle_is_defined() {
    assert_eq!(Velocity::calculate_angle(0.0, 0.0), 90.0);
}

#[test]
fn test_angle_always_normalized() {
    for i in -20..20 {
        for j in -20..20 {
            let angle = Velocity::calculate_angle(i as f32 * 7.3, j as f32 * 3.1);
            assert!((0.0..360.0).contains(&angle), "angle {angle} out of range");
        }
    }

    assert_eq!(Velocity::new(-90.0, 1.0).angle(), 270.0);
    assert_eq!(Velocity::new(360.0, 1.0).angle(), 0.0);
    assert!((0.0..360.0).contains(&Velocity::new(-1e-7, 1.0).angle()));

    let mut velocity = Velocity::new(10.0, 1.0);
    velocity.set_angle(725.0);
    assert!(approx_eq(velocity.angle(), 5.0, 1e-3));
}

#[test]
fn test_axial_motion() {
    let (vx, vy) = Velocity::new(90.0, 10.0).axial_motion();
    assert!(approx_eq(vx, 0.0, 1e-4));
    assert!(approx_eq(vy, 10.0, 1e-4));

    let (vx, vy) = Velocity::new(180.0, 10.0).axial_motion();
    assert!(approx_eq(vx, -10.0, 1e-4));
    assert!(approx_eq(vy, 0.0, 1e-4));
}

#[test]
fn test_deceleration_limits() {
    assert_eq!(deceleration_speed(500.0, 0.0, 40.0), 0.0);
    assert!(deceleration_speed(500.0, 0.01, 40.0) < 0.2);

    let far = deceleration_speed(500.0, 1.0e6, 40.0);
    assert!(far < 500.0);
    assert!(far > 499.9);

    let mut previous = 0.0;
    for distance in (1..200).map(|d| d as f32 * 5.0) {
        let speed = deceleration_speed(500.0, distance, 40.0);
        assert!(speed > previous);
        previous = speed;
    }
}

#[test]
fn test_friction_monotonic_and_bounded() {
    assert_eq!(friction(100.0, 0, 20.0), 0.0);

    let mut previous = 0.0;
    for eaten in 0..500 {
        let value = friction(100.0, eaten, 20.0);
        assert!(value >= previous);
        assert!(value <= 100.0);
        previous = value;
    }
    assert!(approx_eq(friction(100.0, 1000, 20.0), 100.0, 1e-3));
}

#[test]
fn test_friction_slows_grown_agent() {
    let target = Position::new(500.0, 400.0);

    let mut hungry = Agent::bubble(Position::new(400.0, 400.0)).with_max_friction(100.0);
    let mut fed = hungry.clone();
    fed.food_eaten = 20;

    set_velocity_for_target(&mut hungry, &target, 40.0, 20.0);
    set_velocity_for_target(&mut fed, &target, 40.0, 20.0);

    let expected_drag = 100.0 * 1.0_f32.tanh();
    assert!(approx_eq(
        hungry.velocity.speed - fed.velocity.speed,
        expected_drag,
        1e-3
    ));
}

#[test]
fn test_speed_never_negative() {
    let mut agent = Agent::bubble(Position::new(0.0, 0.0)).with_max_friction(1000.0);
    agent.food_eaten = 100;

    set_velocity_for_target(&mut agent, &Position::new(10.0, 0.0), 40.0, 20.0);

    assert_eq!(agent.velocity.speed, 0.0);
}

#[test]
fn test_pin_condition() {
    let dt = 1.0 / FPS;
    assert!(should_pin(5.0, 600.0, dt));
    assert!(!should_pin(11.0, 600.0, dt));
    assert!(!should_pin(20.0, 600.0, dt));
    assert!(!should_pin(0.0, 0.0, dt));
}

#[test]
fn test_pinned_agent_snaps_to_target() {
    let target = Position::new(105.3, 100.0);
    let mut agent =
        Agent::bubble(Position::new(100.0, 100.0)).with_velocity(Velocity::new(0.0, 600.0));

    let state = follow_target(&mut agent, &target, 1.0 / FPS);

    assert_eq!(state, MotionState::Pinned);
    assert!(agent.is_pinned());
    assert_eq!(agent.position, target);
}

#[test]
fn test_free_agent_moves_along_velocity() {
    let target = Position::new(120.0, 100.0);
    let mut agent =
        Agent::bubble(Position::new(100.0, 100.0)).with_velocity(Velocity::new(0.0, 600.0));
    agent.motion = MotionState::Pinned;

    let state = follow_target(&mut agent, &target, 1.0 / FPS);

    assert_eq!(state, MotionState::Free);
    assert!(approx_eq(agent.position.x, 110.0, 1e-3));
    assert!(approx_eq(agent.position.y, 100.0, 1e-3));
}

#[test]
fn test_commit_movement_is_noop_while_pinned() {
    let start = Position::new(50.0, 50.0);
    let mut agent = Agent::bubble(start).with_velocity(Velocity::new(45.0, 100.0));
    agent.motion = MotionState::Pinned;

    agent.commit_movement(1.0 / FPS);

    assert_eq!(agent.position, start);
}

#[test]
fn test_end_to_end_single_tick() {
    let mut agent = Agent::bubble(Position::new(400.0, 400.0)).with_max_velocity(500.0);
    let target = Position::new(400.0, 500.0);

    set_velocity_for_target(&mut agent, &target, 40.0, 20.0);

    assert!(approx_eq(agent.velocity.speed, 357.142_86, 1e-2));
    assert_eq!(agent.velocity.angle(), 90.0);

    let state = follow_target(&mut agent, &target, 1.0 / FPS);

    assert_eq!(state, MotionState::Free);
    assert!(approx_eq(agent.position.x, 400.0, 1e-3));
    assert!(approx_eq(agent.position.y, 400.0 + 357.142_86 / FPS, 1e-2));
}
