#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use bubbles::simulation::food::Food;
use bubbles::simulation::food_generator::FoodGenerator;
use bubbles::simulation::geometry::{Circular, Position, Size};
use bubbles::simulation::render::{Shape, render};
use bubbles::simulation::time::TimeContext;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn test_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn long_lived_generator(rate: f32) -> FoodGenerator {
    FoodGenerator::new(Size::new(900.0, 675.0), rate, true).with_food(
        5.0,
        1.0e6,
        Food::DEFAULT_COLOR,
    )
}

fn count_spawned(generator: &mut FoodGenerator, time: &TimeContext, ticks: usize) -> usize {
    let mut rng = test_rng();
    let mut foods = Vec::new();
    let mut spawned = 0;
    for _ in 0..ticks {
        spawned += generator.tick(&mut foods, time, &mut rng).spawned;
    }
    assert_eq!(foods.len(), spawned);
    spawned
}

#[test]
fn test_food_lives_exactly_its_lifetime() {
    for (lifetime, fps) in [(5.0_f32, 60.0_f32), (2.0, 30.0), (1.5, 144.0)] {
        let ticks = (lifetime * fps).round() as usize;
        let dt = 1.0 / fps;

        let mut food = Food::with_properties(
            Position::new(10.0, 10.0),
            5.0,
            lifetime,
            Food::DEFAULT_COLOR,
        );
        for _ in 0..ticks - 1 {
            food.age_by(dt);
        }
        assert!(food.is_alive(), "expired early at {lifetime}s/{fps}fps");

        food.age_by(dt);
        assert!(!food.is_alive(), "outlived {lifetime}s/{fps}fps");
    }
}

#[test]
fn test_consumed_food_is_not_alive() {
    let mut food = Food::new(Position::new(1.0, 1.0));
    assert!(food.is_alive());
    assert_eq!(food.life_fraction(), 1.0);

    food.consume();

    assert!(!food.is_alive());
    assert_eq!(food.life_fraction(), 0.0);
    assert_eq!(food.existence_length(), Food::DEFAULT_EXISTENCE_LENGTH);
}

#[test]
fn test_food_area_and_bounds() {
    let food = Food::new(Position::new(0.0, 0.0));
    let size = food.rectangular_size();

    assert_eq!(size.as_tuple(), (10.0, 10.0));
    assert!((food.area() - std::f32::consts::PI * 25.0).abs() < 1e-3);
}

#[test]
fn test_generator_expires_food() {
    let mut generator = FoodGenerator::new(Size::new(100.0, 100.0), 1.0, false);
    let time = TimeContext::new(60.0);
    let mut rng = test_rng();
    let mut foods = vec![Food::new(Position::new(10.0, 10.0))];

    let mut expired = 0;
    for _ in 0..299 {
        expired += generator.tick(&mut foods, &time, &mut rng).expired;
    }
    assert_eq!(foods.len(), 1);
    assert_eq!(expired, 0);

    let report = generator.tick(&mut foods, &time, &mut rng);
    assert_eq!(report.expired, 1);
    assert_eq!(report.spawned, 0);
    assert!(foods.is_empty());
}

#[test]
fn test_spawn_count_matches_rate() {
    let time = TimeContext::new(60.0);

    for ticks in [600, 601, 605, 606, 3000] {
        let mut generator = long_lived_generator(10.0);
        let spawned = count_spawned(&mut generator, &time, ticks);
        assert_eq!(spawned, ticks * 10 / 60, "after {ticks} ticks");
    }
}

#[test]
fn test_spawn_rate_converges_for_fractional_interval() {
    let time = TimeContext::new(60.0);
    let mut generator = long_lived_generator(7.0);

    let spawned = count_spawned(&mut generator, &time, 6000);

    assert!(spawned.abs_diff(700) <= 1, "spawned {spawned}");
}

#[test]
fn test_time_factor_speeds_up_spawning() {
    let time = TimeContext::new(60.0).with_time_factor(2.0);
    let mut generator = long_lived_generator(10.0);

    assert_eq!(generator.spawn_interval(&time), 3.0);
    assert_eq!(count_spawned(&mut generator, &time, 60), 20);
}

#[test]
fn test_generating_off_holds_accumulator() {
    let time = TimeContext::new(60.0);
    let mut generator = long_lived_generator(10.0);
    generator.generating = false;

    assert_eq!(count_spawned(&mut generator, &time, 600), 0);
    assert_eq!(generator.frame_counter(), 0.0);

    generator.generating = true;
    assert_eq!(count_spawned(&mut generator, &time, 5), 0);
    assert_eq!(count_spawned(&mut generator, &time, 1), 1);
}

#[test]
fn test_fast_spawning_leaves_no_backlog() {
    let fast = TimeContext::new(60.0).with_time_factor(5.0);
    let mut generator = long_lived_generator(60.0);
    assert!(generator.spawn_interval(&fast) < 1.0);

    // one spawn per frame at most, however short the interval
    assert_eq!(count_spawned(&mut generator, &fast, 600), 600);
    assert!(generator.frame_counter() <= generator.spawn_interval(&fast));

    let slow = TimeContext::new(60.0);
    generator.generation_rate = 1.0;
    assert_eq!(count_spawned(&mut generator, &slow, 600), 10);
}

#[test]
fn test_spawned_food_within_bounds() {
    let generator = FoodGenerator::new(Size::new(320.0, 240.0), 1.0, true);
    let mut rng = test_rng();

    let foods = generator.generate_foods(500, &mut rng);

    assert_eq!(foods.len(), 500);
    for food in &foods {
        assert!((0.0..320.0).contains(&food.position.x));
        assert!((0.0..240.0).contains(&food.position.y));
        assert_eq!(food.remaining_life, Food::DEFAULT_EXISTENCE_LENGTH);
    }
}

#[test]
fn test_only_live_food_is_drawn() {
    let mut food = Food::new(Position::new(3.0, 4.0));
    let mut shapes: Vec<Shape> = Vec::new();

    render(&food, &mut shapes);
    assert_eq!(
        shapes,
        vec![Shape::Circle {
            center: Position::new(3.0, 4.0),
            radius: Food::DEFAULT_RADIUS,
            color: Food::DEFAULT_COLOR,
        }]
    );

    food.consume();
    shapes.clear();
    render(&food, &mut shapes);
    assert!(shapes.is_empty());
}
