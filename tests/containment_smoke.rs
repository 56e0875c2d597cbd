use ballpit_engine::{BodyHandle, EngineConfig, WorldCore};

const EPS: f32 = 2.0;

fn world(width: u32, height: u32, seed: u64) -> WorldCore {
    let mut world = WorldCore::new(EngineConfig::default().with_seed(seed)).unwrap();
    world.rebuild_bounds(width, height).unwrap();
    world
}

fn assert_inside(world: &WorldCore, width: f32, height: f32) {
    for tracked in world.read_poses() {
        let p = tracked.pose;
        assert!(p.x >= -EPS && p.x <= width + EPS, "x out of bounds: {}", p.x);
        assert!(p.y >= -EPS && p.y <= height + EPS, "y out of bounds: {}", p.y);
    }
}

#[test]
fn balls_without_impulse_stay_inside() {
    let mut world = world(400, 800, 1);
    for row in 0..3 {
        for col in 0..6 {
            world
                .bind_element(10.0 + col as f32 * 62.0, 20.0 + row as f32 * 200.0, 20.0)
                .unwrap();
        }
    }

    for _ in 0..600 {
        world.step();
        assert_inside(&world, 400.0, 800.0);
    }
}

#[test]
fn modest_tilt_keeps_balls_inside() {
    let mut world = world(400, 800, 7);
    for col in 0..5 {
        world.bind_element(20.0 + col as f32 * 70.0, 380.0, 24.0).unwrap();
    }

    // Tilt toward the bottom-left corner, then back toward top-right.
    for frame in 0..600 {
        let (x, y) = if frame < 300 { (-0.05, 0.1) } else { (0.05, -0.1) };
        world.apply_impulse_to_all(x, y);
        world.step();
        assert_inside(&world, 400.0, 800.0);
    }
}

#[test]
fn sixty_ticks_from_the_top_edge() {
    let mut world = world(400, 800, 99);
    let handle = world.bind_element(190.0, 10.0, 20.0).unwrap();

    for _ in 0..60 {
        world.step();
    }
    let pose = world.pose(handle).unwrap();
    assert!((0.0..=800.0).contains(&pose.y));
    // No gravity: drift is bounded by the unit-range initial velocity.
    assert!(pose.y - 30.0 < 51.0);
    assert!(pose.x - 210.0 < 51.0);
}

#[test]
fn handles_survive_unrelated_unbinds() {
    let mut world = world(300, 300, 3);
    let a = world.bind_element(20.0, 20.0, 15.0).unwrap();
    let b = world.bind_element(120.0, 20.0, 15.0).unwrap();
    let c = world.bind_element(220.0, 20.0, 15.0).unwrap();

    world.unbind_element(b).unwrap();
    let d = world.bind_element(120.0, 150.0, 15.0).unwrap();

    assert!(world.pose(a).is_some());
    assert!(world.pose(b).is_none());
    assert!(world.pose(c).is_some());
    assert!(world.pose(d).is_some());
    assert_ne!(b, d);

    let listed: Vec<BodyHandle> = world.handles();
    assert_eq!(listed.len(), 3);
    assert!(listed.contains(&a) && listed.contains(&c) && listed.contains(&d));
}

#[test]
fn config_json_controls_ratio() {
    let mut world: WorldCore =
        WorldCore::from_config_json(r#"{"ratio": 2.0, "seed": 5}"#).unwrap();
    world.rebuild_bounds(100, 100).unwrap();
    let handle = world.bind_element(10.0, 10.0, 5.0).unwrap();
    let pose = world.pose(handle).unwrap();
    assert!((pose.x - 15.0).abs() < 1e-3);
    assert!((pose.y - 15.0).abs() < 1e-3);
}
