use ballpit_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new();
    world.rebuild_bounds(400, 800).unwrap();
    world.enable_perf_metrics(true);
    for i in 0..7 {
        world.bind_element(20.0 + i as f32 * 50.0, 10.0, 20.0).unwrap();
    }
    for _ in 0..10 {
        world.step();
    }
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 7);
    assert_eq!(stats.frame(), 10);
}
