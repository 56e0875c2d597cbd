#![cfg(target_arch = "wasm32")]

use ballpit_engine::World;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn facade_round_trip() {
    let mut world = World::new();
    world.rebuild_bounds(400, 800).unwrap();
    let handle = world.bind_element(190.0, 10.0, 20.0).unwrap();
    assert_ne!(handle, 0);
    assert_eq!(world.handles(), vec![handle]);

    world.apply_impulse_to_all(5.0, 0.0);
    let poses = world.advance_and_read_poses();
    assert_eq!(poses.len(), 3);
    assert!(poses[0] > 210.0);

    world.unbind_element(handle).unwrap();
    assert!(world.pose(handle).is_empty());
    assert!(world.unbind_element(handle).is_err());
}
