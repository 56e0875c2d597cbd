//! Ballpit Engine - bounded 2D ball physics for display elements
//!
//! Architecture:
//! - core/          - Unit conversion between display and simulation space
//! - domain/        - Materials and engine configuration
//! - systems/       - Engine seam, body descriptions, registry and walls
//! - simulation/    - WorldCore facade and the JS-facing `World`
//!
//! A frame looks like: `step()` once, read every pose, draw. Bodies are
//! created from and reported in display coordinates; the solver only ever
//! sees simulation units.

pub mod core;
pub mod domain;
pub mod error;
pub mod systems;
pub mod simulation;

// Short paths for the most used modules
pub use systems::engine;
pub use systems::rigid_body;
pub use systems::rigid_body_system;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"Ballpit WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::units::UnitConverter;
pub use domain::{EngineConfig, Material, MaterialPatch};
pub use error::{EngineError, Result};
pub use rigid_body_system::{BodyHandle, Pose, TrackedPose};
pub use simulation::{PerfStats, World, WorldCore};
