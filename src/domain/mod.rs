pub mod config;
pub mod material;

pub use config::EngineConfig;
pub use material::{Material, MaterialPatch};
