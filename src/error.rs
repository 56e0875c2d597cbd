//! Error types for the ballpit engine.

use thiserror::Error;

use crate::rigid_body_system::BodyHandle;

/// Errors surfaced by the simulation facade.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A body was requested before any bounds were set.
    #[error("world not initialized: call rebuild_bounds first")]
    WorldNotInitialized,

    /// Bounds must be strictly positive.
    #[error("invalid world dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width in display units.
        width: u32,
        /// Requested height in display units.
        height: u32,
    },

    /// Body radius must be positive and finite.
    #[error("invalid body radius: {0}")]
    InvalidRadius(f32),

    /// Configuration value out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Handle was already destroyed or belongs to a discarded world.
    #[error("stale body handle: {0:?}")]
    StaleHandle(BodyHandle),

    /// Configuration JSON failed to parse.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;
