//! Core building blocks shared by every layer of the engine.

pub mod units;

pub use units::UnitConverter;
