//! Lunatone - astronomical geometry and weather engine for an ambient
//! moon sonification installation
//!
//! Converts calendar time at a fixed observation point into a moon phase
//! fraction, an apparent sky position, a projected screen position, and a
//! rendered phase mask, and resolves a layered manual/automatic weather
//! condition. Scheduling, audio synthesis, and pixel painting live outside
//! this crate.

pub mod core;
pub mod mapping;
pub mod render;
pub mod weather;
