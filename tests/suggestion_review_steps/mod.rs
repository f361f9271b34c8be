//! Step definitions for suggestion review behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
