//! Type-safe wrappers for balldontlie data and bot configuration.

pub mod ids;
pub mod time;
