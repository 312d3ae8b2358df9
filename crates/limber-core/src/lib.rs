//! Limber Core - Foundational types for the Limber stick-figure engine
//!
//! This crate provides the core types that all other Limber crates depend on:
//! - `Vec2` - 2D points and displacements
//! - `Color` - RGBA colours for draw commands
//! - `easing` - Pure easing functions and the `calc` blend operator
//! - `SecondOrderDynamics` - Critically-damped style value smoothing
//! - Error types and Result alias

mod dynamics;
pub mod easing;
mod error;
mod types;

pub use dynamics::SecondOrderDynamics;
pub use error::{LimberError, Result};
pub use types::{Color, Vec2, EPSILON};
