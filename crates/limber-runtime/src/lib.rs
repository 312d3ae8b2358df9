//! Limber Runtime - Demo loop infrastructure
//!
//! Provides the pieces that drive a stick figure over time:
//! - `TickClock` - fixed-timestep accumulator producing animation ticks
//! - `MainLoop` - start/stop/next frame driver with a debug fail-stop mode
//! - `World` / `Actor` - floor, size and the hosted player
//! - `PlayerDriver` / `Controls` - scripted velocities from held controls
//! - `DemoConfig` - TOML configuration with environment overrides

mod clock;
pub mod config;
mod driver;
mod mainloop;
mod world;

pub use clock::TickClock;
pub use config::DemoConfig;
pub use driver::{Controls, PlayerDriver};
pub use mainloop::MainLoop;
pub use world::{Actor, World};
