//! Deterministic navigation simulation
//!
//! All steering logic lives here. This module must be pure and deterministic:
//! - Time only comes from the caller's `now`
//! - No I/O, no timers, no threads
//! - No rendering or platform dependencies

pub mod navigation;
pub mod state;
pub mod transform;

pub use navigation::Navigation;
pub use state::NavState;
pub use transform::{AgentTransform, Pose};
