//! HUD presentation adapter
//!
//! Polls the navigation engine once per frame and turns its state into
//! display values. Nothing here writes back into the simulation.

use std::fmt;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::sim::{AgentTransform, NavState, Navigation};
use crate::signed_display_degrees;

/// Read-only snapshot of everything the engine exposes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub state: NavState,
    pub heading_degrees: f64,
    pub heading: f64,
    pub velocity: f64,
    pub velocity_direction: f64,
    pub position: DVec3,
    pub burst_visible: bool,
    /// Start of the running pulse, 0 when none
    pub burst_timer: f64,
}

impl Telemetry {
    pub fn capture<T: AgentTransform>(nav: &Navigation<T>) -> Self {
        Self {
            state: nav.state(),
            heading_degrees: nav.heading_degrees(),
            heading: nav.heading(),
            velocity: nav.velocity(),
            velocity_direction: nav.velocity_direction(),
            position: nav.position(),
            burst_visible: nav.burst_visible(),
            burst_timer: nav.burst_timer(),
        }
    }
}

/// Values for the control panel widgets
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HudReadout {
    /// Ship facing, signed degrees (right = +90, left = -90)
    pub spaceship_rotation: f64,
    pub spaceship_velocity: f64,
    /// Travel direction, same signed convention as the rotation
    pub velocity_direction: f64,
    pub engine_flame: bool,
    pub state: NavState,
}

impl HudReadout {
    pub fn from_telemetry(t: &Telemetry) -> Self {
        Self {
            spaceship_rotation: signed_display_degrees(t.heading_degrees),
            spaceship_velocity: t.velocity,
            velocity_direction: signed_display_degrees(t.velocity_direction.to_degrees()),
            engine_flame: t.burst_visible,
            state: t.state,
        }
    }

    pub fn poll<T: AgentTransform>(nav: &Navigation<T>) -> Self {
        Self::from_telemetry(&nav.telemetry())
    }
}

impl fmt::Display for HudReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:<13}] rot {:>7.1}°  vel {:>7.3}  dir {:>7.1}°{}",
            self.state.as_str(),
            self.spaceship_rotation,
            self.spaceship_velocity,
            self.velocity_direction,
            if self.engine_flame { "  BURST" } else { "" }
        )
    }
}
