//! Spaceship navigation engine
//!
//! Turns discrete control requests (rotate left/right, burst, idle) plus a
//! caller-supplied clock into a heading, an inertial velocity and a position.
//!
//! Per frame the caller does:
//! 1. `set_state(..)` for whatever input is active
//! 2. `update(now)` once
//!
//! `update` runs the mode's action (one rotation step, or the burst pulse) and
//! then always moves the agent along its velocity, so the ship keeps coasting
//! after a burst ends.
//!
//! Angles use the forward-facing convention of [`forward_unit`]: 0 is +y.

use glam::DVec3;

use super::state::NavState;
use super::transform::{AgentTransform, Pose};
use crate::config::{BurstPolicy, NavigationConfig, RotationPolicy};
use crate::consts::VELOCITY_EPSILON;
use crate::error::Result;
use crate::hud::Telemetry;
use crate::{forward_angle, forward_unit, wrap_degrees, wrap_radians};

/// Navigation state for one agent, driving its transform in place
#[derive(Debug, Clone)]
pub struct Navigation<T: AgentTransform = Pose> {
    transform: T,
    config: NavigationConfig,
    state: NavState,
    /// Heading in degrees, [0, 360). Source of truth for the transform's rotation.
    heading_degrees: f64,
    /// Speed, never negative
    velocity: f64,
    /// Travel direction in radians, [0, 2π)
    velocity_direction: f64,
    /// Clock value at which the current pulse began
    burst_started_at: Option<f64>,
    /// Thrust flame visibility
    burst_visible: bool,
}

impl Default for Navigation<Pose> {
    fn default() -> Self {
        Self::with_defaults(Pose::default())
    }
}

impl<T: AgentTransform> Navigation<T> {
    /// Bind a navigation engine to `transform`.
    ///
    /// The initial heading is taken from the transform's rotation and written
    /// back wrapped. Fails only if a tunable is negative or not finite.
    pub fn new(transform: T, config: NavigationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::bind(transform, config))
    }

    /// Engine with default tunables (burst 1, rotation 1°, pulse 1000)
    pub fn with_defaults(transform: T) -> Self {
        Self::bind(transform, NavigationConfig::default())
    }

    fn bind(transform: T, config: NavigationConfig) -> Self {
        let initial = transform.rotation_z().to_degrees();
        let mut nav = Self {
            transform,
            config,
            state: NavState::Idle,
            heading_degrees: 0.0,
            velocity: 0.0,
            velocity_direction: 0.0,
            burst_started_at: None,
            burst_visible: false,
        };
        nav.set_heading_degrees(initial);
        nav
    }

    // === Accessors ===

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Heading in degrees, [0, 360)
    pub fn heading_degrees(&self) -> f64 {
        self.heading_degrees
    }

    /// Heading in radians, [0, 2π)
    pub fn heading(&self) -> f64 {
        wrap_radians(self.heading_degrees.to_radians())
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Travel direction in radians, [0, 2π). May differ from heading (drift).
    pub fn velocity_direction(&self) -> f64 {
        self.velocity_direction
    }

    pub fn position(&self) -> DVec3 {
        self.transform.position()
    }

    pub fn burst_visible(&self) -> bool {
        self.burst_visible
    }

    /// Start time of the running pulse, or 0 when no pulse is active.
    ///
    /// A pulse started at `now == 0.0` also reads 0 here even though it is
    /// running. Use [`Navigation::burst_started_at`] when 0 is a valid clock
    /// value.
    pub fn burst_timer(&self) -> f64 {
        self.burst_started_at.unwrap_or(0.0)
    }

    /// Start time of the running pulse, `None` when no pulse is active
    pub fn burst_started_at(&self) -> Option<f64> {
        self.burst_started_at
    }

    pub fn transform(&self) -> &T {
        &self.transform
    }

    pub fn telemetry(&self) -> Telemetry {
        Telemetry::capture(self)
    }

    // === Setup ===

    /// Set the heading (wrapped) and rotate the transform to match
    pub fn set_heading_degrees(&mut self, degrees: f64) {
        self.heading_degrees = wrap_degrees(degrees);
        self.transform.set_rotation_z(self.heading());
    }

    /// Seed the inertial state
    pub fn set_velocity(&mut self, speed: f64, direction: f64) {
        self.velocity = clamp_speed(speed.max(0.0));
        self.velocity_direction = wrap_radians(direction);
    }

    pub fn set_position(&mut self, position: DVec3) {
        self.transform.set_position(position);
    }

    // === Vectors ===

    /// Unit vector of the travel direction
    pub fn velocity_direction_unit_vector(&self) -> DVec3 {
        forward_unit(self.velocity_direction)
    }

    /// Unit vector the ship is facing
    pub fn heading_unit_vector(&self) -> DVec3 {
        forward_unit(self.heading())
    }

    /// Displacement applied by one move
    pub fn velocity_step(&self) -> DVec3 {
        self.velocity_direction_unit_vector() * self.velocity
    }

    /// Thrust vector added by one burst
    pub fn burst_step(&self) -> DVec3 {
        self.heading_unit_vector() * self.config.engine_burst_amount
    }

    // === State machine ===

    /// Request a mode change. Requests outside the transition table are ignored.
    pub fn set_state(&mut self, next: NavState) {
        if self.state.can_transition_to(next) {
            if self.state != next {
                log::debug!("navigation: {} -> {}", self.state, next);
            }
            self.state = next;
        } else {
            log::trace!("navigation: dropped {} -> {}", self.state, next);
        }
    }

    /// Advance one tick: run the current mode's action, then move
    pub fn update(&mut self, now: f64) {
        match self.state {
            NavState::RotatingLeft => self.rotate_left(),
            NavState::RotatingRight => self.rotate_right(),
            NavState::Burst => self.burst(now),
            NavState::Idle => {}
        }
        if self.state != NavState::Burst {
            self.expire_lapsed_burst(now);
        }
        self.move_agent();
    }

    // === Rotation ===

    /// One counter-clockwise step, only while rotating left
    pub fn rotate_left(&mut self) {
        if self.state == NavState::RotatingLeft {
            self.rotate_with(self.config.engine_rotation_amount);
        }
    }

    /// One clockwise step, only while rotating right
    pub fn rotate_right(&mut self) {
        if self.state == NavState::RotatingRight {
            self.rotate_with(-self.config.engine_rotation_amount);
        }
    }

    /// Turn by `degrees` (positive = left) while in either rotating mode.
    ///
    /// Under [`RotationPolicy::SelfTerminating`] the step ends the rotation,
    /// so the input layer must request the rotating mode again every tick.
    pub fn rotate_with(&mut self, degrees: f64) {
        if !self.state.is_rotating() {
            return;
        }
        self.set_heading_degrees(self.heading_degrees + degrees);
        if self.config.rotation_policy == RotationPolicy::SelfTerminating {
            self.set_state(NavState::Idle);
        }
    }

    // === Thrust ===

    /// Drive the burst pulse.
    ///
    /// The first call of a pulse stamps `now`, shows the flame and adds the
    /// thrust to the velocity. Later calls inside `burst_duration` keep the
    /// pulse alive without adding thrust again; the first call at or past the
    /// end closes it and returns to idle. Ignored while rotating, since the
    /// transition table has no rotating -> burst edge.
    pub fn burst(&mut self, now: f64) {
        if !self.state.can_transition_to(NavState::Burst) {
            log::trace!("navigation: burst ignored while {}", self.state);
            return;
        }
        if self.burst_started_at.is_none() {
            self.burst_started_at = Some(now);
            self.burst_visible = true;
            if self.velocity == 0.0 {
                self.velocity = clamp_speed(self.config.engine_burst_amount);
                self.velocity_direction = self.heading();
            } else {
                self.change_velocity_with_burst_amount();
            }
            log::debug!(
                "navigation: burst at {} -> speed {:.4}, direction {:.4}",
                now,
                self.velocity,
                self.velocity_direction
            );
        }

        if let Some(started) = self.burst_started_at {
            if now - started < self.config.burst_duration {
                self.set_state(NavState::Burst);
                self.burst_visible = true;
            } else {
                self.end_burst();
                self.set_state(NavState::Idle);
                log::debug!("navigation: burst ended at {}", now);
            }
        }
    }

    /// Add one burst of thrust along the heading to the current velocity
    pub fn change_velocity_with_burst_amount(&mut self) {
        let sum = self.velocity_step() + self.burst_step();
        let speed = clamp_speed(sum.length());
        if speed > 0.0 {
            self.velocity_direction = forward_angle(sum);
        }
        self.velocity = speed;
    }

    /// Interrupt the running pulse immediately
    pub fn cancel_burst(&mut self) {
        if self.burst_started_at.is_none() && self.state != NavState::Burst {
            return;
        }
        self.end_burst();
        if self.state == NavState::Burst {
            self.state = NavState::Idle;
        }
        log::debug!("navigation: burst cancelled");
    }

    /// Thrust input released; what happens depends on the burst policy
    pub fn release_burst(&mut self) {
        match self.config.burst_policy {
            BurstPolicy::TimeGated => {}
            BurstPolicy::CancelOnRelease => self.cancel_burst(),
        }
    }

    fn end_burst(&mut self) {
        self.burst_started_at = None;
        self.burst_visible = false;
    }

    /// A pulse left behind by an early idle request still ends on time
    fn expire_lapsed_burst(&mut self, now: f64) {
        if let Some(started) = self.burst_started_at {
            if now - started >= self.config.burst_duration {
                self.end_burst();
                log::debug!("navigation: lapsed burst expired at {}", now);
            }
        }
    }

    // === Motion ===

    /// Integrate one tick of travel. Stationary ships stay put.
    pub fn move_agent(&mut self) {
        if self.velocity == 0.0 {
            return;
        }
        let step = self.velocity_step();
        self.transform.translate(step);
        log::trace!("navigation: moved by {:?}", step);
    }
}

fn clamp_speed(speed: f64) -> f64 {
    if speed < VELOCITY_EPSILON { 0.0 } else { speed }
}
