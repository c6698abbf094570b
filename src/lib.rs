//! SpaceTruck navigation - deterministic planar ship steering
//!
//! Core modules:
//! - `sim`: Navigation engine (state machine, heading, inertial velocity, engine bursts)
//! - `config`: Data-driven tunables and control policies
//! - `hud`: Read-only presentation adapter polled once per frame
//! - `error`: Construction/configuration errors

pub mod config;
pub mod error;
pub mod hud;
pub mod sim;

pub use config::{BurstPolicy, NavigationConfig, RotationPolicy};
pub use error::{NavigationError, Result};
pub use hud::{HudReadout, Telemetry};
pub use sim::{AgentTransform, NavState, Navigation, Pose};

use glam::DVec3;

/// Navigation configuration constants
pub mod consts {
    /// Thrust magnitude added by one engine burst
    pub const DEFAULT_ENGINE_BURST_AMOUNT: f64 = 1.0;
    /// Rotation step in degrees per rotating tick
    pub const DEFAULT_ENGINE_ROTATION_AMOUNT: f64 = 1.0;
    /// How long one burst pulse persists (caller time units, usually ms)
    pub const DEFAULT_BURST_DURATION: f64 = 1000.0;

    /// Speeds below this collapse to exactly zero
    pub const VELOCITY_EPSILON: f64 = 1e-5;

    /// Full turn in degrees
    pub const FULL_TURN_DEGREES: f64 = 360.0;
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    wrap_to(angle, consts::FULL_TURN_DEGREES)
}

/// Wrap an angle in radians to [0, 2π)
#[inline]
pub fn wrap_radians(angle: f64) -> f64 {
    wrap_to(angle, std::f64::consts::TAU)
}

fn wrap_to(angle: f64, period: f64) -> f64 {
    let wrapped = angle.rem_euclid(period);
    // rem_euclid rounds tiny negatives up to exactly `period`
    if wrapped >= period { 0.0 } else { wrapped }
}

/// Forward-facing unit vector for an angle.
///
/// Angle 0 points along +y and positive angles turn counter-clockwise when
/// viewed from +z, so the vector is `(-sin α, cos α, 0)`. This is NOT the
/// usual `(cos α, sin α)`; mixing the two rotates the whole simulation by 90°.
#[inline]
pub fn forward_unit(angle: f64) -> DVec3 {
    DVec3::new(-angle.sin(), angle.cos(), 0.0)
}

/// Inverse of [`forward_unit`]: travel angle of a planar vector, in [0, 2π)
#[inline]
pub fn forward_angle(v: DVec3) -> f64 {
    wrap_radians(v.y.atan2(v.x) - std::f64::consts::FRAC_PI_2)
}

/// Angle in degrees as shown on the HUD: (-180, 180], clockwise positive
#[inline]
pub fn signed_display_degrees(degrees: f64) -> f64 {
    let mut d = wrap_degrees(degrees);
    if d > 180.0 {
        d -= consts::FULL_TURN_DEGREES;
    }
    -d
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    const EPS: f64 = 1e-9;

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-1.0), 359.0);
        assert_eq!(wrap_degrees(721.0), 1.0);
        assert_eq!(wrap_degrees(-1e-15), 0.0);
    }

    #[test]
    fn test_wrap_radians() {
        assert!((wrap_radians(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < EPS);
        assert!(wrap_radians(TAU).abs() < EPS);
        assert!(wrap_radians(-1e-18) < TAU);
    }

    #[test]
    fn test_forward_unit_convention() {
        let up = forward_unit(0.0);
        assert!(up.x.abs() < EPS && (up.y - 1.0).abs() < EPS);

        let left = forward_unit(FRAC_PI_2);
        assert!((left.x + 1.0).abs() < EPS && left.y.abs() < EPS);

        let right = forward_unit(-FRAC_PI_2);
        assert!((right.x - 1.0).abs() < EPS && right.y.abs() < EPS);

        let down = forward_unit(PI);
        assert!(down.x.abs() < EPS && (down.y + 1.0).abs() < EPS);
        assert_eq!(down.z, 0.0);
    }

    #[test]
    fn test_forward_angle_inverts_forward_unit() {
        for deg in [0.0, 45.0, 90.0, 180.0, 270.0, 359.0] {
            let a = f64::to_radians(deg);
            assert!((forward_angle(forward_unit(a)) - a).abs() < 1e-9, "{deg}");
        }
    }

    #[test]
    fn test_signed_display_degrees() {
        // Left turn of 90° shows as -90, right turn as +90
        assert_eq!(signed_display_degrees(90.0), -90.0);
        assert_eq!(signed_display_degrees(270.0), 90.0);
        assert_eq!(signed_display_degrees(180.0), -180.0);
        assert_eq!(signed_display_degrees(0.0), -0.0);
    }
}
