//! The navigated body's transform
//!
//! The engine drives whatever scene node the caller owns through this trait,
//! so it never touches rendering resources itself.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Position plus rotation about +z (radians, counter-clockwise)
pub trait AgentTransform {
    fn position(&self) -> DVec3;
    fn set_position(&mut self, position: DVec3);
    fn rotation_z(&self) -> f64;
    fn set_rotation_z(&mut self, angle: f64);

    #[inline]
    fn translate(&mut self, delta: DVec3) {
        let position = self.position();
        self.set_position(position + delta);
    }
}

/// Plain transform for headless use and tests
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: DVec3,
    pub rotation_z: f64,
}

impl Pose {
    pub fn new(position: DVec3, rotation_z: f64) -> Self {
        Self {
            position,
            rotation_z,
        }
    }
}

impl AgentTransform for Pose {
    fn position(&self) -> DVec3 {
        self.position
    }

    fn set_position(&mut self, position: DVec3) {
        self.position = position;
    }

    fn rotation_z(&self) -> f64 {
        self.rotation_z
    }

    fn set_rotation_z(&mut self, angle: f64) {
        self.rotation_z = angle;
    }
}

impl<T: AgentTransform + ?Sized> AgentTransform for &mut T {
    fn position(&self) -> DVec3 {
        (**self).position()
    }

    fn set_position(&mut self, position: DVec3) {
        (**self).set_position(position);
    }

    fn rotation_z(&self) -> f64 {
        (**self).rotation_z()
    }

    fn set_rotation_z(&mut self, angle: f64) {
        (**self).set_rotation_z(angle);
    }
}
