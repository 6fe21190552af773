// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Orbit controls: rotate, pan and zoom around the camera target

use crate::camera::{up_for, CameraPose};
use crate::settings::OrbitLimits;
use nalgebra::Vector3;

/// Smallest polar angle, keeps the offset off the vertical axis
pub const MIN_POLAR: f64 = 1e-3;

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    /// Free interaction allowed
    pub enabled: bool,
    pub limits: OrbitLimits,
}

impl OrbitControls {
    pub fn new(limits: OrbitLimits) -> Self {
        Self {
            enabled: false,
            limits,
        }
    }

    /// Rotate around the target. Returns false when disabled.
    pub fn rotate(&self, pose: &mut CameraPose, d_azimuth: f64, d_polar: f64) -> bool {
        if !self.enabled {
            return false;
        }

        let offset = pose.position - pose.target;
        let radius = offset.norm();
        if radius == 0.0 {
            return false;
        }

        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);

        let polar = (polar + d_polar).clamp(MIN_POLAR, self.limits.max_polar_angle);
        let azimuth = azimuth + d_azimuth;

        pose.position = pose.target
            + Vector3::new(
                radius * polar.sin() * azimuth.sin(),
                radius * polar.cos(),
                radius * polar.sin() * azimuth.cos(),
            );
        true
    }

    /// Translate position and target together in the view plane. Returns false when disabled.
    pub fn pan(&self, pose: &mut CameraPose, dx: f64, dy: f64) -> bool {
        if !self.enabled {
            return false;
        }

        let forward = pose.target - pose.position;
        let Some(forward) = forward.try_normalize(f64::EPSILON) else {
            return false;
        };
        let right = forward.cross(&up_for(&forward)).normalize();
        let up = right.cross(&forward);

        let delta = right * dx + up * dy;
        pose.position += delta;
        pose.target += delta;
        true
    }

    /// Scale the distance to the target, clamped to the limits. Returns false when disabled.
    pub fn zoom(&self, pose: &mut CameraPose, factor: f64) -> bool {
        if !self.enabled {
            return false;
        }
        self.zoom_unchecked(pose, factor);
        true
    }

    /// Zoom regardless of `enabled` (zoom buttons work in both modes)
    pub fn zoom_unchecked(&self, pose: &mut CameraPose, factor: f64) {
        let offset = pose.position - pose.target;
        let radius = offset.norm();
        if radius == 0.0 || !factor.is_finite() || factor <= 0.0 {
            return;
        }

        let new_radius =
            (radius * factor).clamp(self.limits.min_distance, self.limits.max_distance);
        pose.position = pose.target + offset * (new_radius / radius);
    }
}
