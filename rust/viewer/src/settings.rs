// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Viewer settings

use crate::animation::AnimationStrategy;
use crate::controls::MIN_POLAR;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

fn check(field: &'static str, value: f64, ok: bool, expected: &'static str) -> Result<()> {
    if ok && value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidSettings {
            field,
            value,
            expected,
        })
    }
}

/// Projection parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CameraSettings {
    pub fov_y_degrees: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_y_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

/// Bounds on free orbit interaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct OrbitLimits {
    pub min_distance: f64,
    pub max_distance: f64,
    /// Largest angle from straight up, in radians (π/2 keeps the camera above ground level)
    pub max_polar_angle: f64,
    /// Distance multiplier for one zoom-in step (zoom-out uses its inverse)
    pub zoom_step: f64,
}

impl Default for OrbitLimits {
    fn default() -> Self {
        Self {
            min_distance: 1.0,
            max_distance: 200.0,
            max_polar_angle: std::f64::consts::FRAC_PI_2,
            zoom_step: 0.8,
        }
    }
}

/// Everything the view controller can be tuned with
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerSettings {
    pub animation: AnimationStrategy,
    pub camera: CameraSettings,
    pub orbit: OrbitLimits,
}

impl ViewerSettings {
    /// Check every bound the controls, camera and tweens rely on.
    ///
    /// Every value must be finite. NaN fails each check.
    pub fn validate(&self) -> Result<()> {
        if let AnimationStrategy::Eased { duration_ms, .. } = self.animation {
            check(
                "animation.durationMs",
                duration_ms,
                duration_ms >= 0.0,
                "a non-negative number of milliseconds",
            )?;
        }

        let camera = &self.camera;
        check(
            "camera.fovYDegrees",
            camera.fov_y_degrees,
            camera.fov_y_degrees > 0.0 && camera.fov_y_degrees < 180.0,
            "between 0 and 180 degrees",
        )?;
        check("camera.near", camera.near, camera.near > 0.0, "positive")?;
        check(
            "camera.far",
            camera.far,
            camera.far > camera.near,
            "greater than camera.near",
        )?;

        let orbit = &self.orbit;
        check(
            "orbit.minDistance",
            orbit.min_distance,
            orbit.min_distance > 0.0,
            "positive",
        )?;
        check(
            "orbit.maxDistance",
            orbit.max_distance,
            orbit.max_distance >= orbit.min_distance,
            "at least orbit.minDistance",
        )?;
        check(
            "orbit.maxPolarAngle",
            orbit.max_polar_angle,
            (MIN_POLAR..=PI).contains(&orbit.max_polar_angle),
            "between 0.001 and π radians",
        )?;
        check(
            "orbit.zoomStep",
            orbit.zoom_step,
            orbit.zoom_step > 0.0 && orbit.zoom_step < 1.0,
            "strictly between 0 and 1",
        )?;

        Ok(())
    }
}
