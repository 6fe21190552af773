// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Perspective camera and its fixed poses

use crate::animation::Interpolate;
use crate::settings::CameraSettings;
use nalgebra::{Matrix4, Perspective3, Point3, Vector3};
use officetower_building::Building;
use serde::{Deserialize, Serialize};

/// Where the camera sits and what it looks at (the orbit target)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CameraPose {
    pub position: Point3<f64>,
    pub target: Point3<f64>,
}

impl CameraPose {
    pub fn new(position: Point3<f64>, target: Point3<f64>) -> Self {
        Self { position, target }
    }

    /// Distance from position to target
    #[inline]
    pub fn distance(&self) -> f64 {
        (self.position - self.target).norm()
    }
}

impl Interpolate for CameraPose {
    fn lerp(&self, other: &Self, t: f64) -> Self {
        Self {
            position: self.position + (other.position - self.position) * t,
            target: self.target + (other.target - self.target) * t,
        }
    }
}

/// Camera-space up vector for a given viewing direction.
///
/// World +Y unless the view is (nearly) vertical; straight-down views put the
/// back of the building at the top of the screen.
pub(crate) fn up_for(forward: &Vector3<f64>) -> Vector3<f64> {
    if forward.cross(&Vector3::y()).norm_squared() < 1e-12 * forward.norm_squared() {
        -Vector3::z()
    } else {
        Vector3::y()
    }
}

/// Perspective camera
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub pose: CameraPose,
    /// Vertical field of view in radians
    pub fov_y: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Camera {
    pub fn new(settings: &CameraSettings, pose: CameraPose, width: u32, height: u32) -> Self {
        let mut camera = Self {
            pose,
            fov_y: settings.fov_y_degrees.to_radians(),
            aspect: 1.0,
            near: settings.near,
            far: settings.far,
        };
        camera.resize(width, height);
        camera
    }

    /// Recompute projection parameters for a new viewport.
    /// A zero-sized viewport keeps the previous aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f64 / height as f64;
        }
    }

    pub fn view_matrix(&self) -> Matrix4<f64> {
        let forward = self.pose.target - self.pose.position;
        Matrix4::look_at_rh(&self.pose.position, &self.pose.target, &up_for(&forward))
    }

    pub fn projection_matrix(&self) -> Matrix4<f64> {
        Perspective3::new(self.aspect, self.fov_y, self.near, self.far).to_homogeneous()
    }
}

/// Straight-down pose high enough to frame the whole footprint
pub fn planar_pose(building: &Building, settings: &CameraSettings) -> CameraPose {
    let config = &building.config;
    let half_fov = settings.fov_y_degrees.to_radians() / 2.0;
    let half_extent = config.width.max(config.depth) / 2.0;
    let height = building.total_height() + 1.1 * half_extent / half_fov.tan();

    CameraPose::new(Point3::new(0.0, height, 0.0), Point3::origin())
}

/// Elevated oblique pose looking at the vertical center of the building
pub fn orbit_pose(building: &Building) -> CameraPose {
    let width = building.config.width;
    let center_y = building.total_height() / 2.0;

    CameraPose::new(
        Point3::new(0.8 * width, center_y + 0.6 * width, 0.8 * width),
        Point3::new(0.0, center_y, 0.0),
    )
}
