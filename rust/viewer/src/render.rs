// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-frame render list

use crate::controller::ViewController;
use crate::materials::{Material, MaterialStyle};
use nalgebra::{Matrix4, Vector3};
use officetower_building::{Building, VolumeId};
use officetower_geometry::Shape;
use serde::{Deserialize, Serialize};

/// One volume to draw: its primitive (built at `size`) placed by `world`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DrawItem {
    pub id: VolumeId,
    pub label: String,
    pub shape: Shape,
    pub size: [f64; 3],
    /// Column-major primitive-to-world matrix
    pub world: [f32; 16],
    pub material: Material,
    pub style: MaterialStyle,
}

/// Everything the render step needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Column-major view matrix
    pub view: [f32; 16],
    /// Column-major projection matrix
    pub projection: [f32; 16],
    pub camera_position: [f64; 3],
    pub items: Vec<DrawItem>,
}

#[inline]
fn to_gpu(matrix: &Matrix4<f64>) -> [f32; 16] {
    let mut out = [0.0f32; 16];
    out.copy_from_slice(matrix.cast::<f32>().as_slice());
    out
}

/// Floor offset, then uniform reveal scale about the floor base
fn floor_matrix(y_offset: f64, scale: f64) -> Matrix4<f64> {
    Matrix4::new_translation(&Vector3::new(0.0, y_offset, 0.0)) * Matrix4::new_scaling(scale)
}

/// Collect draw items for every visible floor
pub fn build_frame(building: &Building, controller: &ViewController) -> Frame {
    let camera = controller.camera();
    let mut items = Vec::new();

    for node in controller.scene().floors.iter().filter(|f| f.visible) {
        let Some(floor) = building.floor(node.index) else {
            continue;
        };
        let placement = floor_matrix(floor.y_offset, node.scale);

        for (volume, state) in floor.volumes.iter().zip(&node.nodes) {
            items.push(DrawItem {
                id: volume.id,
                label: volume.label.clone(),
                shape: volume.shape(),
                size: [volume.size.x, volume.size.y, volume.size.z],
                world: to_gpu(&(placement * volume.local_transform())),
                material: state.material,
                style: state.material.style(),
            });
        }
    }

    let position = camera.pose.position;
    Frame {
        view: to_gpu(&camera.view_matrix()),
        projection: to_gpu(&camera.projection_matrix()),
        camera_position: [position.x, position.y, position.z],
        items,
    }
}
