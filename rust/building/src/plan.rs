// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Top-down floor plans for the planar view

use crate::types::{Floor, VolumeKind};
use serde::{Deserialize, Serialize};

/// A labeled axis-aligned rectangle on the XZ plane
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanRect {
    pub label: String,
    pub kind: VolumeKind,
    /// (x, z) of the corner with the smallest coordinates
    pub min: [f64; 2],
    /// (x, z) of the corner with the largest coordinates
    pub max: [f64; 2],
}

impl PlanRect {
    pub fn width(&self) -> f64 {
        self.max[0] - self.min[0]
    }

    pub fn depth(&self) -> f64 {
        self.max[1] - self.min[1]
    }

    pub fn center(&self) -> [f64; 2] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
        ]
    }
}

/// Floor seen from above
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlan {
    pub floor: usize,
    pub label: String,
    pub elevation: f64,
    pub rects: Vec<PlanRect>,
}

/// Project every non-slab volume of `floor` onto the XZ plane, in generation order.
pub fn floor_plan(floor: &Floor) -> FloorPlan {
    let rects = floor
        .volumes
        .iter()
        .filter(|v| !matches!(v.kind, VolumeKind::Slab(_)))
        .map(|v| {
            let (hx, hz) = (v.size.x / 2.0, v.size.z / 2.0);
            PlanRect {
                label: v.label.clone(),
                kind: v.kind,
                min: [v.position.x - hx, v.position.z - hz],
                max: [v.position.x + hx, v.position.z + hz],
            }
        })
        .collect();

    FloorPlan {
        floor: floor.index,
        label: floor.label.clone(),
        elevation: floor.y_offset,
        rects,
    }
}
