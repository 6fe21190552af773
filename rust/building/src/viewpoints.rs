// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Preset interior viewpoints per floor

use crate::config::BuildingConfig;
use crate::layout::{inner_depth, CORRIDOR_DEPTH_RATIO, GARAGE_DEPTH_RATIO, WALL_THICKNESS};
use crate::types::{Viewpoint, Viewpoints};
use nalgebra::Point3;

/// Standing eye height above the floor base
pub const EYE_HEIGHT: f64 = 1.6;
/// Distance of the street facade viewpoint in front of the building
pub const STREET_DISTANCE: f64 = 15.0;

/// Build the viewpoints of floor `index`, anchored at its `y_offset`.
pub fn floor_viewpoints(config: &BuildingConfig, index: usize) -> Viewpoints {
    let height = config.floor_height(index);
    let y = config.y_offset(index);
    let eye = y + EYE_HEIGHT.min(0.5 * height);
    let mid = y + 0.5 * height;

    let half_w = config.width / 2.0;
    let half_d = config.depth / 2.0;
    let back = -half_d + WALL_THICKNESS;

    let street = Viewpoint::new(
        "Street facade",
        Point3::new(0.0, mid, half_d + STREET_DISTANCE),
        Point3::new(0.0, mid, 0.0),
    );

    let mut viewpoints = Viewpoints::new();

    if index == 0 {
        let garage_depth = inner_depth(config.depth) * GARAGE_DEPTH_RATIO;
        let hall_z = (back + garage_depth + half_d) / 2.0;
        let garage_z = back + garage_depth / 2.0;

        viewpoints.push(Viewpoint::new(
            "Entrance hall",
            Point3::new(half_w / 2.0, eye, hall_z),
            Point3::new(-half_w / 2.0, eye, hall_z),
        ));
        viewpoints.push(Viewpoint::new(
            "Garage row",
            Point3::new(-half_w + 1.0, eye, hall_z),
            Point3::new(half_w, eye, garage_z),
        ));
    } else {
        let corridor_depth = inner_depth(config.depth) * CORRIDOR_DEPTH_RATIO;
        let corridor_z = half_d - corridor_depth / 2.0;

        viewpoints.push(Viewpoint::new(
            "Corridor",
            Point3::new(-half_w + 1.0, eye, corridor_z),
            Point3::new(half_w - 1.0, eye, corridor_z),
        ));
        viewpoints.push(Viewpoint::new(
            "Office row",
            Point3::new(0.0, eye, corridor_z),
            Point3::new(0.0, eye, back),
        ));
    }

    viewpoints.push(street);
    viewpoints
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ground_floor_names() {
        let names: Vec<_> = floor_viewpoints(&BuildingConfig::default(), 0)
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, ["Entrance hall", "Garage row", "Street facade"]);
    }

    #[test]
    fn test_upper_floor_names() {
        let names: Vec<_> = floor_viewpoints(&BuildingConfig::default(), 4)
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, ["Corridor", "Office row", "Street facade"]);
    }

    #[test]
    fn test_eye_level_follows_y_offset() {
        let config = BuildingConfig::default();
        let viewpoints = floor_viewpoints(&config, 3);

        // floor 3 starts at 10, eye 1.5 above (half of a 3 high floor)
        assert_relative_eq!(viewpoints[0].position.y, 11.5);
        assert_relative_eq!(viewpoints[0].target.y, 11.5);
        assert_relative_eq!(viewpoints[2].target.y, 11.5);
    }

    #[test]
    fn test_ground_eye_height() {
        let viewpoints = floor_viewpoints(&BuildingConfig::default(), 0);
        assert_relative_eq!(viewpoints[0].position.y, EYE_HEIGHT);
    }
}
