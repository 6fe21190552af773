// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Generation properties across a range of configurations.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use officetower_building::layout::{MIN_DEPTH, MIN_WIDTH};
use officetower_building::{
    generate_building, BayKind, BuildingConfig, CoreKind, Error, Volume, VolumeKind,
};

fn configs() -> Vec<BuildingConfig> {
    let mut configs = Vec::new();
    for floor_count in [1, 2, 5, 8, 20] {
        for bay_count in [1, 3, 8, 12] {
            configs.push(BuildingConfig {
                floor_count,
                bay_count,
                ..Default::default()
            });
        }
    }
    configs.push(BuildingConfig {
        width: 20.0,
        depth: 14.0,
        ground_floor_height: 5.5,
        upper_floor_height: 2.8,
        floor_count: 4,
        bay_count: 5,
    });
    for bay_count in [1, 2, 3, 20] {
        configs.push(BuildingConfig {
            width: MIN_WIDTH,
            depth: MIN_DEPTH,
            floor_count: 2,
            bay_count,
            ..Default::default()
        });
    }
    configs
}

/// Axis-aligned extents `(min, max)` on x and z
fn footprint(volume: &Volume) -> ([f64; 2], [f64; 2]) {
    let (hx, hz) = (volume.size.x / 2.0, volume.size.z / 2.0);
    (
        [volume.position.x - hx, volume.position.z - hz],
        [volume.position.x + hx, volume.position.z + hz],
    )
}

fn overlaps(a: &Volume, b: &Volume) -> bool {
    let (a_min, a_max) = footprint(a);
    let (b_min, b_max) = footprint(b);
    (0..2).all(|axis| a_min[axis] < b_max[axis] - 1e-9 && b_min[axis] < a_max[axis] - 1e-9)
}

#[test]
fn floor_offsets_are_prefix_sums() {
    for config in configs() {
        let building = generate_building(&config).unwrap();
        assert_eq!(building.floor_count(), config.floor_count);
        assert_eq!(building.floors[0].y_offset, 0.0);

        let mut expected = 0.0;
        for floor in &building.floors {
            assert_relative_eq!(floor.y_offset, expected, epsilon = 1e-9);
            expected += floor.height;
        }
        assert_relative_eq!(building.total_height(), expected, epsilon = 1e-9);
    }
}

#[test]
fn bay_rows_are_full_and_centered() {
    for config in configs() {
        let building = generate_building(&config).unwrap();
        for floor in &building.floors {
            let xs: Vec<f64> = floor.bay_row().map(|v| v.position.x).collect();
            assert_eq!(xs.len(), config.bay_count);
            assert_abs_diff_eq!(xs.iter().sum::<f64>(), 0.0, epsilon = 1e-9);
        }
    }
}

#[test]
fn reference_building_scenario() {
    let json = r#"{"width":48,"depth":9,"rdcHeight":4,"floorHeight":3,"totalFloors":8,"officeCount":8}"#;
    let config: BuildingConfig = serde_json::from_str(json).unwrap();
    let building = generate_building(&config).unwrap();

    assert_relative_eq!(building.floors[3].y_offset, 10.0);

    let ground = &building.floors[0];
    assert_eq!(ground.volumes_of(VolumeKind::Bay(BayKind::Garage)).count(), 8);
    assert_eq!(ground.volumes_of(VolumeKind::Bay(BayKind::Entrance)).count(), 2);
    let ground_cores = ground
        .volumes
        .iter()
        .filter(|v| matches!(v.kind, VolumeKind::Core(_)))
        .count();
    assert_eq!(ground_cores, 2);

    let fifth = &building.floors[5];
    assert_eq!(fifth.volumes_of(VolumeKind::Bay(BayKind::Office)).count(), 8);
    assert_eq!(fifth.volumes_of(VolumeKind::Bay(BayKind::Corridor)).count(), 1);
    assert_eq!(fifth.volumes_of(VolumeKind::Core(CoreKind::Stair)).count(), 1);
    assert_eq!(fifth.volumes_of(VolumeKind::Core(CoreKind::Elevator)).count(), 1);
}

#[test]
fn every_volume_fits_its_floor() {
    for config in configs() {
        let building = generate_building(&config).unwrap();
        for floor in &building.floors {
            for volume in &floor.volumes {
                let top = volume.position.y + volume.size.y / 2.0;
                let bottom = volume.position.y - volume.size.y / 2.0;
                assert!(bottom >= -1e-9, "{} below floor", volume.label);
                assert!(top <= floor.height + 1e-9, "{} above ceiling", volume.label);
                assert!(volume.size.iter().all(|s| *s >= 0.0), "{} has negative size", volume.label);

                let (min, max) = footprint(volume);
                let (half_w, half_d) = (config.width / 2.0, config.depth / 2.0);
                assert!(
                    min[0] >= -half_w - 1e-9 && max[0] <= half_w + 1e-9,
                    "{} leaves the footprint along x in {:?}",
                    volume.label,
                    config
                );
                assert!(
                    min[1] >= -half_d - 1e-9 && max[1] <= half_d + 1e-9,
                    "{} leaves the footprint along z in {:?}",
                    volume.label,
                    config
                );
            }
        }
    }
}

#[test]
fn cores_stay_inside_the_walls() {
    for config in configs() {
        let building = generate_building(&config).unwrap();
        let inner_x = config.width / 2.0 - 0.2;
        for core in building.floors[0]
            .volumes
            .iter()
            .filter(|v| matches!(v.kind, VolumeKind::Core(_)))
        {
            let (min, max) = footprint(core);
            assert!(min[0] >= -inner_x - 1e-9 && max[0] <= inner_x + 1e-9);
            assert!(min[1] >= -config.depth / 2.0 + 0.2 - 1e-9);
        }
    }
}

#[test]
fn bays_and_cores_never_overlap() {
    for config in configs() {
        let building = generate_building(&config).unwrap();
        for floor in &building.floors {
            let interior: Vec<&Volume> = floor
                .volumes
                .iter()
                .filter(|v| matches!(v.kind, VolumeKind::Bay(_) | VolumeKind::Core(_)))
                .collect();

            for (i, a) in interior.iter().enumerate() {
                assert!(a.size.x > 0.0 && a.size.z > 0.0, "{} is empty", a.label);
                for b in &interior[i + 1..] {
                    assert!(
                        !overlaps(a, b),
                        "{} overlaps {} on floor {} of {:?}",
                        a.label,
                        b.label,
                        floor.index,
                        config
                    );
                }
            }
        }
    }
}

#[test]
fn only_bays_beside_the_cores_are_shortened() {
    let building = generate_building(&BuildingConfig::default()).unwrap();
    for floor in &building.floors {
        let depths: Vec<f64> = floor.bay_row().map(|b| b.size.z).collect();
        assert!(depths[0] < depths[1]);
        assert!(depths[1..].iter().all(|d| (*d - depths[1]).abs() < 1e-9));
    }
}

#[test]
fn invalid_configs_produce_nothing() {
    let cases = [
        BuildingConfig {
            width: 0.0,
            ..Default::default()
        },
        BuildingConfig {
            width: 4.0,
            depth: 2.0,
            bay_count: 2,
            ..Default::default()
        },
        BuildingConfig {
            ground_floor_height: -4.0,
            ..Default::default()
        },
        BuildingConfig {
            floor_count: 0,
            ..Default::default()
        },
        BuildingConfig {
            bay_count: 0,
            ..Default::default()
        },
    ];

    for config in cases {
        let error = generate_building(&config).unwrap_err();
        assert!(error.to_string().starts_with("Invalid configuration"));
    }

    assert_eq!(
        generate_building(&BuildingConfig {
            bay_count: 0,
            ..Default::default()
        }),
        Err(Error::ZeroBayCount)
    );
}
