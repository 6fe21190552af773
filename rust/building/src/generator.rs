// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Procedural building generation from a building-wide configuration

use crate::config::BuildingConfig;
use crate::error::Result;
use crate::layout::{
    bay_center_x, bay_meets_cores, inner_depth, interior_height, BAY_GAP, CORE_CLEARANCE,
    CORE_HEIGHT_RATIO, CORE_OFFSETS, CORE_SIZE, CORRIDOR_DEPTH_RATIO, ENTRANCE_WIDTH,
    GARAGE_DEPTH_RATIO, SLAB_THICKNESS, WALL_THICKNESS,
};
use crate::types::{
    floor_label, BayKind, Building, CoreKind, Floor, SlabKind, Volume, VolumeId, VolumeKind,
};
use crate::viewpoints::floor_viewpoints;
use nalgebra::{Point3, Vector3};

/// Generate the full building described by `config`.
///
/// The configuration is validated first; on error no floor is produced.
/// Generation is deterministic: the same configuration always yields the
/// same labels, sizes and positions.
pub fn generate_building(config: &BuildingConfig) -> Result<Building> {
    config.validate()?;

    let floors: Vec<Floor> = (0..config.floor_count)
        .map(|index| generate_floor(config, index))
        .collect();

    tracing::info!(
        floors = floors.len(),
        volumes = floors.iter().map(|f| f.volumes.len()).sum::<usize>(),
        total_height = config.total_height(),
        "Generated building"
    );

    Ok(Building {
        config: config.clone(),
        floors,
    })
}

/// Sequential volume emitter for one floor
struct FloorBuilder {
    floor: usize,
    volumes: Vec<Volume>,
}

impl FloorBuilder {
    fn new(floor: usize) -> Self {
        Self {
            floor,
            volumes: Vec::new(),
        }
    }

    fn push(
        &mut self,
        label: impl Into<String>,
        kind: VolumeKind,
        size: Vector3<f64>,
        position: Point3<f64>,
    ) {
        let id = VolumeId {
            floor: self.floor,
            index: self.volumes.len(),
        };
        self.volumes.push(Volume {
            id,
            label: label.into(),
            kind,
            size,
            position,
        });
    }
}

/// Generate a single floor in its own local space
fn generate_floor(config: &BuildingConfig, index: usize) -> Floor {
    let height = config.floor_height(index);
    let mut builder = FloorBuilder::new(index);

    emit_envelope(&mut builder, config, height);
    if index == 0 {
        emit_ground_bays(&mut builder, config, height);
    } else {
        emit_office_bays(&mut builder, config, height);
    }
    emit_cores(&mut builder, config, height);

    tracing::debug!(
        floor = index,
        volumes = builder.volumes.len(),
        height,
        "Generated floor"
    );

    Floor {
        index,
        label: floor_label(index),
        height,
        y_offset: config.y_offset(index),
        volumes: builder.volumes,
        viewpoints: floor_viewpoints(config, index),
    }
}

/// Slabs, back wall, side walls and the glass street facade
fn emit_envelope(builder: &mut FloorBuilder, config: &BuildingConfig, height: f64) {
    let (w, d) = (config.width, config.depth);
    let inner_h = interior_height(height);
    let mid_y = height / 2.0;

    builder.push(
        "Floor slab",
        VolumeKind::Slab(SlabKind::Floor),
        Vector3::new(w, SLAB_THICKNESS, d),
        Point3::new(0.0, SLAB_THICKNESS / 2.0, 0.0),
    );
    builder.push(
        "Ceiling slab",
        VolumeKind::Slab(SlabKind::Ceiling),
        Vector3::new(w, SLAB_THICKNESS, d),
        Point3::new(0.0, height - SLAB_THICKNESS / 2.0, 0.0),
    );
    builder.push(
        "Back wall",
        VolumeKind::Wall,
        Vector3::new(w, inner_h, WALL_THICKNESS),
        Point3::new(0.0, mid_y, -d / 2.0 + WALL_THICKNESS / 2.0),
    );

    let side_depth = d - WALL_THICKNESS;
    let side_z = WALL_THICKNESS / 2.0;
    builder.push(
        "Left wall",
        VolumeKind::Wall,
        Vector3::new(WALL_THICKNESS, inner_h, side_depth),
        Point3::new(-w / 2.0 + WALL_THICKNESS / 2.0, mid_y, side_z),
    );
    builder.push(
        "Right wall",
        VolumeKind::Wall,
        Vector3::new(WALL_THICKNESS, inner_h, side_depth),
        Point3::new(w / 2.0 - WALL_THICKNESS / 2.0, mid_y, side_z),
    );

    builder.push(
        "Street facade",
        VolumeKind::Facade,
        Vector3::new(w, inner_h, 0.0),
        Point3::new(0.0, mid_y, d / 2.0),
    );
}

/// Garage row against the back wall, two entrances in the street-side strip
fn emit_ground_bays(builder: &mut FloorBuilder, config: &BuildingConfig, height: f64) {
    let (w, d) = (config.width, config.depth);
    let inner_h = interior_height(height);
    let mid_y = height / 2.0;
    let back = -d / 2.0 + WALL_THICKNESS;

    let garage_depth = inner_depth(d) * GARAGE_DEPTH_RATIO;
    emit_bay_row(
        builder,
        config,
        height,
        ("Garage", BayKind::Garage),
        back + BAY_GAP / 2.0,
        back + garage_depth - BAY_GAP / 2.0,
    );

    let strip_depth = inner_depth(d) - garage_depth;
    let strip_z = back + garage_depth + strip_depth / 2.0;
    let entrance_width = ENTRANCE_WIDTH.min(w / 2.0 - 2.0 * WALL_THICKNESS);

    for (label, x) in [("Entrance A", -w / 4.0), ("Entrance B", w / 4.0)] {
        builder.push(
            label,
            VolumeKind::Bay(BayKind::Entrance),
            Vector3::new(entrance_width, inner_h, strip_depth - BAY_GAP),
            Point3::new(x, mid_y, strip_z),
        );
    }
}

/// Office row against the back wall, one corridor along the street facade
fn emit_office_bays(builder: &mut FloorBuilder, config: &BuildingConfig, height: f64) {
    let (w, d) = (config.width, config.depth);
    let inner_h = interior_height(height);
    let mid_y = height / 2.0;
    let back = -d / 2.0 + WALL_THICKNESS;

    let corridor_depth = inner_depth(d) * CORRIDOR_DEPTH_RATIO;
    let office_depth = inner_depth(d) - corridor_depth - BAY_GAP;
    emit_bay_row(
        builder,
        config,
        height,
        ("Office", BayKind::Office),
        back,
        back + office_depth,
    );

    builder.push(
        "Corridor",
        VolumeKind::Bay(BayKind::Corridor),
        Vector3::new(w - 2.0 * WALL_THICKNESS, inner_h, corridor_depth),
        Point3::new(0.0, mid_y, d / 2.0 - corridor_depth / 2.0),
    );
}

/// One row of `bayCount` bays spanning `z_min..z_max`, centered on x = 0.
///
/// Bays that share floor area with the cores start [`CORE_CLEARANCE`] in
/// front of the back wall instead, so no bay contains a shaft.
fn emit_bay_row(
    builder: &mut FloorBuilder,
    config: &BuildingConfig,
    height: f64,
    (name, kind): (&str, BayKind),
    z_min: f64,
    z_max: f64,
) {
    let inner_h = interior_height(height);
    let mid_y = height / 2.0;
    let pitch = config.bay_pitch();
    let bay_width = pitch - BAY_GAP;
    let half = bay_width / 2.0;
    let core_front = -config.depth / 2.0 + WALL_THICKNESS + CORE_CLEARANCE;

    for i in 0..config.bay_count {
        let x = bay_center_x(i, config.bay_count, pitch);
        let z_min = if bay_meets_cores(x - half, x + half, config.width) {
            z_min.max(core_front)
        } else {
            z_min
        };

        builder.push(
            format!("{} {}", name, i + 1),
            VolumeKind::Bay(kind),
            Vector3::new(bay_width, inner_h, z_max - z_min),
            Point3::new(x, mid_y, (z_min + z_max) / 2.0),
        );
    }
}

/// Stair and elevator shafts in the back left corner, on every floor
fn emit_cores(builder: &mut FloorBuilder, config: &BuildingConfig, height: f64) {
    let core_h = height * CORE_HEIGHT_RATIO;
    let left = -config.width / 2.0;
    let z = -config.depth / 2.0 + WALL_THICKNESS + CORE_SIZE / 2.0;

    let cores = [
        ("Stair", CoreKind::Stair),
        ("Elevator", CoreKind::Elevator),
    ];
    for ((label, kind), offset) in cores.into_iter().zip(CORE_OFFSETS) {
        builder.push(
            label,
            VolumeKind::Core(kind),
            Vector3::new(CORE_SIZE, core_h, CORE_SIZE),
            Point3::new(left + offset, core_h / 2.0, z),
        );
    }
}
