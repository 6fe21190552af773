// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types of the generated building

use crate::config::BuildingConfig;
use crate::error::Result;
use nalgebra::{Matrix4, Point3, Vector3};
use officetower_geometry::{Mesh, Shape};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Which slab of a floor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SlabKind {
    Floor,
    Ceiling,
}

/// Occupiable units laid out along the floor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum BayKind {
    Garage,
    Entrance,
    Office,
    Corridor,
}

/// Vertical circulation shafts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum CoreKind {
    Elevator,
    Stair,
}

/// Volume classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum VolumeKind {
    Slab(SlabKind),
    /// Solid envelope wall
    Wall,
    /// Transparent street-facing glass
    Facade,
    Bay(BayKind),
    Core(CoreKind),
}

impl VolumeKind {
    /// Primitive used to draw this kind
    #[inline]
    pub fn shape(self) -> Shape {
        match self {
            VolumeKind::Facade => Shape::Plane,
            _ => Shape::Box,
        }
    }

    /// True for the repeated garage/office units of a bay row
    #[inline]
    pub fn is_repeated_bay(self) -> bool {
        matches!(self, VolumeKind::Bay(BayKind::Garage | BayKind::Office))
    }
}

/// Stable address of a volume: floor index plus position in that floor's list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VolumeId {
    pub floor: usize,
    pub index: usize,
}

/// A labeled box or plane positioned relative to its floor's origin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Volume {
    pub id: VolumeId,
    pub label: String,
    pub kind: VolumeKind,
    /// Local extents (width, height, depth); planes have zero depth
    pub size: Vector3<f64>,
    /// Center relative to the floor origin (floor base, footprint center)
    pub position: Point3<f64>,
}

impl Volume {
    #[inline]
    pub fn shape(&self) -> Shape {
        self.kind.shape()
    }

    /// Translation from primitive space into floor space
    #[inline]
    pub fn local_transform(&self) -> Matrix4<f64> {
        Matrix4::new_translation(&self.position.coords)
    }

    /// Tessellated volume in floor space
    pub fn mesh(&self) -> Result<Mesh> {
        let mesh = self.shape().mesh(self.size)?;
        Ok(mesh.transformed(&self.local_transform()))
    }
}

/// A named camera position/target pair for guided interior navigation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Viewpoint {
    pub name: String,
    pub position: Point3<f64>,
    pub target: Point3<f64>,
}

impl Viewpoint {
    pub fn new(name: impl Into<String>, position: Point3<f64>, target: Point3<f64>) -> Self {
        Self {
            name: name.into(),
            position,
            target,
        }
    }
}

/// Per-floor viewpoint list (three entries per floor)
pub type Viewpoints = SmallVec<[Viewpoint; 3]>;

/// One storey of the building
#[derive(Debug, Clone, PartialEq)]
pub struct Floor {
    pub index: usize,
    /// Display label ("RDC", "1er", "2e", ...)
    pub label: String,
    pub height: f64,
    /// Base elevation: sum of all lower floor heights
    pub y_offset: f64,
    pub volumes: Vec<Volume>,
    pub viewpoints: Viewpoints,
}

impl Floor {
    #[inline]
    pub fn is_ground(&self) -> bool {
        self.index == 0
    }

    /// The repeated garage/office units, left to right
    pub fn bay_row(&self) -> impl Iterator<Item = &Volume> {
        self.volumes.iter().filter(|v| v.kind.is_repeated_bay())
    }

    pub fn volumes_of(&self, kind: VolumeKind) -> impl Iterator<Item = &Volume> {
        self.volumes.iter().filter(move |v| v.kind == kind)
    }

    pub fn volume(&self, index: usize) -> Option<&Volume> {
        self.volumes.get(index)
    }

    /// Floor space to world space
    #[inline]
    pub fn world_transform(&self) -> Matrix4<f64> {
        Matrix4::new_translation(&Vector3::new(0.0, self.y_offset, 0.0))
    }

    /// Center of a volume in world space
    #[inline]
    pub fn world_position(&self, volume: &Volume) -> Point3<f64> {
        volume.position + Vector3::new(0.0, self.y_offset, 0.0)
    }

    /// All volumes of the floor merged into one world-space mesh
    pub fn merged_mesh(&self) -> Result<Mesh> {
        let mut merged = Mesh::new();
        for volume in &self.volumes {
            merged.merge(&volume.mesh()?);
        }
        merged.apply_transform(&self.world_transform());
        Ok(merged)
    }
}

/// The whole generated stack, ground floor first
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub config: BuildingConfig,
    pub floors: Vec<Floor>,
}

impl Building {
    #[inline]
    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    pub fn floor(&self, index: usize) -> Option<&Floor> {
        self.floors.get(index)
    }

    pub fn volume(&self, id: VolumeId) -> Option<&Volume> {
        self.floors.get(id.floor)?.volume(id.index)
    }

    /// Top of the highest ceiling slab
    pub fn total_height(&self) -> f64 {
        self.floors
            .last()
            .map(|f| f.y_offset + f.height)
            .unwrap_or(0.0)
    }

    pub fn viewpoints(&self, floor: usize) -> Option<&[Viewpoint]> {
        self.floors.get(floor).map(|f| f.viewpoints.as_slice())
    }

    pub fn volumes(&self) -> impl Iterator<Item = &Volume> {
        self.floors.iter().flat_map(|f| f.volumes.iter())
    }
}

/// Display label of a floor, following the French storey convention
pub fn floor_label(index: usize) -> String {
    match index {
        0 => "RDC".to_string(),
        1 => "1er".to_string(),
        n => format!("{}e", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_labels() {
        assert_eq!(floor_label(0), "RDC");
        assert_eq!(floor_label(1), "1er");
        assert_eq!(floor_label(2), "2e");
        assert_eq!(floor_label(7), "7e");
    }

    #[test]
    fn test_kind_shapes() {
        assert_eq!(VolumeKind::Facade.shape(), Shape::Plane);
        assert_eq!(VolumeKind::Wall.shape(), Shape::Box);
        assert_eq!(VolumeKind::Core(CoreKind::Stair).shape(), Shape::Box);
    }

    #[test]
    fn test_repeated_bays() {
        assert!(VolumeKind::Bay(BayKind::Garage).is_repeated_bay());
        assert!(VolumeKind::Bay(BayKind::Office).is_repeated_bay());
        assert!(!VolumeKind::Bay(BayKind::Corridor).is_repeated_bay());
        assert!(!VolumeKind::Bay(BayKind::Entrance).is_repeated_bay());
    }

    #[test]
    fn test_volume_mesh_is_placed() {
        let volume = Volume {
            id: VolumeId { floor: 0, index: 0 },
            label: "Test".into(),
            kind: VolumeKind::Wall,
            size: Vector3::new(2.0, 2.0, 2.0),
            position: Point3::new(10.0, 1.0, 0.0),
        };
        let (min, max) = volume.mesh().unwrap().bounds();
        assert_eq!(min.x, 9.0);
        assert_eq!(max.x, 11.0);
        assert_eq!(min.y, 0.0);
    }
}
