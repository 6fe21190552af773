// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Materials assigned to volumes

use officetower_building::{BayKind, CoreKind, VolumeKind};
use serde::{Deserialize, Serialize};

/// Material handle; a volume's current material is one of these
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Material {
    Slab,
    Wall,
    Glass,
    Garage,
    Entrance,
    Office,
    Corridor,
    Elevator,
    Stair,
    /// Flat override used while wireframe rendering is on
    Wireframe,
}

/// How a material is drawn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MaterialStyle {
    /// Linear RGB in [0, 1]
    pub color: [f32; 3],
    pub opacity: f32,
    pub wireframe: bool,
}

impl MaterialStyle {
    const fn solid(r: f32, g: f32, b: f32) -> Self {
        Self {
            color: [r, g, b],
            opacity: 1.0,
            wireframe: false,
        }
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

impl Material {
    pub fn style(self) -> MaterialStyle {
        match self {
            Material::Slab => MaterialStyle::solid(0.75, 0.75, 0.75),
            Material::Wall => MaterialStyle::solid(0.87, 0.84, 0.78),
            Material::Glass => MaterialStyle {
                color: [0.53, 0.75, 0.92],
                opacity: 0.35,
                wireframe: false,
            },
            Material::Garage => MaterialStyle::solid(0.55, 0.55, 0.6),
            Material::Entrance => MaterialStyle::solid(0.85, 0.65, 0.3),
            Material::Office => MaterialStyle::solid(0.45, 0.65, 0.85),
            Material::Corridor => MaterialStyle::solid(0.9, 0.9, 0.85),
            Material::Elevator => MaterialStyle::solid(0.8, 0.3, 0.3),
            Material::Stair => MaterialStyle::solid(0.35, 0.7, 0.4),
            Material::Wireframe => MaterialStyle {
                color: [0.1, 0.1, 0.1],
                opacity: 1.0,
                wireframe: true,
            },
        }
    }
}

impl From<VolumeKind> for Material {
    fn from(kind: VolumeKind) -> Self {
        match kind {
            VolumeKind::Slab(_) => Material::Slab,
            VolumeKind::Wall => Material::Wall,
            VolumeKind::Facade => Material::Glass,
            VolumeKind::Bay(BayKind::Garage) => Material::Garage,
            VolumeKind::Bay(BayKind::Entrance) => Material::Entrance,
            VolumeKind::Bay(BayKind::Office) => Material::Office,
            VolumeKind::Bay(BayKind::Corridor) => Material::Corridor,
            VolumeKind::Core(CoreKind::Elevator) => Material::Elevator,
            VolumeKind::Core(CoreKind::Stair) => Material::Stair,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use officetower_building::SlabKind;

    #[test]
    fn test_default_materials() {
        assert_eq!(Material::from(VolumeKind::Facade), Material::Glass);
        assert_eq!(Material::from(VolumeKind::Slab(SlabKind::Ceiling)), Material::Slab);
        assert_eq!(
            Material::from(VolumeKind::Core(CoreKind::Elevator)),
            Material::Elevator
        );
    }

    #[test]
    fn test_only_glass_is_transparent() {
        assert!(Material::Glass.style().is_transparent());
        assert!(!Material::Wall.style().is_transparent());
        assert!(Material::Wireframe.style().wireframe);
        assert!(!Material::Office.style().wireframe);
    }
}
