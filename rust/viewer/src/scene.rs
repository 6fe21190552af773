// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mutable render state layered over the immutable building
//!
//! Volumes themselves never change after generation. What the viewer toggles
//! (current material, remembered material, floor visibility and reveal scale)
//! lives here, addressed by [`VolumeId`] and floor index.

use crate::animation::{AnimationStrategy, Tween};
use crate::materials::Material;
use officetower_building::{Building, VolumeId};

/// Render state of one volume
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeNode {
    pub id: VolumeId,
    pub material: Material,
    /// Material to restore once wireframe rendering is turned off
    saved_material: Option<Material>,
}

impl VolumeNode {
    fn new(id: VolumeId, material: Material) -> Self {
        Self {
            id,
            material,
            saved_material: None,
        }
    }

    fn apply_wireframe(&mut self) {
        if self.saved_material.is_none() {
            self.saved_material = Some(self.material);
            self.material = Material::Wireframe;
        }
    }

    fn restore(&mut self) {
        if let Some(material) = self.saved_material.take() {
            self.material = material;
        }
    }
}

/// Render state of one floor
#[derive(Debug, Clone, PartialEq)]
pub struct FloorNode {
    pub index: usize,
    pub visible: bool,
    /// Uniform reveal scale about the floor base, 0 when hidden
    pub scale: f64,
    reveal: Option<Tween<f64>>,
    pub nodes: Vec<VolumeNode>,
}

impl FloorNode {
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.reveal.is_some()
    }
}

/// Visibility and material state of every volume
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub floors: Vec<FloorNode>,
    wireframe: bool,
}

impl SceneState {
    /// Every floor visible at full scale, every volume with its default material
    pub fn new(building: &Building) -> Self {
        let floors = building
            .floors
            .iter()
            .map(|floor| FloorNode {
                index: floor.index,
                visible: true,
                scale: 1.0,
                reveal: None,
                nodes: floor
                    .volumes
                    .iter()
                    .map(|v| VolumeNode::new(v.id, Material::from(v.kind)))
                    .collect(),
            })
            .collect();

        Self {
            floors,
            wireframe: false,
        }
    }

    pub fn floor(&self, index: usize) -> Option<&FloorNode> {
        self.floors.get(index)
    }

    pub fn node(&self, id: VolumeId) -> Option<&VolumeNode> {
        self.floors.get(id.floor)?.nodes.get(id.index)
    }

    #[inline]
    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    /// Show or hide a floor. A floor that becomes visible grows from scale 0,
    /// starting at the next [`SceneState::tick`]; showing an already visible
    /// floor changes nothing.
    pub fn set_floor_visible(
        &mut self,
        index: usize,
        visible: bool,
        strategy: &AnimationStrategy,
    ) {
        let wireframe = self.wireframe;
        let Some(floor) = self.floors.get_mut(index) else {
            return;
        };

        if !visible {
            floor.visible = false;
            floor.scale = 0.0;
            floor.reveal = None;
            return;
        }
        if floor.visible {
            return;
        }

        floor.visible = true;
        floor.reveal = strategy.tween(0.0, 1.0);
        floor.scale = if floor.reveal.is_some() { 0.0 } else { 1.0 };

        // Floors revealed while wireframe is on pick up the override now
        if wireframe {
            floor.nodes.iter_mut().for_each(VolumeNode::apply_wireframe);
        }
    }

    /// Remember and replace the material of every visible volume
    pub fn enable_wireframe(&mut self) {
        self.wireframe = true;
        for floor in self.floors.iter_mut().filter(|f| f.visible) {
            floor.nodes.iter_mut().for_each(VolumeNode::apply_wireframe);
        }
    }

    /// Restore every remembered material
    pub fn disable_wireframe(&mut self) {
        self.wireframe = false;
        for floor in &mut self.floors {
            floor.nodes.iter_mut().for_each(VolumeNode::restore);
        }
    }

    /// Advance floor reveal animations. Returns true while any is running.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut running = false;
        for floor in &mut self.floors {
            if let Some(reveal) = &mut floor.reveal {
                let (scale, finished) = reveal.sample(now);
                floor.scale = scale;
                if finished {
                    floor.reveal = None;
                } else {
                    running = true;
                }
            }
        }
        running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Easing;
    use officetower_building::{generate_building, BuildingConfig};

    fn scene() -> SceneState {
        let building = generate_building(&BuildingConfig {
            floor_count: 3,
            ..Default::default()
        })
        .unwrap();
        SceneState::new(&building)
    }

    fn eased() -> AnimationStrategy {
        AnimationStrategy::Eased {
            duration_ms: 100.0,
            easing: Easing::Linear,
        }
    }

    #[test]
    fn test_initial_state() {
        let scene = scene();
        assert_eq!(scene.floors.len(), 3);
        assert!(scene.floors.iter().all(|f| f.visible && f.scale == 1.0));
        assert!(!scene.wireframe());
    }

    #[test]
    fn test_hide_then_reveal() {
        let mut scene = scene();
        scene.set_floor_visible(1, false, &eased());
        assert!(!scene.floors[1].visible);
        assert_eq!(scene.floors[1].scale, 0.0);

        scene.set_floor_visible(1, true, &eased());
        assert!(scene.floors[1].visible);
        assert_eq!(scene.floors[1].scale, 0.0);

        assert!(scene.tick(1000.0));
        assert_eq!(scene.floors[1].scale, 0.0);
        assert!(scene.tick(1050.0));
        assert_eq!(scene.floors[1].scale, 0.5);
        assert!(!scene.tick(1100.0));
        assert_eq!(scene.floors[1].scale, 1.0);
        assert!(!scene.floors[1].is_animating());
    }

    #[test]
    fn test_instant_reveal() {
        let mut scene = scene();
        scene.set_floor_visible(2, false, &AnimationStrategy::Instant);
        scene.set_floor_visible(2, true, &AnimationStrategy::Instant);
        assert_eq!(scene.floors[2].scale, 1.0);
        assert!(!scene.floors[2].is_animating());
    }

    #[test]
    fn test_wireframe_swaps_visible_floors_only() {
        let mut scene = scene();
        let original = scene.clone();
        scene.set_floor_visible(0, false, &AnimationStrategy::Instant);

        scene.enable_wireframe();
        assert!(scene.floors[0].nodes.iter().all(|n| n.material != Material::Wireframe));
        assert!(scene.floors[1].nodes.iter().all(|n| n.material == Material::Wireframe));

        // Revealed later, still drawn as wireframe
        scene.set_floor_visible(0, true, &AnimationStrategy::Instant);
        assert!(scene.floors[0].nodes.iter().all(|n| n.material == Material::Wireframe));

        scene.disable_wireframe();
        assert_eq!(scene, original);
    }

    #[test]
    fn test_enable_twice_keeps_original_material() {
        let mut scene = scene();
        let id = scene.floors[0].nodes[0].id;
        let before = scene.node(id).unwrap().material;

        scene.enable_wireframe();
        scene.enable_wireframe();
        scene.disable_wireframe();
        assert_eq!(scene.node(id).unwrap().material, before);
    }

    #[test]
    fn test_unknown_floor_is_ignored() {
        let mut scene = scene();
        let before = scene.clone();
        scene.set_floor_visible(42, false, &AnimationStrategy::Instant);
        assert_eq!(scene, before);
    }
}
