// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View Controller state machine
//!
//! Mode and floor selection compose orthogonally; wireframe is a separate
//! flag. Every transition is total. Methods that need the geometry borrow the
//! [`Building`]; the controller never owns or mutates volumes.
//!
//! Time-extended behavior (camera moves, floor reveals) starts at the first
//! [`ViewController::tick`] after the transition that requested it, so a host
//! may stop ticking while idle without later moves jumping to their end.

use crate::animation::Tween;
use crate::camera::{orbit_pose, planar_pose, Camera, CameraPose};
use crate::controls::OrbitControls;
use crate::scene::SceneState;
use crate::settings::ViewerSettings;
use crate::state::{FloorSelection, ViewMode, ViewState, ViewpointRef};
use officetower_building::{Building, Viewpoint};
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct ViewController {
    state: ViewState,
    camera: Camera,
    controls: OrbitControls,
    camera_tween: Option<Tween<CameraPose>>,
    scene: SceneState,
    settings: ViewerSettings,
}

impl ViewController {
    /// Orbit mode, every floor shown, wireframe off
    pub fn new(building: &Building, settings: ViewerSettings, width: u32, height: u32) -> Self {
        let state = ViewState::default();
        let camera = Camera::new(&settings.camera, orbit_pose(building), width, height);
        let mut controls = OrbitControls::new(settings.orbit.clone());
        controls.enabled = state.mode == ViewMode::Orbit;

        Self {
            state,
            camera,
            controls,
            camera_tween: None,
            scene: SceneState::new(building),
            settings,
        }
    }

    #[inline]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn controls(&self) -> &OrbitControls {
        &self.controls
    }

    #[inline]
    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    #[inline]
    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }

    /// True while a camera move is in flight
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.camera_tween.is_some()
    }

    fn mode_pose(&self, building: &Building) -> CameraPose {
        match self.state.mode {
            ViewMode::Planar => planar_pose(building, &self.settings.camera),
            ViewMode::Orbit => orbit_pose(building),
        }
    }

    fn cancel_animation(&mut self) {
        if self.camera_tween.take().is_some() {
            debug!("Camera animation cancelled");
        }
    }

    /// Jump to the fixed pose of `mode`; free interaction is enabled exactly in orbit
    pub fn set_mode(&mut self, building: &Building, mode: ViewMode) {
        self.cancel_animation();
        self.state.mode = mode;
        self.state.active_viewpoint = None;
        self.camera.pose = self.mode_pose(building);
        self.controls.enabled = mode == ViewMode::Orbit;

        info!(mode = %mode, menu = ?self.state.menu_floor(), "View mode changed");
    }

    /// Isolate one floor or show all of them. Unknown floor indices are ignored.
    pub fn select_floor(&mut self, building: &Building, selection: FloorSelection) {
        if let FloorSelection::Floor(index) = selection {
            if index >= building.floor_count() {
                debug!(index, "Ignoring selection of unknown floor");
                return;
            }
        }

        self.state.selected_floor = selection;
        if let Some(active) = self.state.active_viewpoint {
            if !selection.includes(active.floor) {
                self.state.active_viewpoint = None;
            }
        }

        let strategy = self.settings.animation;
        for index in 0..building.floor_count() {
            self.scene
                .set_floor_visible(index, selection.includes(index), &strategy);
        }

        debug!(selection = ?selection, menu = ?self.state.menu_floor(), "Floor selection changed");
    }

    pub fn toggle_wireframe(&mut self) {
        self.state.wireframe = !self.state.wireframe;
        if self.state.wireframe {
            self.scene.enable_wireframe();
        } else {
            self.scene.disable_wireframe();
        }
        debug!(wireframe = self.state.wireframe, "Wireframe toggled");
    }

    /// Move the camera to an arbitrary viewpoint. Free interaction is suspended
    /// until the move completes; a later call supersedes this one.
    pub fn go_to_viewpoint(&mut self, viewpoint: &Viewpoint) {
        self.state.active_viewpoint = None;
        self.start_camera_move(CameraPose::new(viewpoint.position, viewpoint.target));
        debug!(name = %viewpoint.name, "Going to viewpoint");
    }

    /// Move the camera to viewpoint `index` of `floor`. Returns false (and does
    /// nothing) when no such viewpoint exists.
    pub fn go_to_viewpoint_at(&mut self, building: &Building, floor: usize, index: usize) -> bool {
        let Some(viewpoint) = building.viewpoints(floor).and_then(|vps| vps.get(index)) else {
            debug!(floor, index, "Ignoring unknown viewpoint");
            return false;
        };

        self.go_to_viewpoint(viewpoint);
        self.state.active_viewpoint = Some(ViewpointRef { floor, index });
        true
    }

    fn start_camera_move(&mut self, end: CameraPose) {
        if self.camera_tween.is_some() {
            warn!("Superseding in-flight camera animation");
        }

        self.camera_tween = self.settings.animation.tween(self.camera.pose, end);

        if self.camera_tween.is_some() {
            self.controls.enabled = false;
        } else {
            self.camera.pose = end;
            self.controls.enabled = self.state.mode == ViewMode::Orbit;
        }
    }

    /// Re-apply the fixed pose of the current mode
    pub fn reset_view(&mut self, building: &Building) {
        self.cancel_animation();
        self.state.active_viewpoint = None;
        self.camera.pose = self.mode_pose(building);
        self.controls.enabled = self.state.mode == ViewMode::Orbit;
        debug!(mode = %self.state.mode, "View reset");
    }

    pub fn zoom_in(&mut self) {
        self.zoom_step(self.settings.orbit.zoom_step);
    }

    pub fn zoom_out(&mut self) {
        self.zoom_step(1.0 / self.settings.orbit.zoom_step);
    }

    fn zoom_step(&mut self, factor: f64) {
        if self.is_animating() {
            debug!("Ignoring zoom during camera animation");
            return;
        }
        self.controls.zoom_unchecked(&mut self.camera.pose, factor);
    }

    /// Free rotation; no effect unless controls are enabled
    pub fn rotate(&mut self, d_azimuth: f64, d_polar: f64) -> bool {
        self.controls.rotate(&mut self.camera.pose, d_azimuth, d_polar)
    }

    /// Free panning; no effect unless controls are enabled
    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        self.controls.pan(&mut self.camera.pose, dx, dy)
    }

    /// Free wheel zoom; no effect unless controls are enabled
    pub fn zoom(&mut self, factor: f64) -> bool {
        self.controls.zoom(&mut self.camera.pose, factor)
    }

    /// Recompute projection parameters; nothing else changes
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
        debug!(width, height, aspect = self.camera.aspect, "Viewport resized");
    }

    /// Advance animations to `now` (milliseconds). Returns true while any
    /// animation is still running. Animations requested since the previous
    /// tick start at `now`.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut running = self.scene.tick(now);

        if let Some(tween) = &mut self.camera_tween {
            let (pose, finished) = tween.sample(now);
            self.camera.pose = pose;
            if finished {
                self.camera_tween = None;
                self.controls.enabled = self.state.mode == ViewMode::Orbit;
                debug!("Camera animation finished");
            } else {
                running = true;
            }
        }

        running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AnimationStrategy, Easing};
    use approx::assert_relative_eq;
    use nalgebra::Point3;
    use officetower_building::{generate_building, BuildingConfig};

    fn setup(animation: AnimationStrategy) -> (Building, ViewController) {
        let building = generate_building(&BuildingConfig::default()).unwrap();
        let settings = ViewerSettings {
            animation,
            ..Default::default()
        };
        let controller = ViewController::new(&building, settings, 800, 600);
        (building, controller)
    }

    fn linear(duration_ms: f64) -> AnimationStrategy {
        AnimationStrategy::Eased {
            duration_ms,
            easing: Easing::Linear,
        }
    }

    #[test]
    fn test_starts_in_orbit() {
        let (_, controller) = setup(AnimationStrategy::default());
        assert_eq!(controller.state().mode, ViewMode::Orbit);
        assert!(controller.controls().enabled);
        assert_eq!(controller.state().selected_floor, FloorSelection::All);
    }

    #[test]
    fn test_planar_mode_disables_controls() {
        let (building, mut controller) = setup(AnimationStrategy::default());
        controller.set_mode(&building, ViewMode::Planar);

        assert!(!controller.controls().enabled);
        assert!(!controller.rotate(0.5, 0.0));
        assert_eq!(
            controller.camera().pose,
            planar_pose(&building, &controller.settings().camera)
        );
    }

    #[test]
    fn test_set_mode_cancels_animation() {
        let (building, mut controller) = setup(linear(500.0));
        controller.go_to_viewpoint_at(&building, 0, 0);
        assert!(controller.is_animating());

        controller.set_mode(&building, ViewMode::Orbit);
        assert!(!controller.is_animating());
        assert!(controller.controls().enabled);
        assert_eq!(controller.state().active_viewpoint, None);
    }

    #[test]
    fn test_viewpoint_animation_suspends_controls() {
        let (building, mut controller) = setup(linear(1000.0));
        assert!(controller.go_to_viewpoint_at(&building, 2, 1));
        assert!(!controller.controls().enabled);

        assert!(controller.tick(0.0));
        assert!(controller.tick(500.0));
        assert!(!controller.controls().enabled);

        assert!(!controller.tick(1000.0));
        assert!(controller.controls().enabled);

        let vp = &building.viewpoints(2).unwrap()[1];
        assert_eq!(controller.camera().pose, CameraPose::new(vp.position, vp.target));
        assert_eq!(
            controller.state().active_viewpoint,
            Some(ViewpointRef { floor: 2, index: 1 })
        );
    }

    #[test]
    fn test_instant_viewpoint() {
        let (building, mut controller) = setup(AnimationStrategy::Instant);
        controller.go_to_viewpoint_at(&building, 0, 2);
        assert!(!controller.is_animating());
        assert!(controller.controls().enabled);

        let vp = &building.viewpoints(0).unwrap()[2];
        assert_eq!(controller.camera().pose.position, vp.position);
    }

    #[test]
    fn test_animation_finishing_in_planar_keeps_controls_off() {
        let (building, mut controller) = setup(linear(100.0));
        controller.set_mode(&building, ViewMode::Planar);
        controller.go_to_viewpoint(&Viewpoint::new(
            "Above",
            Point3::new(0.0, 5.0, 0.0),
            Point3::origin(),
        ));
        controller.tick(0.0);
        assert!(!controller.tick(200.0));
        assert!(!controller.controls().enabled);
    }

    #[test]
    fn test_move_after_idle_gap_still_animates() {
        let (building, mut controller) = setup(linear(1000.0));
        controller.tick(0.0);
        let start = controller.camera().pose;

        // Host stopped ticking for a minute, then a move is requested
        assert!(controller.go_to_viewpoint_at(&building, 1, 0));
        assert!(controller.tick(60_000.0));
        assert_eq!(controller.camera().pose, start);
        assert!(!controller.controls().enabled);

        assert!(controller.tick(60_500.0));
        assert_ne!(controller.camera().pose, start);

        assert!(!controller.tick(61_000.0));
        let vp = &building.viewpoints(1).unwrap()[0];
        assert_eq!(controller.camera().pose, CameraPose::new(vp.position, vp.target));
        assert!(controller.controls().enabled);
    }

    #[test]
    fn test_unknown_viewpoint_is_ignored() {
        let (building, mut controller) = setup(AnimationStrategy::default());
        let pose = controller.camera().pose;
        assert!(!controller.go_to_viewpoint_at(&building, 99, 0));
        assert!(!controller.go_to_viewpoint_at(&building, 0, 3));
        assert_eq!(controller.camera().pose, pose);
    }

    #[test]
    fn test_select_floor_isolates() {
        let (building, mut controller) = setup(AnimationStrategy::Instant);
        controller.select_floor(&building, FloorSelection::Floor(3));

        let visible: Vec<usize> = controller
            .scene()
            .floors
            .iter()
            .filter(|f| f.visible)
            .map(|f| f.index)
            .collect();
        assert_eq!(visible, vec![3]);
        assert_eq!(controller.state().menu_floor(), Some(3));
    }

    #[test]
    fn test_unknown_floor_selection_is_ignored() {
        let (building, mut controller) = setup(AnimationStrategy::Instant);
        controller.select_floor(&building, FloorSelection::Floor(8));
        assert_eq!(controller.state().selected_floor, FloorSelection::All);
        assert!(controller.scene().floors.iter().all(|f| f.visible));
    }

    #[test]
    fn test_menu_follows_mode_with_floor_selected() {
        let (building, mut controller) = setup(AnimationStrategy::Instant);
        controller.set_mode(&building, ViewMode::Planar);
        controller.select_floor(&building, FloorSelection::Floor(1));
        assert_eq!(controller.state().menu_floor(), None);

        controller.set_mode(&building, ViewMode::Orbit);
        assert_eq!(controller.state().menu_floor(), Some(1));
    }

    #[test]
    fn test_zoom_buttons_work_in_planar() {
        let (building, mut controller) = setup(AnimationStrategy::Instant);
        controller.set_mode(&building, ViewMode::Planar);
        let before = controller.camera().pose.distance();

        controller.zoom_in();
        assert_relative_eq!(controller.camera().pose.distance(), before * 0.8, epsilon = 1e-9);
        controller.zoom_out();
        assert_relative_eq!(controller.camera().pose.distance(), before, epsilon = 1e-9);
    }

    #[test]
    fn test_reset_view_restores_mode_pose() {
        let (building, mut controller) = setup(AnimationStrategy::Instant);
        controller.rotate(1.0, 0.2);
        controller.zoom_in();
        controller.reset_view(&building);
        assert_eq!(controller.camera().pose, orbit_pose(&building));
    }

    #[test]
    fn test_resize_only_touches_projection() {
        let (_, mut controller) = setup(AnimationStrategy::default());
        let state = *controller.state();
        let pose = controller.camera().pose;

        controller.on_resize(1000, 500);
        assert_relative_eq!(controller.camera().aspect, 2.0);
        assert_eq!(*controller.state(), state);
        assert_eq!(controller.camera().pose, pose);
    }
}
