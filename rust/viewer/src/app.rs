// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Application state constructed once at startup

use crate::capability::RenderCapability;
use crate::commands::Command;
use crate::controller::ViewController;
use crate::error::{Error, Result};
use crate::render::{build_frame, Frame};
use crate::settings::ViewerSettings;
use crate::state::ViewState;
use officetower_building::{generate_building, Building, BuildingConfig, Viewpoint};
use tracing::{debug, error, info};

/// The generated building and the controller viewing it.
///
/// Construction is the only fallible step; once an `AppState` exists every
/// command is accepted.
#[derive(Debug, Clone)]
pub struct AppState {
    building: Building,
    controller: ViewController,
}

impl AppState {
    /// Check the rendering capability and the viewer settings, then generate
    /// the building.
    ///
    /// Nothing is constructed when any step fails.
    pub fn initialize(
        config: &BuildingConfig,
        settings: ViewerSettings,
        capability: &dyn RenderCapability,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        if let Err(reason) = capability.check() {
            error!(%reason, "Rendering capability unavailable");
            return Err(Error::CapabilityUnavailable(reason));
        }

        settings.validate().map_err(|e| {
            error!(error = %e, "Viewer settings rejected");
            e
        })?;

        let building = generate_building(config).map_err(|e| {
            error!(error = %e, "Building generation failed");
            Error::from(e)
        })?;

        let controller = ViewController::new(&building, settings, width, height);
        info!(
            floors = building.floor_count(),
            width,
            height,
            "Viewer initialized"
        );

        Ok(Self {
            building,
            controller,
        })
    }

    #[inline]
    pub fn building(&self) -> &Building {
        &self.building
    }

    #[inline]
    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    #[inline]
    pub fn state(&self) -> &ViewState {
        self.controller.state()
    }

    /// Run one command to completion
    pub fn dispatch(&mut self, command: Command) {
        debug!(command = %command, "Dispatch");
        let building = &self.building;
        let controller = &mut self.controller;

        match command {
            Command::SetMode { mode } => controller.set_mode(building, mode),
            Command::SelectFloor { selection } => controller.select_floor(building, selection),
            Command::ToggleWireframe => controller.toggle_wireframe(),
            Command::GoToViewpoint { floor, index } => {
                controller.go_to_viewpoint_at(building, floor, index);
            }
            Command::ResetView => controller.reset_view(building),
            Command::ZoomIn => controller.zoom_in(),
            Command::ZoomOut => controller.zoom_out(),
            Command::Resize { width, height } => controller.on_resize(width, height),
        }
    }

    /// Camera move to an arbitrary viewpoint
    pub fn go_to_viewpoint(&mut self, viewpoint: &Viewpoint) {
        self.controller.go_to_viewpoint(viewpoint);
    }

    /// Free orbit interaction, ignored while controls are disabled
    pub fn rotate(&mut self, d_azimuth: f64, d_polar: f64) -> bool {
        self.controller.rotate(d_azimuth, d_polar)
    }

    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        self.controller.pan(dx, dy)
    }

    pub fn zoom(&mut self, factor: f64) -> bool {
        self.controller.zoom(factor)
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.controller.on_resize(width, height);
    }

    /// Viewpoints of a floor, for populating the menu
    pub fn viewpoints(&self, floor: usize) -> Option<&[Viewpoint]> {
        self.building.viewpoints(floor)
    }

    /// The viewpoint menu currently shown, if any
    pub fn viewpoint_menu(&self) -> Option<(usize, &[Viewpoint])> {
        let floor = self.state().menu_floor()?;
        Some((floor, self.building.viewpoints(floor)?))
    }

    /// Advance animations; returns true while any is running. Animations
    /// requested since the previous tick start at `now`.
    pub fn tick(&mut self, now: f64) -> bool {
        self.controller.tick(now)
    }

    pub fn render_list(&self) -> Frame {
        build_frame(&self.building, &self.controller)
    }
}
