// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View Controller for the generated office building
//!
//! [`AppState`] owns the building and a [`ViewController`] that toggles
//! planar/orbit camera mode, floor isolation and wireframe rendering, and
//! animates the camera between named viewpoints. UI actions reach it as
//! [`Command`] values; the render loop calls [`AppState::tick`] and draws
//! [`AppState::render_list`].
//!
//! # Usage
//!
//! ```rust
//! use officetower_building::BuildingConfig;
//! use officetower_viewer::{AppState, Command, Headless, ViewMode, ViewerSettings};
//!
//! let mut app = AppState::initialize(
//!     &BuildingConfig::default(),
//!     ViewerSettings::default(),
//!     &Headless,
//!     1280,
//!     720,
//! )
//! .unwrap();
//!
//! app.dispatch("view-2d".parse().unwrap());
//! assert_eq!(app.state().mode, ViewMode::Planar);
//! assert!(!app.controller().controls().enabled);
//!
//! app.dispatch(Command::ToggleWireframe);
//! app.tick(16.0);
//! let frame = app.render_list();
//! assert!(frame.items.iter().all(|item| item.style.wireframe));
//! ```

pub mod animation;
pub mod app;
pub mod camera;
pub mod capability;
pub mod commands;
pub mod controller;
pub mod controls;
pub mod error;
pub mod materials;
pub mod render;
pub mod scene;
pub mod settings;
pub mod state;

pub use animation::{AnimationStrategy, Easing, Interpolate, Tween};
pub use app::AppState;
pub use camera::{orbit_pose, planar_pose, Camera, CameraPose};
pub use capability::{Headless, RenderCapability};
pub use commands::Command;
pub use controller::ViewController;
pub use controls::OrbitControls;
pub use error::{CommandError, Error, Result};
pub use materials::{Material, MaterialStyle};
pub use render::{DrawItem, Frame};
pub use scene::{FloorNode, SceneState, VolumeNode};
pub use settings::{CameraSettings, OrbitLimits, ViewerSettings};
pub use state::{FloorSelection, ViewMode, ViewState, ViewpointRef};
