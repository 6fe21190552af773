// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Procedural office building generation
//!
//! A handful of building-wide constants become a stack of floors, each a list
//! of labeled boxes and planes:
//! 1. Envelope on every floor: slabs, back and side walls, glass street facade
//! 2. Ground floor: a row of garages and two entrances
//! 3. Upper floors: a row of offices and a corridor
//! 4. Stair and elevator cores on every floor
//!
//! # Usage
//!
//! ```rust
//! use officetower_building::{generate_building, BuildingConfig};
//!
//! let building = generate_building(&BuildingConfig::default()).unwrap();
//! assert_eq!(building.floor_count(), 8);
//! assert_eq!(building.floors[3].y_offset, 10.0);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod layout;
pub mod plan;
pub mod types;
pub mod viewpoints;

pub use config::BuildingConfig;
pub use error::{Error, Result};
pub use generator::generate_building;
pub use plan::{floor_plan, FloorPlan, PlanRect};
pub use types::{
    floor_label, BayKind, Building, CoreKind, Floor, SlabKind, Viewpoint, Viewpoints, Volume,
    VolumeId, VolumeKind,
};
