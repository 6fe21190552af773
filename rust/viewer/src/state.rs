// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View state axes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Camera mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum ViewMode {
    /// Fixed top-down camera, no free interaction
    Planar,
    /// Free-orbit perspective camera
    #[default]
    Orbit,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Planar => write!(f, "planar"),
            ViewMode::Orbit => write!(f, "orbit"),
        }
    }
}

/// Which floors are shown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum FloorSelection {
    #[default]
    All,
    Floor(usize),
}

impl FloorSelection {
    /// Whether floor `index` is part of the selection
    #[inline]
    pub fn includes(self, index: usize) -> bool {
        match self {
            FloorSelection::All => true,
            FloorSelection::Floor(selected) => selected == index,
        }
    }

    #[inline]
    pub fn single(self) -> Option<usize> {
        match self {
            FloorSelection::All => None,
            FloorSelection::Floor(index) => Some(index),
        }
    }
}

/// Reference to a viewpoint: floor index plus position in that floor's list
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ViewpointRef {
    pub floor: usize,
    pub index: usize,
}

/// Process-wide view state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub mode: ViewMode,
    pub selected_floor: FloorSelection,
    pub wireframe: bool,
    pub active_viewpoint: Option<ViewpointRef>,
}

impl ViewState {
    /// Floor whose viewpoint menu is shown: a single selected floor in orbit mode
    #[inline]
    pub fn menu_floor(&self) -> Option<usize> {
        match self.mode {
            ViewMode::Orbit => self.selected_floor.single(),
            ViewMode::Planar => None,
        }
    }
}
