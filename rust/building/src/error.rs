// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for building generation
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating a configuration or tessellating volumes
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid configuration: {field} must be a positive, finite length (got {value})")]
    NonPositiveDimension { field: &'static str, value: f64 },

    #[error("Invalid configuration: {field} of {value} is below the minimum of {min}")]
    TooSmall {
        field: &'static str,
        value: f64,
        min: f64,
    },

    #[error("Invalid configuration: floorCount must be at least 1")]
    ZeroFloorCount,

    #[error("Invalid configuration: bayCount must be at least 1")]
    ZeroBayCount,

    #[error("Invalid configuration: {bay_count} bays across a width of {width} leave no room after the {gap} gap")]
    BayLayout {
        width: f64,
        bay_count: usize,
        gap: f64,
    },

    #[error("Geometry error: {0}")]
    Geometry(#[from] officetower_geometry::Error),
}
