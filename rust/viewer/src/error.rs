// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for viewer initialization and command parsing.

use thiserror::Error;

/// Result type alias for viewer initialization.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal conditions detected while initializing. Once an [`AppState`](crate::AppState)
/// exists no transition can fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The 3D rendering context cannot be created.
    #[error("3D rendering is unavailable: {0}")]
    CapabilityUnavailable(String),

    /// The building configuration is malformed.
    #[error(transparent)]
    InvalidConfiguration(#[from] officetower_building::Error),

    /// A viewer setting is out of range.
    #[error("Invalid settings: {field} must be {expected} (got {value})")]
    InvalidSettings {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// A UI action id that maps to no command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("malformed argument in action {action}: {argument}")]
    BadArgument { action: String, argument: String },
}
