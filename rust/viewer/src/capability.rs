// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Startup rendering capability check

/// Host environment check for a 3D rendering context.
///
/// The browser layer implements this against a canvas; tests use closures.
pub trait RenderCapability {
    /// `Err` carries a user-facing reason
    fn check(&self) -> Result<(), String>;
}

impl<F> RenderCapability for F
where
    F: Fn() -> Result<(), String>,
{
    fn check(&self) -> Result<(), String> {
        self()
    }
}

/// Capability that is always present (headless use)
#[derive(Debug, Clone, Copy, Default)]
pub struct Headless;

impl RenderCapability for Headless {
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}
