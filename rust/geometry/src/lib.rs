// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Office Tower Geometry
//!
//! Triangle meshes for the two primitives the building model is made of
//! (boxes and planes), plus the merge/transform/edge helpers the viewer
//! needs to upload and draw them.

pub mod error;
pub mod mesh;
pub mod primitives;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, Vector3};

pub use error::{Error, Result};
pub use mesh::Mesh;
pub use primitives::{cuboid, plane, Shape};
