// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Box and plane primitives, centered on the origin

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Primitive shape of a building volume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Shape {
    /// Axis-aligned box
    Box,
    /// Double-sided quad in the local XY plane (depth ignored)
    Plane,
}

impl Shape {
    /// Build the mesh for this shape with the given local size
    pub fn mesh(self, size: Vector3<f64>) -> Result<Mesh> {
        match self {
            Shape::Box => cuboid(size),
            Shape::Plane => plane(size.x, size.y),
        }
    }
}

fn check_extent(axis: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidSize { axis, value })
    }
}

/// Faces as (normal, u, v) with `u × v == normal`, so corners emitted in
/// (-u,-v) (+u,-v) (+u,+v) (-u,+v) order wind counter-clockwise from outside.
const BOX_FACES: [([f64; 3], [f64; 3], [f64; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
];

/// Create a box mesh with flat per-face normals (24 vertices, 12 triangles)
pub fn cuboid(size: Vector3<f64>) -> Result<Mesh> {
    check_extent("x", size.x)?;
    check_extent("y", size.y)?;
    check_extent("z", size.z)?;

    let half = size / 2.0;
    let mut mesh = Mesh::with_capacity(24, 36);

    for (normal, u, v) in BOX_FACES {
        let normal = Vector3::from(normal);
        let u = Vector3::from(u).component_mul(&half);
        let v = Vector3::from(v).component_mul(&half);
        let center = normal.component_mul(&half);

        let corner = |su: f64, sv: f64| Point3::from(center + u * su + v * sv);
        let i0 = mesh.add_vertex(corner(-1.0, -1.0), normal);
        let i1 = mesh.add_vertex(corner(1.0, -1.0), normal);
        let i2 = mesh.add_vertex(corner(1.0, 1.0), normal);
        let i3 = mesh.add_vertex(corner(-1.0, 1.0), normal);
        mesh.add_quad(i0, i1, i2, i3);
    }

    Ok(mesh)
}

/// Create a double-sided quad in the XY plane facing +Z and -Z
pub fn plane(width: f64, height: f64) -> Result<Mesh> {
    check_extent("x", width)?;
    check_extent("y", height)?;

    let (hw, hh) = (width / 2.0, height / 2.0);
    let corners = [
        Point3::new(-hw, -hh, 0.0),
        Point3::new(hw, -hh, 0.0),
        Point3::new(hw, hh, 0.0),
        Point3::new(-hw, hh, 0.0),
    ];

    let mut mesh = Mesh::with_capacity(8, 12);

    let front: Vec<u32> = corners
        .iter()
        .map(|&c| mesh.add_vertex(c, Vector3::z()))
        .collect();
    mesh.add_quad(front[0], front[1], front[2], front[3]);

    let back: Vec<u32> = corners
        .iter()
        .map(|&c| mesh.add_vertex(c, -Vector3::z()))
        .collect();
    mesh.add_quad(back[0], back[3], back[2], back[1]);

    Ok(mesh)
}
