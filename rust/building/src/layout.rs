// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixed layout constants shared by every floor

/// Thickness of floor and ceiling slabs
pub const SLAB_THICKNESS: f64 = 0.2;
/// Thickness of solid envelope walls
pub const WALL_THICKNESS: f64 = 0.2;
/// Margin removed from each bay so neighbours never touch
pub const BAY_GAP: f64 = 0.2;

/// Share of the inner depth taken by the garage row
pub const GARAGE_DEPTH_RATIO: f64 = 0.7;
/// Share of the inner depth taken by the corridor on office floors
pub const CORRIDOR_DEPTH_RATIO: f64 = 0.3;
/// Nominal entrance width (capped to half the footprint)
pub const ENTRANCE_WIDTH: f64 = 3.0;

/// Footprint side of each core shaft
pub const CORE_SIZE: f64 = 2.4;
/// Core centers measured from the left edge: stair, then elevator
pub const CORE_OFFSETS: [f64; 2] = [1.5, 4.5];
/// Cores stop short of the ceiling
pub const CORE_HEIGHT_RATIO: f64 = 0.95;

/// Depth taken from the back of every bay that shares an x range with the cores
pub const CORE_CLEARANCE: f64 = CORE_SIZE + BAY_GAP;

/// Smallest accepted floor height
pub const MIN_FLOOR_HEIGHT: f64 = 1.0;
/// Smallest accepted width: both cores fit between the left edge and the right wall
pub const MIN_WIDTH: f64 = CORE_OFFSETS[1] + CORE_SIZE / 2.0 + WALL_THICKNESS;
/// Smallest accepted depth: the office row keeps at least one gap of depth in
/// front of the cores
pub const MIN_DEPTH: f64 =
    WALL_THICKNESS + (CORE_CLEARANCE + 2.0 * BAY_GAP) / (1.0 - CORRIDOR_DEPTH_RATIO);

/// X center of bay `index` in a row of `count` bays, centered on x = 0.
#[inline]
pub fn bay_center_x(index: usize, count: usize, pitch: f64) -> f64 {
    (index as f64 - (count as f64 - 1.0) / 2.0) * pitch
}

/// Depth between the back wall and the street facade
#[inline]
pub fn inner_depth(depth: f64) -> f64 {
    depth - WALL_THICKNESS
}

/// X range covered by the two cores, from the left of the stair to the right
/// of the elevator
#[inline]
pub fn core_span_x(width: f64) -> (f64, f64) {
    let left = -width / 2.0;
    (
        left + CORE_OFFSETS[0] - CORE_SIZE / 2.0,
        left + CORE_OFFSETS[1] + CORE_SIZE / 2.0,
    )
}

/// True when a bay spanning `[min_x, max_x]` shares floor area with the cores
#[inline]
pub fn bay_meets_cores(min_x: f64, max_x: f64, width: f64) -> bool {
    let (core_min, core_max) = core_span_x(width);
    max_x > core_min + 1e-9 && min_x < core_max - 1e-9
}

/// Height between the two slabs
#[inline]
pub fn interior_height(floor_height: f64) -> f64 {
    floor_height - 2.0 * SLAB_THICKNESS
}
