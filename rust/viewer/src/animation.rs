// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Frame-driven interpolation records
//!
//! A [`Tween`] is a plain value: the render loop samples it once per tick,
//! and superseding an in-flight animation is just replacing the record.
//! Its clock starts at the first sample, so a tween created after the host
//! stopped ticking still plays in full once ticking resumes.

use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized time
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    QuadraticInOut,
    #[default]
    CubicInOut,
}

impl Easing {
    /// Map `t` in [0, 1] onto the curve; input is clamped
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// How camera moves and floor reveals are animated
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AnimationStrategy {
    /// Jump straight to the end value
    Instant,
    /// Interpolate over `duration_ms`
    Eased {
        #[serde(rename = "durationMs")]
        duration_ms: f64,
        easing: Easing,
    },
}

impl Default for AnimationStrategy {
    fn default() -> Self {
        AnimationStrategy::Eased {
            duration_ms: 1000.0,
            easing: Easing::CubicInOut,
        }
    }
}

impl AnimationStrategy {
    /// Tween from `start` to `end`, or `None` when the strategy is instant
    /// (callers then apply `end` directly).
    pub fn tween<T: Interpolate>(&self, start: T, end: T) -> Option<Tween<T>> {
        match *self {
            AnimationStrategy::Instant => None,
            AnimationStrategy::Eased {
                duration_ms,
                easing,
            } if duration_ms > 0.0 => Some(Tween {
                start,
                end,
                start_time: None,
                duration: duration_ms,
                easing,
            }),
            AnimationStrategy::Eased { .. } => None,
        }
    }
}

/// Values that can be blended linearly
pub trait Interpolate: Clone {
    fn lerp(&self, other: &Self, t: f64) -> Self;
}

impl Interpolate for f64 {
    #[inline]
    fn lerp(&self, other: &Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

/// Interpolation record `{start, end, start_time, duration, easing}`
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T> {
    pub start: T,
    pub end: T,
    /// Milliseconds, same clock as [`Tween::sample`]; set by the first sample
    pub start_time: Option<f64>,
    pub duration: f64,
    pub easing: Easing,
}

impl<T: Interpolate> Tween<T> {
    /// Value at `now`, and whether the tween has reached its end
    pub fn sample(&mut self, now: f64) -> (T, bool) {
        let start_time = *self.start_time.get_or_insert(now);
        let t = (now - start_time) / self.duration;
        if t >= 1.0 {
            return (self.end.clone(), true);
        }
        let eased = self.easing.apply(t);
        (self.start.lerp(&self.end, eased), false)
    }
}
