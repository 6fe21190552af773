// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building-wide configuration

use crate::error::{Error, Result};
use crate::layout;
use serde::{Deserialize, Serialize};

/// Building-wide dimensions the generator derives every volume from.
///
/// All lengths share one unit (meters in the reference building). The field
/// names of the first prototype (`rdcHeight`, `floorHeight`, `totalFloors`,
/// `officeCount`) are accepted as JSON aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BuildingConfig {
    /// Footprint extent along X
    pub width: f64,
    /// Footprint extent along Z
    pub depth: f64,
    /// Height of the ground floor (garages and entrances)
    #[serde(alias = "rdcHeight")]
    pub ground_floor_height: f64,
    /// Height of every office floor
    #[serde(alias = "floorHeight")]
    pub upper_floor_height: f64,
    /// Number of floors including the ground floor
    #[serde(alias = "totalFloors")]
    pub floor_count: usize,
    /// Garages per ground floor, offices per upper floor
    #[serde(alias = "officeCount")]
    pub bay_count: usize,
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            width: 48.0,
            depth: 9.0,
            ground_floor_height: 4.0,
            upper_floor_height: 3.0,
            floor_count: 8,
            bay_count: 8,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::NonPositiveDimension { field, value })
    }
}

fn at_least(field: &'static str, value: f64, min: f64) -> Result<()> {
    if value >= min {
        Ok(())
    } else {
        Err(Error::TooSmall { field, value, min })
    }
}

impl BuildingConfig {
    /// Check every invariant the generator relies on.
    pub fn validate(&self) -> Result<()> {
        positive("width", self.width)?;
        positive("depth", self.depth)?;
        positive("groundFloorHeight", self.ground_floor_height)?;
        positive("upperFloorHeight", self.upper_floor_height)?;

        if self.floor_count == 0 {
            return Err(Error::ZeroFloorCount);
        }
        if self.bay_count == 0 {
            return Err(Error::ZeroBayCount);
        }

        at_least("width", self.width, layout::MIN_WIDTH)?;
        at_least("depth", self.depth, layout::MIN_DEPTH)?;
        at_least("groundFloorHeight", self.ground_floor_height, layout::MIN_FLOOR_HEIGHT)?;
        at_least("upperFloorHeight", self.upper_floor_height, layout::MIN_FLOOR_HEIGHT)?;

        if self.bay_pitch() <= layout::BAY_GAP {
            return Err(Error::BayLayout {
                width: self.width,
                bay_count: self.bay_count,
                gap: layout::BAY_GAP,
            });
        }

        Ok(())
    }

    /// Height of floor `index` (ground rule for index 0)
    #[inline]
    pub fn floor_height(&self, index: usize) -> f64 {
        if index == 0 {
            self.ground_floor_height
        } else {
            self.upper_floor_height
        }
    }

    /// Base elevation of floor `index`: the sum of all lower floor heights
    #[inline]
    pub fn y_offset(&self, index: usize) -> f64 {
        match index {
            0 => 0.0,
            n => self.ground_floor_height + (n - 1) as f64 * self.upper_floor_height,
        }
    }

    /// Height of the whole stack
    #[inline]
    pub fn total_height(&self) -> f64 {
        self.y_offset(self.floor_count)
    }

    /// Center-to-center distance between neighbouring bays
    #[inline]
    pub fn bay_pitch(&self) -> f64 {
        self.width / self.bay_count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_valid() {
        assert!(BuildingConfig::default().validate().is_ok());
    }

    #[test]
    fn test_y_offsets() {
        let config = BuildingConfig::default();

        assert_relative_eq!(config.y_offset(0), 0.0);
        assert_relative_eq!(config.y_offset(1), 4.0);
        assert_relative_eq!(config.y_offset(3), 10.0);
        assert_relative_eq!(config.total_height(), 25.0);
    }

    #[test]
    fn test_y_offset_matches_running_sum() {
        let config = BuildingConfig {
            ground_floor_height: 4.7,
            upper_floor_height: 2.9,
            floor_count: 30,
            ..Default::default()
        };

        let mut running = 0.0;
        for i in 0..config.floor_count {
            assert_relative_eq!(config.y_offset(i), running, epsilon = 1e-9);
            running += config.floor_height(i);
        }
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let config = BuildingConfig {
            depth: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(Error::NonPositiveDimension {
                field: "depth",
                value: 0.0
            })
        );

        let config = BuildingConfig {
            upper_floor_height: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::NonPositiveDimension {
                field: "upperFloorHeight",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_zero_counts() {
        let config = BuildingConfig {
            floor_count: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(Error::ZeroFloorCount));

        let config = BuildingConfig {
            bay_count: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(Error::ZeroBayCount));
    }

    #[test]
    fn test_rejects_overcrowded_bays() {
        let config = BuildingConfig {
            width: 10.0,
            bay_count: 100,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::BayLayout { .. })));
    }

    #[test]
    fn test_rejects_tiny_floors() {
        let config = BuildingConfig {
            ground_floor_height: 0.3,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::TooSmall {
                field: "groundFloorHeight",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_footprint_too_small_for_cores() {
        let narrow = BuildingConfig {
            width: 4.0,
            bay_count: 2,
            ..Default::default()
        };
        assert_eq!(
            narrow.validate(),
            Err(Error::TooSmall {
                field: "width",
                value: 4.0,
                min: layout::MIN_WIDTH,
            })
        );

        let shallow = BuildingConfig {
            depth: 2.0,
            ..Default::default()
        };
        assert!(matches!(
            shallow.validate(),
            Err(Error::TooSmall { field: "depth", .. })
        ));

        let smallest = BuildingConfig {
            width: layout::MIN_WIDTH,
            depth: layout::MIN_DEPTH,
            bay_count: 1,
            ..Default::default()
        };
        assert_eq!(smallest.validate(), Ok(()));
    }

    #[test]
    fn test_prototype_field_aliases() {
        let json = r#"{"width":48,"depth":9,"rdcHeight":4,"floorHeight":3,"totalFloors":8,"officeCount":8}"#;
        let config: BuildingConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, BuildingConfig::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: BuildingConfig = serde_json::from_str(r#"{"floorCount":3}"#).unwrap();
        assert_eq!(config.floor_count, 3);
        assert_relative_eq!(config.width, 48.0);
    }
}
