/*
This file is part of the Remote Sensing Zonal Tools
Copyright (C) 2022 Novel-T

The Remote Sensing Zonal Tools is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::util::DEFAULT_RAM_MB;

/// What to emit for zones where no valid pixel was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmptyZonePolicy {
    /// Keep the feature with all statistics 0
    #[default]
    ZeroFill,
    /// Drop the feature from the output
    Skip,
}

impl FromStr for EmptyZonePolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "zero_fill" | "zero" => Ok(EmptyZonePolicy::ZeroFill),
            "skip" => Ok(EmptyZonePolicy::Skip),
            _ => bail!("Unknown empty zone policy '{}', expected zero_fill or skip", s)
        }
    }
}

/// Parameters of a zonal statistics run
///
/// ```toml
/// no_data_value = -9999.0
/// reproject = true
/// ram_mb = 128
/// empty_zones = "skip"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields, default)]
pub struct ZonalStatsConfig {
    /// Pixels where any band equals this value are ignored
    pub no_data_value: Option<f64>,
    /// Reproject the zones to the raster CRS before rasterizing
    pub reproject: bool,
    /// Memory for one split of value data, 0 for the default
    pub ram_mb: u32,
    pub empty_zones: EmptyZonePolicy,
}

impl ZonalStatsConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let s = read_to_string(path).with_context(|| format!("Cannot read config {:?}", path))?;
        Self::from_toml_str(&s).with_context(|| format!("Invalid config {:?}", path))
    }

    pub fn effective_ram_mb(&self) -> u32 {
        if self.ram_mb == 0 { DEFAULT_RAM_MB } else { self.ram_mb }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = ZonalStatsConfig::from_toml_str(r#"
            no_data_value = -9999.0
            reproject = true
            empty_zones = "skip"
        "#).unwrap();

        assert_eq!(config.no_data_value, Some(-9999.0));
        assert!(config.reproject);
        assert_eq!(config.ram_mb, 0);
        assert_eq!(config.effective_ram_mb(), DEFAULT_RAM_MB);
        assert_eq!(config.empty_zones, EmptyZonePolicy::Skip);

        assert_eq!(ZonalStatsConfig::from_toml_str("").unwrap(), ZonalStatsConfig::default());
        assert!(ZonalStatsConfig::from_toml_str("ram = 5").is_err());
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("zero-fill".parse::<EmptyZonePolicy>().unwrap(), EmptyZonePolicy::ZeroFill);
        assert_eq!("Skip".parse::<EmptyZonePolicy>().unwrap(), EmptyZonePolicy::Skip);
        assert!("drop".parse::<EmptyZonePolicy>().is_err());
    }
}
