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
use log::debug;
use serde_json::json;

use crate::vector::ZoneLayer;
use crate::zonal::{BandStatistics, EmptyZonePolicy, ZoneStatistics};

pub const COUNT_FIELD: &str = "count";
pub const MEAN_PREFIX: &str = "mean";
pub const STDEV_PREFIX: &str = "stdev";
pub const MIN_PREFIX: &str = "min";
pub const MAX_PREFIX: &str = "max";

/// Attribute name of a per band statistic, bands are 0 based
pub fn field_name(prefix: &str, band: usize) -> String {
    format!("{}_{}", prefix, band)
}

/// Copy of `layer` where feature i carries the statistics of zone id i+1
pub fn attach_statistics(layer: &ZoneLayer, stats: &[ZoneStatistics], num_bands: usize, policy: EmptyZonePolicy) -> ZoneLayer {
    let empty = vec![BandStatistics::default(); num_bands];

    let mut output = ZoneLayer {
        features: Vec::with_capacity(layer.features.len()),
        bbox: layer.bbox,
        epsg: layer.epsg,
    };

    for (index, feature) in layer.features.iter().enumerate() {
        let zone_stats = stats.get(index);
        debug_assert!(zone_stats.map(|s| s.zone_id as usize == index + 1).unwrap_or(true));

        let bands = zone_stats.map(|s| &s.bands).unwrap_or(&empty);
        let count = zone_stats.map(|s| s.count()).unwrap_or(0);

        if count == 0 && policy == EmptyZonePolicy::Skip {
            debug!("Skipping empty zone {}", index + 1);
            continue;
        }

        let mut feature = feature.clone();
        feature.properties.insert(COUNT_FIELD.to_string(), json!(count));

        for band in 0..num_bands {
            let b = bands.get(band).copied().unwrap_or_default();
            feature.properties.insert(field_name(MEAN_PREFIX, band), json!(b.mean));
            feature.properties.insert(field_name(STDEV_PREFIX, band), json!(b.stdev));
            feature.properties.insert(field_name(MIN_PREFIX, band), json!(b.min));
            feature.properties.insert(field_name(MAX_PREFIX, band), json!(b.max));
        }

        output.features.push(feature);
    }

    output
}
