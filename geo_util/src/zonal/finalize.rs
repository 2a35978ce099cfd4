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
use crate::zonal::{BandAccumulator, ZonalAccumulator};

/// Final statistics of one zone in one band, all 0 when no pixel was valid
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BandStatistics {
    pub count: u64,
    pub mean: f64,
    /// Unbiased (n - 1) standard deviation
    pub stdev: f64,
    pub min: f64,
    pub max: f64,
}

impl From<&BandAccumulator> for BandStatistics {
    fn from(acc: &BandAccumulator) -> Self {
        if acc.count == 0 {
            return BandStatistics::default();
        }

        let n = acc.count as f64;
        let mean = acc.sum / n;

        let stdev = if acc.count > 1 {
            let variance = (acc.sum_of_squares - acc.sum * acc.sum / n) / (n - 1.0);
            //cancellation can push a constant zone slightly below 0
            if variance > 0.0 { variance.sqrt() } else { 0.0 }
        } else {
            0.0
        };

        BandStatistics {
            count: acc.count,
            mean,
            stdev,
            min: acc.min,
            max: acc.max,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoneStatistics {
    pub zone_id: u32,
    pub bands: Vec<BandStatistics>,
}

impl ZoneStatistics {
    /// Valid pixel count, the same in every band
    pub fn count(&self) -> u64 {
        self.bands.first().map(|b| b.count).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Statistics of zone ids 1..=num_zones, in zone id order
pub fn finalize(acc: &ZonalAccumulator) -> Vec<ZoneStatistics> {
    (1..=acc.num_zones() as u32).map(|zone_id| ZoneStatistics {
        zone_id,
        bands: (0..acc.num_bands())
            .map(|band| acc.get(zone_id, band).map(BandStatistics::from).unwrap_or_default())
            .collect(),
    }).collect()
}

#[cfg(test)]
mod finalize_tests {
    use super::*;
    use crate::raster::SampleType;
    use float_cmp::approx_eq;
    use ndarray::{arr2, Array3};

    #[test]
    fn test_band_statistics() {
        let mut acc = BandAccumulator::default();
        assert_eq!(BandStatistics::from(&acc), BandStatistics::default());

        acc.add(7.5);
        let single = BandStatistics::from(&acc);
        assert_eq!(single, BandStatistics { count: 1, mean: 7.5, stdev: 0.0, min: 7.5, max: 7.5 });

        let mut known = BandAccumulator::default();
        for v in [10.0, 20.0, 30.0, 40.0] {
            known.add(v);
        }
        let stats = BandStatistics::from(&known);
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean, 25.0);
        assert!(approx_eq!(f64, stats.stdev, (500.0f64 / 3.0).sqrt(), epsilon = 1e-12));
        assert_eq!((stats.min, stats.max), (10.0, 40.0));
    }

    #[test]
    fn test_constant_zone() {
        let mut acc = BandAccumulator::default();
        for _ in 0..1000 {
            acc.add(0.1);
        }
        let stats = BandStatistics::from(&acc);
        assert!(stats.stdev >= 0.0 && stats.stdev < 1e-6);
        assert!(approx_eq!(f64, stats.mean, 0.1, epsilon = 1e-12));
    }

    #[test]
    fn test_finalize() {
        let mut acc = ZonalAccumulator::new(3, 1, None, SampleType::F64);
        let values = Array3::from_shape_vec((1, 1, 3), vec![1.0, 2.0, 4.0]).unwrap();
        acc.accumulate_window(values.view(), arr2(&[[1, 1, 3]]).view()).unwrap();

        let stats = finalize(&acc);
        assert_eq!(stats.len(), 3);
        assert_eq!(stats.iter().map(|s| s.zone_id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(stats[0].count(), 2);
        assert_eq!(stats[0].bands[0].mean, 1.5);
        assert!(stats[1].is_empty());
        assert_eq!(stats[1].bands[0], BandStatistics::default());
        assert_eq!(stats[2].bands[0].max, 4.0);
    }
}
