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
use std::borrow::Cow;
use std::mem::size_of;

use anyhow::Result;
use log::{debug, info};

use crate::errors::ZonalError;
use crate::raster::{rasterize_zones, RasterSource, ZoneIdRaster};
use crate::util::{RasterChunkIterator, RasterChunkIteratorItem};
use crate::vector::{reproject_layer, ZoneLayer};
use crate::zonal::{attach_statistics, finalize, AccumulatorSummary, ZonalAccumulator, ZonalObserver,
                   ZonalStatsConfig, ZoneStatistics};

#[derive(Debug, Clone, PartialEq)]
pub struct ZonalComputation {
    pub statistics: Vec<ZoneStatistics>,
    pub summary: AccumulatorSummary,
}

/// Accumulates `source` over `zones` split by split, in the order of `splits`, and finalizes
pub fn compute_zonal_statistics<S, I>(
    source: &S,
    zones: &ZoneIdRaster,
    num_zones: usize,
    no_data_value: Option<f64>,
    splits: I,
    observer: &mut dyn ZonalObserver,
) -> Result<ZonalComputation>
where
    S: RasterSource + ?Sized,
    I: IntoIterator<Item = RasterChunkIteratorItem<usize>>,
{
    let stats = source.stats();

    if stats.num_pixels() != zones.num_pixels() {
        return Err(ZonalError::PixelCountMismatch {
            value_pixels: stats.num_pixels(),
            zone_pixels: zones.num_pixels(),
        }.into());
    }
    stats.check_same_grid(&zones.stats)?;

    let mut acc = ZonalAccumulator::new(num_zones, stats.num_bands as usize, no_data_value, stats.sample_type);

    for split in splits {
        let values = source.read_window(split.window_offset, split.window_size)?;
        let ids = zones.read_window(split.window_offset, split.window_size)?;

        acc.accumulate_window(values.view(), ids)?;

        observer.on_split(&split);
    }

    observer.on_finished(acc.summary());

    Ok(ZonalComputation {
        statistics: finalize(&acc),
        summary: *acc.summary(),
    })
}

/// Bytes held per pixel while a split is processed
fn split_bytes_per_pixel(num_bands: usize) -> usize {
    num_bands * size_of::<f64>() + size_of::<u32>()
}

/// Full zonal statistics run, returns a copy of `layer` with the statistics attached
pub fn run_zonal_statistics<S>(
    source: &S,
    layer: &ZoneLayer,
    config: &ZonalStatsConfig,
    observer: &mut dyn ZonalObserver,
) -> Result<ZoneLayer>
where S: RasterSource + ?Sized
{
    let stats = source.stats();
    info!("Zonal statistics of {} zones over {}x{} pixels, {} band(s)",
        layer.len(), stats.num_cols, stats.num_rows, stats.num_bands);

    let zone_layer: Cow<ZoneLayer> = if config.reproject {
        Cow::Owned(reproject_layer(layer, stats.epsg)?)
    } else {
        Cow::Borrowed(layer)
    };

    let zones = rasterize_zones(&zone_layer, stats)?;

    let no_data_value = config.no_data_value.or(stats.no_data_value);
    debug!("Using no data value {:?}", no_data_value);

    //a raster without pixels has no splits
    let splits = if stats.num_pixels() > 0 {
        Some(RasterChunkIterator::for_ram_budget(
            stats.num_rows as usize,
            stats.num_cols as usize,
            split_bytes_per_pixel(stats.num_bands as usize),
            config.effective_ram_mb()))
    } else {
        None
    };

    let computation = compute_zonal_statistics(
        source, &zones, layer.len(), no_data_value,
        splits.into_iter().flatten(), observer)?;

    Ok(attach_statistics(layer, &computation.statistics, stats.num_bands as usize, config.empty_zones))
}

#[cfg(test)]
mod engine_tests {
    use super::*;
    use crate::raster::{square_zone, test_stats, write_geotiff_strips, GeoTiffSource, Raster, RasterStats, SampleType, NO_ZONE_ID};
    use crate::util::get_temp_filename;
    use crate::zonal::{EmptyZonePolicy, NullObserver};
    use float_cmp::approx_eq;
    use geo::{Coord, Rect};
    use ndarray::{Array2, Array3};

    /// 7 rows, 5 cols, 2 bands with a few no data pixels
    fn test_raster() -> Raster {
        let stats = RasterStats {
            num_bands: 2,
            no_data_value: Some(-9999.0),
            ..test_stats(7, 5)
        };
        let data = Array3::from_shape_fn((2, 7, 5), |(b, r, c)| {
            if (r * 5 + c) % 11 == 3 && b == (r + c) % 2 {
                -9999.0
            } else {
                ((r * 31 + c * 17 + b * 7) % 23) as f64 * 0.37 - 2.0
            }
        });
        Raster::new(stats, data).unwrap()
    }

    fn test_layer() -> ZoneLayer {
        ZoneLayer::new(vec![
            square_zone(0.0, 0.0, 3.0),
            square_zone(2.0, 3.0, 3.0),
            square_zone(1.0, 5.0, 2.0),
            //outside
            square_zone(50.0, 50.0, 2.0),
        ])
    }

    fn run(raster: &Raster, zones: &ZoneIdRaster, splits: Vec<RasterChunkIteratorItem<usize>>) -> ZonalComputation {
        compute_zonal_statistics(raster, zones, 4, raster.stats.no_data_value, splits, &mut NullObserver).unwrap()
    }

    #[test]
    fn test_count_conservation() {
        let raster = test_raster();
        let zones = rasterize_zones(&test_layer(), &raster.stats).unwrap();

        let c = run(&raster, &zones, RasterChunkIterator::new(7, 5, 2).collect());

        for band in 0..2 {
            let counted: u64 = c.statistics.iter().map(|s| s.bands[band].count).sum();
            assert_eq!(counted + c.summary.no_zone_pixels + c.summary.no_data_pixels, 35);
        }
        assert_eq!(c.summary.total_pixels, 35);
        assert_eq!(c.summary.windows, 4);
        assert!(c.summary.no_data_pixels > 0);
        assert!(c.summary.no_zone_pixels > 0);
    }

    #[test]
    fn test_split_order_independence() {
        let raster = test_raster();
        let zones = rasterize_zones(&test_layer(), &raster.stats).unwrap();

        let reference = run(&raster, &zones, RasterChunkIterator::new(7, 5, 1).collect());

        let mut reversed: Vec<RasterChunkIteratorItem<usize>> = RasterChunkIterator::new(7, 5, 3).collect();
        reversed.reverse();

        let split_sets: Vec<Vec<RasterChunkIteratorItem<usize>>> = vec![
            RasterChunkIterator::new(7, 5, 2).collect(),
            RasterChunkIterator::new(7, 5, 5).collect(),
            reversed,
        ];

        for splits in split_sets {
            let other = run(&raster, &zones, splits);

            for (a, b) in reference.statistics.iter().zip(other.statistics.iter()) {
                for (ba, bb) in a.bands.iter().zip(b.bands.iter()) {
                    assert_eq!(ba.count, bb.count);
                    assert_eq!(ba.min, bb.min);
                    assert_eq!(ba.max, bb.max);
                    assert!(approx_eq!(f64, ba.mean, bb.mean, epsilon = 1e-9));
                    assert!(approx_eq!(f64, ba.stdev, bb.stdev, epsilon = 1e-9));
                }
            }
        }
    }

    #[test]
    fn test_known_values() {
        let stats = test_stats(2, 2);
        let raster = Raster::new(stats, Array3::from_shape_vec((1, 2, 2), vec![10.0, 20.0, 30.0, 40.0]).unwrap()).unwrap();
        let layer = ZoneLayer::new(vec![square_zone(0.0, 0.0, 2.0)]);

        let output = run_zonal_statistics(&raster, &layer, &ZonalStatsConfig::default(), &mut NullObserver).unwrap();

        let p = &output.features[0].properties;
        assert_eq!(p["count"], 4);
        assert_eq!(p["mean_0"], 25.0);
        assert_eq!(p["min_0"], 10.0);
        assert_eq!(p["max_0"], 40.0);
        let stdev = p["stdev_0"].as_f64().unwrap();
        assert!(approx_eq!(f64, stdev, 12.909944487358056, epsilon = 1e-9));
    }

    #[test]
    fn test_single_pixel_and_empty_zones() {
        let stats = RasterStats { no_data_value: Some(0.0), ..test_stats(3, 3) };
        let mut data = Array3::from_elem((1, 3, 3), 5.0);
        data[[0, 0, 0]] = 42.0;
        data[[0, 2, 2]] = 0.0;
        let raster = Raster::new(stats, data).unwrap();

        let layer = ZoneLayer::new(vec![
            //top left pixel
            square_zone(0.0, 2.0, 1.0),
            //bottom right pixel, no data
            square_zone(2.0, 0.0, 1.0),
            //outside
            square_zone(10.0, 10.0, 1.0),
        ]);

        let output = run_zonal_statistics(&raster, &layer, &ZonalStatsConfig::default(), &mut NullObserver).unwrap();
        let single = &output.features[0].properties;
        assert_eq!(single["count"], 1);
        assert_eq!(single["mean_0"], 42.0);
        assert_eq!(single["min_0"], 42.0);
        assert_eq!(single["max_0"], 42.0);
        assert_eq!(single["stdev_0"], 0.0);

        for empty in &output.features[1..] {
            for field in ["count", "mean_0", "stdev_0", "min_0", "max_0"] {
                assert_eq!(empty.properties[field].as_f64(), Some(0.0));
            }
        }

        let config = ZonalStatsConfig { empty_zones: EmptyZonePolicy::Skip, ..Default::default() };
        let skipped = run_zonal_statistics(&raster, &layer, &config, &mut NullObserver).unwrap();
        assert_eq!(skipped.features.len(), 1);

        //an explicit no data value replaces the raster's
        let config = ZonalStatsConfig { no_data_value: Some(42.0), ..Default::default() };
        let output = run_zonal_statistics(&raster, &layer, &config, &mut NullObserver).unwrap();
        assert_eq!(output.features[0].properties["count"], 0);
        assert_eq!(output.features[1].properties["count"], 1);
    }

    #[test]
    fn test_grid_mismatch() {
        let raster = test_raster();
        let zones = ZoneIdRaster::new(test_stats(5, 7), Array2::from_elem((5, 7), NO_ZONE_ID)).unwrap();

        let err = compute_zonal_statistics(&raster, &zones, 1, None, RasterChunkIterator::new(7, 5, 1), &mut NullObserver).unwrap_err();
        assert!(matches!(err.downcast_ref::<ZonalError>(), Some(ZonalError::GridMismatch(_))));

        let zones = ZoneIdRaster::new(test_stats(5, 5), Array2::from_elem((5, 5), NO_ZONE_ID)).unwrap();
        let err = compute_zonal_statistics(&raster, &zones, 1, None, RasterChunkIterator::new(7, 5, 1), &mut NullObserver).unwrap_err();
        assert_eq!(err.downcast_ref::<ZonalError>(),
            Some(&ZonalError::PixelCountMismatch { value_pixels: 35, zone_pixels: 25 }));
    }

    #[test]
    fn test_reproject_zones() {
        //UTM 33N around the equator crossing of the central meridian, 100m pixels
        let stats = RasterStats {
            origin_x: 499800.0,
            origin_y: 200.0,
            pixel_width: 100.0,
            pixel_height: -100.0,
            num_rows: 4,
            num_cols: 4,
            sample_type: SampleType::F32,
            epsg: Some(32633),
            ..Default::default()
        };
        let raster = Raster::filled(&stats, 3.0);

        //roughly x 498900..501100, y -110..110
        let mut layer = ZoneLayer::new(vec![crate::vector::ZoneFeature::new(geo::MultiPolygon(vec![
            Rect::new(Coord { x: 14.99, y: -0.001 }, Coord { x: 15.01, y: 0.001 }).to_polygon()
        ]))]);
        layer.epsg = Some(4326);

        let config = ZonalStatsConfig { reproject: true, ..Default::default() };
        let output = run_zonal_statistics(&raster, &layer, &config, &mut NullObserver).unwrap();
        assert_eq!(output.features[0].properties["count"], 8);
        //original geometry is kept
        assert_eq!(output.features[0].geometry, layer.features[0].geometry);
        assert_eq!(output.epsg, Some(4326));

        let output = run_zonal_statistics(&raster, &layer, &ZonalStatsConfig::default(), &mut NullObserver).unwrap();
        assert_eq!(output.features[0].properties["count"], 0);
    }

    #[test]
    fn test_empty_raster() {
        let raster = Raster::filled(&test_stats(0, 0), 1.0);
        let output = run_zonal_statistics(&raster, &test_layer(), &ZonalStatsConfig::default(), &mut NullObserver).unwrap();
        assert_eq!(output.features.len(), 4);
        assert!(output.features.iter().all(|f| f.properties["count"] == 0));
    }

    #[test]
    fn test_streamed_file_matches_in_memory() {
        let path = get_temp_filename("streamed.tif");
        write_geotiff_strips(&path, &test_raster(), 2).unwrap();

        let in_memory = Raster::read(&path).unwrap();
        let streamed = GeoTiffSource::open(&path).unwrap();
        let zones = rasterize_zones(&test_layer(), &in_memory.stats).unwrap();

        let reference = run(&in_memory, &zones, RasterChunkIterator::new(7, 5, 1).collect());

        for n_chunks in [1usize, 3, 7] {
            let windowed = compute_zonal_statistics(&streamed, &zones, 4, streamed.stats().no_data_value,
                RasterChunkIterator::new(7, 5, n_chunks), &mut NullObserver).unwrap();

            assert_eq!(windowed.summary.total_pixels, reference.summary.total_pixels);
            assert_eq!(windowed.summary.no_data_pixels, reference.summary.no_data_pixels);
            for (a, b) in reference.statistics.iter().zip(windowed.statistics.iter()) {
                for (ba, bb) in a.bands.iter().zip(b.bands.iter()) {
                    assert_eq!(ba.count, bb.count);
                    assert_eq!(ba.min, bb.min);
                    assert_eq!(ba.max, bb.max);
                    assert!(approx_eq!(f64, ba.mean, bb.mean, epsilon = 1e-9));
                    assert!(approx_eq!(f64, ba.stdev, bb.stdev, epsilon = 1e-9));
                }
            }
        }

        let output = run_zonal_statistics(&streamed, &test_layer(), &ZonalStatsConfig::default(), &mut NullObserver).unwrap();
        assert_eq!(output.len(), 4);
    }
}
