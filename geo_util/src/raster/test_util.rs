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
use std::path::{Path, PathBuf};

use anyhow::Result;
use geo::{polygon, MultiPolygon};
use ndarray::Array3;

use crate::raster::{Raster, RasterStats};
use crate::util::get_temp_filename;
use crate::vector::ZoneFeature;

/// North up grid of 1x1 pixels with its top left corner at (0, num_rows)
pub fn test_stats(num_rows: u32, num_cols: u32) -> RasterStats {
    RasterStats {
        origin_x: 0.0,
        origin_y: num_rows as f64,
        pixel_width: 1.0,
        pixel_height: -1.0,
        num_rows,
        num_cols,
        ..Default::default()
    }
}

/// Axis aligned square zone with its lower left corner at (x, y)
pub fn square_zone(x: f64, y: f64, size: f64) -> ZoneFeature {
    let square = polygon![
        (x: x, y: y),
        (x: x + size, y: y),
        (x: x + size, y: y + size),
        (x: x, y: y + size),
        (x: x, y: y),
    ];
    ZoneFeature::new(MultiPolygon(vec![square]))
}

pub fn create_test_raster(in_file_name: &str, input_raster_stats: &RasterStats, input_raster_data: &[f64]) -> Result<PathBuf> {
    create_test_raster_with_path(
        &get_temp_filename(in_file_name),
        input_raster_stats, input_raster_data)
}

/// Data is band, row, col order
pub fn create_test_raster_with_path(input_path: &Path, input_raster_stats: &RasterStats, input_raster_data: &[f64]) -> Result<PathBuf> {
    let data = Array3::from_shape_vec(
        (input_raster_stats.num_bands as usize, input_raster_stats.num_rows as usize, input_raster_stats.num_cols as usize),
        input_raster_data.to_vec())?;

    Raster::new(input_raster_stats.clone(), data)?.write(input_path)?;

    Ok(input_path.to_path_buf())
}
