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
use serde::{Deserialize, Serialize};
use core::fmt;
use anyhow::Result;

use crate::errors::ZonalError;
use crate::raster::{is_sample_nodata, SampleType};

/// Helper struct to hold the geometry and metadata of a raster
///
/// Origin is the top left corner of the top left pixel, pixel height is negative for north up rasters.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RasterStats {
    pub origin_y: f64,
    pub origin_x: f64,
    pub pixel_height: f64,
    pub pixel_width: f64,
    pub num_rows: u32,
    pub num_cols: u32,
    pub num_bands: u32,
    pub no_data_value: Option<f64>,
    pub sample_type: SampleType,

    //None when the raster has no (or a user defined) CRS
    pub epsg: Option<u32>,
}

impl Default for RasterStats {
    fn default() -> Self {
        RasterStats {
            origin_y: 0.0,
            origin_x: 0.0,
            pixel_height: -1.0,
            pixel_width: 1.0,
            num_rows: 0,
            num_cols: 0,
            num_bands: 1,
            no_data_value: None,
            sample_type: SampleType::F64,
            epsg: None
        }
    }
}

pub const MEDIUM_EPSILON: f64 = 1e-10;

// In lat/lon this is less than a meter
pub const LARGE_EPSILON: f64 = 1e-6;

pub fn assert_float_within_eps(a: f64, b: f64, eps: f64, msg: &str) {
    let diff =  (a-b).abs();
    if diff > eps {
        let message = format!("{} Val 1: {} Val 2: {} Abs. Difference: {}  Eps: {}", msg,
                              a, b, diff, eps);
        panic!("{}", message);
    }
}

fn check_float_within_eps(a: f64, b: f64, eps: f64, msg: &str) -> Result<()> {
    let diff =  (a-b).abs();
    if !(diff <= eps) {
        return Err(ZonalError::GridMismatch(
            format!("{} Val 1: {} Val 2: {} Abs. Difference: {}  Eps: {}", msg, a, b, diff, eps)).into());
    }
    Ok(())
}

impl fmt::Display for RasterStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {

        write!(f, "Origin X,Y: {}, {}\nRight/Bottom: {},{}\nPixel Width/Height: {},{}\nRows: {} Cols: {} Bands: {}\nNo data value: {}\nSample type: {:?}\nEPSG: {}",
               self.origin_x,
               self.origin_y,
               self.right_x_coord(),
               self.bottom_y_coord(),
               self.pixel_width,
               self.pixel_height,
               self.num_rows,
               self.num_cols,
               self.num_bands,
               self.no_data_value.map(|nd| nd.to_string()).unwrap_or_else(|| "None".to_string()),
               self.sample_type,
               self.epsg.map(|e| e.to_string()).unwrap_or_else(|| "Unknown".to_string()),
        )
    }
}


impl RasterStats {

    pub fn num_pixels(&self) -> usize {
        self.num_rows as usize * self.num_cols as usize
    }

    /// Projected coordinate of the center of raster square (x, y)
    pub fn calc_center(&self, raster_xy: (usize, usize)) -> [f64;2] {
        [self.origin_x + self.pixel_width * (raster_xy.0 as f64 + 0.5),
        self.origin_y + self.pixel_height * (raster_xy.1 as f64 + 0.5) ]
    }

    /// Calculates the left side
    /// Calculates projected x coordinate from raster_x
    pub fn calc_x_coord(&self, raster_x: i64) -> f64 {
        self.origin_x + self.pixel_width * raster_x as f64
    }
    pub fn right_x_coord(&self) -> f64 {
        self.calc_x_coord(self.num_cols as i64)
    }
    ///calculates the top side
    /// Note pixel height is negative
    pub fn calc_y_coord(&self, raster_y: i64) -> f64 {
        self.origin_y + self.pixel_height * raster_y as f64
    }
    pub fn bottom_y_coord(&self) -> f64 {
        self.calc_y_coord(self.num_rows as i64)
    }

    /// Stats of a window of this raster, origin moved to the window's top left corner
    pub fn window_stats(&self, window_offset: (usize, usize), window_size: (usize, usize)) -> RasterStats {
        let mut stats = self.clone();
        stats.origin_x = self.calc_x_coord(window_offset.0 as i64);
        stats.origin_y = self.calc_y_coord(window_offset.1 as i64);
        stats.num_cols = window_size.0 as u32;
        stats.num_rows = window_size.1 as u32;
        stats
    }

    /// Checks the 2 rasters share the same grid, i.e. pixel (x,y) of one is pixel (x,y) of the other
    pub fn check_same_grid(&self, rhs: &Self) -> Result<()> {

        if self.num_cols != rhs.num_cols || self.num_rows != rhs.num_rows {
            return Err(ZonalError::GridMismatch(format!("Size {}x{} vs {}x{}",
                self.num_cols, self.num_rows, rhs.num_cols, rhs.num_rows)).into());
        }
        check_float_within_eps(self.origin_x, rhs.origin_x, LARGE_EPSILON, "Origin X")?;
        check_float_within_eps(self.origin_y, rhs.origin_y, LARGE_EPSILON, "Origin Y")?;

        check_float_within_eps(self.pixel_height, rhs.pixel_height, MEDIUM_EPSILON, "pixel height")?;
        check_float_within_eps(self.pixel_width, rhs.pixel_width, MEDIUM_EPSILON, "pixel width")?;

        Ok(())
    }

    //Shortcut when dealing with f64 values & nodata.  Handles f32 case
    pub fn is_nodata(&self, in_value: f64) -> bool {
        match self.no_data_value {
            Some(nd) => is_sample_nodata(in_value, nd, self.sample_type),
            None => false
        }
    }
}
