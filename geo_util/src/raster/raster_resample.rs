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
use anyhow::{bail, Result};
use log::debug;
use ndarray::{s, Array3, Axis, Zip};

use crate::errors::ZonalError;
use crate::raster::{is_sample_nodata, Raster, RasterStats};

/// No data value of the mean resample filter when none is given
pub const DEFAULT_RESAMPLE_NO_DATA: f64 = 0.0;

/// Output grid of a step_x by step_y block resample, same top left corner
pub fn resampled_stats(stats: &RasterStats, step_x: usize, step_y: usize) -> Result<RasterStats> {
    if step_x == 0 || step_y == 0 {
        return Err(ZonalError::InvalidStep { step_x, step_y }.into());
    }

    let mut output = stats.clone();
    output.num_cols = stats.num_cols / step_x as u32;
    output.num_rows = stats.num_rows / step_y as u32;
    output.pixel_width = stats.pixel_width * step_x as f64;
    output.pixel_height = stats.pixel_height * step_y as f64;

    if output.num_cols == 0 || output.num_rows == 0 {
        bail!("Step {}x{} is larger than the raster ({} cols, {} rows)",
            step_x, step_y, stats.num_cols, stats.num_rows);
    }

    Ok(output)
}

/// Each output pixel is the mean of the valid input pixels of its block, 0 if there are none
pub fn mean_resample(raster: &Raster, step_x: usize, step_y: usize, no_data: f64) -> Result<Raster> {
    let mut stats = resampled_stats(&raster.stats, step_x, step_y)?;
    stats.no_data_value = Some(no_data);

    debug!("Mean resample {}x{} -> {}x{}", raster.stats.num_cols, raster.stats.num_rows, stats.num_cols, stats.num_rows);

    let sample_type = raster.stats.sample_type;
    let mut data = Array3::zeros((raster.num_bands(), stats.num_rows as usize, stats.num_cols as usize));

    for (band_index, out_band) in data.axis_iter_mut(Axis(0)).enumerate() {
        let in_band = raster.band(band_index);

        Zip::indexed(out_band).par_for_each(|(row, col), out| {
            let block = in_band.slice(s![
                row * step_y..(row + 1) * step_y,
                col * step_x..(col + 1) * step_x
            ]);

            let (sum, count) = block.iter()
                .filter(|v| !is_sample_nodata(**v, no_data, sample_type))
                .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

            *out = if count == 0 { 0.0 } else { sum / count as f64 };
        });
    }

    Raster::new(stats, data)
}
