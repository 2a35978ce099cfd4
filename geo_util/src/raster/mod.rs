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
use std::path::{PathBuf, Path};
use anyhow::{bail, Result};
use ndarray::{s, Array3, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

mod raster_stats;
mod raster_resample;
mod burn_polygon;
mod algo;
mod geotiff;
mod region;
mod extract;

mod test_util;

pub use raster_stats::*;
pub use burn_polygon::*;
pub use algo::*;
pub use raster_resample::*;
pub use geotiff::*;
pub use region::*;
pub use extract::*;
pub use test_util::*;

/// Type of the samples as stored in the file, values are always handled as f64 in memory
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum SampleType {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

/// Windowed read access to a multi band raster
pub trait RasterSource {
    fn stats(&self) -> &RasterStats;

    /// Reads all bands of the window, shape is (band, row, col).  Offset and size are in X, Y order.
    fn read_window(&self, window_offset: (usize, usize), window_size: (usize, usize)) -> Result<Array3<f64>>;
}

/// A multi band raster held in memory
#[derive(Debug, Clone)]
pub struct Raster
{
    pub path: Option<PathBuf>,
    pub stats: RasterStats,
    //band, row, col
    pub data: Array3<f64>,
}

impl Raster {
    pub fn new(stats: RasterStats, data: Array3<f64>) -> Result<Raster> {
        let (num_bands, num_rows, num_cols) = data.dim();

        if num_bands != stats.num_bands as usize || num_rows != stats.num_rows as usize || num_cols != stats.num_cols as usize {
            bail!("Raster data shape (bands {}, rows {}, cols {}) does not match stats (bands {}, rows {}, cols {})",
                num_bands, num_rows, num_cols,
                stats.num_bands, stats.num_rows, stats.num_cols);
        }

        Ok(Raster {
            path: None,
            stats,
            data
        })
    }

    /// Raster where every band of every pixel is `value`
    pub fn filled(stats: &RasterStats, value: f64) -> Raster {
        let data = Array3::from_elem(
            (stats.num_bands as usize, stats.num_rows as usize, stats.num_cols as usize), value);

        Raster {
            path: None,
            stats: stats.clone(),
            data
        }
    }

    pub fn read(path: &Path) -> Result<Raster> {
        let mut raster = read_geotiff(path)?;
        raster.path = Some(path.to_path_buf());
        Ok(raster)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        write_geotiff(path, self)
    }

    /// 0 based band index
    pub fn band(&self, band_index: usize) -> ArrayView2<f64> {
        self.data.index_axis(Axis(0), band_index)
    }

    pub fn num_bands(&self) -> usize {
        self.data.dim().0
    }
}

impl RasterSource for Raster {
    fn stats(&self) -> &RasterStats {
        &self.stats
    }

    fn read_window(&self, window_offset: (usize, usize), window_size: (usize, usize)) -> Result<Array3<f64>> {
        let (x0, y0) = window_offset;
        let (x1, y1) = (x0 + window_size.0, y0 + window_size.1);

        if x1 > self.stats.num_cols as usize || y1 > self.stats.num_rows as usize {
            bail!("Window x: {}..{} y: {}..{} is outside the raster ({} cols, {} rows)",
                x0, x1, y0, y1, self.stats.num_cols, self.stats.num_rows);
        }

        Ok(self.data.slice(s![.., y0..y1, x0..x1]).to_owned())
    }
}

#[cfg(test)]
mod raster_tests {
    use super::*;

    #[test]
    fn test_read_window() {
        let stats = RasterStats {
            num_rows: 3,
            num_cols: 4,
            num_bands: 2,
            ..Default::default()
        };
        let data = Array3::from_shape_fn((2, 3, 4), |(b, r, c)| (b * 100 + r * 10 + c) as f64);
        let raster = Raster::new(stats, data).unwrap();

        let w = raster.read_window((1, 1), (2, 2)).unwrap();
        assert_eq!(w.dim(), (2, 2, 2));
        assert_eq!(w[[0, 0, 0]], 11.0);
        assert_eq!(w[[1, 1, 1]], 122.0);

        assert!(raster.read_window((3, 0), (2, 1)).is_err());
        assert_eq!(raster.band(1)[[2, 3]], 123.0);
    }

    #[test]
    fn test_new_checks_shape() {
        let stats = RasterStats {
            num_rows: 3,
            num_cols: 4,
            num_bands: 1,
            ..Default::default()
        };
        assert!(Raster::new(stats.clone(), Array3::zeros((1, 4, 3))).is_err());
        assert!(Raster::new(stats.clone(), Array3::zeros((1, 3, 4))).is_ok());
        assert_eq!(Raster::filled(&stats, 2.0).data.sum(), 24.0);
    }
}
