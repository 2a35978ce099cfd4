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
use geo::{BoundingRect, Contains, MultiPolygon, Point};
use log::debug;
use ndarray::{s, Array2, ArrayView2};

use crate::errors::ZonalError;
use crate::raster::{ImageRegion, RasterStats};
use crate::vector::ZoneLayer;

/// Background value of a zone id raster
pub const NO_ZONE_ID: u32 = u32::MAX;

/// Zone ids burned on the grid of a value raster.  Zone id n is feature n-1 of the layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneIdRaster {
    pub stats: RasterStats,
    //row, col
    pub ids: Array2<u32>,
}

impl ZoneIdRaster {
    pub fn new(stats: RasterStats, ids: Array2<u32>) -> Result<Self> {
        if ids.dim() != (stats.num_rows as usize, stats.num_cols as usize) {
            bail!("Zone id shape {:?} does not match stats {} rows {} cols",
                ids.dim(), stats.num_rows, stats.num_cols);
        }
        Ok(ZoneIdRaster { stats, ids })
    }

    pub fn num_pixels(&self) -> usize {
        self.ids.len()
    }

    /// Same window semantics as [`crate::raster::RasterSource::read_window`]
    pub fn read_window(&self, window_offset: (usize, usize), window_size: (usize, usize)) -> Result<ArrayView2<u32>> {
        let (x0, y0) = window_offset;
        let (x1, y1) = (x0 + window_size.0, y0 + window_size.1);

        if x1 > self.stats.num_cols as usize || y1 > self.stats.num_rows as usize {
            bail!("Zone window x: {}..{} y: {}..{} is outside the raster ({} cols, {} rows)",
                x0, x1, y0, y1, self.stats.num_cols, self.stats.num_rows);
        }

        Ok(self.ids.slice(s![y0..y1, x0..x1]))
    }
}

/// Calls `burn` with (row, col) of every pixel whose center is inside `geometry`
fn for_each_covered_pixel<F>(geometry: &MultiPolygon<f64>, target: &RasterStats, mut burn: F)
where F: FnMut(usize, usize)
{
    let rect = match geometry.bounding_rect() {
        Some(r) => r,
        None => return
    };

    let mut region = ImageRegion::from_rect(target, &rect);
    if !region.crop(&ImageRegion::largest_possible(target)) {
        return;
    }

    let ((x0, y0), (w, h)) = region.window();
    for row in y0..y0 + h {
        for col in x0..x0 + w {
            let [x, y] = target.calc_center((col, row));
            if geometry.contains(&Point::new(x, y)) {
                burn(row, col);
            }
        }
    }
}

/// Burns zone id `i+1` for feature `i` into a raster with the geometry of `target`.
///
/// Zones must already be in the CRS of `target`.  Where zones overlap the later feature wins.
pub fn rasterize_zones(layer: &ZoneLayer, target: &RasterStats) -> Result<ZoneIdRaster> {
    let mut stats = target.clone();
    stats.num_bands = 1;
    stats.no_data_value = Some(NO_ZONE_ID as f64);
    stats.sample_type = crate::raster::SampleType::U32;

    let mut ids = Array2::from_elem((target.num_rows as usize, target.num_cols as usize), NO_ZONE_ID);

    for (index, feature) in layer.features.iter().enumerate() {
        let zone_id = index as u32 + 1;
        let mut burned = 0usize;
        for_each_covered_pixel(&feature.geometry, target, |row, col| {
            ids[[row, col]] = zone_id;
            burned += 1;
        });
        debug!("Zone {} covers {} pixels", zone_id, burned);
    }

    if ids.len() != target.num_pixels() {
        return Err(ZonalError::PixelCountMismatch {
            value_pixels: target.num_pixels(),
            zone_pixels: ids.len(),
        }.into());
    }

    ZoneIdRaster::new(stats, ids)
}

/// True where the center of the pixel is inside any zone
pub fn rasterize_mask(layer: &ZoneLayer, target: &RasterStats) -> Array2<bool> {
    let mut mask = Array2::from_elem((target.num_rows as usize, target.num_cols as usize), false);

    for feature in layer.features.iter() {
        for_each_covered_pixel(&feature.geometry, target, |row, col| {
            mask[[row, col]] = true;
        });
    }

    mask
}
