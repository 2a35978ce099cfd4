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
use anyhow::Result;
use log::{debug, info};
use ndarray::{s, Axis, Zip};

use crate::errors::ZonalError;
use crate::raster::{rasterize_mask, ImageRegion, Raster, RasterSource};
use crate::vector::{reproject_layer, ZoneLayer};

/// Single band raster holding band `band` (1 based) of `raster`
pub fn extract_band(raster: &Raster, band: usize) -> Result<Raster> {
    let num_bands = raster.num_bands();
    if band == 0 || band > num_bands {
        return Err(ZonalError::BandOutOfRange { band, num_bands }.into());
    }

    let mut stats = raster.stats.clone();
    stats.num_bands = 1;

    let data = raster.data.slice(s![band - 1..band, .., ..]).to_owned();
    Raster::new(stats, data)
}

/// Crops `raster` to the extent of the zones, padded by a pixel, and sets pixels outside every zone to 0
pub fn extract_geom(raster: &Raster, layer: &ZoneLayer) -> Result<Raster> {
    let layer = reproject_layer(layer, raster.stats.epsg)?;

    let extent = layer.extent()?;

    let mut region = ImageRegion::from_rect(&raster.stats, &extent);
    region.pad_by_radius(1);
    debug!("Zone extent {:?} is pixel region {}", extent, region);

    if !region.crop(&ImageRegion::largest_possible(&raster.stats)) {
        return Err(ZonalError::ZonesOutsideRaster.into());
    }

    let (window_offset, window_size) = region.window();
    let stats = raster.stats.window_stats(window_offset, window_size);
    info!("Extracting region {}", region);

    let mut data = raster.read_window(window_offset, window_size)?;
    let mask = rasterize_mask(&layer, &stats);

    for mut band in data.axis_iter_mut(Axis(0)) {
        Zip::from(&mut band).and(&mask).for_each(|v, inside| {
            if !*inside {
                *v = 0.0;
            }
        });
    }

    Raster::new(stats, data)
}
