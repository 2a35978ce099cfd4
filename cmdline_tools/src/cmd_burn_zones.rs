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
use std::path::PathBuf;

use anyhow::Result;
use log::info;
use structopt::StructOpt;

use geo_util::raster::{rasterize_zones, write_zone_raster, Raster, NO_ZONE_ID};
use geo_util::vector::{reproject_layer, ZoneLayer};
use crate::output_args::OutputArgs;

#[derive(StructOpt)]
pub struct BurnZonesArgs {
    #[structopt(parse(from_os_str), long = "snap", help = "Raster giving the output grid")]
    snap_raster: PathBuf,

    #[structopt(parse(from_os_str), long, help = "Zone polygons (GeoJSON)")]
    zones: PathBuf,

    #[structopt(long, help = "Reproject the zones to the snap raster coordinate system")]
    reproject: bool,

    #[structopt(flatten)]
    output: OutputArgs,
}

/// Writes the zone id raster used by zonal statistics, feature n gets id n+1
pub fn run_burn_zones(args: &BurnZonesArgs) -> Result<()> {
    if !args.output.should_run() {
        return Ok(());
    }

    let snap_raster = Raster::read(&args.snap_raster)?;
    let mut layer = ZoneLayer::read(&args.zones)?;
    if args.reproject {
        layer = reproject_layer(&layer, snap_raster.stats.epsg)?;
    }

    let zones = rasterize_zones(&layer, &snap_raster.stats)?;

    let burned = zones.ids.iter().filter(|id| **id != NO_ZONE_ID).count();
    info!("Burned {} zones over {} of {} pixels", layer.len(), burned, zones.num_pixels());

    args.output.replace_existing()?;
    write_zone_raster(&args.output.output, &zones)
}
