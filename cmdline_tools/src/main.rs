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
use std::process::exit;

use anyhow::Result;
use log::{error, LevelFilter};
use simple_logger::SimpleLogger;
use structopt::StructOpt;

use crate::cmd_burn_zones::{run_burn_zones, BurnZonesArgs};
use crate::cmd_extract_band::{run_extract_band, ExtractBandArgs};
use crate::cmd_extract_geom::{run_extract_geom, ExtractGeomArgs};
use crate::cmd_mean_resample::{run_mean_resample, MeanResampleArgs};
use crate::cmd_raster_info::{print_raster_info, RasterInfoArgs};

mod output_args;
mod cmd_burn_zones;
mod cmd_extract_band;
mod cmd_extract_geom;
mod cmd_mean_resample;
mod cmd_raster_info;

#[derive(StructOpt)]
struct Cli {

    #[structopt(long, default_value = "Warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    cmd: Command
}

#[derive(StructOpt)]
enum Command {
    #[structopt(help = "Copies one band of a raster")]
    ExtractBand(ExtractBandArgs),

    #[structopt(help = "Crops a raster to polygons, pixels outside the polygons are set to 0")]
    ExtractGeom(ExtractGeomArgs),

    #[structopt(help = "Downsamples one band, each output pixel is the mean of a block of input pixels")]
    MeanResample(MeanResampleArgs),

    #[structopt(help = "Burns zone ids (feature index + 1) to a raster on the grid of a snap raster")]
    BurnZones(BurnZonesArgs),

    #[structopt(help = "Prints raster metadata and band statistics")]
    Info(RasterInfoArgs),
}

fn run(args: &Cli) -> Result<()> {
    match &args.cmd {
        Command::ExtractBand(r) => run_extract_band(r),
        Command::ExtractGeom(r) => run_extract_geom(r),
        Command::MeanResample(r) => run_mean_resample(r),
        Command::BurnZones(r) => run_burn_zones(r),
        Command::Info(r) => print_raster_info(r),
    }
}

fn main() {
    let args = Cli::from_args();

    if let Err(e) = SimpleLogger::new().with_level(args.log_level).init() {
        eprintln!("Cannot initialize logging: {}", e);
        exit(1);
    }

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        exit(1);
    }
}
