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
use std::fs::remove_file;
use std::path::PathBuf;
use std::process::exit;

use anyhow::Result;
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;
use structopt::StructOpt;

use geo_util::raster::{GeoTiffSource, RasterSource};
use geo_util::vector::ZoneLayer;
use geo_util::zonal::{run_zonal_statistics, EmptyZonePolicy, LogObserver, ZonalStatsConfig};

/// Computes count, mean, standard deviation, min and max of every raster band inside each zone.
///
/// Writes the zones with the statistics added as count, mean_<band>, stdev_<band>, min_<band>, max_<band> attributes
#[derive(StructOpt)]
struct Cli {
    #[structopt(parse(from_os_str), long = "in", help = "Value raster (GeoTIFF)")]
    raster: PathBuf,

    #[structopt(parse(from_os_str), long, help = "Zone polygons (GeoJSON)")]
    zones: PathBuf,

    #[structopt(parse(from_os_str), long = "out", help = "Output zones with statistics (GeoJSON)")]
    output: PathBuf,

    #[structopt(long, help = "Pixels where any band has this value are ignored.  Defaults to the raster's no data value")]
    no_data: Option<f64>,

    #[structopt(long, help = "Reproject the zones to the raster coordinate system")]
    reproject: bool,

    #[structopt(long, help = "Memory for one split of raster data in MB, 0 for the default")]
    ram: Option<u32>,

    #[structopt(long, help = "zero_fill or skip zones without valid pixels")]
    empty_zones: Option<EmptyZonePolicy>,

    #[structopt(parse(from_os_str), long, help = "TOML file with the run settings, flags override it")]
    config: Option<PathBuf>,

    #[structopt(long)]
    clean: bool,

    #[structopt(long, default_value = "Info")]
    log_level: LevelFilter,
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

fn build_config(args: &Cli) -> Result<ZonalStatsConfig> {
    let mut config = match args.config.as_ref() {
        Some(path) => ZonalStatsConfig::read(path)?,
        None => ZonalStatsConfig::default()
    };

    if let Some(nd) = args.no_data {
        config.no_data_value = Some(nd);
    }
    if args.reproject {
        config.reproject = true;
    }
    if let Some(ram) = args.ram {
        config.ram_mb = ram;
    }
    if let Some(policy) = args.empty_zones {
        config.empty_zones = policy;
    }

    Ok(config)
}

fn run(args: &Cli) -> Result<()> {
    if args.output.exists() && !args.clean {
        info!("{:?} already exists and --clean not passed, nothing to do", &args.output);
        return Ok(());
    }

    let config = build_config(args)?;
    info!("Using {:?}", config);

    //read split by split, the RAM budget bounds the value data held at once
    let raster = GeoTiffSource::open(&args.raster)?;
    info!("Value raster {:?}\n{}", args.raster, raster.stats());

    let layer = ZoneLayer::read(&args.zones)?;

    let output = run_zonal_statistics(&raster, &layer, &config, &mut LogObserver::new())?;

    if args.output.exists() {
        info!("Replacing {:?}", &args.output);
        remove_file(&args.output)?;
    }
    output.write(&args.output)?;

    Ok(())
}
