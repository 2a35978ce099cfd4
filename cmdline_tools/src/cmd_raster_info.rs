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
use format_num::NumberFormat;
use itertools::Itertools;
use ndarray::parallel::prelude::*;
use ndarray::Axis;
use structopt::StructOpt;

use geo_util::raster::Raster;
use geo_util::zonal::{BandAccumulator, BandStatistics};

#[derive(StructOpt)]
pub struct RasterInfoArgs {
    #[structopt(parse(from_os_str), long = "in")]
    input: PathBuf,
}

/// Valid pixel statistics of each band
pub fn band_statistics(raster: &Raster) -> Vec<BandStatistics> {
    let stats = &raster.stats;

    raster.data.axis_iter(Axis(0)).into_par_iter().map(|band| {
        let mut acc = BandAccumulator::default();
        for v in band.iter().filter(|v| !stats.is_nodata(**v)) {
            acc.add(*v);
        }
        BandStatistics::from(&acc)
    }).collect()
}

pub fn print_raster_info(args: &RasterInfoArgs) -> Result<()> {
    let raster = Raster::read(&args.input)?;

    let num = NumberFormat::new();
    let num_format_str = ",.2f";

    println!("{:?}\n{}\n", args.input, raster.stats);

    for (band, s) in band_statistics(&raster).iter().enumerate() {
        println!("Band {}: {}", band + 1, [
            format!("valid pixels {}", num.format(",d", s.count as f64)),
            format!("min {}", num.format(num_format_str, s.min)),
            format!("max {}", num.format(num_format_str, s.max)),
            format!("mean {}", num.format(num_format_str, s.mean)),
            format!("stdev {}", num.format(num_format_str, s.stdev)),
        ].iter().join(", "));
    }

    Ok(())
}
