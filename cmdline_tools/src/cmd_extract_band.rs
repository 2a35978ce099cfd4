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

use geo_util::raster::{extract_band, Raster};
use crate::output_args::OutputArgs;

#[derive(StructOpt)]
pub struct ExtractBandArgs {
    #[structopt(parse(from_os_str), long = "in")]
    input: PathBuf,

    #[structopt(long, default_value = "1", help = "Band to extract, starting at 1")]
    band: usize,

    #[structopt(flatten)]
    output: OutputArgs,
}

pub fn run_extract_band(args: &ExtractBandArgs) -> Result<()> {
    if !args.output.should_run() {
        return Ok(());
    }

    let raster = Raster::read(&args.input)?;
    let band = extract_band(&raster, args.band)?;

    info!("Writing band {} of {:?} to {:?}", args.band, args.input, args.output.output);
    args.output.replace_existing()?;
    band.write(&args.output.output)
}
