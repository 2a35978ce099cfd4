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

use geo_util::raster::{extract_band, mean_resample, Raster, DEFAULT_RESAMPLE_NO_DATA};
use geo_util::ZonalError;
use crate::output_args::OutputArgs;

const MIN_STEP: usize = 2;

#[derive(StructOpt)]
pub struct MeanResampleArgs {
    #[structopt(parse(from_os_str), long = "in")]
    input: PathBuf,

    #[structopt(long, default_value = "1", help = "Band to resample, starting at 1")]
    band: usize,

    #[structopt(long, default_value = "2", help = "Input columns per output pixel")]
    step_x: usize,

    #[structopt(long, default_value = "2", help = "Input rows per output pixel")]
    step_y: usize,

    #[structopt(long, help = "Input value left out of the means, 0 if not given")]
    no_data: Option<f64>,

    #[structopt(flatten)]
    output: OutputArgs,
}

/// Each output pixel is the mean of a step_x by step_y block of the input
pub fn run_mean_resample(args: &MeanResampleArgs) -> Result<()> {
    if args.step_x < MIN_STEP || args.step_y < MIN_STEP {
        return Err(ZonalError::InvalidStep { step_x: args.step_x, step_y: args.step_y }.into());
    }

    if !args.output.should_run() {
        return Ok(());
    }

    let raster = Raster::read(&args.input)?;
    let band = extract_band(&raster, args.band)?;

    let resampled = mean_resample(&band, args.step_x, args.step_y, args.no_data.unwrap_or(DEFAULT_RESAMPLE_NO_DATA))?;
    info!("Resampled band {} to {}x{}", args.band, resampled.stats.num_cols, resampled.stats.num_rows);

    args.output.replace_existing()?;
    resampled.write(&args.output.output)
}

#[cfg(test)]
mod mean_resample_tests {
    use super::*;
    use geo_util::raster::{create_test_raster, test_stats, RasterStats, SampleType};
    use geo_util::util::get_temp_filename;

    #[test]
    fn test_mean_resample() {
        let stats = RasterStats { num_bands: 2, sample_type: SampleType::F32, ..test_stats(4, 4) };
        let mut data = vec![0.0; 16];
        //second band
        data.extend_from_slice(&[
            1.0, 2.0, 5.0, 5.0,
            3.0, -1.0, 5.0, 5.0,
            -1.0, -1.0, 8.0, 0.0,
            -1.0, -1.0, 0.0, 0.0,
        ]);

        let mut args = MeanResampleArgs {
            input: create_test_raster("resample.tif", &stats, &data).unwrap(),
            band: 2,
            step_x: 2,
            step_y: 2,
            no_data: Some(-1.0),
            output: OutputArgs { output: get_temp_filename("mean.tif"), clean: false },
        };

        run_mean_resample(&args).unwrap();

        let output = Raster::read(&args.output.output).unwrap();
        assert_eq!((output.stats.num_cols, output.stats.num_rows), (2, 2));
        assert_eq!(output.stats.pixel_width, 2.0);
        assert_eq!(output.data.iter().cloned().collect::<Vec<_>>(), vec![2.0, 5.0, 0.0, 2.0]);

        args.step_y = 1;
        let err = run_mean_resample(&args).unwrap_err();
        assert_eq!(err.downcast_ref::<ZonalError>(), Some(&ZonalError::InvalidStep { step_x: 2, step_y: 1 }));
    }
}
