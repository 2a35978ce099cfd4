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

use geo_util::raster::{extract_geom, Raster};
use geo_util::vector::ZoneLayer;
use crate::output_args::OutputArgs;

#[derive(StructOpt)]
pub struct ExtractGeomArgs {
    #[structopt(parse(from_os_str), long = "in")]
    input: PathBuf,

    #[structopt(parse(from_os_str), long, help = "Polygons (GeoJSON), reprojected to the raster CRS")]
    zones: PathBuf,

    #[structopt(flatten)]
    output: OutputArgs,
}

/// Crops the raster to the polygons and sets pixels outside them to 0
pub fn run_extract_geom(args: &ExtractGeomArgs) -> Result<()> {
    if !args.output.should_run() {
        return Ok(());
    }

    let raster = Raster::read(&args.input)?;
    let layer = ZoneLayer::read(&args.zones)?;

    let extracted = extract_geom(&raster, &layer)?;
    info!("Extracted {}x{} pixels", extracted.stats.num_cols, extracted.stats.num_rows);

    args.output.replace_existing()?;
    extracted.write(&args.output.output)
}

#[cfg(test)]
mod extract_geom_tests {
    use super::*;
    use geo_util::raster::{create_test_raster, RasterStats, SampleType};
    use geo_util::util::get_temp_filename;

    #[test]
    fn test_extract_geom_reprojects() {
        //UTM 33N, 100m pixels around (500000, 0)
        let stats = RasterStats {
            origin_x: 499500.0,
            origin_y: 500.0,
            pixel_width: 100.0,
            pixel_height: -100.0,
            num_rows: 10,
            num_cols: 10,
            sample_type: SampleType::F32,
            epsg: Some(32633),
            ..Default::default()
        };
        let data = vec![7.0; 100];

        let zones = get_temp_filename("zones.geojson");
        std::fs::create_dir_all(zones.parent().unwrap()).unwrap();
        //about x 499889..500111, y -110..110
        std::fs::write(&zones, r#"{"type": "FeatureCollection", "features": [
            { "type": "Feature", "properties": {},
              "geometry": { "type": "Polygon", "coordinates": [[
                [14.999, -0.001], [15.001, -0.001], [15.001, 0.001], [14.999, 0.001], [14.999, -0.001]
              ]] } }
        ]}"#).unwrap();

        let args = ExtractGeomArgs {
            input: create_test_raster("utm.tif", &stats, &data).unwrap(),
            zones,
            output: OutputArgs { output: get_temp_filename("extract.tif"), clean: false },
        };

        run_extract_geom(&args).unwrap();

        let output = Raster::read(&args.output.output).unwrap();
        //extent touches cols / rows 3..=6, plus the 1 pixel pad
        assert_eq!((output.stats.num_cols, output.stats.num_rows), (6, 6));
        assert_eq!((output.stats.origin_x, output.stats.origin_y), (499700.0, 300.0));
        assert_eq!(output.stats.epsg, Some(32633));
        assert_eq!(output.data.iter().filter(|v| **v == 7.0).count(), 4);
        assert_eq!(output.data.iter().filter(|v| **v == 0.0).count(), 32);
    }
}
