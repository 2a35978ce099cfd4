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
use ndarray::{ArrayView2, ArrayView3};

use crate::errors::ZonalError;
use crate::raster::{pixel_has_nodata, SampleType, NO_ZONE_ID};

/// Running sums of the valid pixels of one zone in one band
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandAccumulator {
    pub count: u64,
    pub sum: f64,
    pub sum_of_squares: f64,
    pub min: f64,
    pub max: f64,
}

impl Default for BandAccumulator {
    fn default() -> Self {
        BandAccumulator {
            count: 0,
            sum: 0.0,
            sum_of_squares: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl BandAccumulator {
    #[inline]
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.sum_of_squares += value * value;
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }
}

/// Where every pixel seen so far went
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccumulatorSummary {
    pub total_pixels: u64,
    pub no_zone_pixels: u64,
    pub no_data_pixels: u64,
    pub accumulated_pixels: u64,
    pub windows: usize,
}

/// Per zone, per band accumulators for zone ids 1..=num_zones
#[derive(Debug, Clone)]
pub struct ZonalAccumulator {
    num_zones: usize,
    num_bands: usize,
    no_data_value: Option<f64>,
    sample_type: SampleType,

    //zone major, index (zone_id - 1) * num_bands + band
    cells: Vec<BandAccumulator>,
    summary: AccumulatorSummary,
}

impl ZonalAccumulator {
    pub fn new(num_zones: usize, num_bands: usize, no_data_value: Option<f64>, sample_type: SampleType) -> Self {
        ZonalAccumulator {
            num_zones,
            num_bands,
            no_data_value,
            sample_type,
            cells: vec![BandAccumulator::default(); num_zones * num_bands],
            summary: AccumulatorSummary::default(),
        }
    }

    pub fn num_zones(&self) -> usize {
        self.num_zones
    }

    pub fn num_bands(&self) -> usize {
        self.num_bands
    }

    pub fn summary(&self) -> &AccumulatorSummary {
        &self.summary
    }

    /// None if the zone id or band is out of range
    pub fn get(&self, zone_id: u32, band: usize) -> Option<&BandAccumulator> {
        if zone_id == 0 || zone_id as usize > self.num_zones || band >= self.num_bands {
            return None;
        }
        self.cells.get((zone_id as usize - 1) * self.num_bands + band)
    }

    /// Accumulates one window.  `values` is (band, row, col), `zone_ids` is (row, col), both walked in raster scan order.
    ///
    /// Nothing is accumulated if the window is rejected.
    pub fn accumulate_window(&mut self, values: ArrayView3<f64>, zone_ids: ArrayView2<u32>) -> Result<()> {
        let (num_bands, num_rows, num_cols) = values.dim();

        if num_bands != self.num_bands {
            bail!("Window has {} bands, accumulator has {}", num_bands, self.num_bands);
        }

        let num_pixels = num_rows * num_cols;
        if num_pixels != zone_ids.len() {
            return Err(ZonalError::PixelCountMismatch {
                value_pixels: num_pixels,
                zone_pixels: zone_ids.len(),
            }.into());
        }

        if zone_ids.dim() != (num_rows, num_cols) {
            return Err(ZonalError::GridMismatch(format!("Value window {}x{} vs zone window {}x{}",
                num_cols, num_rows, zone_ids.ncols(), zone_ids.nrows())).into());
        }

        if let Some(bad) = zone_ids.iter().find(|z| **z != NO_ZONE_ID && (**z == 0 || **z as usize > self.num_zones)) {
            return Err(ZonalError::ZoneIdOutOfRange { zone_id: *bad, num_zones: self.num_zones }.into());
        }

        let mut pixel = vec![0.0; num_bands];

        for (pixel_index, zone_id) in zone_ids.iter().enumerate() {
            if *zone_id == NO_ZONE_ID {
                self.summary.no_zone_pixels += 1;
                continue;
            }

            let (row, col) = (pixel_index / num_cols, pixel_index % num_cols);
            for (band, v) in pixel.iter_mut().enumerate() {
                *v = values[[band, row, col]];
            }

            if pixel_has_nodata(pixel.iter(), self.no_data_value, self.sample_type) {
                self.summary.no_data_pixels += 1;
                continue;
            }

            let first_cell = (*zone_id as usize - 1) * num_bands;
            for (cell, v) in self.cells[first_cell..first_cell + num_bands].iter_mut().zip(pixel.iter()) {
                cell.add(*v);
            }
            self.summary.accumulated_pixels += 1;
        }

        self.summary.total_pixels += num_pixels as u64;
        self.summary.windows += 1;

        Ok(())
    }
}
