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
use thiserror::Error;

/// Unrecoverable precondition failures.  These point at upstream misconfiguration and are never retried.
#[derive(Clone, PartialEq, Debug, Error)]
pub enum ZonalError {
    #[error("Pixel count mismatch between value raster ({value_pixels} pixels) and zone raster ({zone_pixels} pixels)")]
    PixelCountMismatch {
        value_pixels: usize,
        zone_pixels: usize,
    },
    #[error("Zone id {zone_id} is not in 1..={num_zones} and is not the no-zone id")]
    ZoneIdOutOfRange {
        zone_id: u32,
        num_zones: usize,
    },
    #[error("Rasters are not on the same grid: {0}")]
    GridMismatch(String),
    #[error("Input vector data is outside the image")]
    ZonesOutsideRaster,
    #[error("Failed to retrieve the spatial extent of the vector data, even in force mode")]
    ExtentUnavailable,
    #[error("Feature #{index} has a {kind} geometry, only Polygon and MultiPolygon zones are supported")]
    UnsupportedGeometry {
        index: usize,
        kind: String,
    },
    #[error("Unknown or unsupported CRS: {0}")]
    UnknownCrs(String),
    #[error("Band {band} is out of range, raster has {num_bands} band(s) (bands start at 1)")]
    BandOutOfRange {
        band: usize,
        num_bands: usize,
    },
    #[error("Invalid resample steps x: {step_x} y: {step_y}, must be at least 1")]
    InvalidStep {
        step_x: usize,
        step_y: usize,
    },
}
