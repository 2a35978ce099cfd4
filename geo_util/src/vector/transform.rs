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
use anyhow::{anyhow, Result};
use geo::{Coord, MapCoords, MultiPolygon, Rect};
use log::debug;
use proj4rs::proj::Proj;
use proj4rs::transform::transform;

use crate::errors::ZonalError;
use crate::vector::ZoneLayer;

fn proj_for_epsg(epsg: u32) -> Result<Proj> {
    let code = u16::try_from(epsg).map_err(|_| ZonalError::UnknownCrs(format!("EPSG:{}", epsg)))?;
    Proj::from_epsg_code(code).map_err(|e| {
        debug!("proj4rs cannot create EPSG:{}: {:?}", epsg, e);
        ZonalError::UnknownCrs(format!("EPSG:{}", epsg)).into()
    })
}

/// None if the code is unknown
pub fn is_geographic_epsg(epsg: u32) -> Option<bool> {
    proj_for_epsg(epsg).ok().map(|p| p.is_latlong())
}

/// Point by point transform between 2 EPSG coordinate systems.  Geographic coordinates are in degrees, x is longitude.
pub struct CoordTransform {
    source: Proj,
    target: Proj,
    source_epsg: u32,
    target_epsg: u32,
}

impl CoordTransform {
    pub fn new(source_epsg: u32, target_epsg: u32) -> Result<Self> {
        Ok(CoordTransform {
            source: proj_for_epsg(source_epsg)?,
            target: proj_for_epsg(target_epsg)?,
            source_epsg,
            target_epsg,
        })
    }

    pub fn transform_coord(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        //proj4rs works in radians for lat/long systems
        let mut point = if self.source.is_latlong() {
            (x.to_radians(), y.to_radians(), 0.0)
        } else {
            (x, y, 0.0)
        };

        transform(&self.source, &self.target, &mut point).map_err(|e|
            anyhow!("Cannot transform ({}, {}) from EPSG:{} to EPSG:{}: {:?}",
                x, y, self.source_epsg, self.target_epsg, e))?;

        if self.target.is_latlong() {
            Ok((point.0.to_degrees(), point.1.to_degrees()))
        } else {
            Ok((point.0, point.1))
        }
    }

    pub fn transform_multi_polygon(&self, shape: &MultiPolygon<f64>) -> Result<MultiPolygon<f64>> {
        shape.try_map_coords(|c: Coord<f64>| {
            let (x, y) = self.transform_coord(c.x, c.y)?;
            Ok(Coord { x, y })
        })
    }

    /// Bounding box of the 4 transformed corners
    pub fn transform_rect(&self, rect: &Rect<f64>) -> Result<Rect<f64>> {
        let (min, max) = (rect.min(), rect.max());
        let corners = [
            self.transform_coord(min.x, min.y)?,
            self.transform_coord(min.x, max.y)?,
            self.transform_coord(max.x, min.y)?,
            self.transform_coord(max.x, max.y)?,
        ];

        let min_x = corners.iter().map(|c| c.0).fold(f64::INFINITY, f64::min);
        let max_x = corners.iter().map(|c| c.0).fold(f64::NEG_INFINITY, f64::max);
        let min_y = corners.iter().map(|c| c.1).fold(f64::INFINITY, f64::min);
        let max_y = corners.iter().map(|c| c.1).fold(f64::NEG_INFINITY, f64::max);

        Ok(Rect::new(Coord { x: min_x, y: min_y }, Coord { x: max_x, y: max_y }))
    }
}

/// Copy of the layer in the `target_epsg` coordinate system.  The layer is cloned unchanged if both CRS are the same.
pub fn reproject_layer(layer: &ZoneLayer, target_epsg: Option<u32>) -> Result<ZoneLayer> {
    if layer.epsg == target_epsg {
        return Ok(layer.clone());
    }

    let (source_epsg, target_epsg) = match (layer.epsg, target_epsg) {
        (Some(s), Some(t)) => (s, t),
        (s, t) => return Err(ZonalError::UnknownCrs(
            format!("Cannot reproject zones from {:?} to {:?}", s, t)).into())
    };

    debug!("Reprojecting {} zones from EPSG:{} to EPSG:{}", layer.features.len(), source_epsg, target_epsg);

    let xform = CoordTransform::new(source_epsg, target_epsg)?;

    let mut output = layer.clone();
    for feature in output.features.iter_mut() {
        feature.geometry = xform.transform_multi_polygon(&feature.geometry)?;
    }
    output.bbox = layer.bbox.as_ref().map(|b| xform.transform_rect(b)).transpose()?;
    output.epsg = Some(target_epsg);

    Ok(output)
}

#[cfg(test)]
mod transform_tests {
    use super::*;
    use crate::raster::{assert_float_within_eps, square_zone};

    #[test]
    fn test_utm_central_meridian() {
        let xform = CoordTransform::new(4326, 32633).unwrap();
        let (x, y) = xform.transform_coord(15.0, 0.0).unwrap();
        assert_float_within_eps(x, 500000.0, 1e-3, "easting");
        assert_float_within_eps(y, 0.0, 1e-3, "northing");

        let back = CoordTransform::new(32633, 4326).unwrap();
        let (lon, lat) = back.transform_coord(x, y).unwrap();
        assert_float_within_eps(lon, 15.0, 1e-8, "lon");
        assert_float_within_eps(lat, 0.0, 1e-8, "lat");
    }

    #[test]
    fn test_geographic() {
        assert_eq!(is_geographic_epsg(4326), Some(true));
        assert_eq!(is_geographic_epsg(32633), Some(false));
        assert!(CoordTransform::new(4326, 1).is_err());
    }

    #[test]
    fn test_reproject_layer() {
        let mut layer = ZoneLayer::new(vec![square_zone(15.0, 0.0, 0.01)]);
        layer.epsg = Some(4326);
        layer.bbox = Some(Rect::new(Coord { x: 15.0, y: 0.0 }, Coord { x: 15.01, y: 0.01 }));

        let utm = reproject_layer(&layer, Some(32633)).unwrap();
        assert_eq!(utm.epsg, Some(32633));
        assert_eq!(layer.epsg, Some(4326));

        let first = utm.features[0].geometry.0[0].exterior().0[0];
        assert_float_within_eps(first.x, 500000.0, 1e-3, "easting");
        assert!(utm.bbox.unwrap().width() > 1000.0);

        let same = reproject_layer(&layer, Some(4326)).unwrap();
        assert_eq!(same, layer);

        let err = reproject_layer(&layer, None).unwrap_err();
        assert!(matches!(err.downcast_ref::<ZonalError>(), Some(ZonalError::UnknownCrs(_))));
    }
}
