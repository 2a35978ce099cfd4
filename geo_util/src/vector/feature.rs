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
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{bail, Context, Result};
use geo::{BoundingRect, Coord, MultiPolygon, Polygon, Rect};
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use log::{debug, info};
use serde_json::json;

use crate::errors::ZonalError;
use crate::util::ensure_parent_dir;

/// CRS of GeoJSON without a crs member
pub const GEOJSON_DEFAULT_EPSG: u32 = 4326;

/// One zone, a polygon or multipolygon with its attributes
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneFeature {
    pub id: Option<geojson::feature::Id>,
    pub geometry: MultiPolygon<f64>,
    pub properties: JsonObject,
}

impl ZoneFeature {
    pub fn new(geometry: MultiPolygon<f64>) -> Self {
        ZoneFeature {
            id: None,
            geometry,
            properties: JsonObject::new(),
        }
    }
}

/// Ordered zones, feature order is the zone order of all outputs
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZoneLayer {
    pub features: Vec<ZoneFeature>,
    //bounding box as declared by the file, not computed
    pub bbox: Option<Rect<f64>>,
    pub epsg: Option<u32>,
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

fn parse_bbox(bbox: &[f64]) -> Result<Rect<f64>> {
    let (min_x, min_y, max_x, max_y) = match bbox.len() {
        4 => (bbox[0], bbox[1], bbox[2], bbox[3]),
        6 => (bbox[0], bbox[1], bbox[3], bbox[4]),
        n => bail!("Invalid bbox with {} values", n)
    };
    Ok(Rect::new(Coord { x: min_x, y: min_y }, Coord { x: max_x, y: max_y }))
}

/// EPSG code from a legacy named crs, e.g. EPSG:32633 or urn:ogc:def:crs:EPSG::32633
pub fn parse_crs_name(name: &str) -> Result<u32> {
    if name.ends_with("CRS84") {
        return Ok(GEOJSON_DEFAULT_EPSG);
    }
    name.rsplit(':').next()
        .and_then(|code| code.trim().parse::<u32>().ok())
        .ok_or_else(|| ZonalError::UnknownCrs(name.to_string()).into())
}

fn read_crs(foreign_members: Option<&JsonObject>) -> Result<u32> {
    let crs = match foreign_members.and_then(|m| m.get("crs")) {
        Some(crs) => crs,
        None => return Ok(GEOJSON_DEFAULT_EPSG)
    };

    match crs.pointer("/properties/name").and_then(|n| n.as_str()) {
        Some(name) => parse_crs_name(name),
        None => Err(ZonalError::UnknownCrs(crs.to_string()).into())
    }
}

impl ZoneLayer {
    pub fn new(features: Vec<ZoneFeature>) -> Self {
        ZoneLayer {
            features,
            bbox: None,
            epsg: None,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn read(path: &Path) -> Result<ZoneLayer> {
        let file = File::open(path).with_context(|| format!("Cannot open zones {:?}", path))?;
        let geojson = GeoJson::from_reader(BufReader::new(file))
            .with_context(|| format!("Cannot parse zones {:?}", path))?;
        let layer = ZoneLayer::from_geojson(geojson)?;
        info!("Read {} zones from {:?}", layer.len(), path);
        Ok(layer)
    }

    pub fn from_geojson_str(s: &str) -> Result<ZoneLayer> {
        ZoneLayer::from_geojson(s.parse::<GeoJson>()?)
    }

    /// A lone feature or geometry is read as a layer of 1 zone
    pub fn from_geojson(geojson: GeoJson) -> Result<ZoneLayer> {
        let fc = match geojson {
            GeoJson::FeatureCollection(fc) => fc,
            GeoJson::Feature(f) => FeatureCollection { bbox: None, features: vec![f], foreign_members: None },
            GeoJson::Geometry(g) => FeatureCollection {
                bbox: None,
                features: vec![Feature { bbox: None, geometry: Some(g), id: None, properties: None, foreign_members: None }],
                foreign_members: None,
            },
        };

        let epsg = read_crs(fc.foreign_members.as_ref())?;
        let bbox = fc.bbox.as_deref().map(parse_bbox).transpose()?;

        let mut features = Vec::with_capacity(fc.features.len());
        for (index, feature) in fc.features.into_iter().enumerate() {
            let geometry = match feature.geometry {
                Some(g) => g,
                None => return Err(ZonalError::UnsupportedGeometry { index, kind: "null".to_string() }.into())
            };

            let geometry = match geometry.value {
                Value::Polygon(_) => MultiPolygon(vec![Polygon::try_from(geometry.value)?]),
                Value::MultiPolygon(_) => MultiPolygon::try_from(geometry.value)?,
                other => return Err(ZonalError::UnsupportedGeometry {
                    index, kind: geometry_kind(&other).to_string() }.into())
            };

            features.push(ZoneFeature {
                id: feature.id,
                geometry,
                properties: feature.properties.unwrap_or_default(),
            });
        }

        debug!("Zone layer EPSG:{} bbox {:?}", epsg, bbox);

        Ok(ZoneLayer {
            features,
            bbox,
            epsg: Some(epsg),
        })
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self.features.iter().map(|f| Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::from(&f.geometry))),
            id: f.id.clone(),
            properties: Some(f.properties.clone()),
            foreign_members: None,
        }).collect();

        let foreign_members = self.epsg
            .filter(|e| *e != GEOJSON_DEFAULT_EPSG)
            .map(|e| {
                let mut m = JsonObject::new();
                m.insert("crs".to_string(), json!({
                    "type": "name",
                    "properties": { "name": format!("urn:ogc:def:crs:EPSG::{}", e) }
                }));
                m
            });

        FeatureCollection {
            bbox: self.bbox.map(|b| vec![b.min().x, b.min().y, b.max().x, b.max().y]),
            features,
            foreign_members,
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;
        let file = File::create(path).with_context(|| format!("Cannot create {:?}", path))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.to_feature_collection())?;
        info!("Wrote {} zones to {:?}", self.len(), path);
        Ok(())
    }

    /// Declared bounding box if there is one, otherwise computed from the geometries
    pub fn extent(&self) -> Result<Rect<f64>> {
        if let Some(bbox) = self.bbox {
            return Ok(bbox);
        }

        self.features.iter()
            .filter_map(|f| f.geometry.bounding_rect())
            .reduce(|a, b| Rect::new(
                Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            ))
            .ok_or_else(|| ZonalError::ExtentUnavailable.into())
    }
}
