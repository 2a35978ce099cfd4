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
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use ndarray::{Array3, Axis};
use tiff::decoder::{Decoder, DecodingResult, Limits};
use tiff::encoder::{colortype, TiffEncoder, TiffValue};
use tiff::tags::Tag;

use crate::raster::{Raster, RasterSource, RasterStats, SampleType, ZoneIdRaster};
use crate::util::ensure_parent_dir;
use crate::vector::is_geographic_epsg;

const MODEL_PIXEL_SCALE_TAG: u16 = 33550;
const MODEL_TIEPOINT_TAG: u16 = 33922;
const MODEL_TRANSFORMATION_TAG: u16 = 34264;
const GEO_KEY_DIRECTORY_TAG: u16 = 34735;
const GDAL_NODATA_TAG: u16 = 42113;

const GT_MODEL_TYPE_GEO_KEY: u16 = 1024;
const GT_RASTER_TYPE_GEO_KEY: u16 = 1025;
const GEOGRAPHIC_TYPE_GEO_KEY: u16 = 2048;
const PROJECTED_CS_TYPE_GEO_KEY: u16 = 3072;
const USER_DEFINED: u32 = 32767;

const MODEL_TYPE_PROJECTED: u16 = 1;
const MODEL_TYPE_GEOGRAPHIC: u16 = 2;
const RASTER_PIXEL_IS_AREA: u16 = 1;

const PLANAR_CONFIG_CHUNKY: u16 = 1;
const PLANAR_CONFIG_PLANAR: u16 = 2;

fn tag(code: u16) -> Tag {
    //Known codes map to their named variant, which is what the decoder stores
    Tag::from_u16_exhaustive(code)
}

fn decoding_result_to_f64(result: DecodingResult) -> Result<(Vec<f64>, SampleType)> {
    Ok(match result {
        DecodingResult::U8(buf) => (buf.into_iter().map(|v| v as f64).collect(), SampleType::U8),
        DecodingResult::U16(buf) => (buf.into_iter().map(|v| v as f64).collect(), SampleType::U16),
        DecodingResult::U32(buf) => (buf.into_iter().map(|v| v as f64).collect(), SampleType::U32),
        DecodingResult::U64(buf) => (buf.into_iter().map(|v| v as f64).collect(), SampleType::U64),
        DecodingResult::I8(buf) => (buf.into_iter().map(|v| v as f64).collect(), SampleType::I8),
        DecodingResult::I16(buf) => (buf.into_iter().map(|v| v as f64).collect(), SampleType::I16),
        DecodingResult::I32(buf) => (buf.into_iter().map(|v| v as f64).collect(), SampleType::I32),
        DecodingResult::I64(buf) => (buf.into_iter().map(|v| v as f64).collect(), SampleType::I64),
        DecodingResult::F32(buf) => (buf.into_iter().map(|v| v as f64).collect(), SampleType::F32),
        DecodingResult::F64(buf) => (buf, SampleType::F64),
        #[allow(unreachable_patterns)]
        _ => bail!("Unsupported TIFF sample format"),
    })
}

/// Georeferencing of the current page, None if the file has none
fn read_georeference<R: std::io::Read + std::io::Seek>(decoder: &mut Decoder<R>) -> Result<Option<(f64, f64, f64, f64)>> {
    if let Some(transform) = decoder.find_tag(tag(MODEL_TRANSFORMATION_TAG))? {
        let m = transform.into_f64_vec()?;
        if m.len() < 8 {
            bail!("ModelTransformation tag has {} values, expected 16", m.len());
        }
        if m[1] != 0.0 || m[4] != 0.0 {
            warn!("Rotated rasters are not supported, ignoring rotation terms {} {}", m[1], m[4]);
        }
        //origin x, origin y, pixel width, pixel height
        return Ok(Some((m[3], m[7], m[0], m[5])));
    }

    let scale = decoder.find_tag(tag(MODEL_PIXEL_SCALE_TAG))?;
    let tiepoint = decoder.find_tag(tag(MODEL_TIEPOINT_TAG))?;

    match (scale, tiepoint) {
        (Some(scale), Some(tiepoint)) => {
            let scale = scale.into_f64_vec()?;
            let tp = tiepoint.into_f64_vec()?;
            if scale.len() < 2 || tp.len() < 6 {
                bail!("Malformed pixel scale ({} values) or tiepoint ({} values)", scale.len(), tp.len());
            }
            let (i, j, x, y) = (tp[0], tp[1], tp[3], tp[4]);
            Ok(Some((x - i * scale[0], y + j * scale[1], scale[0], -scale[1])))
        }
        _ => Ok(None)
    }
}

fn read_epsg<R: std::io::Read + std::io::Seek>(decoder: &mut Decoder<R>) -> Result<Option<u32>> {
    let keys = match decoder.find_tag(tag(GEO_KEY_DIRECTORY_TAG))? {
        Some(v) => v.into_u32_vec()?,
        None => return Ok(None)
    };

    if keys.len() < 4 {
        bail!("GeoKeyDirectory too short: {} values", keys.len());
    }

    let num_keys = keys[3] as usize;
    let mut geographic = None;
    let mut projected = None;

    for entry in keys[4..].chunks_exact(4).take(num_keys) {
        let (key_id, location, value) = (entry[0], entry[1], entry[3]);
        //only inline short values can hold a code
        if location != 0 {
            continue;
        }
        match key_id as u16 {
            GEOGRAPHIC_TYPE_GEO_KEY => geographic = Some(value),
            PROJECTED_CS_TYPE_GEO_KEY => projected = Some(value),
            _ => {}
        }
    }

    Ok(projected.or(geographic).filter(|code| *code != USER_DEFINED && *code != 0))
}

fn read_no_data<R: std::io::Read + std::io::Seek>(decoder: &mut Decoder<R>) -> Result<Option<f64>> {
    match decoder.find_tag(tag(GDAL_NODATA_TAG))? {
        Some(v) => {
            let s = v.into_string()?;
            let s = s.trim_matches(char::from(0)).trim();
            let nd = s.parse::<f64>().with_context(|| format!("Invalid GDAL_NODATA value '{}'", s))?;
            Ok(Some(nd))
        }
        None => Ok(None)
    }
}

type TiffDecoder = Decoder<BufReader<File>>;

fn open_decoder(path: &Path) -> Result<TiffDecoder> {
    let file = File::open(path).with_context(|| format!("Cannot open raster {:?}", path))?;
    Ok(Decoder::new(BufReader::new(file))
        .with_context(|| format!("Cannot decode raster {:?}", path))?
        .with_limits(Limits::unlimited()))
}

/// Where the bands of one page are stored
#[derive(Debug, Clone, PartialEq)]
struct PageLayout {
    page: usize,
    first_band: usize,
    //planar pages store every sample in its own set of chunks, chunky pages interleave them
    planes: usize,
    samples_per_pixel: usize,
    //X, Y order
    chunk_size: (usize, usize),
    chunks_across: usize,
    chunks_down: usize,
}

impl PageLayout {
    fn num_bands(&self) -> usize {
        self.planes * self.samples_per_pixel
    }

    fn chunks_per_plane(&self) -> usize {
        self.chunks_across * self.chunks_down
    }
}

/// Layout of the current page, decodes its first chunk to find the sample type and samples per pixel
fn page_layout(decoder: &mut TiffDecoder, page: usize, first_band: usize) -> Result<(PageLayout, SampleType)> {
    let (width, height) = decoder.dimensions()?;
    let (chunk_width, chunk_height) = decoder.chunk_dimensions();

    if width == 0 || height == 0 || chunk_width == 0 || chunk_height == 0 {
        bail!("Page {} is {}x{} with {}x{} chunks", page, width, height, chunk_width, chunk_height);
    }

    let chunks_across = width.div_ceil(chunk_width) as usize;
    let chunks_down = height.div_ceil(chunk_height) as usize;

    //rows per strip can exceed the height, the chunk counts are derived from the dimensions
    let planar = decoder.find_tag_unsigned::<u16>(Tag::PlanarConfiguration)?.unwrap_or(PLANAR_CONFIG_CHUNKY) == PLANAR_CONFIG_PLANAR;
    let planes = if planar {
        decoder.find_tag_unsigned::<u16>(Tag::SamplesPerPixel)?.unwrap_or(1).max(1) as usize
    } else {
        1
    };

    let (first_chunk, sample_type) = decoding_result_to_f64(decoder.read_chunk(0)?)?;
    let (data_width, data_height) = decoder.chunk_data_dimensions(0);
    let chunk_pixels = data_width as usize * data_height as usize;

    if chunk_pixels == 0 || first_chunk.len() % chunk_pixels != 0 {
        bail!("First chunk of page {} holds {} samples for {}x{} pixels",
            page, first_chunk.len(), data_width, data_height);
    }

    let layout = PageLayout {
        page,
        first_band,
        planes,
        samples_per_pixel: first_chunk.len() / chunk_pixels,
        chunk_size: (chunk_width as usize, chunk_height as usize),
        chunks_across,
        chunks_down,
    };

    Ok((layout, sample_type))
}

/// Decodes the chunks of one page that intersect the window and copies their pixels into `out` (band, row, col)
fn read_page_window(decoder: &mut TiffDecoder, layout: &PageLayout,
                    window_offset: (usize, usize), window_size: (usize, usize),
                    out: &mut Array3<f64>) -> Result<()> {
    decoder.seek_to_image(layout.page)?;

    let (x0, y0) = window_offset;
    let (x1, y1) = (x0 + window_size.0, y0 + window_size.1);
    let (chunk_width, chunk_height) = layout.chunk_size;
    let spp = layout.samples_per_pixel;

    for plane in 0..layout.planes {
        for chunk_y in y0 / chunk_height..=(y1 - 1) / chunk_height {
            for chunk_x in x0 / chunk_width..=(x1 - 1) / chunk_width {
                let chunk_index = u32::try_from(
                    plane * layout.chunks_per_plane() + chunk_y * layout.chunks_across + chunk_x)?;

                let (values, _) = decoding_result_to_f64(decoder.read_chunk(chunk_index)?)?;
                let (data_width, data_height) = decoder.chunk_data_dimensions(chunk_index);
                let (data_width, data_height) = (data_width as usize, data_height as usize);

                if values.len() < data_width * data_height * spp {
                    bail!("Chunk {} of page {} is truncated", chunk_index, layout.page);
                }

                let (left, top) = (chunk_x * chunk_width, chunk_y * chunk_height);
                let first_band = layout.first_band + plane * spp;

                for row in y0.max(top)..y1.min(top + data_height) {
                    for col in x0.max(left)..x1.min(left + data_width) {
                        let start = ((row - top) * data_width + col - left) * spp;
                        for sample in 0..spp {
                            out[[first_band + sample, row - y0, col - x0]] = values[start + sample];
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

/// A GeoTIFF read window by window, only the strips or tiles touching a window are decoded.
///
/// Chunky multi-sample pixels, planar samples and extra pages of the same size are all read as bands.
pub struct GeoTiffSource {
    path: PathBuf,
    stats: RasterStats,
    pages: Vec<PageLayout>,
    decoder: RefCell<TiffDecoder>,
}

impl GeoTiffSource {
    pub fn open(path: &Path) -> Result<GeoTiffSource> {
        let mut decoder = open_decoder(path)?;

        let (width, height) = decoder.dimensions()?;

        let georeference = read_georeference(&mut decoder)?;
        let epsg = read_epsg(&mut decoder)?;
        let no_data_value = read_no_data(&mut decoder)?;

        let mut pages: Vec<PageLayout> = Vec::new();
        let mut num_bands = 0usize;
        let mut sample_type = None;

        loop {
            let (layout, page_sample_type) = page_layout(&mut decoder, pages.len(), num_bands)
                .with_context(|| format!("Unsupported layout in raster {:?}", path))?;
            num_bands += layout.num_bands();
            sample_type.get_or_insert(page_sample_type);
            pages.push(layout);

            if !decoder.more_images() {
                break;
            }
            decoder.next_image()?;
            if decoder.dimensions()? != (width, height) {
                //overviews or unrelated pages
                debug!("Ignoring remaining pages of {:?} with a different size", path);
                break;
            }
        }

        let (origin_x, origin_y, pixel_width, pixel_height) = match georeference {
            Some(g) => g,
            None => {
                warn!("Raster {:?} has no georeferencing, using an identity grid", path);
                (0.0, 0.0, 1.0, -1.0)
            }
        };

        let stats = RasterStats {
            origin_x,
            origin_y,
            pixel_width,
            pixel_height,
            num_rows: height,
            num_cols: width,
            num_bands: num_bands as u32,
            no_data_value,
            sample_type: sample_type.unwrap_or(SampleType::F64),
            epsg,
        };

        debug!("Opened raster {:?}, {} page(s), stats {}", path, pages.len(), stats);

        Ok(GeoTiffSource {
            path: path.to_path_buf(),
            stats,
            pages,
            decoder: RefCell::new(decoder),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every band into memory
    pub fn read_all(&self) -> Result<Raster> {
        let data = self.read_window((0, 0), (self.stats.num_cols as usize, self.stats.num_rows as usize))?;
        let mut raster = Raster::new(self.stats.clone(), data)?;
        raster.path = Some(self.path.clone());
        Ok(raster)
    }
}

impl RasterSource for GeoTiffSource {
    fn stats(&self) -> &RasterStats {
        &self.stats
    }

    fn read_window(&self, window_offset: (usize, usize), window_size: (usize, usize)) -> Result<Array3<f64>> {
        let (x1, y1) = (window_offset.0 + window_size.0, window_offset.1 + window_size.1);
        if x1 > self.stats.num_cols as usize || y1 > self.stats.num_rows as usize {
            bail!("Window {:?} {:?} is outside raster {:?} ({} cols, {} rows)",
                window_offset, window_size, self.path, self.stats.num_cols, self.stats.num_rows);
        }

        let mut out = Array3::zeros((self.stats.num_bands as usize, window_size.1, window_size.0));
        if window_size.0 == 0 || window_size.1 == 0 {
            return Ok(out);
        }

        let mut decoder = self.decoder.try_borrow_mut()?;
        for layout in self.pages.iter() {
            read_page_window(&mut decoder, layout, window_offset, window_size, &mut out)
                .with_context(|| format!("Cannot read page {} of {:?}", layout.page, self.path))?;
        }

        Ok(out)
    }
}

/// Reads all bands of a GeoTIFF into memory
pub fn read_geotiff(path: &Path) -> Result<Raster> {
    GeoTiffSource::open(path)?.read_all()
}

fn geo_keys(epsg: Option<u32>) -> Vec<u16> {
    let mut keys = vec![1, 1, 0, 0];
    let mut push = |key: u16, value: u16| keys.extend_from_slice(&[key, 0, 1, value]);

    push(GT_RASTER_TYPE_GEO_KEY, RASTER_PIXEL_IS_AREA);

    if let Some(code) = epsg {
        //codes above u16 are not representable as inline keys
        if let Ok(code) = u16::try_from(code) {
            if is_geographic_epsg(code as u32).unwrap_or(false) {
                push(GT_MODEL_TYPE_GEO_KEY, MODEL_TYPE_GEOGRAPHIC);
                push(GEOGRAPHIC_TYPE_GEO_KEY, code);
            } else {
                push(GT_MODEL_TYPE_GEO_KEY, MODEL_TYPE_PROJECTED);
                push(PROJECTED_CS_TYPE_GEO_KEY, code);
            }
        } else {
            warn!("EPSG code {} cannot be stored in a GeoKeyDirectory", code);
        }
    }

    //keys must be sorted by id
    let mut entries: Vec<[u16; 4]> = keys[4..].chunks_exact(4).map(|c| [c[0], c[1], c[2], c[3]]).collect();
    entries.sort_by_key(|e| e[0]);

    let mut sorted = vec![1, 1, 0, entries.len() as u16];
    sorted.extend(entries.into_iter().flatten());
    sorted
}

/// `rows_per_strip` None keeps the encoder's strips of about 1MB
fn write_pages<C>(path: &Path, stats: &RasterStats, pages: &[Vec<C::Inner>], rows_per_strip: Option<u32>) -> Result<()>
where
    C: colortype::ColorType,
    [C::Inner]: TiffValue,
{
    ensure_parent_dir(path)?;
    let file = File::create(path).with_context(|| format!("Cannot create raster {:?}", path))?;
    let mut encoder = TiffEncoder::new(BufWriter::new(file))?;

    let scale = [stats.pixel_width, -stats.pixel_height, 0.0];
    let tiepoint = [0.0, 0.0, 0.0, stats.origin_x, stats.origin_y, 0.0];
    let keys = geo_keys(stats.epsg);
    let no_data = stats.no_data_value.map(|nd| nd.to_string());

    for page in pages {
        let mut image = encoder.new_image::<C>(stats.num_cols, stats.num_rows)?;
        if let Some(rows) = rows_per_strip {
            image.rows_per_strip(rows)?;
        }
        image.encoder().write_tag(tag(MODEL_PIXEL_SCALE_TAG), &scale[..])?;
        image.encoder().write_tag(tag(MODEL_TIEPOINT_TAG), &tiepoint[..])?;
        image.encoder().write_tag(tag(GEO_KEY_DIRECTORY_TAG), &keys[..])?;
        if let Some(nd) = no_data.as_ref() {
            image.encoder().write_tag(tag(GDAL_NODATA_TAG), nd.as_str())?;
        }
        image.write_data(page)?;
    }

    Ok(())
}

/// Writes one Float32 page per band
pub fn write_geotiff(path: &Path, raster: &Raster) -> Result<()> {
    write_float_pages(path, raster, None)
}

/// Same as [`write_geotiff`] with `rows_per_strip` rows in each strip
pub fn write_geotiff_strips(path: &Path, raster: &Raster, rows_per_strip: u32) -> Result<()> {
    if rows_per_strip == 0 {
        bail!("Strips need at least 1 row");
    }
    write_float_pages(path, raster, Some(rows_per_strip))
}

fn write_float_pages(path: &Path, raster: &Raster, rows_per_strip: Option<u32>) -> Result<()> {
    let pages: Vec<Vec<f32>> = raster.data.axis_iter(Axis(0))
        .map(|band| band.iter().map(|v| *v as f32).collect())
        .collect();

    debug!("Writing {} bands to {:?}", pages.len(), path);

    write_pages::<colortype::Gray32Float>(path, &raster.stats, &pages, rows_per_strip)
}

/// Writes the zone ids as a single UInt32 page
pub fn write_zone_raster(path: &Path, zones: &ZoneIdRaster) -> Result<()> {
    let mut stats = zones.stats.clone();
    stats.num_bands = 1;
    stats.sample_type = SampleType::U32;
    stats.no_data_value = Some(crate::raster::NO_ZONE_ID as f64);

    let page: Vec<u32> = zones.ids.iter().cloned().collect();

    write_pages::<colortype::Gray32>(path, &stats, &[page], None)
}

#[cfg(test)]
mod geotiff_tests {
    use super::*;
    use crate::util::get_temp_filename;
    use ndarray::Array2;

    #[test]
    fn test_write_read() {
        let stats = RasterStats {
            origin_x: 500000.0,
            origin_y: 100.0,
            pixel_width: 20.0,
            pixel_height: -10.0,
            num_rows: 3,
            num_cols: 4,
            num_bands: 2,
            no_data_value: Some(-9999.0),
            sample_type: SampleType::F32,
            epsg: Some(32633),
        };
        let data = Array3::from_shape_fn((2, 3, 4), |(b, r, c)| (b * 100 + r * 10 + c) as f64 + 0.5);
        let raster = Raster::new(stats.clone(), data.clone()).unwrap();

        let path = get_temp_filename("values.tif");
        raster.write(&path).unwrap();

        let read_back = Raster::read(&path).unwrap();
        assert_eq!(read_back.stats, stats);
        assert_eq!(read_back.data, data);
        assert_eq!(read_back.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_geographic_and_nan_nodata() {
        let stats = RasterStats {
            origin_x: 10.0,
            origin_y: 50.0,
            pixel_width: 0.5,
            pixel_height: -0.5,
            num_rows: 2,
            num_cols: 2,
            no_data_value: Some(f64::NAN),
            sample_type: SampleType::F32,
            epsg: Some(4326),
            ..Default::default()
        };
        let path = get_temp_filename("nan.tif");
        Raster::filled(&stats, f64::NAN).write(&path).unwrap();

        let read_back = Raster::read(&path).unwrap();
        assert_eq!(read_back.stats.epsg, Some(4326));
        assert!(read_back.stats.no_data_value.unwrap().is_nan());
        assert!(read_back.data.iter().all(|v| read_back.stats.is_nodata(*v)));
    }

    #[test]
    fn test_zone_raster() {
        let stats = RasterStats {
            num_rows: 2,
            num_cols: 3,
            ..Default::default()
        };
        let ids = Array2::from_shape_vec((2, 3), vec![1, 2, 2, crate::raster::NO_ZONE_ID, 3, 1]).unwrap();
        let zones = ZoneIdRaster::new(stats, ids).unwrap();

        let path = get_temp_filename("zones.tif");
        write_zone_raster(&path, &zones).unwrap();

        let read_back = Raster::read(&path).unwrap();
        assert_eq!(read_back.stats.sample_type, SampleType::U32);
        assert_eq!(read_back.stats.epsg, None);
        assert_eq!(read_back.band(0)[[1, 0]], u32::MAX as f64);
        assert_eq!(read_back.band(0)[[1, 1]], 3.0);
    }

    fn strip_test_raster() -> Raster {
        let stats = RasterStats {
            origin_x: 1000.0,
            origin_y: 2000.0,
            pixel_width: 5.0,
            pixel_height: -5.0,
            num_rows: 7,
            num_cols: 6,
            num_bands: 2,
            no_data_value: Some(-1.0),
            sample_type: SampleType::F32,
            epsg: Some(32633),
        };
        let data = Array3::from_shape_fn((2, 7, 6), |(b, r, c)| (b * 1000 + r * 10 + c) as f64);
        Raster::new(stats, data).unwrap()
    }

    #[test]
    fn test_windows_of_multi_strip_file() {
        let raster = strip_test_raster();
        let path = get_temp_filename("strips.tif");
        write_geotiff_strips(&path, &raster, 2).unwrap();

        let source = GeoTiffSource::open(&path).unwrap();
        assert_eq!(source.stats(), &raster.stats);
        assert_eq!(source.pages.len(), 2);
        assert_eq!(source.pages[0].chunks_down, 4);
        assert_eq!(source.pages[1].first_band, 1);

        //crosses strips 0 to 2, last strip is a single row
        for (offset, size) in [((1, 1), (3, 4)), ((0, 6), (6, 1)), ((5, 0), (1, 7)), ((2, 3), (0, 2))] {
            let window = source.read_window(offset, size).unwrap();
            assert_eq!(window, raster.read_window(offset, size).unwrap(), "{:?} {:?}", offset, size);
        }

        assert!(source.read_window((4, 4), (3, 1)).is_err());
        assert!(write_geotiff_strips(&path, &raster, 0).is_err());

        let all = source.read_all().unwrap();
        assert_eq!(all.data, raster.data);
        assert_eq!(all.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_chunky_samples_are_bands() {
        let stats = RasterStats {
            num_rows: 3,
            num_cols: 2,
            ..Default::default()
        };
        let page: Vec<f32> = (0..18).map(|v| v as f32).collect();

        let path = get_temp_filename("rgb.tif");
        write_pages::<colortype::RGB32Float>(&path, &stats, &[page], Some(1)).unwrap();

        let source = GeoTiffSource::open(&path).unwrap();
        assert_eq!(source.stats().num_bands, 3);
        assert_eq!(source.stats().sample_type, SampleType::F32);

        let window = source.read_window((1, 1), (1, 2)).unwrap();
        //pixel (row 1, col 1) starts at sample (1 * 2 + 1) * 3
        assert_eq!(window.iter().cloned().collect::<Vec<_>>(), vec![9.0, 15.0, 10.0, 16.0, 11.0, 17.0]);
    }
}
