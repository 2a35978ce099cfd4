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
use crate::raster::SampleType;

/// Exact match, NaN only matches NaN
#[inline]
pub fn is_nodata(val: f32, no_data_value: f32) -> bool {
    if no_data_value.is_nan() {
        return val.is_nan();
    }
    val == no_data_value
}

#[inline]
pub fn is_nodata_f64(val: f64, no_data_value: f64) -> bool {
    if no_data_value.is_nan() {
        return val.is_nan();
    }
    val == no_data_value
}

/// Same value as nodata, taking into account that f32 samples were widened to f64
/// while the nodata value may have been stored with f64 precision
#[inline]
pub fn is_sample_nodata(val: f64, no_data_value: f64, sample_type: SampleType) -> bool {
    if is_nodata_f64(val, no_data_value) {
        return true;
    }
    sample_type == SampleType::F32 && is_nodata(val as f32, no_data_value as f32)
}

/// True if any band of the pixel holds the no data value
#[inline]
pub fn pixel_has_nodata<'a, I>(pixel: I, no_data_value: Option<f64>, sample_type: SampleType) -> bool
where I: IntoIterator<Item = &'a f64>
{
    match no_data_value {
        None => false,
        Some(nd) => pixel.into_iter().any(|v| is_sample_nodata(*v, nd, sample_type))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_is_nodata()  {
        let nodata = f32::MIN;

        assert!(is_nodata(nodata, nodata));
        //below the f32 resolution at this magnitude
        assert!(is_nodata(nodata + 10000., nodata));
        assert!(!is_nodata(nodata + 1e34, nodata));
        assert!(!is_nodata(f32::NAN, nodata));

        let nodata = f32::NAN;

        assert!(is_nodata(f32::NAN , nodata));
        assert!(!is_nodata( 1e30, nodata));
    }

    #[test]
    fn test_is_nodata_64()  {
        let nodata = -9999.0;

        assert!(is_nodata_f64(-9999.0, nodata));
        assert!(!is_nodata_f64(-9998.0, nodata));
        assert!(!is_nodata_f64(-9999.0 + 1e-9, nodata));
        assert!(!is_nodata_f64(f64::NAN, nodata));
        assert!(!is_nodata_f64(f64::INFINITY, nodata));

        let nodata = f64::NAN;

        assert!(is_nodata_f64(f64::NAN , nodata));
        assert!(is_nodata_f64(f32::NAN as f64 , nodata));
        assert!(!is_nodata_f64( 1e306, nodata));

        assert!(is_nodata_f64(f64::NEG_INFINITY, f64::NEG_INFINITY));
    }

    #[test]
    fn test_small_values_are_not_zero_nodata() {
        assert!(!is_nodata_f64(1e-16, 0.0));
        assert!(!is_nodata(1e-7, 0.0));
        assert!(!is_nodata(5e-7, 0.0));

        for sample_type in [SampleType::F32, SampleType::F64] {
            assert!(!is_sample_nodata(1e-7f32 as f64, 0.0, sample_type));
            assert!(!is_sample_nodata(5e-7f32 as f64, 0.0, sample_type));
            assert!(!is_sample_nodata(1e-16, 0.0, sample_type));
            assert!(is_sample_nodata(0.0, 0.0, sample_type));
            assert!(is_sample_nodata(-0.0, 0.0, sample_type));
        }
    }

    #[test]
    fn test_is_sample_nodata_f32() {
        let widened = 0.1f32 as f64;

        assert!(!is_sample_nodata(widened, 0.1, SampleType::F64));
        assert!(is_sample_nodata(widened, 0.1, SampleType::F32));
        assert!(!is_sample_nodata(0.1000001f32 as f64, 0.1, SampleType::F32));
    }

    #[test]
    fn test_pixel_has_nodata() {
        let pixel = [1.0, -1.0, 3.0];

        assert!(!pixel_has_nodata(&pixel, None, SampleType::F64));
        assert!(pixel_has_nodata(&pixel, Some(-1.0), SampleType::F64));
        assert!(!pixel_has_nodata(&pixel, Some(0.0), SampleType::F64));
    }
}
