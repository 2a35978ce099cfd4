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
use std::fmt;
use geo::Rect;
use crate::raster::RasterStats;

/// Bound on region indexes, far beyond any raster size, so padding and cropping never overflow
pub const MAX_PIXEL_INDEX: i64 = 1 << 40;

/// A rectangle of pixels.  Index can be negative before it is cropped to a raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageRegion {
    //X, Y  or column, row order
    pub index: (i64, i64),
    pub size: (i64, i64),
}

impl ImageRegion {
    pub fn new(index: (i64, i64), size: (i64, i64)) -> Self {
        ImageRegion { index, size }
    }

    /// Whole raster
    pub fn largest_possible(stats: &RasterStats) -> Self {
        ImageRegion::new((0, 0), (stats.num_cols as i64, stats.num_rows as i64))
    }

    /// Pixels touched by a rectangle in projected coordinates, both corners inclusive.
    ///
    /// Indexes are clamped to +/- `MAX_PIXEL_INDEX`; a rectangle with NaN coordinates gives an empty region.
    pub fn from_rect(stats: &RasterStats, rect: &Rect<f64>) -> Self {
        let to_index = |pixel: f64| -> Option<i64> {
            if pixel.is_nan() {
                return None;
            }
            Some(pixel.floor().clamp(-MAX_PIXEL_INDEX as f64, MAX_PIXEL_INDEX as f64) as i64)
        };

        let corners = (
            to_index((rect.min().x - stats.origin_x) / stats.pixel_width),
            to_index((rect.max().x - stats.origin_x) / stats.pixel_width),
            to_index((rect.min().y - stats.origin_y) / stats.pixel_height),
            to_index((rect.max().y - stats.origin_y) / stats.pixel_height),
        );
        let (x_a, x_b, y_a, y_b) = match corners {
            (Some(x_a), Some(x_b), Some(y_a), Some(y_b)) => (x_a, x_b, y_a, y_b),
            _ => return ImageRegion::default(),
        };

        //pixel height is usually negative, so max y is the first row
        let (min_x, max_x) = (x_a.min(x_b), x_a.max(x_b));
        let (min_y, max_y) = (y_a.min(y_b), y_a.max(y_b));

        ImageRegion::new((min_x, min_y), (1 + max_x - min_x, 1 + max_y - min_y))
    }

    pub fn is_empty(&self) -> bool {
        self.size.0 <= 0 || self.size.1 <= 0
    }

    pub fn num_pixels(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.size.0 * self.size.1) as usize
        }
    }

    pub fn pad_by_radius(&mut self, radius: i64) {
        self.index = (self.index.0 - radius, self.index.1 - radius);
        self.size = (self.size.0 + 2 * radius, self.size.1 + 2 * radius);
    }

    /// Crops to the intersection with `other`.  Returns false, and leaves self unchanged, if they do not intersect
    pub fn crop(&mut self, other: &ImageRegion) -> bool {
        let min_x = self.index.0.max(other.index.0);
        let min_y = self.index.1.max(other.index.1);
        let max_x = (self.index.0 + self.size.0).min(other.index.0 + other.size.0);
        let max_y = (self.index.1 + self.size.1).min(other.index.1 + other.size.1);

        if min_x >= max_x || min_y >= max_y {
            return false;
        }

        self.index = (min_x, min_y);
        self.size = (max_x - min_x, max_y - min_y);
        true
    }

    /// Offset and size usable for window reads, only valid once cropped
    pub fn window(&self) -> ((usize, usize), (usize, usize)) {
        ((self.index.0.max(0) as usize, self.index.1.max(0) as usize),
         (self.size.0.max(0) as usize, self.size.1.max(0) as usize))
    }
}

impl fmt::Display for ImageRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {} y: {} size: {}x{}", self.index.0, self.index.1, self.size.0, self.size.1)
    }
}

#[cfg(test)]
mod region_tests {
    use super::*;
    use geo::coord;

    fn stats() -> RasterStats {
        RasterStats {
            origin_x: 100.0,
            origin_y: 200.0,
            pixel_width: 10.0,
            pixel_height: -10.0,
            num_cols: 20,
            num_rows: 10,
            ..Default::default()
        }
    }

    #[test]
    fn test_from_rect() {
        let rect = Rect::new(coord! { x: 125.0, y: 155.0 }, coord! { x: 151.0, y: 181.0 });
        let region = ImageRegion::from_rect(&stats(), &rect);

        assert_eq!(region.index, (2, 1));
        assert_eq!(region.size, (4, 4));
    }

    #[test]
    fn test_pad_and_crop() {
        let mut region = ImageRegion::new((0, 3), (2, 2));
        region.pad_by_radius(1);
        assert_eq!(region, ImageRegion::new((-1, 2), (4, 4)));

        assert!(region.crop(&ImageRegion::largest_possible(&stats())));
        assert_eq!(region, ImageRegion::new((0, 2), (3, 4)));
        assert_eq!(region.window(), ((0, 2), (3, 4)));
        assert_eq!(12, region.num_pixels());

        let mut outside = ImageRegion::new((25, 3), (2, 2));
        assert!(!outside.crop(&ImageRegion::largest_possible(&stats())));
        assert_eq!(outside, ImageRegion::new((25, 3), (2, 2)));
    }

    #[test]
    fn test_from_rect_extreme_coordinates() {
        let huge = Rect::new(coord! { x: -f64::MAX, y: -f64::MAX }, coord! { x: f64::MAX, y: f64::MAX });
        let mut region = ImageRegion::from_rect(&stats(), &huge);
        assert_eq!(region.index, (-MAX_PIXEL_INDEX, -MAX_PIXEL_INDEX));
        assert_eq!(region.size, (2 * MAX_PIXEL_INDEX + 1, 2 * MAX_PIXEL_INDEX + 1));

        region.pad_by_radius(1);
        assert!(region.crop(&ImageRegion::largest_possible(&stats())));
        assert_eq!(region, ImageRegion::largest_possible(&stats()));

        let infinite = Rect::new(coord! { x: f64::NEG_INFINITY, y: 150.0 }, coord! { x: f64::INFINITY, y: 160.0 });
        let mut region = ImageRegion::from_rect(&stats(), &infinite);
        assert!(region.crop(&ImageRegion::largest_possible(&stats())));
        assert_eq!(region.size.0, 20);

        let nan = Rect::new(coord! { x: f64::NAN, y: 150.0 }, coord! { x: 130.0, y: 160.0 });
        let mut region = ImageRegion::from_rect(&stats(), &nan);
        assert!(region.is_empty());
        assert!(!region.crop(&ImageRegion::largest_possible(&stats())));
    }
}
