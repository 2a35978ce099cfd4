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
use crate::util::{ChunkPairIterator, ChunkIndex};

/// RAM budget used when the caller passes 0
pub const DEFAULT_RAM_MB: u32 = 256;

/// Splits a raster of n_rows x n_cols into a grid of windows, row of windows by row of windows.
///
/// The windows never overlap and their union is always the full raster, so two rasters with
/// the same number of rows/cols get exactly the same sequence of windows.
pub struct RasterChunkIterator<I>
where I: ChunkIndex
{
    num_steps: usize,

    x_pair_it: ChunkPairIterator<I>,
    y_pair_it: ChunkPairIterator<I>,
    num_col_chunks: usize,
    cur_step: usize,

    current_y_pair: Option< (I, I) >
}

#[derive(Debug, Clone, PartialEq)]
pub struct RasterChunkIteratorItem<I>
where I: ChunkIndex
{
    //X, Y  or column, row order
    pub window_size: (I, I),

    pub window_offset: (I, I),

    pub x_range_inclusive: (I, I),
    pub y_range_inclusive: (I, I),

    pub current_step: usize,
    pub num_steps: usize
}

impl <I> RasterChunkIteratorItem<I>
where I: ChunkIndex
{
    pub fn num_pixels(&self) -> usize {
        self.window_size.0.to_usize().unwrap_or(0) * self.window_size.1.to_usize().unwrap_or(0)
    }
}

impl <I> RasterChunkIterator<I>
//No implied bounds, could use a parent trait to DRY this
where I: ChunkIndex
{
    pub fn new(n_rows: I, n_cols: I, n_chunks: I) -> Self {

        assert!(n_rows > I::zero());
        assert!(n_cols > I::zero());
        assert!(n_chunks > I::zero());

        let y_it: ChunkPairIterator<I> = ChunkPairIterator::new(I::zero(), n_rows - I::one(),
                                                                n_rows.div_ceil(&n_chunks));
        let x_it = ChunkPairIterator::new(I::zero(), n_cols - I::one(),
                                          n_cols.div_ceil(&n_chunks));
        let x_it_len = x_it.len();

        Self {
            num_steps: y_it.len() * x_it.len(),

            x_pair_it: x_it,
            y_pair_it: y_it,
            num_col_chunks: x_it_len,

            cur_step: 0,

            current_y_pair: None
        }
    }

    /// Restarts the sequence from the first window
    pub fn reset(&mut self) {
        self.x_pair_it.reset();
        self.y_pair_it.reset();
        self.cur_step = 0;
        self.current_y_pair = None;
    }
}

impl RasterChunkIterator<usize>
{
    /// Picks the smallest grid where a single window of `bytes_per_pixel` pixels fits in `ram_mb`.
    ///
    /// `ram_mb == 0` uses [`DEFAULT_RAM_MB`].  A window is never smaller than 1x1.
    pub fn for_ram_budget(n_rows: usize, n_cols: usize, bytes_per_pixel: usize, ram_mb: u32) -> Self {
        let n_chunks = num_chunks_for_budget(n_rows, n_cols, bytes_per_pixel, ram_mb);

        Self::new(n_rows, n_cols, n_chunks)
    }
}

pub fn num_chunks_for_budget(n_rows: usize, n_cols: usize, bytes_per_pixel: usize, ram_mb: u32) -> usize {
    let ram_mb = if ram_mb == 0 { DEFAULT_RAM_MB } else { ram_mb };
    let budget_bytes = ram_mb as usize * 1024 * 1024;

    let total_bytes = n_rows * n_cols * bytes_per_pixel.max(1);

    let max_chunks = n_rows.max(n_cols).max(1);

    //first guess, each side divided by sqrt(ratio)
    let mut n_chunks = ((total_bytes as f64 / budget_bytes as f64).sqrt().ceil() as usize).clamp(1, max_chunks);

    let window_bytes = |n: usize| {
        num::Integer::div_ceil(&n_rows, &n) * num::Integer::div_ceil(&n_cols, &n) * bytes_per_pixel.max(1)
    };

    while n_chunks < max_chunks && window_bytes(n_chunks) > budget_bytes {
        n_chunks += 1;
    }

    n_chunks
}

impl <I> Iterator for RasterChunkIterator<I>
where I: ChunkIndex
{
    type Item = RasterChunkIteratorItem<I>;

    fn next(&mut self) -> Option<Self::Item> {

        if self.cur_step >= self.num_steps {
            return None;
        }

        let chunk_col = self.cur_step % self.num_col_chunks;

        if chunk_col == 0 {
            self.current_y_pair = self.y_pair_it.next()
        }

        let y_val = self.current_y_pair?;
        let x_val = self.x_pair_it.next()?;

        if chunk_col == self.num_col_chunks - 1 {
            self.x_pair_it.reset();
        }

        let window_size = (I::one() + x_val.1 - x_val.0, I::one() + y_val.1 - y_val.0);
        let window_offset = (x_val.0,
                             y_val.0);

        let r = Some( RasterChunkIteratorItem {
            window_size,
            window_offset,
            x_range_inclusive: x_val,
            y_range_inclusive: y_val,
            current_step: self.cur_step,
            num_steps: self.num_steps
        });

        self.cur_step += 1;

        r
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let l = self.num_steps - self.cur_step;
        (l, Some(l))
    }
}


impl <I> ExactSizeIterator for RasterChunkIterator<I>
where I: ChunkIndex
{

}
