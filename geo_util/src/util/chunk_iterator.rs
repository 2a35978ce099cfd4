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
use std::fmt::Debug;
use num::{Integer, PrimInt, FromPrimitive};

/// Integer types usable as row/column indexes when splitting a raster
pub trait ChunkIndex: PrimInt + Integer + FromPrimitive + Debug {}

impl<T: PrimInt + Integer + FromPrimitive + Debug> ChunkIndex for T {}

/// Splits the inclusive range [start, end] into consecutive inclusive ranges of `step_size`.
///
/// The last range is shorter when the range length is not a multiple of the step.
pub struct ChunkPairIterator<I>
where I: ChunkIndex
{
    start: I,
    end: I,
    step_size: I,
    num_pairs: usize,
    cur_pair: usize,
}

impl <I> ChunkPairIterator<I>
where I: ChunkIndex
{
    pub fn new(start: I, end: I, step_size: I) -> Self {
        assert!(end >= start);
        assert!(step_size >= I::one());

        let num_pairs = (end - start + I::one()).div_ceil(&step_size);

        ChunkPairIterator {
            start,
            end,
            step_size,
            num_pairs: num_pairs.to_usize().unwrap_or(usize::MAX),
            cur_pair: 0,
        }
    }

    pub fn reset(&mut self) {
        self.cur_pair = 0;
    }

    fn pair(&self, index: usize) -> (I, I) {
        //index < num_pairs so the lower bound never passes end
        let offset = I::from_usize(index).unwrap_or_else(I::zero) * self.step_size;
        let lower = self.start + offset;
        let upper = if self.end - lower < self.step_size {
            self.end
        } else {
            lower + self.step_size - I::one()
        };
        (lower, upper)
    }
}

impl <I> Iterator for ChunkPairIterator<I>
where I: ChunkIndex
{
    type Item = (I, I);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur_pair >= self.num_pairs {
            return None;
        }
        let r = self.pair(self.cur_pair);
        self.cur_pair += 1;
        Some(r)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let l = self.num_pairs - self.cur_pair;
        (l, Some(l))
    }
}

impl <I> ExactSizeIterator for ChunkPairIterator<I>
where I: ChunkIndex
{
}
