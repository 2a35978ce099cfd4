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
use std::time::Instant;

use log::{debug, info};

use crate::util::{format_duration, remaining_time_message, RasterChunkIteratorItem};
use crate::zonal::AccumulatorSummary;

/// Progress callbacks of a zonal statistics run
pub trait ZonalObserver {
    /// Called after each split has been accumulated
    fn on_split(&mut self, split: &RasterChunkIteratorItem<usize>);

    fn on_finished(&mut self, summary: &AccumulatorSummary);
}

/// Ignores everything
#[derive(Debug, Default)]
pub struct NullObserver;

impl ZonalObserver for NullObserver {
    fn on_split(&mut self, _split: &RasterChunkIteratorItem<usize>) {}

    fn on_finished(&mut self, _summary: &AccumulatorSummary) {}
}

/// Reports progress through the log, at most once a second
pub struct LogObserver {
    start: Instant,
    last_output: Instant,
}

impl LogObserver {
    pub fn new() -> Self {
        LogObserver {
            start: Instant::now(),
            last_output: Instant::now(),
        }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl ZonalObserver for LogObserver {
    fn on_split(&mut self, split: &RasterChunkIteratorItem<usize>) {
        debug!("Split {} of {}, offset {:?} size {:?}",
            split.current_step + 1, split.num_steps, split.window_offset, split.window_size);

        if self.last_output.elapsed().as_secs() >= 1 {
            self.last_output = Instant::now();
            info!("{}", remaining_time_message(&self.start, split.current_step as u32 + 1, split.num_steps as u32));
        }
    }

    fn on_finished(&mut self, summary: &AccumulatorSummary) {
        info!("Accumulated {} of {} pixels in {} splits ({} outside zones, {} no data).  Took {}",
            summary.accumulated_pixels, summary.total_pixels, summary.windows,
            summary.no_zone_pixels, summary.no_data_pixels,
            format_duration(self.start.elapsed()));
    }
}
