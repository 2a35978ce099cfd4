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
use std::fs::remove_file;
use std::path::PathBuf;

use anyhow::Result;
use log::info;
use structopt::StructOpt;

#[derive(StructOpt)]
pub struct OutputArgs {
    #[structopt(parse(from_os_str), long = "out")]
    pub output: PathBuf,

    #[structopt(long, help = "Overwrite the output if it exists")]
    pub clean: bool,
}

impl OutputArgs {
    /// False if an existing output is kept, nothing should be computed then
    pub fn should_run(&self) -> bool {
        if self.output.exists() && !self.clean {
            info!("{:?} already exists and --clean not passed, doing nothing", &self.output);
            return false;
        }
        true
    }

    /// Removes the previous output.  Only called once the new one is computed, so a failed run keeps it
    pub fn replace_existing(&self) -> Result<()> {
        if self.output.exists() {
            info!("Replacing {:?}", &self.output);
            remove_file(&self.output)?;
        }
        Ok(())
    }
}
