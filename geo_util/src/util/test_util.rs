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
use std::path::PathBuf;
use std::env::temp_dir;
use uuid::Uuid;

/// A path in a fresh, not yet created, directory under the system temp dir
pub fn get_temp_filename(file_name: &str) -> PathBuf {
    let mut p = temp_dir();
    p.push("geo_util_tests");
    p.push(Uuid::new_v4().to_string());
    p.push(file_name);
    p
}
