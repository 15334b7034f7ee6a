// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::field::digits;
use crate::{Alphanumeric, Error};

/// The axis of a coordinate field.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Axis {
    /// `NDDMMSSss`, 9 bytes.
    Latitude,
    /// `EDDDMMSSss`, 10 bytes.
    Longitude,
}

impl Axis {
    pub const fn width(&self) -> usize {
        match self {
            Self::Latitude => 9,
            Self::Longitude => 10,
        }
    }
}

/// Degrees, minutes and seconds (with centiseconds) to decimal degrees.
fn dms(deg: &[u8], min: &[u8], sec: &[u8]) -> Result<f64, Error> {
    let deg = digits(deg)? as f64;
    let min = digits(min)? as f64;
    let sec = digits(sec)? as f64 / 100.0; // includes centiseconds

    Ok(deg + min / 60.0 + sec / 3600.0)
}

pub type Latitude<'a> = Alphanumeric<'a, 9>;

impl<'a> Latitude<'a> {
    /// Returns the latitude as decimal in the range -90.0 (south) to 90.0 (north).
    ///
    /// # Errors
    ///
    /// Returns an error if blank or if the hemisphere is neither `N` nor `S`.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        let hem = self.first();
        let decimal = || dms(&self.0[1..3], &self.0[3..5], &self.0[5..9]);

        match hem {
            b'N' => decimal(),
            b'S' => decimal().map(|d| -d),
            _ => Err(Error::InvalidCharacter {
                field: "Latitude",
                byte: hem,
                expected: "N or S",
            }),
        }
    }
}

pub type Longitude<'a> = Alphanumeric<'a, 10>;

impl<'a> Longitude<'a> {
    /// Returns the longitude as decimal in the range -180.0 (west) to 180.0 (east).
    ///
    /// # Errors
    ///
    /// Returns an error if blank or if the hemisphere is neither `W` nor `E`.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        let hem = self.first();
        let decimal = || dms(&self.0[1..4], &self.0[4..6], &self.0[6..10]);

        match hem {
            b'E' => decimal(),
            b'W' => decimal().map(|d| -d),
            _ => Err(Error::InvalidCharacter {
                field: "Longitude",
                byte: hem,
                expected: "E or W",
            }),
        }
    }
}
