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
use crate::{Error, FixedField};

/// 5.39 Magnetic Variation, also used for the station declination of navaids.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub enum MagVar {
    /// The variation is east of true north.
    East(f64),
    /// The variation is west of true north.
    West(f64),
    /// The point is oriented to true north.
    OrientedToTrueNorth,
}

impl MagVar {
    /// Signed variation in degrees with east being positive.
    pub fn degrees(&self) -> f64 {
        match self {
            Self::East(deg) => *deg,
            Self::West(deg) => -deg,
            Self::OrientedToTrueNorth => 0.0,
        }
    }
}

impl FixedField<'_> for MagVar {
    const LENGTH: usize = 5;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        if bytes.len() < Self::LENGTH {
            return Err(Error::InvalidFieldLength {
                expected: Self::LENGTH,
                actual: bytes.len(),
            });
        }

        let code = bytes[0];
        // degrees and tenths of a degree
        let deg = || -> Result<f64, Error> { Ok(digits(&bytes[1..5])? as f64 / 10.0) };

        match code {
            b'E' => Ok(Self::East(deg()?)),
            b'W' => Ok(Self::West(deg()?)),
            b'T' => Ok(Self::OrientedToTrueNorth),
            _ => Err(Error::InvalidCharacter {
                field: "Magnetic Variation",
                byte: code,
                expected: "E, W or T as variation direction",
            }),
        }
    }
}
