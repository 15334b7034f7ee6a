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

/// A runway bearing or leg course.
///
/// Magnetic values are coded in tenths of a degree, true values in whole
/// degrees followed by a `T`.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub enum Bearing {
    MagneticNorth(f64),
    TrueNorth(u32),
}

impl Bearing {
    pub fn degrees(&self) -> f64 {
        match self {
            Self::MagneticNorth(deg) => *deg,
            Self::TrueNorth(deg) => *deg as f64,
        }
    }
}

impl FixedField<'_> for Bearing {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        if bytes.len() < Self::LENGTH {
            return Err(Error::InvalidFieldLength {
                expected: Self::LENGTH,
                actual: bytes.len(),
            });
        }

        match bytes[3] {
            b'T' => Ok(Self::TrueNorth(digits(&bytes[0..3])? as u32)),
            _ => Ok(Self::MagneticNorth(digits(&bytes[0..4])? as f64 / 10.0)),
        }
    }
}
