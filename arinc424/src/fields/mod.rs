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

//! Field decoding.
//!
//! Every field of a record is described by a [`FieldKind`] and decoded with
//! [`decode`] into a [`Value`]. Numbers in ARINC 424 often carry an implied
//! scale which is part of the field's kind, e.g. a VOR frequency `11790` is
//! decoded as `117.90` while a NDB frequency `03620` is `362.0`.

use std::fmt;

use crate::field::signed;
use crate::{Error, FixedField};

mod bearing;
mod coordinate;
mod mag_var;

pub use bearing::Bearing;
pub use coordinate::{Axis, Latitude, Longitude};
pub use mag_var::MagVar;

/// A decoded field value.
#[derive(Clone, PartialEq, Debug, Default)]
pub enum Value {
    /// The field contains only spaces.
    #[default]
    Blank,
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl Value {
    #[inline]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Returns the text or an empty string for any other value.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) => s,
            _ => "",
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Self::Decimal(d) => Some(*d),
            Self::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Self::Blank
        } else {
            Self::Text(s.to_owned())
        }
    }
}

impl From<Option<f64>> for Value {
    fn from(d: Option<f64>) -> Self {
        d.map_or(Self::Blank, Self::Decimal)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(d) => write!(f, "{d}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// How spaces are removed from a text field.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Trim {
    /// Remove the padding of a left-justified field.
    End,
    /// Remove leading and trailing spaces.
    Both,
    /// Keep the field as is, e.g. for codes where each column has its own
    /// meaning.
    Keep,
}

/// The kind of a field defines its width and how it's decoded.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum FieldKind {
    /// A right-justified, possibly signed integer.
    Integer(usize),
    /// An integer with `places` implied decimal places.
    Decimal { width: usize, places: u8 },
    /// Text like identifiers or names.
    Ident(usize, Trim),
    /// A latitude or longitude in degrees, minutes and seconds.
    Coordinate(Axis),
    /// A magnetic variation or station declination.
    MagVar,
    /// A magnetic or true bearing.
    Bearing,
    /// A code out of a fixed set of codes.
    Code {
        width: usize,
        allowed: &'static [&'static str],
    },
}

impl FieldKind {
    /// The width of the field in bytes.
    pub const fn width(&self) -> usize {
        match self {
            Self::Integer(width)
            | Self::Decimal { width, .. }
            | Self::Ident(width, _)
            | Self::Code { width, .. } => *width,
            Self::Coordinate(axis) => axis.width(),
            Self::MagVar => MagVar::LENGTH,
            Self::Bearing => Bearing::LENGTH,
        }
    }
}

fn text(raw: &[u8], trim: Trim) -> Value {
    let s = String::from_utf8_lossy(raw);

    match trim {
        Trim::End => Value::from(s.trim_end()),
        Trim::Both => Value::from(s.trim()),
        Trim::Keep if s.trim().is_empty() => Value::Blank,
        Trim::Keep => Value::Text(s.into_owned()),
    }
}

/// Decodes the raw bytes of a field.
///
/// A field containing only spaces decodes to [`Value::Blank`] regardless of
/// its kind.
///
/// # Errors
///
/// Returns an error if the width of `raw` doesn't match the kind's width, if
/// a numeric field contains other characters than digits or if a coordinate,
/// variation or code is invalid.
pub fn decode(raw: &[u8], kind: FieldKind) -> Result<Value, Error> {
    if raw.len() != kind.width() {
        return Err(Error::InvalidFieldLength {
            expected: kind.width(),
            actual: raw.len(),
        });
    }

    match kind {
        FieldKind::Integer(_) => Ok(signed(raw)?.map_or(Value::Blank, Value::Integer)),
        FieldKind::Decimal { places, .. } => {
            let scale = 10f64.powi(places as i32);
            Ok(signed(raw)?.map_or(Value::Blank, |n| Value::Decimal(n as f64 / scale)))
        }
        FieldKind::Ident(_, trim) => Ok(text(raw, trim)),
        FieldKind::Coordinate(Axis::Latitude) => Option::<Latitude>::from_bytes(raw)?
            .map(|lat| lat.as_decimal())
            .transpose()
            .map(Value::from),
        FieldKind::Coordinate(Axis::Longitude) => Option::<Longitude>::from_bytes(raw)?
            .map(|lon| lon.as_decimal())
            .transpose()
            .map(Value::from),
        FieldKind::MagVar => {
            Ok(Option::<MagVar>::from_bytes(raw)?.map_or(Value::Blank, |v| Value::Decimal(v.degrees())))
        }
        FieldKind::Bearing => {
            Ok(Option::<Bearing>::from_bytes(raw)?.map_or(Value::Blank, |b| Value::Decimal(b.degrees())))
        }
        FieldKind::Code { allowed, .. } => match text(raw, Trim::Both) {
            Value::Text(code) if !allowed.contains(&code.as_str()) => Err(Error::InvalidVariant {
                field: "Code",
                bytes: raw.to_vec(),
                expected: "a code defined for this field",
            }),
            value => Ok(value),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_implied_decimal_places() {
        let vor = FieldKind::Decimal {
            width: 5,
            places: 2,
        };
        let ndb = FieldKind::Decimal {
            width: 5,
            places: 1,
        };
        assert_eq!(decode(b"11790", vor), Ok(Value::Decimal(117.9)));
        assert_eq!(decode(b"03620", ndb), Ok(Value::Decimal(362.0)));

        let gradient = FieldKind::Decimal {
            width: 6,
            places: 3,
        };
        assert_eq!(decode(b"-00450", gradient), Ok(Value::Decimal(-0.45)));
    }

    #[test]
    fn decodes_blank_fields() {
        assert_eq!(decode(b"     ", FieldKind::Integer(5)), Ok(Value::Blank));
        assert_eq!(decode(b"     ", FieldKind::MagVar), Ok(Value::Blank));
        assert_eq!(
            decode(b"         ", FieldKind::Coordinate(Axis::Latitude)),
            Ok(Value::Blank)
        );
        assert_eq!(decode(b"   ", FieldKind::Ident(3, Trim::End)), Ok(Value::Blank));
    }

    #[test]
    fn trims_text_by_policy() {
        assert_eq!(
            decode(b"RW16R ", FieldKind::Ident(6, Trim::End)),
            Ok(Value::Text("RW16R".into()))
        );
        assert_eq!(
            decode(b"  M ", FieldKind::Ident(4, Trim::Keep)),
            Ok(Value::Text("  M ".into()))
        );
        assert_eq!(
            decode(b" Y ", FieldKind::Ident(3, Trim::Both)),
            Ok(Value::Text("Y".into()))
        );
    }

    #[test]
    fn rejects_width_mismatch() {
        assert_eq!(
            decode(b"N384202", FieldKind::Coordinate(Axis::Latitude)),
            Err(Error::InvalidFieldLength {
                expected: 9,
                actual: 7
            })
        );
    }

    #[test]
    fn rejects_non_numeric_numbers() {
        assert!(matches!(
            decode(b"12X45", FieldKind::Integer(5)),
            Err(Error::NotANumber { .. })
        ));
    }

    #[test]
    fn rejects_unknown_codes() {
        let kind = FieldKind::Code {
            width: 1,
            allowed: &["Y", "N"],
        };
        assert_eq!(decode(b"Y", kind), Ok(Value::Text("Y".into())));
        assert_eq!(decode(b" ", kind), Ok(Value::Blank));
        assert!(matches!(
            decode(b"X", kind),
            Err(Error::InvalidVariant { .. })
        ));
    }

    #[test]
    fn decodes_variation_and_bearing() {
        assert_eq!(decode(b"W0130", FieldKind::MagVar), Ok(Value::Decimal(-13.0)));
        assert_eq!(decode(b"1740", FieldKind::Bearing), Ok(Value::Decimal(174.0)));
        assert_eq!(decode(b"347T", FieldKind::Bearing), Ok(Value::Decimal(347.0)));
    }
}
