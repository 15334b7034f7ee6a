// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

use crate::fields::{decode, Axis, FieldKind, Trim, Value};
use crate::Error;

/// The position and kind of a field within a record.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FieldDef {
    pub name: &'static str,
    /// The first column of the field, starting at 1 as in ARINC 424.
    pub column: usize,
    pub kind: FieldKind,
}

impl FieldDef {
    pub const fn new(name: &'static str, column: usize, kind: FieldKind) -> Self {
        Self { name, column, kind }
    }

    /// Left-justified text with the padding removed.
    pub const fn ident(name: &'static str, column: usize, width: usize) -> Self {
        Self::new(name, column, FieldKind::Ident(width, Trim::End))
    }

    /// Text whose spaces are significant.
    pub const fn raw(name: &'static str, column: usize, width: usize) -> Self {
        Self::new(name, column, FieldKind::Ident(width, Trim::Keep))
    }

    pub const fn integer(name: &'static str, column: usize, width: usize) -> Self {
        Self::new(name, column, FieldKind::Integer(width))
    }

    pub const fn decimal(name: &'static str, column: usize, width: usize, places: u8) -> Self {
        Self::new(name, column, FieldKind::Decimal { width, places })
    }

    pub const fn code(
        name: &'static str,
        column: usize,
        width: usize,
        allowed: &'static [&'static str],
    ) -> Self {
        Self::new(name, column, FieldKind::Code { width, allowed })
    }

    pub const fn latitude(name: &'static str, column: usize) -> Self {
        Self::new(name, column, FieldKind::Coordinate(Axis::Latitude))
    }

    pub const fn longitude(name: &'static str, column: usize) -> Self {
        Self::new(name, column, FieldKind::Coordinate(Axis::Longitude))
    }

    pub const fn mag_var(name: &'static str, column: usize) -> Self {
        Self::new(name, column, FieldKind::MagVar)
    }

    pub const fn bearing(name: &'static str, column: usize) -> Self {
        Self::new(name, column, FieldKind::Bearing)
    }

    /// The field's bytes within a record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record ends before the field.
    pub fn slice<'a>(&self, record: &'a [u8]) -> Result<&'a [u8], Error> {
        let start = self.column - 1;
        let end = start + self.kind.width();

        record.get(start..end).ok_or(Error::InvalidFieldLength {
            expected: self.kind.width(),
            actual: record.len().saturating_sub(start),
        })
    }

    /// Decodes this field out of a record.
    ///
    /// # Errors
    ///
    /// Returns the decoding error of the field.
    pub fn decode(&self, record: &[u8]) -> Result<Value, Error> {
        decode(self.slice(record)?, self.kind)
    }
}

/// The fields of one record type.
#[derive(Debug)]
pub struct Layout {
    pub name: &'static str,
    /// The fields which identify a record, e.g. the airport and runway
    /// identifier of a runway. A continuation record has the same key as the
    /// record it continues.
    pub key: &'static [&'static str],
    pub fields: &'static [FieldDef],
}

impl Layout {
    /// The definitions of the key fields.
    pub fn key_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| self.key.contains(&f.name))
    }
}

/// Fields at the start of every record.
pub static HEADER: &[FieldDef] = &[
    FieldDef::code("record_type", 1, 1, &["S", "T"]),
    FieldDef::ident("area_code", 2, 3),
    FieldDef::ident("section_code", 5, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_by_column() {
        let def = FieldDef::ident("code", 7, 4);
        assert_eq!(def.slice(b"SUSAP KDENK2A"), Ok(b"KDEN".as_slice()));
        assert_eq!(def.decode(b"SUSAP KDENK2A"), Ok(Value::Text("KDEN".into())));
    }

    // Writes degrees, minutes and seconds in the fixed-column form.
    fn encode_dms(hem: char, deg: u32, min: u32, centisec: u32, deg_width: usize) -> String {
        format!("{hem}{deg:0deg_width$}{min:02}{centisec:04}")
    }

    #[test]
    fn decodes_what_was_encoded() {
        static FIELDS: &[FieldDef] = &[
            FieldDef::integer("elevation", 1, 5),
            FieldDef::decimal("frequency", 6, 5, 2),
            FieldDef::decimal("gradient", 11, 6, 3),
            FieldDef::latitude("latitude", 17),
            FieldDef::longitude("longitude", 26),
            FieldDef::ident("identifier", 36, 5),
        ];

        let record = format!(
            "{:05}{:05}{:06}{}{}{:<5}",
            -42,
            11790,
            -150,
            encode_dms('S', 33, 56, 4512, 2),
            encode_dms('W', 118, 24, 2900, 3),
            "LAX",
        );

        let decoded: Vec<Value> = FIELDS
            .iter()
            .map(|def| def.decode(record.as_bytes()))
            .collect::<Result<_, _>>()
            .expect("synthetic record should decode");

        assert_eq!(
            decoded,
            vec![
                Value::Integer(-42),
                Value::Decimal(11790.0 / 100.0),
                Value::Decimal(-150.0 / 1000.0),
                Value::Decimal(-(33.0 + 56.0 / 60.0 + 45.12 / 3600.0)),
                Value::Decimal(-(118.0 + 24.0 / 60.0 + 29.0 / 3600.0)),
                Value::Text("LAX".into()),
            ]
        );
    }

    #[test]
    fn fails_on_short_record() {
        let def = FieldDef::ident("name", 94, 30);
        assert_eq!(
            def.slice(b"SUSAP KDENK2A"),
            Err(Error::InvalidFieldLength {
                expected: 30,
                actual: 0
            })
        );
    }
}
