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

use crate::fields::Value;
use crate::layout::HEADER;
use crate::records::RecordType;
use crate::Error;

/// The length of every record.
pub const RECORD_LENGTH: usize = 132;

/// The decoded fields of one record.
#[derive(Clone, PartialEq, Debug)]
pub struct ParsedLine {
    /// The line within the file, starting at 1.
    pub line_number: usize,
    pub record_type: RecordType,
    fields: Vec<(&'static str, Value)>,
}

impl ParsedLine {
    pub fn new(line_number: usize, record_type: RecordType) -> Self {
        Self {
            line_number,
            record_type,
            fields: Vec::new(),
        }
    }

    /// Returns the value of a field or `None` if the record has no such
    /// field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find_map(|(n, value)| (*n == name).then_some(value))
    }

    /// Returns the text of a field or an empty string.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).map_or("", Value::as_str)
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_integer)
    }

    pub fn decimal(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_decimal)
    }

    /// Merges a continuation record into this record.
    ///
    /// Only fields which are absent or blank are taken from the
    /// continuation. A field which already has a value is never overwritten.
    pub fn merge(&mut self, continuation: ParsedLine) {
        for (name, value) in continuation.fields {
            if value.is_blank() {
                continue;
            }

            match self.fields.iter_mut().find(|(n, _)| *n == name) {
                Some((_, v)) if v.is_blank() => *v = value,
                Some(_) => {}
                None => self.fields.push((name, value)),
            }
        }
    }
}

/// Parses a record by the layout of its type.
///
/// # Errors
///
/// Returns [`Error::Unclassified`] for unknown records, an
/// [`Error::InvalidRecordLength`] if the record isn't 132 bytes long or the
/// error of the first field that fails to decode.
///
/// # Examples
///
/// ```
/// use arinc424::{classify, parse};
///
/// # fn main() -> Result<(), arinc424::Error> {
/// let data = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";
/// let airport = parse(1, data, classify(data))?;
///
/// assert_eq!(airport.text("code"), "KJFK");
/// assert_eq!(airport.text("name"), "JOHN F KENNEDY INTL");
/// assert_eq!(airport.integer("airport_elevation"), Some(13));
/// #     Ok(())
/// # }
/// ```
pub fn parse(
    line_number: usize,
    record: &[u8],
    record_type: RecordType,
) -> Result<ParsedLine, Error> {
    let Some(layout) = record_type.layout() else {
        return Err(Error::Unclassified { line: line_number });
    };

    if record.len() != RECORD_LENGTH {
        return Err(Error::InvalidRecordLength {
            actual: record.len(),
        });
    }

    let mut line = ParsedLine::new(line_number, record_type);
    line.fields.reserve(HEADER.len() + layout.fields.len());

    for def in HEADER.iter().chain(layout.fields) {
        let value = def
            .decode(record)
            .map_err(|e| e.at(line_number, def.name))?;
        line.fields.push((def.name, value));
    }

    Ok(line)
}

/// Parses only the header and the key fields of a record.
///
/// Unlike [`parse`] the record may be of any length as long as it contains
/// the key fields. This identifies records which can't be parsed as a whole,
/// e.g. a truncated last line.
///
/// # Errors
///
/// Returns [`Error::Unclassified`] for unknown records or the error of the
/// first key field that fails to decode.
pub fn parse_key(
    line_number: usize,
    record: &[u8],
    record_type: RecordType,
) -> Result<ParsedLine, Error> {
    let Some(layout) = record_type.layout() else {
        return Err(Error::Unclassified { line: line_number });
    };

    let mut line = ParsedLine::new(line_number, record_type);

    for def in HEADER.iter().chain(layout.key_fields()) {
        let value = def
            .decode(record)
            .map_err(|e| e.at(line_number, def.name))?;
        line.fields.push((def.name, value));
    }

    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{classify, RecordKind};

    const AIRPORT: &[u8] = b"SUSAP KDENK2ADEN     1FL180160YHN39514200W104402400E008005434250DEN   1800018000CU07YMNAR    DENVER INTL                   002012313";
    const AIRPORT_CONTINUATION: &[u8] = b"SUSAP KDENK2ADEN     2APRIOR PERMISSION REQUIRED FOR GA                                                                    002022313";

    #[test]
    fn parses_header_fields() {
        let line = parse(7, AIRPORT, classify(AIRPORT)).expect("airport should parse");

        assert_eq!(line.line_number, 7);
        assert_eq!(line.record_type, RecordType::Primary(RecordKind::Airport));
        assert_eq!(line.text("record_type"), "S");
        assert_eq!(line.text("area_code"), "USA");
        assert_eq!(line.text("section_code"), "P");
    }

    #[test]
    fn rejects_unknown_records() {
        assert_eq!(
            parse(3, AIRPORT, RecordType::Unknown),
            Err(Error::Unclassified { line: 3 })
        );
    }

    #[test]
    fn rejects_short_records() {
        let record = &AIRPORT[..100];
        assert_eq!(
            parse(1, record, classify(record)),
            Err(Error::InvalidRecordLength { actual: 100 })
        );
    }

    #[test]
    fn reports_line_and_field_of_errors() {
        let mut record = AIRPORT.to_vec();
        record[32] = b'X'; // latitude hemisphere

        let err = parse(12, &record, classify(&record)).expect_err("latitude is invalid");
        assert_eq!(err.line(), Some(12));
        assert!(matches!(err, Error::Field { field: "latitude", .. }));
    }

    #[test]
    fn parses_key_of_truncated_records() {
        let record = &AIRPORT[..40];
        let key = parse_key(5, record, classify(record)).expect("key should parse");

        assert_eq!(key.text("code"), "KDEN");
        assert_eq!(key.text("icao_code"), "K2");
        assert_eq!(key.get("name"), None);
    }

    #[test]
    fn merges_continuation_without_overwriting() {
        let mut primary = parse(1, AIRPORT, classify(AIRPORT)).expect("airport should parse");
        let continuation = parse(2, AIRPORT_CONTINUATION, classify(AIRPORT_CONTINUATION))
            .expect("continuation should parse");

        primary.merge(continuation);

        assert_eq!(primary.text("notes"), "PRIOR PERMISSION REQUIRED FOR GA");
        assert_eq!(primary.text("continuation_record_number"), "1");
        assert_eq!(primary.text("name"), "DENVER INTL");
    }
}
