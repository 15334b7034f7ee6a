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

use crate::layout::{FieldDef, Layout};

/// 4.1.25 Controlled Airspace Primary Record (UC).
///
/// Each record is one point of the airspace boundary. An airspace is
/// identified by its center, type and multiple code, and its boundary
/// follows the sequence numbers.
pub static CONTROLLED_AIRSPACE: Layout = Layout {
    name: "Controlled Airspace",
    key: &[
        "icao_code",
        "airspace_type",
        "airspace_center",
        "multiple_code",
        "sequence_number",
    ],
    fields: &[
        FieldDef::ident("subsection_code", 6, 1),
        FieldDef::ident("icao_code", 7, 2),
        FieldDef::ident("airspace_type", 9, 1),
        FieldDef::ident("airspace_center", 10, 5),
        FieldDef::ident("center_section_code", 15, 1),
        FieldDef::ident("center_subsection_code", 16, 1),
        FieldDef::ident("airspace_classification", 17, 1),
        FieldDef::ident("multiple_code", 20, 1),
        FieldDef::integer("sequence_number", 21, 4),
        FieldDef::ident("continuation_record_number", 25, 1),
        FieldDef::code("level", 26, 1, &["B", "H", "L"]),
        FieldDef::ident("time_code", 27, 1),
        FieldDef::ident("notam", 28, 1),
        FieldDef::ident("boundary_via", 31, 2),
        FieldDef::latitude("latitude", 33),
        FieldDef::longitude("longitude", 42),
        FieldDef::latitude("arc_origin_latitude", 52),
        FieldDef::longitude("arc_origin_longitude", 61),
        FieldDef::decimal("arc_distance", 71, 4, 1),
        FieldDef::bearing("arc_bearing", 75),
        FieldDef::ident("rnp", 79, 3),
        // GND, UNLTD, NOTSP or an altitude in feet
        FieldDef::ident("lower_limit", 82, 5),
        FieldDef::code("lower_unit_indicator", 87, 1, &["A", "M"]),
        FieldDef::ident("upper_limit", 88, 5),
        FieldDef::code("upper_unit_indicator", 93, 1, &["A", "M"]),
        FieldDef::ident("name", 94, 30),
        FieldDef::integer("file_record_number", 124, 5),
        FieldDef::ident("cycle", 129, 4),
    ],
};

pub static CONTROLLED_AIRSPACE_CONTINUATION: Layout = Layout {
    name: "Controlled Airspace Continuation",
    key: &[
        "icao_code",
        "airspace_type",
        "airspace_center",
        "multiple_code",
        "sequence_number",
    ],
    fields: &[
        FieldDef::ident("subsection_code", 6, 1),
        FieldDef::ident("icao_code", 7, 2),
        FieldDef::ident("airspace_type", 9, 1),
        FieldDef::ident("airspace_center", 10, 5),
        FieldDef::ident("multiple_code", 20, 1),
        FieldDef::integer("sequence_number", 21, 4),
        FieldDef::ident("continuation_record_number", 25, 1),
        FieldDef::ident("application_type", 26, 1),
        FieldDef::ident("notes", 27, 97),
    ],
};

/// 4.1.18 Restrictive Airspace Primary Record (UR), e.g. MOAs or
/// restricted areas.
pub static RESTRICTIVE_AIRSPACE: Layout = Layout {
    name: "Restrictive Airspace",
    key: &[
        "icao_code",
        "restrictive_type",
        "airspace_designation",
        "multiple_code",
        "sequence_number",
    ],
    fields: &[
        FieldDef::ident("subsection_code", 6, 1),
        FieldDef::ident("icao_code", 7, 2),
        FieldDef::ident("restrictive_type", 9, 1),
        FieldDef::ident("airspace_designation", 10, 10),
        FieldDef::ident("multiple_code", 20, 1),
        FieldDef::integer("sequence_number", 21, 4),
        FieldDef::ident("continuation_record_number", 25, 1),
        FieldDef::code("level", 26, 1, &["B", "H", "L"]),
        FieldDef::ident("time_code", 27, 1),
        FieldDef::ident("notam", 28, 1),
        FieldDef::ident("boundary_via", 31, 2),
        FieldDef::latitude("latitude", 33),
        FieldDef::longitude("longitude", 42),
        FieldDef::latitude("arc_origin_latitude", 52),
        FieldDef::longitude("arc_origin_longitude", 61),
        FieldDef::decimal("arc_distance", 71, 4, 1),
        FieldDef::bearing("arc_bearing", 75),
        FieldDef::ident("lower_limit", 82, 5),
        FieldDef::code("lower_unit_indicator", 87, 1, &["A", "M"]),
        FieldDef::ident("upper_limit", 88, 5),
        FieldDef::code("upper_unit_indicator", 93, 1, &["A", "M"]),
        FieldDef::ident("name", 94, 30),
        FieldDef::integer("file_record_number", 124, 5),
        FieldDef::ident("cycle", 129, 4),
    ],
};

pub static RESTRICTIVE_AIRSPACE_CONTINUATION: Layout = Layout {
    name: "Restrictive Airspace Continuation",
    key: &[
        "icao_code",
        "restrictive_type",
        "airspace_designation",
        "multiple_code",
        "sequence_number",
    ],
    fields: &[
        FieldDef::ident("subsection_code", 6, 1),
        FieldDef::ident("icao_code", 7, 2),
        FieldDef::ident("restrictive_type", 9, 1),
        FieldDef::ident("airspace_designation", 10, 10),
        FieldDef::ident("multiple_code", 20, 1),
        FieldDef::integer("sequence_number", 21, 4),
        FieldDef::ident("continuation_record_number", 25, 1),
        FieldDef::ident("application_type", 26, 1),
        FieldDef::ident("notes", 27, 97),
    ],
};

#[cfg(test)]
mod tests {
    use crate::fields::Value;
    use crate::records::{RecordKind, RecordType};
    use crate::{classify, parse};

    const CONTROLLED: &[u8] = b"SUSAUCK6TKJFK PAB  A00100     R N40394857W074144423N40413000W07409590000402450   GND  A07000MNEW YORK AREA A               676061703";
    const CONTROLLED_CONTINUATION: &[u8] = b"SUSAUCK6TKJFK PAB  A00102AACTIVE 0600-2300 LCL                                                                             676081703";
    const RESTRICTIVE: &[u8] = b"SUSAURK1MEEL A     A00101L    H N46200000W124215300                              11000M17999MEEL A MOA                     715681713";

    #[test]
    fn controlled_airspace_record() {
        let point = parse(1, CONTROLLED, classify(CONTROLLED)).expect("airspace should parse");

        assert_eq!(
            point.record_type,
            RecordType::Primary(RecordKind::ControlledAirspace)
        );
        assert_eq!(point.text("icao_code"), "K6");
        assert_eq!(point.text("airspace_type"), "T");
        assert_eq!(point.text("airspace_center"), "KJFK");
        assert_eq!(point.text("airspace_classification"), "B");
        assert_eq!(point.text("multiple_code"), "A");
        assert_eq!(point.integer("sequence_number"), Some(10));
        assert_eq!(point.get("level"), Some(&Value::Blank));
        assert_eq!(point.text("boundary_via"), "R");
        assert_eq!(point.decimal("latitude"), Some(40.663491666666665));
        assert_eq!(point.decimal("longitude"), Some(-74.24561944444444));
        assert_eq!(point.decimal("arc_distance"), Some(4.0));
        assert_eq!(point.decimal("arc_bearing"), Some(245.0));
        assert_eq!(point.text("lower_limit"), "GND");
        assert_eq!(point.text("lower_unit_indicator"), "A");
        assert_eq!(point.text("upper_limit"), "07000");
        assert_eq!(point.text("upper_unit_indicator"), "M");
        assert_eq!(point.text("name"), "NEW YORK AREA A");
    }

    #[test]
    fn controlled_airspace_continuation_record() {
        let record_type = classify(CONTROLLED_CONTINUATION);
        assert_eq!(
            record_type,
            RecordType::Continuation(RecordKind::ControlledAirspace)
        );

        let continuation =
            parse(2, CONTROLLED_CONTINUATION, record_type).expect("continuation should parse");
        assert_eq!(continuation.integer("sequence_number"), Some(10));
        assert_eq!(continuation.text("application_type"), "A");
        assert_eq!(continuation.text("notes"), "ACTIVE 0600-2300 LCL");
    }

    #[test]
    fn restrictive_airspace_record() {
        let point = parse(1, RESTRICTIVE, classify(RESTRICTIVE)).expect("airspace should parse");

        assert_eq!(
            point.record_type,
            RecordType::Primary(RecordKind::RestrictiveAirspace)
        );
        assert_eq!(point.text("icao_code"), "K1");
        assert_eq!(point.text("restrictive_type"), "M");
        assert_eq!(point.text("airspace_designation"), "EEL A");
        assert_eq!(point.text("continuation_record_number"), "1");
        assert_eq!(point.text("level"), "L");
        assert_eq!(point.text("boundary_via"), "H");
        assert_eq!(point.get("arc_origin_latitude"), Some(&Value::Blank));
        assert_eq!(point.text("lower_limit"), "11000");
        assert_eq!(point.text("upper_limit"), "17999");
        assert_eq!(point.text("name"), "EEL A MOA");
    }
}
