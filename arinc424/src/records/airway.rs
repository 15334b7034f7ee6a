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

/// 4.1.6 Enroute Airways Primary Record (ER), one record per leg.
pub static AIRWAY: Layout = Layout {
    name: "Enroute Airway",
    key: &["route_identifier", "sequence_number", "fix_identifier"],
    fields: &[
        FieldDef::ident("subsection_code", 6, 1),
        FieldDef::ident("route_identifier", 14, 5),
        FieldDef::integer("sequence_number", 26, 4),
        FieldDef::ident("fix_identifier", 30, 5),
        FieldDef::ident("fix_icao_code", 35, 2),
        FieldDef::ident("fix_section_code", 37, 1),
        FieldDef::ident("fix_subsection_code", 38, 1),
        FieldDef::ident("continuation_record_number", 39, 1),
        FieldDef::raw("waypoint_description_code", 40, 4),
        FieldDef::ident("boundary_code", 44, 1),
        FieldDef::ident("route_type", 45, 1),
        FieldDef::code("level", 46, 1, &["B", "H", "L"]),
        FieldDef::ident("direction_restriction", 47, 1),
        FieldDef::ident("cruise_table_indicator", 48, 2),
        FieldDef::ident("eu_indicator", 50, 1),
        FieldDef::ident("recommended_navaid", 51, 4),
        FieldDef::ident("recommended_navaid_icao_code", 55, 2),
        FieldDef::ident("rnp", 57, 3),
        FieldDef::decimal("theta", 63, 4, 1),
        FieldDef::decimal("rho", 67, 4, 1),
        FieldDef::bearing("outbound_magnetic_course", 71),
        FieldDef::decimal("route_distance_from", 75, 4, 1),
        FieldDef::bearing("inbound_magnetic_course", 79),
        FieldDef::ident("minimum_altitude", 84, 5),
        FieldDef::ident("minimum_altitude2", 89, 5),
        FieldDef::ident("maximum_altitude", 94, 5),
        FieldDef::integer("file_record_number", 124, 5),
        FieldDef::ident("cycle", 129, 4),
    ],
};

pub static AIRWAY_CONTINUATION: Layout = Layout {
    name: "Enroute Airway Continuation",
    key: &["route_identifier", "sequence_number", "fix_identifier"],
    fields: &[
        FieldDef::ident("subsection_code", 6, 1),
        FieldDef::ident("route_identifier", 14, 5),
        FieldDef::integer("sequence_number", 26, 4),
        FieldDef::ident("fix_identifier", 30, 5),
        FieldDef::ident("fix_icao_code", 35, 2),
        FieldDef::ident("continuation_record_number", 39, 1),
        FieldDef::ident("application_type", 40, 1),
        FieldDef::ident("notes", 41, 69),
    ],
};

#[cfg(test)]
mod tests {
    use crate::fields::Value;
    use crate::{classify, parse};

    const AIRWAY: &[u8] = b"SUSAER       V4          0010DEN  K2D 0     OL                        085001202650 11000                                   011012313";

    #[test]
    fn airway_record() {
        let leg = parse(1, AIRWAY, classify(AIRWAY)).expect("airway should parse");

        assert_eq!(leg.text("route_identifier"), "V4");
        assert_eq!(leg.integer("sequence_number"), Some(10));
        assert_eq!(leg.text("fix_identifier"), "DEN");
        assert_eq!(leg.text("fix_section_code"), "D");
        assert_eq!(leg.get("fix_subsection_code"), Some(&Value::Blank));
        assert_eq!(leg.text("route_type"), "O");
        assert_eq!(leg.text("level"), "L");
        assert_eq!(leg.decimal("outbound_magnetic_course"), Some(85.0));
        assert_eq!(leg.decimal("route_distance_from"), Some(12.0));
        assert_eq!(leg.decimal("inbound_magnetic_course"), Some(265.0));
        assert_eq!(leg.text("minimum_altitude"), "11000");
    }
}
