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

/// 4.1.7 Airport Primary Record (PA).
pub static AIRPORT: Layout = Layout {
    name: "Airport",
    key: &["code", "icao_code"],
    fields: &[
        FieldDef::ident("code", 7, 4),
        FieldDef::ident("icao_code", 11, 2),
        FieldDef::ident("subsection_code", 13, 1),
        FieldDef::ident("iata_designator", 14, 3),
        FieldDef::ident("continuation_record_number", 22, 1),
        FieldDef::ident("speed_limit_altitude", 23, 5),
        // hundreds of feet
        FieldDef::integer("longest_runway", 28, 3),
        FieldDef::code("ifr_capability", 31, 1, &["Y", "N"]),
        FieldDef::code("longest_runway_surface_code", 32, 1, &["H", "S", "W", "U"]),
        FieldDef::latitude("latitude", 33),
        FieldDef::longitude("longitude", 42),
        FieldDef::mag_var("magnetic_variation", 52),
        FieldDef::integer("airport_elevation", 57, 5),
        FieldDef::integer("speed_limit", 62, 3),
        FieldDef::ident("recommended_navaid", 65, 4),
        FieldDef::integer("transition_altitude", 71, 5),
        FieldDef::integer("transition_level", 76, 5),
        FieldDef::code("public_military_indicator", 81, 1, &["C", "M", "P", "J"]),
        FieldDef::ident("time_zone", 82, 3),
        FieldDef::ident("daylight_indicator", 85, 1),
        FieldDef::ident("magnetic_true_indicator", 86, 1),
        FieldDef::ident("datum", 87, 3),
        FieldDef::ident("name", 94, 30),
        FieldDef::integer("file_record_number", 124, 5),
        FieldDef::ident("cycle", 129, 4),
    ],
};

/// 4.1.7 Airport Continuation Record with notes.
pub static AIRPORT_CONTINUATION: Layout = Layout {
    name: "Airport Continuation",
    key: &["code", "icao_code"],
    fields: &[
        FieldDef::ident("code", 7, 4),
        FieldDef::ident("icao_code", 11, 2),
        FieldDef::ident("subsection_code", 13, 1),
        FieldDef::ident("continuation_record_number", 22, 1),
        FieldDef::ident("application_type", 23, 1),
        FieldDef::ident("notes", 24, 69),
    ],
};

#[cfg(test)]
mod tests {
    use crate::fields::Value;
    use crate::{classify, parse};

    const AIRPORT: &[u8] = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";
    const SMALL_AIRPORT: &[u8] = b"SUSAP 00AAK3A        0     025NSN38420200W101282600E008003435                   P    MNAR    AERO B RANCH                  001012313";

    #[test]
    fn airport_record() {
        let arpt = parse(1, AIRPORT, classify(AIRPORT)).expect("airport should parse");

        assert_eq!(arpt.text("code"), "KJFK");
        assert_eq!(arpt.text("icao_code"), "K6");
        assert_eq!(arpt.text("iata_designator"), "JFK");
        assert_eq!(arpt.integer("longest_runway"), Some(145));
        assert_eq!(arpt.text("ifr_capability"), "Y");
        assert_eq!(arpt.text("longest_runway_surface_code"), "H");
        assert_eq!(arpt.decimal("latitude"), Some(40.63992777777778));
        assert_eq!(arpt.decimal("longitude"), Some(-73.77869166666666));
        assert_eq!(arpt.decimal("magnetic_variation"), Some(-13.0));
        assert_eq!(arpt.integer("airport_elevation"), Some(13));
        assert_eq!(arpt.integer("transition_altitude"), Some(18000));
        assert_eq!(arpt.text("public_military_indicator"), "C");
        assert_eq!(arpt.text("datum"), "NAR");
        assert_eq!(arpt.text("name"), "JOHN F KENNEDY INTL");
        assert_eq!(arpt.integer("file_record_number"), Some(30067));
        assert_eq!(arpt.text("cycle"), "1912");
    }

    #[test]
    fn blank_fields_are_blank() {
        let arpt = parse(1, SMALL_AIRPORT, classify(SMALL_AIRPORT)).expect("airport should parse");

        assert_eq!(arpt.get("iata_designator"), Some(&Value::Blank));
        assert_eq!(arpt.get("speed_limit"), Some(&Value::Blank));
        assert_eq!(arpt.get("transition_level"), Some(&Value::Blank));

        let lat = arpt.decimal("latitude").expect("latitude should be set");
        let lon = arpt.decimal("longitude").expect("longitude should be set");
        assert!((lat - 38.7006).abs() < 1e-4);
        assert!((lon + 101.4739).abs() < 1e-4);
    }
}
