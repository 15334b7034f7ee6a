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

/// 4.1.4 Waypoint Primary Record, enroute (EA) and terminal (PC and HC).
///
/// The region code is `ENRT` for enroute waypoints and the airport or
/// heliport of terminal waypoints.
pub static WAYPOINT: Layout = Layout {
    name: "Waypoint",
    key: &["region_code", "waypoint_identifier", "icao_code"],
    fields: &[
        FieldDef::ident("subsection_code", 6, 1),
        FieldDef::ident("region_code", 7, 4),
        FieldDef::ident("region_icao_code", 11, 2),
        FieldDef::ident("terminal_subsection_code", 13, 1),
        FieldDef::ident("waypoint_identifier", 14, 5),
        FieldDef::ident("icao_code", 20, 2),
        FieldDef::ident("continuation_record_number", 22, 1),
        FieldDef::raw("waypoint_type", 27, 3),
        FieldDef::code("waypoint_usage", 31, 1, &["B", "H", "L"]),
        FieldDef::latitude("latitude", 33),
        FieldDef::longitude("longitude", 42),
        FieldDef::mag_var("magnetic_variation", 75),
        FieldDef::ident("datum", 85, 3),
        FieldDef::ident("name_format_indicator", 96, 3),
        FieldDef::ident("waypoint_name", 99, 25),
        FieldDef::integer("file_record_number", 124, 5),
        FieldDef::ident("cycle", 129, 4),
    ],
};

pub static WAYPOINT_CONTINUATION: Layout = Layout {
    name: "Waypoint Continuation",
    key: &["region_code", "waypoint_identifier", "icao_code"],
    fields: &[
        FieldDef::ident("subsection_code", 6, 1),
        FieldDef::ident("region_code", 7, 4),
        FieldDef::ident("waypoint_identifier", 14, 5),
        FieldDef::ident("icao_code", 20, 2),
        FieldDef::ident("continuation_record_number", 22, 1),
        FieldDef::ident("application_type", 23, 1),
        FieldDef::ident("notes", 24, 69),
    ],
};

#[cfg(test)]
mod tests {
    use crate::records::{Facility, RecordKind, RecordType};
    use crate::{classify, parse};

    const ENROUTE: &[u8] = b"SUSAEAENRT   DANDD K20    C   L N39450000W104350000                       E0080     NAR           DANDD                    010012313";
    const TERMINAL: &[u8] = b"SUSAP KDENK2CCESSN K20    W     N39400000W104300000                       E0080     NAR           CESSN                    004012313";

    #[test]
    fn enroute_waypoint_record() {
        assert_eq!(
            classify(ENROUTE),
            RecordType::Primary(RecordKind::EnrouteWaypoint)
        );

        let wpt = parse(1, ENROUTE, classify(ENROUTE)).expect("waypoint should parse");
        assert_eq!(wpt.text("region_code"), "ENRT");
        assert_eq!(wpt.text("waypoint_identifier"), "DANDD");
        assert_eq!(wpt.text("icao_code"), "K2");
        assert_eq!(wpt.text("waypoint_type"), "C  ");
        assert_eq!(wpt.text("waypoint_usage"), "L");
        assert_eq!(wpt.decimal("latitude"), Some(39.75));
        assert_eq!(wpt.text("waypoint_name"), "DANDD");
    }

    #[test]
    fn terminal_waypoint_record() {
        assert_eq!(
            classify(TERMINAL),
            RecordType::Primary(RecordKind::TerminalWaypoint(Facility::Airport))
        );

        let wpt = parse(1, TERMINAL, classify(TERMINAL)).expect("waypoint should parse");
        assert_eq!(wpt.text("region_code"), "KDEN");
        assert_eq!(wpt.text("waypoint_identifier"), "CESSN");
        assert_eq!(wpt.decimal("longitude"), Some(-104.5));
        assert_eq!(wpt.decimal("magnetic_variation"), Some(8.0));
    }
}
