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

const PATH_AND_TERMINATION: &[&str] = &[
    "IF", "TF", "CF", "DF", "FA", "FC", "FD", "FM", "CA", "CD", "CI", "CR", "RF", "AF", "VA", "VD",
    "VI", "VM", "VR", "PI", "HA", "HF", "HM",
];

/// 4.1.9 SID/STAR/Approach Primary Record (PD, PE, PF and HD, HE, HF).
///
/// Each record is one leg of a procedure's transition. The common route has
/// a blank transition identifier.
pub static PROCEDURE_LEG: Layout = Layout {
    name: "Procedure Leg",
    key: &[
        "code",
        "identifier",
        "route_type",
        "transition_identifier",
        "sequence_number",
    ],
    fields: &[
        FieldDef::ident("code", 7, 4),
        FieldDef::ident("icao_code", 11, 2),
        FieldDef::ident("subsection_code", 13, 1),
        FieldDef::ident("identifier", 14, 6),
        FieldDef::ident("route_type", 20, 1),
        FieldDef::ident("transition_identifier", 21, 5),
        FieldDef::integer("sequence_number", 27, 3),
        FieldDef::ident("fix_identifier", 30, 5),
        FieldDef::ident("fix_icao_code", 35, 2),
        FieldDef::ident("fix_section_code", 37, 1),
        FieldDef::ident("fix_subsection_code", 38, 1),
        FieldDef::ident("continuation_record_number", 39, 1),
        FieldDef::raw("waypoint_description_code", 40, 4),
        FieldDef::code("turn_direction", 44, 1, &["L", "R", "E"]),
        FieldDef::ident("rnp", 45, 3),
        FieldDef::code("path_and_termination", 48, 2, PATH_AND_TERMINATION),
        FieldDef::ident("turn_direction_valid", 50, 1),
        FieldDef::ident("recommended_navaid", 51, 4),
        FieldDef::ident("recommended_navaid_icao_code", 55, 2),
        // nautical miles
        FieldDef::decimal("arc_radius", 57, 6, 3),
        FieldDef::decimal("theta", 63, 4, 1),
        FieldDef::decimal("rho", 67, 4, 1),
        FieldDef::bearing("magnetic_course", 71),
        // distance in tenths of a mile or holding time in minutes
        FieldDef::ident("distance_or_time", 75, 4),
        FieldDef::ident("recommended_navaid_section", 79, 1),
        FieldDef::ident("recommended_navaid_subsection", 80, 1),
        FieldDef::ident("altitude_description", 83, 1),
        FieldDef::ident("atc_indicator", 84, 1),
        FieldDef::ident("altitude", 85, 5),
        FieldDef::ident("altitude2", 90, 5),
        FieldDef::integer("transition_altitude", 95, 5),
        FieldDef::integer("speed_limit", 100, 3),
        FieldDef::decimal("vertical_angle", 103, 4, 2),
        FieldDef::ident("center_fix", 107, 5),
        FieldDef::ident("multiple_code", 112, 1),
        FieldDef::ident("center_fix_icao_code", 113, 2),
        FieldDef::ident("gps_fms_indicator", 117, 1),
        FieldDef::ident("speed_limit_description", 118, 1),
        FieldDef::ident("route_qualifier_1", 119, 1),
        FieldDef::ident("route_qualifier_2", 120, 1),
        FieldDef::integer("file_record_number", 124, 5),
        FieldDef::ident("cycle", 129, 4),
    ],
};

pub static PROCEDURE_LEG_CONTINUATION: Layout = Layout {
    name: "Procedure Leg Continuation",
    key: &[
        "code",
        "identifier",
        "route_type",
        "transition_identifier",
        "sequence_number",
    ],
    fields: &[
        FieldDef::ident("code", 7, 4),
        FieldDef::ident("icao_code", 11, 2),
        FieldDef::ident("subsection_code", 13, 1),
        FieldDef::ident("identifier", 14, 6),
        FieldDef::ident("route_type", 20, 1),
        FieldDef::ident("transition_identifier", 21, 5),
        FieldDef::integer("sequence_number", 27, 3),
        FieldDef::ident("fix_identifier", 30, 5),
        FieldDef::ident("fix_icao_code", 35, 2),
        FieldDef::ident("continuation_record_number", 39, 1),
        FieldDef::ident("application_type", 40, 1),
        FieldDef::ident("notes", 41, 69),
    ],
};
