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

/// 4.1.10 Runway Primary Record (PG).
pub static RUNWAY: Layout = Layout {
    name: "Runway",
    key: &["code", "icao_code", "runway_identifier"],
    fields: &[
        FieldDef::ident("code", 7, 4),
        FieldDef::ident("icao_code", 11, 2),
        FieldDef::ident("subsection_code", 13, 1),
        FieldDef::ident("runway_identifier", 14, 5),
        FieldDef::ident("continuation_record_number", 22, 1),
        FieldDef::integer("runway_length", 23, 5),
        FieldDef::bearing("runway_magnetic_bearing", 28),
        FieldDef::latitude("latitude", 33),
        FieldDef::longitude("longitude", 42),
        FieldDef::decimal("runway_gradient", 52, 6, 3),
        FieldDef::integer("landing_threshold_elevation", 67, 5),
        FieldDef::integer("displaced_threshold", 72, 4),
        FieldDef::integer("threshold_crossing_height", 76, 2),
        FieldDef::integer("runway_width", 78, 3),
        FieldDef::ident("approach_navaid", 82, 4),
        FieldDef::ident("approach_navaid_class", 86, 1),
        FieldDef::integer("stopway", 87, 4),
        FieldDef::ident("second_navaid", 91, 4),
        FieldDef::ident("second_navaid_class", 95, 1),
        FieldDef::ident("runway_description", 102, 22),
        FieldDef::integer("file_record_number", 124, 5),
        FieldDef::ident("cycle", 129, 4),
    ],
};

pub static RUNWAY_CONTINUATION: Layout = Layout {
    name: "Runway Continuation",
    key: &["code", "icao_code", "runway_identifier"],
    fields: &[
        FieldDef::ident("code", 7, 4),
        FieldDef::ident("icao_code", 11, 2),
        FieldDef::ident("subsection_code", 13, 1),
        FieldDef::ident("runway_identifier", 14, 5),
        FieldDef::ident("continuation_record_number", 22, 1),
        FieldDef::ident("application_type", 23, 1),
        FieldDef::ident("notes", 24, 69),
    ],
};
