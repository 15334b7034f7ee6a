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

/// 4.1.2 VHF Navaid Primary Record (D).
pub static VHF_NAVAID: Layout = Layout {
    name: "VHF Navaid",
    key: &["airport_code", "vor_identifier", "icao_code"],
    fields: &[
        FieldDef::ident("subsection_code", 6, 1),
        FieldDef::ident("airport_code", 7, 4),
        FieldDef::ident("airport_icao_code", 11, 2),
        FieldDef::ident("vor_identifier", 14, 4),
        FieldDef::ident("icao_code", 20, 2),
        FieldDef::ident("continuation_record_number", 22, 1),
        // MHz
        FieldDef::decimal("vor_frequency", 23, 5, 2),
        FieldDef::raw("navaid_class", 28, 5),
        FieldDef::latitude("latitude", 33),
        FieldDef::longitude("longitude", 42),
        FieldDef::ident("dme_ident", 52, 4),
        FieldDef::latitude("dme_latitude", 56),
        FieldDef::longitude("dme_longitude", 65),
        FieldDef::mag_var("station_declination", 75),
        FieldDef::integer("dme_elevation", 80, 5),
        FieldDef::ident("figure_of_merit", 85, 1),
        FieldDef::ident("ils_dme_bias", 86, 2),
        FieldDef::integer("frequency_protection", 88, 3),
        FieldDef::ident("datum", 91, 3),
        FieldDef::ident("name", 94, 30),
        FieldDef::integer("file_record_number", 124, 5),
        FieldDef::ident("cycle", 129, 4),
    ],
};

/// 4.1.3 NDB Navaid Primary Record (DB).
pub static NDB_NAVAID: Layout = Layout {
    name: "NDB Navaid",
    key: &["airport_code", "ndb_identifier", "icao_code"],
    fields: &[
        FieldDef::ident("subsection_code", 6, 1),
        FieldDef::ident("airport_code", 7, 4),
        FieldDef::ident("airport_icao_code", 11, 2),
        FieldDef::ident("ndb_identifier", 14, 4),
        FieldDef::ident("icao_code", 20, 2),
        FieldDef::ident("continuation_record_number", 22, 1),
        // kHz
        FieldDef::decimal("ndb_frequency", 23, 5, 1),
        FieldDef::raw("ndb_class", 28, 5),
        FieldDef::latitude("latitude", 33),
        FieldDef::longitude("longitude", 42),
        FieldDef::mag_var("magnetic_variation", 75),
        FieldDef::ident("datum", 91, 3),
        FieldDef::ident("name", 94, 30),
        FieldDef::integer("file_record_number", 124, 5),
        FieldDef::ident("cycle", 129, 4),
    ],
};

pub static VHF_NAVAID_CONTINUATION: Layout = Layout {
    name: "VHF Navaid Continuation",
    key: &["airport_code", "vor_identifier", "icao_code"],
    fields: &[
        FieldDef::ident("subsection_code", 6, 1),
        FieldDef::ident("airport_code", 7, 4),
        FieldDef::ident("vor_identifier", 14, 4),
        FieldDef::ident("icao_code", 20, 2),
        FieldDef::ident("continuation_record_number", 22, 1),
        FieldDef::ident("application_type", 23, 1),
        FieldDef::ident("notes", 24, 69),
    ],
};

pub static NDB_NAVAID_CONTINUATION: Layout = Layout {
    name: "NDB Navaid Continuation",
    key: &["airport_code", "ndb_identifier", "icao_code"],
    fields: &[
        FieldDef::ident("subsection_code", 6, 1),
        FieldDef::ident("airport_code", 7, 4),
        FieldDef::ident("ndb_identifier", 14, 4),
        FieldDef::ident("icao_code", 20, 2),
        FieldDef::ident("continuation_record_number", 22, 1),
        FieldDef::ident("application_type", 23, 1),
        FieldDef::ident("notes", 24, 69),
    ],
};
