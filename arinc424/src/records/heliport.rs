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

/// 4.2.1 Heliport Primary Record (HA).
pub static HELIPORT: Layout = Layout {
    name: "Heliport",
    key: &["code", "icao_code"],
    fields: &[
        FieldDef::ident("code", 7, 4),
        FieldDef::ident("icao_code", 11, 2),
        FieldDef::ident("subsection_code", 13, 1),
        FieldDef::ident("iata_designator", 14, 3),
        FieldDef::ident("pad_identifier", 17, 5),
        FieldDef::ident("continuation_record_number", 22, 1),
        FieldDef::ident("speed_limit_altitude", 23, 5),
        FieldDef::ident("datum", 28, 3),
        FieldDef::code("ifr_capability", 31, 1, &["Y", "N"]),
        FieldDef::latitude("latitude", 33),
        FieldDef::longitude("longitude", 42),
        FieldDef::mag_var("magnetic_variation", 52),
        FieldDef::integer("heliport_elevation", 57, 5),
        FieldDef::integer("speed_limit", 62, 3),
        FieldDef::ident("recommended_navaid", 65, 4),
        FieldDef::integer("transition_altitude", 71, 5),
        FieldDef::integer("transition_level", 76, 5),
        FieldDef::code("public_military_indicator", 81, 1, &["C", "M", "P", "J"]),
        FieldDef::ident("time_zone", 82, 3),
        FieldDef::ident("daylight_indicator", 85, 1),
        FieldDef::ident("pad_dimensions", 86, 6),
        FieldDef::ident("magnetic_true_indicator", 92, 1),
        FieldDef::ident("name", 94, 30),
        FieldDef::integer("file_record_number", 124, 5),
        FieldDef::ident("cycle", 129, 4),
    ],
};

pub static HELIPORT_CONTINUATION: Layout = Layout {
    name: "Heliport Continuation",
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
    use crate::records::{RecordKind, RecordType};
    use crate::{classify, parse};

    const HELIPORT: &[u8] = b"SUSAH 00COK2A   H1   0     NARN N39443000W104590000E008005280                   PU07 040040M ST ANTHONY HOSP               012012313";
    const HELIPORT_CONTINUATION: &[u8] = b"SUSAH 00COK2A        2AROOFTOP                                                                                             012022313";

    #[test]
    fn heliport_record() {
        assert_eq!(
            classify(HELIPORT),
            RecordType::Primary(RecordKind::Heliport)
        );

        let heli = parse(1, HELIPORT, classify(HELIPORT)).expect("heliport should parse");
        assert_eq!(heli.text("code"), "00CO");
        assert_eq!(heli.text("pad_identifier"), "H1");
        assert_eq!(heli.text("datum"), "NAR");
        assert_eq!(heli.integer("heliport_elevation"), Some(5280));
        assert_eq!(heli.text("pad_dimensions"), "040040");
        assert_eq!(heli.decimal("magnetic_variation"), Some(8.0));
        assert_eq!(heli.text("name"), "ST ANTHONY HOSP");
    }

    #[test]
    fn heliport_continuation() {
        let cont = parse(2, HELIPORT_CONTINUATION, classify(HELIPORT_CONTINUATION))
            .expect("continuation should parse");
        assert!(cont.record_type.is_continuation());
        assert_eq!(cont.text("notes"), "ROOFTOP");
    }
}
