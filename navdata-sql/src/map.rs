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

//! Maps assembled entities to table rows.

use arinc424::fields::Value;
use arinc424::records::{Facility, ProcedureKind};
use arinc424::{ParsedLine, RecordKind};

use crate::assemble::{Body, Entity, Key, Leg, Procedure};
use crate::schema::{self, Row, TableRow, TableSchema};

/// Returns the rows of an entity.
///
/// Parents precede their children and children are in the order they were
/// assembled. Foreign keys are taken from the entity's key.
pub fn map(entity: &Entity) -> Vec<TableRow> {
    let mut rows = Vec::new();

    match (&entity.key, &entity.body) {
        (Key::Facility { facility, code }, Body::Aerodrome(aerodrome)) => {
            let code = Value::Text(code.clone());
            let (table, waypoint_table) = match facility {
                Facility::Airport => (&schema::AIRPORT, &schema::AIRPORT_WAYPOINT),
                Facility::Heliport => (&schema::HELIPORT, &schema::HELIPORT_WAYPOINT),
            };

            if let (Some(primary), false) = (&aerodrome.primary, aerodrome.repeated) {
                rows.push(row(table, primary, &[("code", code.clone())]));
            }

            rows.extend(
                aerodrome
                    .runways
                    .iter()
                    .map(|rwy| row(&schema::AIRPORT_RUNWAY, rwy, &[("code", code.clone())])),
            );
            rows.extend(
                aerodrome
                    .waypoints
                    .iter()
                    .map(|wpt| row(waypoint_table, wpt, &[("code", code.clone())])),
            );

            for procedure in &aerodrome.procedures {
                map_procedure(&mut rows, *facility, &code, procedure);
            }
        }

        (Key::Navaid { kind, .. }, Body::Fix(Some(primary))) => {
            let table = match kind {
                RecordKind::NdbNavaid => &schema::NDB_NAVAID,
                _ => &schema::VHF_NAVAID,
            };
            rows.push(row(table, primary, &[]));
        }

        (Key::Waypoint { .. }, Body::Fix(Some(primary))) => {
            rows.push(row(&schema::ENROUTE_WAYPOINT, primary, &[]));
        }

        (
            Key::Airway {
                area_code,
                route_identifier,
            },
            Body::Airway(legs),
        ) => {
            for leg in legs {
                let mut values = vec![
                    ("area_code", Value::from(area_code.as_str())),
                    ("route_identifier", Value::from(route_identifier.as_str())),
                ];
                values.extend(position(leg));
                rows.push(row(&schema::ENROUTE_AIRWAY, &leg.line, &values));
            }
        }

        (Key::Airspace { kind, .. }, Body::Airspace(points)) => {
            let table = match kind {
                RecordKind::RestrictiveAirspace => &schema::RESTRICTIVE_AIRSPACE,
                _ => &schema::CONTROLLED_AIRSPACE,
            };
            rows.extend(points.iter().map(|point| row(table, point, &[])));
        }

        _ => {}
    }

    rows
}

fn map_procedure(rows: &mut Vec<TableRow>, facility: Facility, code: &Value, procedure: &Procedure) {
    // there is no procedure record, its row is derived from the first leg
    let Some(first) = procedure.legs.first() else {
        return;
    };

    let (table, transition_table, waypoint_table) = procedure_tables(facility, procedure.kind);
    let identifier = Value::Text(procedure.identifier.clone());

    let mut values = vec![("code", code.clone()), ("identifier", identifier.clone())];
    if procedure.kind == ProcedureKind::Approach {
        let approach_type = procedure.identifier.get(..1).unwrap_or_default();
        let name = approach_type.chars().next().and_then(approach_type_name);

        values.push(("approach_type", Value::from(approach_type)));
        values.push(("approach_type_name", Value::from(name.unwrap_or_default())));
    }
    rows.push(row(table, &first.line, &values));

    // one row per transition in the order of their first leg
    let mut transitions: Vec<(&str, &str)> = Vec::new();
    for leg in &procedure.legs {
        let transition = (
            leg.line.text("route_type"),
            leg.line.text("transition_identifier"),
        );
        if transitions.contains(&transition) {
            continue;
        }

        transitions.push(transition);
        rows.push(row(
            transition_table,
            &leg.line,
            &[
                ("code", code.clone()),
                ("identifier", identifier.clone()),
                ("transition_identifier", Value::Text(transition.1.to_owned())),
            ],
        ));
    }

    for leg in &procedure.legs {
        let mut values = vec![
            ("code", code.clone()),
            ("identifier", identifier.clone()),
            // the common route has an empty transition
            (
                "transition_identifier",
                Value::Text(leg.line.text("transition_identifier").to_owned()),
            ),
        ];
        values.extend(position(leg));
        rows.push(row(waypoint_table, &leg.line, &values));
    }
}

fn position(leg: &Leg) -> [(&'static str, Value); 2] {
    [
        ("latitude", Value::from(leg.position.map(|(lat, _)| lat))),
        ("longitude", Value::from(leg.position.map(|(_, lon)| lon))),
    ]
}

type ProcedureTables = (
    &'static TableSchema,
    &'static TableSchema,
    &'static TableSchema,
);

/// The procedure, transition and waypoint table.
fn procedure_tables(facility: Facility, kind: ProcedureKind) -> ProcedureTables {
    match (facility, kind) {
        (Facility::Airport, ProcedureKind::Departure) => (
            &schema::AIRPORT_DEPARTURE,
            &schema::AIRPORT_DEPARTURE_TRANSITION,
            &schema::AIRPORT_DEPARTURE_WAYPOINT,
        ),
        (Facility::Airport, ProcedureKind::Arrival) => (
            &schema::AIRPORT_ARRIVAL,
            &schema::AIRPORT_ARRIVAL_TRANSITION,
            &schema::AIRPORT_ARRIVAL_WAYPOINT,
        ),
        (Facility::Airport, ProcedureKind::Approach) => (
            &schema::AIRPORT_APPROACH,
            &schema::AIRPORT_APPROACH_TRANSITION,
            &schema::AIRPORT_APPROACH_WAYPOINT,
        ),
        (Facility::Heliport, ProcedureKind::Departure) => (
            &schema::HELIPORT_DEPARTURE,
            &schema::HELIPORT_DEPARTURE_TRANSITION,
            &schema::HELIPORT_DEPARTURE_WAYPOINT,
        ),
        (Facility::Heliport, ProcedureKind::Arrival) => (
            &schema::HELIPORT_ARRIVAL,
            &schema::HELIPORT_ARRIVAL_TRANSITION,
            &schema::HELIPORT_ARRIVAL_WAYPOINT,
        ),
        (Facility::Heliport, ProcedureKind::Approach) => (
            &schema::HELIPORT_APPROACH,
            &schema::HELIPORT_APPROACH_TRANSITION,
            &schema::HELIPORT_APPROACH_WAYPOINT,
        ),
    }
}

/// Returns the name of an approach type.
///
/// The type is the first character of an approach identifier, e.g. `I` of
/// `I16R`.
pub fn approach_type_name(approach_type: char) -> Option<&'static str> {
    let name = match approach_type {
        'B' => "LOC/DME BC",
        'D' => "VOR/DME",
        'G' | 'P' => "GPS",
        'H' => "RNP",
        'I' => "ILS",
        'L' => "LOC",
        'N' => "NDB",
        'Q' => "NDB/DME",
        'R' => "RNAV",
        'S' => "VOR using VOR/DME",
        'U' => "SDF",
        'V' => "VOR",
        'X' => "LDA",
        _ => return None,
    };

    Some(name)
}

/// Fills a row's columns with the fields of the same name.
///
/// Values are taken from `overrides` first. Columns without a value are
/// blank.
fn row(table: &'static TableSchema, line: &ParsedLine, overrides: &[(&str, Value)]) -> TableRow {
    let values = table
        .columns
        .iter()
        .map(|column| {
            overrides
                .iter()
                .find_map(|(name, value)| (*name == column.name).then(|| value.clone()))
                .or_else(|| line.get(column.name).cloned())
                .unwrap_or_default()
        })
        .collect();

    TableRow {
        table,
        row: Row(values),
    }
}
