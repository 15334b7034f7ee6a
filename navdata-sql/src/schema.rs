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

//! The tables rows are written to.
//!
//! Column names are the field names of the record layouts, so most values
//! are taken from a parsed record by name. Only foreign keys and derived
//! values are filled from the assembled entity.

use arinc424::fields::Value;
#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ColumnType {
    Integer,
    Real,
    Text,
}

impl ColumnType {
    /// The SQL type name.
    pub const fn sql(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
}

impl Column {
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self { name, ty }
    }

    pub const fn integer(name: &'static str) -> Self {
        Self::new(name, ColumnType::Integer)
    }

    pub const fn real(name: &'static str) -> Self {
        Self::new(name, ColumnType::Real)
    }

    pub const fn text(name: &'static str) -> Self {
        Self::new(name, ColumnType::Text)
    }
}

/// Columns referencing the key of a parent table.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ForeignKey {
    pub columns: &'static [&'static str],
    pub table: &'static str,
    pub references: &'static [&'static str],
}

#[derive(Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [Column],
    /// Columns which are unique together.
    pub unique: &'static [&'static str],
    pub foreign_key: Option<ForeignKey>,
}

impl TableSchema {
    /// Returns the index of a column.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == column)
    }
}

/// The values of a row in column order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Row(pub Vec<Value>);

impl Row {
    /// Returns the value of a column.
    pub fn get(&self, table: &TableSchema, column: &str) -> Option<&Value> {
        table.position(column).and_then(|i| self.0.get(i))
    }
}

/// A row and the table it belongs to.
#[derive(Clone, PartialEq, Debug)]
pub struct TableRow {
    pub table: &'static TableSchema,
    pub row: Row,
}

impl TableRow {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.row.get(self.table, column)
    }
}

const fn facility_key(table: &'static str) -> Option<ForeignKey> {
    Some(ForeignKey {
        columns: &["code"],
        table,
        references: &["code"],
    })
}

const fn procedure_key(table: &'static str) -> Option<ForeignKey> {
    Some(ForeignKey {
        columns: &["code", "identifier"],
        table,
        references: &["code", "identifier"],
    })
}

/////////////////////////////////////////////////////////////////////////////
// Facilities
/////////////////////////////////////////////////////////////////////////////

pub static AIRPORT: TableSchema = TableSchema {
    name: "Airport",
    columns: &[
        Column::text("code"),
        Column::text("area_code"),
        Column::text("icao_code"),
        Column::text("iata_designator"),
        Column::text("name"),
        Column::real("latitude"),
        Column::real("longitude"),
        Column::integer("airport_elevation"),
        Column::real("magnetic_variation"),
        Column::integer("longest_runway"),
        Column::text("longest_runway_surface_code"),
        Column::text("ifr_capability"),
        Column::text("speed_limit_altitude"),
        Column::integer("speed_limit"),
        Column::text("recommended_navaid"),
        Column::integer("transition_altitude"),
        Column::integer("transition_level"),
        Column::text("public_military_indicator"),
        Column::text("time_zone"),
        Column::text("daylight_indicator"),
        Column::text("magnetic_true_indicator"),
        Column::text("datum"),
        Column::text("cycle"),
        Column::text("notes"),
    ],
    unique: &["code"],
    foreign_key: None,
};

pub static HELIPORT: TableSchema = TableSchema {
    name: "Heliport",
    columns: &[
        Column::text("code"),
        Column::text("area_code"),
        Column::text("icao_code"),
        Column::text("iata_designator"),
        Column::text("pad_identifier"),
        Column::text("name"),
        Column::real("latitude"),
        Column::real("longitude"),
        Column::integer("heliport_elevation"),
        Column::real("magnetic_variation"),
        Column::text("pad_dimensions"),
        Column::text("ifr_capability"),
        Column::text("speed_limit_altitude"),
        Column::integer("speed_limit"),
        Column::text("recommended_navaid"),
        Column::integer("transition_altitude"),
        Column::integer("transition_level"),
        Column::text("public_military_indicator"),
        Column::text("time_zone"),
        Column::text("daylight_indicator"),
        Column::text("magnetic_true_indicator"),
        Column::text("datum"),
        Column::text("cycle"),
        Column::text("notes"),
    ],
    unique: &["code"],
    foreign_key: None,
};

pub static AIRPORT_RUNWAY: TableSchema = TableSchema {
    name: "AirportRunway",
    columns: &[
        Column::text("code"),
        Column::text("runway_identifier"),
        Column::integer("runway_length"),
        Column::real("runway_magnetic_bearing"),
        Column::real("latitude"),
        Column::real("longitude"),
        Column::real("runway_gradient"),
        Column::integer("landing_threshold_elevation"),
        Column::integer("displaced_threshold"),
        Column::integer("threshold_crossing_height"),
        Column::integer("runway_width"),
        Column::text("approach_navaid"),
        Column::text("approach_navaid_class"),
        Column::integer("stopway"),
        Column::text("second_navaid"),
        Column::text("second_navaid_class"),
        Column::text("runway_description"),
        Column::text("notes"),
    ],
    unique: &["code", "runway_identifier"],
    foreign_key: facility_key("Airport"),
};

const TERMINAL_WAYPOINT_COLUMNS: &[Column] = &[
    Column::text("code"),
    Column::text("waypoint_identifier"),
    Column::text("icao_code"),
    Column::text("waypoint_type"),
    Column::text("waypoint_usage"),
    Column::real("latitude"),
    Column::real("longitude"),
    Column::real("magnetic_variation"),
    Column::text("datum"),
    Column::text("name_format_indicator"),
    Column::text("waypoint_name"),
    Column::text("notes"),
];

pub static AIRPORT_WAYPOINT: TableSchema = TableSchema {
    name: "AirportWaypoint",
    columns: TERMINAL_WAYPOINT_COLUMNS,
    unique: &[],
    foreign_key: facility_key("Airport"),
};

pub static HELIPORT_WAYPOINT: TableSchema = TableSchema {
    name: "HeliportWaypoint",
    columns: TERMINAL_WAYPOINT_COLUMNS,
    unique: &[],
    foreign_key: facility_key("Heliport"),
};

/////////////////////////////////////////////////////////////////////////////
// Navaids and Enroute
/////////////////////////////////////////////////////////////////////////////

pub static VHF_NAVAID: TableSchema = TableSchema {
    name: "VHFNavaid",
    columns: &[
        Column::text("area_code"),
        Column::text("airport_code"),
        Column::text("vor_identifier"),
        Column::text("icao_code"),
        Column::real("vor_frequency"),
        Column::text("navaid_class"),
        Column::real("latitude"),
        Column::real("longitude"),
        Column::text("dme_ident"),
        Column::real("dme_latitude"),
        Column::real("dme_longitude"),
        Column::real("station_declination"),
        Column::integer("dme_elevation"),
        Column::text("figure_of_merit"),
        Column::text("ils_dme_bias"),
        Column::integer("frequency_protection"),
        Column::text("datum"),
        Column::text("name"),
        Column::text("cycle"),
        Column::text("notes"),
    ],
    unique: &["airport_code", "vor_identifier", "icao_code"],
    foreign_key: None,
};

pub static NDB_NAVAID: TableSchema = TableSchema {
    name: "NDBNavaid",
    columns: &[
        Column::text("area_code"),
        Column::text("airport_code"),
        Column::text("ndb_identifier"),
        Column::text("icao_code"),
        Column::real("ndb_frequency"),
        Column::text("ndb_class"),
        Column::real("latitude"),
        Column::real("longitude"),
        Column::real("magnetic_variation"),
        Column::text("datum"),
        Column::text("name"),
        Column::text("cycle"),
        Column::text("notes"),
    ],
    unique: &["airport_code", "ndb_identifier", "icao_code"],
    foreign_key: None,
};

pub static ENROUTE_WAYPOINT: TableSchema = TableSchema {
    name: "EnrouteWaypoint",
    columns: &[
        Column::text("area_code"),
        Column::text("waypoint_identifier"),
        Column::text("icao_code"),
        Column::text("waypoint_type"),
        Column::text("waypoint_usage"),
        Column::real("latitude"),
        Column::real("longitude"),
        Column::real("magnetic_variation"),
        Column::text("datum"),
        Column::text("name_format_indicator"),
        Column::text("waypoint_name"),
        Column::text("cycle"),
        Column::text("notes"),
    ],
    unique: &["waypoint_identifier", "icao_code"],
    foreign_key: None,
};

pub static ENROUTE_AIRWAY: TableSchema = TableSchema {
    name: "EnrouteAirway",
    columns: &[
        Column::text("area_code"),
        Column::text("route_identifier"),
        Column::integer("sequence_number"),
        Column::text("fix_identifier"),
        Column::text("fix_icao_code"),
        Column::text("fix_section_code"),
        Column::text("fix_subsection_code"),
        Column::text("waypoint_description_code"),
        Column::text("boundary_code"),
        Column::text("route_type"),
        Column::text("level"),
        Column::text("direction_restriction"),
        Column::text("cruise_table_indicator"),
        Column::text("eu_indicator"),
        Column::text("recommended_navaid"),
        Column::text("recommended_navaid_icao_code"),
        Column::text("rnp"),
        Column::real("theta"),
        Column::real("rho"),
        Column::real("outbound_magnetic_course"),
        Column::real("route_distance_from"),
        Column::real("inbound_magnetic_course"),
        Column::text("minimum_altitude"),
        Column::text("minimum_altitude2"),
        Column::text("maximum_altitude"),
        Column::real("latitude"),
        Column::real("longitude"),
    ],
    unique: &["area_code", "route_identifier", "sequence_number"],
    foreign_key: None,
};

/////////////////////////////////////////////////////////////////////////////
// Airspace
/////////////////////////////////////////////////////////////////////////////

/// One row per boundary point.
pub static CONTROLLED_AIRSPACE: TableSchema = TableSchema {
    name: "ControlledAirspace",
    columns: &[
        Column::text("area_code"),
        Column::text("icao_code"),
        Column::text("airspace_type"),
        Column::text("airspace_center"),
        Column::text("center_section_code"),
        Column::text("center_subsection_code"),
        Column::text("airspace_classification"),
        Column::text("multiple_code"),
        Column::integer("sequence_number"),
        Column::text("level"),
        Column::text("time_code"),
        Column::text("notam"),
        Column::text("boundary_via"),
        Column::real("latitude"),
        Column::real("longitude"),
        Column::real("arc_origin_latitude"),
        Column::real("arc_origin_longitude"),
        Column::real("arc_distance"),
        Column::real("arc_bearing"),
        Column::text("rnp"),
        Column::text("lower_limit"),
        Column::text("lower_unit_indicator"),
        Column::text("upper_limit"),
        Column::text("upper_unit_indicator"),
        Column::text("name"),
        Column::text("cycle"),
        Column::text("notes"),
    ],
    unique: &[
        "icao_code",
        "airspace_type",
        "airspace_center",
        "multiple_code",
        "sequence_number",
    ],
    foreign_key: None,
};

pub static RESTRICTIVE_AIRSPACE: TableSchema = TableSchema {
    name: "RestrictiveAirspace",
    columns: &[
        Column::text("area_code"),
        Column::text("icao_code"),
        Column::text("restrictive_type"),
        Column::text("airspace_designation"),
        Column::text("multiple_code"),
        Column::integer("sequence_number"),
        Column::text("level"),
        Column::text("time_code"),
        Column::text("notam"),
        Column::text("boundary_via"),
        Column::real("latitude"),
        Column::real("longitude"),
        Column::real("arc_origin_latitude"),
        Column::real("arc_origin_longitude"),
        Column::real("arc_distance"),
        Column::real("arc_bearing"),
        Column::text("lower_limit"),
        Column::text("lower_unit_indicator"),
        Column::text("upper_limit"),
        Column::text("upper_unit_indicator"),
        Column::text("name"),
        Column::text("cycle"),
        Column::text("notes"),
    ],
    unique: &[
        "icao_code",
        "restrictive_type",
        "airspace_designation",
        "multiple_code",
        "sequence_number",
    ],
    foreign_key: None,
};

/////////////////////////////////////////////////////////////////////////////
// Procedures
/////////////////////////////////////////////////////////////////////////////

const PROCEDURE_COLUMNS: &[Column] = &[Column::text("code"), Column::text("identifier")];

const APPROACH_COLUMNS: &[Column] = &[
    Column::text("code"),
    Column::text("identifier"),
    Column::text("approach_type"),
    Column::text("approach_type_name"),
];

/// The common route has an empty transition identifier.
const TRANSITION_COLUMNS: &[Column] = &[
    Column::text("code"),
    Column::text("identifier"),
    Column::text("route_type"),
    Column::text("transition_identifier"),
];

const PROCEDURE_WAYPOINT_COLUMNS: &[Column] = &[
    Column::text("code"),
    Column::text("identifier"),
    Column::text("route_type"),
    Column::text("transition_identifier"),
    Column::integer("sequence_number"),
    Column::text("fix_identifier"),
    Column::text("fix_icao_code"),
    Column::text("fix_section_code"),
    Column::text("fix_subsection_code"),
    Column::text("waypoint_description_code"),
    Column::text("turn_direction"),
    Column::text("rnp"),
    Column::text("path_and_termination"),
    Column::text("turn_direction_valid"),
    Column::text("recommended_navaid"),
    Column::text("recommended_navaid_icao_code"),
    Column::real("arc_radius"),
    Column::real("theta"),
    Column::real("rho"),
    Column::real("magnetic_course"),
    Column::text("distance_or_time"),
    Column::text("recommended_navaid_section"),
    Column::text("recommended_navaid_subsection"),
    Column::text("altitude_description"),
    Column::text("atc_indicator"),
    Column::text("altitude"),
    Column::text("altitude2"),
    Column::integer("transition_altitude"),
    Column::integer("speed_limit"),
    Column::real("vertical_angle"),
    Column::text("center_fix"),
    Column::text("multiple_code"),
    Column::text("center_fix_icao_code"),
    Column::text("gps_fms_indicator"),
    Column::text("speed_limit_description"),
    Column::text("route_qualifier_1"),
    Column::text("route_qualifier_2"),
    Column::real("latitude"),
    Column::real("longitude"),
];

macro_rules! procedure_tables {
    ($facility:literal, $($procedure:ident, $transition:ident, $waypoint:ident, $name:literal, $columns:ident;)+) => {
        $(
            pub static $procedure: TableSchema = TableSchema {
                name: concat!($facility, $name),
                columns: $columns,
                unique: &["code", "identifier"],
                foreign_key: facility_key($facility),
            };

            pub static $transition: TableSchema = TableSchema {
                name: concat!($facility, $name, "Transition"),
                columns: TRANSITION_COLUMNS,
                unique: &["code", "identifier", "route_type", "transition_identifier"],
                foreign_key: procedure_key(concat!($facility, $name)),
            };

            pub static $waypoint: TableSchema = TableSchema {
                name: concat!($facility, $name, "Waypoint"),
                columns: PROCEDURE_WAYPOINT_COLUMNS,
                unique: &[],
                foreign_key: procedure_key(concat!($facility, $name)),
            };
        )+
    };
}

procedure_tables! {
    "Airport",
    AIRPORT_DEPARTURE, AIRPORT_DEPARTURE_TRANSITION, AIRPORT_DEPARTURE_WAYPOINT, "Departure", PROCEDURE_COLUMNS;
    AIRPORT_ARRIVAL, AIRPORT_ARRIVAL_TRANSITION, AIRPORT_ARRIVAL_WAYPOINT, "Arrival", PROCEDURE_COLUMNS;
    AIRPORT_APPROACH, AIRPORT_APPROACH_TRANSITION, AIRPORT_APPROACH_WAYPOINT, "Approach", APPROACH_COLUMNS;
}

procedure_tables! {
    "Heliport",
    HELIPORT_DEPARTURE, HELIPORT_DEPARTURE_TRANSITION, HELIPORT_DEPARTURE_WAYPOINT, "Departure", PROCEDURE_COLUMNS;
    HELIPORT_ARRIVAL, HELIPORT_ARRIVAL_TRANSITION, HELIPORT_ARRIVAL_WAYPOINT, "Arrival", PROCEDURE_COLUMNS;
    HELIPORT_APPROACH, HELIPORT_APPROACH_TRANSITION, HELIPORT_APPROACH_WAYPOINT, "Approach", APPROACH_COLUMNS;
}

/// All tables with parents before their children.
pub static TABLES: &[&TableSchema] = &[
    &AIRPORT,
    &HELIPORT,
    &AIRPORT_RUNWAY,
    &AIRPORT_WAYPOINT,
    &HELIPORT_WAYPOINT,
    &VHF_NAVAID,
    &NDB_NAVAID,
    &ENROUTE_WAYPOINT,
    &ENROUTE_AIRWAY,
    &CONTROLLED_AIRSPACE,
    &RESTRICTIVE_AIRSPACE,
    &AIRPORT_DEPARTURE,
    &AIRPORT_DEPARTURE_TRANSITION,
    &AIRPORT_DEPARTURE_WAYPOINT,
    &AIRPORT_ARRIVAL,
    &AIRPORT_ARRIVAL_TRANSITION,
    &AIRPORT_ARRIVAL_WAYPOINT,
    &AIRPORT_APPROACH,
    &AIRPORT_APPROACH_TRANSITION,
    &AIRPORT_APPROACH_WAYPOINT,
    &HELIPORT_DEPARTURE,
    &HELIPORT_DEPARTURE_TRANSITION,
    &HELIPORT_DEPARTURE_WAYPOINT,
    &HELIPORT_ARRIVAL,
    &HELIPORT_ARRIVAL_TRANSITION,
    &HELIPORT_ARRIVAL_WAYPOINT,
    &HELIPORT_APPROACH,
    &HELIPORT_APPROACH_TRANSITION,
    &HELIPORT_APPROACH_WAYPOINT,
];

/// Returns a table by its name.
pub fn table(name: &str) -> Option<&'static TableSchema> {
    TABLES.iter().find(|t| t.name == name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_are_unique() {
        let mut names: Vec<_> = TABLES.iter().map(|t| t.name).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), TABLES.len());
        assert_eq!(TABLES.len(), 29);
    }

    #[test]
    fn constraints_name_existing_columns() {
        for table in TABLES {
            for column in table.unique {
                assert!(table.position(column).is_some(), "{}.{column}", table.name);
            }

            if let Some(fk) = &table.foreign_key {
                let parent = super::table(fk.table).expect("parent table should exist");
                let index = |name: &str| TABLES.iter().position(|t| t.name == name);
                assert!(
                    index(parent.name) < index(table.name),
                    "{} before {}",
                    parent.name,
                    table.name
                );

                for (column, reference) in fk.columns.iter().zip(fk.references) {
                    assert!(table.position(column).is_some());
                    assert!(parent.position(reference).is_some());
                }
            }
        }
    }

    #[test]
    fn procedure_tables_reference_their_procedure() {
        assert_eq!(AIRPORT_APPROACH_WAYPOINT.name, "AirportApproachWaypoint");
        assert_eq!(
            AIRPORT_APPROACH_WAYPOINT.foreign_key.map(|fk| fk.table),
            Some("AirportApproach")
        );
        assert_eq!(
            HELIPORT_DEPARTURE.foreign_key.map(|fk| fk.table),
            Some("Heliport")
        );
        assert_eq!(AIRPORT_ARRIVAL_TRANSITION.name, "AirportArrivalTransition");
        assert_eq!(
            HELIPORT_APPROACH_TRANSITION.foreign_key.map(|fk| fk.table),
            Some("HeliportApproach")
        );
    }
}
