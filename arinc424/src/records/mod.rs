// SPDX-License-Identifier: Apache-2.0
// Copyright 2024 Joe Pearson
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

//! Record classification and the layout of each supported record.

use std::fmt;

use log::debug;

use crate::layout::Layout;

mod airport;
mod airspace;
mod airway;
mod heliport;
mod navaid;
mod procedure;
mod runway;
mod waypoint;

pub use airport::{AIRPORT, AIRPORT_CONTINUATION};
pub use airspace::{
    CONTROLLED_AIRSPACE, CONTROLLED_AIRSPACE_CONTINUATION, RESTRICTIVE_AIRSPACE,
    RESTRICTIVE_AIRSPACE_CONTINUATION,
};
pub use airway::{AIRWAY, AIRWAY_CONTINUATION};
pub use heliport::{HELIPORT, HELIPORT_CONTINUATION};
pub use navaid::{NDB_NAVAID, NDB_NAVAID_CONTINUATION, VHF_NAVAID, VHF_NAVAID_CONTINUATION};
pub use procedure::{PROCEDURE_LEG, PROCEDURE_LEG_CONTINUATION};
pub use runway::{RUNWAY, RUNWAY_CONTINUATION};
pub use waypoint::{WAYPOINT, WAYPOINT_CONTINUATION};

/// The facility a terminal record belongs to.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Facility {
    Airport,
    Heliport,
}

/// SID, STAR or approach procedure.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ProcedureKind {
    Departure,
    Arrival,
    Approach,
}

/// The supported record kinds.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum RecordKind {
    /// Airport reference point (section `P`, subsection `A`).
    Airport,
    /// Heliport reference point (section `H`, subsection `A`).
    Heliport,
    /// Airport runway (section `P`, subsection `G`).
    Runway,
    /// VHF navaid (section `D`, subsection blank).
    VhfNavaid,
    /// NDB navaid (section `D`, subsection `B`).
    NdbNavaid,
    /// Enroute waypoint (section `E`, subsection `A`).
    EnrouteWaypoint,
    /// Terminal waypoint of an airport or heliport (subsection `C`).
    TerminalWaypoint(Facility),
    /// Enroute airway leg (section `E`, subsection `R`).
    EnrouteAirway,
    /// Leg of a SID, STAR or approach (subsection `D`, `E` or `F`).
    ProcedureLeg(Facility, ProcedureKind),
    /// Boundary point of a controlled airspace (section `U`, subsection `C`).
    ControlledAirspace,
    /// Boundary point of a restrictive airspace (section `U`, subsection `R`).
    RestrictiveAirspace,
}

impl RecordKind {
    /// The column of the continuation record number.
    pub const fn continuation_column(&self) -> usize {
        match self {
            Self::EnrouteAirway | Self::ProcedureLeg(..) => 39,
            Self::ControlledAirspace | Self::RestrictiveAirspace => 25,
            _ => 22,
        }
    }

    /// The layout of the primary record.
    pub fn layout(&self) -> &'static Layout {
        match self {
            Self::Airport => &AIRPORT,
            Self::Heliport => &HELIPORT,
            Self::Runway => &RUNWAY,
            Self::VhfNavaid => &VHF_NAVAID,
            Self::NdbNavaid => &NDB_NAVAID,
            Self::EnrouteWaypoint | Self::TerminalWaypoint(_) => &WAYPOINT,
            Self::EnrouteAirway => &AIRWAY,
            Self::ProcedureLeg(..) => &PROCEDURE_LEG,
            Self::ControlledAirspace => &CONTROLLED_AIRSPACE,
            Self::RestrictiveAirspace => &RESTRICTIVE_AIRSPACE,
        }
    }

    /// The layout of the continuation records.
    pub fn continuation_layout(&self) -> &'static Layout {
        match self {
            Self::Airport => &AIRPORT_CONTINUATION,
            Self::Heliport => &HELIPORT_CONTINUATION,
            Self::Runway => &RUNWAY_CONTINUATION,
            Self::VhfNavaid => &VHF_NAVAID_CONTINUATION,
            Self::NdbNavaid => &NDB_NAVAID_CONTINUATION,
            Self::EnrouteWaypoint | Self::TerminalWaypoint(_) => &WAYPOINT_CONTINUATION,
            Self::EnrouteAirway => &AIRWAY_CONTINUATION,
            Self::ProcedureLeg(..) => &PROCEDURE_LEG_CONTINUATION,
            Self::ControlledAirspace => &CONTROLLED_AIRSPACE_CONTINUATION,
            Self::RestrictiveAirspace => &RESTRICTIVE_AIRSPACE_CONTINUATION,
        }
    }
}

/// The type of a record as determined by [`classify`].
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum RecordType {
    /// A primary record with continuation number `0` or `1`.
    Primary(RecordKind),
    /// A continuation record which extends the preceding primary record.
    Continuation(RecordKind),
    /// Not a supported record.
    Unknown,
}

impl RecordType {
    pub fn kind(&self) -> Option<RecordKind> {
        match self {
            Self::Primary(kind) | Self::Continuation(kind) => Some(*kind),
            Self::Unknown => None,
        }
    }

    /// The layout to parse a record of this type.
    pub fn layout(&self) -> Option<&'static Layout> {
        match self {
            Self::Primary(kind) => Some(kind.layout()),
            Self::Continuation(kind) => Some(kind.continuation_layout()),
            Self::Unknown => None,
        }
    }

    pub fn is_continuation(&self) -> bool {
        matches!(self, Self::Continuation(_))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.layout() {
            Some(layout) => write!(f, "{}", layout.name),
            None => write!(f, "Unknown"),
        }
    }
}

/// Returns the record kind of the section and subsection codes.
fn record_kind(record: &[u8]) -> Option<RecordKind> {
    let byte = |column: usize| record.get(column - 1).copied();

    let terminal = |facility: Facility| match byte(13)? {
        b'A' if facility == Facility::Airport => Some(RecordKind::Airport),
        b'A' => Some(RecordKind::Heliport),
        b'G' if facility == Facility::Airport => Some(RecordKind::Runway),
        b'C' => Some(RecordKind::TerminalWaypoint(facility)),
        b'D' => Some(RecordKind::ProcedureLeg(facility, ProcedureKind::Departure)),
        b'E' => Some(RecordKind::ProcedureLeg(facility, ProcedureKind::Arrival)),
        b'F' => Some(RecordKind::ProcedureLeg(facility, ProcedureKind::Approach)),
        _ => None,
    };

    match (byte(5)?, byte(6)?) {
        (b'P', b' ') => terminal(Facility::Airport),
        (b'H', b' ') => terminal(Facility::Heliport),
        (b'D', b' ') => Some(RecordKind::VhfNavaid),
        (b'D', b'B') => Some(RecordKind::NdbNavaid),
        (b'E', b'A') => Some(RecordKind::EnrouteWaypoint),
        (b'E', b'R') => Some(RecordKind::EnrouteAirway),
        (b'U', b'C') => Some(RecordKind::ControlledAirspace),
        (b'U', b'R') => Some(RecordKind::RestrictiveAirspace),
        _ => None,
    }
}

/// Classifies a record by its record type, section, subsection and
/// continuation record number.
///
/// Only the fixed columns of those codes are read. A record which is too
/// short to hold its continuation number is classified as primary record and
/// will fail to parse.
pub fn classify(record: &[u8]) -> RecordType {
    // Standard or tailored record type
    if !matches!(record.first(), Some(b'S' | b'T')) {
        return RecordType::Unknown;
    }

    let Some(kind) = record_kind(record) else {
        return RecordType::Unknown;
    };

    match record.get(kind.continuation_column() - 1) {
        Some(b'0' | b'1') | None => RecordType::Primary(kind),
        Some(_) => RecordType::Continuation(kind),
    }
}

/// The section and subsection code of a record as written in the record,
/// e.g. `"UF"` for a FIR or `"P/S"` for an airport MSA.
pub fn section_code(record: &[u8]) -> String {
    let code = |column: usize| record.get(column - 1).map_or(' ', |&b| b as char);

    match code(5) {
        'P' | 'H' if code(6) == ' ' => format!("{}/{}", code(5), code(13)),
        sec => format!("{sec}{}", code(6)),
    }
}

/// Iterator over the records of a file.
pub struct Records<'a> {
    lines: std::iter::Enumerate<std::slice::Split<'a, u8, fn(&u8) -> bool>>,
}

impl<'a> Records<'a> {
    /// Creates a new record iterator over the lines of a file.
    ///
    /// Blank lines and header records are skipped. Each item is the line
    /// number starting at 1, the record's type and the record's bytes
    /// without the line ending.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arinc424::records::{RecordKind, RecordType, Records};
    /// let data = b"HDR01FAACIFP18\nSUSAP KJFKK6AJFK     0\n";
    /// let mut records = Records::new(data);
    ///
    /// let (line, record_type, _) = records.next().expect("there should be an airport");
    /// assert_eq!(line, 2);
    /// assert_eq!(record_type, RecordType::Primary(RecordKind::Airport));
    /// ```
    pub fn new(data: &'a [u8]) -> Self {
        let newline: fn(&u8) -> bool = |&b| b == b'\n';
        Self {
            lines: data.split(newline).enumerate(),
        }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = (usize, RecordType, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        for (index, line) in self.lines.by_ref() {
            let line = line.strip_suffix(b"\r").unwrap_or(line);

            if line.iter().all(|b| b.is_ascii_whitespace()) {
                continue;
            }

            if line.starts_with(b"HDR") {
                debug!("skipping header record on line {}", index + 1);
                continue;
            }

            return Some((index + 1, classify(line), line));
        }

        None
    }
}
