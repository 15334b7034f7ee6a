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

//! Groups parsed records into entities.
//!
//! Records of one entity are contiguous in a file. The [`Assembler`]
//! accumulates records as long as their [`Key`] doesn't change and completes
//! the entity when the key changes or the input ends. Continuation records
//! are merged into the record they continue.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use arinc424::records::{Facility, ProcedureKind};
use arinc424::{ParsedLine, RecordKind};
use log::debug;

use crate::Error;

/// The key of an entity.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    /// An airport or heliport with all its runways, terminal waypoints and
    /// procedures.
    Facility { facility: Facility, code: String },
    Navaid {
        kind: RecordKind,
        airport_code: String,
        icao_code: String,
        identifier: String,
    },
    Waypoint {
        region_code: String,
        icao_code: String,
        identifier: String,
    },
    Airway {
        area_code: String,
        route_identifier: String,
    },
    /// A controlled or restrictive airspace. The designation is the center
    /// of a controlled airspace.
    Airspace {
        kind: RecordKind,
        icao_code: String,
        airspace_type: String,
        designation: String,
        multiple_code: String,
    },
}

impl Key {
    /// Returns the key of the entity a record belongs to or `None` if the
    /// record is of unknown type.
    pub fn of(line: &ParsedLine) -> Option<Self> {
        let text = |name: &str| line.text(name).to_owned();

        let key = match line.record_type.kind()? {
            RecordKind::Airport | RecordKind::Runway => Self::Facility {
                facility: Facility::Airport,
                code: text("code"),
            },
            RecordKind::Heliport => Self::Facility {
                facility: Facility::Heliport,
                code: text("code"),
            },
            RecordKind::TerminalWaypoint(facility) => Self::Facility {
                facility,
                code: text("region_code"),
            },
            RecordKind::ProcedureLeg(facility, _) => Self::Facility {
                facility,
                code: text("code"),
            },
            kind @ RecordKind::VhfNavaid => Self::Navaid {
                kind,
                airport_code: text("airport_code"),
                icao_code: text("icao_code"),
                identifier: text("vor_identifier"),
            },
            kind @ RecordKind::NdbNavaid => Self::Navaid {
                kind,
                airport_code: text("airport_code"),
                icao_code: text("icao_code"),
                identifier: text("ndb_identifier"),
            },
            RecordKind::EnrouteWaypoint => Self::Waypoint {
                region_code: text("region_code"),
                icao_code: text("icao_code"),
                identifier: text("waypoint_identifier"),
            },
            RecordKind::EnrouteAirway => Self::Airway {
                area_code: text("area_code"),
                route_identifier: text("route_identifier"),
            },
            kind @ RecordKind::ControlledAirspace => Self::Airspace {
                kind,
                icao_code: text("icao_code"),
                airspace_type: text("airspace_type"),
                designation: text("airspace_center"),
                multiple_code: text("multiple_code"),
            },
            kind @ RecordKind::RestrictiveAirspace => Self::Airspace {
                kind,
                icao_code: text("icao_code"),
                airspace_type: text("restrictive_type"),
                designation: text("airspace_designation"),
                multiple_code: text("multiple_code"),
            },
        };

        Some(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Facility {
                facility: Facility::Airport,
                code,
            } => write!(f, "airport {code}"),
            Self::Facility {
                facility: Facility::Heliport,
                code,
            } => write!(f, "heliport {code}"),
            Self::Navaid {
                kind: RecordKind::NdbNavaid,
                icao_code,
                identifier,
                ..
            } => write!(f, "NDB {identifier} ({icao_code})"),
            Self::Navaid {
                icao_code,
                identifier,
                ..
            } => write!(f, "VHF navaid {identifier} ({icao_code})"),
            Self::Waypoint {
                icao_code,
                identifier,
                ..
            } => write!(f, "waypoint {identifier} ({icao_code})"),
            Self::Airway {
                route_identifier, ..
            } => write!(f, "airway {route_identifier}"),
            Self::Airspace {
                kind: RecordKind::RestrictiveAirspace,
                designation,
                multiple_code,
                ..
            } => write!(f, "restrictive airspace {designation} ({multiple_code})"),
            Self::Airspace {
                designation,
                multiple_code,
                ..
            } => write!(f, "controlled airspace {designation} ({multiple_code})"),
        }
    }
}

/// A leg of a procedure or airway.
#[derive(Clone, PartialEq, Debug)]
pub struct Leg {
    pub line: ParsedLine,
    /// Latitude and longitude of the leg's fix if the fix is known.
    pub position: Option<(f64, f64)>,
}

impl Leg {
    fn new(line: ParsedLine) -> Self {
        Self {
            line,
            position: None,
        }
    }

    fn sequence_number(&self) -> Option<i64> {
        self.line.integer("sequence_number")
    }

    fn fix(&self) -> Option<FixRef> {
        let identifier = self.line.text("fix_identifier");
        if identifier.is_empty() {
            return None;
        }

        Some(FixRef {
            section: format!(
                "{}{}",
                self.line.text("fix_section_code"),
                self.line.text("fix_subsection_code")
            ),
            icao_code: self.line.text("fix_icao_code").to_owned(),
            identifier: identifier.to_owned(),
        })
    }
}

/// A SID, STAR or approach with its legs of all transitions.
#[derive(Clone, PartialEq, Debug)]
pub struct Procedure {
    pub kind: ProcedureKind,
    /// The identifier as found in the first leg.
    pub identifier: String,
    pub legs: Vec<Leg>,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct Aerodrome {
    pub primary: Option<ParsedLine>,
    pub runways: Vec<ParsedLine>,
    pub waypoints: Vec<ParsedLine>,
    pub procedures: Vec<Procedure>,
    /// The facility's group was completed before and this is a second group
    /// of the same facility.
    pub repeated: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub enum Body {
    Aerodrome(Aerodrome),
    /// A navaid or enroute waypoint.
    Fix(Option<ParsedLine>),
    Airway(Vec<Leg>),
    /// The boundary points of an airspace.
    Airspace(Vec<ParsedLine>),
}

/// An assembled entity.
#[derive(Clone, PartialEq, Debug)]
pub struct Entity {
    pub key: Key,
    pub body: Body,
    /// At least one record of this entity was rejected.
    pub incomplete: bool,
}

impl Entity {
    /// Returns what's missing if the entity lacks a required field.
    ///
    /// Facilities, navaids and waypoints require a primary record with
    /// latitude and longitude. A repeated facility doesn't, as its primary
    /// record was part of the first group.
    pub fn missing_required(&self) -> Option<&'static str> {
        let primary = match &self.body {
            Body::Aerodrome(aerodrome) if aerodrome.repeated => return None,
            Body::Aerodrome(aerodrome) => aerodrome.primary.as_ref(),
            Body::Fix(primary) => primary.as_ref(),
            Body::Airway(_) | Body::Airspace(_) => return None,
        };

        match primary {
            None => Some("primary record"),
            Some(line) if position(line).is_none() => Some("latitude and longitude"),
            Some(_) => None,
        }
    }

    /// Counts the legs whose fix couldn't be found.
    pub fn unresolved_fixes(&self) -> usize {
        fn unresolved(legs: &[Leg]) -> usize {
            legs.iter()
                .filter(|leg| leg.position.is_none() && leg.fix().is_some())
                .count()
        }

        match &self.body {
            Body::Aerodrome(aerodrome) => aerodrome
                .procedures
                .iter()
                .map(|procedure| unresolved(&procedure.legs))
                .sum(),
            Body::Airway(legs) => unresolved(legs),
            Body::Fix(_) | Body::Airspace(_) => 0,
        }
    }

    pub fn is_repeated(&self) -> bool {
        matches!(&self.body, Body::Aerodrome(aerodrome) if aerodrome.repeated)
    }
}

/// A reference to a fix by section code, ICAO code and identifier.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
struct FixRef {
    section: String,
    icao_code: String,
    identifier: String,
}

impl FixRef {
    /// The reference of a record which can be referenced as fix.
    fn of(line: &ParsedLine) -> Option<Self> {
        let (section, identifier) = match line.record_type.kind()? {
            RecordKind::VhfNavaid => ("D", "vor_identifier"),
            RecordKind::NdbNavaid => ("DB", "ndb_identifier"),
            RecordKind::EnrouteWaypoint => ("EA", "waypoint_identifier"),
            RecordKind::TerminalWaypoint(Facility::Airport) => ("PC", "waypoint_identifier"),
            RecordKind::TerminalWaypoint(Facility::Heliport) => ("HC", "waypoint_identifier"),
            RecordKind::Runway => ("PG", "runway_identifier"),
            _ => return None,
        };

        Some(Self {
            section: section.to_owned(),
            icao_code: line.text("icao_code").to_owned(),
            identifier: line.text(identifier).to_owned(),
        })
    }
}

fn position(line: &ParsedLine) -> Option<(f64, f64)> {
    Some((line.decimal("latitude")?, line.decimal("longitude")?))
}

/// Returns `true` if the continuation continues the record.
fn continues(record: &ParsedLine, continuation: &ParsedLine) -> bool {
    record.record_type.kind() == continuation.record_type.kind()
        && continuation.record_type.layout().is_some_and(|layout| {
            layout
                .key
                .iter()
                .all(|name| record.get(name) == continuation.get(name))
        })
}

/// The record a continuation is merged into.
#[derive(Clone, Copy, Debug)]
enum Slot {
    Primary,
    Runway(usize),
    Waypoint(usize),
    /// The leg of a procedure or of an airway, which has a single "procedure".
    Leg(usize, usize),
    Boundary(usize),
}

/// The entity being accumulated.
struct Current {
    entity: Entity,
    last: Option<Slot>,
}

impl Current {
    fn new(entity: Entity) -> Self {
        Self { entity, last: None }
    }

    fn absorb(&mut self, line: ParsedLine) -> Result<(), Error> {
        if line.record_type.is_continuation() {
            return self.merge(line);
        }

        let line_number = line.line_number;

        match (&mut self.entity.body, line.record_type.kind()) {
            (Body::Aerodrome(aerodrome), Some(RecordKind::Airport | RecordKind::Heliport)) => {
                if let Some(primary) = aerodrome.primary.as_mut() {
                    debug!("line {line_number}: augmenting {}", self.entity.key);
                    primary.merge(line);
                } else {
                    aerodrome.primary = Some(line);
                }
                self.last = Some(Slot::Primary);
            }

            (Body::Aerodrome(aerodrome), Some(RecordKind::Runway)) => {
                let existing = aerodrome.runways.iter().position(|rwy| {
                    rwy.text("runway_identifier") == line.text("runway_identifier")
                });

                let i = match existing {
                    Some(i) => {
                        debug!("line {line_number}: augmenting runway of {}", self.entity.key);
                        aerodrome.runways[i].merge(line);
                        i
                    }
                    None => {
                        aerodrome.runways.push(line);
                        aerodrome.runways.len() - 1
                    }
                };
                self.last = Some(Slot::Runway(i));
            }

            (Body::Aerodrome(aerodrome), Some(RecordKind::TerminalWaypoint(_))) => {
                aerodrome.waypoints.push(line);
                self.last = Some(Slot::Waypoint(aerodrome.waypoints.len() - 1));
            }

            (Body::Aerodrome(aerodrome), Some(RecordKind::ProcedureLeg(_, kind))) => {
                let identifier = line.text("identifier").to_owned();
                let route_type = line.text("route_type").to_owned();
                let transition = line.text("transition_identifier").to_owned();

                let p = match aerodrome
                    .procedures
                    .iter()
                    .position(|p| p.kind == kind && p.identifier == identifier)
                {
                    Some(p) => p,
                    None => {
                        aerodrome.procedures.push(Procedure {
                            kind,
                            identifier: identifier.clone(),
                            legs: Vec::new(),
                        });
                        aerodrome.procedures.len() - 1
                    }
                };
                let procedure = &mut aerodrome.procedures[p];

                // sequence numbers may not decrease within a transition
                let previous = procedure
                    .legs
                    .iter()
                    .rev()
                    .find(|leg| {
                        leg.line.text("route_type") == route_type
                            && leg.line.text("transition_identifier") == transition
                    })
                    .and_then(Leg::sequence_number);

                if let (Some(previous), Some(sequence)) = (previous, line.integer("sequence_number")) {
                    if sequence < previous {
                        return Err(Error::OutOfSequence {
                            line: line_number,
                            message: format!(
                                "leg {sequence} follows leg {previous} in {identifier} \
                                 transition {route_type}{transition} of {}",
                                self.entity.key
                            ),
                        });
                    }
                }

                procedure.legs.push(Leg::new(line));
                self.last = Some(Slot::Leg(p, procedure.legs.len() - 1));
            }

            (Body::Fix(primary), Some(_)) => {
                if let Some(existing) = primary.as_mut() {
                    existing.merge(line);
                } else {
                    *primary = Some(line);
                }
                self.last = Some(Slot::Primary);
            }

            (Body::Airway(legs), Some(RecordKind::EnrouteAirway)) => {
                // sequence numbers must increase strictly along an airway
                let previous = legs.last().and_then(Leg::sequence_number);

                if let (Some(previous), Some(sequence)) = (previous, line.integer("sequence_number")) {
                    if sequence <= previous {
                        return Err(Error::OutOfSequence {
                            line: line_number,
                            message: format!(
                                "leg {sequence} follows leg {previous} of {}",
                                self.entity.key
                            ),
                        });
                    }
                }

                legs.push(Leg::new(line));
                self.last = Some(Slot::Leg(0, legs.len() - 1));
            }

            (
                Body::Airspace(points),
                Some(RecordKind::ControlledAirspace | RecordKind::RestrictiveAirspace),
            ) => {
                // the boundary is drawn in sequence
                let previous = points.last().and_then(|point| point.integer("sequence_number"));

                if let (Some(previous), Some(sequence)) = (previous, line.integer("sequence_number")) {
                    if sequence <= previous {
                        return Err(Error::OutOfSequence {
                            line: line_number,
                            message: format!(
                                "point {sequence} follows point {previous} of {}",
                                self.entity.key
                            ),
                        });
                    }
                }

                points.push(line);
                self.last = Some(Slot::Boundary(points.len() - 1));
            }

            _ => {
                return Err(Error::OutOfSequence {
                    line: line_number,
                    message: format!("{} is no part of {}", line.record_type, self.entity.key),
                })
            }
        }

        Ok(())
    }

    /// Merges a continuation into the last record.
    fn merge(&mut self, continuation: ParsedLine) -> Result<(), Error> {
        let target = match (self.last, &mut self.entity.body) {
            (Some(Slot::Primary), Body::Aerodrome(aerodrome)) => aerodrome.primary.as_mut(),
            (Some(Slot::Primary), Body::Fix(primary)) => primary.as_mut(),
            (Some(Slot::Runway(i)), Body::Aerodrome(aerodrome)) => aerodrome.runways.get_mut(i),
            (Some(Slot::Waypoint(i)), Body::Aerodrome(aerodrome)) => {
                aerodrome.waypoints.get_mut(i)
            }
            (Some(Slot::Leg(p, i)), Body::Aerodrome(aerodrome)) => aerodrome
                .procedures
                .get_mut(p)
                .and_then(|procedure| procedure.legs.get_mut(i))
                .map(|leg| &mut leg.line),
            (Some(Slot::Leg(_, i)), Body::Airway(legs)) => legs.get_mut(i).map(|leg| &mut leg.line),
            (Some(Slot::Boundary(i)), Body::Airspace(points)) => points.get_mut(i),
            _ => None,
        };

        match target {
            Some(record) if continues(record, &continuation) => {
                record.merge(continuation);
                Ok(())
            }
            _ => Err(Error::OutOfSequence {
                line: continuation.line_number,
                message: format!(
                    "{} doesn't continue the preceding record of {}",
                    continuation.record_type, self.entity.key
                ),
            }),
        }
    }
}

/// Assembles entities out of parsed records.
///
/// The assembler is fed with records in file order by [`push`] and
/// completes an entity as soon as a record of another entity is pushed.
/// Completed entities are taken by [`completed`]. At the end of the input,
/// [`finish`] completes the last entity.
///
/// Upon completion, the fixes of procedure and airway legs are resolved to
/// positions. Navaids and enroute waypoints are looked up from entities that
/// were completed before, terminal waypoints and runways from the facility
/// the procedure belongs to.
///
/// [`push`]: Assembler::push
/// [`completed`]: Assembler::completed
/// [`finish`]: Assembler::finish
#[derive(Default)]
pub struct Assembler {
    current: Option<Current>,
    completed: VecDeque<Entity>,
    facilities: HashSet<(Facility, String)>,
    fixes: HashMap<FixRef, (f64, f64)>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes the next record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfSequence`] if the record is rejected because it
    /// violates the order of its entity. The entity is flagged incomplete but
    /// is still assembled.
    pub fn push(&mut self, line: ParsedLine) -> Result<(), Error> {
        let Some(key) = Key::of(&line) else {
            return Err(Error::UnclassifiedLine {
                line: line.line_number,
                code: line.record_type.to_string(),
            });
        };

        let current = self.enter(key);
        let result = current.absorb(line);

        if result.is_err() {
            current.entity.incomplete = true;
            current.last = None;
        }

        result
    }

    /// Rejects a record which couldn't be parsed.
    ///
    /// The line is expected to contain only the record's key fields. The
    /// entity of the key is flagged incomplete.
    pub fn reject(&mut self, key_line: &ParsedLine) {
        if let Some(key) = Key::of(key_line) {
            let current = self.enter(key);
            current.entity.incomplete = true;
            current.last = None;
        }
    }

    /// Completes the last entity at the end of the input.
    pub fn finish(&mut self) {
        if let Some(current) = self.current.take() {
            self.complete(current);
        }
    }

    /// Takes the completed entities in the order of completion.
    pub fn completed(&mut self) -> impl Iterator<Item = Entity> + '_ {
        self.completed.drain(..)
    }

    /// Returns the entity of the key, completing the current entity if its
    /// key differs.
    fn enter(&mut self, key: Key) -> &mut Current {
        let current = match self.current.take() {
            Some(current) if current.entity.key == key => current,
            previous => {
                if let Some(previous) = previous {
                    self.complete(previous);
                }
                Current::new(self.start(key))
            }
        };

        self.current.insert(current)
    }

    fn start(&mut self, key: Key) -> Entity {
        let body = match &key {
            Key::Facility { facility, code } => {
                let repeated = !self.facilities.insert((*facility, code.clone()));
                if repeated {
                    debug!("{key} reappears after its records were completed");
                }

                Body::Aerodrome(Aerodrome {
                    repeated,
                    ..Default::default()
                })
            }
            Key::Navaid { .. } | Key::Waypoint { .. } => Body::Fix(None),
            Key::Airway { .. } => Body::Airway(Vec::new()),
            Key::Airspace { .. } => Body::Airspace(Vec::new()),
        };

        Entity {
            key,
            body,
            incomplete: false,
        }
    }

    fn complete(&mut self, current: Current) {
        let mut entity = current.entity;

        match &mut entity.body {
            Body::Aerodrome(aerodrome) => {
                let local: HashMap<FixRef, (f64, f64)> = aerodrome
                    .waypoints
                    .iter()
                    .chain(&aerodrome.runways)
                    .filter_map(|line| Some((FixRef::of(line)?, position(line)?)))
                    .collect();

                for leg in aerodrome
                    .procedures
                    .iter_mut()
                    .flat_map(|procedure| procedure.legs.iter_mut())
                {
                    leg.position = leg
                        .fix()
                        .and_then(|fix| local.get(&fix).or_else(|| self.fixes.get(&fix)))
                        .copied();
                }
            }

            Body::Airway(legs) => {
                for leg in legs {
                    leg.position = leg.fix().and_then(|fix| self.fixes.get(&fix)).copied();
                }
            }

            Body::Fix(Some(line)) => {
                if let (Some(fix), Some(coordinates)) = (FixRef::of(line), position(line)) {
                    self.fixes.insert(fix, coordinates);
                }
            }

            Body::Fix(None) | Body::Airspace(_) => {}
        }

        self.completed.push_back(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arinc424::{classify, parse};

    const AIRPORT: &[u8] = b"SUSAP KDENK2ADEN     1FL180160YHN39514200W104402400E008005434250DEN   1800018000CU07YMNAR    DENVER INTL                   002012313";
    const AIRPORT_CONTINUATION: &[u8] = b"SUSAP KDENK2ADEN     2APRIOR PERMISSION REQUIRED FOR GA                                                                    002022313";
    const RUNWAY_16R: &[u8] = b"SUSAP KDENK2GRW16R   0160001740 N39523030W104414580-00150         05351000055200 IDZG3               RUNWAY 16R            003012313";
    const RUNWAY_34L: &[u8] = b"SUSAP KDENK2GRW34L   1160003540 N39502950W104414590+00150         05390050058200 IAQD1                                     003022313";
    const RUNWAY_34L_CONTINUATION: &[u8] = b"SUSAP KDENK2GRW34L   2AGROOVED                                                                                             003032313";
    const TERMINAL_WAYPOINT: &[u8] = b"SUSAP KDENK2CCESSN K20    W     N39400000W104300000                       E0080     NAR           CESSN                    004012313";
    const TRANSITION_010: &[u8] = b"SUSAP KDENK2FI16R  ACESSN 010CESSNK2PC0E       IF                                                                          005012313";
    const TRANSITION_020: &[u8] = b"SUSAP KDENK2FI16R  ACESSN 020DANDDK2EA0E  A    TF                                   10000                                  005022313";
    const FINAL_010: &[u8] = b"SUSAP KDENK2FI16R  I      010DANDDK2EA0E  A    IF                                 + 10000                                  005032313";
    const FINAL_020: &[u8] = b"SUSAP KDENK2FI16R  I      020RW16RK2PG1GY M    CF IDZGK2              17400070                        -300                 005042313";
    const FINAL_030: &[u8] = b"SUSAP KDENK2FI16R  I      030         0  M     CA                     1740          05800                                  005062313";
    const FINAL_015: &[u8] = b"SUSAP KDENK2FI16R  I      015DANDDK2EA0E       TF                                                                          005072313";
    const VOR: &[u8] = b"SUSAD        DEN   K2011790VDHW N39485658W104393162DEN N39485658W104393162E0110054431     NARDENVER                        008012313";
    const ENROUTE_WAYPOINT: &[u8] = b"SUSAEAENRT   DANDD K20    C   L N39450000W104350000                       E0080     NAR           DANDD                    010012313";
    const AIRWAY_010: &[u8] = b"SUSAER       V4          0010DEN  K2D 0     OL                        085001202650 11000                                   011012313";
    const AIRWAY_020: &[u8] = b"SUSAER       V4          0020DANDDK2EA0     OL                        0900         10000                                   011022313";
    const CONTROLLED_0010: &[u8] = b"SUSAUCK6TKJFK PAB  A00100     R N40394857W074144423N40413000W07409590000402450   GND  A07000MNEW YORK AREA A               676061703";
    const CONTROLLED_0010_CONTINUATION: &[u8] = b"SUSAUCK6TKJFK PAB  A00102AACTIVE 0600-2300 LCL                                                                             676081703";
    const CONTROLLED_0020: &[u8] = b"SUSAUCK6TKJFK PAB  A00200     H N40413000W074095900                              GND  A07000MNEW YORK AREA A               676071703";
    const RESTRICTIVE: &[u8] = b"SUSAURK1MEEL A     A00101L    H N46200000W124215300                              11000M17999MEEL A MOA                     715681713";
    const AIRWAY_015: &[u8] = b"SUSAER       V4          0015AB   K2DB0     OL                                                                             011032313";

    fn line(n: usize, record: &[u8]) -> ParsedLine {
        parse(n, record, classify(record)).expect("record should parse")
    }

    fn assemble(records: &[&[u8]]) -> (Vec<Entity>, Vec<Error>) {
        let mut assembler = Assembler::new();
        let mut errors = Vec::new();

        for (i, record) in records.iter().enumerate() {
            if let Err(e) = assembler.push(line(i + 1, record)) {
                errors.push(e);
            }
        }

        assembler.finish();
        (assembler.completed().collect(), errors)
    }

    fn assert_near(position: Option<(f64, f64)>, expected: (f64, f64)) {
        let (lat, lon) = position.expect("fix should be resolved");
        assert!((lat - expected.0).abs() < 1e-5, "latitude {lat}");
        assert!((lon - expected.1).abs() < 1e-5, "longitude {lon}");
    }

    fn aerodrome(entity: &Entity) -> &Aerodrome {
        match &entity.body {
            Body::Aerodrome(aerodrome) => aerodrome,
            body => panic!("expected an aerodrome but got {body:?}"),
        }
    }

    #[test]
    fn merges_continuation_into_primary() {
        let (entities, errors) = assemble(&[AIRPORT, AIRPORT_CONTINUATION]);
        assert!(errors.is_empty());
        assert_eq!(entities.len(), 1);

        let primary = aerodrome(&entities[0])
            .primary
            .as_ref()
            .expect("airport should have a primary record");
        assert_eq!(primary.text("name"), "DENVER INTL");
        assert_eq!(primary.text("notes"), "PRIOR PERMISSION REQUIRED FOR GA");
        assert_eq!(primary.text("continuation_record_number"), "1");
    }

    #[test]
    fn completes_entity_when_key_changes() {
        let mut assembler = Assembler::new();

        assembler.push(line(1, VOR)).expect("VOR should be accepted");
        assert_eq!(assembler.completed().count(), 0);

        assembler
            .push(line(2, ENROUTE_WAYPOINT))
            .expect("waypoint should be accepted");
        let completed: Vec<_> = assembler.completed().collect();
        assert_eq!(completed.len(), 1);
        assert!(matches!(completed[0].key, Key::Navaid { .. }));

        assembler.finish();
        assert_eq!(assembler.completed().count(), 1);
    }

    #[test]
    fn keeps_runways_in_file_order() {
        let (entities, errors) = assemble(&[
            AIRPORT,
            RUNWAY_16R,
            RUNWAY_34L,
            RUNWAY_34L_CONTINUATION,
        ]);
        assert!(errors.is_empty());

        let runways = &aerodrome(&entities[0]).runways;
        let idents: Vec<_> = runways
            .iter()
            .map(|rwy| rwy.text("runway_identifier"))
            .collect();
        assert_eq!(idents, ["RW16R", "RW34L"]);
        assert_eq!(runways[1].text("notes"), "GROOVED");
    }

    #[test]
    fn repeated_runway_augments_the_first() {
        let (entities, errors) = assemble(&[AIRPORT, RUNWAY_16R, RUNWAY_16R]);
        assert!(errors.is_empty());
        assert_eq!(aerodrome(&entities[0]).runways.len(), 1);
    }

    #[test]
    fn rejects_decreasing_leg_sequence() {
        let (entities, errors) = assemble(&[
            AIRPORT, FINAL_010, FINAL_020, FINAL_030, FINAL_015,
        ]);

        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], Error::OutOfSequence { line: 5, .. }));

        let entity = &entities[0];
        assert!(entity.incomplete);
        assert_eq!(aerodrome(entity).procedures[0].legs.len(), 3);
    }

    #[test]
    fn sequence_restarts_per_transition() {
        let (entities, errors) = assemble(&[
            AIRPORT,
            TRANSITION_010,
            TRANSITION_020,
            FINAL_010,
            FINAL_020,
        ]);
        assert!(errors.is_empty());

        let procedures = &aerodrome(&entities[0]).procedures;
        assert_eq!(procedures.len(), 1);
        assert_eq!(procedures[0].kind, ProcedureKind::Approach);
        assert_eq!(procedures[0].identifier, "I16R");
        assert_eq!(procedures[0].legs.len(), 4);
    }

    #[test]
    fn airway_sequence_increases_strictly() {
        let (entities, errors) = assemble(&[AIRWAY_010, AIRWAY_020, AIRWAY_015, AIRWAY_020]);

        assert_eq!(errors.len(), 2);
        assert!(matches!(errors[0], Error::OutOfSequence { line: 3, .. }));
        assert!(matches!(errors[1], Error::OutOfSequence { line: 4, .. }));

        match &entities[0].body {
            Body::Airway(legs) => assert_eq!(legs.len(), 2),
            body => panic!("expected an airway but got {body:?}"),
        }
    }

    #[test]
    fn groups_airspace_boundary() {
        let (entities, errors) = assemble(&[
            CONTROLLED_0010,
            CONTROLLED_0010_CONTINUATION,
            CONTROLLED_0020,
            RESTRICTIVE,
        ]);
        assert!(errors.is_empty());
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0].key.to_string(), "controlled airspace KJFK (A)");
        assert_eq!(entities[1].key.to_string(), "restrictive airspace EEL A (A)");

        let Body::Airspace(points) = &entities[0].body else {
            panic!("expected an airspace");
        };
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].text("notes"), "ACTIVE 0600-2300 LCL");
        assert_eq!(points[1].integer("sequence_number"), Some(20));
        assert_eq!(entities[0].missing_required(), None);
    }

    #[test]
    fn airspace_boundary_is_in_sequence() {
        let (entities, errors) = assemble(&[CONTROLLED_0020, CONTROLLED_0010]);

        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], Error::OutOfSequence { line: 2, .. }));
        assert!(entities[0].incomplete);
    }

    #[test]
    fn rejects_continuation_without_its_record() {
        let (entities, errors) = assemble(&[AIRPORT, RUNWAY_34L_CONTINUATION]);

        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], Error::OutOfSequence { line: 2, .. }));
        assert!(entities[0].incomplete);
        assert_eq!(aerodrome(&entities[0]).runways.len(), 0);
    }

    #[test]
    fn resolves_fix_positions() {
        let (entities, errors) = assemble(&[
            VOR,
            ENROUTE_WAYPOINT,
            AIRWAY_010,
            AIRWAY_020,
            AIRPORT,
            TERMINAL_WAYPOINT,
            TRANSITION_010,
            TRANSITION_020,
            FINAL_010,
            FINAL_020,
            FINAL_030,
            RUNWAY_16R,
        ]);
        assert!(errors.is_empty());

        let Body::Airway(legs) = &entities[2].body else {
            panic!("expected an airway");
        };
        assert_near(legs[0].position, (39.815716, -104.658783));
        assert_near(legs[1].position, (39.75, -104.583333));
        assert_eq!(entities[2].unresolved_fixes(), 0);

        let legs = &aerodrome(&entities[3]).procedures[0].legs;
        assert_near(legs[0].position, (39.666667, -104.5));
        assert_eq!(legs[1].position, legs[2].position);
        assert!(legs[3].position.is_some(), "runway should be resolved");
        assert_eq!(legs[4].position, None);
        assert_eq!(entities[3].unresolved_fixes(), 0);
    }

    #[test]
    fn reports_repeated_facility() {
        let (entities, _) = assemble(&[AIRPORT, VOR, RUNWAY_16R]);

        assert_eq!(entities.len(), 3);
        assert!(!entities[0].is_repeated());
        assert!(entities[2].is_repeated());
        assert_eq!(entities[2].missing_required(), None);
    }

    #[test]
    fn flags_missing_primary_record() {
        let (entities, _) = assemble(&[RUNWAY_16R, RUNWAY_34L]);

        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].missing_required(), Some("primary record"));
    }

    #[test]
    fn rejected_record_opens_its_entity() {
        let mut assembler = Assembler::new();
        assembler.push(line(1, VOR)).expect("VOR should be accepted");

        let truncated = &AIRPORT[..60];
        let key = arinc424::parse_key(2, truncated, classify(truncated)).expect("key should parse");
        assembler.reject(&key);
        assembler.finish();

        let entities: Vec<_> = assembler.completed().collect();
        assert_eq!(entities.len(), 2);
        assert!(entities[1].incomplete);
        assert_eq!(entities[1].missing_required(), Some("primary record"));
    }
}
