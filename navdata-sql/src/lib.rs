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

//! Converts ARINC 424 navigation data into relational rows.
//!
//! The records of a file, e.g. the FAA's Coded Instrument Flight Procedures
//! (CIFP), are parsed by the [`arinc424`] crate and grouped into entities:
//! an airport with its runways, terminal waypoints and procedures, a navaid,
//! a waypoint, an airway or the boundary of an airspace. Each completed
//! entity is mapped to rows of the [tables](schema::TABLES) and written to a
//! [`RowSink`].
//!
//! ```no_run
//! use navdata_sql::{Converter, MemorySink};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("FAACIFP18")?;
//!
//! let mut converter = Converter::new(MemorySink::new()).strict();
//! let summary = converter.convert(&data)?;
//! println!("{summary}");
//! #     Ok(())
//! # }
//! ```
//!
//! With the `sqlite` feature, rows can be written to a SQLite database by the
//! [`SqliteSink`](sink::SqliteSink).

mod convert;
mod diagnostics;
mod error;

pub mod assemble;
pub mod map;
pub mod schema;
pub mod sink;

pub use convert::{Converter, Options};
pub use diagnostics::{Diagnostics, LogDiagnostics, Report, Severity, Summary};
pub use error::{Error, SinkError};
pub use sink::{MemorySink, RowSink};

#[cfg(feature = "sqlite")]
pub use sink::SqliteSink;
