// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

//! ARINC 424 navigation data parser.
//!
//! This crate classifies ARINC 424 [records] and decodes their [fields] by a
//! static layout per record. Each record is 132 bytes long and its fields
//! are found at fixed columns. A record is first [classified](classify) by
//! its section, subsection and continuation number and then [parsed](parse)
//! into a [`ParsedLine`] of named values.
//!
//! # Examples
//!
//! Lets parse John F Kennedy Intl airport and print its coordinates:
//!
//! ```
//! use arinc424::{classify, parse};
//!
//! # fn main() -> Result<(), arinc424::Error> {
//! let data = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";
//! let airport = parse(1, data, classify(data))?;
//!
//! // now we can print the airport code and the position as decimals
//! let code = airport.text("code");
//! let lat = airport.decimal("latitude").unwrap_or_default();
//! let lon = airport.decimal("longitude").unwrap_or_default();
//! println!("{code} at {lat:.4}, {lon:.4}"); // => "KJFK at 40.6399, -73.7786"
//! #     Ok(())
//! # }
//! ```
//!
//! You can also read an entire navigation database obtained from your
//! authorities or other data provider. The following uses the [`Records`]
//! iterator to print all airports of the FAA's Coded Instrument Flight
//! Procedures (CIFP):
//!
//! ```no_run
//! # use arinc424::records::{RecordKind, RecordType, Records};
//! # use arinc424::{parse, Error};
//! # fn main() -> Result<(), Error> {
//! // read the navigation database from file
//! let data = std::fs::read("FAACIFP18").expect("file should be readable");
//!
//! // iterate over all records but print only airports
//! for (line, record_type, bytes) in Records::new(&data) {
//!     if record_type == RecordType::Primary(RecordKind::Airport) {
//!         let arpt = parse(line, bytes, record_type)?;
//!         println!("Airport {} ({})", arpt.text("code"), arpt.text("name"));
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [records]: crate::records
//! [fields]: crate::fields
//! [`Records`]: crate::records::Records

mod error;
mod field;
mod line;

pub mod fields;
pub mod layout;
pub mod records;

pub use error::Error;
pub use field::{Alphanumeric, FixedField};
pub use line::{parse, parse_key, ParsedLine, RECORD_LENGTH};
pub use records::{classify, RecordKind, RecordType, Records};
