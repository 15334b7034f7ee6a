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

use std::time::Instant;

use arinc424::records::{section_code, Records};
use arinc424::{parse, parse_key, RecordType};
use log::debug;

use crate::assemble::{Assembler, Entity};
use crate::diagnostics::{Diagnostics, LogDiagnostics, Severity, Summary};
use crate::map::map;
use crate::schema::{TableRow, TABLES};
use crate::sink::RowSink;
use crate::Error;

/// Options of a conversion.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct Options {
    /// Fail on the first error instead of skipping the record or flagging
    /// the entity.
    pub strict: bool,
}

/// Converts ARINC 424 data into rows of a [`RowSink`].
///
/// # Examples
///
/// ```
/// use navdata_sql::{Converter, MemorySink};
///
/// # fn main() -> Result<(), navdata_sql::Error> {
/// let data = b"SUSAP KDENK2ADEN     1FL180160YHN39514200W104402400E008005434250DEN   1800018000CU07YMNAR    DENVER INTL                   002012313\n";
///
/// let mut converter = Converter::new(MemorySink::new());
/// let summary = converter.convert(data)?;
///
/// assert_eq!(summary.entities, 1);
/// assert_eq!(converter.sink().rows("Airport").len(), 1);
/// #     Ok(())
/// # }
/// ```
pub struct Converter<S, D = LogDiagnostics> {
    sink: S,
    diagnostics: D,
    options: Options,
}

impl<S: RowSink> Converter<S> {
    /// Creates a converter which logs its diagnostics.
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            diagnostics: LogDiagnostics,
            options: Options::default(),
        }
    }
}

impl<S: RowSink, D: Diagnostics> Converter<S, D> {
    /// Replaces all options.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Fails on the first error.
    pub fn strict(mut self) -> Self {
        self.options.strict = true;
        self
    }

    /// Reports diagnostics to `diagnostics` instead.
    pub fn with_diagnostics<E: Diagnostics>(self, diagnostics: E) -> Converter<S, E> {
        Converter {
            sink: self.sink,
            diagnostics,
            options: self.options,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Converts the records of a file.
    ///
    /// Records that can't be converted are reported and skipped. Entities
    /// are written as soon as they're complete and each entity is committed
    /// on its own.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails or, in strict mode, on the first
    /// reported error.
    pub fn convert(&mut self, data: &[u8]) -> Result<Summary, Error> {
        let start = Instant::now();
        let mut summary = Summary::default();
        let mut assembler = Assembler::new();

        for table in TABLES {
            self.sink.open_table(table)?;
            summary.rows.insert(table.name, 0);
        }

        for (line, record_type, record) in Records::new(data) {
            summary.lines += 1;

            if record_type == RecordType::Unknown {
                let code = section_code(record);
                self.recover(&mut summary, Error::UnclassifiedLine { line, code })?;
                continue;
            }

            match parse(line, record, record_type) {
                Ok(parsed) => {
                    summary.records += 1;
                    if let Err(e) = assembler.push(parsed) {
                        self.recover(&mut summary, e)?;
                    }
                }
                Err(error) => {
                    // the key identifies the entity even if the record is truncated
                    if let Ok(key) = parse_key(line, record, record_type) {
                        assembler.reject(&key);
                    }
                    self.recover(&mut summary, Error::Decode { line, error })?;
                }
            }

            for entity in assembler.completed() {
                self.write(&mut summary, entity)?;
            }
        }

        assembler.finish();
        for entity in assembler.completed() {
            self.write(&mut summary, entity)?;
        }

        summary.elapsed = start.elapsed();
        debug!(
            "converted {} records into {} rows in {:?}",
            summary.records,
            summary.total_rows(),
            summary.elapsed
        );

        Ok(summary)
    }

    fn write(&mut self, summary: &mut Summary, entity: Entity) -> Result<(), Error> {
        summary.entities += 1;

        if entity.is_repeated() {
            summary.repeated += 1;
            self.diagnostics.report(
                None,
                Severity::Warning,
                &format!("{} reappears, its primary row is written once", entity.key),
            );
        }

        // a single report per entity, whatever it lacks
        let missing = entity
            .missing_required()
            .or_else(|| entity.incomplete.then_some("records that were rejected"));

        if let Some(missing) = missing {
            self.recover(
                summary,
                Error::IncompleteEntity {
                    key: entity.key.to_string(),
                    missing,
                },
            )?;
        }

        summary.unresolved_fixes += entity.unresolved_fixes();

        for TableRow { table, row } in map(&entity) {
            if self.sink.append_row(table, row)? {
                *summary.rows.entry(table.name).or_default() += 1;
            } else {
                summary.ignored_rows += 1;
            }
        }

        self.sink.commit()?;
        Ok(())
    }

    /// Counts and reports a recoverable error.
    ///
    /// Returns the error in strict mode or if it isn't recoverable.
    fn recover(&mut self, summary: &mut Summary, error: Error) -> Result<(), Error> {
        let severity = match &error {
            Error::Decode { .. } => {
                summary.decode_errors += 1;
                Severity::Error
            }
            Error::UnclassifiedLine { code, .. } => {
                summary.unclassified += 1;
                *summary.unknown_codes.entry(code.clone()).or_default() += 1;
                Severity::Info
            }
            Error::OutOfSequence { .. } => {
                summary.out_of_sequence += 1;
                Severity::Warning
            }
            Error::IncompleteEntity { .. } => {
                summary.incomplete += 1;
                Severity::Warning
            }
            Error::Sink(_) => return Err(error),
        };

        self.diagnostics
            .report(error.line(), severity, &error.to_string());

        if self.options.strict {
            Err(error)
        } else {
            Ok(())
        }
    }
}
