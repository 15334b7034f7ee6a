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

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use log::{debug, error, warn};
#[cfg(feature = "serde")]
use serde::Serialize;

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Receives the problems found during a conversion.
pub trait Diagnostics {
    /// Reports a problem.
    ///
    /// The message is complete by itself and names the line if there is
    /// one. The `line` is `None` for problems of an entity.
    fn report(&mut self, line: Option<usize>, severity: Severity, message: &str);
}

/// Forwards diagnostics to the `log` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&mut self, _line: Option<usize>, severity: Severity, message: &str) {
        match severity {
            Severity::Info => debug!("{message}"),
            Severity::Warning => warn!("{message}"),
            Severity::Error => error!("{message}"),
        }
    }
}

/// A reported problem.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Report {
    pub line: Option<usize>,
    pub severity: Severity,
    pub message: String,
}

/// Collects the reports.
impl Diagnostics for Vec<Report> {
    fn report(&mut self, line: Option<usize>, severity: Severity, message: &str) {
        self.push(Report {
            line,
            severity,
            message: message.to_string(),
        });
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &mut D {
    fn report(&mut self, line: Option<usize>, severity: Severity, message: &str) {
        (**self).report(line, severity, message);
    }
}

/// The statistics of a conversion.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Summary {
    /// Lines read excluding blank lines and header records.
    pub lines: usize,
    /// Records that were parsed.
    pub records: usize,
    /// Records of unsupported type.
    pub unclassified: usize,
    pub decode_errors: usize,
    pub out_of_sequence: usize,
    /// Entities that lack required fields or whose records were rejected.
    pub incomplete: usize,
    /// Facilities whose records appear in more than one group.
    pub repeated: usize,
    pub entities: usize,
    /// Legs whose fix has no known position.
    pub unresolved_fixes: usize,
    /// The number of stored rows per table.
    pub rows: BTreeMap<&'static str, usize>,
    /// Rows the sink dropped as duplicates.
    pub ignored_rows: usize,
    /// The number of unsupported records per section code.
    pub unknown_codes: BTreeMap<String, usize>,
    pub elapsed: Duration,
}

impl Summary {
    /// Returns `true` if records were skipped or entities are incomplete.
    pub fn has_errors(&self) -> bool {
        self.decode_errors > 0 || self.out_of_sequence > 0 || self.incomplete > 0
    }

    /// Returns `true` if every line was converted.
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && self.unclassified == 0
    }

    /// The number of rows of all tables.
    pub fn total_rows(&self) -> usize {
        self.rows.values().sum()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} lines, {} records, {} entities in {:.2?}",
            self.lines, self.records, self.entities, self.elapsed
        )?;
        writeln!(
            f,
            "skipped: {} unsupported, {} undecodable, {} out of sequence",
            self.unclassified, self.decode_errors, self.out_of_sequence
        )?;
        writeln!(
            f,
            "flagged: {} incomplete entities, {} repeated, {} unresolved fixes",
            self.incomplete, self.repeated, self.unresolved_fixes
        )?;

        if self.ignored_rows > 0 {
            writeln!(f, "ignored: {} duplicate rows", self.ignored_rows)?;
        }

        for (table, count) in self.rows.iter().filter(|(_, count)| **count > 0) {
            writeln!(f, "{table:>28}: {count}")?;
        }

        if !self.unknown_codes.is_empty() {
            writeln!(f, "unsupported records:")?;
            for (code, count) in &self.unknown_codes {
                writeln!(f, "{code:>28}: {count}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_reports() {
        let mut reports = Vec::new();
        reports.report(Some(3), Severity::Warning, "out of sequence");
        reports.report(None, Severity::Info, "airport KDEN reappears");

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].line, Some(3));
        assert_eq!(reports[1].severity, Severity::Info);
    }

    #[test]
    fn displays_rows_and_unknown_codes() {
        let mut summary = Summary {
            lines: 3,
            records: 2,
            unclassified: 1,
            entities: 1,
            incomplete: 1,
            ..Default::default()
        };
        summary.rows.insert("Airport", 1);
        summary.rows.insert("Heliport", 0);
        summary.unknown_codes.insert("UF".to_string(), 1);

        let text = summary.to_string();
        assert!(text.starts_with("3 lines, 2 records, 1 entities"));
        assert!(text.contains("Airport: 1"));
        assert!(!text.contains("Heliport"));
        assert!(text.contains("UF: 1"));
        assert!(text.contains("flagged: 1 incomplete entities"));
        assert!(!text.contains("ignored"));

        assert!(summary.has_errors());
        assert!(!summary.is_clean());
        assert_eq!(summary.total_rows(), 1);
    }
}
