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

//! Storage of rows.
//!
//! The converter appends the rows of one entity after the other to a
//! [`RowSink`] and commits after each entity. If the conversion is aborted,
//! a sink holds only the rows of completely converted entities.

use std::collections::HashMap;

use crate::schema::{Row, TableSchema};
use crate::SinkError;

#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteSink;

/// A store of table rows.
pub trait RowSink {
    /// Opens a table, creating it if needed.
    ///
    /// Every table is opened before the first row is appended.
    fn open_table(&mut self, table: &'static TableSchema) -> Result<(), SinkError>;

    /// Appends a row with one value per column of the table.
    ///
    /// Returns `false` if the row is dropped because the table holds a row
    /// with the same unique columns already.
    fn append_row(&mut self, table: &'static TableSchema, row: Row) -> Result<bool, SinkError>;

    /// Makes the rows appended since the last commit durable.
    fn commit(&mut self) -> Result<(), SinkError>;
}

impl<S: RowSink + ?Sized> RowSink for &mut S {
    fn open_table(&mut self, table: &'static TableSchema) -> Result<(), SinkError> {
        (**self).open_table(table)
    }

    fn append_row(&mut self, table: &'static TableSchema, row: Row) -> Result<bool, SinkError> {
        (**self).append_row(table, row)
    }

    fn commit(&mut self) -> Result<(), SinkError> {
        (**self).commit()
    }
}

/// Keeps rows in memory, e.g. for tests or a dry run.
///
/// Unique constraints aren't enforced, every row is kept.
#[derive(Debug, Default)]
pub struct MemorySink {
    tables: HashMap<&'static str, Vec<Row>>,
    pending: Vec<(&'static str, Row)>,
    commits: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the committed rows of a table.
    pub fn rows(&self, table: &str) -> &[Row] {
        self.tables.get(table).map_or(&[], Vec::as_slice)
    }

    /// The number of rows which are appended but not committed.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn commits(&self) -> usize {
        self.commits
    }
}

impl RowSink for MemorySink {
    fn open_table(&mut self, table: &'static TableSchema) -> Result<(), SinkError> {
        self.tables.entry(table.name).or_default();
        Ok(())
    }

    fn append_row(&mut self, table: &'static TableSchema, row: Row) -> Result<bool, SinkError> {
        if !self.tables.contains_key(table.name) {
            return Err(SinkError::UnknownTable(table.name));
        }

        if row.0.len() != table.columns.len() {
            return Err(SinkError::ColumnCount {
                table: table.name,
                expected: table.columns.len(),
                actual: row.0.len(),
            });
        }

        self.pending.push((table.name, row));
        Ok(true)
    }

    fn commit(&mut self) -> Result<(), SinkError> {
        for (table, row) in self.pending.drain(..) {
            self.tables.entry(table).or_default().push(row);
        }

        self.commits += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::AIRPORT_RUNWAY;
    use arinc424::fields::Value;

    fn runway() -> Row {
        Row(vec![Value::Blank; AIRPORT_RUNWAY.columns.len()])
    }

    #[test]
    fn rows_are_visible_after_commit() {
        let mut sink = MemorySink::new();
        sink.open_table(&AIRPORT_RUNWAY).expect("table should open");

        let stored = sink
            .append_row(&AIRPORT_RUNWAY, runway())
            .expect("row should be appended");
        assert!(stored);
        assert_eq!(sink.pending(), 1);
        assert!(sink.rows("AirportRunway").is_empty());

        sink.commit().expect("commit should succeed");
        assert_eq!(sink.pending(), 0);
        assert_eq!(sink.rows("AirportRunway").len(), 1);
        assert_eq!(sink.commits(), 1);
    }

    #[test]
    fn rejects_rows_of_unopened_tables() {
        let mut sink = MemorySink::new();
        assert_eq!(
            sink.append_row(&AIRPORT_RUNWAY, runway()),
            Err(SinkError::UnknownTable("AirportRunway"))
        );
    }

    #[test]
    fn rejects_rows_of_wrong_width() {
        let mut sink = MemorySink::new();
        sink.open_table(&AIRPORT_RUNWAY).expect("table should open");

        assert!(matches!(
            sink.append_row(&AIRPORT_RUNWAY, Row(vec![Value::Blank])),
            Err(SinkError::ColumnCount { actual: 1, .. })
        ));
    }
}
