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

use std::collections::HashMap;
use std::path::Path;

use arinc424::fields::Value;
use log::debug;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params_from_iter, Connection};

use super::RowSink;
use crate::schema::{Row, TableSchema};
use crate::SinkError;

/// Stores rows in a SQLite database.
///
/// Tables are created if they don't exist yet. The rows of each entity are
/// inserted within one transaction which is committed by
/// [`commit`](RowSink::commit). Rows that violate a table's unique
/// constraint are ignored and reported as not stored.
pub struct SqliteSink {
    conn: Connection,
    inserts: HashMap<&'static str, String>,
    in_transaction: bool,
}

impl SqliteSink {
    /// Creates a sink writing to an open connection.
    ///
    /// The database is switched to write-ahead logging.
    pub fn new(conn: Connection) -> Result<Self, SinkError> {
        let mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        debug!("opened database in journal mode {mode}");

        Ok(Self {
            conn,
            inserts: HashMap::new(),
            in_transaction: false,
        })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SinkError> {
        Self::new(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self, SinkError> {
        Self::new(Connection::open_in_memory()?)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn into_inner(self) -> Connection {
        self.conn
    }
}

fn create_table(table: &TableSchema) -> String {
    let mut definitions: Vec<String> = table
        .columns
        .iter()
        .map(|column| format!("{} {}", column.name, column.ty.sql()))
        .collect();

    if !table.unique.is_empty() {
        definitions.push(format!("UNIQUE ({})", table.unique.join(", ")));
    }

    if let Some(fk) = &table.foreign_key {
        definitions.push(format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            fk.columns.join(", "),
            fk.table,
            fk.references.join(", ")
        ));
    }

    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        table.name,
        definitions.join(", ")
    )
}

fn insert(table: &TableSchema) -> String {
    let names: Vec<_> = table.columns.iter().map(|column| column.name).collect();
    let placeholders = vec!["?"; names.len()];

    format!(
        "INSERT OR IGNORE INTO {} ({}) VALUES ({})",
        table.name,
        names.join(", "),
        placeholders.join(", ")
    )
}

fn sql_value(value: Value) -> SqlValue {
    match value {
        Value::Blank => SqlValue::Null,
        Value::Integer(n) => SqlValue::Integer(n),
        Value::Decimal(d) => SqlValue::Real(d),
        Value::Text(s) => SqlValue::Text(s),
    }
}

impl RowSink for SqliteSink {
    fn open_table(&mut self, table: &'static TableSchema) -> Result<(), SinkError> {
        self.conn.execute_batch(&create_table(table))?;
        self.inserts.insert(table.name, insert(table));
        Ok(())
    }

    fn append_row(&mut self, table: &'static TableSchema, row: Row) -> Result<bool, SinkError> {
        let sql = self
            .inserts
            .get(table.name)
            .ok_or(SinkError::UnknownTable(table.name))?;

        if row.0.len() != table.columns.len() {
            return Err(SinkError::ColumnCount {
                table: table.name,
                expected: table.columns.len(),
                actual: row.0.len(),
            });
        }

        if !self.in_transaction {
            self.conn.execute_batch("BEGIN")?;
            self.in_transaction = true;
        }

        let mut stmt = self.conn.prepare_cached(sql)?;
        let inserted = stmt.execute(params_from_iter(row.0.into_iter().map(sql_value)))?;
        if inserted == 0 {
            debug!("ignoring duplicate row of {}", table.name);
        }

        Ok(inserted > 0)
    }

    fn commit(&mut self) -> Result<(), SinkError> {
        if self.in_transaction {
            self.conn.execute_batch("COMMIT")?;
            self.in_transaction = false;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{AIRPORT, AIRPORT_RUNWAY};

    fn count(sink: &SqliteSink, table: &str) -> i64 {
        sink.connection()
            .query_row(&format!("SELECT count(*) FROM {table}"), [], |row| row.get(0))
            .expect("table should be queryable")
    }

    fn airport(code: &str) -> Row {
        let mut values = vec![Value::Blank; AIRPORT.columns.len()];
        values[0] = Value::Text(code.to_string());
        values[5] = Value::Decimal(39.86);
        Row(values)
    }

    #[test]
    fn creates_tables_with_constraints() {
        let sql = create_table(&AIRPORT_RUNWAY);
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS AirportRunway (code TEXT"));
        assert!(sql.contains("UNIQUE (code, runway_identifier)"));
        assert!(sql.ends_with("FOREIGN KEY (code) REFERENCES Airport (code))"));
    }

    #[test]
    fn inserts_committed_rows() {
        let mut sink = SqliteSink::open_in_memory().expect("database should open");
        sink.open_table(&AIRPORT).expect("table should be created");

        sink.append_row(&AIRPORT, airport("KDEN"))
            .expect("row should be inserted");
        sink.append_row(&AIRPORT, airport("00AA"))
            .expect("row should be inserted");
        sink.commit().expect("commit should succeed");

        assert_eq!(count(&sink, "Airport"), 2);

        let latitude: f64 = sink
            .connection()
            .query_row("SELECT latitude FROM Airport WHERE code = 'KDEN'", [], |row| {
                row.get(0)
            })
            .expect("KDEN should exist");
        assert_eq!(latitude, 39.86);
    }

    #[test]
    fn ignores_duplicate_keys() {
        let mut sink = SqliteSink::open_in_memory().expect("database should open");
        sink.open_table(&AIRPORT).expect("table should be created");

        let stored: Vec<bool> = (0..2)
            .map(|_| {
                let stored = sink
                    .append_row(&AIRPORT, airport("KDEN"))
                    .expect("row should be appended");
                sink.commit().expect("commit should succeed");
                stored
            })
            .collect();

        assert_eq!(stored, [true, false]);
        assert_eq!(count(&sink, "Airport"), 1);
    }
}
