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

use std::error;
use std::fmt;

/// The storage of rows failed.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum SinkError {
    /// A row was appended to a table which wasn't opened.
    UnknownTable(&'static str),
    /// A row doesn't have one value per column.
    ColumnCount {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
    /// The underlying storage failed.
    Storage(String),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTable(table) => write!(f, "table {table} is not open"),
            Self::ColumnCount {
                table,
                expected,
                actual,
            } => write!(f, "table {table} has {expected} columns but got {actual} values"),
            Self::Storage(e) => write!(f, "storage failed: {e}"),
        }
    }
}

impl error::Error for SinkError {}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for SinkError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Storage(e.to_string())
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A record could not be decoded and is skipped.
    Decode {
        line: usize,
        error: arinc424::Error,
    },
    /// A record is none of the supported records and is skipped.
    UnclassifiedLine { line: usize, code: String },
    /// A record doesn't continue the records before it.
    OutOfSequence { line: usize, message: String },
    /// An entity is missing its required fields.
    IncompleteEntity { key: String, missing: &'static str },
    /// The rows could not be stored.
    Sink(SinkError),
}

impl Error {
    /// The line the error originates from.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Decode { line, .. }
            | Self::UnclassifiedLine { line, .. }
            | Self::OutOfSequence { line, .. } => Some(*line),
            Self::IncompleteEntity { .. } | Self::Sink(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // field errors carry their line already
            Self::Decode { error, .. } if error.line().is_some() => write!(f, "{error}"),
            Self::Decode { line, error } => write!(f, "line {line}: {error}"),
            Self::UnclassifiedLine { line, code } => {
                write!(f, "line {line}: unsupported record {code}")
            }
            Self::OutOfSequence { line, message } => {
                write!(f, "line {line}: out of sequence: {message}")
            }
            Self::IncompleteEntity { key, missing } => {
                write!(f, "{key} is incomplete: missing {missing}")
            }
            Self::Sink(e) => write!(f, "{e}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Decode { error, .. } => Some(error),
            Self::Sink(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SinkError> for Error {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}
