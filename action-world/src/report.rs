// Copyright 2025 John Brosnihan
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
//! Diagnostic snapshots
//!
//! A [`ReportWriter`] receives a read-only tabular dump of the store and of
//! every engine with live instances. Reports are never needed for the
//! simulation to run and may be skipped entirely.

use std::fmt::{Display, Write};

/// Sink for tabular diagnostic output
pub trait ReportWriter {
    /// Open a titled section
    fn start_box(&mut self, title: &str);
    /// Close the current section
    fn end_box(&mut self);
    /// Open a table with the given column headers
    fn start_table(&mut self, headers: &[&str]);
    /// Close the current table
    fn end_table(&mut self);
    /// Open a row
    fn start_row(&mut self);
    /// Append a cell to the current row
    fn add_cell(&mut self, value: &dyn Display);
    /// Close the current row
    fn end_row(&mut self);
}

/// Plain-text report, rendered as pipe-separated tables
#[derive(Debug, Default)]
pub struct TextReport {
    out: String,
    row: Vec<String>,
    rows: usize,
}

impl TextReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered text
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Number of data rows written so far, across all tables
    pub fn row_count(&self) -> usize {
        self.rows
    }
}

impl ReportWriter for TextReport {
    fn start_box(&mut self, title: &str) {
        let _ = writeln!(self.out, "== {} ==", title);
    }

    fn end_box(&mut self) {
        self.out.push('\n');
    }

    fn start_table(&mut self, headers: &[&str]) {
        let _ = writeln!(self.out, "| {} |", headers.join(" | "));
    }

    fn end_table(&mut self) {}

    fn start_row(&mut self) {
        self.row.clear();
    }

    fn add_cell(&mut self, value: &dyn Display) {
        self.row.push(value.to_string());
    }

    fn end_row(&mut self) {
        let _ = writeln!(self.out, "| {} |", self.row.join(" | "));
        self.rows += 1;
    }
}
