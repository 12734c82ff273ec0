//! Report sheets
//!
//! A sheet is a sparse grid of cells addressed by 1-based `(row, column)`. Templates and
//! outputs share one JSON form, so a filled report can itself serve as a template.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::error::util::{ensure_parent_dir, safe_read_to_string};
use crate::utils::logging::log_output_written;

/// Value of one cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(u64),
    Text(String),
}

impl From<u64> for CellValue {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Cell {
    row: u32,
    column: u32,
    value: CellValue,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SheetFile {
    #[serde(default)]
    title: Option<String>,
    cells: Vec<Cell>,
}

/// A sparse grid of report cells
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSheet {
    pub title: Option<String>,
    cells: BTreeMap<(u32, u32), CellValue>,
}

impl ReportSheet {
    /// An empty sheet
    #[must_use]
    pub fn blank() -> Self {
        Self::default()
    }

    /// Load a template sheet; a missing file is a missing input
    pub fn load(path: &Path) -> Result<Self> {
        let text = safe_read_to_string(path, "report template")?;
        let file: SheetFile = serde_json::from_str(&text)?;
        let cells = file
            .cells
            .into_iter()
            .map(|cell| ((cell.row, cell.column), cell.value))
            .collect();
        Ok(Self {
            title: file.title,
            cells,
        })
    }

    /// Write the sheet as JSON, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        ensure_parent_dir(path)?;
        let file = SheetFile {
            title: self.title.clone(),
            cells: self
                .cells
                .iter()
                .map(|(&(row, column), value)| Cell {
                    row,
                    column,
                    value: value.clone(),
                })
                .collect(),
        };
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, &file)?;
        writer.flush()?;
        log_output_written("report", path, self.cells.len(), "cells");
        Ok(())
    }

    pub fn set(&mut self, row: u32, column: u32, value: impl Into<CellValue>) {
        self.cells.insert((row, column), value.into());
    }

    #[must_use]
    pub fn get(&self, row: u32, column: u32) -> Option<&CellValue> {
        self.cells.get(&(row, column))
    }

    /// Numeric value of a cell, if it holds a number
    #[must_use]
    pub fn number(&self, row: u32, column: u32) -> Option<u64> {
        match self.get(row, column)? {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(_) => None,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
