//! Container types for the data blocks of an export.
//!
//! Each block wraps an `ndarray::Array2` and knows how to render itself as
//! the inline text wire format: space-separated columns, newline-separated
//! rows, integers in plain decimal and floats with fixed 6-decimal precision.
//! The precision is part of the format contract (consumers parse fixed-width
//! decimal text), so the rendering lives here and nowhere else.

use crate::prelude::*;

/// node coordinate block, one row per node
#[derive(Debug, Clone, PartialEq, Constructor, Deref, Into)]
pub struct Coordinates(Array2<f64>);

impl DataItemArray for Coordinates {
    fn rows(&self) -> usize {
        self.0.nrows()
    }

    fn cols(&self) -> usize {
        self.0.ncols()
    }

    fn container_group(&self) -> &'static str {
        "geometry"
    }

    fn ascii_text(&self) -> String {
        float_rows(&self.0)
    }
}

/// connectivity block, one row of dense node indices per element
#[derive(Debug, Clone, PartialEq, Constructor, Deref, Into)]
pub struct Connectivity(Array2<u64>);

impl DataItemArray for Connectivity {
    fn rows(&self) -> usize {
        self.0.nrows()
    }

    fn cols(&self) -> usize {
        self.0.ncols()
    }

    fn number_type(&self) -> Option<&'static str> {
        Some("UInt")
    }

    fn container_group(&self) -> &'static str {
        "topology"
    }

    fn ascii_text(&self) -> String {
        integer_rows(&self.0)
    }
}

/// per-cell scalar block, one value per element
#[derive(Debug, Clone, PartialEq, Constructor, Deref, Into)]
pub struct CellValues(Array2<f64>);

impl CellValues {
    /// the placeholder block the one-call pipeline attaches: one zero per
    /// cell, a stand-in for real field data such as a material id
    pub fn zeros(count: usize) -> CellValues {
        CellValues(Array2::zeros((count, 1)))
    }

    /// a block carrying caller-supplied per-cell values
    ///
    /// The length contract against the element count is enforced when the
    /// block is attached with
    /// [`GridData::with_cell_values`](crate::GridData::with_cell_values).
    pub fn from_column(values: Vec<f64>) -> CellValues {
        CellValues(Array1::from_vec(values).insert_axis(Axis(1)))
    }
}

impl DataItemArray for CellValues {
    fn rows(&self) -> usize {
        self.0.nrows()
    }

    fn cols(&self) -> usize {
        self.0.ncols()
    }

    fn container_group(&self) -> &'static str {
        "values"
    }

    fn ascii_text(&self) -> String {
        float_rows(&self.0)
    }
}

fn float_rows(array: &Array2<f64>) -> String {
    let rows: Vec<String> = array
        .outer_iter()
        .map(|row| {
            let columns: Vec<String> = row.iter().map(|value| format!("{value:.6}")).collect();
            columns.join(" ")
        })
        .collect();

    rows.join("\n")
}

fn integer_rows(array: &Array2<u64>) -> String {
    let rows: Vec<String> = array
        .outer_iter()
        .map(|row| {
            let columns: Vec<String> = row.iter().map(|value| value.to_string()).collect();
            columns.join(" ")
        })
        .collect();

    rows.join("\n")
}
