//! Source table model: header plus ordered body rows

mod row;

pub use row::{Cells, MeasuredRow, Row};

/// Table header, copied verbatim onto every page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Header {
    cells: Vec<String>,
}

impl Header {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// The single source table the viewer paginates
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    pub header: Header,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(header: Header, rows: Vec<Row>) -> Self {
        Self { header, rows }
    }

    /// Append a body row
    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
