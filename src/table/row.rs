//! Table rows and the registration-number cell

use smallvec::SmallVec;

/// Cell storage; most listing tables have a handful of columns
pub type Cells = SmallVec<[String; 8]>;

/// A body row of the source table.
///
/// The first cell holds the registration number, which is rewritten every
/// time the table is paginated. Rows without cells get one on renumbering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    cells: Cells,
}

impl Row {
    /// Create a row from its cell values
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    /// All cell values, registration number first
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Current registration number, if the first cell holds one
    pub fn registration(&self) -> Option<usize> {
        self.cells.first().and_then(|cell| cell.trim().parse().ok())
    }

    /// Overwrite the registration cell
    pub fn set_registration(&mut self, number: usize) {
        let text = number.to_string();
        match self.cells.first_mut() {
            Some(cell) => *cell = text,
            None => self.cells.push(text),
        }
    }
}

/// A row together with its height, measured once before distribution
#[derive(Debug, Clone, PartialEq)]
pub struct MeasuredRow {
    pub row: Row,
    pub height: f32,
}

impl MeasuredRow {
    pub fn new(row: Row, height: f32) -> Self {
        Self { row, height }
    }
}
