//! Height measurement supplied by the host

use crate::table::{Header, Row};

/// Measures rendered heights of table parts.
///
/// In the browser this renders a clone into a hidden container and reads
/// its layout height; the engine only sees the numbers. Each part is
/// measured exactly once per pagination pass.
pub trait MeasureHeight {
    fn header_height(&mut self, header: &Header) -> f32;

    /// `index` is the row's position in the source table
    fn row_height(&mut self, index: usize, row: &Row) -> f32;
}

/// Heights measured ahead of time, in source row order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FixedHeights {
    pub header: f32,
    pub rows: Vec<f32>,
}

impl FixedHeights {
    pub fn new(header: f32, rows: Vec<f32>) -> Self {
        Self { header, rows }
    }
}

impl MeasureHeight for FixedHeights {
    fn header_height(&mut self, _header: &Header) -> f32 {
        self.header
    }

    /// Rows past the end of the list report NaN so the engine rejects them
    fn row_height(&mut self, index: usize, _row: &Row) -> f32 {
        self.rows.get(index).copied().unwrap_or(f32::NAN)
    }
}

/// Every row has the same height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformHeights {
    pub header: f32,
    pub row: f32,
}

impl MeasureHeight for UniformHeights {
    fn header_height(&mut self, _header: &Header) -> f32 {
        self.header
    }

    fn row_height(&mut self, _index: usize, _row: &Row) -> f32 {
        self.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_heights_out_of_range() {
        let mut heights = FixedHeights::new(20.0, vec![30.0]);
        let row = Row::default();
        assert_eq!(heights.row_height(0, &row), 30.0);
        assert!(heights.row_height(1, &row).is_nan());
        assert_eq!(heights.header_height(&Header::default()), 20.0);
    }
}
