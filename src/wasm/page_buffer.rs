//! Flat buffer protocol for handing page layout to JS
//!
//! ## u32 Buffer Layout:
//! ```text
//! Header:
//! [0]     MAGIC (0x50475657 = "PGVW" for validation)
//! [1]     SCHEMA_VERSION (protocol version, currently 1)
//! [2]     page_count
//! [3]     row_count (total across pages)
//! [4..]   page data...
//!
//! Per-page (U32_PER_PAGE values):
//!   [page_index, first_row, row_count, first_registration, flags]
//!     first_row: index of the page's first row in the source table
//!     first_registration: registration number of that row (1-based)
//!     flags: bit0=oversized (single row taller than the page body)
//! ```
//!
//! ## f32 Buffer Layout:
//! ```text
//! [0]       available_height
//! Per-page: [height] (header included)
//! ```

use crate::layout::PaginationResult;
use crate::viewer::PageVisibility;

/// Magic number for format validation: "PGVW" (PaGe VieWer)
pub const MAGIC: u32 = 0x50475657;

/// Schema version for protocol compatibility checking
pub const SCHEMA_VERSION: u32 = 1;

/// Header size in u32 elements
pub const HEADER_SIZE: usize = 4;

/// Number of u32 values per page
pub const U32_PER_PAGE: usize = 5;

/// Page flags
pub const FLAG_OVERSIZED: u32 = 0b0001;

/// Visibility flags, one byte per page
pub const VIS_DISPLAYED: u8 = 0b0001;
pub const VIS_ACTIVE: u8 = 0b0010;
pub const VIS_SAVING: u8 = 0b0100;
pub const VIS_PRINTING: u8 = 0b1000;

/// Page layout encoded for zero-copy transfer
#[derive(Debug, Clone, Default)]
pub struct PageBuffer {
    /// Integer data (indices, counts, flags)
    pub u32_data: Vec<u32>,
    /// Float data (heights)
    pub f32_data: Vec<f32>,
}

impl PageBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode a pagination result, reusing existing capacity
    pub fn encode(&mut self, result: &PaginationResult) {
        let page_count = result.page_count();
        self.u32_data.clear();
        self.f32_data.clear();
        self.u32_data.reserve(HEADER_SIZE + page_count * U32_PER_PAGE);
        self.f32_data.reserve(1 + page_count);

        self.u32_data.push(MAGIC); // [0] magic number
        self.u32_data.push(SCHEMA_VERSION); // [1] schema version
        self.u32_data.push(page_count as u32); // [2] page_count
        self.u32_data.push(result.row_count() as u32); // [3] row_count
        self.f32_data.push(result.available_height());

        let mut first_row = 0;
        for page in result.pages() {
            let flags = if result.is_oversized(page.index) {
                FLAG_OVERSIZED
            } else {
                0
            };
            self.u32_data.push(page.index as u32);
            self.u32_data.push(first_row as u32);
            self.u32_data.push(page.row_count() as u32);
            self.u32_data.push(first_row as u32 + 1);
            self.u32_data.push(flags);
            self.f32_data.push(page.height);

            first_row += page.row_count();
        }
    }
}

/// Pack a page's visibility into its flag byte
pub fn visibility_flags(visibility: PageVisibility) -> u8 {
    let mut flags = 0;
    if visibility.displayed {
        flags |= VIS_DISPLAYED;
    }
    if visibility.active {
        flags |= VIS_ACTIVE;
    }
    if visibility.saving {
        flags |= VIS_SAVING;
    }
    if visibility.printing {
        flags |= VIS_PRINTING;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::paginate;
    use crate::table::{Header, MeasuredRow, Row};

    fn result(heights: &[f32]) -> PaginationResult {
        let rows = heights
            .iter()
            .map(|&h| MeasuredRow::new(Row::default(), h))
            .collect();
        paginate(&Header::default(), rows, 20.0, 100.0).unwrap()
    }

    fn page(buffer: &PageBuffer, i: usize) -> &[u32] {
        &buffer.u32_data[HEADER_SIZE + i * U32_PER_PAGE..][..U32_PER_PAGE]
    }

    #[test]
    fn test_encode_layout() {
        let mut buffer = PageBuffer::new();
        buffer.encode(&result(&[30.0, 30.0, 120.0, 30.0]));

        assert_eq!(&buffer.u32_data[..HEADER_SIZE], &[MAGIC, SCHEMA_VERSION, 3, 4]);
        assert_eq!(buffer.u32_data.len(), HEADER_SIZE + 3 * U32_PER_PAGE);

        assert_eq!(page(&buffer, 0), &[0, 0, 2, 1, 0]);
        assert_eq!(page(&buffer, 1), &[1, 2, 1, 3, FLAG_OVERSIZED]);
        assert_eq!(page(&buffer, 2), &[2, 3, 1, 4, 0]);

        assert_eq!(buffer.f32_data, vec![100.0, 80.0, 140.0, 50.0]);
    }

    #[test]
    fn test_encode_reuses_buffer() {
        let mut buffer = PageBuffer::new();
        buffer.encode(&result(&[30.0; 6]));
        buffer.encode(&result(&[]));
        assert_eq!(buffer.u32_data, vec![MAGIC, SCHEMA_VERSION, 0, 0]);
        assert_eq!(buffer.f32_data, vec![100.0]);
    }

    #[test]
    fn test_visibility_flags() {
        let flags = visibility_flags(PageVisibility {
            displayed: true,
            active: true,
            saving: false,
            printing: false,
        });
        assert_eq!(flags, VIS_DISPLAYED | VIS_ACTIVE);
        assert_eq!(visibility_flags(PageVisibility::default()), 0);
    }
}
