//! Pagination of table rows into fixed-height pages

use std::ops::Range;

use crate::error::{Error, Result};
use crate::layout::MeasureHeight;
use crate::table::{Header, MeasuredRow, Row, Table};

/// Vertical page geometry, in the same unit the measurer reports
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageConstraints {
    /// Inner height of a simulated A4 page
    pub page_inner_height: f32,
    /// Padding above and below the table
    pub vertical_padding: f32,
}

impl Default for PageConstraints {
    fn default() -> Self {
        Self {
            page_inner_height: 1000.0,
            vertical_padding: 20.0,
        }
    }
}

impl PageConstraints {
    /// Height available to header plus rows on each page
    pub fn available_height(&self) -> f32 {
        self.page_inner_height - self.vertical_padding * 2.0
    }
}

/// One output page: a header copy and a contiguous run of rows
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Page index (0-based)
    pub index: usize,
    pub header: Header,
    pub rows: Vec<Row>,
    /// Accumulated height, header included
    pub height: f32,
}

impl Page {
    fn new(index: usize, header: Header, header_height: f32) -> Self {
        Self {
            index,
            header,
            rows: Vec::new(),
            height: header_height,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Ordered pages produced by one pagination pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaginationResult {
    pages: Vec<Page>,
    available_height: f32,
}

impl PaginationResult {
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Capacity the pages were filled against
    pub fn available_height(&self) -> f32 {
        self.available_height
    }

    pub fn row_count(&self) -> usize {
        self.pages.iter().map(Page::row_count).sum()
    }

    /// Rows of every page, in order
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.pages.iter().flat_map(|page| page.rows.iter())
    }

    /// Source row indices covered by a page
    pub fn row_range(&self, page_index: usize) -> Option<Range<usize>> {
        let page = self.pages.get(page_index)?;
        let start: usize = self.pages[..page_index].iter().map(Page::row_count).sum();
        Some(start..start + page.row_count())
    }

    /// Whether a page holds a single row taller than the page body
    pub fn is_oversized(&self, page_index: usize) -> bool {
        self.pages
            .get(page_index)
            .is_some_and(|page| page.row_count() == 1 && page.height > self.available_height)
    }

    pub fn into_pages(self) -> Vec<Page> {
        self.pages
    }
}

/// Distributes measured table rows over pages of fixed capacity
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginationEngine {
    constraints: PageConstraints,
}

impl PaginationEngine {
    pub fn new(constraints: PageConstraints) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> &PageConstraints {
        &self.constraints
    }

    /// Measure the header and every row once, then paginate
    pub fn paginate_table<M: MeasureHeight>(
        &self,
        table: Table,
        measurer: &mut M,
    ) -> Result<PaginationResult> {
        let header_height = measurer.header_height(&table.header);
        let rows = table
            .rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                let height = measurer.row_height(index, &row);
                MeasuredRow::new(row, height)
            })
            .collect();

        paginate(
            &table.header,
            rows,
            header_height,
            self.constraints.available_height(),
        )
    }
}

/// Greedy first-fit distribution of rows into pages.
///
/// Rows are taken in order; a page closes when the next row would push it
/// past `available_height`. The first row of a page is always accepted, so
/// a row taller than the page body ends up alone on its own page. After
/// filling, registration numbers are rewritten as `1..=N` across all pages.
pub fn paginate(
    header: &Header,
    rows: Vec<MeasuredRow>,
    header_height: f32,
    available_height: f32,
) -> Result<PaginationResult> {
    check_height(None, header_height)?;
    if !available_height.is_finite() || header_height > available_height {
        return Err(Error::Capacity {
            header_height,
            available_height,
        });
    }
    for (index, measured) in rows.iter().enumerate() {
        check_height(Some(index), measured.height)?;
    }

    let row_count = rows.len();
    let mut pages: Vec<Page> = Vec::new();
    let mut current: Option<Page> = None;

    for MeasuredRow { row, height } in rows {
        let fits = current
            .as_ref()
            .is_some_and(|page| page.height + height <= available_height);

        if !fits {
            if let Some(full) = current.take() {
                pages.push(full);
            }
        }

        // Empty pages always take the next row
        let page = current
            .get_or_insert_with(|| Page::new(pages.len(), header.clone(), header_height));
        page.height += height;
        page.rows.push(row);
    }
    pages.extend(current);

    let mut registration = 1;
    for page in &mut pages {
        for row in &mut page.rows {
            row.set_registration(registration);
            registration += 1;
        }
    }

    log::debug!(
        "paginated {} rows into {} pages (capacity {})",
        row_count,
        pages.len(),
        available_height
    );

    Ok(PaginationResult {
        pages,
        available_height,
    })
}

fn check_height(row: Option<usize>, height: f32) -> Result<()> {
    if height.is_finite() && height >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidHeight { row, height })
    }
}
