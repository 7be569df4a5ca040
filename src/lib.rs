//! Page Viewer: core of a paged table viewer and collapsible sections
//!
//! This crate provides:
//! - Greedy pagination of table rows into fixed-height print pages
//! - Viewer state: page navigation, zoom, PDF export and printing with restore
//! - "Show more / show less" sections with persisted expand state
//! - WASM bindings for the browser host

pub mod error;
pub mod expand;
pub mod layout;
pub mod table;
pub mod viewer;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::{WasmSectionRegistry, WasmViewer};

// Re-export primary types
pub use error::{Error, Result};
pub use expand::{
    should_offer_toggle, ExpandState, ExpandStates, ExpandableSection, KeyValueStore,
    MemoryStore, SectionConfig, SectionId, SectionRegistry,
};
pub use layout::{
    paginate, FixedHeights, MeasureHeight, Page, PageConstraints, PaginationEngine,
    PaginationResult,
};
pub use table::{Header, MeasuredRow, Row, Table};
pub use viewer::{
    ExportKind, ExportOptions, PageVisibility, PdfExporter, Printer, ViewMode, ViewerState, Zoom,
};

/// The document viewer combining paginated pages and viewer state
#[derive(Debug)]
pub struct Viewer {
    pages: PaginationResult,
    state: ViewerState,
    export_options: ExportOptions,
}

impl Viewer {
    /// Create a viewer showing the first page of a pagination result
    pub fn new(pages: PaginationResult) -> Self {
        let state = ViewerState::new(pages.page_count());
        Self {
            pages,
            state,
            export_options: ExportOptions::default(),
        }
    }

    /// Measure and paginate a table, then view it
    pub fn from_table<M: MeasureHeight>(
        table: Table,
        measurer: &mut M,
        constraints: PageConstraints,
    ) -> Result<Self> {
        let pages = PaginationEngine::new(constraints).paginate_table(table, measurer)?;
        Ok(Self::new(pages))
    }

    /// Paginate cell-less rows from heights measured by the host
    pub fn from_heights(
        header_height: f32,
        row_heights: &[f32],
        available_height: f32,
    ) -> Result<Self> {
        let rows = row_heights
            .iter()
            .map(|&height| MeasuredRow::new(Row::default(), height))
            .collect();
        let pages = paginate(&Header::default(), rows, header_height, available_height)?;
        Ok(Self::new(pages))
    }

    pub fn pages(&self) -> &PaginationResult {
        &self.pages
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn page_count(&self) -> usize {
        self.pages.page_count()
    }

    /// Current page index (0-based)
    pub fn current_page(&self) -> usize {
        self.state.navigator.current()
    }

    /// Current page number (1-based)
    pub fn page_number(&self) -> usize {
        self.state.navigator.page_number()
    }

    pub fn navigate_to(&mut self, index: usize) -> bool {
        self.state.navigator.navigate_to(index)
    }

    pub fn next_page(&mut self) -> bool {
        self.state.navigator.next_page()
    }

    pub fn prev_page(&mut self) -> bool {
        self.state.navigator.prev_page()
    }

    /// Whether the previous button is enabled
    pub fn can_go_prev(&self) -> bool {
        self.state.navigator.can_go_prev()
    }

    /// Whether the next button is enabled
    pub fn can_go_next(&self) -> bool {
        self.state.navigator.can_go_next()
    }

    /// Handle a change of the page-number input; returns the number to display
    pub fn submit_page_input(&mut self, input: &str) -> usize {
        self.state.navigator.submit_input(input)
    }

    /// Handle a key press; returns whether the page changed
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.state.navigator.handle_key(key)
    }

    pub fn zoom(&self) -> Zoom {
        self.state.zoom
    }

    /// Apply the zoom select's value; invalid input leaves the zoom unchanged
    pub fn set_zoom(&mut self, value: &str) -> Result<()> {
        self.state.zoom = Zoom::parse(value)?;
        Ok(())
    }

    pub fn mode(&self) -> ViewMode {
        self.state.mode
    }

    pub fn page_visibility(&self, index: usize) -> PageVisibility {
        self.state.page_visibility(index)
    }

    /// Whether the outer container carries the `saving` class (hides the toolbar)
    pub fn container_saving(&self) -> bool {
        self.state.mode == ViewMode::Saving
    }

    pub fn export_options(&self) -> &ExportOptions {
        &self.export_options
    }

    pub fn set_export_options(&mut self, options: ExportOptions) {
        self.export_options = options;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employees(count: usize) -> Table {
        let rows = (0..count)
            .map(|i| Row::new(["".to_string(), format!("Employee {}", i), "Sales".to_string()]))
            .collect();
        Table::new(Header::new(["No.", "Name", "Department"]), rows)
    }

    #[test]
    fn test_create_viewer() {
        let mut heights = FixedHeights::new(40.0, vec![100.0; 25]);
        let viewer =
            Viewer::from_table(employees(25), &mut heights, PageConstraints::default()).unwrap();

        // (960 - 40) / 100 = 9 rows per page
        assert_eq!(viewer.page_count(), 3);
        assert_eq!(viewer.current_page(), 0);
        assert_eq!(viewer.page_number(), 1);
        assert!(!viewer.can_go_prev());
        assert!(viewer.can_go_next());

        let last = viewer.pages().page(2).unwrap();
        assert_eq!(last.rows[0].registration(), Some(19));
        assert_eq!(last.rows[0].cells()[1], "Employee 18");
    }

    #[test]
    fn test_navigation() {
        let mut viewer = Viewer::from_heights(20.0, &[30.0; 8], 100.0).unwrap();
        assert_eq!(viewer.page_count(), 4);

        assert!(viewer.handle_key("ArrowRight"));
        assert_eq!(viewer.current_page(), 1);
        assert_eq!(viewer.submit_page_input("4"), 4);
        assert!(!viewer.can_go_next());
        assert_eq!(viewer.submit_page_input("9"), 4);
        assert!(viewer.prev_page());
        assert!(viewer.page_visibility(2).active);
        assert!(!viewer.page_visibility(3).displayed);
    }

    #[test]
    fn test_zoom() {
        let mut viewer = Viewer::from_heights(20.0, &[30.0], 100.0).unwrap();
        assert_eq!(viewer.zoom().css_transform(), "scale(1)");
        viewer.set_zoom("0.75").unwrap();
        assert_eq!(viewer.zoom().factor(), 0.75);
        assert!(viewer.set_zoom("wide").is_err());
        assert_eq!(viewer.zoom().factor(), 0.75);
    }

    #[test]
    fn test_capacity_error_surfaces() {
        let err = Viewer::from_heights(200.0, &[10.0], 100.0).err().unwrap();
        assert!(matches!(err, Error::Capacity { .. }));
    }

    #[test]
    fn test_capacity_must_be_finite() {
        let err = Viewer::from_heights(20.0, &[10.0, 10.0], f32::NAN).err().unwrap();
        assert!(matches!(err, Error::Capacity { .. }));
        assert!(Viewer::from_heights(20.0, &[10.0], f32::INFINITY).is_err());
    }

    #[test]
    fn test_empty_table() {
        let viewer = Viewer::from_heights(20.0, &[], 100.0).unwrap();
        assert_eq!(viewer.page_count(), 0);
        assert!(!viewer.can_go_prev());
        assert!(!viewer.can_go_next());
    }
}
