//! Viewer state: navigation, zoom and export modes

mod export;
mod navigation;
mod zoom;

pub use export::{
    CanvasOptions, DocumentOptions, ExportKind, ExportOptions, ExportSession, ExportSnapshot,
    ImageOptions, PdfExporter, Printer,
};
pub use navigation::{NavKey, PageNavigator};
pub use zoom::{Zoom, TRANSFORM_ORIGIN};

/// What the pages container is currently used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// One page at a time
    #[default]
    Browsing,
    /// All pages shown for PDF capture
    Saving,
    /// All pages shown for the print dialog
    Printing,
}

/// How one page element should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageVisibility {
    /// `display: block` vs `none`
    pub displayed: bool,
    /// Carries the `active` class
    pub active: bool,
    /// Carries the `saving` class
    pub saving: bool,
    /// Carries the `printing` class
    pub printing: bool,
}

/// Mutable state of the viewer chrome
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewerState {
    pub navigator: PageNavigator,
    pub zoom: Zoom,
    pub mode: ViewMode,
}

impl ViewerState {
    pub fn new(page_count: usize) -> Self {
        Self {
            navigator: PageNavigator::new(page_count),
            ..Self::default()
        }
    }

    pub fn page_visibility(&self, index: usize) -> PageVisibility {
        if index >= self.navigator.page_count() {
            return PageVisibility::default();
        }
        match self.mode {
            ViewMode::Browsing => {
                let current = index == self.navigator.current();
                PageVisibility {
                    displayed: current,
                    active: current,
                    ..PageVisibility::default()
                }
            }
            ViewMode::Saving => PageVisibility {
                displayed: true,
                saving: true,
                ..PageVisibility::default()
            },
            ViewMode::Printing => PageVisibility {
                displayed: true,
                printing: true,
                ..PageVisibility::default()
            },
        }
    }
}
