//! PDF export and printing through external collaborators

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::Page;
use crate::viewer::{ViewMode, Zoom};
use crate::Viewer;

/// Which export the viewer is preparing for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Pdf,
    Print,
}

impl ExportKind {
    fn mode(self) -> ViewMode {
        match self {
            ExportKind::Pdf => ViewMode::Saving,
            ExportKind::Print => ViewMode::Printing,
        }
    }
}

/// Options handed to the host PDF library, serialized in its camelCase shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    /// Top, right, bottom, left
    pub margin: [f32; 4],
    pub filename: String,
    pub image: ImageOptions,
    #[serde(rename = "html2canvas")]
    pub canvas: CanvasOptions,
    #[serde(rename = "jsPDF")]
    pub document: DocumentOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOptions {
    #[serde(rename = "type")]
    pub format: String,
    pub quality: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasOptions {
    pub scale: f32,
    #[serde(rename = "useCORS")]
    pub use_cors: bool,
    pub letter_rendering: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOptions {
    pub unit: String,
    pub format: String,
    pub orientation: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            margin: [0.0; 4],
            filename: "employee-listing.pdf".to_string(),
            image: ImageOptions {
                format: "jpeg".to_string(),
                quality: 0.98,
            },
            canvas: CanvasOptions {
                scale: 2.0,
                use_cors: true,
                letter_rendering: true,
            },
            document: DocumentOptions {
                unit: "mm".to_string(),
                format: "a4".to_string(),
                orientation: "portrait".to_string(),
            },
        }
    }
}

impl ExportOptions {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| Error::Export(err.to_string()))
    }
}

/// Renders the pages container to a PDF file
pub trait PdfExporter {
    fn export(&mut self, pages: &[Page], options: &ExportOptions) -> Result<()>;
}

/// Sends the pages to the print dialog
pub trait Printer {
    fn print(&mut self, pages: &[Page]) -> Result<()>;
}

/// Viewer state captured before an export
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportSnapshot {
    pub kind: ExportKind,
    pub zoom: Zoom,
}

/// Viewer prepared for export; restores the previous view when dropped
pub struct ExportSession<'a> {
    viewer: &'a mut Viewer,
    snapshot: ExportSnapshot,
}

impl<'a> ExportSession<'a> {
    pub(crate) fn new(viewer: &'a mut Viewer, kind: ExportKind) -> Self {
        let snapshot = viewer.enter_export(kind);
        Self { viewer, snapshot }
    }

    pub fn kind(&self) -> ExportKind {
        self.snapshot.kind
    }

    pub fn pages(&self) -> &[Page] {
        self.viewer.pages().pages()
    }

    pub fn viewer(&self) -> &Viewer {
        &*self.viewer
    }
}

impl Drop for ExportSession<'_> {
    fn drop(&mut self) {
        self.viewer.restore_view(self.snapshot);
    }
}

impl Viewer {
    /// Zoom to 1 and show every page; returns what [`restore_view`](Self::restore_view) needs
    pub fn enter_export(&mut self, kind: ExportKind) -> ExportSnapshot {
        let snapshot = ExportSnapshot {
            kind,
            zoom: self.zoom(),
        };
        self.state.zoom = Zoom::default();
        self.state.mode = kind.mode();
        snapshot
    }

    /// Return to browsing with the zoom and page from before the export
    pub fn restore_view(&mut self, snapshot: ExportSnapshot) {
        self.state.zoom = snapshot.zoom;
        self.state.mode = ViewMode::Browsing;
    }

    /// Prepare for an export driven by the caller; the view is restored when the session drops
    pub fn begin_export(&mut self, kind: ExportKind) -> ExportSession<'_> {
        ExportSession::new(self, kind)
    }

    /// Export all pages to PDF. Failures are logged and returned; the view is restored either way.
    pub fn save_pdf<E: PdfExporter + ?Sized>(&mut self, exporter: &mut E) -> Result<()> {
        let options = self.export_options().clone();
        let session = self.begin_export(ExportKind::Pdf);
        let result = exporter.export(session.pages(), &options);
        drop(session);

        if let Err(err) = &result {
            log::error!("error generating PDF: {}", err);
        }
        result
    }

    /// Print all pages; the view is restored afterwards
    pub fn print<P: Printer + ?Sized>(&mut self, printer: &mut P) -> Result<()> {
        let session = self.begin_export(ExportKind::Print);
        let result = printer.print(session.pages());
        drop(session);

        if let Err(err) = &result {
            log::error!("error printing: {}", err);
        }
        result
    }
}
