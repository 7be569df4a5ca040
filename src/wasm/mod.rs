//! WASM bindings for the viewer and the collapsible sections

#[cfg(feature = "console_logger")]
mod console;
mod page_buffer;
mod storage;

pub use page_buffer::{
    visibility_flags, PageBuffer, FLAG_OVERSIZED, HEADER_SIZE, MAGIC, SCHEMA_VERSION,
    U32_PER_PAGE, VIS_ACTIVE, VIS_DISPLAYED, VIS_PRINTING, VIS_SAVING,
};
pub use storage::JsStorage;

use wasm_bindgen::prelude::*;

use crate::error::Error;
use crate::expand::{parse_max_height, SectionConfig, SectionId, SectionRegistry};
use crate::layout::PageConstraints;
use crate::viewer::{ExportKind, ExportSnapshot, TRANSFORM_ORIGIN};
use crate::Viewer;

/// Initialize the panic hook and the console logger
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_logger")]
    console::install(if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    });
}

fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-exposed viewer wrapper.
///
/// JS measures the header and rows in a hidden container, builds the viewer
/// from those heights, and rebuilds the page DOM from [`layout_u32`](Self::layout_u32).
#[wasm_bindgen]
pub struct WasmViewer {
    viewer: Viewer,
    buffer: PageBuffer,
    export: Option<ExportSnapshot>,
}

#[wasm_bindgen]
impl WasmViewer {
    /// Create a viewer with the default page geometry
    #[wasm_bindgen(constructor)]
    pub fn new(header_height: f32, row_heights: Vec<f32>) -> Result<WasmViewer, JsValue> {
        let available = PageConstraints::default().available_height();
        Self::with_capacity(header_height, row_heights, available)
    }

    /// Create a viewer with custom page geometry
    #[wasm_bindgen(js_name = withConstraints)]
    pub fn with_constraints(
        header_height: f32,
        row_heights: Vec<f32>,
        page_inner_height: f32,
        vertical_padding: f32,
    ) -> Result<WasmViewer, JsValue> {
        let constraints = PageConstraints {
            page_inner_height,
            vertical_padding,
        };
        Self::with_capacity(header_height, row_heights, constraints.available_height())
    }

    /// Page layout, see the `page_buffer` module for the format
    #[wasm_bindgen(js_name = layoutU32)]
    pub fn layout_u32(&self) -> Vec<u32> {
        self.buffer.u32_data.clone()
    }

    /// Page heights, first entry is the page capacity
    #[wasm_bindgen(js_name = layoutF32)]
    pub fn layout_f32(&self) -> Vec<f32> {
        self.buffer.f32_data.clone()
    }

    /// One visibility flag byte per page
    #[wasm_bindgen(js_name = visibilityFlags)]
    pub fn visibility_flags(&self) -> Vec<u8> {
        (0..self.viewer.page_count())
            .map(|i| visibility_flags(self.viewer.page_visibility(i)))
            .collect()
    }

    #[wasm_bindgen(js_name = getPageCount)]
    pub fn get_page_count(&self) -> usize {
        self.viewer.page_count()
    }

    #[wasm_bindgen(js_name = getCurrentPage)]
    pub fn get_current_page(&self) -> usize {
        self.viewer.current_page()
    }

    #[wasm_bindgen(js_name = getPageNumber)]
    pub fn get_page_number(&self) -> usize {
        self.viewer.page_number()
    }

    #[wasm_bindgen(js_name = navigateTo)]
    pub fn navigate_to(&mut self, index: usize) -> bool {
        self.viewer.navigate_to(index)
    }

    #[wasm_bindgen(js_name = nextPage)]
    pub fn next_page(&mut self) -> bool {
        self.viewer.next_page()
    }

    #[wasm_bindgen(js_name = prevPage)]
    pub fn prev_page(&mut self) -> bool {
        self.viewer.prev_page()
    }

    #[wasm_bindgen(js_name = canGoPrev)]
    pub fn can_go_prev(&self) -> bool {
        self.viewer.can_go_prev()
    }

    #[wasm_bindgen(js_name = canGoNext)]
    pub fn can_go_next(&self) -> bool {
        self.viewer.can_go_next()
    }

    /// Handle the page-number input; returns the value to show in it
    #[wasm_bindgen(js_name = submitPageInput)]
    pub fn submit_page_input(&mut self, input: &str) -> usize {
        self.viewer.submit_page_input(input)
    }

    /// Handle `KeyboardEvent.key`
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.viewer.handle_key(key)
    }

    #[wasm_bindgen(js_name = setZoom)]
    pub fn set_zoom(&mut self, value: &str) -> Result<(), JsValue> {
        self.viewer.set_zoom(value).map_err(to_js)
    }

    #[wasm_bindgen(js_name = getZoomTransform)]
    pub fn get_zoom_transform(&self) -> String {
        self.viewer.zoom().css_transform()
    }

    #[wasm_bindgen(js_name = getTransformOrigin)]
    pub fn get_transform_origin(&self) -> String {
        TRANSFORM_ORIGIN.to_string()
    }

    #[wasm_bindgen(js_name = isContainerSaving)]
    pub fn is_container_saving(&self) -> bool {
        self.viewer.container_saving()
    }

    /// Options object for the PDF library, as JSON
    #[wasm_bindgen(js_name = getExportOptions)]
    pub fn get_export_options(&self) -> Result<String, JsValue> {
        self.viewer.export_options().to_json().map_err(to_js)
    }

    /// Prepare for `"pdf"` or `"print"`. JS must call `endExport` in a `finally`.
    /// Returns false if an export is already in progress.
    #[wasm_bindgen(js_name = beginExport)]
    pub fn begin_export(&mut self, kind: &str) -> Result<bool, JsValue> {
        let kind = match kind {
            "pdf" => ExportKind::Pdf,
            "print" => ExportKind::Print,
            other => {
                return Err(to_js(Error::Export(format!("unknown export kind {:?}", other))))
            }
        };
        if self.export.is_some() {
            return Ok(false);
        }
        self.export = Some(self.viewer.enter_export(kind));
        Ok(true)
    }

    /// Restore zoom and the visible page after an export, whatever its outcome
    #[wasm_bindgen(js_name = endExport)]
    pub fn end_export(&mut self) {
        if let Some(snapshot) = self.export.take() {
            self.viewer.restore_view(snapshot);
        }
    }

    /// Log a failed export reported by JS
    #[wasm_bindgen(js_name = reportExportError)]
    pub fn report_export_error(&self, message: &str) {
        log::error!("error generating PDF: {}", message);
    }
}

impl WasmViewer {
    fn with_capacity(
        header_height: f32,
        row_heights: Vec<f32>,
        available_height: f32,
    ) -> Result<WasmViewer, JsValue> {
        let viewer =
            Viewer::from_heights(header_height, &row_heights, available_height).map_err(to_js)?;
        let mut buffer = PageBuffer::new();
        buffer.encode(viewer.pages());

        Ok(Self {
            viewer,
            buffer,
            export: None,
        })
    }
}

/// WASM-exposed registry of collapsible sections
#[wasm_bindgen]
pub struct WasmSectionRegistry {
    registry: SectionRegistry,
    storage: JsStorage,
}

#[wasm_bindgen]
impl WasmSectionRegistry {
    /// `storage` is any object with `getItem` / `setItem`, usually `localStorage`
    #[wasm_bindgen(constructor)]
    pub fn new(storage: JsValue) -> Self {
        Self {
            registry: SectionRegistry::new(),
            storage: JsStorage::new(storage),
        }
    }

    /// Register a section; `max_height` is the raw `--list-max-height` value
    pub fn add(&mut self, header_text: &str, max_height: &str) -> usize {
        let config = SectionConfig::new(header_text).with_max_height(parse_max_height(max_height));
        self.registry.add(config).0
    }

    /// Measure slotted content and restore persisted state
    pub fn mount(&mut self, id: usize, content_heights: Vec<f32>) -> Result<(), JsValue> {
        self.registry
            .mount(SectionId(id), &content_heights, &self.storage)
            .map_err(to_js)
    }

    pub fn toggle(&mut self, id: usize) -> Result<bool, JsValue> {
        self.registry
            .toggle(SectionId(id), &mut self.storage)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = isExpanded)]
    pub fn is_expanded(&self, id: usize) -> Result<bool, JsValue> {
        Ok(self.registry.get(SectionId(id)).map_err(to_js)?.is_expanded())
    }

    /// Whether the toggle button is shown
    #[wasm_bindgen(js_name = hasMore)]
    pub fn has_more(&self, id: usize) -> Result<bool, JsValue> {
        Ok(self.registry.get(SectionId(id)).map_err(to_js)?.has_more())
    }

    #[wasm_bindgen(js_name = getButtonLabel)]
    pub fn get_button_label(&self, id: usize) -> Result<String, JsValue> {
        let section = self.registry.get(SectionId(id)).map_err(to_js)?;
        Ok(section.button_label().to_string())
    }

    #[wasm_bindgen(js_name = allExpanded)]
    pub fn all_expanded(&self) -> bool {
        self.registry.all_expanded()
    }

    /// Expand or collapse every togglable section; returns the new button label
    #[wasm_bindgen(js_name = toggleAll)]
    pub fn toggle_all(&mut self) -> Result<String, JsValue> {
        self.registry
            .toggle_all(&mut self.storage)
            .map(str::to_string)
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = getToggleAllLabel)]
    pub fn get_toggle_all_label(&self) -> String {
        self.registry.toggle_all_label().to_string()
    }
}
