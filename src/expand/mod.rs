//! Collapsible "show more / show less" sections

mod registry;
mod store;

pub use registry::{SectionId, SectionRegistry};
pub use store::{persist, ExpandStates, KeyValueStore, MemoryStore, STATE_KEY};

#[cfg(test)]
pub(crate) use store::QuotaStore;

use crate::error::Result;

/// Collapsed height used when no maximum is configured
pub const DEFAULT_MAX_HEIGHT: f32 = 100.0;

/// Whether content is tall enough to need a toggle
pub fn should_offer_toggle(content_height: f32, max_height: f32) -> bool {
    content_height > max_height
}

/// Parse a CSS length such as `"150px"` by its leading integer.
///
/// Falls back to [`DEFAULT_MAX_HEIGHT`] when there are no digits or the value is zero.
pub fn parse_max_height(value: &str) -> f32 {
    let value = value.trim();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1.0f64, rest),
        None => (1.0, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<f64>() {
        Ok(n) if n > 0.0 => (sign * n) as f32,
        _ => DEFAULT_MAX_HEIGHT,
    }
}

/// Expand state of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpandState {
    #[default]
    Collapsed,
    Expanded,
}

impl ExpandState {
    pub fn from_expanded(expanded: bool) -> Self {
        if expanded {
            ExpandState::Expanded
        } else {
            ExpandState::Collapsed
        }
    }

    pub fn is_expanded(self) -> bool {
        self == ExpandState::Expanded
    }

    pub fn flipped(self) -> Self {
        match self {
            ExpandState::Collapsed => ExpandState::Expanded,
            ExpandState::Expanded => ExpandState::Collapsed,
        }
    }

    /// Text of the toggle button in this state
    pub fn button_label(self) -> &'static str {
        match self {
            ExpandState::Collapsed => "Show More",
            ExpandState::Expanded => "Show Less",
        }
    }
}

/// Creation-time settings of a section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionConfig {
    /// Header text; also the persistence key
    pub header_text: String,
    pub max_height: f32,
}

impl SectionConfig {
    pub fn new(header_text: impl Into<String>) -> Self {
        Self {
            header_text: header_text.into(),
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }

    pub fn with_max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }
}

/// A collapsible section.
///
/// Created unmounted; [`mount`](Self::mount) measures the content, decides
/// whether a toggle is offered and restores the persisted state.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandableSection {
    config: SectionConfig,
    state: ExpandState,
    content_height: f32,
    has_more: bool,
    mounted: bool,
}

impl ExpandableSection {
    pub fn create(config: SectionConfig) -> Self {
        Self {
            config,
            state: ExpandState::Collapsed,
            content_height: 0.0,
            has_more: false,
            mounted: false,
        }
    }

    /// Measure content (sum of the slotted element heights) and restore state
    pub fn mount<S: KeyValueStore + ?Sized>(&mut self, content_heights: &[f32], store: &S) {
        self.content_height = content_heights.iter().sum();
        self.has_more = should_offer_toggle(self.content_height, self.config.max_height);
        self.mounted = true;

        self.state = if self.has_more {
            let states = ExpandStates::load(store);
            ExpandState::from_expanded(states.is_expanded(&self.config.header_text))
        } else {
            ExpandState::Collapsed
        };

        log::debug!(
            "mounted section {:?}: content {} / max {}, toggle {}, {:?}",
            self.config.header_text,
            self.content_height,
            self.config.max_height,
            self.has_more,
            self.state
        );
    }

    /// Flip the state and persist it. Returns `false` when no toggle is offered.
    ///
    /// The in-memory state flips even if the store write fails.
    pub fn toggle<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Result<bool> {
        if !self.has_more {
            return Ok(false);
        }
        self.state = self.state.flipped();
        self.save(store)?;
        Ok(true)
    }

    /// Force a state without persisting
    pub(crate) fn set_state(&mut self, state: ExpandState) {
        if self.has_more {
            self.state = state;
        }
    }

    fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        persist(store, &self.config.header_text, self.state.is_expanded())
    }

    pub fn header_text(&self) -> &str {
        &self.config.header_text
    }

    pub fn config(&self) -> &SectionConfig {
        &self.config
    }

    pub fn state(&self) -> ExpandState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Content is fully visible: expanded, or short enough that nothing is clipped
    pub fn is_effectively_expanded(&self) -> bool {
        !self.has_more || self.is_expanded()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Whether the toggle button is shown
    pub fn toggle_visible(&self) -> bool {
        self.has_more
    }

    pub fn button_label(&self) -> &'static str {
        self.state.button_label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_should_offer_toggle() {
        assert!(should_offer_toggle(150.0, 100.0));
        assert!(!should_offer_toggle(100.0, 100.0));
        assert!(!should_offer_toggle(40.0, 100.0));
    }

    #[test]
    fn test_parse_max_height() {
        assert_eq!(parse_max_height("150px"), 150.0);
        assert_eq!(parse_max_height(" 200 "), 200.0);
        assert_eq!(parse_max_height("12.5rem"), 12.0);
        assert_eq!(parse_max_height(""), DEFAULT_MAX_HEIGHT);
        assert_eq!(parse_max_height("auto"), DEFAULT_MAX_HEIGHT);
        assert_eq!(parse_max_height("0px"), DEFAULT_MAX_HEIGHT);
    }

    #[test]
    fn test_parse_max_height_large_values() {
        assert_eq!(parse_max_height("5000000000px"), 5.0e9);
        assert_eq!(parse_max_height("4294967296"), 4294967296.0);

        let section = ExpandableSection::create(
            SectionConfig::new("Archive").with_max_height(parse_max_height("5000000000px")),
        );
        assert!(!should_offer_toggle(10_000.0, section.config().max_height));
    }

    #[test]
    fn test_mount_collapsed_by_default() {
        let store = MemoryStore::new();
        let mut section = ExpandableSection::create(SectionConfig::new("Skills"));
        assert!(!section.is_mounted());

        section.mount(&[80.0, 70.0], &store);
        assert!(section.is_mounted());
        assert_eq!(section.content_height(), 150.0);
        assert!(section.has_more());
        assert!(section.toggle_visible());
        assert_eq!(section.state(), ExpandState::Collapsed);
        assert_eq!(section.button_label(), "Show More");
    }

    #[test]
    fn test_mount_restores_expanded() {
        let mut store = MemoryStore::new();
        persist(&mut store, "Skills", true).unwrap();

        let mut section = ExpandableSection::create(SectionConfig::new("Skills"));
        section.mount(&[150.0], &store);
        assert!(section.is_expanded());
        assert_eq!(section.button_label(), "Show Less");
    }

    #[test]
    fn test_short_content_has_no_toggle() {
        let mut store = MemoryStore::new();
        persist(&mut store, "Contact", true).unwrap();

        let mut section = ExpandableSection::create(SectionConfig::new("Contact"));
        section.mount(&[60.0], &store);
        assert!(!section.has_more());
        assert!(!section.toggle_visible());
        assert_eq!(section.state(), ExpandState::Collapsed);
        assert!(section.is_effectively_expanded());

        assert!(!section.toggle(&mut store).unwrap());
        assert_eq!(section.state(), ExpandState::Collapsed);
    }

    #[test]
    fn test_toggle_persists() {
        let mut store = MemoryStore::new();
        let mut section =
            ExpandableSection::create(SectionConfig::new("Experience").with_max_height(50.0));
        section.mount(&[75.0], &store);

        assert!(section.toggle(&mut store).unwrap());
        assert!(section.is_expanded());
        assert!(ExpandStates::load(&store).is_expanded("Experience"));

        assert!(section.toggle(&mut store).unwrap());
        assert!(!section.is_expanded());
        assert!(!ExpandStates::load(&store).is_expanded("Experience"));
    }

    #[test]
    fn test_toggle_with_failing_store() {
        let mut store = QuotaStore::new(1);
        let mut section = ExpandableSection::create(SectionConfig::new("Skills"));
        section.mount(&[150.0], &store);

        assert!(section.toggle(&mut store).unwrap());
        assert!(section.is_expanded());

        let err = section.toggle(&mut store).unwrap_err();
        assert_eq!(err, Error::Storage("quota exceeded".to_string()));
        assert!(!section.is_expanded());
        assert_eq!(section.button_label(), "Show More");

        // The last successful write is what a reload sees
        assert!(ExpandStates::load(&store).is_expanded("Skills"));
    }

    #[test]
    fn test_malformed_store_falls_back() {
        let mut store = MemoryStore::new();
        store.set(STATE_KEY, "oops").unwrap();

        let mut section = ExpandableSection::create(SectionConfig::new("Skills"));
        section.mount(&[500.0], &store);
        assert_eq!(section.state(), ExpandState::Collapsed);

        section.toggle(&mut store).unwrap();
        assert!(ExpandStates::load(&store).is_expanded("Skills"));
    }
}
