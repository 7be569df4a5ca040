//! Registry of sections on a page, for expand all / collapse all

use crate::error::{Error, Result};
use crate::expand::{ExpandState, ExpandStates, ExpandableSection, KeyValueStore, SectionConfig};

/// Handle to a section inside a [`SectionRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(pub usize);

/// Sections owned by the page controller
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: Vec<ExpandableSection>,
}

impl SectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an unmounted section
    pub fn add(&mut self, config: SectionConfig) -> SectionId {
        self.sections.push(ExpandableSection::create(config));
        SectionId(self.sections.len() - 1)
    }

    pub fn get(&self, id: SectionId) -> Result<&ExpandableSection> {
        self.sections.get(id.0).ok_or(Error::UnknownSection(id.0))
    }

    fn get_mut(&mut self, id: SectionId) -> Result<&mut ExpandableSection> {
        self.sections.get_mut(id.0).ok_or(Error::UnknownSection(id.0))
    }

    pub fn mount<S: KeyValueStore + ?Sized>(
        &mut self,
        id: SectionId,
        content_heights: &[f32],
        store: &S,
    ) -> Result<()> {
        self.get_mut(id)?.mount(content_heights, store);
        Ok(())
    }

    pub fn toggle<S: KeyValueStore + ?Sized>(&mut self, id: SectionId, store: &mut S) -> Result<bool> {
        self.get_mut(id)?.toggle(store)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &ExpandableSection)> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, section)| (SectionId(i), section))
    }

    fn togglable(&self) -> impl Iterator<Item = &ExpandableSection> {
        self.sections.iter().filter(|section| section.has_more())
    }

    /// Every section that offers a toggle is expanded (false if none do)
    pub fn all_expanded(&self) -> bool {
        let mut togglable = self.togglable().peekable();
        togglable.peek().is_some() && togglable.all(ExpandableSection::is_expanded)
    }

    /// Label of the expand all / collapse all button
    pub fn toggle_all_label(&self) -> &'static str {
        if self.all_expanded() {
            "Collapse All"
        } else {
            "Expand All"
        }
    }

    /// Collapse everything if all togglable sections are expanded, expand everything otherwise.
    ///
    /// All togglable sections are written in a single store update. If that
    /// write fails no section changes. Returns the new button label.
    pub fn toggle_all<S: KeyValueStore + ?Sized>(&mut self, store: &mut S) -> Result<&'static str> {
        let target = if self.all_expanded() {
            ExpandState::Collapsed
        } else {
            ExpandState::Expanded
        };

        let mut states = ExpandStates::load(&*store);
        for section in self.togglable() {
            states.set(section.header_text(), target.is_expanded());
        }
        states.save(store)?;

        for section in &mut self.sections {
            section.set_state(target);
        }

        Ok(self.toggle_all_label())
    }
}
