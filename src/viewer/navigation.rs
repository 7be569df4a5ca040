//! Page navigation: buttons, page-number input and arrow keys

/// Keys the viewer reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Next,
    Previous,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" => Some(NavKey::Next),
            "ArrowLeft" => Some(NavKey::Previous),
            _ => None,
        }
    }
}

/// Current page within a fixed page count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageNavigator {
    current: usize,
    page_count: usize,
}

impl PageNavigator {
    pub fn new(page_count: usize) -> Self {
        Self {
            current: 0,
            page_count,
        }
    }

    /// Current page index (0-based)
    pub fn current(&self) -> usize {
        self.current
    }

    /// Current page number as shown in the input (1-based)
    pub fn page_number(&self) -> usize {
        self.current + 1
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Jump to a page; out-of-range indices are ignored
    pub fn navigate_to(&mut self, index: usize) -> bool {
        if index < self.page_count {
            self.current = index;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.navigate_to(self.current + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(index) => self.navigate_to(index),
            None => false,
        }
    }

    pub fn can_go_prev(&self) -> bool {
        self.page_count > 0 && self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.page_count
    }

    /// Apply the page-number input. Valid numbers navigate; anything else
    /// is discarded. Returns the number the input should display afterwards.
    pub fn submit_input(&mut self, input: &str) -> usize {
        if let Some(number) = parse_page_number(input) {
            if number >= 1 && number <= self.page_count {
                self.navigate_to(number - 1);
            }
        }
        self.page_number()
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        match NavKey::from_key(key) {
            Some(NavKey::Next) => self.next_page(),
            Some(NavKey::Previous) => self.prev_page(),
            None => false,
        }
    }
}

/// Leading integer of the input, like `parseInt`
fn parse_page_number(input: &str) -> Option<usize> {
    let input = input.trim();
    let end = input
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(input.len());
    input[..end].parse().ok()
}
