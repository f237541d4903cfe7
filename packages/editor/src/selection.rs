//! Word selection and the headline editing gate.
//!
//! The headline text accepts direct edits only while no word is selected.
//! Clearing the selection is the only way to unlock it again.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordSelection {
    selected: Option<usize>,
}

impl WordSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle selection of `index`; selecting the selected word clears it
    pub fn select_word(&mut self, index: usize) -> Option<usize> {
        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Whether the whole headline accepts text edits
    pub fn is_editable(&self) -> bool {
        self.selected.is_none()
    }
}
