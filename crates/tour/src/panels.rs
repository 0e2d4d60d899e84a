/// Which modal dialog is open.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    /// Detail view for one entry of a hotspot of the active scene.
    Entry { hotspot: usize, entry: usize },
    /// The general information dialog.
    Info,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        *self != ModalState::Closed
    }
}

/// Open/closed state of the overlays around the scene.
///
/// At most one modal is open. Opening a modal closes the side panel.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Panels {
    modal: ModalState,
    sidepanel_open: bool,
    dropdown_open: bool,
}

impl Panels {
    pub fn modal(&self) -> ModalState {
        self.modal
    }

    pub fn is_sidepanel_open(&self) -> bool {
        self.sidepanel_open
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn open_modal(&mut self, modal: ModalState) {
        self.modal = modal;
        if modal.is_open() {
            self.sidepanel_open = false;
        }
    }

    /// Returns `true` if a modal was open.
    pub fn close_modal(&mut self) -> bool {
        std::mem::take(&mut self.modal).is_open()
    }

    /// Returns the new state.
    pub fn toggle_sidepanel(&mut self) -> bool {
        self.sidepanel_open = !self.sidepanel_open;
        self.sidepanel_open
    }

    pub fn close_sidepanel(&mut self) -> bool {
        std::mem::replace(&mut self.sidepanel_open, false)
    }

    pub fn toggle_dropdown(&mut self) -> bool {
        self.dropdown_open = !self.dropdown_open;
        self.dropdown_open
    }

    pub fn close_dropdown(&mut self) -> bool {
        std::mem::replace(&mut self.dropdown_open, false)
    }
}
