use ratatui::widgets::ListState;

/// Scroll position of the feed list.
#[derive(Debug, Default)]
pub struct ListView {
    state: ListState,
    len: usize,
}

impl ListView {
    /// Selects the newest row, which scrolls it into view on the next draw.
    pub fn scroll_to_end(&mut self, len: usize) {
        self.len = len;
        self.state.select(len.checked_sub(1));
    }

    /// Keeps the selection valid after the list changed size (e.g. cleared).
    pub fn sync_len(&mut self, len: usize) {
        self.len = len;
        match self.state.selected() {
            _ if len == 0 => {
                self.state.select(None);
                *self.state.offset_mut() = 0;
            }
            Some(selected) if selected >= len => self.state.select(Some(len - 1)),
            _ => {}
        }
    }

    pub fn scroll_up(&mut self) {
        if self.len == 0 {
            return;
        }
        let next = self.state.selected().map_or(0, |selected| selected.saturating_sub(1));
        self.state.select(Some(next));
    }

    pub fn scroll_down(&mut self) {
        if self.len == 0 {
            return;
        }
        let next = self
            .state
            .selected()
            .map_or(0, |selected| (selected + 1).min(self.len - 1));
        self.state.select(Some(next));
    }

    pub fn scroll_top(&mut self) {
        if self.len > 0 {
            self.state.select(Some(0));
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn state_mut(&mut self) -> &mut ListState {
        &mut self.state
    }
}
