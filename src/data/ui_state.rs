//! UI interaction state shared between the core and the frontend
//!
//! Rendering-agnostic: the frontend reads the cursor and status line from
//! here, the core mutates them in response to flow actions.

/// Interaction state for the current screen
#[derive(Clone, Debug)]
pub struct UiState {
    /// Highlighted row on the current menu screen
    pub cursor: usize,

    /// Contextual hint shown in the status line
    pub status_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            status_text: String::from("Ready"),
        }
    }

    /// Move the highlight up one row, wrapping at the top
    pub fn cursor_up(&mut self, item_count: usize) {
        if item_count == 0 {
            return;
        }
        self.cursor = if self.cursor == 0 {
            item_count - 1
        } else {
            self.cursor - 1
        };
    }

    /// Move the highlight down one row, wrapping at the bottom
    pub fn cursor_down(&mut self, item_count: usize) {
        if item_count == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % item_count;
    }

    /// Place the highlight on a specific row (entering a screen seeds it to
    /// the already-selected item, or the top)
    pub fn seed_cursor(&mut self, index: usize) {
        self.cursor = index;
    }

    /// Replace the status line hint
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status_text = text.into();
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps_both_directions() {
        let mut ui = UiState::new();
        ui.cursor_up(4);
        assert_eq!(ui.cursor, 3);
        ui.cursor_down(4);
        assert_eq!(ui.cursor, 0);
        ui.cursor_down(4);
        ui.cursor_down(4);
        ui.cursor_down(4);
        ui.cursor_down(4);
        assert_eq!(ui.cursor, 0);
    }

    #[test]
    fn test_cursor_with_empty_list_stays_put() {
        let mut ui = UiState::new();
        ui.cursor_up(0);
        ui.cursor_down(0);
        assert_eq!(ui.cursor, 0);
    }

    #[test]
    fn test_seed_and_status() {
        let mut ui = UiState::new();
        ui.seed_cursor(2);
        assert_eq!(ui.cursor, 2);
        ui.set_status("Select a side dish");
        assert_eq!(ui.status_text, "Select a side dish");
    }
}
