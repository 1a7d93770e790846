//! Terminal session state wrapped around the converter.

use super::state::{ConverterEvent, ConverterState};

/// Which control on the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The "Enter Value" text field
    Value,
    /// The "from" unit selector
    InputUnit,
    /// The "to" unit selector
    OutputUnit,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Value => Focus::InputUnit,
            Focus::InputUnit => Focus::OutputUnit,
            Focus::OutputUnit => Focus::Value,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Value => Focus::OutputUnit,
            Focus::InputUnit => Focus::Value,
            Focus::OutputUnit => Focus::InputUnit,
        }
    }

    pub fn is_selector(self) -> bool {
        matches!(self, Focus::InputUnit | Focus::OutputUnit)
    }
}

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Editing the value or moving between controls
    Normal,
    /// The dropdown of the focused selector is open
    SelectingUnit,
    /// Help popup is displayed
    Help,
}

/// Main application state: one converter session plus UI state.
///
/// # Examples
///
/// ```
/// use unit_converter::application::{App, Focus};
///
/// let app = App::default();
/// assert_eq!(app.focus, Focus::Value);
/// assert_eq!(app.converter.input_unit().name, "Meters");
/// ```
#[derive(Debug)]
pub struct App {
    /// The converter session
    pub converter: ConverterState,
    /// Control receiving key presses
    pub focus: Focus,
    /// Current application mode
    pub mode: AppMode,
    /// Highlighted row of the open dropdown
    pub highlighted: usize,
    /// Cursor position within the value text, in characters
    pub cursor_position: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Set once the user asks to leave
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(ConverterState::default())
    }
}

impl App {
    pub fn new(converter: ConverterState) -> Self {
        let cursor_position = converter.input_text().chars().count();
        Self {
            converter,
            focus: Focus::Value,
            mode: AppMode::Normal,
            highlighted: 0,
            cursor_position,
            status_message: None,
            should_quit: false,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn insert_char(&mut self, c: char) {
        let mut text = self.converter.input_text().to_string();
        let offset = self.byte_offset(self.cursor_position);
        text.insert(offset, c);
        self.cursor_position += 1;
        self.converter.set_input_text(text);
    }

    /// Removes the character before the cursor.
    pub fn delete_char_before_cursor(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        self.remove_char_at(self.cursor_position);
    }

    /// Removes the character under the cursor.
    pub fn delete_char_at_cursor(&mut self) {
        if self.cursor_position < self.text_len() {
            self.remove_char_at(self.cursor_position);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor_position = (self.cursor_position + 1).min(self.text_len());
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.text_len();
    }

    /// Opens the dropdown of the focused selector with its current unit
    /// highlighted. Does nothing while the value field has focus.
    pub fn open_dropdown(&mut self) {
        let current = match self.focus {
            Focus::InputUnit => &self.converter.input_unit().name,
            Focus::OutputUnit => &self.converter.output_unit().name,
            Focus::Value => return,
        };
        self.highlighted = self.converter.table().position(current).unwrap_or(0);
        self.mode = AppMode::SelectingUnit;
        self.status_message = None;
    }

    pub fn highlight_next(&mut self) {
        let last = self.converter.units().len().saturating_sub(1);
        self.highlighted = (self.highlighted + 1).min(last);
    }

    pub fn highlight_previous(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    /// Applies the highlighted unit to the focused selector and closes the
    /// dropdown.
    pub fn confirm_selection(&mut self) {
        self.mode = AppMode::Normal;
        let Some(unit) = self.converter.table().get(self.highlighted) else {
            return;
        };
        let name = unit.name.clone();
        let event = match self.focus {
            Focus::InputUnit => ConverterEvent::InputUnitSelected(name),
            Focus::OutputUnit => ConverterEvent::OutputUnitSelected(name),
            Focus::Value => return,
        };
        if let Err(err) = self.converter.apply(event) {
            self.status_message = Some(err.to_string());
        }
    }

    pub fn cancel_selection(&mut self) {
        self.mode = AppMode::Normal;
    }

    pub fn swap_units(&mut self) {
        self.converter.swap_units();
        self.status_message = Some(format!(
            "Converting {} to {}",
            self.converter.input_unit().name,
            self.converter.output_unit().name
        ));
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Help => AppMode::Normal,
            _ => AppMode::Help,
        };
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn text_len(&self) -> usize {
        self.converter.input_text().chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        let text = self.converter.input_text();
        text.char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(text.len())
    }

    fn remove_char_at(&mut self, char_index: usize) {
        let mut text = self.converter.input_text().to_string();
        let offset = self.byte_offset(char_index);
        if offset < text.len() {
            text.remove(offset);
            self.converter.set_input_text(text);
        }
    }
}
