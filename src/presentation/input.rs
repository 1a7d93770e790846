use crate::application::{App, AppMode, Focus};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            app.quit();
            return;
        }

        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key),
            AppMode::SelectingUnit => Self::handle_selecting_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::F(1) => {
                app.toggle_help();
                return;
            }
            KeyCode::Esc => {
                app.quit();
                return;
            }
            KeyCode::Tab => {
                app.focus_next();
                return;
            }
            KeyCode::BackTab => {
                app.focus_previous();
                return;
            }
            _ => {}
        }

        app.status_message = None;

        if app.focus.is_selector() {
            Self::handle_selector_focus(app, key);
        } else {
            Self::handle_value_focus(app, key);
        }
    }

    fn handle_value_focus(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char(c) => app.insert_char(c),
            KeyCode::Backspace => app.delete_char_before_cursor(),
            KeyCode::Delete => app.delete_char_at_cursor(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Home => app.move_cursor_home(),
            KeyCode::End => app.move_cursor_end(),
            KeyCode::Enter | KeyCode::Down => app.focus_next(),
            _ => {}
        }
    }

    fn handle_selector_focus(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => app.open_dropdown(),
            KeyCode::Left if app.focus == Focus::OutputUnit => app.focus = Focus::InputUnit,
            KeyCode::Right if app.focus == Focus::InputUnit => app.focus = Focus::OutputUnit,
            KeyCode::Up => app.focus = Focus::Value,
            KeyCode::Char('s') => app.swap_units(),
            KeyCode::Char('q') => app.quit(),
            _ => {}
        }
    }

    fn handle_selecting_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.highlight_previous(),
            KeyCode::Down | KeyCode::Char('j') => app.highlight_next(),
            KeyCode::Enter | KeyCode::Char(' ') => app.confirm_selection(),
            KeyCode::Esc => app.cancel_selection(),
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') | KeyCode::Char('?') => {
                app.toggle_help();
            }
            _ => {}
        }
    }
}
