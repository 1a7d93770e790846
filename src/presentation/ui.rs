use crate::application::{App, AppMode, ConverterView, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let view = app.converter.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let selectors = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[3]);

    render_title(f, chunks[0]);
    render_value_field(f, app, &view, chunks[2]);
    render_selector(f, app, Focus::InputUnit, "From", &view.input_unit, selectors[0]);
    render_selector(f, app, Focus::OutputUnit, "To", &view.output_unit, selectors[1]);
    render_result(f, &view, chunks[5]);
    render_status_bar(f, app, chunks[7]);

    match app.mode {
        AppMode::SelectingUnit => {
            let anchor = if app.focus == Focus::OutputUnit { selectors[1] } else { selectors[0] };
            render_dropdown(f, app, &view, anchor);
        }
        AppMode::Help => render_help_popup(f),
        AppMode::Normal => {}
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        "Unit Converter",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn focus_style(app: &App, focus: Focus) -> Style {
    if app.focus == focus {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

fn render_value_field(f: &mut Frame, app: &App, view: &ConverterView, area: Rect) {
    let inner_width = area.width.saturating_sub(2);
    let cursor = u16::try_from(app.cursor_position).unwrap_or(u16::MAX);
    let offset = value_scroll_offset(cursor, inner_width);

    let field = Paragraph::new(view.input_text.as_str())
        .scroll((0, offset))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Enter Value")
                .border_style(focus_style(app, Focus::Value)),
        );
    f.render_widget(field, area);

    if app.focus == Focus::Value && app.mode == AppMode::Normal && inner_width > 0 {
        let x = area.x + 1 + (cursor - offset);
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// Columns to scroll the value text so the cursor, which may sit one past
/// the last character, stays inside a field `inner_width` cells wide.
fn value_scroll_offset(cursor: u16, inner_width: u16) -> u16 {
    cursor.saturating_sub(inner_width.saturating_sub(1))
}

fn render_selector(f: &mut Frame, app: &App, focus: Focus, title: &str, unit: &str, area: Rect) {
    let expanded = app.mode == AppMode::SelectingUnit && app.focus == focus;
    let indicator = if expanded { "▲" } else { "▼" };
    let selector = Paragraph::new(format!("{unit} {indicator}")).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(focus_style(app, focus)),
    );
    f.render_widget(selector, area);
}

fn render_result(f: &mut Frame, view: &ConverterView, area: Rect) {
    let result = Paragraph::new(Line::from(format!(
        "Result: {} {}",
        view.output_value, view.output_unit
    )))
    .style(Style::default().add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    f.render_widget(result, area);
}

fn render_dropdown(f: &mut Frame, app: &App, view: &ConverterView, anchor: Rect) {
    let frame = f.area();
    let top = anchor.y + anchor.height;
    let wanted = view.units.len() as u16 + 2;
    let height = wanted.min(frame.height.saturating_sub(top));
    if height < 3 {
        return;
    }
    let area = Rect {
        x: anchor.x,
        y: top,
        width: anchor.width,
        height,
    };

    let items: Vec<ListItem> = view.units.iter().map(|u| ListItem::new(u.as_str())).collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.highlighted));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.mode {
        AppMode::Normal => match app.status_message {
            Some(ref status) => status.clone(),
            None if app.focus == Focus::Value => {
                "Type a value | Tab: next control | F1: help | Esc: quit".to_string()
            }
            None => "Enter: choose unit | s: swap units | Tab: next control | F1: help | q: quit"
                .to_string(),
        },
        AppMode::SelectingUnit => "↑↓/jk: move | Enter: select | Esc: cancel".to_string(),
        AppMode::Help => "Esc/F1/q: close help".to_string(),
    };

    let status = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::SelectingUnit => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_widget = Paragraph::new(get_help_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Unit Converter Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> &'static str {
    r#"Converts lengths between centimeters, meters, feet and millimeters.
Results are rounded to two decimal places. Text that is not a number
converts as 0.

Tab / Shift+Tab   Move between value, From and To
Enter / Space     Open the unit list of the focused selector
Up / Down (j/k)   Move through an open unit list
Enter             Select the highlighted unit
Esc               Close the unit list, or quit
s                 Swap From and To
q                 Quit (when a selector has focus)
Ctrl+C            Quit
F1                Show or hide this help"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_result_line() {
        let mut app = App::default();
        app.converter.set_input_text("1");
        app.converter.set_output_unit("Feet").unwrap();

        let screen = render_to_string(&app);
        assert!(screen.contains("Unit Converter"));
        assert!(screen.contains("Enter Value"));
        assert!(screen.contains("Result: 3.28 Feet"));
    }

    #[test]
    fn test_renders_open_dropdown() {
        let mut app = App::default();
        app.focus = Focus::InputUnit;
        app.open_dropdown();

        let screen = render_to_string(&app);
        assert!(screen.contains("Meters ▲"));
        assert!(screen.contains("> Meters"));
        assert!(screen.contains("Centimeters"));
        assert!(screen.contains("Millimeters"));
    }

    #[test]
    fn test_value_scroll_offset() {
        assert_eq!(value_scroll_offset(0, 18), 0);
        assert_eq!(value_scroll_offset(17, 18), 0);
        assert_eq!(value_scroll_offset(18, 18), 1);
        assert_eq!(value_scroll_offset(25, 18), 8);
        assert_eq!(value_scroll_offset(5, 0), 5);
    }

    #[test]
    fn test_long_value_scrolls_with_cursor() {
        let mut app = App::default();
        for c in "1234567890123456789012345".chars() {
            app.insert_char(c);
        }

        let mut terminal = Terminal::new(TestBackend::new(20, 24)).unwrap();
        terminal.draw(|f| render_ui(f, &app)).unwrap();

        // Field is 18 cells wide inside its border; the cursor keeps the last one
        let row: String = (0..20)
            .map(|x| terminal.backend().buffer()[(x, 3)].symbol().to_string())
            .collect();
        assert_eq!(row, "│90123456789012345 │");
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(18, 3));

        app.move_cursor_home();
        terminal.draw(|f| render_ui(f, &app)).unwrap();
        let row: String = (0..20)
            .map(|x| terminal.backend().buffer()[(x, 3)].symbol().to_string())
            .collect();
        assert_eq!(row, "│123456789012345678│");
        assert_eq!(terminal.get_cursor_position().unwrap(), Position::new(1, 3));
    }

    #[test]
    fn test_renders_on_tiny_terminal() {
        let app = App::default();
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        terminal.draw(|f| render_ui(f, &app)).unwrap();
    }
}
