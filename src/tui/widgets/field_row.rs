//! Shared bordered-row rendering for form fields.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Height of one rendered field row, border included.
pub const ROW_HEIGHT: u16 = 3;

/// Renders one bordered field row: label as the block title, current value
/// inside, focus and error reflected in the border color. A validation error
/// overlaps the bottom border in red.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_field_row(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    required: bool,
    error: Option<&str>,
) {
    let border_color = if error.is_some() {
        Color::Red
    } else if focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let title = if required {
        format!("{label} *")
    } else {
        label.to_string()
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let content = if value.is_empty() && !focused {
        Span::styled("—", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(value)
    };

    let paragraph = Paragraph::new(Line::from(content)).block(block);
    frame.render_widget(paragraph, area);

    if let Some(err) = error {
        let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
        let err_area = Rect {
            x: area.x + 2,
            y: area.y + ROW_HEIGHT.saturating_sub(1),
            width: area.width.saturating_sub(4),
            height: 1,
        };
        frame.render_widget(error_line, err_area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render(value: &str, focused: bool, error: Option<&str>) -> String {
        let backend = TestBackend::new(40, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = Rect::new(0, 0, 40, ROW_HEIGHT);
                draw_field_row(frame, area, "Tower", value, focused, true, error);
            })
            .unwrap();

        let buf = terminal.backend().buffer();
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    #[test]
    fn shows_label_with_required_marker() {
        let output = render("Tower A", false, None);
        assert!(output.contains("Tower *"));
    }

    #[test]
    fn shows_value() {
        let output = render("Tower A", true, None);
        assert!(output.contains("Tower A"));
    }

    #[test]
    fn empty_unfocused_shows_placeholder_dash() {
        let output = render("", false, None);
        assert!(output.contains('—'));
    }

    #[test]
    fn error_text_is_rendered() {
        let output = render("", false, Some("tower is required"));
        assert!(output.contains("tower is required"));
    }
}
