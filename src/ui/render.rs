use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

use crate::app::Model;

use super::{CONTINUES_LEFT, CONTINUES_RIGHT, status};

/// What one frame shows, independent of the terminal backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// Visible lines, already clipped to the window width
    pub lines: Vec<String>,
    /// Cursor cell as `(row, col)` relative to the window; `None` hides it
    pub cursor: Option<(usize, usize)>,
    /// Text for the status row
    pub status: String,
}

/// Build the render plan for the current model.
pub fn plan(model: &Model) -> RenderPlan {
    let window = &model.window;
    let status = status::status_text(model);

    if model.help_visible() {
        let lines = status::HELP_TEXT
            .iter()
            .take(window.n_rows())
            .map(|line| clip_line(line, 0, window.n_cols()))
            .collect();
        return RenderPlan {
            lines,
            cursor: None,
            status,
        };
    }

    let lines = window
        .visible_rows(&model.buffer)
        .filter_map(|row| model.buffer.line_at(row))
        .map(|line| clip_line(&line, window.col(), window.n_cols()))
        .collect();
    let cursor = (window.n_rows() > 0).then(|| window.translate(&model.cursor));

    RenderPlan {
        lines,
        cursor,
        status,
    }
}

/// Cut a line down to the part a window starting at column `offset` shows.
///
/// When scrolled right, the first visible cell becomes a `«` marker; when
/// the rest is wider than `width`, the last cell becomes a `»` marker.
pub fn clip_line(line: &str, offset: usize, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let mut visible: Vec<char> = if offset > 0 && !line.is_empty() {
        std::iter::once(CONTINUES_LEFT)
            .chain(line.chars().skip(offset + 1))
            .collect()
    } else {
        line.chars().collect()
    };
    if visible.len() > width {
        visible.truncate(width - 1);
        visible.push(CONTINUES_RIGHT);
    }
    visible.into_iter().collect()
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let plan = plan(model);

    let text_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: area.height.min(1),
        ..area
    };

    let content: Vec<Line> = plan.lines.into_iter().map(Line::raw).collect();
    frame.render_widget(Paragraph::new(content), text_area);

    let status_style = if model.help_visible() {
        Style::default().bg(Color::Blue).fg(Color::White)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::White)
    };
    frame.render_widget(Paragraph::new(plan.status).style(status_style), status_area);

    if let Some((row, col)) = plan.cursor {
        frame.set_cursor_position(Position::new(
            area.x.saturating_add(to_cell(col)),
            area.y.saturating_add(to_cell(row)),
        ));
    }
}

/// Replace the screen with the closing message.
pub fn render_exit_message(frame: &mut Frame, save: bool) {
    let area = frame.area();
    let message = if save { "SAVING..." } else { "QUITTING..." };
    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(message), area);
}

fn to_cell(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
