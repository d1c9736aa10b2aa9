//! Shared screen chrome: vertical layout, title bar, status line.
//!
//! Every screen renders into the same four regions. The layout math is
//! kept in pure functions because the mouse path reuses it to hit-test
//! list rows without a render pass.

use crate::core::AppCore;
use crate::theme::AppTheme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Fixed regions every screen is laid out into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenChunks {
    pub title_bar: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub status: Rect,
}

/// Split the terminal area into the four chrome regions
pub fn screen_chunks(area: Rect) -> ScreenChunks {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    ScreenChunks {
        title_bar: chunks[0],
        body: chunks[1],
        footer: chunks[2],
        status: chunks[3],
    }
}

/// Title bar: centered screen title, back affordance on the left when
/// history allows going back
pub fn render_title_bar(f: &mut Frame, area: Rect, core: &AppCore) {
    let theme = &core.theme;
    let bar_style = Style::default()
        .fg(theme.title_bar_text)
        .bg(theme.title_bar_background);

    let title = Paragraph::new(core.navigator.current().title())
        .alignment(Alignment::Center)
        .style(bar_style.add_modifier(Modifier::BOLD));
    f.render_widget(title, area);

    if core.navigator.can_go_back() {
        let hint_area = Rect {
            width: area.width.min(7),
            ..area
        };
        let hint = Paragraph::new(Span::styled(
            " < back",
            Style::default()
                .fg(theme.back_hint)
                .bg(theme.title_bar_background),
        ));
        f.render_widget(hint, hint_area);
    }
}

/// One-line status bar at the bottom of the screen
pub fn render_status_bar(f: &mut Frame, area: Rect, core: &AppCore) {
    let theme = &core.theme;
    let status = Paragraph::new(core.ui_state.status_text.as_str()).style(
        Style::default()
            .fg(theme.status_text)
            .bg(theme.status_background),
    );
    f.render_widget(status, area);
}

/// Build a footer line of "[key] label" hints. Disabled hints render dim.
pub fn key_hints(theme: &AppTheme, hints: &[(&str, &str, bool)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (key, label, enabled)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let key_color = if *enabled {
            theme.key_hint
        } else {
            theme.key_hint_disabled
        };
        let label_color = if *enabled {
            theme.text_secondary
        } else {
            theme.text_disabled
        };
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(key_color).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", label),
            Style::default().fg(label_color),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_chunks_partition_the_area() {
        let chunks = screen_chunks(Rect::new(0, 0, 80, 24));

        assert_eq!(chunks.title_bar, Rect::new(0, 0, 80, 1));
        assert_eq!(chunks.body, Rect::new(0, 1, 80, 21));
        assert_eq!(chunks.footer, Rect::new(0, 22, 80, 1));
        assert_eq!(chunks.status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_screen_chunks_cover_small_terminals() {
        let area = Rect::new(0, 0, 40, 4);
        let chunks = screen_chunks(area);

        let total = chunks.title_bar.height
            + chunks.body.height
            + chunks.footer.height
            + chunks.status.height;
        assert_eq!(total, area.height);
    }

    #[test]
    fn test_key_hints_mark_disabled_entries() {
        let theme = AppTheme::by_name("dark");
        let line = key_hints(&theme, &[("n", "Next", false), ("c", "Cancel", true)]);

        // Two hints plus one separator span between them
        assert_eq!(line.spans.len(), 5);
        assert_eq!(line.spans[0].content.as_ref(), "[n]");
        assert_eq!(line.spans[0].style.fg, Some(theme.key_hint_disabled));
        assert_eq!(line.spans[3].style.fg, Some(theme.key_hint));
    }
}
