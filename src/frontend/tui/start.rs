//! Start screen: welcome panel and the entry point into the flow.

use crate::core::AppCore;
use crate::frontend::tui::chrome;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, body: Rect, footer: Rect, core: &AppCore) {
    let theme = &core.theme;

    let lines = vec![
        Line::from(Span::styled(
            "Lunch Tray",
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Build a tray: one entree, one side dish, one accompaniment.",
            Style::default().fg(theme.text_secondary),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(theme.text_secondary)),
            Span::styled(
                "Enter",
                Style::default()
                    .fg(theme.key_hint)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to start your order", Style::default().fg(theme.text_secondary)),
        ]),
    ];

    // Center the welcome block vertically in the body
    let height = (lines.len() as u16).min(body.height);
    let top = body.y + body.height.saturating_sub(height) / 2;
    let panel = Rect::new(body.x, top, body.width, height);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), panel);

    let hints = chrome::key_hints(theme, &[("Enter", "Start Order", true), ("q", "Quit", true)]);
    f.render_widget(Paragraph::new(hints).alignment(Alignment::Center), footer);
}
