//! Menu screens: entree, side dish, and accompaniment pickers.
//!
//! One renderer serves all three category screens. Row geometry lives in
//! pure functions so the mouse path can hit-test list rows without a
//! render pass.

use crate::core::AppCore;
use crate::frontend::tui::chrome;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Height of one list row in terminal cells
pub fn row_height(show_descriptions: bool) -> u16 {
    if show_descriptions {
        2
    } else {
        1
    }
}

/// How many whole rows fit in the body
pub fn visible_rows(body: Rect, show_descriptions: bool) -> usize {
    (body.height / row_height(show_descriptions)) as usize
}

/// First row shown, chosen so the cursor stays inside the window
pub fn first_visible(cursor: usize, count: usize, visible: usize) -> usize {
    if visible == 0 || count <= visible {
        return 0;
    }
    let first = (cursor + 1).saturating_sub(visible);
    first.min(count - visible)
}

/// Check if a click position hits a list row
/// Returns the item index if clicked, None otherwise
pub fn row_at(
    body: Rect,
    click_x: u16,
    click_y: u16,
    count: usize,
    cursor: usize,
    show_descriptions: bool,
) -> Option<usize> {
    // Check if click is within list bounds
    if click_x < body.x || click_x >= body.x + body.width {
        return None;
    }
    if click_y < body.y || click_y >= body.y + body.height {
        return None;
    }

    let visible = visible_rows(body, show_descriptions);
    let row = ((click_y - body.y) / row_height(show_descriptions)) as usize;
    if row >= visible {
        return None;
    }

    let index = first_visible(cursor, count, visible) + row;
    if index < count {
        Some(index)
    } else {
        None
    }
}

pub fn render(f: &mut Frame, body: Rect, footer: Rect, core: &AppCore) {
    let theme = &core.theme;
    let Some(category) = core.navigator.current().category() else {
        return;
    };

    let items = core.menu.items(category);
    let show_descriptions = core.config.ui.show_descriptions;
    let height = row_height(show_descriptions);
    let visible = visible_rows(body, show_descriptions);
    let first = first_visible(core.ui_state.cursor, items.len(), visible);
    let selected = core.order.selection(category);

    for (offset, (index, item)) in items
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let y = body.y + offset as u16 * height;
        let row_area = Rect::new(body.x, y, body.width, 1);
        let highlighted = index == core.ui_state.cursor;

        if highlighted {
            f.render_widget(
                Paragraph::new("").style(Style::default().bg(theme.cursor_background)),
                row_area,
            );
        }

        let name_style = if highlighted {
            Style::default()
                .fg(theme.cursor_text)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_primary)
        };
        let marker = if selected == Some(item) { "* " } else { "  " };
        let name = Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.selected_marker)),
            Span::styled(item.name.clone(), name_style),
        ]);
        f.render_widget(Paragraph::new(name), row_area);

        let price_style = if highlighted {
            Style::default().fg(theme.cursor_text)
        } else {
            Style::default().fg(theme.price)
        };
        f.render_widget(
            Paragraph::new(Span::styled(item.formatted_price(), price_style))
                .alignment(Alignment::Right),
            row_area,
        );

        if show_descriptions && y + 1 < body.y + body.height {
            let desc_area = Rect::new(body.x, y + 1, body.width, 1);
            let desc = Line::from(vec![
                Span::raw("    "),
                Span::styled(
                    item.description.clone(),
                    Style::default().fg(theme.text_secondary),
                ),
            ]);
            f.render_widget(Paragraph::new(desc), desc_area);
        }
    }

    let has_selection = core.order.has_selection(category);
    let hints = chrome::key_hints(
        theme,
        &[
            ("Up/Down", "Move", true),
            ("Enter", "Select", true),
            ("n", "Next", has_selection),
            ("Left", "Back", true),
            ("c", "Cancel", true),
        ],
    );
    f.render_widget(Paragraph::new(hints).alignment(Alignment::Center), footer);
}
