//! Checkout screen: order summary with subtotal, tax, and total.

use crate::core::order::TAX_RATE;
use crate::core::AppCore;
use crate::frontend::tui::chrome;
use crate::menu::format_usd;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rust_decimal::Decimal;

pub fn render(f: &mut Frame, body: Rect, footer: Rect, core: &AppCore) {
    let theme = &core.theme;

    let label_style = Style::default().fg(theme.text_secondary);
    let name_style = Style::default().fg(theme.text_primary);
    let price_style = Style::default().fg(theme.price);
    let total_style = Style::default()
        .fg(theme.total_emphasis)
        .add_modifier(Modifier::BOLD);

    // (left, right) pairs rendered one per row
    let mut rows: Vec<(Line, Line)> = Vec::new();
    for item in core.order.selections() {
        rows.push((
            Line::from(vec![
                Span::styled(format!("{}: ", item.category.display_name()), label_style),
                Span::styled(item.name.clone(), name_style),
            ]),
            Line::from(Span::styled(item.formatted_price(), price_style)),
        ));
    }
    rows.push((Line::default(), Line::default()));

    let percent = (TAX_RATE * Decimal::ONE_HUNDRED).normalize();
    rows.push((
        Line::from(Span::styled("Subtotal", label_style)),
        Line::from(Span::styled(format_usd(core.order.subtotal()), price_style)),
    ));
    rows.push((
        Line::from(Span::styled(format!("Tax ({}%)", percent), label_style)),
        Line::from(Span::styled(format_usd(core.order.tax()), price_style)),
    ));
    rows.push((
        Line::from(Span::styled("Total", total_style)),
        Line::from(Span::styled(format_usd(core.order.total()), total_style)),
    ));

    for (i, (left, right)) in rows.into_iter().enumerate() {
        let y = body.y + i as u16;
        if y >= body.y + body.height {
            break;
        }
        let row_area = Rect::new(body.x, y, body.width, 1);
        f.render_widget(Paragraph::new(left), row_area);
        f.render_widget(Paragraph::new(right).alignment(Alignment::Right), row_area);
    }

    let hints = chrome::key_hints(
        theme,
        &[
            ("Enter", "Submit", true),
            ("Left", "Back", true),
            ("c", "Cancel", true),
        ],
    );
    f.render_widget(Paragraph::new(hints).alignment(Alignment::Center), footer);
}
