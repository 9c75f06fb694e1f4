//! Sign-in card and the unavailable-metrics card.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::ui::theme::{ACCENT, ERROR, MUTED, PRIMARY_LIGHT};
use crate::ui::util::centered;

pub fn draw_connect(f: &mut ratatui::Frame<'_>, area: Rect, pending: bool) {
    let card = centered(area, 60, 12);
    let button = if pending {
        Line::styled("Waiting for wallet approval...", Style::default().fg(MUTED))
    } else {
        Line::styled(
            "  Connect Wallet  ",
            Style::default()
                .fg(Color::White)
                .bg(PRIMARY_LIGHT)
                .add_modifier(Modifier::BOLD),
        )
    };
    let lines = vec![
        Line::styled(
            "Welcome to Bot-Man",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::styled(
            "Connect your wallet to access real-time system metrics and performance analytics",
            Style::default().fg(MUTED),
        ),
        Line::default(),
        button,
        Line::default(),
        Line::styled("Enter: connect   q: quit", Style::default().fg(MUTED)),
    ];
    let p = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(p, card);
}

pub fn draw_unavailable(f: &mut ratatui::Frame<'_>, area: Rect, reason: &str) {
    let card = centered(area, 70, 9);
    let lines = vec![
        Line::styled(
            "Metrics unavailable",
            Style::default().fg(ERROR).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::from(reason.to_string()),
        Line::default(),
        Line::styled("r: retry   q: quit", Style::default().fg(MUTED)),
    ];
    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(ERROR)))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(p, card);
}
