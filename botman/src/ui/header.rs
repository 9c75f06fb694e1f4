//! Top bar with the app name and the online badge.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presenter::Dashboard;
use crate::ui::theme::{MUTED, ONLINE, PRIMARY};

pub fn draw_header(f: &mut ratatui::Frame<'_>, area: Rect, d: &Dashboard) {
    let line = Line::from(vec![
        Span::styled(
            " Bot-Man ",
            Style::default()
                .fg(Color::White)
                .bg(PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled("● Online", Style::default().fg(ONLINE)),
        Span::styled(
            format!("  snapshot at {}  (press 'q' to quit)", d.fetched_at.format("%H:%M:%S")),
            Style::default().fg(MUTED),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
