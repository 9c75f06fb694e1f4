//! CPU usage gauge + core count card.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::types::MetricsSnapshot;
use crate::ui::theme::{ACCENT, PRIMARY};
use crate::ui::util::inner;

pub fn draw_cpu(f: &mut ratatui::Frame<'_>, area: Rect, m: &MetricsSnapshot) {
    let pct = m.cpu.clamp(0.0, 100.0);
    let g = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("CPU Usage (%)"))
        .gauge_style(Style::default().fg(PRIMARY))
        .ratio(f64::from(pct) / 100.0)
        .label(format!("{pct:.0}%"));
    f.render_widget(g, area);
}

pub fn draw_cores(f: &mut ratatui::Frame<'_>, area: Rect, core_count: u32) {
    f.render_widget(Block::default().borders(Borders::ALL).title("CPU Cores"), area);
    let body = inner(area);
    if body.height == 0 {
        return;
    }
    // Vertically center the single number.
    let slot = Rect {
        y: body.y + body.height / 2,
        height: 1,
        ..body
    };
    let n = Paragraph::new(Line::from(core_count.to_string()))
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(n, slot);
}
