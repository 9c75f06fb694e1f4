//! Used/available split panels. Memory and swap share the same layout.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::types::{ChartSeries, SeriesEntry};
use crate::ui::theme::{MUTED, SLICE_AVAILABLE, SLICE_USED};
use crate::ui::util::{human, inner};

pub fn draw_mem(f: &mut ratatui::Frame<'_>, area: Rect, series: &ChartSeries, total: u64) {
    draw_split(f, area, "Memory Usage", series, total);
}

pub fn draw_swap(f: &mut ratatui::Frame<'_>, area: Rect, series: &ChartSeries, total: u64) {
    draw_split(f, area, "Swap Usage", series, total);
}

fn draw_split(f: &mut ratatui::Frame<'_>, area: Rect, title: &str, s: &ChartSeries, total: u64) {
    f.render_widget(Block::default().borders(Borders::ALL).title(title.to_string()), area);
    let body = inner(area);

    // Two rows per entry: caption, then bar.
    let slots = [(s.used, SLICE_USED), (s.available, SLICE_AVAILABLE)];
    for (i, (entry, color)) in slots.into_iter().enumerate() {
        let y = body.y + (i as u16) * 2;
        if y + 1 >= body.y + body.height {
            break;
        }
        let caption = Rect { y, height: 1, ..body };
        let bar = Rect { y: y + 1, height: 1, ..body };
        f.render_widget(Paragraph::new(caption_line(&entry, total, color)), caption);

        let ratio = if total > 0 { entry.value as f64 / total as f64 } else { 0.0 };
        let g = Gauge::default()
            .ratio(ratio.clamp(0.0, 1.0))
            .label("")
            .gauge_style(Style::default().fg(color).bg(Color::Reset));
        f.render_widget(g, bar);
    }
}

fn caption_line(entry: &SeriesEntry, total: u64, color: Color) -> Line<'static> {
    let share = entry
        .share_of(total)
        .map(|p| format!("{p}%"))
        .unwrap_or_else(|| "n/a".into());
    Line::from(vec![
        Span::styled("■ ", Style::default().fg(color)),
        Span::raw(format!("{} {}", entry.label, human(entry.value))),
        Span::styled(format!(" ({share})"), Style::default().fg(MUTED)),
    ])
}
