//! Static node description shown above the charts.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::{MUTED, PRIMARY};
use crate::ui::util::inner;

const DEPLOYMENT: [&str; 4] = [
    "Deployed on: Local Edge Device",
    "Runtime: Ollama v0.1.14",
    "Models: Mistral, Llama2, CodeLlama",
    "Status: Active & Operational",
];

const PERFORMANCE: [&str; 4] = [
    "Average Response Time: 150ms",
    "Requests per Second: 10",
    "Uptime: 99.9%",
    "Active Connections: 5",
];

pub fn draw_info(f: &mut ratatui::Frame<'_>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Gaia AI Node Information")
        .title_style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD));
    f.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner(area));
    f.render_widget(column("Deployment Details", &DEPLOYMENT), cols[0]);
    f.render_widget(column("Performance Metrics", &PERFORMANCE), cols[1]);
}

fn column(heading: &'static str, items: &[&'static str]) -> Paragraph<'static> {
    let mut lines = vec![Line::styled(heading, Style::default().add_modifier(Modifier::BOLD))];
    lines.extend(
        items
            .iter()
            .map(|s| Line::styled(format!("• {s}"), Style::default().fg(MUTED))),
    );
    Paragraph::new(lines)
}
