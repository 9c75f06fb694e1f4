//! UI module root: picks the view for the presenter state and lays out the dashboard panels.

pub mod cpu;
pub mod header;
pub mod info;
pub mod login;
pub mod mem;
pub mod theme;
pub mod util;

use ratatui::layout::{Constraint, Direction, Layout};

use crate::presenter::{Dashboard, Panel, PresenterState};

pub fn draw(f: &mut ratatui::Frame<'_>, state: &PresenterState, login_pending: bool) {
    let area = f.area();
    match state {
        PresenterState::Unauthenticated => login::draw_connect(f, area, login_pending),
        PresenterState::Authenticated(Panel::Unavailable(reason)) => {
            login::draw_unavailable(f, area, reason)
        }
        PresenterState::Authenticated(Panel::Ready(d)) => draw_dashboard(f, d),
    }
}

fn draw_dashboard(f: &mut ratatui::Frame<'_>, d: &Dashboard) {
    let area = f.area();

    // Root rows: header, node info, cpu gauge, cards
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Min(6),
        ])
        .split(area);

    header::draw_header(f, rows[0], d);
    info::draw_info(f, rows[1]);
    cpu::draw_cpu(f, rows[2], &d.snapshot);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[3]);

    cpu::draw_cores(f, cards[0], d.snapshot.core_count);
    mem::draw_mem(f, cards[1], &d.memory, d.snapshot.total_memory);
    mem::draw_swap(f, cards[2], &d.swap, d.snapshot.total_swap);
}
