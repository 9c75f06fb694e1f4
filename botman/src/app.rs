//! App state and main loop: input handling, observing the auth flag, and drawing.

use std::{io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::sleep;
use tracing::debug;

use crate::auth::AuthProvider;
use crate::presenter::Presenter;
use crate::source::MetricsSource;
use crate::ui;

pub struct App<A, S> {
    presenter: Presenter<A, S>,
    tick: Duration,
    should_quit: bool,
}

impl<A: AuthProvider, S: MetricsSource> App<A, S> {
    pub fn new(presenter: Presenter<A, S>, tick: Duration) -> Self {
        Self {
            presenter,
            tick,
            should_quit: false,
        }
    }

    pub fn presenter(&self) -> &Presenter<A, S> {
        &self.presenter
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        let res = self.event_loop(&mut terminal).await;

        // Teardown
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    if k.kind == KeyEventKind::Press {
                        self.handle_key(k.code);
                    }
                }
            }
            if self.should_quit {
                break;
            }

            // A login finishing elsewhere shows up here on the next tick.
            if self.presenter.sync() {
                debug!(state = self.presenter.state_name(), "state changed");
            }

            terminal.draw(|f| {
                ui::draw(
                    f,
                    self.presenter.state(),
                    self.presenter.auth().login_pending(),
                )
            })?;

            sleep(self.tick).await;
        }

        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char('c') => self.presenter.request_login(),
            KeyCode::Char('r') => {
                self.presenter.retry();
            }
            _ => {}
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
