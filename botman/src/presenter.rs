//! Chooses between the sign-in call-to-action and the metrics dashboard.
//!
//! The presenter starts in whatever state the auth flag reports at mount time and only ever
//! moves from `Unauthenticated` to `Authenticated`. The source is queried once on entering
//! `Authenticated`; after that only an explicit retry from the unavailable panel fetches again.
//! Source and validation errors end up in `Panel::Unavailable` instead of propagating.

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::auth::AuthProvider;
use crate::error::MetricsError;
use crate::source::MetricsSource;
use crate::transform::{derive_memory_series, derive_swap_series};
use crate::types::{ChartSeries, MetricsSnapshot};

/// Everything the authenticated view binds to for one fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub snapshot: MetricsSnapshot,
    pub memory: ChartSeries,
    pub swap: ChartSeries,
    pub fetched_at: DateTime<Local>,
}

impl Dashboard {
    pub fn build(snapshot: MetricsSnapshot) -> Result<Self, MetricsError> {
        let memory = derive_memory_series(&snapshot)?;
        let swap = derive_swap_series(&snapshot)?;
        Ok(Self {
            snapshot,
            memory,
            swap,
            fetched_at: Local::now(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Ready(Dashboard),
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PresenterState {
    Unauthenticated,
    Authenticated(Panel),
}

pub struct Presenter<A, S> {
    auth: A,
    source: S,
    state: PresenterState,
    fetches: usize,
}

impl<A: AuthProvider, S: MetricsSource> Presenter<A, S> {
    pub fn mount(auth: A, source: S) -> Self {
        let mut p = Self {
            auth,
            source,
            state: PresenterState::Unauthenticated,
            fetches: 0,
        };
        if p.auth.authenticated() {
            p.enter_authenticated();
        }
        info!(state = p.state_name(), "presenter mounted");
        p
    }

    /// Re-reads the auth flag. Returns true when the state changed.
    pub fn sync(&mut self) -> bool {
        if matches!(self.state, PresenterState::Unauthenticated) && self.auth.authenticated() {
            info!("auth flag set; showing dashboard");
            self.enter_authenticated();
            return true;
        }
        false
    }

    pub fn request_login(&self) {
        if matches!(self.state, PresenterState::Unauthenticated) {
            self.auth.login();
        }
    }

    /// Fetches again, but only when the last fetch failed.
    pub fn retry(&mut self) -> bool {
        if matches!(
            self.state,
            PresenterState::Authenticated(Panel::Unavailable(_))
        ) {
            info!("retrying snapshot fetch");
            self.enter_authenticated();
            return true;
        }
        false
    }

    pub fn auth(&self) -> &A {
        &self.auth
    }

    pub fn state(&self) -> &PresenterState {
        &self.state
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches
    }

    pub fn state_name(&self) -> &'static str {
        match &self.state {
            PresenterState::Unauthenticated => "unauthenticated",
            PresenterState::Authenticated(Panel::Ready(_)) => "dashboard",
            PresenterState::Authenticated(Panel::Unavailable(_)) => "unavailable",
        }
    }

    fn enter_authenticated(&mut self) {
        self.fetches += 1;
        let panel = match self.source.snapshot().and_then(Dashboard::build) {
            Ok(d) => Panel::Ready(d),
            Err(e) => {
                warn!("snapshot fetch failed: {e}");
                Panel::Unavailable(e.to_string())
            }
        };
        self.state = PresenterState::Authenticated(panel);
    }
}
