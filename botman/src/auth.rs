//! Wallet auth collaborator. The dashboard only reads the flag and asks for a login;
//! the flow itself runs in the background and publishes the result through a watch channel.

use std::{
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use chrono::Utc;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::config::{load_session, save_session, Session};

pub trait AuthProvider {
    fn authenticated(&self) -> bool;
    /// Starts a login. Completion is only observable through `authenticated`.
    fn login(&self);
    fn login_pending(&self) -> bool {
        false
    }
}

impl<T: AuthProvider + ?Sized> AuthProvider for &T {
    fn authenticated(&self) -> bool {
        (**self).authenticated()
    }
    fn login(&self) {
        (**self).login()
    }
    fn login_pending(&self) -> bool {
        (**self).login_pending()
    }
}

/// Persists an approved wallet session so later launches start signed in.
pub struct SessionAuth {
    flag: Arc<watch::Sender<bool>>,
    pending: Arc<AtomicBool>,
    session_path: PathBuf,
    wallet: String,
    approve_delay: Duration,
}

impl SessionAuth {
    pub fn new(session_path: PathBuf, wallet: impl Into<String>, approve_delay: Duration) -> Self {
        let existing = load_session(&session_path);
        if let Some(s) = existing.as_ref() {
            info!(wallet = %s.wallet, since = %s.authenticated_at, "restored wallet session");
        }
        let (tx, _rx) = watch::channel(existing.is_some());
        Self {
            flag: Arc::new(tx),
            pending: Arc::new(AtomicBool::new(false)),
            session_path,
            wallet: wallet.into(),
            approve_delay,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.flag.subscribe()
    }
}

impl AuthProvider for SessionAuth {
    fn authenticated(&self) -> bool {
        *self.flag.borrow()
    }

    fn login(&self) {
        if self.authenticated() || self.pending.swap(true, Ordering::AcqRel) {
            return;
        }
        let Ok(rt) = tokio::runtime::Handle::try_current() else {
            warn!("login requested outside the async runtime; ignoring");
            self.pending.store(false, Ordering::Release);
            return;
        };
        info!(wallet = %self.wallet, "wallet login requested");

        let flag = self.flag.clone();
        let pending = self.pending.clone();
        let path = self.session_path.clone();
        let wallet = self.wallet.clone();
        let delay = self.approve_delay;
        rt.spawn(async move {
            // Stand-in for the wallet approving the connection.
            tokio::time::sleep(delay).await;
            let session = Session {
                wallet,
                authenticated_at: Utc::now(),
            };
            match save_session(&path, &session) {
                Ok(()) => {
                    info!(wallet = %session.wallet, path = %path.display(), "wallet session persisted");
                    flag.send_replace(true);
                }
                Err(e) => warn!("wallet login failed: {e:#}"),
            }
            pending.store(false, Ordering::Release);
        });
    }

    fn login_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}
