//! Settings and session persistence.
//! Stored under XDG config dir: $XDG_CONFIG_HOME/botman/ (fallback ~/.config/botman/)

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::warn;

pub const DEFAULT_TICK_MS: u64 = 250;
pub const DEFAULT_APPROVE_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    #[serde(default = "default_approve_delay_ms")]
    pub approve_delay_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<PathBuf>,
}

fn default_tick_ms() -> u64 {
    DEFAULT_TICK_MS
}

fn default_approve_delay_ms() -> u64 {
    DEFAULT_APPROVE_DELAY_MS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            approve_delay_ms: DEFAULT_APPROVE_DELAY_MS,
            wallet: None,
            snapshot: None,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub snapshot: Option<PathBuf>,
    pub wallet: Option<String>,
    pub demo: bool,
}

impl Settings {
    pub fn merged_with(mut self, o: &Overrides) -> Self {
        if o.demo {
            self.snapshot = None;
        } else if let Some(p) = o.snapshot.as_ref() {
            self.snapshot = Some(p.clone());
        }
        if let Some(w) = o.wallet.as_ref() {
            self.wallet = Some(w.clone());
        }
        self
    }

    pub fn wallet_label(&self) -> &str {
        self.wallet.as_deref().unwrap_or("local-wallet")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub wallet: String,
    pub authenticated_at: DateTime<Utc>,
}

pub fn config_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("botman")
    } else {
        dirs_next::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("botman")
    }
}

pub fn settings_path() -> PathBuf {
    config_dir().join("config.json")
}

pub fn session_path() -> PathBuf {
    config_dir().join("session.json")
}

pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

// A missing file is normal; an unparsable one is reported before falling back.
pub fn load_settings_from(path: &std::path::Path) -> Settings {
    let Ok(data) = fs::read_to_string(path) else {
        return Settings::default();
    };
    match serde_json::from_str(&data) {
        Ok(s) => s,
        Err(e) => {
            warn!(path = %path.display(), "ignoring malformed settings: {e}");
            Settings::default()
        }
    }
}

pub fn save_settings(s: &Settings) -> anyhow::Result<()> {
    write_json(&settings_path(), s)
}

pub fn load_session(path: &std::path::Path) -> Option<Session> {
    let data = fs::read_to_string(path).ok()?;
    serde_json::from_str(&data).ok()
}

pub fn save_session(path: &std::path::Path, session: &Session) -> anyhow::Result<()> {
    write_json(path, session)
}

fn write_json<T: Serialize>(path: &std::path::Path, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let data = serde_json::to_vec_pretty(value)?;
    fs::write(path, data).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let s: Settings = serde_json::from_str(r#"{"wallet":"0xabc"}"#).unwrap();
        assert_eq!(s.tick_ms, DEFAULT_TICK_MS);
        assert_eq!(s.approve_delay_ms, DEFAULT_APPROVE_DELAY_MS);
        assert_eq!(s.wallet_label(), "0xabc");
        assert!(s.snapshot.is_none());
    }

    #[test]
    fn malformed_settings_file_yields_defaults() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("config.json");
        fs::write(&path, r#"{"snapshot": "/tmp/snap.json","#).unwrap();
        assert_eq!(load_settings_from(&path), Settings::default());

        fs::write(&path, r#"{"snapshot": "/tmp/snap.json"}"#).unwrap();
        assert_eq!(
            load_settings_from(&path).snapshot,
            Some(PathBuf::from("/tmp/snap.json"))
        );
        assert_eq!(load_settings_from(&td.path().join("absent.json")), Settings::default());
    }

    #[test]
    fn overrides_take_precedence() {
        let base = Settings {
            snapshot: Some(PathBuf::from("/tmp/a.json")),
            wallet: Some("file".into()),
            ..Settings::default()
        };
        let merged = base.clone().merged_with(&Overrides {
            snapshot: Some(PathBuf::from("/tmp/b.json")),
            wallet: Some("cli".into()),
            demo: false,
        });
        assert_eq!(merged.snapshot, Some(PathBuf::from("/tmp/b.json")));
        assert_eq!(merged.wallet_label(), "cli");

        let demo = base.merged_with(&Overrides {
            demo: true,
            ..Overrides::default()
        });
        assert!(demo.snapshot.is_none());
        assert_eq!(demo.wallet_label(), "file");
    }

    #[test]
    fn session_round_trips_through_disk() {
        let td = tempfile::tempdir().unwrap();
        let path = td.path().join("nested").join("session.json");
        assert!(load_session(&path).is_none());
        let session = Session {
            wallet: "0xfeed".into(),
            authenticated_at: Utc::now(),
        };
        save_session(&path, &session).unwrap();
        assert_eq!(load_session(&path), Some(session));
    }
}
