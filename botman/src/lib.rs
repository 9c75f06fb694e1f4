//! Library surface for botman: snapshot types, sources, the presenter and its terminal views.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod presenter;
pub mod source;
pub mod transform;
pub mod types;
pub mod ui;
