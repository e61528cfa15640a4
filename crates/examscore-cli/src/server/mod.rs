//! HTTP API over a loaded score store.

pub mod app;
pub mod error;
pub mod handlers;
pub mod state;
