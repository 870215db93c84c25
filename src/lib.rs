//! A terminal start page: a live clock in a chosen timezone, current weather
//! with a piece of advice, a single focus task with a short completed
//! history, and a list of motivations. Everything the user changes is kept
//! in a small JSON key-value file between sessions.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod logger;
pub mod state;
pub mod storage;
pub mod ui;
