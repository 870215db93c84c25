//! Application state management module.
//!
//! This module contains the core state for the start page, including:
//! - Main `State` struct that owns every value the handlers mutate
//! - The single-slot task tracker and its bounded history
//! - The clock and timezone selector
//! - The weather/advice fetch panel state machine
//! - State error handling

mod celebration;
mod clock;
mod error;
mod fetch;
mod navigation;
mod tasks;

pub use celebration::{Celebration, Particle};
pub use clock::{format_clock, Clock, TimezoneSelector, DATE_FORMAT, TIME_FORMAT};
pub use error::StateError;
pub use fetch::FetchState;
pub use navigation::InputMode;
pub use tasks::{Task, TaskTracker, Toggle, HISTORY_LIMIT};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::{State, DEFAULT_MOTIVATIONS};
