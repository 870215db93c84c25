//! Event handling module.
//!
//! This module contains handlers for different types of events:
//! - Network events: weather and advice requests
//! - Terminal events: key input and the periodic tick

pub mod network;
pub mod terminal;
