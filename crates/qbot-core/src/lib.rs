//! Core domain + application logic for the Quran Telegram bot.
//!
//! This crate is intentionally framework-agnostic. Telegram and the content
//! provider live behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod domain;
pub mod errors;
pub mod keyboards;
pub mod logging;
pub mod messaging;
pub mod nav;
pub mod ports;
pub mod range_audio;
pub mod session;

pub use errors::{Error, Result};
