//! TripJournal - client for the TripJournal trip journal service
//!
//! The [`client`] module is the library proper: an authenticated HTTP
//! client that keeps a bearer token in a [`client::SessionStore`] and
//! exposes trips, events and media through [`client::JournalApi`]. The
//! remaining modules back the `tripjournal` command-line tool.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;

pub use client::{ClientConfig, JournalApi, JournalClient};
pub use error::{ApiError, Error, Result};
