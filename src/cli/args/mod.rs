//! Shared CLI argument types
//!
//! This module contains reusable argument structs that can be flattened
//! into commands using `#[command(flatten)]`.

mod common;
mod global;

pub use common::{LocationArgs, OutputFormat, parse_datetime};
pub use global::GlobalOptions;
