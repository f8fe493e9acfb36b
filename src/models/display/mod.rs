//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod event;
mod media;
mod trip;

pub use event::EventDisplay;
pub use media::MediaDisplay;
pub use trip::TripDisplay;
