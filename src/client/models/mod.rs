//! TripJournal data models
//!
//! Domain types exchanged with the journal service plus the request shapes
//! used to create and update them. Models are organized by resource type.

pub(crate) mod dates;

mod auth;
mod event;
mod media;
mod trip;

pub use auth::{Credentials, Token};
pub use event::{Event, EventCreate, EventUpdate, Location};
pub use media::{Media, MediaCreate};
pub use trip::{Trip, TripCreate, TripUpdate};
