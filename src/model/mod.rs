//! Data model for parsed security notices.
//!
//! A digest is parsed into a list of [`Bulletin`] records. Fields that follow
//! "first value wins" rules are held in a [`SetOnce`] slot, and the enrichment
//! outcome is expressed with [`Severity`] and [`Availability`].

mod bulletin;
mod once;
mod status;

pub use bulletin::*;
pub use once::*;
pub use status::*;
