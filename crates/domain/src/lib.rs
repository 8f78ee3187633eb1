//! Risus character sheets and their packed text encoding.
//!
//! A [`Character`] owns a set of [`Cliche`]s keyed by normalized name, and
//! both know how to pack themselves into the delimited wire format described
//! in [`codec`] and unpack back out of it.

pub mod aggregates;
pub mod codec;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use aggregates::Character;
pub use entities::{Cliche, ClicheFields};
pub use error::RisusError;
pub use value_objects::{humanize_name, symbolize_name, ClicheName, FunkyDie};
