//! Entities - domain objects owned by an aggregate

pub mod cliche;

pub use cliche::{Cliche, ClicheFields};
