//! Value objects - Immutable objects defined by their attributes

mod cliche_name;
mod funky_die;

pub use cliche_name::{humanize_name, symbolize_name, ClicheName};
pub use funky_die::FunkyDie;
