//! Storage layer for user records.

mod generate;
mod users;

pub use generate::*;
pub use users::*;
