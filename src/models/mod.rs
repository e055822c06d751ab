//! Data models for users and page descriptions.

mod component;
mod user;

pub use component::*;
pub use user::*;
