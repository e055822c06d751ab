//! Page window selection and pagination buttons.

mod buttons;
mod window;

pub use buttons::*;
pub use window::*;
