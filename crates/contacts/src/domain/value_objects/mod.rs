//! Value Objects

mod display_name;
mod favourite;

pub use display_name::*;
pub use favourite::*;
