//! Domain Services
//!
//! Pure rules with no I/O of their own.

mod contact_view;
mod destroy_gate;

pub use contact_view::*;
pub use destroy_gate::*;
