//! Service Ports

mod confirmer;

pub use confirmer::*;
