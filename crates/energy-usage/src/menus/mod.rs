//! Interactive menu loops

pub mod billing;
pub mod calculator;

pub use billing::*;
pub use calculator::*;
