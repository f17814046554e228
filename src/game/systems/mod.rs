//! Decision systems.
//!
//! `targeting` scores every opponent, `decision` picks the one to act on.

pub mod targeting;
pub mod decision;

pub use decision::*;
