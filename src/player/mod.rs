//! Player module - the damage target enemies chase.

mod components;

pub use components::*;
