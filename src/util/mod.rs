//! Utility functions

mod invert;

pub use invert::{invert, invert_map};
