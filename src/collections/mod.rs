//! Push/pop containers and the traversal built on them
//!
//! [`Stack`] and [`Queue`] are thin adapters over growable sequences.
//! Popping an empty container yields `None`, never a sentinel value.

mod queue;
mod stack;
mod walk;

pub use queue::Queue;
pub use stack::Stack;
pub use walk::{walk, WalkOrder};
