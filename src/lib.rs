//! # Odometer-order sequence enumeration
//!
//! This library enumerates every sequence of a fixed length whose positions
//! hold integers in `[0, max_digit]`, in strictly increasing lexicographic
//! order.
//!
//! ## Core Algorithm
//!
//! 1. **Start at zero**: the cursor begins as the all-zero sequence
//! 2. **Emit**: hand out an independent copy of the cursor
//! 3. **Advance**: bump the rightmost digit, carrying left on overflow
//! 4. **Exhaust**: a carry past the leftmost digit ends the enumeration
//!
//! Result: `(max_digit + 1)^length` sequences, each exactly once.
//!
//! ## Usage Example
//!
//! ```
//! use combinator::Combinator;
//!
//! let mut odometer = Combinator::new(2, 1)?;
//! assert_eq!(
//!     odometer.drain_all(),
//!     vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
//! );
//! assert!(odometer.drain_all().is_empty());
//! # Ok::<(), combinator::CombinatorError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

pub mod enumerator;   // Odometer enumerator
pub mod collections;  // LIFO/FIFO containers and traversal
pub mod util;         // Helper functions
pub mod config;       // File-backed settings
pub mod scheduler;    // Scheduling interface (not implemented)

// Re-exports for convenience
pub use enumerator::{
    sequences, signed_parameters, total_count, Combinator, CombinatorError, CursorState,
};
pub use collections::{walk, Queue, Stack, WalkOrder};
pub use config::{Config, ConfigError};
pub use scheduler::{Job, Scheduler, SchedulerError, UnimplementedScheduler};
pub use util::{invert, invert_map};
