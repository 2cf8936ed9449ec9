//! Fixed-width, bounded-alphabet sequence enumeration
//!
//! A [`Combinator`] walks every sequence of `length` digits drawn from
//! `[0, max_digit]` in odometer order: read each sequence as a base
//! `max_digit + 1` number with the leftmost digit most significant, and the
//! emitted numbers count up by exactly one.
//!
//! The iterator is the primitive. [`Combinator::drain_all`] materialises the
//! rest of the enumeration, which grows as `(max_digit + 1)^length`, so
//! prefer iterating when the parameters are not tiny.

mod cursor;

use std::iter::FusedIterator;

use thiserror::Error;
use tracing::debug;

pub use cursor::CursorState;
use cursor::Cursor;

/// Errors raised while constructing a [`Combinator`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombinatorError {
    /// Length or maximum digit outside the accepted range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Odometer-order enumerator over `[0, max_digit]^length`
///
/// Every emitted sequence is an independent `Vec`; mutating it never
/// touches the enumerator or other emitted sequences. Once exhausted the
/// enumerator stays exhausted; build a new one (see
/// [`Combinator::restarted`]) to enumerate again.
#[derive(Debug, Clone)]
pub struct Combinator {
    length: usize,
    max_digit: u32,
    cursor: Cursor,
    emitted: u128,
}

impl Combinator {
    /// Create an enumerator positioned at the all-zero sequence
    ///
    /// Fails with [`CombinatorError::InvalidArgument`] when `length` is 0 or
    /// too large for the digit buffer to be allocated.
    pub fn new(length: usize, max_digit: u32) -> Result<Self, CombinatorError> {
        if length == 0 {
            return Err(CombinatorError::InvalidArgument(
                "length must be >= 1".to_string(),
            ));
        }

        let cursor = Cursor::zeroed(length, max_digit).map_err(|e| {
            CombinatorError::InvalidArgument(format!("length {length} cannot be allocated: {e}"))
        })?;

        debug!(length, max_digit, "combinator constructed");
        Ok(Self {
            length,
            max_digit,
            cursor,
            emitted: 0,
        })
    }

    /// Create an enumerator from signed parameters
    ///
    /// Rejects `length < 1`, `max_digit < 0`, and values that do not fit the
    /// unsigned representation or cannot be allocated.
    pub fn from_signed(length: i64, max_digit: i64) -> Result<Self, CombinatorError> {
        let (length, max_digit) = signed_parameters(length, max_digit)?;
        Self::new(length, max_digit)
    }

    /// Fresh enumerator with the same parameters, positioned at all zeros
    pub fn restarted(&self) -> Self {
        let mut cursor = self.cursor.clone();
        cursor.reset();
        Self {
            length: self.length,
            max_digit: self.max_digit,
            cursor,
            emitted: 0,
        }
    }

    /// Number of positions in every sequence
    pub fn length(&self) -> usize {
        self.length
    }

    /// Inclusive upper bound of every position
    pub fn max_digit(&self) -> u32 {
        self.max_digit
    }

    /// Alphabet size, `max_digit + 1`
    pub fn radix(&self) -> u64 {
        u64::from(self.max_digit) + 1
    }

    /// Lifecycle state; `Exhausted` once every sequence has been emitted
    pub fn state(&self) -> CursorState {
        self.cursor.state()
    }

    /// Whether every sequence has been emitted
    pub fn is_exhausted(&self) -> bool {
        self.cursor.state() == CursorState::Exhausted
    }

    /// Sequences emitted so far
    pub fn emitted(&self) -> u128 {
        self.emitted
    }

    /// Sequences not yet emitted, `None` if the count overflows `u128`
    pub fn remaining(&self) -> Option<u128> {
        if self.is_exhausted() {
            return Some(0);
        }
        let total = total_count(self.length, self.max_digit)?;
        Some(total - self.cursor.rank()?)
    }

    /// Emit every remaining sequence in order
    ///
    /// Leaves the enumerator exhausted; calling it again returns an empty
    /// `Vec` rather than restarting.
    pub fn drain_all(&mut self) -> Vec<Vec<u32>> {
        self.by_ref().collect()
    }
}

impl Iterator for Combinator {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let sequence = self.cursor.current()?.to_vec();
        self.emitted += 1;

        if self.cursor.advance() == CursorState::Exhausted {
            debug!(
                length = self.length,
                max_digit = self.max_digit,
                emitted = %self.emitted,
                "combinator exhausted"
            );
        }

        Some(sequence)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            // Uncountable in usize: a zero lower bound keeps collectors from
            // reserving up front
            _ => (0, None),
        }
    }
}

impl FusedIterator for Combinator {}

/// Total number of sequences, `(max_digit + 1)^length`
///
/// `None` when the count does not fit in `u128`.
pub fn total_count(length: usize, max_digit: u32) -> Option<u128> {
    let radix = u128::from(max_digit) + 1;
    let exp = u32::try_from(length).ok()?;
    radix.checked_pow(exp)
}

/// Validate signed parameters and convert them to the unsigned form
///
/// Rejects `length < 1`, `max_digit < 0`, and values that do not fit. No
/// digit buffer is allocated, so counting callers can use this alone.
pub fn signed_parameters(length: i64, max_digit: i64) -> Result<(usize, u32), CombinatorError> {
    if length < 1 {
        return Err(CombinatorError::InvalidArgument(format!(
            "length must be >= 1, got {length}"
        )));
    }
    if max_digit < 0 {
        return Err(CombinatorError::InvalidArgument(format!(
            "max digit must be >= 0, got {max_digit}"
        )));
    }

    let length = usize::try_from(length).map_err(|_| {
        CombinatorError::InvalidArgument(format!("length {length} is too large"))
    })?;
    let max_digit = u32::try_from(max_digit).map_err(|_| {
        CombinatorError::InvalidArgument(format!("max digit {max_digit} exceeds {}", u32::MAX))
    })?;

    Ok((length, max_digit))
}

/// Shorthand for [`Combinator::new`]
pub fn sequences(length: usize, max_digit: u32) -> Result<Combinator, CombinatorError> {
    Combinator::new(length, max_digit)
}
