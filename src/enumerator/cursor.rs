//! Odometer cursor
//!
//! Holds the next sequence due for emission plus the exhaustion flag.
//! Advancing increments the rightmost digit first and carries left on
//! overflow, exactly like a mechanical counter.

use std::collections::TryReserveError;

use tracing::trace;

/// Lifecycle state of a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Holds a sequence due for emission
    Ready,

    /// Every sequence has been emitted (terminal)
    Exhausted,
}

/// Current position of an enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// Digits, leftmost = most significant
    digits: Vec<u32>,

    /// Inclusive upper bound of every digit
    max_digit: u32,

    state: CursorState,
}

impl Cursor {
    /// All-zero cursor of the given width
    ///
    /// Fails instead of aborting when `length` digits cannot be allocated.
    pub fn zeroed(length: usize, max_digit: u32) -> Result<Self, TryReserveError> {
        let mut digits = Vec::new();
        digits.try_reserve_exact(length)?;
        digits.resize(length, 0);

        Ok(Self {
            digits,
            max_digit,
            state: CursorState::Ready,
        })
    }

    /// Rewind to the all-zero sequence, reusing the digit buffer
    pub fn reset(&mut self) {
        self.digits.fill(0);
        self.state = CursorState::Ready;
    }

    /// Current state
    pub fn state(&self) -> CursorState {
        self.state
    }

    /// Digits of the sequence due for emission, `None` once exhausted
    pub fn current(&self) -> Option<&[u32]> {
        match self.state {
            CursorState::Ready => Some(self.digits.as_slice()),
            CursorState::Exhausted => None,
        }
    }

    /// Apply one odometer increment
    ///
    /// Walks from the least-significant position toward the most-significant
    /// one. A carry out of position 0 means every digit was already at
    /// `max_digit`, so the cursor becomes exhausted.
    pub fn advance(&mut self) -> CursorState {
        if self.state == CursorState::Exhausted {
            return self.state;
        }

        for digit in self.digits.iter_mut().rev() {
            if *digit < self.max_digit {
                *digit += 1;
                return self.state;
            }
            *digit = 0;
        }

        trace!(length = self.digits.len(), "carry out of most significant position");
        self.state = CursorState::Exhausted;
        self.state
    }

    /// Zero-based position of the current sequence in odometer order
    ///
    /// `None` if the cursor is exhausted or the rank does not fit in `u128`.
    pub fn rank(&self) -> Option<u128> {
        self.current()?;
        let radix = u128::from(self.max_digit) + 1;
        self.digits.iter().try_fold(0u128, |acc, &digit| {
            acc.checked_mul(radix)?.checked_add(u128::from(digit))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_carries_left() {
        let mut cursor = Cursor::zeroed(3, 1).unwrap();
        let mut seen = vec![cursor.current().unwrap().to_vec()];

        while cursor.advance() == CursorState::Ready {
            seen.push(cursor.current().unwrap().to_vec());
        }

        assert_eq!(seen.len(), 8);
        assert_eq!(seen[1], vec![0, 0, 1]);
        assert_eq!(seen[2], vec![0, 1, 0]); // carry into the middle digit
        assert_eq!(seen[4], vec![1, 0, 0]); // carry all the way left
        assert_eq!(seen[7], vec![1, 1, 1]);
    }

    #[test]
    fn test_exhausted_is_terminal() {
        let mut cursor = Cursor::zeroed(2, 0).unwrap();
        assert_eq!(cursor.advance(), CursorState::Exhausted);
        assert_eq!(cursor.current(), None);

        // Further advances neither panic nor revive the cursor
        assert_eq!(cursor.advance(), CursorState::Exhausted);
        assert_eq!(cursor.current(), None);
    }

    #[test]
    fn test_rank_tracks_position() {
        let mut cursor = Cursor::zeroed(2, 2).unwrap();
        for expected in 0..9u128 {
            assert_eq!(cursor.rank(), Some(expected));
            cursor.advance();
        }
        assert_eq!(cursor.rank(), None);
    }

    #[test]
    fn test_max_digit_at_u32_limit() {
        let mut cursor = Cursor::zeroed(1, u32::MAX).unwrap();
        cursor.digits[0] = u32::MAX - 1;
        assert_eq!(cursor.advance(), CursorState::Ready);
        assert_eq!(cursor.current(), Some(&[u32::MAX][..]));
        assert_eq!(cursor.advance(), CursorState::Exhausted);
    }

    #[test]
    fn test_unallocatable_width_is_error() {
        assert!(Cursor::zeroed(usize::MAX / 2, 1).is_err());
    }

    #[test]
    fn test_reset_revives_exhausted_cursor() {
        let mut cursor = Cursor::zeroed(2, 1).unwrap();
        while cursor.advance() == CursorState::Ready {}

        cursor.reset();
        assert_eq!(cursor.state(), CursorState::Ready);
        assert_eq!(cursor.current(), Some(&[0, 0][..]));
    }
}
