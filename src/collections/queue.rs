//! FIFO container

use std::collections::VecDeque;

/// First-in, first-out container over a ring buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Append at the back
    pub fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove the oldest item, `None` when empty
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Item that the next `pop` would return
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds nothing
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_order_is_preserved() {
        let mut queue = Queue::new();
        queue.extend(["a", "b"].map(String::from));
        queue.push("c".to_string());

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek().map(String::as_str), Some("a"));
        assert_eq!(queue.pop().as_deref(), Some("a"));
        assert_eq!(queue.pop().as_deref(), Some("b"));
        assert_eq!(queue.pop().as_deref(), Some("c"));
        assert_eq!(queue.pop(), None);
    }
}
