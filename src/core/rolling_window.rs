use crate::error::{ChartError, ChartResult};

/// Fixed-capacity FIFO buffer.
///
/// The window is created full (every slot holds a placeholder) and keeps its
/// length for its whole lifetime: each [`RollingWindow::shift_in`] writes one
/// element at the newest end and evicts exactly one from the oldest end.
/// Slots are stored in a ring, so a shift never moves the other elements.
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    slots: Vec<T>,
    /// Index of the oldest element.
    head: usize,
}

impl<T: Clone> RollingWindow<T> {
    /// Creates a window of `capacity` slots, each a clone of `placeholder`.
    pub fn filled(capacity: usize, placeholder: T) -> ChartResult<Self> {
        if capacity == 0 {
            return Err(ChartError::EmptyWindow);
        }
        Ok(Self {
            slots: vec![placeholder; capacity],
            head: 0,
        })
    }

    /// Overwrites every slot with `placeholder`.
    pub fn fill(&mut self, placeholder: T) {
        for slot in &mut self.slots {
            *slot = placeholder.clone();
        }
        self.head = 0;
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> RollingWindow<T> {
    /// Builds a window from existing contents, oldest first.
    pub fn from_vec(items: Vec<T>) -> ChartResult<Self> {
        if items.is_empty() {
            return Err(ChartError::EmptyWindow);
        }
        Ok(Self {
            slots: items,
            head: 0,
        })
    }

    /// Appends `item` as the newest element and returns the evicted oldest one.
    pub fn shift_in(&mut self, item: T) -> T {
        // The oldest slot becomes the newest one once head advances past it.
        let evicted = std::mem::replace(&mut self.slots[self.head], item);
        self.head = (self.head + 1) % self.slots.len();
        evicted
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always equal to [`RollingWindow::len`].
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Element at logical position `index`, where 0 is the oldest.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.slots.len() {
            return None;
        }
        self.slots.get((self.head + index) % self.slots.len())
    }

    /// Oldest element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// Newest element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.slots.len().checked_sub(1).and_then(|i| self.get(i))
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator + Clone {
        let (newer, older) = self.slots.split_at(self.head);
        RingIter {
            inner: older.iter().chain(newer.iter()),
            remaining: self.slots.len(),
        }
    }
}

impl<T: PartialEq> PartialEq for RollingWindow<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

#[derive(Clone)]
struct RingIter<I> {
    inner: I,
    remaining: usize,
}

impl<I: Iterator> Iterator for RingIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<I: DoubleEndedIterator> DoubleEndedIterator for RingIter<I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let item = self.inner.next_back()?;
        self.remaining -= 1;
        Some(item)
    }
}

impl<I: Iterator> ExactSizeIterator for RingIter<I> {}
