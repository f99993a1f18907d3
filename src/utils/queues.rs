use std::iter::FusedIterator;

use super::random::RandomSource;

/// A first-in-random-out queue.
///
/// Elements come out of [`dequeue`](Self::dequeue) in uniformly random order,
/// and every call to [`iter`](Self::iter) or [`iter_mut`](Self::iter_mut)
/// walks the current contents in a freshly shuffled order. The order in
/// which elements were enqueued carries no meaning.
///
/// ```
/// use randq::RandomizedQueue;
///
/// let mut queue: RandomizedQueue<u32> = (1..=3).collect();
/// assert_eq!(queue.len(), 3);
///
/// let picked = queue.dequeue().unwrap();
/// assert!((1..=3).contains(&picked));
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Debug)]
pub struct RandomizedQueue<T> {
    data: Vec<T>,
    random: RandomSource,
}

impl<T> RandomizedQueue<T> {
    pub fn new() -> Self {
        Self::with_source(RandomSource::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        RandomizedQueue {
            data: Vec::with_capacity(capacity),
            random: RandomSource::new(),
        }
    }

    /// Creates an empty queue drawing its removals and samples from `random`.
    ///
    /// Iterator views always get their own entropy-seeded source, so a
    /// seeded queue makes `sample` and `dequeue` reproducible but not `iter`.
    pub fn with_source(random: RandomSource) -> Self {
        RandomizedQueue {
            data: Vec::new(),
            random,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn enqueue(&mut self, item: T) {
        self.data.push(item);
    }

    /// Returns a uniformly random element without removing it, or `None` if
    /// the queue is empty.
    ///
    /// Drawing advances the queue's random source, so this needs exclusive
    /// access: it cannot be called while an [`Iter`] over the queue is alive.
    /// The returned reference keeps the queue borrowed, so it cannot be held
    /// across a later `dequeue` that might move the element.
    ///
    /// ```compile_fail
    /// use randq::RandomizedQueue;
    ///
    /// let mut queue: RandomizedQueue<u32> = (0..3).collect();
    /// let view = queue.iter();
    /// queue.sample();
    /// drop(view);
    /// ```
    pub fn sample(&mut self) -> Option<&T> {
        if self.data.is_empty() {
            None
        } else {
            let random_index = self.random.draw(0, self.data.len() - 1);
            self.data.get(random_index)
        }
    }

    /// Removes and returns a uniformly random element in O(1), or `None` if
    /// the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.data.is_empty() {
            None
        } else {
            let len = self.data.len();
            let random_index = self.random.draw(0, len - 1);
            self.data.swap(random_index, len - 1);
            self.data.pop()
        }
    }

    /// Visits every element once, in an order shuffled anew on each call.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            source: Some(&self.data),
            cursor: Cursor::shuffled(self.data.len()),
        }
    }

    /// Like [`iter`](Self::iter), but yields mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let cursor = Cursor::shuffled(self.data.len());
        IterMut {
            slots: self.data.iter_mut().map(Some).collect(),
            cursor,
        }
    }
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for RandomizedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = RandomizedQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T> IntoIterator for &'a RandomizedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RandomizedQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for RandomizedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

// Traversal state shared by both views: a shuffled index order plus the
// half-open window [front, back) of positions not yet yielded.
#[derive(Debug, Clone, Default)]
struct Cursor {
    order: Vec<usize>,
    front: usize,
    back: usize,
}

impl Cursor {
    fn shuffled(len: usize) -> Self {
        let order = RandomSource::new().permutation(len);
        Cursor {
            order,
            front: 0,
            back: len,
        }
    }

    fn advance(&mut self) -> Option<usize> {
        if self.front == self.back {
            return None;
        }
        let index = self.order[self.front];
        self.front += 1;
        Some(index)
    }

    fn retreat(&mut self) -> Option<usize> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.order[self.back])
    }

    fn remaining(&self) -> usize {
        self.back - self.front
    }

    // Exhausted cursors are all at the end, whichever side drained them.
    fn same_position(&self, other: &Cursor) -> bool {
        (self.remaining() == 0 && other.remaining() == 0)
            || (self.front == other.front && self.back == other.back)
    }
}

/// Read-only view over a [`RandomizedQueue`] in shuffled order.
///
/// Two views compare equal when they borrow the same queue and have the
/// same front and back positions, regardless of their permutations. Fully
/// consumed views over the same queue are equal however they were drained.
/// Default views borrow nothing; they equal each other and no other view.
#[derive(Debug)]
pub struct Iter<'a, T> {
    source: Option<&'a Vec<T>>,
    cursor: Cursor,
}

impl<'a, T> Iter<'a, T> {
    fn item(&self, index: usize) -> Option<&'a T> {
        self.source.and_then(|items| items.get(index))
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor.advance()?;
        self.item(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.cursor.retreat()?;
        self.item(index)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            source: self.source,
            cursor: self.cursor.clone(),
        }
    }
}

impl<T> Default for Iter<'_, T> {
    fn default() -> Self {
        Iter {
            source: None,
            cursor: Cursor::default(),
        }
    }
}

impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.source, other.source) {
            (None, None) => true,
            (Some(a), Some(b)) => std::ptr::eq(a, b) && self.cursor.same_position(&other.cursor),
            _ => false,
        }
    }
}

impl<T> Eq for Iter<'_, T> {}

/// Mutable view over a [`RandomizedQueue`] in shuffled order.
///
/// Elements can be modified in place; the queue cannot grow or shrink while
/// the view is alive.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    slots: Vec<Option<&'a mut T>>,
    cursor: Cursor,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cursor.advance()?;
        self.slots[index].take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let index = self.cursor.retreat()?;
        self.slots[index].take()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T> Default for IterMut<'_, T> {
    fn default() -> Self {
        IterMut {
            slots: Vec::new(),
            cursor: Cursor::default(),
        }
    }
}

/// Owning iterator that drains a [`RandomizedQueue`] by repeated `dequeue`.
#[derive(Debug)]
pub struct IntoIter<T> {
    queue: RandomizedQueue<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
