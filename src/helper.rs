// A collection of internal helper types
// like lists that live entirely on the stack

use crate::consts::MAX_GROUPS;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

/// List with room for one entry per group of a ticket.
///
/// Operands, operators and priority labels of a candidate expression are all bounded
/// by the number of digits, so they never need the heap. Exceeding the capacity is a bug
/// and panics like an out of bounds index would.
#[derive(Copy, Clone)]
pub(crate) struct SmallList<T> {
    items: [T; MAX_GROUPS],
    len: u8,
}

impl<T: Copy + Default> SmallList<T> {
    #[inline]
    pub fn new() -> Self {
        SmallList {
            items: [T::default(); MAX_GROUPS],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, item: T) {
        self.items[self.len as usize] = item;
        self.len += 1;
    }

    /// Inserts `item` at `idx`, shifting all later entries one slot to the right.
    pub fn insert(&mut self, idx: usize, item: T) {
        let len = self.len as usize;
        assert!(idx <= len && len < MAX_GROUPS);
        self.items.copy_within(idx..len, idx + 1);
        self.items[idx] = item;
        self.len += 1;
    }

    /// Removes the entry at `idx`, shifting all later entries one slot to the left.
    pub fn remove(&mut self, idx: usize) -> T {
        let len = self.len as usize;
        assert!(idx < len);
        let item = self.items[idx];
        self.items.copy_within(idx + 1..len, idx);
        self.items[len - 1] = T::default();
        self.len -= 1;
        item
    }
}

impl<T: Copy + Default> Default for SmallList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for SmallList<T> {
    type Target = [T];
    #[inline(always)]
    fn deref(&self) -> &Self::Target {
        &self.items[..self.len as usize]
    }
}

impl<T> DerefMut for SmallList<T> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items[..self.len as usize]
    }
}

impl<T: Copy + Default> FromIterator<T> for SmallList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SmallList::new();
        for item in iter {
            list.push(item);
        }
        list
    }
}

// comparisons only look at the occupied slots
impl<T: PartialEq> PartialEq for SmallList<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for SmallList<T> {}

impl<T: Hash> Hash for SmallList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state)
    }
}

impl<T: fmt::Debug> fmt::Debug for SmallList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
