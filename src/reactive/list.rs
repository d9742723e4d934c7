//! Observable ordered collection.
//!
//! [`ObservableList`] owns a `Vec<T>` and reports every mutation to a
//! [`ListObserver`] before returning. The observer sees the items as they are
//! *after* the change, plus a [`ListChange`] describing what happened. An
//! observer error is propagated to the caller of the mutating method; the item
//! change itself has already been applied at that point.

use std::ops::Index;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// An index did not address an existing position in a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("index {index} out of range for length {len}")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

// ---------------------------------------------------------------------------
// ListChange / ListObserver
// ---------------------------------------------------------------------------

/// What a mutation did to an [`ObservableList`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListChange<'a, T> {
    /// An item now lives at `index`; later items moved up by one.
    Inserted { index: usize },
    /// `item` was removed from `index`; later items moved down by one.
    Removed { index: usize, item: &'a T },
    /// The item at `index` was modified in place.
    Updated { index: usize },
    /// The contents were replaced wholesale (cleared or reassigned).
    Reset,
}

/// Receives change notifications from an [`ObservableList`].
pub trait ListObserver<T> {
    /// Error returned by the observer. Must absorb index errors raised by the
    /// list itself so both surface through one type.
    type Error: From<IndexOutOfRange>;

    /// Called synchronously after every mutation.
    fn on_change(&mut self, items: &[T], change: ListChange<'_, T>) -> Result<(), Self::Error>;
}

/// The unit observer ignores every change.
impl<T> ListObserver<T> for () {
    type Error = IndexOutOfRange;

    fn on_change(&mut self, _items: &[T], _change: ListChange<'_, T>) -> Result<(), Self::Error> {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ObservableList
// ---------------------------------------------------------------------------

/// An ordered sequence whose mutations notify an observer.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservableList<T> {
    items: Vec<T>,
}

impl<T> Default for ObservableList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for ObservableList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> ObservableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `item` at `index` (which may equal `len()`).
    pub fn insert<O>(&mut self, index: usize, item: T, observer: &mut O) -> Result<(), O::Error>
    where
        O: ListObserver<T>,
    {
        if index > self.items.len() {
            return Err(IndexOutOfRange { index, len: self.items.len() }.into());
        }
        self.items.insert(index, item);
        observer.on_change(&self.items, ListChange::Inserted { index })
    }

    /// Append `item`.
    pub fn push<O>(&mut self, item: T, observer: &mut O) -> Result<(), O::Error>
    where
        O: ListObserver<T>,
    {
        let index = self.items.len();
        self.insert(index, item, observer)
    }

    /// Remove and return the item at `index`.
    pub fn remove<O>(&mut self, index: usize, observer: &mut O) -> Result<T, O::Error>
    where
        O: ListObserver<T>,
    {
        if index >= self.items.len() {
            return Err(IndexOutOfRange { index, len: self.items.len() }.into());
        }
        let item = self.items.remove(index);
        observer.on_change(&self.items, ListChange::Removed { index, item: &item })?;
        Ok(item)
    }

    /// Remove every item. Reports [`ListChange::Reset`] even when already empty.
    pub fn clear<O>(&mut self, observer: &mut O) -> Result<(), O::Error>
    where
        O: ListObserver<T>,
    {
        self.items.clear();
        observer.on_change(&self.items, ListChange::Reset)
    }

    /// Replace the contents with `items`.
    pub fn replace_all<O>(&mut self, items: Vec<T>, observer: &mut O) -> Result<(), O::Error>
    where
        O: ListObserver<T>,
    {
        self.items = items;
        observer.on_change(&self.items, ListChange::Reset)
    }

    /// Modify the item at `index` in place.
    pub fn update<O, F>(&mut self, index: usize, f: F, observer: &mut O) -> Result<(), O::Error>
    where
        O: ListObserver<T>,
        F: FnOnce(&mut T),
    {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(IndexOutOfRange { index, len })?;
        f(item);
        observer.on_change(&self.items, ListChange::Updated { index })
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> ObservableList<T> {
    /// Position of the first item equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }
}

impl<T> Index<usize> for ObservableList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a ObservableList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
