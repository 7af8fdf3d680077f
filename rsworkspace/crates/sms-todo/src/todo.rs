use std::sync::{Mutex, MutexGuard, PoisonError};

/// Ordered todo items. Duplicates are allowed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TodoList {
    items: Vec<String>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    /// Removes the item at the 1-based `position`, returning it.
    ///
    /// Returns `None` and leaves the list untouched when `position` is outside
    /// `1..=len`.
    pub fn remove(&mut self, position: usize) -> Option<String> {
        let index = position.checked_sub(1)?;
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}

impl<S: Into<String>> FromIterator<S> for TodoList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// The one list shared by every inbound request.
///
/// Each command runs inside a single critical section so concurrent requests
/// never interleave their reads and writes.
#[derive(Debug, Default)]
pub struct TodoStore {
    list: Mutex<TodoList>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(list: TodoList) -> Self {
        Self {
            list: Mutex::new(list),
        }
    }

    /// Locks the list. A poisoned lock is recovered: every mutation is a
    /// single `Vec` operation, so a panic elsewhere cannot leave it half-done.
    pub fn lock(&self) -> MutexGuard<'_, TodoList> {
        self.list.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> TodoList {
        self.lock().clone()
    }
}
