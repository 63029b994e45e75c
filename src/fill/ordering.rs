//! Pending-work containers that decide the traversal order of a fill.
//!
//! The engine only talks to [`OrderingStructure`], so swapping a [`Stack`]
//! for a [`Queue`] turns a depth-first fill into a breadth-first one.

use std::collections::VecDeque;

/// Container of items waiting to be explored.
pub trait OrderingStructure<T> {
    /// Add an item to the structure.
    fn add(&mut self, item: T);

    /// Remove the next item, or `None` when the structure is empty.
    fn remove(&mut self) -> Option<T>;

    fn is_empty(&self) -> bool;
}

/// Last-in-first-out ordering (depth-first fills).
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> OrderingStructure<T> for Stack<T> {
    fn add(&mut self, item: T) {
        self.items.push(item);
    }

    fn remove(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// First-in-first-out ordering (breadth-first fills).
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> OrderingStructure<T> for Queue<T> {
    fn add(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn remove(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
