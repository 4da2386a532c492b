//! Open lists for the graph search. All three disciplines share the
//! [`Frontier`] contract so the search loop does not care which one it is
//! driving.

use crate::search::Cost;
use priority_queue::PriorityQueue;
use std::{cmp::Reverse, collections::VecDeque, fmt::Debug, hash::Hash};

pub trait Frontier<T>: Debug {
    /// Insert an item. Stacks and queues ignore the priority.
    fn push(&mut self, item: T, priority: Cost);

    /// Insert an item, or lower its priority if it is already present with a
    /// higher one. Does nothing if the present priority is equal or lower.
    fn update(&mut self, item: T, priority: Cost) {
        self.push(item, priority);
    }

    fn pop(&mut self) -> Option<T>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
#[derive(Debug)]
pub struct LifoFrontier<T> {
    stack: Vec<T>,
}

impl<T> LifoFrontier<T> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<T> Default for LifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Frontier<T> for LifoFrontier<T> {
    fn push(&mut self, item: T, _priority: Cost) {
        self.stack.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// First in, first out.
#[derive(Debug)]
pub struct FifoFrontier<T> {
    queue: VecDeque<T>,
}

impl<T> FifoFrontier<T> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Default for FifoFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Frontier<T> for FifoFrontier<T> {
    fn push(&mut self, item: T, _priority: Cost) {
        self.queue.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Lowest priority first, ties broken in insertion order. Each item is held
/// at most once, so [`Frontier::update`] is a true decrease-key.
#[derive(Debug)]
pub struct PriorityFrontier<T: Hash + Eq> {
    queue: PriorityQueue<T, Reverse<(Cost, u64)>>,
    insertions: u64,
}

impl<T: Hash + Eq> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            insertions: 0,
        }
    }

    fn next_key(&mut self, priority: Cost) -> Reverse<(Cost, u64)> {
        self.insertions += 1;
        Reverse((priority, self.insertions))
    }

    /// The item that would be popped next, with its priority.
    pub fn peek(&self) -> Option<(&T, Cost)> {
        self.queue
            .peek()
            .map(|(item, Reverse((priority, _)))| (item, *priority))
    }

    pub fn priority(&self, item: &T) -> Option<Cost> {
        self.queue
            .get_priority(item)
            .map(|Reverse((priority, _))| *priority)
    }
}

impl<T: Hash + Eq> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Debug> Frontier<T> for PriorityFrontier<T> {
    fn push(&mut self, item: T, priority: Cost) {
        let key = self.next_key(priority);
        self.queue.push(item, key);
    }

    fn update(&mut self, item: T, priority: Cost) {
        // A later insertion counter only wins when the cost is strictly
        // lower, so equal priorities leave the entry untouched.
        let key = self.next_key(priority);
        self.queue.push_increase(item, key);
    }

    fn pop(&mut self) -> Option<T> {
        self.queue.pop().map(|(item, _)| item)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierKind {
    Lifo,
    Fifo,
    Priority,
}

impl FrontierKind {
    pub fn create<T: Hash + Eq + Debug + 'static>(&self) -> Box<dyn Frontier<T>> {
        match self {
            FrontierKind::Lifo => Box::new(LifoFrontier::new()),
            FrontierKind::Fifo => Box::new(FifoFrontier::new()),
            FrontierKind::Priority => Box::new(PriorityFrontier::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    fn drain(frontier: &mut dyn Frontier<char>) -> String {
        let mut order = String::new();
        while let Some(item) = frontier.pop() {
            order.push(item);
        }
        order
    }

    fn fill(frontier: &mut dyn Frontier<char>) {
        frontier.push('a', OrderedFloat(3.));
        frontier.push('b', OrderedFloat(1.));
        frontier.push('c', OrderedFloat(2.));
    }

    #[test]
    fn disciplines() {
        for (kind, expected) in [
            (FrontierKind::Lifo, "cba"),
            (FrontierKind::Fifo, "abc"),
            (FrontierKind::Priority, "bca"),
        ] {
            let mut frontier = kind.create();
            assert!(frontier.is_empty());
            fill(frontier.as_mut());
            assert_eq!(frontier.len(), 3);
            assert_eq!(drain(frontier.as_mut()), expected, "{:?}", kind);
            assert!(frontier.is_empty());
        }
    }

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        let mut frontier = PriorityFrontier::new();
        for item in ['x', 'y', 'z'] {
            frontier.push(item, OrderedFloat(1.));
        }
        assert_eq!(drain(&mut frontier), "xyz");
    }

    #[test]
    fn update_only_lowers_priorities() {
        let mut frontier = PriorityFrontier::new();
        frontier.push('a', OrderedFloat(5.));
        frontier.push('b', OrderedFloat(3.));

        frontier.update('a', OrderedFloat(7.));
        assert_eq!(frontier.priority(&'a'), Some(OrderedFloat(5.)));

        frontier.update('a', OrderedFloat(1.));
        assert_eq!(frontier.priority(&'a'), Some(OrderedFloat(1.)));
        assert_eq!(frontier.peek(), Some((&'a', OrderedFloat(1.))));

        frontier.update('c', OrderedFloat(2.));
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier), "acb");
    }

    #[test]
    fn update_with_equal_priority_keeps_the_original_position() {
        let mut frontier = PriorityFrontier::new();
        frontier.push('a', OrderedFloat(1.));
        frontier.push('b', OrderedFloat(1.));
        frontier.update('a', OrderedFloat(1.));
        assert_eq!(drain(&mut frontier), "ab");
    }

    #[test]
    fn stacks_and_queues_treat_update_as_push() {
        let mut frontier = FifoFrontier::new();
        frontier.update('a', OrderedFloat(0.));
        frontier.update('b', OrderedFloat(0.));
        assert_eq!(drain(&mut frontier), "ab");
    }
}
