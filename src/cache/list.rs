//! Recency List Module
//!
//! Arena-backed doubly linked list holding cache entries in insertion order.

use super::CacheEntry;

// == Node ==
#[derive(Debug)]
struct Node<V> {
    entry: CacheEntry<V>,
    prev: Option<usize>,
    next: Option<usize>,
}

// == Recency List ==
/// Ordered container of entries, newest first.
///
/// Nodes live in a slot vector and link to each other by index:
/// - Head = most recently inserted
/// - Tail = least recently inserted
///
/// Freed slots are recycled, so a list that never grows past its initial
/// capacity never reallocates.
#[derive(Debug)]
pub struct RecencyList<V> {
    slots: Vec<Option<Node<V>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<V> RecencyList<V> {
    // == Constructor ==
    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts an entry at the head and returns its slot index.
    pub fn push_front(&mut self, entry: CacheEntry<V>) -> usize {
        let node = Node {
            entry,
            prev: None,
            next: self.head,
        };

        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };

        match self.head {
            Some(old_head) => {
                if let Some(n) = self.slots[old_head].as_mut() {
                    n.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
        idx
    }

    // == Remove ==
    /// Unlinks the node at `idx` and returns its entry.
    ///
    /// Returns None if the slot is vacant.
    pub fn remove(&mut self, idx: usize) -> Option<CacheEntry<V>> {
        let node = self.slots.get_mut(idx)?.take()?;

        match node.prev {
            Some(prev) => {
                if let Some(n) = self.slots[prev].as_mut() {
                    n.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => {
                if let Some(n) = self.slots[next].as_mut() {
                    n.prev = node.prev;
                }
            }
            None => self.tail = node.prev,
        }

        self.free.push(idx);
        self.len -= 1;
        Some(node.entry)
    }

    // == Pop Back ==
    /// Removes and returns the least recently inserted entry.
    pub fn pop_back(&mut self) -> Option<CacheEntry<V>> {
        let tail = self.tail?;
        self.remove(tail)
    }

    // == Find ==
    /// Returns the slot of the first node, head to tail, matching `pred`.
    pub fn find<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&CacheEntry<V>) -> bool,
    {
        self.iter().find(|&(_, entry)| pred(entry)).map(|(idx, _)| idx)
    }

    // == Get ==
    /// Returns the entry in slot `idx`, if occupied.
    pub fn get(&self, idx: usize) -> Option<&CacheEntry<V>> {
        self.slots.get(idx)?.as_ref().map(|n| &n.entry)
    }

    // == Retain ==
    /// Walks head to tail removing every entry for which `keep` is false.
    ///
    /// Returns the removed entries in the order they were visited.
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<CacheEntry<V>>
    where
        F: FnMut(&CacheEntry<V>) -> bool,
    {
        let mut removed = Vec::new();
        let mut cursor = self.head;

        while let Some(idx) = cursor {
            let Some(node) = self.slots[idx].as_ref() else {
                break;
            };
            cursor = node.next;
            if !keep(&node.entry) {
                if let Some(entry) = self.remove(idx) {
                    removed.push(entry);
                }
            }
        }

        removed
    }

    // == Iter ==
    /// Iterates `(slot, entry)` pairs from head to tail.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    // == Length ==
    /// Returns the number of linked entries.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    /// Returns true if no entries are linked.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

// == Iterator ==
/// Head-to-tail iterator over a [`RecencyList`].
pub struct Iter<'a, V> {
    list: &'a RecencyList<V>,
    cursor: Option<usize>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (usize, &'a CacheEntry<V>);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let node = self.list.slots[idx].as_ref()?;
        self.cursor = node.next;
        Some((idx, &node.entry))
    }
}
