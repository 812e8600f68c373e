use std::{
    fmt::{self, Debug, Formatter},
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

/// Index of an occupied slot in a [`List`].
type Link = Option<usize>;

#[derive(Debug)]
struct Node<T> {
    value: T,
    prev: Link,
    next: Link,
}

/// A doubly-ended, doubly-linked sequence.
///
/// Nodes live in a slot vector and link to each other by index, so
/// detaching a node never invalidates the others. Freed slots are reused
/// by later insertions.
pub struct List<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Link,
    tail: Link,
    len: usize,
    id: u64,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

/// Pull-based position inside a [`List`].
///
/// A cursor snapshots its starting endpoint and direction when created and
/// does not borrow the list, which lets [`List::truncate_to_cursor`] take
/// the list mutably while the cursor stays live. Any other structural
/// change to the list invalidates the cursor, and a cursor only works on
/// the list that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    current: Link,
    direction: Direction,
    list_id: u64,
    generation: u64,
}

impl Cursor {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }

    /// Returns the value under the cursor without moving it.
    pub fn peek<'a, T>(&self, list: &'a List<T>) -> Option<&'a T> {
        list.check_cursor(self);
        self.current.map(|idx| &list.node(idx).value)
    }

    /// Returns the value under the cursor and steps toward the far endpoint.
    /// An exhausted cursor yields `None` and stays exhausted.
    pub fn next<'a, T>(&mut self, list: &'a List<T>) -> Option<&'a T> {
        list.check_cursor(self);
        let idx = self.current?;
        let node = list.node(idx);
        self.current = match self.direction {
            Direction::Forward => node.next,
            Direction::Backward => node.prev,
        };
        Some(&node.value)
    }
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
            generation: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn add_first(&mut self, value: T) {
        let idx = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(old_head) => self.node_mut(old_head).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
        self.len += 1;
        self.generation += 1;
    }

    pub fn add_last(&mut self, value: T) {
        let idx = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(old_tail) => self.node_mut(old_tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        self.generation += 1;
    }

    pub fn get_first(&self) -> Option<&T> {
        self.head.map(|idx| &self.node(idx).value)
    }

    pub fn get_last(&self) -> Option<&T> {
        self.tail.map(|idx| &self.node(idx).value)
    }

    pub fn remove_first(&mut self) -> Option<T> {
        let idx = self.head?;
        let node = self.release(idx);

        if self.head == self.tail {
            self.head = None;
            self.tail = None;
        } else {
            self.head = node.next;
            if let Some(new_head) = self.head {
                self.node_mut(new_head).prev = None;
            }
        }
        self.len -= 1;
        self.generation += 1;
        Some(node.value)
    }

    pub fn remove_last(&mut self) -> Option<T> {
        let idx = self.tail?;
        let node = self.release(idx);

        if self.head == self.tail {
            self.head = None;
            self.tail = None;
        } else {
            self.tail = node.prev;
            if let Some(new_tail) = self.tail {
                self.node_mut(new_tail).next = None;
            }
        }
        self.len -= 1;
        self.generation += 1;
        Some(node.value)
    }

    /// Drops every element, front to back.
    pub fn clear(&mut self) {
        while self.remove_first().is_some() {}
        self.slots.clear();
        self.free.clear();
    }

    pub fn cursor_head(&self) -> Cursor {
        Cursor {
            current: self.head,
            direction: Direction::Forward,
            list_id: self.id,
            generation: self.generation,
        }
    }

    pub fn cursor_tail(&self) -> Cursor {
        Cursor {
            current: self.tail,
            direction: Direction::Backward,
            list_id: self.id,
            generation: self.generation,
        }
    }

    /// Drops every element between the cursor's starting endpoint and the
    /// cursor's current element (exclusive of current), then re-homes that
    /// endpoint at current. An exhausted cursor clears the whole list.
    ///
    /// Returns the number of elements dropped. The cursor stays valid.
    pub fn truncate_to_cursor(&mut self, cursor: &mut Cursor) -> usize {
        self.check_cursor(cursor);
        let before = self.len;

        match cursor.current {
            None => self.clear(),
            Some(current) => match cursor.direction {
                Direction::Forward => {
                    while self.head != Some(current) && self.remove_first().is_some() {}
                }
                Direction::Backward => {
                    while self.tail != Some(current) && self.remove_last().is_some() {}
                }
            },
        }

        cursor.generation = self.generation;
        before - self.len
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn check_cursor(&self, cursor: &Cursor) {
        assert_eq!(
            cursor.list_id, self.id,
            "list cursor used on a list it was not created from"
        );
        assert_eq!(
            cursor.generation, self.generation,
            "list cursor used after the list was modified"
        );
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn release(&mut self, idx: usize) -> Node<T> {
        let node = self.slots[idx]
            .take()
            .unwrap_or_else(|| unreachable!("list link to vacant slot {idx}"));
        self.free.push(idx);
        node
    }

    fn node(&self, idx: usize) -> &Node<T> {
        self.slots[idx]
            .as_ref()
            .unwrap_or_else(|| unreachable!("list link to vacant slot {idx}"))
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        self.slots[idx]
            .as_mut()
            .unwrap_or_else(|| unreachable!("list link to vacant slot {idx}"))
    }
}

impl<T: Clone> List<T> {
    /// Copies the list, preserving element order.
    pub fn duplicate(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

pub struct Iter<'a, T> {
    list: &'a List<T>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front?);
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back?);
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
