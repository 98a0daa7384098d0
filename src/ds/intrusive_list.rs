//! Recency list: a doubly linked list threaded through a [`SlotArena`].
//!
//! Each node names its `newer` and `older` neighbour by [`SlotId`]. The head
//! is the most recently used node and the tail the least recently used, so
//! the cache only ever pushes at the head, promotes to the head and takes
//! from the tail.
//!
//! ```text
//!              newer ◄─────────────── older
//!   head ──► [id 4] ◄──► [id 0] ◄──► [id 2] ◄── tail
//!   (MRU)                                      (LRU)
//! ```
//!
//! Everything except iteration and [`IntrusiveList::validate_links`] is O(1).

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

#[derive(Debug)]
struct Link<T> {
    value: T,
    newer: Option<SlotId>,
    older: Option<SlotId>,
}

/// Values in recency order, addressed by stable [`SlotId`]s.
#[derive(Debug)]
pub struct IntrusiveList<T> {
    links: SlotArena<Link<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> IntrusiveList<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            links: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Most recently used value.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Least recently used value.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    #[inline]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.links.get(id).map(|link| &link.value)
    }

    #[inline]
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.links.get_mut(id).map(|link| &mut link.value)
    }

    /// Inserts `value` as the most recently used node.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.links.insert(Link {
            value,
            newer: None,
            older: None,
        });
        self.link_at_head(id);
        id
    }

    /// Takes the least recently used value.
    pub fn pop_back(&mut self) -> Option<T> {
        let tail = self.tail?;
        self.remove(tail)
    }

    /// Unlinks `id` and returns its value; `None` if `id` is not live.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.unlink(id)?;
        self.links.remove(id).map(|link| link.value)
    }

    /// Promotes `id` to the head. Returns `false` if `id` is not live.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if self.head == Some(id) {
            return true;
        }
        if self.unlink(id).is_none() {
            return false;
        }
        self.link_at_head(id);
        true
    }

    /// Values from most to least recently used.
    pub fn iter(&self) -> RecencyIter<'_, T> {
        RecencyIter {
            list: self,
            cursor: self.head,
            remaining: self.len(),
        }
    }

    /// Slot ids from most to least recently used.
    pub fn iter_ids(&self) -> RecencyIds<'_, T> {
        RecencyIds {
            list: self,
            cursor: self.head,
        }
    }

    pub fn clear(&mut self) {
        self.links.clear();
        self.head = None;
        self.tail = None;
    }

    /// Clears and releases the backing storage.
    pub fn clear_shrink(&mut self) {
        self.clear();
        self.links.clear_shrink();
    }

    pub fn reserve(&mut self, additional: usize) {
        self.links.reserve(additional);
    }

    /// Walks head to tail and checks that every hop is mirrored, that the
    /// walk ends at `tail` and that it visits exactly `len()` nodes.
    pub fn validate_links(&self) -> Result<(), InvariantError> {
        let live = self.len();
        let mut newer = None;
        let mut cursor = self.head;
        let mut walked = 0usize;

        while let Some(id) = cursor {
            if walked == live {
                return Err(InvariantError::new(format!(
                    "recency list runs past its {live} live nodes"
                )));
            }
            let link = self.links.get(id).ok_or_else(|| {
                InvariantError::new(format!("recency list reaches vacant slot {}", id.index()))
            })?;
            if link.newer != newer {
                return Err(InvariantError::new(format!(
                    "slot {} does not point back at its newer neighbour",
                    id.index()
                )));
            }
            walked += 1;
            newer = Some(id);
            cursor = link.older;
        }

        if newer != self.tail {
            return Err(InvariantError::new(
                "tail is not the last node reached from head",
            ));
        }
        if walked != live {
            return Err(InvariantError::new(format!(
                "reached {walked} nodes from head but {live} are live"
            )));
        }
        Ok(())
    }

    /// Joins the neighbours of `id` to each other. `id` keeps stale links.
    fn unlink(&mut self, id: SlotId) -> Option<()> {
        let link = self.links.get(id)?;
        let (newer, older) = (link.newer, link.older);
        self.set_older_of(newer, older);
        self.set_newer_of(older, newer);
        Some(())
    }

    /// Places a detached `id` ahead of the current head.
    fn link_at_head(&mut self, id: SlotId) {
        let previous_head = self.head;
        if let Some(link) = self.links.get_mut(id) {
            link.newer = None;
            link.older = previous_head;
        }
        self.set_newer_of(previous_head, Some(id));
        self.head = Some(id);
    }

    /// Sets `node.older`, or the head when `node` is `None`.
    fn set_older_of(&mut self, node: Option<SlotId>, older: Option<SlotId>) {
        match node.and_then(|id| self.links.get_mut(id)) {
            Some(link) => link.older = older,
            None => self.head = older,
        }
    }

    /// Sets `node.newer`, or the tail when `node` is `None`.
    fn set_newer_of(&mut self, node: Option<SlotId>, newer: Option<SlotId>) {
        match node.and_then(|id| self.links.get_mut(id)) {
            Some(link) => link.newer = newer,
            None => self.tail = newer,
        }
    }
}

pub struct RecencyIter<'a, T> {
    list: &'a IntrusiveList<T>,
    cursor: Option<SlotId>,
    remaining: usize,
}

impl<T> Clone for RecencyIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for RecencyIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let link = list.links.get(self.cursor?)?;
        self.cursor = link.older;
        self.remaining = self.remaining.saturating_sub(1);
        Some(&link.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RecencyIter<'_, T> {}

pub struct RecencyIds<'a, T> {
    list: &'a IntrusiveList<T>,
    cursor: Option<SlotId>,
}

impl<T> Iterator for RecencyIds<'_, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        self.cursor = self.list.links.get(id).and_then(|link| link.older);
        Some(id)
    }
}
