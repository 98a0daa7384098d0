//! Slot storage addressed by stable [`SlotId`] handles.
//!
//! Vacant slots form a chain threaded through the slots themselves (each
//! vacant slot records the next vacant index), so reuse needs no side table
//! and the most recently freed slot is handed out first. The backing `Vec`
//! only grows to the high-water mark of live values.
//!
//! A `SlotId` stays valid until its value is removed; after that the same
//! index may name a different value.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
enum Slot<T> {
    Occupied(T),
    Vacant { next_free: Option<usize> },
}

#[derive(Debug)]
pub struct SlotArena<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> SlotArena<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            len: 0,
        }
    }

    /// Stores `value`, reusing the most recently vacated slot if there is one.
    pub fn insert(&mut self, value: T) -> SlotId {
        let reused = self
            .free_head
            .and_then(|index| self.slots.get_mut(index).map(|slot| (index, slot)));

        let index = match reused {
            Some((index, slot)) => {
                if let Slot::Vacant { next_free } = *slot {
                    self.free_head = next_free;
                }
                *slot = Slot::Occupied(value);
                index
            },
            None => {
                self.slots.push(Slot::Occupied(value));
                self.slots.len() - 1
            },
        };
        self.len += 1;
        SlotId(index)
    }

    /// Vacates `id` and returns its value. A vacant or unknown id yields `None`.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        let slot = self.slots.get_mut(id.0)?;
        if let Slot::Vacant { .. } = slot {
            return None;
        }
        let vacated = std::mem::replace(
            slot,
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id.0);
        self.len -= 1;
        match vacated {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub fn get(&self, id: SlotId) -> Option<&T> {
        match self.slots.get(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        match self.slots.get_mut(id.0)? {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant { .. } => None,
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every value. Previously issued ids become invalid.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }

    /// Like [`clear`](Self::clear), and also releases the backing storage.
    pub fn clear_shrink(&mut self) {
        self.clear();
        self.slots.shrink_to_fit();
    }

    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacated_slots_are_reused_most_recent_first() {
        let mut arena = SlotArena::with_capacity(4);
        let a = arena.insert("a");
        let b = arena.insert("b");
        let c = arena.insert("c");

        assert_eq!(arena.remove(a), Some("a"));
        assert_eq!(arena.remove(c), Some("c"));

        assert_eq!(arena.insert("d"), c);
        assert_eq!(arena.insert("e"), a);
        assert_eq!(arena.insert("f").index(), 3);

        assert_eq!(arena.get(b), Some(&"b"));
        assert_eq!(arena.get(a), Some(&"e"));
        assert_eq!(arena.len(), 4);
    }

    #[test]
    fn removing_twice_yields_nothing() {
        let mut arena = SlotArena::with_capacity(1);
        let id = arena.insert(7u32);
        assert_eq!(arena.remove(id), Some(7));
        assert_eq!(arena.remove(id), None);
        assert_eq!(arena.get(id), None);
        assert!(arena.is_empty());
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut arena: SlotArena<u8> = SlotArena::with_capacity(0);
        let stray = SlotId(42);
        assert_eq!(arena.get(stray), None);
        assert_eq!(arena.get_mut(stray), None);
        assert_eq!(arena.remove(stray), None);
    }

    #[test]
    fn churn_stays_within_high_water_mark() {
        let mut arena = SlotArena::with_capacity(3);
        for round in 0..50u32 {
            let ids: Vec<SlotId> = (0..3).map(|i| arena.insert(round * 3 + i)).collect();
            assert!(ids.iter().all(|id| id.index() < 3));
            for id in ids {
                arena.remove(id);
            }
        }
        assert!(arena.is_empty());
    }

    #[test]
    fn get_mut_writes_through() {
        let mut arena = SlotArena::with_capacity(1);
        let id = arena.insert(String::from("x"));
        if let Some(value) = arena.get_mut(id) {
            value.push('y');
        }
        assert_eq!(arena.get(id).map(String::as_str), Some("xy"));
    }

    #[test]
    fn clear_shrink_resets_numbering() {
        let mut arena = SlotArena::with_capacity(8);
        for i in 0..8 {
            arena.insert(i);
        }
        arena.clear_shrink();
        assert!(arena.is_empty());
        assert_eq!(arena.insert(99).index(), 0);
    }
}
