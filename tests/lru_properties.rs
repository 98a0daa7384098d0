//! Property-based tests for the LRU engine.
//!
//! Every operation sequence is replayed against a naive reference model that
//! keeps recency as a `VecDeque` (front = MRU). After each step the engine and
//! the model must agree on contents and on the complete recency order.

use std::collections::{HashMap, VecDeque};

use lrukit::error::KeyNotFound;
use lrukit::policy::lru::LruCache;
use proptest::prelude::*;

// ==============================================
// Strategies
// ==============================================

#[derive(Debug, Clone)]
enum Op {
    Put(u16, i32),
    Get(u16),
    Peek(u16),
    Touch(u16),
    Remove(u16),
    PopLru,
    Initialize(usize),
    Reset,
}

fn arb_key() -> impl Strategy<Value = u16> {
    0u16..24
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (arb_key(), any::<i32>()).prop_map(|(k, v)| Op::Put(k, v)),
        4 => arb_key().prop_map(Op::Get),
        1 => arb_key().prop_map(Op::Peek),
        1 => arb_key().prop_map(Op::Touch),
        1 => arb_key().prop_map(Op::Remove),
        1 => Just(Op::PopLru),
        1 => (0usize..12).prop_map(Op::Initialize),
        1 => Just(Op::Reset),
    ]
}

// ==============================================
// Reference model
// ==============================================

struct RefModel {
    capacity: usize,
    order: VecDeque<u16>,
    map: HashMap<u16, i32>,
}

impl RefModel {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            order: VecDeque::new(),
            map: HashMap::new(),
        }
    }

    fn promote(&mut self, key: u16) {
        if let Some(pos) = self.order.iter().position(|&k| k == key) {
            self.order.remove(pos);
            self.order.push_front(key);
        }
    }

    fn put(&mut self, key: u16, value: i32) -> Option<i32> {
        if let Some(old) = self.map.insert(key, value) {
            self.promote(key);
            return Some(old);
        }
        if self.capacity == 0 {
            self.map.remove(&key);
            return None;
        }
        if self.order.len() >= self.capacity {
            if let Some(victim) = self.order.pop_back() {
                self.map.remove(&victim);
            }
        }
        self.order.push_front(key);
        None
    }

    fn get(&mut self, key: u16) -> Option<i32> {
        let value = *self.map.get(&key)?;
        self.promote(key);
        Some(value)
    }

    fn remove(&mut self, key: u16) -> Option<i32> {
        let value = self.map.remove(&key)?;
        self.order.retain(|&k| k != key);
        Some(value)
    }

    fn pop_lru(&mut self) -> Option<(u16, i32)> {
        let key = self.order.pop_back()?;
        self.map.remove(&key).map(|v| (key, v))
    }

    fn initialize(&mut self, capacity: usize) {
        *self = Self::new(capacity);
    }
}

fn apply(
    cache: &mut LruCache<u16, i32>,
    model: &mut RefModel,
    op: &Op,
) -> Result<(), TestCaseError> {
    match *op {
        Op::Put(k, v) => {
            prop_assert_eq!(cache.put(k, v), model.put(k, v));
        },
        Op::Get(k) => match model.get(k) {
            Some(v) => {
                prop_assert_eq!(cache.get(&k), Ok(&v));
            },
            None => {
                prop_assert_eq!(cache.get(&k), Err(KeyNotFound::new(k)));
            },
        },
        Op::Peek(k) => {
            prop_assert_eq!(cache.peek(&k).copied(), model.map.get(&k).copied());
        },
        Op::Touch(k) => {
            let present = model.map.contains_key(&k);
            model.promote(k);
            prop_assert_eq!(cache.touch(&k), present);
        },
        Op::Remove(k) => {
            prop_assert_eq!(cache.remove(&k), model.remove(k));
        },
        Op::PopLru => {
            prop_assert_eq!(cache.pop_lru(), model.pop_lru());
        },
        Op::Initialize(n) => {
            cache.initialize(n);
            model.initialize(n);
        },
        Op::Reset => {
            cache.reset();
            model.initialize(0);
        },
    }
    Ok(())
}

// ==============================================
// Properties
// ==============================================

proptest! {
    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_matches_reference_model(
        capacity in 0usize..12,
        ops in prop::collection::vec(arb_op(), 1..200)
    ) {
        let mut cache: LruCache<u16, i32> = LruCache::new(capacity);
        let mut model = RefModel::new(capacity);

        for op in &ops {
            apply(&mut cache, &mut model, op)?;

            let order: Vec<u16> = cache.keys().copied().collect();
            let expected: Vec<u16> = model.order.iter().copied().collect();
            prop_assert_eq!(order, expected);
            prop_assert_eq!(cache.len(), model.map.len());
            prop_assert_eq!(cache.capacity(), model.capacity);
        }
    }

    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_invariants_always_hold(
        capacity in 0usize..12,
        ops in prop::collection::vec(arb_op(), 1..200)
    ) {
        let mut cache: LruCache<u16, i32> = LruCache::new(capacity);
        let mut model = RefModel::new(capacity);
        for op in &ops {
            apply(&mut cache, &mut model, op)?;
            prop_assert!(cache.check_invariants().is_ok());
            prop_assert!(cache.len() <= cache.capacity());
        }
    }

    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_len_never_exceeds_capacity(
        capacity in 0usize..30,
        keys in prop::collection::vec(0u32..100, 0..300)
    ) {
        let mut cache: LruCache<u32, u32> = LruCache::new(capacity);
        for k in keys {
            cache.put(k, k);
            prop_assert!(cache.len() <= capacity);
        }
    }

    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_put_then_get_returns_value(
        capacity in 1usize..20,
        prefix in prop::collection::vec((arb_key(), any::<i32>()), 0..50),
        key in arb_key(),
        value in any::<i32>()
    ) {
        let mut cache: LruCache<u16, i32> = LruCache::new(capacity);
        cache.extend(prefix);
        cache.put(key, value);
        prop_assert_eq!(cache.get(&key), Ok(&value));
        prop_assert_eq!(cache.recency_rank(&key), Some(0));
    }

    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_miss_leaves_order_untouched(
        capacity in 1usize..20,
        keys in prop::collection::vec(0u16..20, 0..60),
        absent in 20u16..40
    ) {
        let mut cache: LruCache<u16, i32> = LruCache::new(capacity);
        for k in keys {
            cache.put(k, i32::from(k));
        }
        let before: Vec<u16> = cache.keys().copied().collect();
        prop_assert!(cache.get(&absent).is_err());
        let after: Vec<u16> = cache.keys().copied().collect();
        prop_assert_eq!(before, after);
    }

    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_snapshot_is_restartable(
        capacity in 1usize..20,
        keys in prop::collection::vec(arb_key(), 0..60)
    ) {
        let mut cache: LruCache<u16, i32> = LruCache::new(capacity);
        for k in keys {
            cache.put(k, 0);
        }
        let snapshot = cache.snapshot();
        prop_assert_eq!(snapshot.len(), cache.len());
        let first: Vec<u16> = snapshot.clone().map(|(k, _)| *k).collect();
        let second: Vec<u16> = snapshot.map(|(k, _)| *k).collect();
        prop_assert_eq!(first, second);
    }
}
