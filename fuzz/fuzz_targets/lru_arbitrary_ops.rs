#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::policy::lru::LruCache;

// Fuzz arbitrary operation sequences on LruCache
//
// The first byte picks the capacity (0..16). Each following byte pair is an
// opcode and an operand; keys come from a small space so that hits, updates
// and evictions all happen often.
fuzz_target!(|data: &[u8]| {
    let Some((&first, rest)) = data.split_first() else {
        return;
    };

    let mut cache: LruCache<u8, u32> = LruCache::new(usize::from(first % 16));

    for (step, pair) in rest.chunks_exact(2).enumerate() {
        let op = pair[0] % 9;
        let key = pair[1] % 32;
        let value = step as u32;

        match op {
            0 | 1 => {
                let existed = cache.contains(&key);
                let old_len = cache.len();
                let previous = cache.put(key, value);

                assert_eq!(previous.is_some(), existed);
                if cache.capacity() == 0 {
                    assert!(cache.is_empty());
                } else {
                    assert_eq!(cache.peek_mru(), Some((&key, &value)));
                    if !existed && old_len < cache.capacity() {
                        assert_eq!(cache.len(), old_len + 1);
                    }
                }
            },
            2 | 3 => {
                let expected = cache.peek(&key).copied();
                match cache.get(&key) {
                    Ok(found) => {
                        assert_eq!(Some(*found), expected);
                        assert_eq!(cache.recency_rank(&key), Some(0));
                    },
                    Err(err) => {
                        assert_eq!(*err.key(), key);
                        assert_eq!(expected, None);
                    },
                }
            },
            4 => {
                let present = cache.contains(&key);
                assert_eq!(cache.touch(&key), present);
            },
            5 => {
                let old_len = cache.len();
                if cache.remove(&key).is_some() {
                    assert_eq!(cache.len(), old_len - 1);
                }
                assert!(!cache.contains(&key));
            },
            6 => {
                let expected = cache.peek_lru().map(|(k, v)| (*k, *v));
                assert_eq!(cache.pop_lru(), expected);
            },
            7 => {
                cache.initialize(usize::from(pair[1] % 16));
                assert!(cache.is_empty());
            },
            8 => {
                cache.reset();
                assert_eq!(cache.capacity(), 0);
            },
            _ => unreachable!(),
        }

        assert!(cache.len() <= cache.capacity());
        assert_eq!(cache.snapshot().count(), cache.len());
        if let Err(err) = cache.check_invariants() {
            panic!("invariant violated: {err}");
        }
    }
});
