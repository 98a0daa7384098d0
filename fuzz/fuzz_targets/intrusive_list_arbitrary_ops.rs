#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::{IntrusiveList, SlotId};

// Fuzz the recency list against a Vec model ordered MRU to LRU
//
// Every id ever handed out stays pickable, so stale and reused slot ids are
// exercised alongside live ones. The model is keyed by id, which matches the
// list exactly because a reused slot hands back an equal id.
fuzz_target!(|data: &[u8]| {
    let mut list: IntrusiveList<u32> = IntrusiveList::with_capacity(0);
    let mut model: Vec<(SlotId, u32)> = Vec::new();
    let mut issued: Vec<SlotId> = Vec::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 7;
        let value = u32::from(pair[1]);
        let pick = (!issued.is_empty()).then(|| issued[value as usize % issued.len()]);
        let live = pick.and_then(|id| model.iter().position(|&(m, _)| m == id));

        match op {
            0 | 1 => {
                let id = list.push_front(value);
                model.insert(0, (id, value));
                issued.push(id);
                assert_eq!(list.front(), Some(&value));
            },
            2 => {
                let expected = model.pop().map(|(_, v)| v);
                assert_eq!(list.pop_back(), expected);
            },
            3 => {
                if let Some(id) = pick {
                    assert_eq!(list.move_to_front(id), live.is_some());
                    if let Some(at) = live {
                        let entry = model.remove(at);
                        model.insert(0, entry);
                    }
                }
            },
            4 => {
                if let Some(id) = pick {
                    let expected = live.map(|at| model.remove(at).1);
                    assert_eq!(list.remove(id), expected);
                }
            },
            5 => {
                if let (Some(id), Some(at)) = (pick, live) {
                    if let Some(slot) = list.get_mut(id) {
                        *slot = value;
                    }
                    model[at].1 = value;
                }
            },
            6 => {
                list.clear_shrink();
                model.clear();
                issued.clear();
            },
            _ => unreachable!(),
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.iter().len(), model.len());
        assert!(list.iter_ids().eq(model.iter().map(|&(id, _)| id)));
        assert!(list.iter().eq(model.iter().map(|(_, v)| v)));
        assert_eq!(list.back(), model.last().map(|(_, v)| v));

        if let Err(err) = list.validate_links() {
            panic!("list links corrupted: {err}");
        }
    }
});
