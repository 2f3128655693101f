//! Property-based tests for the repository invariants.
//!
//! Uses proptest to verify invariants across random operation sequences:
//! - Ids stay unique after any mix of add/update/remove
//! - Upsert keeps count stable when the id exists, grows it by one otherwise
//! - Remove is idempotent
//! - A saved collection round-trips through its JSON document unchanged

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use shelf::models::Consumable;
use shelf::{JsonFileRepository, MemoryContext, Repository};
use std::collections::HashSet;
use tempfile::TempDir;

/// One repository operation, for random sequencing.
#[derive(Debug, Clone)]
enum Op {
    Add(Consumable),
    Update(Consumable),
    RemoveId(String),
}

fn consumable_strategy() -> impl Strategy<Value = Consumable> {
    ("[A-E][a-z]{0,3}", -50i32..50, -50i32..50, -50i32..50)
        .prop_map(|(id, h, m, s)| Consumable::new(id.as_str(), h, m, s))
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        consumable_strategy().prop_map(Op::Add),
        consumable_strategy().prop_map(Op::Update),
        "[A-E][a-z]{0,3}".prop_map(Op::RemoveId),
    ]
}

fn apply(repo: &mut Repository<Consumable, MemoryContext<Consumable>>, op: Op) {
    match op {
        Op::Add(c) => repo.add(c),
        Op::Update(c) => repo.update(c),
        Op::RemoveId(id) => {
            repo.remove_by_id(&id);
        },
    }
}

proptest! {
    /// Property: after any operation sequence, all ids in the collection differ.
    #[test]
    fn prop_ids_stay_unique(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut repo = Repository::new(MemoryContext::new()).unwrap();
        for op in ops {
            apply(&mut repo, op);
        }

        let mut seen = HashSet::new();
        for record in &repo {
            prop_assert!(seen.insert(record.id.as_str().to_string()),
                "duplicate id {:?}", record.id);
        }
    }

    /// Property: upsert of an existing id keeps the count and swaps the payload;
    /// upsert of a fresh id grows the count by one.
    #[test]
    fn prop_upsert_count_and_payload(
        ops in prop::collection::vec(op_strategy(), 0..40),
        incoming in consumable_strategy(),
    ) {
        let mut repo = Repository::new(MemoryContext::new()).unwrap();
        for op in ops {
            apply(&mut repo, op);
        }

        let existed = repo.get_by_id(incoming.id.as_str()).is_some();
        let before = repo.count();

        repo.add(incoming.clone());

        let expected = if existed { before } else { before + 1 };
        prop_assert_eq!(repo.count(), expected);
        prop_assert_eq!(repo.get_by_id(incoming.id.as_str()), Some(&incoming));
    }

    /// Property: removing the same record twice changes nothing the second time.
    #[test]
    fn prop_remove_is_idempotent(
        ops in prop::collection::vec(op_strategy(), 0..40),
        target in consumable_strategy(),
    ) {
        let mut repo = Repository::new(MemoryContext::new()).unwrap();
        for op in ops {
            apply(&mut repo, op);
        }

        let before = repo.count();
        let first = repo.remove(&target);
        prop_assert_eq!(repo.count(), if first { before - 1 } else { before });

        let after_first = repo.count();
        prop_assert!(!repo.remove(&target));
        prop_assert_eq!(repo.count(), after_first);
    }

    /// Property: save then reload reproduces the collection exactly, ids,
    /// payloads and order included.
    #[test]
    fn prop_save_reload_round_trip(ops in prop::collection::vec(op_strategy(), 1..30)) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");

        let mut repo = JsonFileRepository::<Consumable>::open(&path).unwrap();
        for op in ops {
            match op {
                Op::Add(c) => repo.add(c),
                Op::Update(c) => repo.update(c),
                Op::RemoveId(id) => { repo.remove_by_id(&id); },
            }
        }
        repo.save().unwrap();

        let fresh = JsonFileRepository::<Consumable>::open(&path).unwrap();
        prop_assert_eq!(fresh.records(), repo.records());
    }
}
