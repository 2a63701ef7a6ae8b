//! Property tests for roster filtering and squad invariants.
//!
//! Uses proptest to verify:
//! 1. Filter output is an order-preserving subsequence of the roster
//! 2. Squad never exceeds capacity and never holds a duplicate id
//! 3. Persist → fresh restore yields the same id sequence
//! 4. Remove-at shifts later players left by one

use proptest::prelude::*;
use squad_core::filter::{self, Criteria};
use squad_core::{MemoryStore, Player, PlayerId, SelectionError, SelectionManager, SQUAD_CAPACITY};

// ── Strategies (proptest) ────────────────────────────────────────────

const NAMES: [&str; 8] = ["Alice", "Bob", "Malik", "Carla", "Alvaro", "Ben", "Lia", "Sam"];
const NATIONS: [&str; 3] = ["FR", "ES", "BR"];
const POSITIONS: [&str; 4] = ["GK", "CB", "CM", "ST"];
const CLUBS: [&str; 3] = ["Lyon", "Betis", "Santos"];

fn make_player(i: usize, name: usize, nation: usize, pos: usize, club: usize) -> Player {
    Player {
        id: PlayerId::new(i.to_string()),
        name: NAMES[name].to_string(),
        nationality: NATIONS[nation].to_string(),
        club: CLUBS[club].to_string(),
        position: POSITIONS[pos].to_string(),
        rating: 80,
        pace: 70,
        shooting: 70,
        passing: 70,
        dribbling: 70,
        defending: 70,
        physical: 70,
        photo: String::new(),
        flag: String::new(),
        logo: String::new(),
    }
}

fn arb_roster() -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec((0..8usize, 0..3usize, 0..4usize, 0..3usize), 0..30).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (n, na, p, c))| make_player(i, n, na, p, c))
            .collect()
    })
}

fn arb_criteria() -> impl Strategy<Value = Criteria> {
    (
        prop::sample::select(vec!["", "a", "AL", "b", "li", "zz"]),
        prop::option::of(prop::sample::select(NATIONS.to_vec())),
        prop::option::of(prop::sample::select(POSITIONS.to_vec())),
        prop::option::of(prop::sample::select(CLUBS.to_vec())),
    )
        .prop_map(|(name, nationality, position, club)| Criteria {
            name: name.to_string(),
            nationality: nationality.map(String::from),
            position: position.map(String::from),
            club: club.map(String::from),
        })
}

#[derive(Debug, Clone)]
enum Op {
    Add(usize),
    Remove(usize),
}

fn arb_ops() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(
        prop_oneof![
            3 => (0..20usize).prop_map(Op::Add),
            1 => (0..14usize).prop_map(Op::Remove),
        ],
        0..60,
    )
}

// ── 1. Filter Subsequence ────────────────────────────────────────────

proptest! {
    /// Every filtered result appears in the roster, in the same relative order.
    #[test]
    fn filter_is_ordered_subsequence(roster in arb_roster(), criteria in arb_criteria()) {
        let result = filter::apply(&roster, &criteria);

        let mut cursor = roster.iter();
        for picked in &result {
            prop_assert!(cursor.any(|p| p.id == picked.id));
        }

        // Nothing that matches is dropped.
        let expected = roster.iter().filter(|p| criteria.matches(p)).count();
        prop_assert_eq!(result.len(), expected);
    }

    /// Empty criteria is the identity.
    #[test]
    fn empty_criteria_is_identity(roster in arb_roster()) {
        let result = filter::apply(&roster, &Criteria::default());
        prop_assert_eq!(result.len(), roster.len());
    }
}

// ── 2/3/4. Squad Invariants ──────────────────────────────────────────

proptest! {
    /// Random add/remove sequences never break the squad invariants, and a
    /// fresh manager always restores exactly what is in memory.
    #[test]
    fn squad_invariants_hold(ops in arb_ops()) {
        let pool: Vec<Player> = (0..20).map(|i| make_player(i, i % 8, 0, 0, 0)).collect();
        let store = MemoryStore::new();
        let mut squad = SelectionManager::new(store.clone());

        for op in ops {
            let before = squad.ids();
            match op {
                Op::Add(i) => match squad.add(pool[i].clone()) {
                    Ok(()) => {
                        let after = squad.ids();
                        prop_assert_eq!(after.len(), before.len() + 1);
                        prop_assert_eq!(after.last(), Some(&pool[i].id));
                    }
                    Err(SelectionError::Duplicate { .. }) => {
                        prop_assert!(before.contains(&pool[i].id));
                        prop_assert_eq!(squad.ids(), before);
                    }
                    Err(SelectionError::Capacity { .. }) => {
                        prop_assert_eq!(before.len(), SQUAD_CAPACITY);
                        prop_assert_eq!(squad.ids(), before);
                    }
                    Err(e) => prop_assert!(false, "unexpected error {e:?}"),
                },
                Op::Remove(i) => match squad.remove_at(i) {
                    Ok(removed) => {
                        let mut expected = before.clone();
                        let gone = expected.remove(i);
                        prop_assert_eq!(removed.id, gone);
                        prop_assert_eq!(squad.ids(), expected);
                    }
                    Err(SelectionError::Range { .. }) => {
                        prop_assert!(i >= before.len());
                        prop_assert_eq!(squad.ids(), before);
                    }
                    Err(e) => prop_assert!(false, "unexpected error {e:?}"),
                },
            }

            prop_assert!(squad.len() <= SQUAD_CAPACITY);
            let mut ids = squad.ids();
            ids.sort();
            ids.dedup();
            prop_assert_eq!(ids.len(), squad.len());
        }

        let restored = SelectionManager::restored(store);
        prop_assert_eq!(restored.ids(), squad.ids());
    }
}
