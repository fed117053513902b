//! Property tests for fight status tallies and the main card.

use proptest::prelude::*;
use serde_json::{json, Value};

use ringside::domain::entities::{FieldPolicy, FightCard, MAIN_CARD_SIZE};
use ringside::domain::services::StatusCounts;

fn flag() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
        (-2i64..3).prop_map(|n| json!(n)),
        "[a-z]{0,3}".prop_map(Value::String),
    ]
}

fn record(id: usize, started: Value, complete: Value) -> Value {
    json!({
        "hasStarted": started,
        "isComplete": complete,
        "fighter1": { "firstName": format!("F{id}"), "lastName": "A" },
        "fighter2": { "firstName": format!("G{id}"), "lastName": "B" },
    })
}

fn fight_card() -> impl Strategy<Value = FightCard> {
    proptest::collection::vec((flag(), flag()), 0..=12).prop_map(|flags| {
        let fights: Vec<Value> = flags
            .into_iter()
            .enumerate()
            .map(|(id, (started, complete))| record(id, started, complete))
            .collect();
        FightCard::from_document(json!({ "fights": fights })).unwrap()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: started >= live, total >= started, total >= complete.
    #[test]
    fn property_counts_are_ordered(card in fight_card()) {
        let counts = StatusCounts::tally(&card, FieldPolicy::Strict).unwrap();

        prop_assert_eq!(counts.total, card.len());
        prop_assert!(counts.started >= counts.live);
        prop_assert!(counts.total >= counts.started);
        prop_assert!(counts.total >= counts.complete);
    }

    /// PROPERTY: live equals started minus the started records that are complete.
    #[test]
    fn property_live_is_started_and_not_complete(
        flags in proptest::collection::vec((any::<bool>(), any::<bool>()), 0..=20)
    ) {
        let counts = StatusCounts::from_flags(flags.iter().copied());
        let started_and_complete = flags.iter().filter(|(s, c)| *s && *c).count();

        prop_assert_eq!(counts.live, counts.started - started_and_complete);
    }

    /// PROPERTY: the main card is the array prefix of at most five records.
    #[test]
    fn property_main_card_is_ordered_prefix(card in fight_card()) {
        let indices: Vec<usize> = card.main_card().map(|r| r.index()).collect();
        let expected: Vec<usize> = (0..card.len().min(MAIN_CARD_SIZE)).collect();

        prop_assert_eq!(indices, expected);
    }
}
