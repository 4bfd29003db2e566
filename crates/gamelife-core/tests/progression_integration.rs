//! Integration tests for attribute progression and reward application.

use gamelife_core::{
    exp_required, AttributeName, AttributeStore, GameLife, HabitDraft, MemoryStore, Reward,
    RewardEngine, ToggleOutcome,
};
use proptest::prelude::*;

#[test]
fn seed_state_small_reward_does_not_level() {
    let mut app = GameLife::open(MemoryStore::new());
    let vitality = app.attributes().get(AttributeName::Vitality).unwrap();
    assert_eq!((vitality.level, vitality.exp, vitality.exp_required), (1, 0, 20));

    let outcome = app.award(&[Reward::new("体力", 3)]);
    assert!(outcome.is_empty());
    let vitality = app.attributes().get(AttributeName::Vitality).unwrap();
    assert_eq!((vitality.level, vitality.exp), (1, 4));
}

#[test]
fn repeated_seventeen_levels_up_on_first_application() {
    let mut attrs = AttributeStore::new();
    let outcome = RewardEngine::apply(&mut attrs, &[Reward::new("体力", 17)]);
    assert_eq!(outcome.level_ups.len(), 1);
    assert_eq!(outcome.level_ups[0].level(), 2);
    let attr = attrs.get(AttributeName::Vitality).unwrap();
    assert_eq!((attr.level, attr.exp, attr.exp_required), (2, 0, 57));

    // Second application: 20 < 57, no further level.
    let outcome = RewardEngine::apply(&mut attrs, &[Reward::new("体力", 17)]);
    assert!(outcome.is_empty());
    assert_eq!(attrs.get(AttributeName::Vitality).unwrap().exp, 20);
}

#[test]
fn penalty_at_level_one_floors_at_zero() {
    let mut attrs = AttributeStore::new();
    let outcome = RewardEngine::apply(&mut attrs, &[Reward::new("自律", -5)]);
    assert!(outcome.is_empty());
    let attr = attrs.get(AttributeName::Discipline).unwrap();
    assert_eq!((attr.level, attr.exp), (1, 0));
}

#[test]
fn completing_twice_awards_twice() {
    let store = MemoryStore::new();
    let mut app = GameLife::open(&store);
    let id = app
        .add_habit(HabitDraft::new("冥想").reward("幸福感", 5))
        .id;

    assert!(matches!(app.toggle_complete(&id), Some(ToggleOutcome::Completed(_))));
    assert_eq!(app.toggle_complete(&id), Some(ToggleOutcome::Reopened));
    assert!(matches!(app.toggle_complete(&id), Some(ToggleOutcome::Completed(_))));

    // 6 + 6: the un-check in between reversed nothing.
    let happiness = app.attributes().get(AttributeName::Happiness).unwrap();
    assert_eq!(happiness.exp, 12);
}

#[test]
fn completion_snapshots_once_for_many_rewards() {
    let store = MemoryStore::new();
    let mut app = GameLife::open(&store);
    let id = app
        .add_habit(
            HabitDraft::new("全面训练")
                .reward("体力", 5)
                .reward("智力", 5)
                .reward("自律", 5)
                .reward("创造力", 5),
        )
        .id;
    let saves_before = store.save_count();
    app.toggle_complete(&id);
    assert_eq!(store.save_count(), saves_before + 1);
}

#[test]
fn completion_reports_level_events() {
    let mut app = GameLife::open(MemoryStore::new());
    let id = app
        .add_habit(
            HabitDraft::new("big day")
                .reward("体力", 17)
                .reward("智力", 17)
                .reward("体力", -5),
        )
        .id;
    let Some(ToggleOutcome::Completed(outcome)) = app.toggle_complete(&id) else {
        panic!("expected completion");
    };
    let ups: Vec<String> = outcome.level_ups.iter().map(|e| e.message()).collect();
    let downs: Vec<String> = outcome.level_downs.iter().map(|e| e.message()).collect();
    assert_eq!(ups, ["体力 提升至 Lv2", "智力 提升至 Lv2"]);
    assert_eq!(downs, ["体力 降至 Lv1"]);
}

fn any_attribute() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("体力".to_string()),
        Just("智力".to_string()),
        Just("自律".to_string()),
        Just("创造力".to_string()),
        Just("幸福感".to_string()),
        Just("魅力".to_string()),
    ]
}

proptest! {
    #[test]
    fn exp_formula_matches_closed_form(level in 1u32..10_000) {
        let expected = (20.0 * (level as f64).powf(1.5)).round() as i64;
        prop_assert_eq!(exp_required(level), expected);
        prop_assert!(exp_required(level + 1) > exp_required(level));
    }

    #[test]
    fn attributes_stay_within_bounds(
        rewards in prop::collection::vec((any_attribute(), -50i64..=50), 0..64)
    ) {
        let mut attrs = AttributeStore::new();
        for (attribute, value) in rewards {
            RewardEngine::apply(&mut attrs, &[Reward::new(attribute, value)]);
            for attr in attrs.iter() {
                prop_assert!(attr.level >= 1);
                prop_assert!(attr.exp >= 0);
                prop_assert!(attr.exp < attr.exp_required);
                prop_assert_eq!(attr.exp_required, exp_required(attr.level));
            }
        }
    }

    #[test]
    fn event_count_tracks_level_delta(value in -500i64..=500) {
        let mut attrs = AttributeStore::new();
        RewardEngine::apply(&mut attrs, &[Reward::new("智力", 400)]);
        let before = attrs.get(AttributeName::Intellect).unwrap().level as i64;
        let outcome = RewardEngine::apply(&mut attrs, &[Reward::new("智力", value)]);
        let after = attrs.get(AttributeName::Intellect).unwrap().level as i64;
        let net = outcome.level_ups.len() as i64 - outcome.level_downs.len() as i64;
        prop_assert_eq!(after - before, net);
    }
}
