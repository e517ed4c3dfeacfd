//! Properties of the causal-ancestor relation over randomly generated
//! plans: a strict partial order consistent with sequence order.

use fabula_core::{Comparison, Event};
use fabula_story::StoryPlan;
use proptest::prelude::*;
use test_fixtures::{num, EventBuilder, ScriptedSolution};

type StepSpec = (Vec<(usize, i64)>, Vec<(usize, i64, Comparison)>);

/// A random step over a small fluent/value alphabet: up to two effects
/// and up to two precondition literals in one clause.
fn arb_step() -> impl Strategy<Value = StepSpec> {
    let effects = proptest::collection::vec((0usize..4, 0i64..3), 0..=2);
    let literals = proptest::collection::vec(
        (
            0usize..4,
            0i64..3,
            prop_oneof![
                Just(Comparison::Eq),
                Just(Comparison::Ne),
                Just(Comparison::Gt),
            ],
        ),
        0..=2,
    );
    (effects, literals)
}

fn event_of(tag: usize, (effects, literals): StepSpec) -> Event {
    let mut builder = EventBuilder::new(&format!("e{tag}"));
    for (fluent, value) in effects {
        builder = builder.effect(&format!("f{fluent}"), num(value));
    }
    for (fluent, value, comparison) in literals {
        builder = builder.requires(&format!("f{fluent}"), comparison, num(value));
    }
    builder.build()
}

fn arb_plan() -> impl Strategy<Value = StoryPlan> {
    proptest::collection::vec(arb_step(), 0..8).prop_map(|steps| {
        let mut solution = ScriptedSolution::new();
        for (tag, step) in steps.into_iter().enumerate() {
            solution = solution.step(event_of(tag, step));
        }
        StoryPlan::from_solution(&solution).expect("generated solutions are well-formed")
    })
}

proptest! {
    #[test]
    fn ancestry_respects_sequence_order(plan in arb_plan()) {
        for (index, action) in plan.iter().enumerate() {
            prop_assert!(!plan.is_causal_ancestor(index, index));
            for &ancestor in action.ancestors() {
                prop_assert!(ancestor < index, "ancestor {ancestor} of {index}");
            }
        }
    }

    #[test]
    fn query_and_stored_sets_agree(plan in arb_plan()) {
        for current in 0..plan.len() {
            for prior in 0..plan.len() {
                let stored = plan
                    .get(current)
                    .unwrap()
                    .ancestors()
                    .contains(&prior);
                let queried = plan.is_causal_ancestor(prior, current);
                if prior < current {
                    prop_assert_eq!(stored, queried);
                } else {
                    prop_assert!(!queried);
                }
            }
        }
    }
}
