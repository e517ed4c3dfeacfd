//! Metric properties over randomly generated corpora: identity, symmetry,
//! range, and the decay law.

use fabula_distance::{ActionJaccard, DistanceMatrix, DistanceMetric, SalienceMetric};
use fabula_story::{StoryPlan, StorySpace};
use proptest::prelude::*;
use test_fixtures::{small_problem, EventBuilder, ScriptedSolution};

/// A plan drawing action names and consenting characters from tiny
/// alphabets, so generated plans overlap often.
fn arb_plan() -> impl Strategy<Value = StoryPlan> {
    proptest::collection::vec((0usize..5, proptest::bool::ANY), 0..6).prop_map(|steps| {
        let mut solution = ScriptedSolution::new();
        for (name, with_tom) in steps {
            let mut builder = EventBuilder::new(&format!("e{name}"));
            if with_tom {
                builder = builder.consenting("tom");
            }
            solution = solution.step(builder.build());
        }
        StoryPlan::from_solution(&solution).unwrap()
    })
}

fn arb_space() -> impl Strategy<Value = StorySpace> {
    proptest::collection::vec(arb_plan(), 1..5).prop_map(|plans| {
        let mut space = StorySpace::new(small_problem());
        for plan in plans {
            space.add(plan);
        }
        space
    })
}

proptest! {
    #[test]
    fn jaccard_is_bounded_symmetric_and_zero_on_self(a in arb_plan(), b in arb_plan()) {
        let metric = ActionJaccard::new();
        let ab = metric.distance(&a, &b).unwrap();
        let ba = metric.distance(&b, &a).unwrap();
        prop_assert!((0.0..=1.0).contains(&ab), "out of range: {ab}");
        prop_assert_eq!(ab, ba);
        prop_assert_eq!(metric.distance(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn salience_is_symmetric_and_zero_on_self(space in arb_space()) {
        let mut metric = SalienceMetric::new(&small_problem());
        metric.initialize(&space);
        for a in &space {
            prop_assert_eq!(metric.distance(a, a).unwrap(), 0.0);
            for b in &space {
                prop_assert_eq!(
                    metric.distance(a, b).unwrap(),
                    metric.distance(b, a).unwrap()
                );
            }
        }
    }

    #[test]
    fn matrix_mirrors_every_metric(space in arb_space()) {
        let matrix = DistanceMatrix::compute(&space, &ActionJaccard::new()).unwrap();
        prop_assert_eq!(matrix.size(), space.len());
        for i in 0..matrix.size() {
            prop_assert_eq!(matrix.get(i, i), 0.0);
            for j in 0..matrix.size() {
                prop_assert_eq!(matrix.get(i, j), matrix.get(j, i));
            }
        }
    }

    #[test]
    fn inactive_salience_decays_as_a_power_of_the_constant(quiet_steps in 0usize..6) {
        // tom acts once, then `quiet_steps` actions without tom.
        let mut solution = ScriptedSolution::new()
            .step(EventBuilder::new("active").consenting("tom").build());
        for i in 0..quiet_steps {
            solution = solution.step(EventBuilder::new(&format!("quiet{i}")).build());
        }
        let plan = StoryPlan::from_solution(&solution).unwrap();
        let mut space = StorySpace::new(small_problem());
        space.add(plan);

        let mut metric = SalienceMetric::new(&small_problem());
        metric.initialize(&space);
        let vector = metric.vector(space.get(0).unwrap()).unwrap();
        let expected = 0.5f64.powi(quiet_steps as i32);
        prop_assert!((vector.characters[0] - expected).abs() < 1e-12);
    }
}
