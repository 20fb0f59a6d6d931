use proptest::prelude::*;
use salary_compare::algorithm::statistics::summarize_salaries;
use salary_compare::{GroupStatistics, summarize};

proptest! {
    #[test]
    fn summary_is_ordered(sample in prop::collection::vec(prop::option::of(0.0f64..1e7), 0..200)) {
        match summarize(sample.clone()) {
            Some(s) => {
                prop_assert!(s.min <= s.lower_quartile, "{:?}", sample);
                prop_assert!(s.lower_quartile <= s.median, "{:?}", sample);
                prop_assert!(s.median <= s.upper_quartile, "{:?}", sample);
                prop_assert!(s.upper_quartile <= s.max, "{:?}", sample);
            }
            None => prop_assert!(sample.iter().all(Option::is_none)),
        }
    }

    #[test]
    fn summary_ignores_input_order(
        (values, shuffled) in prop::collection::vec(0.0f64..1e7, 1..200)
            .prop_flat_map(|values| (Just(values.clone()), Just(values).prop_shuffle()))
    ) {
        prop_assert_eq!(summarize_salaries(&shuffled), summarize_salaries(&values));
    }
}

#[test]
fn test_reference_sample() {
    let values = [10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0];
    let summary = summarize_salaries(&values).unwrap();
    let expected = [10.0, 32.5, 55.0, 77.5, 100.0];
    for (actual, expected) in summary.as_array().iter().zip(expected) {
        assert!((actual - expected).abs() < 1e-9, "{actual} != {expected}");
    }
}

#[test]
fn test_degenerate_samples() {
    assert_eq!(summarize(vec![Some(5.5)]).unwrap().as_array(), [5.5; 5]);
    assert!(summarize(Vec::new()).is_none());
    assert!(summarize(vec![None, None, None]).is_none());
}

#[test]
fn test_group_statistics_describe() {
    let stats = GroupStatistics::from_salaries("Clerk", &[30000.0, 40000.0]).unwrap();
    assert_eq!(
        stats.describe(),
        "Clerk: 2 employee(s), Mean: $35,000, Median: $35,000, Range: $30,000 - $40,000"
    );
}
