use bounce_ease_core::{BounceEase, BounceFormulation};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoldenTable {
    name: String,
    #[serde(flatten)]
    ease: BounceEase,
    samples: Vec<[f64; 2]>,
}

fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn analytic_curves_match_reference_tables() {
    let keys = bounce_ease_test_fixtures::golden::keys();
    assert!(!keys.is_empty());
    for key in keys {
        let table: GoldenTable =
            bounce_ease_test_fixtures::golden::load(&key).expect("load golden table");
        assert_eq!(table.name, key);
        assert_eq!(table.ease.formulation(), BounceFormulation::Analytic);
        assert!(table.samples.len() >= 2, "{key}: empty table");
        for [p, expected] in &table.samples {
            let got = table.ease.evaluate(*p);
            assert!(
                approx(got, *expected, 1e-9),
                "{key}: p={p} got={got} expected={expected}"
            );
        }
    }
}

#[test]
fn reference_tables_start_at_zero_and_end_at_one() {
    for key in bounce_ease_test_fixtures::golden::keys() {
        let table: GoldenTable = bounce_ease_test_fixtures::golden::load(&key).unwrap();
        let first = table.samples.first().unwrap();
        let last = table.samples.last().unwrap();
        assert_eq!(*first, [0.0, 0.0], "{key}");
        assert_eq!(*last, [1.0, 1.0], "{key}");
    }
}
