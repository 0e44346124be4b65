use approx::assert_abs_diff_eq;
use bounce_ease_core::{
    AnimationRequest, BounceEase, BounceEasingParams, BounceFormulation, EasingMode,
    MIN_AMPLITUDE,
};

const MODES: [EasingMode; 3] = [
    EasingMode::EaseIn,
    EasingMode::EaseOut,
    EasingMode::EaseInOut,
];
const FORMULATIONS: [BounceFormulation; 2] =
    [BounceFormulation::Analytic, BounceFormulation::Trigonometric];
const AMPLITUDES: [f64; 9] = [0.0, 1.0, 1.0005, 1.001, 1.5, 2.0, 5.0, 10.0, 100.0];

fn ease(n: u32, amplitude: f64, mode: EasingMode) -> BounceEase {
    BounceEase::new(BounceEasingParams::new(n, amplitude), mode)
}

fn sample(count: usize, f: impl Fn(f64) -> f64) -> Vec<f64> {
    (0..count)
        .map(|i| f(i as f64 / (count - 1) as f64))
        .collect()
}

/// Interior local maxima (value only), in progress order.
fn local_maxima(values: &[f64]) -> Vec<f64> {
    values
        .windows(3)
        .filter(|w| w[1] > w[0] && w[1] >= w[2])
        .map(|w| w[1])
        .collect()
}

/// Interior local minima (value only), in progress order.
fn local_minima(values: &[f64]) -> Vec<f64> {
    values
        .windows(3)
        .filter(|w| w[1] < w[0] && w[1] <= w[2])
        .map(|w| w[1])
        .collect()
}

fn assert_strictly_decreasing(values: &[f64]) {
    for pair in values.windows(2) {
        assert!(pair[0] > pair[1], "not strictly decreasing: {values:?}");
    }
}

#[test]
fn endpoints_map_to_zero_and_one_for_all_parameters() {
    for n in 0..=10 {
        for amplitude in AMPLITUDES {
            for mode in MODES {
                for formulation in FORMULATIONS {
                    let e = ease(n, amplitude, mode).with_formulation(formulation);
                    assert_abs_diff_eq!(e.evaluate(0.0), 0.0, epsilon = 1e-9);
                    assert_abs_diff_eq!(e.evaluate(1.0), 1.0, epsilon = 1e-9);
                }
            }
        }
    }
}

#[test]
fn output_stays_in_unit_range_and_finite() {
    let eps = 1e-6;
    for n in [1, 2, 3, 5, 10] {
        for amplitude in AMPLITUDES {
            for mode in MODES {
                for formulation in FORMULATIONS {
                    let e = ease(n, amplitude, mode).with_formulation(formulation);
                    for v in sample(1000, |p| e.evaluate(p)) {
                        assert!(v.is_finite(), "n={n} a={amplitude} {mode} {formulation:?}");
                        assert!(
                            (-eps..=1.0 + eps).contains(&v),
                            "v={v} n={n} a={amplitude} {mode} {formulation:?}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn rebound_apexes_strictly_decrease() {
    for n in 3..=6 {
        for amplitude in [1.5, 2.0, 3.0] {
            for formulation in FORMULATIONS {
                let e = ease(n, amplitude, EasingMode::EaseOut).with_formulation(formulation);
                let eased = sample(10_000, |p| e.evaluate(p));

                // Bounce height above rest is `1 - evaluate`: each dip of the settle curve
                // is one rebound apex.
                let apexes: Vec<f64> = local_minima(&eased).iter().map(|v| 1.0 - v).collect();
                assert_eq!(
                    apexes.len(),
                    n as usize - 1,
                    "n={n} a={amplitude} {formulation:?}: {apexes:?}"
                );
                assert_strictly_decreasing(&apexes);
                for (sampled, exact) in apexes.iter().zip(e.apex_heights()) {
                    assert_abs_diff_eq!(*sampled, exact, epsilon = 1e-3);
                }

                // Between rebounds the curve touches rest.
                let touch_downs = local_maxima(&eased);
                assert_eq!(touch_downs.len(), n as usize - 1);
                assert!(touch_downs.iter().all(|v| *v > 0.99), "{touch_downs:?}");
            }
        }
    }
}

#[test]
fn ease_in_hops_grow_toward_the_final_rise() {
    let e = ease(4, 2.0, EasingMode::EaseIn);
    let hops = local_maxima(&sample(10_000, |p| e.evaluate(p)));
    assert_eq!(hops.len(), 3, "{hops:?}");
    for pair in hops.windows(2) {
        assert!(pair[0] < pair[1], "{hops:?}");
    }
}

#[test]
fn single_bounce_settles_without_oscillating() {
    for amplitude in [1.001, 2.0, 5.0] {
        for formulation in FORMULATIONS {
            for mode in MODES {
                let e = ease(1, amplitude, mode).with_formulation(formulation);
                let eased = sample(10_000, |p| e.evaluate(p));
                for (i, pair) in eased.windows(2).enumerate() {
                    assert!(
                        pair[1] >= pair[0],
                        "a={amplitude} {formulation:?} {mode}: dips at sample {i}"
                    );
                }
            }
            // The only landing is at the end of the settle curve.
            let e = ease(1, amplitude, EasingMode::EaseOut).with_formulation(formulation);
            let eased = sample(10_000, |p| e.evaluate(p));
            let landings = eased.iter().filter(|v| **v >= 1.0).count();
            assert_eq!(landings, 1, "a={amplitude} {formulation:?}");
            assert_eq!(*eased.last().unwrap(), 1.0);
        }
    }
}

#[test]
fn two_bounces_rebound_exactly_once() {
    for formulation in FORMULATIONS {
        let e = ease(2, 3.0, EasingMode::EaseOut).with_formulation(formulation);
        let eased = sample(10_000, |p| e.evaluate(p));
        assert_eq!(local_minima(&eased).len(), 1, "{formulation:?}");
        assert_eq!(local_maxima(&eased).len(), 1, "{formulation:?}");
        assert_eq!(e.apex_heights().len(), 1);
    }
}

#[test]
fn amplitude_at_one_behaves_like_the_minimum() {
    let clamped = ease(4, 1.0, EasingMode::EaseOut);
    let minimum = ease(4, MIN_AMPLITUDE, EasingMode::EaseOut);
    for p in sample(1000, |p| p) {
        let v = clamped.evaluate(p);
        assert!(v.is_finite());
        assert_abs_diff_eq!(v, minimum.evaluate(p), epsilon = 1e-12);
    }
    for bogus in [0.0, -2.0, f64::NAN] {
        assert_eq!(ease(4, bogus, EasingMode::EaseOut), minimum);
    }
}

#[test]
fn identical_parameters_give_identical_output() {
    let a = ease(3, 2.5, EasingMode::EaseInOut);
    let b = ease(3, 2.5, EasingMode::EaseInOut);
    for p in sample(1000, |p| p) {
        assert_eq!(a.evaluate(p).to_bits(), b.evaluate(p).to_bits());
    }
}

#[test]
fn concurrent_evaluation_matches_sequential() {
    let shared = ease(4, 3.0, EasingMode::EaseOut);
    let expected = sample(500, |p| shared.evaluate(p));
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || sample(500, |p| shared.evaluate(p))))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}

#[test]
fn in_out_is_continuous_at_the_midpoint() {
    let e = ease(3, 5.0, EasingMode::EaseInOut);
    assert_eq!(e.evaluate(0.5), 0.5);
    assert_abs_diff_eq!(e.evaluate(0.5 - 1e-9), 0.5, epsilon = 1e-6);
}

#[test]
fn three_bounce_drop_end_to_end() {
    let e = ease(3, 5.0, EasingMode::EaseOut);
    assert_eq!(e.evaluate(0.0), 0.0);
    assert_eq!(e.evaluate(1.0), 1.0);

    let eased = sample(1000, |p| e.evaluate(p));
    assert!(eased.iter().all(|v| !v.is_nan()));

    let bounce_heights: Vec<f64> = eased.iter().map(|v| 1.0 - v).collect();
    let apexes = local_maxima(&bounce_heights);
    assert!(apexes.len() >= 2, "{apexes:?}");
    assert_strictly_decreasing(&apexes);

    // Driving a vertical position from 3 units down to rest shows the same apexes as
    // local maxima of the position.
    let request = AnimationRequest::drop_from(3.0, 3.0, e);
    let positions = sample(1000, |p| request.sample_progress(p));
    let peaks = local_maxima(&positions);
    assert_eq!(peaks.len(), apexes.len());
    for (peak, apex) in peaks.iter().zip(&apexes) {
        assert_abs_diff_eq!(*peak, 3.0 * apex, epsilon = 1e-9);
    }
}
