//! Using the regression as a moving window over a stream of observations.

#![allow(
    unused_crate_dependencies,
    reason = "Integration tests don't use all dependencies"
)]

use online_linreg::prelude::*;

fn round(val: f64, prec: i32) -> f64 {
    ((val * 10.0_f64.powi(prec)).round()) / 10.0_f64.powi(prec)
}

#[test]
fn moving_window_matches_batch_fit() {
    const WINDOW: usize = 5;

    let stream = Vec::from_iter((0..50).map(|i| {
        let x = f64::from(i);
        let noise = if i % 2 == 0 { 0.25 } else { -0.25 };
        Observation::with_standard_deviation(x, 3.0 * x - 2.0 + noise, 0.5)
            .expect("Is non negative")
    }));

    let mut window = LinearRegression::new(Config::builder().minimum_variance_in_y(0.1).build())
        .expect("Is a valid config");
    for (i, observation) in stream.iter().enumerate() {
        window.add(*observation);
        if i >= WINDOW {
            window
                .remove(&stream[i - WINDOW])
                .expect("Was added before");
        }

        let start = i.saturating_sub(WINDOW - 1);
        let mut batch = LinearRegression::new(Config::builder().minimum_variance_in_y(0.1).build())
            .expect("Is a valid config");
        batch.extend(stream[start..=i].iter().copied());

        let (w, b) = (window.current_data(), batch.current_data());
        assert_eq!(w.observations(), b.observations());
        match (w.equation(), b.equation()) {
            (None, None) => {}
            (Some(we), Some(be)) => {
                let (ws, bs) = (we.slope().expect("sloped"), be.slope().expect("sloped"));
                assert!((ws.value() - bs.value()).abs() < 1e-6);
                assert!((ws.variance() - bs.variance()).abs() < 1e-6);
                let (wi, bi) = (
                    we.intercept_y().expect("sloped"),
                    be.intercept_y().expect("sloped"),
                );
                assert!((wi.value() - bi.value()).abs() < 1e-6);
            }
            _ => panic!("window and batch disagree on the equation"),
        }
    }
    let slope = window
        .current_data()
        .equation()
        .expect("Five observations")
        .slope()
        .expect("sloped");
    assert_eq!(round(slope.value(), 1), 3.0);
}

#[test]
fn moving_window_through_all_states() {
    let mut lr = LinearRegression::<f64>::default();
    let a = Observation::new(1.0, 2.0);
    let b = Observation::new(1.0, 5.0);
    let c = Observation::new(3.0, 5.0);

    lr.add(a);
    assert_eq!(lr.current_data().equation(), None);

    lr.add(a);
    assert!(lr.current_data().equation().expect("fitted").is_degenerate());

    lr.add(b);
    assert_eq!(
        lr.current_data().equation(),
        Some(RegressionEquation::InfiniteSlope { intercept_x: 1.0 })
    );

    lr.add(c);
    assert!(lr.current_data().equation().expect("fitted").has_finite_slope());

    lr.remove(&a).expect("Was added");
    lr.remove(&a).expect("Was added");
    let slope = lr
        .current_data()
        .equation()
        .expect("fitted")
        .slope()
        .expect("sloped");
    assert_eq!(round(slope.value(), 9), 0.0);

    lr.remove(&c).expect("Was added");
    assert_eq!(lr.current_data().equation(), None);

    lr.remove(&b).expect("Was added");
    assert!(lr.current_data().is_empty());
    assert_eq!(
        lr.remove(&b),
        Err(OperationError::RemoveFromEmptyCollection)
    );
    assert_eq!(lr.current_data().index(), 8);
}

#[test]
fn moving_window_adjust_uncertainty() {
    let mut lr = LinearRegression::new(Config::builder().minimum_variance_in_y(0.1).build())
        .expect("Is a valid config");
    let outlier = Observation::new(1.0, 10.0);
    lr.extend([Observation::new(0.0, 0.0), outlier, Observation::new(2.0, 2.0)]);
    let r_squared_before = lr.current_data().r_squared().expect("fitted");

    let widened = outlier
        .with_replaced_standard_deviation(100.0)
        .expect("Is non negative");
    lr.replace(&outlier, widened).expect("Was added");

    let data = lr.current_data();
    assert!(data.contains(&widened));
    assert!(!data.contains(&outlier));
    assert!(data.r_squared().expect("fitted") > r_squared_before);
    let slope = data.equation().expect("fitted").slope().expect("sloped");
    assert_eq!(round(slope.value(), 3), 1.0);
}
