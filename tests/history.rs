//! Keeping and sharing the history of snapshots.

#![allow(
    unused_crate_dependencies,
    reason = "Integration tests don't use all dependencies"
)]

use std::{
    sync::Arc,
    thread,
};

use online_linreg::prelude::*;

#[test]
fn history_records_every_snapshot() {
    let mut lr = LinearRegression::new(Config::<f64>::builder().keeping_history(true).build())
        .expect("Is a valid config");
    lr.extend((0..10).map(|i| Observation::from_integers(i, 2 * i)));
    lr.remove(&Observation::from_integers(0, 0))
        .expect("Was added");

    let history = lr.history();
    assert_eq!(history.len(), 11);
    for (i, data) in history.iter().enumerate() {
        assert_eq!(data.index(), i as u64 + 1);
    }
    assert_eq!(history[9].number_of_observations(), 10);
    assert_eq!(history[10].number_of_observations(), 9);
    assert!(Arc::ptr_eq(history.last().expect("not empty"), lr.current_data()));
}

#[test]
fn history_toggling_keeps_existing_entries() {
    let mut lr = LinearRegression::<f64>::default();
    lr.add(Observation::new(0.0, 0.0));
    lr.set_keeping_history(true);
    lr.add(Observation::new(1.0, 1.0));
    lr.set_keeping_history(false);
    lr.add(Observation::new(2.0, 2.0));

    assert_eq!(lr.history().len(), 1);
    assert_eq!(lr.history()[0].index(), 2);

    lr.reset();
    assert!(lr.history().is_empty());
    assert!(!lr.keeping_history());
}

#[test]
fn history_snapshots_can_be_read_from_other_threads() {
    let mut lr = LinearRegression::new(Config::<f64>::builder().keeping_history(true).build())
        .expect("Is a valid config");
    lr.extend([Observation::new(0.0, 1.0), Observation::new(1.0, 3.0)]);
    let snapshot = Arc::clone(lr.current_data());

    let reader = thread::spawn(move || {
        snapshot
            .equation()
            .expect("fitted")
            .y_at(2.0)
            .expect("sloped")
    });
    lr.add(Observation::new(2.0, 100.0));
    lr.reset();

    let y = reader.join().expect("reader does not panic");
    assert!((y - 5.0).abs() < 1e-9);
}
