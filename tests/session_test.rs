// ABOUTME: Integration tests for the caller-owned estimator session
// ABOUTME: Verifies memoized results, rejected updates, and explicit recommendation refresh
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 EcoTrace Contributors

#![allow(missing_docs)]

mod common;

use common::{approx, init_test_logging};
use ecotrace::models::{Category, FieldUpdate, FootprintData, Region};
use ecotrace::session::{FootprintSession, View};
use ecotrace::{compute, ValidationError};

// ============================================================================
// Memoization
// ============================================================================

#[test]
fn test_result_is_memoized_until_input_changes() {
    init_test_logging();
    let mut session = FootprintSession::new(FootprintData::default());

    let first = session.result();
    let second = session.result();
    assert_eq!(first, second);
    assert_eq!(session.computations(), 1);

    session.apply(FieldUpdate::CarKm(120.0)).unwrap();
    let third = session.result();
    assert_eq!(session.computations(), 2);
    assert!(third.breakdown.transport > first.breakdown.transport);
}

#[test]
fn test_reapplying_same_value_does_not_recompute() {
    let mut session = FootprintSession::default();
    let _ = session.result();

    session.apply(FieldUpdate::Region(Region::India)).unwrap();
    let _ = session.result();
    assert_eq!(session.computations(), 1);
}

#[test]
fn test_reverting_an_edit_recomputes_once_per_change() {
    let mut session = FootprintSession::default();
    let original = session.result();

    session.apply(FieldUpdate::Gas(0.0)).unwrap();
    let _ = session.result();
    session.apply(FieldUpdate::Gas(50.0)).unwrap();
    let reverted = session.result();

    assert_eq!(original, reverted);
    assert_eq!(session.computations(), 3);
}

#[test]
fn test_session_result_matches_pure_compute() {
    let data = FootprintData::default()
        .with(FieldUpdate::Region(Region::Global))
        .unwrap();
    let mut session = FootprintSession::new(data);
    assert_eq!(session.result(), compute(&data));
}

// ============================================================================
// Field Updates
// ============================================================================

#[test]
fn test_negative_update_is_rejected_and_record_unchanged() {
    let mut session = FootprintSession::default();
    let before = *session.data();

    let err = session.apply(FieldUpdate::Electricity(-5.0)).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::NegativeValue {
            field: "energy.electricity",
            ..
        }
    ));
    assert_eq!(*session.data(), before);
}

#[test]
fn test_non_finite_update_is_rejected() {
    let mut session = FootprintSession::default();
    assert!(session.apply(FieldUpdate::FlightHours(f64::NAN)).is_err());
    assert!(session
        .apply(FieldUpdate::PublicTransitHours(f64::INFINITY))
        .is_err());
    assert!(approx(session.data().transport.flight_hours, 2.0));
}

#[test]
fn test_replace_validates_whole_record() {
    let mut session = FootprintSession::default();
    let mut bad = FootprintData::default();
    bad.transport.car_km = -1.0;

    assert!(session.replace(bad).is_err());
    assert_eq!(*session.data(), FootprintData::default());

    let good = FootprintData::default()
        .with(FieldUpdate::Region(Region::Global))
        .unwrap();
    session.replace(good).unwrap();
    assert_eq!(session.data().region, Region::Global);
}

// ============================================================================
// Calculate and View
// ============================================================================

#[test]
fn test_calculate_switches_to_results_view() {
    let mut session = FootprintSession::default();
    assert_eq!(session.view(), View::Calculator);
    assert!(session.recommendations().is_empty());

    let count = session.calculate().len();
    assert_eq!(count, 2);
    assert_eq!(session.view(), View::Results);

    session.set_view(View::Calculator);
    assert_eq!(session.view(), View::Calculator);
    assert_eq!(session.recommendations().len(), 2);
}

#[test]
fn test_recommendations_not_refreshed_by_later_updates() {
    let mut session = FootprintSession::default();
    session.calculate();
    assert!(session
        .recommendations()
        .iter()
        .all(|r| r.category != Category::Waste));

    session.apply(FieldUpdate::Composts(false)).unwrap();
    // Total follows the edit, recommendations wait for the next calculate
    assert!(approx(session.result().breakdown.waste, 400.0));
    assert!(session
        .recommendations()
        .iter()
        .all(|r| r.category != Category::Waste));

    session.calculate();
    assert!(session
        .recommendations()
        .iter()
        .any(|r| r.category == Category::Waste));
}

#[test]
fn test_calculate_reuses_memoized_result() {
    let mut session = FootprintSession::default();
    let _ = session.result();
    session.calculate();
    assert_eq!(session.computations(), 1);
}
