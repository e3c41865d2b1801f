mod common;

use common::*;
use triglat_core::{
    CorrelateError, SortedStream, StreamSet, correlate, join_tp_requests,
    stream::validate_windows,
};

#[test]
fn test_try_from_sorted_accepts_ordered_tps() {
    let records = vec![tp_at(100), tp_at(200), tp_at(200), tp_at(300)];

    let stream = SortedStream::try_from_sorted(records).unwrap();
    assert_eq!(stream.len(), 4);
}

#[test]
fn test_try_from_sorted_rejects_unsorted_tps() {
    // A stream claimed sorted but not: the constructor fails fast
    // instead of letting the scan silently under-match.
    let records = vec![tp_at(100), tp_at(300), tp_at(200)];

    let err = SortedStream::try_from_sorted(records).unwrap_err();
    assert_eq!(err.index, 2);
    assert_eq!(err.prev_tick, 300);
    assert_eq!(err.tick, 200);
}

#[test]
fn test_unsorted_error_converts_into_correlate_error() {
    let err = SortedStream::try_from_sorted(vec![tp_at(300), tp_at(100)]).unwrap_err();
    let err: CorrelateError = err.into();

    assert!(matches!(err, CorrelateError::UnsortedStream(_)));
}

#[test]
fn test_malformed_request_window_fails_before_any_match() {
    // The first request is fine and holds a TP; the second is reversed.
    // Nothing must be emitted.
    let tp_sets = tp_stream(&[150]);
    let requests = SortedStream::try_from_sorted(vec![
        request(100, 200, 4_000, 5_000),
        request(300, 250, 6_000, 7_000),
    ])
    .unwrap();

    let err = join_tp_requests(&tp_sets, &requests).unwrap_err();
    match err {
        CorrelateError::MalformedWindow(window) => {
            assert_eq!(window.index, 1);
            assert_eq!(window.begin, 300);
            assert_eq!(window.end, 250);
        }
        other => panic!("expected MalformedWindow, got {other:?}"),
    }
}

#[test]
fn test_validate_windows_degenerate_single_tick_window_is_fine() {
    let requests = vec![request(100, 100, 4_000, 5_000)];
    assert!(validate_windows(&requests).is_ok());
}

#[test]
fn test_correlate_surfaces_validation_failure() {
    let streams = StreamSet::from_unsorted(
        vec![tp_at(150)],
        vec![request(200, 100, 4_000, 5_000)],
        vec![],
    );

    let err = correlate(&streams).unwrap_err();
    assert!(matches!(err, CorrelateError::MalformedWindow(_)));
}

#[test]
fn test_error_messages_name_the_defect() {
    let unsorted = SortedStream::try_from_sorted(vec![tp_at(300), tp_at(100)]).unwrap_err();
    assert_eq!(
        unsorted.to_string(),
        "record 1 is out of order: tick 100 follows tick 300"
    );

    let malformed = validate_windows(&[request(200, 100, 0, 0)]).unwrap_err();
    assert_eq!(
        malformed.to_string(),
        "record 0 has window begin 200 past its end 100"
    );
}
