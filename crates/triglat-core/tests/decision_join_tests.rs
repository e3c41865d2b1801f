mod common;

use common::*;
use triglat_core::{CorrelateError, SortedStream, join_tp_decisions};

#[test]
fn test_tp_inside_readout_window() {
    // Decision readout [100, 200] sent at 3000; TP start 150 with
    // received=1000, buffered=1200.
    let tp_sets = SortedStream::from_unsorted(vec![tp(150, 1_000, 1_200)]);
    let decisions = vec![decision(100, 200, 3_000)];

    let latencies = join_tp_decisions(&tp_sets, &decisions).unwrap();

    assert_eq!(latencies.len(), 1);
    assert_eq!(latencies[0].trigger_to_sent, 2e-6);
    assert_eq!(latencies[0].buffered_to_sent, 1.8e-6);
}

#[test]
fn test_readout_bounds_are_inclusive() {
    let tp_sets = tp_stream(&[100, 200]);
    let decisions = vec![decision(100, 200, 3_000)];

    let latencies = join_tp_decisions(&tp_sets, &decisions).unwrap();
    assert_eq!(latencies.len(), 2);
}

#[test]
fn test_decisions_keep_caller_order() {
    // Decisions arrive with their readout windows out of begin order;
    // the join iterates them exactly as given.
    let tp_sets = tp_stream(&[110, 310]);
    let decisions = vec![decision(300, 400, 9_000), decision(100, 200, 3_000)];

    let latencies = join_tp_decisions(&tp_sets, &decisions).unwrap();

    assert_eq!(latencies.len(), 2);
    // First result comes from the [300, 400] decision (sent at 9000).
    let tp_310 = tp_at(310);
    assert_close(
        latencies[0].trigger_to_sent,
        (9_000 - tp_310.received_tick) as f64 / 1e9,
    );
    let tp_110 = tp_at(110);
    assert_close(
        latencies[1].trigger_to_sent,
        (3_000.0 - tp_110.received_tick as f64) / 1e9,
    );
}

#[test]
fn test_reversed_readout_window_fails_validation() {
    let tp_sets = tp_stream(&[150]);
    let decisions = vec![decision(100, 200, 3_000), decision(400, 300, 9_000)];

    let err = join_tp_decisions(&tp_sets, &decisions).unwrap_err();
    match err {
        CorrelateError::MalformedWindow(window) => {
            assert_eq!(window.index, 1);
            assert_eq!(window.begin, 400);
            assert_eq!(window.end, 300);
        }
        other => panic!("expected MalformedWindow, got {other:?}"),
    }
}

#[test]
fn test_empty_decision_list() {
    let tp_sets = tp_stream(&[100, 200]);

    let latencies = join_tp_decisions(&tp_sets, &[]).unwrap();
    assert!(latencies.is_empty());
}

#[test]
fn test_sparse_tps_against_many_decisions() {
    // Only the middle decision's readout window holds a TP.
    let tp_sets = tp_stream(&[550]);
    let decisions = vec![
        decision(100, 200, 3_000),
        decision(500, 600, 5_000),
        decision(900, 1_000, 7_000),
    ];

    let latencies = join_tp_decisions(&tp_sets, &decisions).unwrap();
    assert_eq!(latencies.len(), 1);
    let tp_550 = tp_at(550);
    assert_close(
        latencies[0].buffered_to_sent,
        (5_000 - tp_550.buffered_tick) as f64 / 1e9,
    );
}
