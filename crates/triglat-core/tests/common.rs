use triglat_core::{
    DataRequestRecord, SortedStream, Tick, TpSetRecord, TriggerDecisionRecord,
};

#[allow(dead_code)]
pub fn tp(start_tick: Tick, received_tick: Tick, buffered_tick: Tick) -> TpSetRecord {
    TpSetRecord {
        start_tick,
        adc_integral: 1000,
        received_tick,
        buffered_tick,
    }
}

/// A TP set where only the start tick matters to the test.
#[allow(dead_code)]
pub fn tp_at(start_tick: Tick) -> TpSetRecord {
    tp(start_tick, start_tick + 1_000, start_tick + 2_000)
}

#[allow(dead_code)]
pub fn request(
    window_begin: Tick,
    window_end: Tick,
    received_tick: Tick,
    handled_tick: Tick,
) -> DataRequestRecord {
    DataRequestRecord {
        window_begin,
        window_end,
        received_tick,
        handled_tick,
    }
}

#[allow(dead_code)]
pub fn decision(readout_start: Tick, readout_end: Tick, sent_tick: Tick) -> TriggerDecisionRecord {
    TriggerDecisionRecord {
        readout_start,
        readout_end,
        sent_tick,
    }
}

/// TP sets sorted by start tick, ready for the containment joins.
#[allow(dead_code)]
pub fn tp_stream(start_ticks: &[Tick]) -> SortedStream<TpSetRecord> {
    SortedStream::from_unsorted(start_ticks.iter().map(|&t| tp_at(t)).collect())
}

/// Requests sorted by window begin.
#[allow(dead_code)]
pub fn request_stream(requests: Vec<DataRequestRecord>) -> SortedStream<DataRequestRecord> {
    SortedStream::from_unsorted(requests)
}

/// Latency values are exact f64 quotients; comparisons still go through
/// an epsilon so derived expectations can be written as math.
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() <= expected.abs() * 4.0 * f64::EPSILON + f64::MIN_POSITIVE,
        "latency {actual} differs from expected {expected}"
    );
}
