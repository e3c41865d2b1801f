use crate::{
    record::{DataRequestRecord, TpSetRecord, TriggerDecisionRecord},
    types::Tick,
};

/// Seconds elapsed from `from` to `to`.
///
/// The subtraction is widened so the sign survives: a negative result is
/// a valid output and means the two clocks disagree or events were
/// logged out of order upstream. Nothing is clamped or discarded.
pub fn delta_seconds(from: Tick, to: Tick) -> f64 {
    let delta = to as i128 - from as i128;
    delta as f64 / 1e9
}

/// Selects which latency of a result variant the aggregator bins.
///
/// Histograms pick their field through one of these instead of looking
/// fields up by name at runtime; the getter methods on the result types
/// below all coerce to this shape.
pub type LatencyAccessor<R> = fn(&R) -> f64;

/// One latency series, in join emission order.
pub fn series<R>(results: &[R], accessor: LatencyAccessor<R>) -> Vec<f64> {
    results.iter().map(accessor).collect()
}

/// Smallest and largest value of a series, the range a fixed-bin
/// histogram is booked over. `None` on an empty series.
pub fn bounds<R>(results: &[R], accessor: LatencyAccessor<R>) -> Option<(f64, f64)> {
    results.iter().map(accessor).fold(None, |acc, value| match acc {
        None => Some((value, value)),
        Some((lo, hi)) => Some((lo.min(value), hi.max(value))),
    })
}

/// Latencies for one TP set matched inside one data-request window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TpRequestLatency {
    /// TP arrival at the trigger stage to the request being handled.
    pub trigger_to_handled: f64,
    /// TP arrival at the trigger stage to the request arriving.
    pub trigger_to_received: f64,
    /// TP buffered downstream to the request arriving.
    pub buffered_to_received: f64,
}

impl TpRequestLatency {
    pub fn of(tp: &TpSetRecord, request: &DataRequestRecord) -> Self {
        Self {
            trigger_to_handled: delta_seconds(tp.received_tick, request.handled_tick),
            trigger_to_received: delta_seconds(tp.received_tick, request.received_tick),
            buffered_to_received: delta_seconds(tp.buffered_tick, request.received_tick),
        }
    }

    pub fn trigger_to_handled(&self) -> f64 {
        self.trigger_to_handled
    }

    pub fn trigger_to_received(&self) -> f64 {
        self.trigger_to_received
    }

    pub fn buffered_to_received(&self) -> f64 {
        self.buffered_to_received
    }
}

/// Latencies for one TP set matched inside one trigger-decision readout
/// window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TpDecisionLatency {
    /// TP arrival at the trigger stage to the decision being sent.
    pub trigger_to_sent: f64,
    /// TP buffered downstream to the decision being sent.
    pub buffered_to_sent: f64,
}

impl TpDecisionLatency {
    pub fn of(tp: &TpSetRecord, decision: &TriggerDecisionRecord) -> Self {
        Self {
            trigger_to_sent: delta_seconds(tp.received_tick, decision.sent_tick),
            buffered_to_sent: delta_seconds(tp.buffered_tick, decision.sent_tick),
        }
    }

    pub fn trigger_to_sent(&self) -> f64 {
        self.trigger_to_sent
    }

    pub fn buffered_to_sent(&self) -> f64 {
        self.buffered_to_sent
    }
}

/// Latency for one trigger decision paired with the data request that
/// names exactly the same readout window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionRequestLatency {
    /// Decision dispatched to the matching request arriving at the
    /// buffer.
    pub sent_to_received: f64,
}

impl DecisionRequestLatency {
    pub fn of(decision: &TriggerDecisionRecord, request: &DataRequestRecord) -> Self {
        Self {
            sent_to_received: delta_seconds(decision.sent_tick, request.received_tick),
        }
    }

    pub fn sent_to_received(&self) -> f64 {
        self.sent_to_received
    }
}
