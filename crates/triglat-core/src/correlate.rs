use crate::{
    error::CorrelateError,
    index::WindowIndex,
    join::window_join,
    latency::{DecisionRequestLatency, TpDecisionLatency, TpRequestLatency},
    record::{DataRequestRecord, TpSetRecord, TriggerDecisionRecord},
    stream::{SortedStream, validate_windows},
    types::WithWindow,
};
use tracing::{debug, warn};

/// Matches received TP sets against the data requests whose window
/// contains their start tick.
///
/// Requests are iterated ascending by `window_begin`, TP sets scanned
/// ascending by `start_tick`; both orderings are carried by the stream
/// types. Request windows are validated before the scan starts.
pub fn join_tp_requests(
    tp_sets: &SortedStream<TpSetRecord>,
    requests: &SortedStream<DataRequestRecord>,
) -> Result<Vec<TpRequestLatency>, CorrelateError> {
    validate_windows(requests.as_slice())?;

    Ok(window_join(requests.as_slice(), tp_sets, |request, tp| {
        TpRequestLatency::of(tp, request)
    }))
}

/// Matches received TP sets against the trigger decisions whose readout
/// window contains their start tick.
///
/// Decisions are iterated in caller (parsed) order and are not re-sorted;
/// only the TP candidate stream needs ordering for the early break.
pub fn join_tp_decisions(
    tp_sets: &SortedStream<TpSetRecord>,
    decisions: &[TriggerDecisionRecord],
) -> Result<Vec<TpDecisionLatency>, CorrelateError> {
    validate_windows(decisions)?;

    Ok(window_join(decisions, tp_sets, |decision, tp| {
        TpDecisionLatency::of(tp, decision)
    }))
}

/// Pairs trigger decisions with the data requests naming exactly the
/// same readout window.
///
/// This is an equi-join on the `(begin, end)` pair, not a containment
/// test, so the requests are indexed by their bounds once and probed per
/// decision; sort order buys nothing here and no early break exists.
/// Several decisions may hit the same request and several requests may
/// share a window, in which case every pairing is emitted.
pub fn join_decision_requests(
    decisions: &[TriggerDecisionRecord],
    requests: &[DataRequestRecord],
) -> Result<Vec<DecisionRequestLatency>, CorrelateError> {
    validate_windows(decisions)?;
    validate_windows(requests)?;

    let index = WindowIndex::build(requests);
    let mut results = Vec::new();

    for decision in decisions {
        for request in index.probe(decision.window()) {
            results.push(DecisionRequestLatency::of(decision, request));
        }
    }

    debug!(
        decisions = decisions.len(),
        distinct_windows = index.distinct_windows(),
        matches = results.len(),
        "window-equality join finished"
    );

    Ok(results)
}

/// The three parsed event collections with the ordering preconditions
/// the joins rely on already established.
#[derive(Debug, Clone)]
pub struct StreamSet {
    pub tp_sets: SortedStream<TpSetRecord>,
    pub requests: SortedStream<DataRequestRecord>,
    /// Kept in parsed order; no join re-sorts decisions.
    pub decisions: Vec<TriggerDecisionRecord>,
}

impl StreamSet {
    /// Sorts the TP set and request collections the way the joins expect
    /// and keeps decisions as parsed.
    pub fn from_unsorted(
        tp_sets: Vec<TpSetRecord>,
        requests: Vec<DataRequestRecord>,
        decisions: Vec<TriggerDecisionRecord>,
    ) -> Self {
        Self {
            tp_sets: SortedStream::from_unsorted(tp_sets),
            requests: SortedStream::from_unsorted(requests),
            decisions,
        }
    }
}

/// Latency collections produced by [`correlate`], one per join variant,
/// each in join emission order. The histogram aggregator consumes these
/// through the typed accessors on the result types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LatencyReport {
    pub tp_request: Vec<TpRequestLatency>,
    pub tp_decision: Vec<TpDecisionLatency>,
    pub decision_request: Vec<DecisionRequestLatency>,
}

impl LatencyReport {
    /// Total pairs across all three joins.
    pub fn total_matches(&self) -> usize {
        self.tp_request.len() + self.tp_decision.len() + self.decision_request.len()
    }

    /// Number of pairs with at least one negative latency. Negative
    /// values point at clock skew or an ordering anomaly upstream; they
    /// are kept as-is in the report.
    pub fn clock_skew_count(&self) -> usize {
        let tp_request = self
            .tp_request
            .iter()
            .filter(|l| {
                l.trigger_to_handled < 0.0
                    || l.trigger_to_received < 0.0
                    || l.buffered_to_received < 0.0
            })
            .count();
        let tp_decision = self
            .tp_decision
            .iter()
            .filter(|l| l.trigger_to_sent < 0.0 || l.buffered_to_sent < 0.0)
            .count();
        let decision_request = self
            .decision_request
            .iter()
            .filter(|l| l.sent_to_received < 0.0)
            .count();

        tp_request + tp_decision + decision_request
    }
}

/// Runs the three joins over one set of streams.
///
/// The joins are mutually independent; this driver simply runs them in
/// sequence and bundles the results. All validation failures surface
/// before any pairing is emitted for the failing join.
pub fn correlate(streams: &StreamSet) -> Result<LatencyReport, CorrelateError> {
    debug!(
        tp_sets = streams.tp_sets.len(),
        requests = streams.requests.len(),
        decisions = streams.decisions.len(),
        "correlating event streams"
    );

    let report = LatencyReport {
        tp_request: join_tp_requests(&streams.tp_sets, &streams.requests)?,
        tp_decision: join_tp_decisions(&streams.tp_sets, &streams.decisions)?,
        decision_request: join_decision_requests(&streams.decisions, streams.requests.as_slice())?,
    };

    let skewed = report.clock_skew_count();
    if skewed > 0 {
        warn!(
            count = skewed,
            "negative latencies in report, upstream clocks may disagree"
        );
    }

    Ok(report)
}

/// Runs the three joins on blocking tasks and joins on completion.
///
/// The joins read disjoint or shared-immutable inputs and write
/// independent outputs, so no coordination beyond the final join is
/// needed. Result contents and ordering are identical to [`correlate`].
#[cfg(feature = "tokio")]
pub async fn correlate_concurrent(
    streams: std::sync::Arc<StreamSet>,
) -> eyre::Result<LatencyReport> {
    let tp_request = tokio::task::spawn_blocking({
        let streams = streams.clone();
        move || join_tp_requests(&streams.tp_sets, &streams.requests)
    });
    let tp_decision = tokio::task::spawn_blocking({
        let streams = streams.clone();
        move || join_tp_decisions(&streams.tp_sets, &streams.decisions)
    });
    let decision_request = tokio::task::spawn_blocking({
        let streams = streams.clone();
        move || join_decision_requests(&streams.decisions, streams.requests.as_slice())
    });

    let (tp_request, tp_decision, decision_request) =
        tokio::try_join!(tp_request, tp_decision, decision_request)?;

    Ok(LatencyReport {
        tp_request: tp_request?,
        tp_decision: tp_decision?,
        decision_request: decision_request?,
    })
}
