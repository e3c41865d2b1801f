use triglat_core::{
    DataRequestRecord, StreamSet, TpRequestLatency, TpSetRecord, TriggerDecisionRecord, bounds,
    correlate,
};
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    // A few synthetic events standing in for parsed DAQ log lines. TP
    // sets arrive roughly every 50 ticks; each request and decision
    // covers a 100-tick readout window.
    let tp_sets: Vec<TpSetRecord> = (0..20)
        .map(|i| TpSetRecord {
            start_tick: 100 + i * 50,
            adc_integral: 900 + i * 13,
            received_tick: 1_000 + i * 50,
            buffered_tick: 1_450 + i * 50,
        })
        .collect();

    let requests: Vec<DataRequestRecord> = (0..5)
        .map(|i| DataRequestRecord {
            window_begin: 100 + i * 200,
            window_end: 200 + i * 200,
            received_tick: 5_000 + i * 200,
            handled_tick: 6_200 + i * 200,
        })
        .collect();

    let decisions: Vec<TriggerDecisionRecord> = (0..5)
        .map(|i| TriggerDecisionRecord {
            readout_start: 100 + i * 200,
            readout_end: 200 + i * 200,
            sent_tick: 4_500 + i * 200,
        })
        .collect();

    let streams = StreamSet::from_unsorted(tp_sets, requests, decisions);
    let report = correlate(&streams)?;

    println!("TP/request pairs:      {}", report.tp_request.len());
    println!("TP/decision pairs:     {}", report.tp_decision.len());
    println!("decision/request pairs: {}", report.decision_request.len());

    // The histogram aggregator would book its axis over this range.
    if let Some((lo, hi)) = bounds(&report.tp_request, TpRequestLatency::trigger_to_handled) {
        println!("trigger_to_handled range: [{lo:e}, {hi:e}] s");
    }

    Ok(())
}
