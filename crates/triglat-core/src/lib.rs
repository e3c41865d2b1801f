//! This library correlates the time-ordered event streams a distributed
//! data-acquisition trigger pipeline writes to its logs (trigger-primitive
//! sets received, data requests issued, module-level trigger decisions
//! sent) by testing event ticks against readout windows, and computes the
//! stage-to-stage latencies a histogram aggregator consumes.
//!
//! # Usage
//!
//! ```rust
//! use triglat_core::{
//!     DataRequestRecord, StreamSet, TpSetRecord, TriggerDecisionRecord, correlate,
//! };
//!
//! # fn main() -> eyre::Result<()> {
//! // Event records normally come from the DAQ log parser.
//! let tp_sets = vec![
//!     TpSetRecord {
//!         start_tick: 150,
//!         adc_integral: 1200,
//!         received_tick: 1_000,
//!         buffered_tick: 1_200,
//!     },
//!     TpSetRecord {
//!         start_tick: 320,
//!         adc_integral: 800,
//!         received_tick: 2_100,
//!         buffered_tick: 2_350,
//!     },
//! ];
//! let requests = vec![DataRequestRecord {
//!     window_begin: 100,
//!     window_end: 200,
//!     received_tick: 4_000,
//!     handled_tick: 5_000,
//! }];
//! let decisions = vec![TriggerDecisionRecord {
//!     readout_start: 100,
//!     readout_end: 200,
//!     sent_tick: 3_000,
//! }];
//!
//! // Sort the streams and run the three window joins.
//! let streams = StreamSet::from_unsorted(tp_sets, requests, decisions);
//! let report = correlate(&streams)?;
//!
//! // Only the TP starting at tick 150 falls inside the [100, 200]
//! // request window.
//! assert_eq!(report.tp_request.len(), 1);
//! assert_eq!(report.tp_request[0].trigger_to_handled, 4e-6);
//! # Ok(())
//! # }
//! ```

mod correlate;
mod error;
pub mod index;
mod join;
mod latency;
mod record;
pub mod stream;
mod types;

#[cfg(feature = "tokio")]
pub use correlate::correlate_concurrent;
pub use correlate::{
    LatencyReport, StreamSet, correlate, join_decision_requests, join_tp_decisions,
    join_tp_requests,
};
pub use error::{CorrelateError, MalformedWindowError, UnsortedStreamError};
pub use join::{JoinStats, window_join, window_join_with_stats};
pub use latency::{
    DecisionRequestLatency, LatencyAccessor, TpDecisionLatency, TpRequestLatency, bounds,
    delta_seconds, series,
};
pub use record::{DataRequestRecord, TpSetRecord, TriggerDecisionRecord};
pub use stream::SortedStream;
pub use types::{Tick, TickWindow, WithTick, WithWindow};
