use crate::{
    latency::delta_seconds,
    types::{Tick, TickWindow, WithTick, WithWindow},
};

/// A trigger-primitive (TP) set as it was received by the trigger stage.
///
/// One record per `TPs Received` log line. Records are built once by the
/// log parser and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TpSetRecord {
    /// Detector time the earliest primitive in the set starts at. This
    /// is the tick the request and decision windows are tested against.
    pub start_tick: Tick,
    /// Summed ADC of the set. Informational only, never joined on.
    pub adc_integral: u64,
    /// Wall-clock-equivalent tick the set entered the trigger stage.
    pub received_tick: Tick,
    /// Wall-clock-equivalent tick the set was buffered downstream.
    pub buffered_tick: Tick,
}

impl TpSetRecord {
    /// Seconds from arrival at the trigger stage to being buffered
    /// downstream. Negative when the two clocks disagree.
    pub fn latency_received_to_buffered(&self) -> f64 {
        delta_seconds(self.received_tick, self.buffered_tick)
    }
}

impl WithTick for TpSetRecord {
    fn tick(&self) -> Tick {
        self.start_tick
    }
}

/// A request for the trigger primitives inside a time window, issued by
/// the downstream buffering stage.
///
/// Invariant: `window_begin <= window_end`. A reversed window is a
/// data-quality defect in the log and fails validation instead of being
/// swapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataRequestRecord {
    pub window_begin: Tick,
    pub window_end: Tick,
    /// Tick the request arrived at the buffer.
    pub received_tick: Tick,
    /// Tick the buffer finished handling the request.
    pub handled_tick: Tick,
}

impl DataRequestRecord {
    /// Seconds the buffer took to handle the request.
    pub fn latency_received_to_handled(&self) -> f64 {
        delta_seconds(self.received_tick, self.handled_tick)
    }
}

impl WithTick for DataRequestRecord {
    /// Requests are ordered by where their window starts.
    fn tick(&self) -> Tick {
        self.window_begin
    }
}

impl WithWindow for DataRequestRecord {
    fn window(&self) -> TickWindow {
        TickWindow::new(self.window_begin, self.window_end)
    }
}

/// A module-level trigger decision naming the readout window to be
/// persisted, with the tick it was dispatched downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerDecisionRecord {
    pub readout_start: Tick,
    pub readout_end: Tick,
    pub sent_tick: Tick,
}

impl WithWindow for TriggerDecisionRecord {
    fn window(&self) -> TickWindow {
        TickWindow::new(self.readout_start, self.readout_end)
    }
}
