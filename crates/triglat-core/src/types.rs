/// Integer detector-clock unit. Ticks are nanosecond-scale: divide a
/// tick difference by 1e9 to obtain seconds.
pub type Tick = u64;

/// A closed tick interval, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TickWindow {
    pub begin: Tick,
    pub end: Tick,
}

impl TickWindow {
    pub fn new(begin: Tick, end: Tick) -> Self {
        Self { begin, end }
    }

    /// Membership test, inclusive on both bounds.
    pub fn contains(&self, tick: Tick) -> bool {
        self.begin <= tick && tick <= self.end
    }

    /// A window with `begin > end` is malformed upstream data, not an
    /// empty window, and must not be silently repaired.
    pub fn is_well_formed(&self) -> bool {
        self.begin <= self.end
    }
}

/// Extracts the record's designated ordering tick, the field a
/// [`SortedStream`](crate::SortedStream) orders by and the window scan
/// compares against.
pub trait WithTick {
    fn tick(&self) -> Tick;
}

/// Extracts the readout window a record queries candidates with.
pub trait WithWindow {
    fn window(&self) -> TickWindow;
}
