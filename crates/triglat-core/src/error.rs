use crate::types::Tick;
use thiserror::Error;

/// A stream claimed to be sorted was not.
///
/// `index` is the position of the first record whose tick dropped below
/// its predecessor's. Raised at the boundary instead of letting the
/// early-terminating scan silently under-match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("record {index} is out of order: tick {tick} follows tick {prev_tick}")]
pub struct UnsortedStreamError {
    pub index: usize,
    pub prev_tick: Tick,
    pub tick: Tick,
}

/// A record carries a window whose begin lies past its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("record {index} has window begin {begin} past its end {end}")]
pub struct MalformedWindowError {
    pub index: usize,
    pub begin: Tick,
    pub end: Tick,
}

/// Everything a join can reject before it starts scanning. The joins
/// themselves are pure and total; all failure happens in validation at
/// the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CorrelateError {
    #[error(transparent)]
    UnsortedStream(#[from] UnsortedStreamError),
    #[error(transparent)]
    MalformedWindow(#[from] MalformedWindowError),
}
