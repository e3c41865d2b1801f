use crate::{
    stream::SortedStream,
    types::{WithTick, WithWindow},
};
use tracing::debug;

/// Scan counters reported by [`window_join_with_stats`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JoinStats {
    /// Outer windows visited.
    pub windows_scanned: usize,
    /// Candidate probes performed across all windows.
    pub candidates_scanned: usize,
    /// Pairs emitted.
    pub matches: usize,
}

/// Pairs every candidate whose tick falls inside an outer record's
/// window, inclusive on both bounds.
///
/// Candidates are scanned in ascending tick order and the scan stops as
/// soon as a candidate tick exceeds the current window end: the stream
/// is ordered, so no later candidate can fall inside that window either.
/// Each outer record rescans the candidate stream from its beginning, so
/// overlapping windows may pair the same candidate more than once and no
/// dedup is performed. Worst case O(N*M); in practice the early break
/// prunes most of the candidate range once windows advance past it.
///
/// Results preserve outer iteration order first, candidate scan order
/// within it. An empty outer or candidate stream produces an empty
/// result.
pub fn window_join<O, C, R, F>(outer: &[O], candidates: &SortedStream<C>, pair: F) -> Vec<R>
where
    O: WithWindow,
    C: WithTick,
    F: FnMut(&O, &C) -> R,
{
    let (results, stats) = window_join_with_stats(outer, candidates, pair);
    debug!(
        windows = stats.windows_scanned,
        probes = stats.candidates_scanned,
        matches = stats.matches,
        "window join finished"
    );
    results
}

/// Same scan as [`window_join`], also returning its counters.
pub fn window_join_with_stats<O, C, R, F>(
    outer: &[O],
    candidates: &SortedStream<C>,
    mut pair: F,
) -> (Vec<R>, JoinStats)
where
    O: WithWindow,
    C: WithTick,
    F: FnMut(&O, &C) -> R,
{
    let mut results = Vec::new();
    let mut stats = JoinStats::default();

    for outer_record in outer {
        let window = outer_record.window();
        stats.windows_scanned += 1;

        for candidate in candidates {
            stats.candidates_scanned += 1;
            let tick = candidate.tick();

            if window.contains(tick) {
                results.push(pair(outer_record, candidate));
                stats.matches += 1;
            } else if tick > window.end {
                // Sorted-candidate invariant: every remaining candidate
                // has an even larger tick.
                break;
            }
        }
    }

    (results, stats)
}
