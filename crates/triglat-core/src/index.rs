use crate::types::{Tick, TickWindow, WithWindow};
use indexmap::IndexMap;

/// Equi-join index over windowed records, keyed by their exact
/// `(begin, end)` bounds.
///
/// Exact-equality matching gains nothing from tick order, so instead of
/// a nested scan the records are bucketed once and probed per query.
/// Buckets keep insertion order, which makes a probe return records in
/// the same order a linear scan of the indexed slice would.
#[derive(Debug)]
pub struct WindowIndex<'a, T> {
    by_bounds: IndexMap<(Tick, Tick), Vec<&'a T>>,
}

impl<'a, T> WindowIndex<'a, T>
where
    T: WithWindow,
{
    pub fn build(records: &'a [T]) -> Self {
        let mut by_bounds: IndexMap<(Tick, Tick), Vec<&'a T>> = IndexMap::new();

        for record in records {
            let window = record.window();
            by_bounds
                .entry((window.begin, window.end))
                .or_default()
                .push(record);
        }

        Self { by_bounds }
    }

    /// All indexed records whose bounds equal `window` exactly. A
    /// one-tick difference on either bound is a miss, not a near-match.
    pub fn probe(&self, window: TickWindow) -> &[&'a T] {
        self.by_bounds
            .get(&(window.begin, window.end))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of distinct windows indexed.
    pub fn distinct_windows(&self) -> usize {
        self.by_bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_bounds.is_empty()
    }
}
