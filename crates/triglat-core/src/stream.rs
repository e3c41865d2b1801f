use crate::{
    error::{MalformedWindowError, UnsortedStreamError},
    types::{WithTick, WithWindow},
};
use itertools::Itertools;

/// A sequence of records proven to be ordered ascending by their
/// designated tick.
///
/// The window scan breaks early once a candidate tick passes the window
/// end, which is only sound on an ordered stream; an unordered stream
/// would silently under-match. Ordering is therefore established at
/// construction: [`from_unsorted`](Self::from_unsorted) sorts, and
/// [`try_from_sorted`](Self::try_from_sorted) validates input that is
/// claimed to be ordered already.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedStream<T> {
    records: Vec<T>,
}

impl<T> SortedStream<T>
where
    T: WithTick,
{
    /// Stable sort by tick. Records with equal ticks keep their original
    /// relative order.
    pub fn from_unsorted(mut records: Vec<T>) -> Self {
        records.sort_by_key(|record| record.tick());
        Self { records }
    }

    /// Accepts records already ordered ascending (non-decreasing) by
    /// tick, failing on the first out-of-order pair.
    pub fn try_from_sorted(records: Vec<T>) -> Result<Self, UnsortedStreamError> {
        let out_of_order = records
            .iter()
            .map(|record| record.tick())
            .tuple_windows()
            .enumerate()
            .find(|&(_, (prev, next))| prev > next);

        match out_of_order {
            Some((position, (prev_tick, tick))) => Err(UnsortedStreamError {
                index: position + 1,
                prev_tick,
                tick,
            }),
            None => Ok(Self { records }),
        }
    }
}

impl<T> SortedStream<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Gives the records back, still ordered.
    pub fn into_inner(self) -> Vec<T> {
        self.records
    }
}

impl<'a, T> IntoIterator for &'a SortedStream<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Checks that every window in the collection is well formed
/// (`begin <= end`), failing fast on the first defect.
///
/// Run once per windowed input before a join starts; the scan itself
/// assumes well-formed windows and would quietly produce no matches for
/// a reversed one.
pub fn validate_windows<T>(records: &[T]) -> Result<(), MalformedWindowError>
where
    T: WithWindow,
{
    for (index, record) in records.iter().enumerate() {
        let window = record.window();
        if !window.is_well_formed() {
            return Err(MalformedWindowError {
                index,
                begin: window.begin,
                end: window.end,
            });
        }
    }

    Ok(())
}
