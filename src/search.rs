use std::cmp::Ordering;

use tracing::trace;

use crate::distance::Distance;

/// A record that can be located by its key.
pub trait Keyed {
    type Key: Distance + PartialOrd;

    fn key(&self) -> Self::Key;
}

/// Index of the record whose key is nearest to `query`.
///
/// `records` must already be sorted ascending by key, this is not checked.
/// Returns `None` only when `records` is empty.
pub fn find_closest<R: Keyed>(query: &R::Key, records: &[R]) -> Option<usize> {
    find_closest_by_key(query, records, R::key)
}

/// Like [`find_closest`], with the key extracted by `key` instead of a
/// [`Keyed`] impl.
///
/// ```
/// use closest_match::find_closest_by_key;
///
/// let readings = [(0, "a"), (10, "b"), (11, "c"), (20, "d")];
/// assert_eq!(find_closest_by_key(&14, &readings, |r| r.0), Some(2));
/// assert_eq!(find_closest_by_key(&14, &readings[..0], |r| r.0), None);
/// ```
pub fn find_closest_by_key<R, K, F>(
    query: &K,
    records: &[R],
    mut key: F,
) -> Option<usize>
where
    K: Distance + PartialOrd,
    F: FnMut(&R) -> K,
{
    if records.is_empty() {
        return None;
    }
    Some(narrow(query, records, &mut key, 0, records.len()))
}

// Searches the non-empty window [lo, hi) of `records`.
fn narrow<R, K, F>(
    query: &K,
    records: &[R],
    key: &mut F,
    lo: usize,
    hi: usize,
) -> usize
where
    K: Distance + PartialOrd,
    F: FnMut(&R) -> K,
{
    if hi - lo == 1 {
        return lo;
    }

    let mid = lo + (hi - lo) / 2;
    let left_edge = key(&records[mid - 1]);
    let right_edge = key(&records[mid]);

    // Ties stay left. The exception is equal edges with the query above
    // them while the window still holds a larger key: only the right half
    // can get closer.
    let go_right = match query
        .distance(&left_edge)
        .partial_cmp(&query.distance(&right_edge))
    {
        Some(Ordering::Greater) => true,
        Some(Ordering::Equal) => {
            *query > right_edge && key(&records[hi - 1]) > right_edge
        }
        Some(Ordering::Less) | None => false,
    };

    trace!(lo, mid, hi, go_right, "split");

    if go_right {
        narrow(query, records, key, mid, hi)
    } else {
        narrow(query, records, key, lo, mid)
    }
}
