/*
 * Closest-match lookup over date-ordered records
 *
 * Given a list sorted by date and a tapped date, find the index of the
 * record nearest to that date:
 *  - split the candidates in half
 *  - compare the two dates either side of the split
 *  - keep the half whose edge is nearer, ties keep the earlier half
 *  - stop at a single candidate
 *
 * Runs in O(log n) comparisons with no copying of the input.
 *
 * An empty list has no closest record, which is reported as None rather
 * than falling back to index 0.
 */

mod distance;
mod error;
mod fixture;
mod schedule;
mod search;

pub use crate::distance::Distance;
pub use crate::error::Error;
pub use crate::fixture::{closest_match, parse_date, Match};
pub use crate::schedule::Schedule;
pub use crate::search::{find_closest, find_closest_by_key, Keyed};
