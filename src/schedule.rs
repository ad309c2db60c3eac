use std::cmp::Ordering;
use std::slice;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::search::{find_closest, Keyed};

/// Records held in ascending key order, ready for closest-match lookups.
///
/// Sorting happens once when the schedule is built. Equal keys keep the
/// order they were given in. Keys that do not compare even with themselves,
/// such as a NaN, are moved after every comparable key.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(from = "Vec<R>", into = "Vec<R>")]
#[serde(bound(
    serialize = "R: Keyed + Clone + Serialize",
    deserialize = "R: Keyed + Deserialize<'de>"
))]
pub struct Schedule<R: Keyed> {
    records: Vec<R>,
}

impl<R: Keyed> Schedule<R> {
    pub fn new(mut records: Vec<R>) -> Self {
        records.sort_by(|a, b| key_order(&a.key(), &b.key()));
        debug!(records = records.len(), "built schedule");
        Self { records }
    }

    pub fn closest_index(&self, key: &R::Key) -> Option<usize> {
        find_closest(key, &self.records)
    }

    pub fn closest(&self, key: &R::Key) -> Option<&R> {
        self.closest_index(key).map(|i| &self.records[i])
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, R> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.records
    }
}

// Total order over keys: incomparable keys are equal to each other and
// greater than everything else.
fn key_order<K: PartialOrd>(a: &K, b: &K) -> Ordering {
    let incomparable = |k: &K| k.partial_cmp(k).is_none();
    match (incomparable(a), incomparable(b)) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

impl<R: Keyed> From<Vec<R>> for Schedule<R> {
    fn from(records: Vec<R>) -> Self {
        Self::new(records)
    }
}

impl<R: Keyed> From<Schedule<R>> for Vec<R> {
    fn from(schedule: Schedule<R>) -> Self {
        schedule.records
    }
}

impl<R: Keyed> FromIterator<R> for Schedule<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, R: Keyed> IntoIterator for &'a Schedule<R> {
    type Item = &'a R;
    type IntoIter = slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize, Deserialize, Debug, PartialEq, Clone)]
    struct Sample {
        at: u32,
        tag: u8,
    }

    impl Keyed for Sample {
        type Key = u32;

        fn key(&self) -> u32 {
            self.at
        }
    }

    fn sample(at: u32, tag: u8) -> Sample {
        Sample { at, tag }
    }

    #[test]
    fn sorts_on_construction() {
        let schedule = Schedule::new(vec![
            sample(30, b'c'),
            sample(10, b'a'),
            sample(20, b'b'),
        ]);
        let tags: String = schedule.iter().map(|s| s.tag as char).collect();
        assert_eq!(tags, "abc");
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let schedule: Schedule<Sample> =
            vec![sample(5, b'x'), sample(1, b'a'), sample(5, b'y')].into();
        let tags: String = schedule.iter().map(|s| s.tag as char).collect();
        assert_eq!(tags, "axy");
    }

    #[test]
    fn closest_lookups() {
        let schedule: Schedule<Sample> =
            [(40, b'd'), (0, b'a'), (25, b'c'), (9, b'b')]
                .into_iter()
                .map(|(at, tag)| sample(at, tag))
                .collect();

        assert_eq!(schedule.closest_index(&12), Some(1));
        assert_eq!(schedule.closest(&12).map(|s| s.tag), Some(b'b'));
        assert_eq!(schedule.closest(&1000).map(|s| s.tag), Some(b'd'));
        assert_eq!(schedule.get(2), Some(&sample(25, b'c')));
        assert_eq!(schedule.len(), 4);
    }

    #[test]
    fn empty_schedule() {
        let schedule: Schedule<Sample> = Schedule::new(Vec::new());
        assert!(schedule.is_empty());
        assert_eq!(schedule.closest_index(&3), None);
        assert_eq!(schedule.closest(&3), None);
    }

    struct Level(f64);

    impl Keyed for Level {
        type Key = f64;

        fn key(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn incomparable_keys_sort_last() {
        let schedule: Schedule<Level> = (1..=60)
            .rev()
            .map(|i| if i % 3 == 0 { f64::NAN } else { f64::from(i) })
            .map(Level)
            .collect();

        let mut levels = Vec::new();
        for level in &schedule {
            levels.push(level.0);
        }
        let comparable = levels.iter().take_while(|l| !l.is_nan()).count();

        assert_eq!(comparable, 40);
        assert!(levels[comparable..].iter().all(|l| l.is_nan()));
        assert!(levels[..comparable].windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(schedule.closest(&10.4).map(|l| l.0), Some(10.0));
        assert_eq!(schedule.closest(&100.0).map(|l| l.0), Some(59.0));
    }

    #[test]
    fn serde_sorts_on_load() -> Result<(), serde_lexpr::Error> {
        let schedule: Schedule<Sample> = serde_lexpr::from_str(
            "(((at . 7) (tag . 98)) ((at . 2) (tag . 97)))",
        )?;
        assert_eq!(schedule.as_slice(), &[sample(2, b'a'), sample(7, b'b')]);

        let round_trip: Schedule<Sample> =
            serde_lexpr::from_str(&serde_lexpr::to_string(&schedule)?)?;
        assert_eq!(round_trip, schedule);
        Ok(())
    }
}
