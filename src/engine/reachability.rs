//! Reachability Engine
//! Computes, for every target number up to a ceiling, which source days reach it
//! by positive integer multiplication.

use std::ops::RangeInclusive;
use thiserror::Error;
use tracing::debug;

/// Number of source days considered by the checker.
pub const DAYS_IN_MONTH: u32 = 31;

/// Default upper bound of target numbers.
pub const DEFAULT_CEILING: u32 = 65;

/// Largest ceiling a table may be built for; one list is allocated per target.
pub const MAX_CEILING: u32 = 10_000;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Ceiling {ceiling} exceeds the maximum of {max}")]
    CeilingTooLarge { ceiling: u32, max: u32 },
}

/// Read-only mapping from target number (1..=ceiling) to the ascending list of
/// source values that reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilityTable {
    ceiling: u32,
    sources: RangeInclusive<u32>,
    /// `reach[n - 1]` holds the sources reaching `n`, ascending.
    reach: Vec<Vec<u32>>,
}

impl ReachabilityTable {
    /// Build the table for `ceiling` using the given source range, rejecting
    /// ceilings above [`MAX_CEILING`].
    pub fn try_compute(ceiling: u32, sources: RangeInclusive<u32>) -> Result<Self, EngineError> {
        if ceiling > MAX_CEILING {
            return Err(EngineError::CeilingTooLarge {
                ceiling,
                max: MAX_CEILING,
            });
        }
        Ok(Self::compute(ceiling, sources))
    }

    /// Build the table for `ceiling` using the given source range.
    ///
    /// A source of 0 never exceeds the ceiling when multiplied, so it is skipped
    /// and does not count toward the probability denominator.
    ///
    /// # Panics
    ///
    /// Panics if `ceiling` exceeds [`MAX_CEILING`]; use [`Self::try_compute`]
    /// for untrusted input.
    pub fn compute(ceiling: u32, sources: RangeInclusive<u32>) -> Self {
        assert!(
            ceiling <= MAX_CEILING,
            "ceiling {} exceeds the maximum of {}",
            ceiling,
            MAX_CEILING
        );
        let mut reach: Vec<Vec<u32>> = vec![Vec::new(); ceiling as usize];

        for day in sources.clone().filter(|&d| d > 0) {
            let mut multiple: u32 = 1;
            loop {
                let Some(value) = day.checked_mul(multiple) else {
                    break;
                };
                if value > ceiling {
                    break;
                }
                // Sources are visited in ascending order, so each list stays sorted.
                reach[(value - 1) as usize].push(day);
                multiple += 1;
            }
        }

        debug!(
            ceiling,
            sources = ?sources,
            "reachability table computed"
        );

        Self {
            ceiling,
            sources,
            reach,
        }
    }

    /// Table over the days of a month (1..=31).
    pub fn for_month(ceiling: u32) -> Self {
        Self::compute(ceiling, 1..=DAYS_IN_MONTH)
    }

    pub fn ceiling(&self) -> u32 {
        self.ceiling
    }

    /// Size of the source range, the fixed probability denominator.
    pub fn source_count(&self) -> usize {
        self.sources.clone().filter(|&d| d > 0).count()
    }

    /// Whether `n` is a valid target for this table.
    pub fn contains(&self, n: u32) -> bool {
        (1..=self.ceiling).contains(&n)
    }

    /// Ascending sources reaching `n`, or `None` when `n` is outside 1..=ceiling.
    pub fn reachable_from(&self, n: u32) -> Option<&[u32]> {
        if !self.contains(n) {
            return None;
        }
        self.reach.get((n - 1) as usize).map(Vec::as_slice)
    }

    /// Number of sources reaching `n`.
    pub fn count(&self, n: u32) -> Option<usize> {
        self.reachable_from(n).map(<[u32]>::len)
    }

    /// The count table: `(target, count)` in ascending target order.
    pub fn counts(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.reach
            .iter()
            .enumerate()
            .map(|(i, days)| (i as u32 + 1, days.len()))
    }

    /// Iterate `(target, sources)` in ascending target order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &[u32])> + '_ {
        self.reach
            .iter()
            .enumerate()
            .map(|(i, days)| (i as u32 + 1, days.as_slice()))
    }

    /// Probability for a reach count, always within [0, 1].
    pub fn probability_of(&self, count: usize) -> f64 {
        let total = self.source_count();
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    }

    pub fn is_empty(&self) -> bool {
        self.reach.is_empty()
    }
}

impl Default for ReachabilityTable {
    fn default() -> Self {
        Self::for_month(DEFAULT_CEILING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaled_down_fixture_matches_expected_table() {
        let table = ReachabilityTable::compute(10, 1..=5);
        let expected: [&[u32]; 10] = [
            &[1],
            &[1, 2],
            &[1, 3],
            &[1, 2, 4],
            &[1, 5],
            &[1, 2, 3],
            &[1],
            &[1, 2, 4],
            &[1, 3],
            &[1, 2, 5],
        ];
        for (i, days) in expected.iter().enumerate() {
            assert_eq!(table.reachable_from(i as u32 + 1), Some(*days));
        }
    }

    #[test]
    fn zero_ceiling_yields_empty_table() {
        let table = ReachabilityTable::for_month(0);
        assert!(table.is_empty());
        assert_eq!(table.counts().count(), 0);
        assert_eq!(table.reachable_from(1), None);
    }

    #[test]
    fn every_day_reaches_itself() {
        let table = ReachabilityTable::default();
        for n in 1..=DAYS_IN_MONTH {
            assert!(table.reachable_from(n).unwrap().contains(&n));
        }
    }

    #[test]
    fn sixty_counts_its_divisors_up_to_thirty_one() {
        let table = ReachabilityTable::default();
        let divisors: Vec<u32> = (1..=DAYS_IN_MONTH).filter(|d| 60 % d == 0).collect();
        assert_eq!(table.reachable_from(60), Some(divisors.as_slice()));
        assert_eq!(table.count(60), Some(11));
    }

    #[test]
    fn out_of_range_targets_have_no_entry() {
        let table = ReachabilityTable::default();
        assert_eq!(table.count(0), None);
        assert_eq!(table.count(66), None);
    }

    #[test]
    fn zero_source_is_skipped() {
        let table = ReachabilityTable::compute(6, 0..=3);
        assert_eq!(table.source_count(), 3);
        assert_eq!(table.reachable_from(6), Some(&[1, 2, 3][..]));
    }

    #[test]
    fn oversized_ceiling_is_rejected_without_allocating() {
        assert_eq!(
            ReachabilityTable::try_compute(u32::MAX, 1..=DAYS_IN_MONTH),
            Err(EngineError::CeilingTooLarge {
                ceiling: u32::MAX,
                max: MAX_CEILING
            })
        );
        let table = ReachabilityTable::try_compute(MAX_CEILING, 1..=DAYS_IN_MONTH).unwrap();
        assert_eq!(table.ceiling(), MAX_CEILING);
    }

    #[test]
    #[should_panic(expected = "exceeds the maximum")]
    fn compute_panics_above_max_ceiling() {
        ReachabilityTable::compute(MAX_CEILING + 1, 1..=DAYS_IN_MONTH);
    }

    #[test]
    fn empty_source_range_has_zero_probability() {
        #[allow(clippy::reversed_empty_ranges)]
        let table = ReachabilityTable::compute(5, 3..=1);
        assert_eq!(table.source_count(), 0);
        assert_eq!(table.count(4), Some(0));
        assert_eq!(table.probability_of(0), 0.0);
    }
}
