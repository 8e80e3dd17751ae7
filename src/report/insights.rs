//! Insights derived from the count table: most and least likely numbers.

use crate::engine::ReachabilityTable;

/// How many distinct reach counts are listed in the summary line.
const DISTINCT_COUNTS_SHOWN: usize = 8;

/// Numbers sharing an extreme reach count.
#[derive(Debug, Clone, PartialEq)]
pub struct Extreme {
    pub count: usize,
    pub probability: f64,
    /// Ascending. More than one entry is a tie.
    pub numbers: Vec<u32>,
}

impl Extreme {
    pub fn is_tie(&self) -> bool {
        self.numbers.len() > 1
    }

    fn numbers_list(&self) -> String {
        self.numbers
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    pub most_likely: Option<Extreme>,
    pub least_likely: Option<Extreme>,
    /// Distinct reach counts, descending.
    pub distinct_counts: Vec<usize>,
}

impl Insights {
    pub fn from_table(table: &ReachabilityTable) -> Self {
        let extreme = |count: usize| Extreme {
            count,
            probability: table.probability_of(count),
            numbers: table
                .counts()
                .filter(|&(_, c)| c == count)
                .map(|(n, _)| n)
                .collect(),
        };

        let max = table.counts().map(|(_, c)| c).max();
        let min = table.counts().map(|(_, c)| c).min();

        let mut distinct_counts: Vec<usize> = table.counts().map(|(_, c)| c).collect();
        distinct_counts.sort_unstable_by(|a, b| b.cmp(a));
        distinct_counts.dedup();

        Self {
            most_likely: max.map(extreme),
            least_likely: min.map(extreme),
            distinct_counts,
        }
    }

    /// Text lines for the insight panel.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        match &self.most_likely {
            Some(most) if most.is_tie() => lines.push(format!(
                "Most likely numbers (tied): {} (each reachable by {} different days → probability ≈ {:.5} or {:.2}%)",
                most.numbers_list(),
                most.count,
                most.probability,
                most.probability * 100.0
            )),
            Some(most) => lines.push(format!(
                "Most likely number: {} (reachable by {} different days → probability ≈ {:.5} or {:.2}%)",
                most.numbers_list(),
                most.count,
                most.probability,
                most.probability * 100.0
            )),
            None => lines.push("Most likely number: none (no numbers in range)".to_string()),
        }

        match &self.least_likely {
            Some(least) if least.is_tie() => lines.push(format!(
                "Least likely numbers: {} (each reachable by {} day(s) → probability ≈ {:.5} or {:.2}%)",
                least.numbers_list(),
                least.count,
                least.probability,
                least.probability * 100.0
            )),
            Some(least) => lines.push(format!(
                "Least likely number: {} (reachable by {} day(s) → probability ≈ {:.5} or {:.2}%)",
                least.numbers_list(),
                least.count,
                least.probability,
                least.probability * 100.0
            )),
            None => lines.push("Least likely number: none (no numbers in range)".to_string()),
        }

        let shown: Vec<usize> = self
            .distinct_counts
            .iter()
            .copied()
            .take(DISTINCT_COUNTS_SHOWN)
            .collect();
        lines.push(format!(
            "Unique reach counts across numbers: {:?} (top values shown)",
            shown
        ));

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_is_uniquely_most_likely() {
        let insights = Insights::from_table(&ReachabilityTable::default());
        let most = insights.most_likely.unwrap();
        assert_eq!(most.numbers, vec![60]);
        assert_eq!(most.count, 11);
        assert!(!most.is_tie());
    }

    #[test]
    fn least_likely_is_a_tie_of_one_and_large_primes() {
        let insights = Insights::from_table(&ReachabilityTable::default());
        let least = insights.least_likely.unwrap();
        assert_eq!(least.numbers, vec![1, 37, 41, 43, 47, 53, 59, 61]);
        assert_eq!(least.count, 1);
        assert!(least.is_tie());
    }

    #[test]
    fn distinct_counts_are_descending_and_unique() {
        let insights = Insights::from_table(&ReachabilityTable::default());
        assert_eq!(insights.distinct_counts.first(), Some(&11));
        assert_eq!(insights.distinct_counts.last(), Some(&1));
        assert!(insights.distinct_counts.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn lines_flag_ties() {
        let insights = Insights::from_table(&ReachabilityTable::default());
        let lines = insights.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Most likely number: 60 (reachable by 11"));
        assert!(lines[1].starts_with("Least likely numbers: 1, 37, 41, 43, 47, 53, 59, 61"));
        assert!(lines[1].contains("0.03226 or 3.23%"));
    }

    #[test]
    fn tied_maximum_is_reported_not_picked() {
        // 4 and 6 are both reached by three of the sources 1..=4.
        let insights = Insights::from_table(&ReachabilityTable::compute(6, 1..=4));
        let most = insights.most_likely.unwrap();
        assert_eq!(most.numbers, vec![4, 6]);
        assert!(most.is_tie());

        let insights = Insights::from_table(&ReachabilityTable::compute(6, 1..=3));
        let most = insights.most_likely.unwrap();
        assert_eq!(most.numbers, vec![6]);

        let insights = Insights::from_table(&ReachabilityTable::compute(4, 1..=2));
        let most = insights.most_likely.as_ref().unwrap();
        assert_eq!(most.numbers, vec![2, 4]);
        assert!(most.is_tie());
        assert!(insights.lines()[0].starts_with("Most likely numbers (tied): 2, 4"));
    }

    #[test]
    fn empty_table_has_no_extremes() {
        let insights = Insights::from_table(&ReachabilityTable::for_month(0));
        assert!(insights.most_likely.is_none());
        assert!(insights.least_likely.is_none());
        assert!(insights.lines()[0].contains("none"));
    }
}
