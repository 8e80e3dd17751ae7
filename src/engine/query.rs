//! Probability Query
//! Answers "how likely is number N" against a computed reachability table.

use super::ReachabilityTable;
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid selection '{input}': please select a number between 1 and {ceiling}")]
    InvalidSelection { input: String, ceiling: u32 },
}

/// Result of a single probability query.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityAnswer {
    pub target: u32,
    pub count: usize,
    /// Size of the source range used as denominator.
    pub total: usize,
    pub probability: f64,
    /// Reaching sources, ascending.
    pub sources: Vec<u32>,
}

impl ProbabilityAnswer {
    pub fn percent(&self) -> f64 {
        self.probability * 100.0
    }
}

impl fmt::Display for ProbabilityAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Number {} is reachable by {} day(s) out of {}.",
            self.target, self.count, self.total
        )?;
        writeln!(
            f,
            "Probability: {:.5} (≈ {:.2}%)",
            self.probability,
            self.percent()
        )?;
        if self.sources.is_empty() {
            write!(f, "Days: none")
        } else {
            let days: Vec<String> = self.sources.iter().map(u32::to_string).collect();
            write!(f, "Days: {}", days.join(", "))
        }
    }
}

impl ReachabilityTable {
    /// Query a target number. Anything outside 1..=ceiling is an invalid selection.
    pub fn query(&self, target: u32) -> Result<ProbabilityAnswer, QueryError> {
        let sources = self
            .reachable_from(target)
            .ok_or_else(|| QueryError::InvalidSelection {
                input: target.to_string(),
                ceiling: self.ceiling(),
            })?;

        let count = sources.len();
        Ok(ProbabilityAnswer {
            target,
            count,
            total: self.source_count(),
            probability: self.probability_of(count),
            sources: sources.to_vec(),
        })
    }

    /// Query from raw user input, e.g. a dropdown or text field value.
    pub fn query_input(&self, input: &str) -> Result<ProbabilityAnswer, QueryError> {
        let target: u32 = input
            .trim()
            .parse()
            .map_err(|_| QueryError::InvalidSelection {
                input: input.to_string(),
                ceiling: self.ceiling(),
            })?;
        self.query(target)
    }
}
