//! Engine module - reachability table and probability queries

mod query;
mod reachability;

pub use query::{ProbabilityAnswer, QueryError};
pub use reachability::{EngineError, ReachabilityTable, DAYS_IN_MONTH, DEFAULT_CEILING, MAX_CEILING};
