//! Setting sets: joining fragment directories and splitting aggregates

pub mod join;
pub mod paths;
pub mod split;

pub use join::{JoinOutcome, join_set};
pub use split::{SplitPlan, split_file};
