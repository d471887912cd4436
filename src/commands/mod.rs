//! Command implementations for the join-settings and split-settings binaries

pub mod completions;
pub mod join;
pub mod split;
