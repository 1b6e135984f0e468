//! Precomputed search tables
//!
//! Both tables are built on first use and shared read-only by all searches.
mod partition;
mod permutation;

pub use self::{
    partition::{partitions, Partition},
    permutation::{permutations, Order},
};
