//! Generic slice utilities.
//!
//! - Inputs are borrowed and never mutated; transforming operations return a
//!   fresh `Vec`.
//! - Absence (no element, no match) is an `Option`, never a sentinel.
//! - Set operations treat their inputs as sets: results are ascending and
//!   deduplicated.

mod access;
mod ordered;
mod set;
mod sort;
mod transform;

pub use access::{contains, first, index, last, pop, shift, sorted_contains, sorted_index, unshift};
pub use ordered::Ordered;
pub use set::{
    MergeWalk, Merged, compare, intersect, merge_walk, noop, sorted_unique, subtract, union, unique,
};
pub use sort::{sort, sort_by};
pub use transform::{find, find_with_index, map, map_with_index, reduce, select, select_with_index};
