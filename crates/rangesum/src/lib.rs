#![forbid(unsafe_code)]

//! Range updates and range sums over a fixed array of `i64` in O(log N).
//!
//! This crate provides one data structure:
//! - [`RangeSumTree`] - implicit binary tree with lazily propagated range
//!   additions
//! - [`RangeError`] - rejected-range report for the checked operations
//!
//! Both operations work on inclusive index ranges. Out-of-range or inverted
//! bounds are ignored by [`RangeSumTree::update_range`] and answered with 0
//! by [`RangeSumTree::query_range`]; the `try_` variants report them as
//! [`RangeError`] instead.
//!
//! # Example
//! ```
//! use rangesum::RangeSumTree;
//!
//! let mut tree = RangeSumTree::new(&[1, 2, 3, 4, 5]);
//!
//! // Sums before any update
//! assert_eq!(tree.query_range(0, 4), 15);
//! assert_eq!(tree.query_range(1, 3), 9);
//!
//! // Add 10 to elements 1..=3
//! tree.update_range(1, 3, 10);
//! assert_eq!(tree.query_range(0, 4), 45);
//! assert_eq!(tree.query_range(1, 3), 39);
//! assert_eq!(tree.query_range(0, 1), 13);
//!
//! // Invalid ranges are ignored by updates and answered with 0 by queries
//! tree.update_range(3, 1, 100);
//! assert_eq!(tree.query_range(0, 9), 0);
//! assert_eq!(tree.query_range(0, 4), 45);
//! ```

pub mod tree;

pub use tree::{RangeError, RangeSumTree};
