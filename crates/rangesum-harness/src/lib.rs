#![forbid(unsafe_code)]

//! Test support for the rangesum workspace.
//!
//! - **Reference model**: [`ArrayMirror`] applies range operations to a
//!   plain `Vec<i64>` in O(N), so tests can cross-check the tree's
//!   O(log N) answers against an implementation too simple to be wrong.
//!
//! # Quick Start
//!
//! ```
//! use rangesum_harness::ArrayMirror;
//!
//! let mut mirror = ArrayMirror::new(&[1, 2, 3, 4, 5]);
//! mirror.update_range(1, 3, 10);
//! assert_eq!(mirror.query_range(0, 4), 45);
//! assert_eq!(mirror.values(), &[1, 12, 13, 14, 5]);
//! ```

pub mod mirror;

pub use mirror::ArrayMirror;
