#![forbid(unsafe_code)]

//! Lazily propagated sum tree over `i64`.
//!
//! The elements of a fixed-size array live in an implicit binary tree:
//! node 1 covers the whole index range, and node `i` splits its range at
//! the midpoint between children `2 * i` and `2 * i + 1`. Each node carries
//! two values: the sum of the range it covers and a pending per-element
//! addition that has not yet been applied to its subtree.
//!
//! A pending addition is applied lazily. [`RangeSumTree::update_range`]
//! stops at the shallowest nodes fully contained in the target range,
//! adjusts their sums, and parks the delta in their children's pending
//! slots. A later operation that needs to descend past such a node first
//! pushes the pending value one level down. Both updates and queries
//! therefore touch O(log N) nodes.

/// Position of the root node in the implicit layout.
const ROOT: usize = 1;

/// Fixed-size array of `i64` with O(log N) range add and range sum.
///
/// Ranges are inclusive on both ends and 0-indexed. Operations on an empty
/// tree, with an upper bound past the last element, or with inverted bounds
/// are ignored by [`update_range`](Self::update_range) and answered with 0
/// by [`query_range`](Self::query_range); use the `try_` variants to detect
/// them instead.
///
/// Queries take `&mut self`: answering one may push pending additions one
/// level down the tree.
///
/// # Example
/// ```
/// use rangesum::RangeSumTree;
///
/// let mut tree = RangeSumTree::new(&[1, 2, 3, 4, 5, 6, 7, 8]);
/// tree.update_range(0, 7, 1);
/// tree.update_range(2, 5, -2);
///
/// // Elements are now [2, 3, 2, 3, 4, 5, 8, 9]
/// assert_eq!(tree.query_range(0, 7), 36);
/// assert_eq!(tree.query_range(2, 5), 14);
/// assert_eq!(tree.get(6), Some(8));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RangeSumTree {
    /// Sum of the covered range per node, exact once every ancestor's
    /// pending addition has been pushed.
    nodes: Vec<i64>,
    /// Pending per-element addition not yet applied below each node.
    /// 0 means no pending update.
    pending: Vec<i64>,
    /// Number of elements in the underlying array.
    len: usize,
}

impl RangeSumTree {
    /// Builds a tree over a copy of `values` in O(N) time and space.
    ///
    /// An empty slice allocates nothing and produces a tree that answers 0
    /// to every query and ignores every update.
    #[must_use]
    pub fn new(values: &[i64]) -> Self {
        let len = values.len();
        if len == 0 {
            return Self::default();
        }
        // Node positions for N leaves fit in 4 * N slots.
        let mut tree = Self {
            nodes: vec![0; 4 * len],
            pending: vec![0; 4 * len],
            len,
        };
        tree.build(values, ROOT, 0, len - 1);
        #[cfg(feature = "tracing")]
        tracing::debug!(len, "range sum tree built");
        tree
    }

    /// Adds `delta` to every element in the inclusive range `[lo, hi]`.
    ///
    /// Runs in O(log N). Calls on an empty tree, with `hi` past the last
    /// element, or with `lo > hi` leave the tree unchanged; use
    /// [`try_update_range`](Self::try_update_range) to detect them.
    pub fn update_range(&mut self, lo: usize, hi: usize, delta: i64) {
        let _ = self.try_update_range(lo, hi, delta);
    }

    /// Adds `delta` to every element in `[lo, hi]`, reporting rejected
    /// ranges instead of ignoring them.
    ///
    /// # Errors
    ///
    /// [`RangeError::Empty`] when the tree has no elements,
    /// [`RangeError::OutOfBounds`] when `hi >= self.len()`, and
    /// [`RangeError::Inverted`] when `lo > hi`, checked in that order. The
    /// tree is unchanged in every error case.
    pub fn try_update_range(
        &mut self,
        lo: usize,
        hi: usize,
        delta: i64,
    ) -> Result<(), RangeError> {
        self.check_range(lo, hi)?;
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("range_update", lo, hi, delta).entered();
        self.update_rec(ROOT, 0, self.len - 1, lo, hi, delta);
        Ok(())
    }

    /// Returns the sum of the elements in the inclusive range `[lo, hi]`.
    ///
    /// Runs in O(log N). Calls on an empty tree, with `hi` past the last
    /// element, or with `lo > hi` return 0; use
    /// [`try_query_range`](Self::try_query_range) to detect them.
    #[must_use]
    pub fn query_range(&mut self, lo: usize, hi: usize) -> i64 {
        self.try_query_range(lo, hi).unwrap_or(0)
    }

    /// Returns the sum over `[lo, hi]`, reporting rejected ranges instead
    /// of mapping them to 0.
    ///
    /// # Errors
    ///
    /// Same conditions and order as
    /// [`try_update_range`](Self::try_update_range).
    pub fn try_query_range(&mut self, lo: usize, hi: usize) -> Result<i64, RangeError> {
        self.check_range(lo, hi)?;
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("range_query", lo, hi).entered();
        Ok(self.query_rec(ROOT, 0, self.len - 1, lo, hi))
    }

    /// Current value of the element at `index`, or `None` out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&mut self, index: usize) -> Option<i64> {
        self.try_query_range(index, index).ok()
    }

    /// Sum of all elements. 0 for an empty tree.
    #[must_use]
    pub fn total(&mut self) -> i64 {
        if self.len == 0 {
            return 0;
        }
        self.query_range(0, self.len - 1)
    }

    /// Number of elements in the underlying array.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the underlying array has no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Rejects ranges the recursive walks must never see.
    fn check_range(&self, lo: usize, hi: usize) -> Result<(), RangeError> {
        if self.len == 0 {
            return Err(RangeError::Empty);
        }
        if hi >= self.len {
            return Err(RangeError::OutOfBounds { hi, len: self.len });
        }
        if lo > hi {
            return Err(RangeError::Inverted { lo, hi });
        }
        Ok(())
    }

    fn build(&mut self, values: &[i64], node: usize, start: usize, end: usize) {
        if start == end {
            self.nodes[node] = values[start];
            return;
        }
        let mid = start + (end - start) / 2;
        self.build(values, 2 * node, start, mid);
        self.build(values, 2 * node + 1, mid + 1, end);
        self.nodes[node] = self.nodes[2 * node] + self.nodes[2 * node + 1];
    }

    /// Folds the node's pending addition into its own sum, forwards it to
    /// the children's pending slots, and clears it. Must run before the
    /// node's sum is read or its children are visited.
    #[inline]
    fn push(&mut self, node: usize, start: usize, end: usize) {
        if self.pending[node] == 0 {
            return;
        }
        let span = (end - start + 1) as i64;
        self.nodes[node] += self.pending[node] * span;
        if start != end {
            self.pending[2 * node] += self.pending[node];
            self.pending[2 * node + 1] += self.pending[node];
        }
        self.pending[node] = 0;
    }

    fn update_rec(
        &mut self,
        node: usize,
        start: usize,
        end: usize,
        lo: usize,
        hi: usize,
        delta: i64,
    ) {
        // Push before classifying: the recombine below must see fresh child
        // sums even when a child turns out to be disjoint from [lo, hi].
        self.push(node, start, end);

        if start > end || start > hi || end < lo {
            return;
        }

        if lo <= start && end <= hi {
            let span = (end - start + 1) as i64;
            self.nodes[node] += delta * span;
            if start != end {
                self.pending[2 * node] += delta;
                self.pending[2 * node + 1] += delta;
            }
            return;
        }

        let mid = start + (end - start) / 2;
        self.update_rec(2 * node, start, mid, lo, hi, delta);
        self.update_rec(2 * node + 1, mid + 1, end, lo, hi, delta);
        self.nodes[node] = self.nodes[2 * node] + self.nodes[2 * node + 1];
    }

    fn query_rec(&mut self, node: usize, start: usize, end: usize, lo: usize, hi: usize) -> i64 {
        // A disjoint node contributes nothing; its pending addition can
        // stay parked.
        if start > end || start > hi || end < lo {
            return 0;
        }

        self.push(node, start, end);

        if lo <= start && end <= hi {
            return self.nodes[node];
        }

        let mid = start + (end - start) / 2;
        self.query_rec(2 * node, start, mid, lo, hi)
            + self.query_rec(2 * node + 1, mid + 1, end, lo, hi)
    }
}

impl From<Vec<i64>> for RangeSumTree {
    fn from(values: Vec<i64>) -> Self {
        Self::new(&values)
    }
}

impl From<&[i64]> for RangeSumTree {
    fn from(values: &[i64]) -> Self {
        Self::new(values)
    }
}

impl<const N: usize> From<[i64; N]> for RangeSumTree {
    fn from(values: [i64; N]) -> Self {
        Self::new(&values)
    }
}

impl FromIterator<i64> for RangeSumTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let values: Vec<i64> = iter.into_iter().collect();
        Self::new(&values)
    }
}

/// Rejected range for [`RangeSumTree::try_update_range`] and
/// [`RangeSumTree::try_query_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// The tree has no elements.
    Empty,
    /// The range's inclusive upper bound is past the last element.
    OutOfBounds {
        /// Requested inclusive upper bound.
        hi: usize,
        /// Number of elements in the tree.
        len: usize,
    },
    /// The range's bounds are in the wrong order.
    Inverted {
        /// Requested inclusive lower bound.
        lo: usize,
        /// Requested inclusive upper bound.
        hi: usize,
    },
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "tree has no elements"),
            Self::OutOfBounds { hi, len } => {
                write!(f, "range end {hi} out of bounds for length {len}")
            }
            Self::Inverted { lo, hi } => write!(f, "range start {lo} greater than end {hi}"),
        }
    }
}

impl std::error::Error for RangeError {}
