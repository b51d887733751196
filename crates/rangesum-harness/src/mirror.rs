#![forbid(unsafe_code)]

//! Brute-force reference model for range-add / range-sum operations.

/// Plain-`Vec` mirror of a range-add / range-sum array.
///
/// Every operation walks the elements directly, so answers are O(N) but
/// obviously correct. The range contract matches `rangesum::RangeSumTree`:
/// an update on an empty array, with `hi` past the last element, or with
/// `lo > hi` is ignored, and the matching query returns 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayMirror {
    values: Vec<i64>,
}

impl ArrayMirror {
    /// Copies `values` into a new mirror.
    #[must_use]
    pub fn new(values: &[i64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// Adds `delta` to every element in the inclusive range `[lo, hi]`.
    /// Invalid ranges are ignored.
    pub fn update_range(&mut self, lo: usize, hi: usize, delta: i64) {
        if !self.valid(lo, hi) {
            return;
        }
        for v in &mut self.values[lo..=hi] {
            *v += delta;
        }
    }

    /// Sum of the elements in the inclusive range `[lo, hi]`. Invalid
    /// ranges return 0.
    #[must_use]
    pub fn query_range(&self, lo: usize, hi: usize) -> i64 {
        if !self.valid(lo, hi) {
            return 0;
        }
        self.values[lo..=hi].iter().sum()
    }

    /// Element at `index`, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// Sum of all elements. 0 when empty.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.values.iter().sum()
    }

    /// The mirrored elements.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mirror has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn valid(&self, lo: usize, hi: usize) -> bool {
        !self.values.is_empty() && hi < self.values.len() && lo <= hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_adds_to_each_element() {
        let mut mirror = ArrayMirror::new(&[1, 2, 3, 4, 5]);
        mirror.update_range(1, 3, 10);
        assert_eq!(mirror.values(), &[1, 12, 13, 14, 5]);
    }

    #[test]
    fn query_sums_inclusive_range() {
        let mirror = ArrayMirror::new(&[1, 2, 3, 4, 5]);
        assert_eq!(mirror.query_range(0, 4), 15);
        assert_eq!(mirror.query_range(1, 3), 9);
        assert_eq!(mirror.query_range(2, 2), 3);
    }

    #[test]
    fn out_of_bounds_hi_is_rejected() {
        let mut mirror = ArrayMirror::new(&[1, 2, 3]);
        mirror.update_range(0, 3, 7);
        assert_eq!(mirror.values(), &[1, 2, 3]);
        assert_eq!(mirror.query_range(0, 3), 0);
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut mirror = ArrayMirror::new(&[1, 2, 3]);
        mirror.update_range(2, 1, 7);
        assert_eq!(mirror.values(), &[1, 2, 3]);
        assert_eq!(mirror.query_range(2, 1), 0);
    }

    #[test]
    fn empty_mirror_ignores_everything() {
        let mut mirror = ArrayMirror::new(&[]);
        mirror.update_range(0, 0, 7);
        assert_eq!(mirror.query_range(0, 0), 0);
        assert!(mirror.is_empty());
        assert_eq!(mirror.len(), 0);
        assert_eq!(mirror.total(), 0);
    }

    #[test]
    fn get_reads_single_elements() {
        let mirror = ArrayMirror::new(&[7, 8, 9]);
        assert_eq!(mirror.get(0), Some(7));
        assert_eq!(mirror.get(2), Some(9));
        assert_eq!(mirror.get(3), None);
    }

    #[test]
    fn total_matches_full_range_query() {
        let mirror = ArrayMirror::new(&[3, -1, 4, -1, 5]);
        assert_eq!(mirror.total(), 10);
        assert_eq!(mirror.total(), mirror.query_range(0, 4));
    }

    #[test]
    fn default_is_empty() {
        assert!(ArrayMirror::default().is_empty());
    }
}
