//! Progress estimate for a sorting session.
//!
//! Inserting the i-th item (1-based) into a sorted list takes about
//! `log2(min(i, limit))` comparisons. Progress is the share of that total
//! already covered by the items inserted so far. It is a weighting, not a
//! count of answered questions.

/// Estimated comparisons needed to insert the item at 1-based `position`.
pub fn insertion_cost(position: usize, limit: Option<usize>) -> f64 {
    let depth = match limit {
        Some(limit) => position.min(limit),
        None => position,
    };
    if depth == 0 {
        return 0.0;
    }
    (depth as f64).log2()
}

/// Percentage (0-100) of the estimated work done once `inserted` of `len`
/// items are placed.
///
/// 100 is reserved for "every item placed"; a partial session reports at
/// most 99 however small the remaining share rounds to.
pub fn estimate_progress(len: usize, inserted: usize, limit: Option<usize>) -> u8 {
    if inserted >= len {
        return 100;
    }

    let total: f64 = (1..=len).map(|i| insertion_cost(i, limit)).sum();
    if total <= 0.0 {
        return 0;
    }

    let current: f64 = (1..=inserted).map(|i| insertion_cost(i, limit)).sum();
    ((current / total * 100.0).round() as u8).min(99)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_cost_capped_by_limit() {
        assert_eq!(insertion_cost(1, None), 0.0);
        assert_eq!(insertion_cost(8, None), 3.0);
        assert_eq!(insertion_cost(8, Some(4)), 2.0);
        assert_eq!(insertion_cost(8, Some(0)), 0.0);
    }

    #[test]
    fn test_progress_bounds() {
        assert_eq!(estimate_progress(10, 0, None), 0);
        assert_eq!(estimate_progress(10, 1, None), 0);
        assert_eq!(estimate_progress(10, 10, None), 100);
    }

    #[test]
    fn test_progress_weights_later_items_more() {
        // Items 1..=4 cost 0 + 1 + log2(3) + 2 = 4.585; the first half covers 1.
        assert_eq!(estimate_progress(4, 2, None), 22);
        assert_eq!(estimate_progress(4, 3, None), 56);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut last = 0;
        for inserted in 0..=66 {
            let p = estimate_progress(66, inserted, Some(10));
            assert!(p >= last);
            last = p;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_progress_stays_below_100_until_last_item_placed() {
        // The last item's share of the total rounds away on long lists.
        assert_eq!(estimate_progress(400, 399, None), 99);
        assert_eq!(estimate_progress(250, 249, Some(10)), 99);
        assert_eq!(estimate_progress(1000, 999, Some(3)), 99);
        assert_eq!(estimate_progress(400, 400, None), 100);
    }

    #[test]
    fn test_progress_without_any_cost() {
        assert_eq!(estimate_progress(0, 0, None), 100);
        assert_eq!(estimate_progress(1, 0, None), 0);
        assert_eq!(estimate_progress(1, 1, None), 100);
        assert_eq!(estimate_progress(5, 2, Some(0)), 0);
        assert_eq!(estimate_progress(5, 5, Some(0)), 100);
    }
}
