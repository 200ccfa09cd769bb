//! Mapping between leaves (single printed sides) and spreads (the pair of
//! leaves visible when the book lies open). Story pages are spreads in the
//! two-leaf layout: text on the left leaf, illustration on the right.

/// The left and right leaves of a spread. Spread 0 has no leaves.
pub const fn spread_to_leaves(spread: usize) -> Option<(usize, usize)> {
    if spread == 0 {
        return None;
    }

    let right = spread.saturating_mul(2);
    Some((right.saturating_sub(1), right))
}

pub const fn leaf_count(spreads: usize) -> usize {
    spreads.saturating_mul(2)
}

/// The first and last leaves are the covers and turn stiffly.
pub const fn is_hard_leaf(leaf: usize, total_leaves: usize) -> bool {
    leaf == 1 || leaf == total_leaves
}

#[cfg(test)]
mod tests {
    use {super::*, assert2::check as assert};

    #[test]
    fn test_spread_to_leaves_pairs_odd_and_even() {
        assert!(spread_to_leaves(1) == Some((1, 2)));
        assert!(spread_to_leaves(3) == Some((5, 6)));
        assert!(spread_to_leaves(0).is_none());
    }

    #[test]
    fn test_hard_leaves_are_covers() {
        let total = leaf_count(3);
        assert!(is_hard_leaf(1, total));
        assert!(is_hard_leaf(6, total));
        assert!(!is_hard_leaf(3, total));
    }
}
