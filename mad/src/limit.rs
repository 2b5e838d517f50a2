//! Loop bound helper for `bar`

/// Inclusive upper bound for the loop in `bar`.
///
/// Negative inputs give `0`; everything else lands in `2..=5`.
pub fn limit(x: i64) -> i64 {
    if x < 0 {
        return 0;
    }
    x.rem_euclid(4) + 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_limit_known_values() {
        assert_eq!(limit(-1), 0);
        assert_eq!(limit(0), 2);
        assert_eq!(limit(1), 3);
        assert_eq!(limit(2), 4);
        assert_eq!(limit(3), 5);
        assert_eq!(limit(4), 2);
        assert_eq!(limit(7), 5);
    }

    #[test]
    fn test_limit_extremes() {
        assert_eq!(limit(i64::MIN), 0);
        assert_eq!(limit(i64::MAX), 5);
    }

    proptest! {
        #[test]
        fn prop_negative_is_zero(x in i64::MIN..0) {
            prop_assert_eq!(limit(x), 0);
        }

        #[test]
        fn prop_non_negative_in_range(x in 0i64..=i64::MAX) {
            let n = limit(x);
            prop_assert!((2..=5).contains(&n));
            prop_assert_eq!(n, x % 4 + 2);
        }
    }
}
