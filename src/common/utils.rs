//! This file provides the numeric helpers shared by the estimators,
//! such as the tolerant equality and the base-2 logarithm.
//! All functions are pure.


/// Tolerance used by [`eq`] and [`log2`].
pub const EPSILON: f64 = 1e-6;


/// Returns `true` if `a` and `b` are equal up to [`EPSILON`].
#[inline(always)]
pub fn eq(a: f64, b: f64) -> bool {
    a == b || (a - b).abs() < EPSILON
}


/// Returns `true` if `a` is greater than `b` by more than [`EPSILON`].
#[inline(always)]
pub fn gr(a: f64, b: f64) -> bool {
    a - b > EPSILON
}


/// The logarithm of base 2.
/// Returns `0` for `x < EPSILON`, so that `p * log2(p)` vanishes
/// for empty classes.
#[inline(always)]
pub fn log2(x: f64) -> f64 {
    if x < EPSILON { 0f64 } else { x.ln() / std::f64::consts::LN_2 }
}


/// Normalizes `items` so that its entries sum up to `1`.
/// A vector whose sum is zero (or not a number) is left untouched
/// and `false` is returned.
#[inline(always)]
pub fn normalize(items: &mut [f64]) -> bool {
    let z = items.iter().sum::<f64>();
    normalize_by(items, z)
}


/// Divides each entry of `items` by `total`.
/// `total == 0` (or `NaN`) leaves `items` untouched
/// and returns `false`.
#[inline(always)]
pub fn normalize_by(items: &mut [f64], total: f64) -> bool {
    if total.is_nan() || eq(total, 0f64) {
        return false;
    }
    items.iter_mut()
        .for_each(|item| { *item /= total; });
    true
}


/// Returns the index of the maximal entry.
/// Ties are broken by the smallest index.
/// Returns `None` if `items` is empty or all entries are zero,
/// i.e., the distribution carries no classification.
#[inline(always)]
pub fn max_index(items: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &item) in items.iter().enumerate() {
        match best {
            Some((_, b)) if item <= b => {},
            _ => { best = Some((i, item)); },
        }
    }

    let (ix, value) = best?;
    if items.iter().all(|item| eq(*item, 0f64)) || value.is_nan() {
        None
    } else {
        Some(ix)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_01() {
        assert!(eq(0.0, 1e-7));
        assert!(eq(1.0, 1.0 + 5e-7));
        assert!(!eq(0.0, 1e-5));
    }

    #[test]
    fn test_log2_01() {
        assert_eq!(log2(0f64), 0f64);
        assert_eq!(log2(1e-7), 0f64);
        assert!((log2(8f64) - 3f64).abs() < 1e-12);
        assert!((log2(0.5) + 1f64).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_01() {
        let mut v = vec![1.0, 3.0];
        assert!(normalize(&mut v));
        assert_eq!(v, vec![0.25, 0.75]);
    }

    #[test]
    fn test_normalize_02() {
        let mut v = vec![0.0, 0.0, 0.0];
        assert!(!normalize(&mut v));
        assert_eq!(v, vec![0.0; 3]);
    }

    #[test]
    fn test_normalize_by_01() {
        let mut v = vec![6.0];
        assert!(normalize_by(&mut v, 2.0));
        assert_eq!(v, vec![3.0]);
    }

    #[test]
    fn test_max_index_01() {
        assert_eq!(max_index(&[0.2, 0.5, 0.3]), Some(1));
        // first-seen tie break
        assert_eq!(max_index(&[0.4, 0.4, 0.2]), Some(0));
    }

    #[test]
    fn test_max_index_02() {
        assert_eq!(max_index(&[]), None);
        assert_eq!(max_index(&[0.0, 0.0]), None);
    }
}
