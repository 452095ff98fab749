//! Entropy and the split criteria over a [`SampleView`].
//!
//! All functions are pure.
//! Every function requires a nominal class and a nominal split attribute,
//! and fails with `InvalidInput` if a record misses either value.
use crate::{Error, Result, SampleView};
use crate::common::utils;


/// Returns `n log2(n) - Σ_c n_c log2(n_c)`, i.e., `n` times the entropy
/// of the class counts `counts` whose sum is `n`.
#[inline]
fn weighted_entropy(counts: &[f64]) -> f64 {
    let n = counts.iter().sum::<f64>();
    let sum = counts.iter()
        .map(|&c| c * utils::log2(c))
        .sum::<f64>();
    n * utils::log2(n) - sum
}


/// The entropy of the class counts `counts`.
/// Returns `0` for an all-zero vector.
#[inline]
pub(crate) fn entropy_of_counts(counts: &[f64]) -> f64 {
    let n = counts.iter().sum::<f64>();
    if utils::eq(n, 0f64) {
        return 0f64;
    }
    (weighted_entropy(counts) / n).max(0f64)
}


/// The class counts of each partition of `view` by attribute `j`.
/// The `v`-th row holds the counts of the records whose `j`-th value is `v`.
pub(crate) fn contingency(view: &SampleView, j: usize)
    -> Result<Vec<Vec<f64>>>
{
    let sample = view.sample();
    let class = sample.class_attribute();
    let class_index = sample.class_index();
    let attribute = sample.attributes()
        .get(j)
        .ok_or_else(|| {
            Error::invalid(format!("attribute index {j} is out of range"))
        })?;

    if !class.is_nominal() || !attribute.is_nominal() {
        let msg = format!(
            "the split criteria need nominal attributes, \
             but `{}` or `{}` is numeric",
            attribute.name(),
            class.name()
        );
        return Err(Error::invalid(msg));
    }

    let mut table = vec![vec![0f64; class.n_values()]; attribute.n_values()];
    for (&row, instance) in view.rows().iter().zip(view.iter()) {
        let v = attribute.code_of(instance.value(j));
        let k = class.code_of(instance.value(class_index));
        match (v, k) {
            (Some(v), Some(k)) => { table[v][k] += 1f64; },
            _ => {
                let msg = format!(
                    "record {row} misses the value of `{}` or `{}`",
                    attribute.name(),
                    class.name()
                );
                return Err(Error::invalid(msg));
            },
        }
    }
    Ok(table)
}


/// The summary of a candidate split used by [`Criterion`](super::Criterion).
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SplitStats {
    pub(crate) attribute: usize,
    pub(crate) gain: f64,
    pub(crate) split_info: f64,
    pub(crate) n_values: usize,
}


impl SplitStats {
    /// Computes the information gain and the split information
    /// of attribute `j` in one pass over `view`.
    pub(crate) fn of(view: &SampleView, j: usize) -> Result<Self> {
        let table = contingency(view, j)?;
        let n_values = table.len();
        let value_counts = table.iter()
            .map(|row| row.iter().sum::<f64>())
            .collect::<Vec<_>>();

        let gain = gain_from_table(&table);
        let split_info = entropy_of_counts(&value_counts);
        let stats = Self { attribute: j, gain, split_info, n_values };
        Ok(stats)
    }
}


fn gain_from_table(table: &[Vec<f64>]) -> f64 {
    let n_classes = table.first().map(|row| row.len()).unwrap_or(0);
    let mut class_counts = vec![0f64; n_classes];
    for row in table {
        for (total, &c) in class_counts.iter_mut().zip(row) {
            *total += c;
        }
    }

    let n = class_counts.iter().sum::<f64>();
    if utils::eq(n, 0f64) {
        return 0f64;
    }

    let conditional = table.iter()
        .map(|row| weighted_entropy(row))
        .sum::<f64>()
        / n;

    (entropy_of_counts(&class_counts) - conditional).max(0f64)
}


/// The class entropy `-Σ_c p_c log2(p_c)` of `view`.
/// Classes with zero count contribute `0`.
/// Fails with `InvalidInput` on an empty view.
pub fn entropy(view: &SampleView) -> Result<f64> {
    if view.is_empty() {
        return Err(Error::invalid("the entropy of an empty view"));
    }
    let counts = view.class_counts()?;
    Ok(entropy_of_counts(&counts))
}


/// Partitions `view` into `n_values(j)` views,
/// one per value of the nominal attribute `j`.
/// See [`SampleView::split_by`].
pub fn split_by_attribute<'a>(view: &SampleView<'a>, j: usize)
    -> Result<Vec<SampleView<'a>>>
{
    view.split_by(j)
}


/// The information gain of attribute `j`:
/// `entropy(view) - Σ_v (|view_v| / |view|) entropy(view_v)`
/// over the non-empty partitions `view_v`.
/// Returns `0` for an empty view.
pub fn information_gain(view: &SampleView, j: usize) -> Result<f64> {
    let stats = SplitStats::of(view, j)?;
    Ok(stats.gain)
}


/// The split information (intrinsic value) of attribute `j`:
/// `-Σ_v (|view_v| / |view|) log2(|view_v| / |view|)`
/// over the values observed in `view`.
pub fn split_information(view: &SampleView, j: usize) -> Result<f64> {
    let stats = SplitStats::of(view, j)?;
    Ok(stats.split_info)
}


/// The gain ratio `information_gain / split_information`.
/// Returns `None` if the split information is zero,
/// i.e., all records share the same value.
pub fn gain_ratio(view: &SampleView, j: usize) -> Result<Option<f64>> {
    let stats = SplitStats::of(view, j)?;
    let ratio = if utils::eq(stats.split_info, 0f64) {
        None
    } else {
        Some(stats.gain / stats.split_info)
    };
    Ok(ratio)
}


/// The information gain divided by the number of values of attribute `j`.
pub fn gain_over_value_count(view: &SampleView, j: usize) -> Result<f64> {
    let stats = SplitStats::of(view, j)?;
    if stats.n_values == 0 {
        return Ok(0f64);
    }
    Ok(stats.gain / stats.n_values as f64)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attribute, Sample};

    // a | b | class
    // --+---+------
    // 0 | 0 |   0
    // 0 | 1 |   0
    // 1 | 0 |   1
    // 1 | 1 |   1
    fn toy() -> Sample {
        let attrs = vec![
            Attribute::nominal("a", ["0", "1"]),
            Attribute::nominal("b", ["0", "1"]),
            Attribute::nominal("class", ["0", "1"]),
        ];
        let mut sample = Sample::new(attrs, 2).unwrap();
        sample.push(vec![0.0, 0.0, 0.0]).unwrap();
        sample.push(vec![0.0, 1.0, 0.0]).unwrap();
        sample.push(vec![1.0, 0.0, 1.0]).unwrap();
        sample.push(vec![1.0, 1.0, 1.0]).unwrap();
        sample
    }

    #[test]
    fn test_entropy_01() {
        let sample = toy();
        let view = SampleView::full(&sample);
        assert!((entropy(&view).unwrap() - 1f64).abs() < 1e-12);

        let pure = SampleView::from_rows(&sample, vec![0, 1]);
        assert_eq!(entropy(&pure).unwrap(), 0f64);

        let empty = SampleView::from_rows(&sample, vec![]);
        assert!(entropy(&empty).is_err());
    }

    #[test]
    fn test_information_gain_01() {
        let sample = toy();
        let view = SampleView::full(&sample);
        assert!((information_gain(&view, 0).unwrap() - 1f64).abs() < 1e-12);
        assert!(information_gain(&view, 1).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_gain_ratio_01() {
        let sample = toy();
        let view = SampleView::full(&sample);
        assert!((split_information(&view, 0).unwrap() - 1f64).abs() < 1e-12);
        let ratio = gain_ratio(&view, 0).unwrap().unwrap();
        assert!((ratio - 1f64).abs() < 1e-12);

        // All records share `a = 1`.
        let part = SampleView::from_rows(&sample, vec![2, 3]);
        assert_eq!(gain_ratio(&part, 0).unwrap(), None);
    }

    #[test]
    fn test_gain_over_value_count_01() {
        let sample = toy();
        let view = SampleView::full(&sample);
        let score = gain_over_value_count(&view, 0).unwrap();
        assert!((score - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_entropy_of_counts_01() {
        assert_eq!(entropy_of_counts(&[0.0, 0.0]), 0f64);
        assert_eq!(entropy_of_counts(&[5.0, 0.0]), 0f64);
        let h = entropy_of_counts(&[1.0, 1.0, 1.0, 1.0]);
        assert!((h - 2f64).abs() < 1e-12);
    }
}
