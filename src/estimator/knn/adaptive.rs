//! Leave-one-out selection of `k`.
use rayon::prelude::*;

use crate::common::utils;

use super::distance::Ranges;
use super::knn_classifier::KnnClassifier;


/// The errors of `k = 1..=upper` on one held-out record.
/// `absolute[k - 1]` is the classification error (nominal class)
/// or the absolute error (numeric class),
/// `squared[k - 1]` is the squared error (numeric class).
struct Errors {
    absolute: Vec<f64>,
    squared: Vec<f64>,
}


/// Selects `k` in `1..=upper_bound` minimizing the accumulated
/// leave-one-out error over the training records.
/// Ties are broken by the smallest `k`.
///
/// The held-out records are evaluated in parallel,
/// and the errors are summed in the record order.
pub(super) fn select_k(model: &KnnClassifier, ranges: &Ranges) -> usize {
    let upper = model.config().upper_bound.max(1);
    let n_instances = model.train().n_instances();

    let errors = (0..n_instances).into_par_iter()
        .map(|i| held_out_errors(model, ranges, i, upper))
        .collect::<Vec<_>>();

    let mut absolute = vec![0f64; upper];
    let mut squared = vec![0f64; upper];
    for e in errors {
        for j in 0..upper {
            absolute[j] += e.absolute[j];
            squared[j] += e.squared[j];
        }
    }

    let numeric = model.train().class_attribute().is_numeric();
    let stats = if numeric && model.config().mean_squared {
        squared
    } else {
        absolute
    };

    let mut best = 0;
    for (j, &err) in stats.iter().enumerate() {
        if err < stats[best] {
            best = j;
        }
    }
    best + 1
}


/// Builds the neighbor list of record `i` at `k = upper`
/// without the record itself,
/// then shrinks it one `k` at a time.
fn held_out_errors(
    model: &KnnClassifier,
    ranges: &Ranges,
    i: usize,
    upper: usize,
) -> Errors
{
    let train = model.train();
    let instance = &train[i];
    let y = instance.value(train.class_index());
    let numeric = train.class_attribute().is_numeric();

    let mut absolute = vec![0f64; upper];
    let mut squared = vec![0f64; upper];

    let mut neighbors = model.find_neighbors(ranges, instance, upper, Some(i));
    for j in (0..upper).rev() {
        let dist = model.make_distribution(&neighbors);
        if numeric {
            let err = dist[0] - y;
            absolute[j] = err.abs();
            squared[j] = err * err;
        } else {
            let predicted = utils::max_index(&dist).map(|k| k as f64);
            if predicted != Some(y) {
                absolute[j] = 1f64;
            }
        }

        if j >= 1 {
            neighbors.prune_to_k(j);
        }
    }

    Errors { absolute, squared }
}
