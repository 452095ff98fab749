use serde::{Serialize, Deserialize};

use crate::{Result, Sample, Instance, Classifier};
use crate::common::{checker, utils};

use super::counts::Counts;


/// Naive Bayes classifier over nominal attributes.
/// This struct is the output of [`NaiveBayes`](super::NaiveBayes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NBayesClassifier {
    pub(super) header: Sample,
    pub(super) counts: Counts,
}


impl NBayesClassifier {
    /// The Laplace-smoothed prior `(n_k + 1) / (n + C)` of class `k`.
    #[inline]
    pub fn prior(&self, k: usize) -> f64 {
        let n_classes = self.counts.class_counts.len() as f64;
        (self.counts.class_counts[k] + 1f64)
            / (self.counts.n_instances + n_classes)
    }


    /// The Laplace-smoothed likelihood `(n_kjv + 1) / (n_k + |V_j|)`
    /// of the `j`-th value `v` given class `k`.
    #[inline]
    pub fn likelihood(&self, k: usize, j: usize, v: usize) -> f64 {
        let n_values = self.counts.n_values[j] as f64;
        (self.counts.get(k, j, v) + 1f64)
            / (self.counts.class_counts[k] + n_values)
    }


    /// Computes the logarithmic joint probabilities
    /// `ln P(k) + Σ_j ln P(x_j | k)` of each class `k`.
    /// Missing values do not contribute.
    pub fn log_probabilities(&self, instance: &Instance) -> Result<Vec<f64>> {
        checker::check_instance(&self.header, instance)?;

        let n_classes = self.counts.class_counts.len();
        let probs = (0..n_classes)
            .map(|k| {
                let ln_prior = self.prior(k).ln();
                let ln_cond = self.header.attributes()
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| !self.counts.is_class(*j))
                    .filter_map(|(j, attr)| {
                        attr.code_of(instance.value(j)).map(|v| (j, v))
                    })
                    .map(|(j, v)| self.likelihood(k, j, v).ln())
                    .sum::<f64>();
                ln_prior + ln_cond
            })
            .collect::<Vec<_>>();
        Ok(probs)
    }
}


impl Classifier for NBayesClassifier {
    fn distribution(&self, instance: &Instance) -> Result<Vec<f64>> {
        let mut dist = self.log_probabilities(instance)?;

        let max = dist.iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        dist.iter_mut()
            .for_each(|p| { *p = (*p - max).exp(); });

        utils::normalize(&mut dist);
        Ok(dist)
    }
}
