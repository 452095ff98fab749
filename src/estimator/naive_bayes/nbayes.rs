use serde::{Serialize, Deserialize};
use tracing::trace;

use crate::{Result, Sample, Estimator};
use crate::common::checker;

use super::counts::Counts;
use super::nbayes_classifier::NBayesClassifier;


/// A factory that produces a [`NBayesClassifier`]
/// for a given training sample of nominal attributes.
///
/// The classifier predicts
/// `P(k | x) ∝ P(k) Π_j P(x_j | k)`
/// with the Laplace-smoothed estimates
/// `P(k) = (n_k + 1) / (n + C)` and
/// `P(x_j = v | k) = (n_kjv + 1) / (n_k + |V_j|)`.
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .read()
///     .unwrap();
///
/// let f = NaiveBayes::new().fit(&sample).unwrap();
/// let dist = f.distribution(&sample[0]).unwrap();
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NaiveBayes;


impl NaiveBayes {
    /// Construct a new instance of [`NaiveBayes`].
    pub fn new() -> Self {
        Self
    }
}


impl Estimator for NaiveBayes {
    type Model = NBayesClassifier;


    fn name(&self) -> &str {
        "Naive Bayes"
    }


    fn fit(&self, sample: &Sample) -> Result<Self::Model> {
        let name = self.name();
        checker::check_sample(sample, name)?;
        checker::check_nominal_only(sample, name)?;

        let counts = Counts::of(sample);
        trace!(n_instances = counts.n_instances, "naive bayes counts");

        let f = NBayesClassifier { header: sample.empty_like(), counts };
        Ok(f)
    }
}
