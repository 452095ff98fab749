use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Result, Sample, Estimator};
use crate::common::checker;

use super::knn_classifier::KnnClassifier;


/// The conversion from a neighbor's distance `d` to its vote weight.
/// `d` is the distance normalized by the number of attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weighting {
    /// Every neighbor weighs `1`.
    Uniform,
    /// `1 / (d + 0.001)`.
    Inverse,
    /// `1 - d`.
    Similarity,
}


impl Weighting {
    /// Converts the normalized distance `d` to a weight.
    #[inline]
    pub fn weight(&self, d: f64) -> f64 {
        match self {
            Self::Uniform => 1f64,
            Self::Inverse => 1f64 / (d + 0.001),
            Self::Similarity => 1f64 - d,
        }
    }
}


impl fmt::Display for Weighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uniform => "Uniform",
            Self::Inverse => "Inverse distance",
            Self::Similarity => "Similarity",
        };
        write!(f, "{name}")
    }
}


/// The k-nearest-neighbor estimator over nominal and numeric attributes.
///
/// For a query, the estimator scans the training records,
/// keeps the `k` nearest ones (plus the ones tied with the `k`-th),
/// and returns the distance-weighted class distribution.
/// In the adaptive mode, `k` is chosen before each query
/// by leave-one-out cross-validation over `1..=upper_bound`.
///
/// [`Knn`] is constructed by [`KnnBuilder`](super::KnnBuilder).
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
/// let knn = KnnBuilder::new().adaptive(true).build();
/// let f = knn.fit(&sample).unwrap();
/// let k = f.select_k();
/// let dist = f.distribution(&sample[0]).unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Knn {
    pub(super) k: usize,
    pub(super) adaptive: bool,
    pub(super) upper_bound: usize,
    pub(super) weighting: Weighting,
    pub(super) mean_squared: bool,
}


impl Knn {
    #[inline]
    pub(super) fn new(
        k: usize,
        adaptive: bool,
        upper_bound: usize,
        weighting: Weighting,
        mean_squared: bool,
    ) -> Self
    {
        Self { k, adaptive, upper_bound, weighting, mean_squared }
    }


    /// Returns a model with the header of `sample` and no record.
    /// Records are added by [`KnnClassifier::update`];
    /// querying the model before that fails with `Unfit`.
    pub fn empty_model(&self, sample: &Sample) -> KnnClassifier {
        KnnClassifier::new(sample.empty_like(), *self)
    }
}


impl Default for Knn {
    fn default() -> Self {
        super::KnnBuilder::new().build()
    }
}


impl Estimator for Knn {
    type Model = KnnClassifier;


    fn name(&self) -> &str {
        if self.adaptive { "Adaptive KNN" } else { "KNN" }
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let k = if self.adaptive {
            format!("1..={} (adaptive)", self.upper_bound)
        } else {
            format!("{}", self.k)
        };
        let info = Vec::from([
            ("k", k),
            ("Weighting", format!("{}", self.weighting)),
            ("Mean squared", format!("{}", self.mean_squared)),
        ]);
        Some(info)
    }


    /// Stores the records with a present class
    /// and the ranges of the numeric attributes.
    fn fit(&self, sample: &Sample) -> Result<Self::Model> {
        checker::check_sample(sample, self.name())?;
        let train = sample.without_missing_class();
        Ok(KnnClassifier::new(train, *self))
    }
}
