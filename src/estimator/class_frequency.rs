//! The class-frequency estimator.
//! The model ignores the attributes of a query and returns
//! the class distribution of its training records.
use serde::{Serialize, Deserialize};

use crate::{Result, Sample, Instance, Classifier, Estimator};
use crate::common::{checker, utils};


/// A factory that produces a [`FrequencyClassifier`].
///
/// Without smoothing, the `k`-th entry of the distribution is
/// `n_k / n`; with the Laplace smoothing, it is `(n_k + 1) / (n + C)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassFrequency {
    laplace: bool,
}


impl ClassFrequency {
    /// Construct a new instance of [`ClassFrequency`]
    /// without smoothing.
    pub fn new() -> Self {
        Self { laplace: false }
    }


    /// Set the flag whether the counts are Laplace-smoothed or not.
    /// Default is `false`.
    pub fn laplace(mut self, flag: bool) -> Self {
        self.laplace = flag;
        self
    }
}


impl Estimator for ClassFrequency {
    type Model = FrequencyClassifier;


    fn name(&self) -> &str {
        "Class Frequency"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        Some(vec![("Laplace", format!("{}", self.laplace))])
    }


    fn fit(&self, sample: &Sample) -> Result<Self::Model> {
        let name = self.name();
        checker::check_sample(sample, name)?;
        checker::check_nominal_class(sample, name)?;

        let mut distribution = sample.class_counts();
        if self.laplace {
            distribution.iter_mut().for_each(|c| { *c += 1f64; });
        }
        utils::normalize(&mut distribution);

        let f = FrequencyClassifier {
            header: sample.empty_like(),
            distribution,
        };
        Ok(f)
    }
}


/// The classifier produced by [`ClassFrequency`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyClassifier {
    header: Sample,
    distribution: Vec<f64>,
}


impl Classifier for FrequencyClassifier {
    fn distribution(&self, instance: &Instance) -> Result<Vec<f64>> {
        checker::check_instance(&self.header, instance)?;
        Ok(self.distribution.clone())
    }
}
