use crate::{Result, Sample, Instance};
use crate::common::utils;


/// A trait that defines the behavor of classifier.
/// You only need to implement `distribution` method.
pub trait Classifier {
    /// Computes the class-probability distribution of `instance`.
    /// For a nominal class, the `k`-th entry is the probability of
    /// the `k`-th class value and the entries sum up to `1`,
    /// except for the all-zero vector that means "no classification".
    /// For a numeric class, the vector has a single entry,
    /// the predicted value.
    fn distribution(&self, instance: &Instance) -> Result<Vec<f64>>;


    /// Predicts the class code of `instance`.
    /// Returns `None` if the classifier gives no classification.
    fn predict(&self, instance: &Instance) -> Result<Option<usize>> {
        let dist = self.distribution(instance)?;
        Ok(utils::max_index(&dist))
    }


    /// Computes the distributions of all records in `sample`.
    fn distribution_all(&self, sample: &Sample) -> Result<Vec<Vec<f64>>> {
        sample.instances()
            .iter()
            .map(|instance| self.distribution(instance))
            .collect()
    }


    /// Predicts the class codes of all records in `sample`.
    fn predict_all(&self, sample: &Sample) -> Result<Vec<Option<usize>>> {
        sample.instances()
            .iter()
            .map(|instance| self.predict(instance))
            .collect()
    }
}


/// A trait that defines the behavor of regressor.
/// You only need to implement `predict_value` method.
pub trait Regressor {
    /// Predicts the target value of `instance`.
    fn predict_value(&self, instance: &Instance) -> Result<f64>;


    /// Predicts the target values of all records in `sample`.
    fn predict_value_all(&self, sample: &Sample) -> Result<Vec<f64>> {
        sample.instances()
            .iter()
            .map(|instance| self.predict_value(instance))
            .collect()
    }
}
