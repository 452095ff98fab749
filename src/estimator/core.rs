//! The core library for the estimators.
//!
//! An estimator is a factory of classifiers:
//! given a training sample, it returns a fitted model
//! that answers class-probability queries for novel records.
//! The decision tree delegates its leaves to an estimator,
//! so every estimator in this crate can be plugged into
//! [`DecisionTree`](crate::DecisionTree).
use crate::{Result, Sample, Classifier};


/// A trait that defines the behavor of estimators.
/// You only need to implement `name` and `fit`.
pub trait Estimator {
    /// The model type `fit` returns.
    type Model: Classifier;


    /// Returns the name of the estimator.
    fn name(&self) -> &str;


    /// Returns the parameters of the estimator, if any.
    /// Each pair is the parameter name and its value.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Fits a model on `sample`.
    /// Fails with [`Error::Unbuildable`](crate::Error::Unbuildable)
    /// if `sample` has no record, and with
    /// [`Error::InvalidInput`](crate::Error::InvalidInput)
    /// if `sample` violates the preconditions of the estimator.
    fn fit(&self, sample: &Sample) -> Result<Self::Model>;
}
