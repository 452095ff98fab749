//! This directory provides some features for experiments:
//! cross validation and the evaluation of a classifier.

/// Provides the cross validation iterator.
pub mod cross_validation;

/// Provides the classification statistics.
pub mod evaluation;


pub use cross_validation::CrossValidation;
pub use evaluation::Evaluation;
