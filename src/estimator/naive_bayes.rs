/// Defines the Naive Bayes estimator.
pub mod nbayes;
/// Defines the classifier produced by `NaiveBayes`.
pub mod nbayes_classifier;

mod counts;


pub use nbayes::NaiveBayes;
pub use nbayes_classifier::NBayesClassifier;
