//! Exports the standard estimators and traits.
//!
pub use crate::error::{Error, Result};


pub use crate::sample::{
    Attribute,
    AttributeKind,
    Instance,
    MISSING,
    Sample,
    SampleReader,
    SampleView,
};


pub use crate::estimator::{
    // Estimator trait
    Estimator,


    // Decision tree
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    Criterion,
    LeafFitting,


    // Leaf estimators
    NaiveBayes,
    NBayesClassifier,
    Knn,
    KnnBuilder,
    KnnClassifier,
    Weighting,
    ClassFrequency,
    FrequencyClassifier,
};


pub use crate::hypothesis::{
    Classifier,
    Regressor,
};


pub use crate::research::{
    CrossValidation,
    Evaluation,
};
