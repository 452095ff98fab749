//! The files in `estimator/` directory defines
//! `Estimator` trait and estimators.

/// Provides Estimator trait.
pub mod core;

/// Defines Decision Tree.
pub mod decision_tree;

/// Defines Naive Bayes.
pub mod naive_bayes;

/// Defines KNN.
pub mod knn;

/// Defines the class-frequency estimator.
pub mod class_frequency;


pub use self::core::Estimator;

pub use self::decision_tree::{
    Criterion,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    LeafFitting,
    Node,
};

pub use self::naive_bayes::{
    NaiveBayes,
    NBayesClassifier,
};

pub use self::knn::{
    Knn,
    KnnBuilder,
    KnnClassifier,
    NeighborList,
    Weighting,
};

pub use self::class_frequency::{
    ClassFrequency,
    FrequencyClassifier,
};
