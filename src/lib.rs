#![warn(missing_docs)]

//!
//! A crate that provides ID3 decision trees over nominal attributes
//! whose leaves are delegated to probability estimators,
//! and an adaptive k-nearest-neighbor estimator.
//!
//! - Decision tree
//!     `DecisionTree` recursively splits a sample by the attribute
//!     of the best score
//!     (information gain, gain over value count, or gain ratio).
//!     A node where no attribute has positive information gain
//!     becomes a leaf, and the classification at the leaf is delegated
//!     to an estimator fitted on the records that reached it.
//!
//! - Estimators
//!     `NaiveBayes` (Laplace-smoothed counts),
//!     `Knn` (distance-weighted nearest neighbors over nominal
//!     and numeric attributes, with `k` optionally chosen per query
//!     by leave-one-out cross-validation),
//!     and `ClassFrequency`.
//!     Every estimator implements `Estimator`,
//!     so every estimator can be used at the leaves of a tree.
//!
//! # Example
//! ```no_run
//! use minitrees::prelude::*;
//!
//! let sample = SampleReader::new()
//!     .file("/path/to/data/file.csv")
//!     .has_header(true)
//!     .class_column("class")
//!     .read()
//!     .unwrap();
//!
//! let tree = DecisionTreeBuilder::new(NaiveBayes::new())
//!     .criterion(Criterion::GainRatio)
//!     .build();
//! let f = tree.fit(&sample).unwrap();
//! println!("{f}");
//!
//! let eval = Evaluation::of(&f, &sample).unwrap();
//! println!("{eval}");
//! ```

/// Error types.
pub mod error;

/// Defines some common functions used in this library.
pub mod common;

/// Defines the sample, the records and the readers.
pub mod sample;

/// Defines the `Classifier` and `Regressor` traits.
pub mod hypothesis;

/// Defines the `Estimator` trait and the estimators.
pub mod estimator;

/// Cross validation and evaluation.
pub mod research;

/// Exports the standard estimators and traits.
pub mod prelude;


pub use error::{Error, Result};

pub use sample::{
    Attribute,
    AttributeKind,
    Instance,
    MISSING,
    Sample,
    SampleReader,
    SampleView,
};

pub use hypothesis::{
    Classifier,
    Regressor,
};

pub use estimator::{
    Estimator,

    // Decision tree
    Criterion,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    LeafFitting,
    Node,

    // Naive Bayes
    NaiveBayes,
    NBayesClassifier,

    // KNN
    Knn,
    KnnBuilder,
    KnnClassifier,
    NeighborList,
    Weighting,

    // Class frequency
    ClassFrequency,
    FrequencyClassifier,
};

pub use estimator::decision_tree::measure;

pub use research::{
    CrossValidation,
    Evaluation,
};
