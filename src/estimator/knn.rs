/// Defines the KNN estimator.
pub mod knn_struct;
/// Defines the model produced by `Knn`.
pub mod knn_classifier;
/// Defines the sorted neighbor list.
pub mod neighbors;

pub(crate) mod builder;

mod distance;
mod adaptive;


pub use builder::{
    KnnBuilder,
    DEFAULT_K,
    DEFAULT_UPPER_BOUND,
    DEFAULT_WEIGHTING,
};
pub use knn_struct::{Knn, Weighting};
pub use knn_classifier::KnnClassifier;
pub use neighbors::NeighborList;
