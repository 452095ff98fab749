/// Defines the entropy and the split criteria.
pub mod measure;

/// Defines the decision tree estimator.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;

pub(crate) mod builder;

/// Defines the inner representations of `DecisionTreeClassifier`.
pub mod node;
mod criterion;


pub use builder::{
    DecisionTreeBuilder,
    DEFAULT_CRITERION,
    DEFAULT_LEAF_FITTING,
};
pub use dtree::{DecisionTree, LeafFitting};
pub use dtree_classifier::DecisionTreeClassifier;
pub use criterion::Criterion;
pub use node::Node;
