use crate::Estimator;
use super::{
    criterion::Criterion,
    dtree::{DecisionTree, LeafFitting},
};


/// The splitting criterion set as default.
pub const DEFAULT_CRITERION: Criterion = Criterion::InformationGain;
/// The leaf fitting policy set as default.
pub const DEFAULT_LEAF_FITTING: LeafFitting = LeafFitting::PerQuery;


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use minitrees::prelude::*;
///
/// let tree = DecisionTreeBuilder::new(NaiveBayes::new())
///     .criterion(Criterion::GainOverValueCount)
///     .above_average_gain(true)
///     .leaf_fitting(LeafFitting::Cached)
///     .build();
/// ```
#[derive(Clone)]
pub struct DecisionTreeBuilder<E> {
    estimator: E,
    criterion: Criterion,
    above_average_gain: bool,
    fitting: LeafFitting,
}


impl<E> DecisionTreeBuilder<E>
    where E: Estimator + Clone,
{
    /// Construct a new instance of [`DecisionTreeBuilder`]
    /// whose leaves are delegated to `estimator`.
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// criterion: DEFAULT_CRITERION == Criterion::InformationGain,
    /// above_average_gain: false,
    /// leaf_fitting: DEFAULT_LEAF_FITTING == LeafFitting::PerQuery,
    /// ```
    pub fn new(estimator: E) -> Self {
        Self {
            estimator,
            criterion: DEFAULT_CRITERION,
            above_average_gain: false,
            fitting: DEFAULT_LEAF_FITTING,
        }
    }


    /// Set the node splitting rule.
    /// See [`Criterion`] for other rules.
    #[inline]
    pub fn criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = criterion;
        self
    }


    /// If `flag` is `true`, only the attributes whose information gain
    /// is above the mean gain are eligible for a split;
    /// if none is eligible, the attribute of maximal gain ratio wins.
    /// Default is `false`.
    #[inline]
    pub fn above_average_gain(mut self, flag: bool) -> Self {
        self.above_average_gain = flag;
        self
    }


    /// Set when the leaf estimator is fitted.
    #[inline]
    pub fn leaf_fitting(mut self, fitting: LeafFitting) -> Self {
        self.fitting = fitting;
        self
    }


    /// Build a `DecisionTree`.
    /// This method consumes `self`.
    pub fn build(self) -> DecisionTree<E> {
        DecisionTree::new(
            self.estimator,
            self.criterion,
            self.above_average_gain,
            self.fitting,
        )
    }
}
