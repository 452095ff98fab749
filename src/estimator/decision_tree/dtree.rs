use serde::{Serialize, Deserialize};
use tracing::{debug, trace};

use std::fmt;

use crate::{Result, Sample, SampleView, Estimator};
use crate::common::{checker, utils};

use super::{
    node::Node,
    criterion::Criterion,
    dtree_classifier::DecisionTreeClassifier,
};


/// When the leaf estimator is fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeafFitting {
    /// Fit a fresh model on the leaf records at every query.
    /// The leaves keep no fitted state.
    PerQuery,
    /// Fit the model once, while growing the tree.
    Cached,
}


impl fmt::Display for LeafFitting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PerQuery => "Per query",
            Self::Cached => "Cached",
        };
        write!(f, "{name}")
    }
}


/// The ID3 decision tree algorithm over nominal attributes.
/// Given a training sample, [`DecisionTree`] recursively splits
/// the sample by the attribute of the best score
/// and returns a [`DecisionTreeClassifier`].
///
/// A node becomes a leaf when no attribute has positive
/// information gain.
/// The classification at a leaf is delegated to the estimator `E`,
/// fitted on the records that reached the leaf.
///
/// [`DecisionTree`] is constructed
/// by [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
///
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .class_column("class")
///     .read()
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new(NaiveBayes::new())
///     .criterion(Criterion::InformationGain)
///     .build();
///
/// let f = tree.fit(&sample).unwrap();
/// println!("{f}");
///
/// let predictions = f.predict_all(&sample).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree<E> {
    estimator: E,
    criterion: Criterion,
    above_average_gain: bool,
    fitting: LeafFitting,
}


impl<E> DecisionTree<E> {
    /// Initialize [`DecisionTree`].
    /// This method is called only via `DecisionTreeBuilder::build`.
    #[inline]
    pub(super) fn new(
        estimator: E,
        criterion: Criterion,
        above_average_gain: bool,
        fitting: LeafFitting,
    ) -> Self
    {
        Self { estimator, criterion, above_average_gain, fitting, }
    }


    /// Returns the leaf estimator.
    pub fn leaf_estimator(&self) -> &E {
        &self.estimator
    }
}


impl<E> DecisionTree<E>
    where E: Estimator + Clone,
{
    /// Grows the subtree for the records of `view`.
    fn grow(&self, view: &SampleView, attributes: &[usize])
        -> Result<Node<E::Model>>
    {
        if view.is_empty() {
            trace!("empty leaf");
            return Ok(Node::leaf(view.to_sample(), None));
        }

        let best = self.criterion.best_split(
            view, attributes, self.above_average_gain
        )?;

        let stats = match best {
            Some(stats) if !utils::eq(stats.gain, 0f64) => stats,
            _ => { return self.make_leaf(view); },
        };

        let parts = view.split_by(stats.attribute)?;
        debug!(
            attribute = stats.attribute,
            gain = stats.gain,
            sizes = ?parts.iter().map(|p| p.len()).collect::<Vec<_>>(),
            "branch"
        );

        let children = parts.iter()
            .map(|part| self.grow(part, attributes))
            .collect::<Result<Vec<_>>>()?;

        Ok(Node::branch(stats.attribute, children))
    }


    fn make_leaf(&self, view: &SampleView) -> Result<Node<E::Model>> {
        let records = view.to_sample();
        debug!(n_records = records.n_instances(), "leaf");

        let model = match self.fitting {
            LeafFitting::Cached => Some(self.estimator.fit(&records)?),
            LeafFitting::PerQuery => None,
        };
        Ok(Node::leaf(records, model))
    }
}


impl<E> Estimator for DecisionTree<E>
    where E: Estimator + Clone,
{
    type Model = DecisionTreeClassifier<E>;


    fn name(&self) -> &str {
        "ID3 Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Criterion", format!("{}", self.criterion)),
            ("Above-average gain", format!("{}", self.above_average_gain)),
            ("Leaf estimator", self.estimator.name().to_string()),
            ("Leaf fitting", format!("{}", self.fitting)),
        ]);
        Some(info)
    }


    /// This method computes as follows;
    /// 1. check that every attribute is nominal and
    ///    drop the records with a missing class,
    /// 2. grow the tree over a view of the remaining records.
    fn fit(&self, sample: &Sample) -> Result<Self::Model> {
        let name = self.name();
        checker::check_sample(sample, name)?;
        checker::check_nominal_only(sample, name)?;

        let sample = sample.without_missing_class();
        checker::check_no_missing(&sample, name)?;

        let class_index = sample.class_index();
        let attributes = (0..sample.n_attributes())
            .filter(|&j| j != class_index)
            .collect::<Vec<_>>();

        let view = SampleView::full(&sample);
        let root = self.grow(&view, &attributes)?;

        let f = DecisionTreeClassifier::new(
            sample.empty_like(), root, self.estimator.clone(), self.fitting
        );
        Ok(f)
    }
}


impl<E: Estimator> fmt::Display for DecisionTree<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # ID3 Decision Tree\n\n\
            - Criterion: {}\n\
            - Above-average gain: {}\n\
            - Leaf estimator: {}\n\
            - Leaf fitting: {}\n\
            ----------\
            ",
            self.criterion,
            self.above_average_gain,
            self.estimator.name(),
            self.fitting,
        )
    }
}
