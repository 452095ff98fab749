//! Defines the decision tree classifier.
use serde::{Serialize, Deserialize};
use serde::de::DeserializeOwned;
use tracing::trace;

use std::fmt;
use std::path::Path;
use std::fs::File;
use std::io::{BufReader, BufWriter, prelude::*};

use crate::{Result, Sample, Instance, Classifier, Estimator};
use crate::common::checker;
use super::dtree::LeafFitting;
use super::node::Node;


/// Decision tree classifier.
/// This struct is the output of [`DecisionTree`](super::DecisionTree).
/// It keeps the header of the training sample,
/// the tree, and the leaf estimator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "E: Serialize, E::Model: Serialize",
    deserialize = "E: DeserializeOwned, E::Model: DeserializeOwned"
))]
pub struct DecisionTreeClassifier<E: Estimator> {
    header: Sample,
    root: Node<E::Model>,
    estimator: E,
    fitting: LeafFitting,
}


impl<E: Estimator> DecisionTreeClassifier<E> {
    #[inline]
    pub(super) fn new(
        header: Sample,
        root: Node<E::Model>,
        estimator: E,
        fitting: LeafFitting,
    ) -> Self
    {
        Self { header, root, estimator, fitting }
    }


    /// Returns the root node.
    pub fn root(&self) -> &Node<E::Model> {
        &self.root
    }


    /// Returns the header (attributes and class index)
    /// of the training sample.
    pub fn header(&self) -> &Sample {
        &self.header
    }


    /// The depth of the tree. A single leaf has depth `0`.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// The number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Write the current decision tree to dot file.
    #[inline]
    pub fn to_dot_file<P>(&self, path: P) -> Result<()>
        where P: AsRef<Path>
    {
        let mut f = BufWriter::new(File::create(path)?);
        f.write_all(b"graph DecisionTree {\n")?;

        let info = self.root.to_dot_info(&self.header, 0).0;
        for row in info {
            f.write_all(row.as_bytes())?;
        }

        f.write_all(b"}\n")?;
        f.flush()?;

        Ok(())
    }
}


impl<E> DecisionTreeClassifier<E>
    where E: Estimator + Serialize,
          E::Model: Serialize,
{
    /// Serializes the classifier into a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }


    /// Writes the classifier to `path` as JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let f = BufWriter::new(File::create(path)?);
        serde_json::to_writer(f, self)?;
        Ok(())
    }
}


impl<E> DecisionTreeClassifier<E>
    where E: Estimator + DeserializeOwned,
          E::Model: DeserializeOwned,
{
    /// Deserializes a classifier from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }


    /// Reads a classifier written by [`Self::save_json`].
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(f)?)
    }
}


impl<E: Estimator> Classifier for DecisionTreeClassifier<E> {
    /// Routes `instance` to a leaf and returns the leaf's distribution.
    /// An empty leaf returns the all-zero vector.
    fn distribution(&self, instance: &Instance) -> Result<Vec<f64>> {
        checker::check_instance(&self.header, instance)?;
        let (records, model) = self.root.leaf_for(&self.header, instance)?;

        if records.is_empty() {
            return Ok(vec![0f64; self.header.n_classes()]);
        }

        match model {
            Some(model) => model.distribution(instance),
            None => {
                trace!(n_records = records.n_instances(), "refit leaf");
                self.estimator.fit(records)?.distribution(instance)
            },
        }
    }
}


impl<E: Estimator> fmt::Display for DecisionTreeClassifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id3\n\n")?;
        self.root.fmt_tree(&self.header, 0, f)
    }
}
