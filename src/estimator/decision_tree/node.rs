//! A node struct used in the decision tree algorithm.
use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Error, Result, Sample, Instance};
use crate::common::utils;


/// A node of [`DecisionTreeClassifier`](super::DecisionTreeClassifier).
/// `M` is the model type of the leaf estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node<M> {
    /// An internal node.
    /// The `v`-th child receives the records whose value
    /// of `attribute` is `v`.
    Branch {
        /// Index of the splitting attribute.
        attribute: usize,
        /// One child per value of `attribute`.
        children: Vec<Node<M>>,
    },
    /// A leaf node.
    /// An empty leaf (no record) gives no classification.
    Leaf {
        /// The records that reached this leaf.
        records: Sample,
        /// The fitted model, if the leaf is fitted once at build time.
        model: Option<M>,
    },
}


impl<M> Node<M> {
    pub(crate) fn branch(attribute: usize, children: Vec<Node<M>>) -> Self {
        Self::Branch { attribute, children }
    }


    pub(crate) fn leaf(records: Sample, model: Option<M>) -> Self {
        Self::Leaf { records, model }
    }


    /// Returns `true` if this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }


    /// The depth of the subtree rooted at this node.
    /// A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                children.iter()
                    .map(|child| child.depth())
                    .max()
                    .unwrap_or(0) + 1
            },
            Self::Leaf { .. } => 0,
        }
    }


    /// The number of leaves of the subtree rooted at this node.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Branch { children, .. } => {
                children.iter().map(|child| child.n_leaves()).sum()
            },
            Self::Leaf { .. } => 1,
        }
    }


    /// Routes `instance` down to a leaf and returns the leaf's
    /// records and model.
    pub(crate) fn leaf_for(&self, header: &Sample, instance: &Instance)
        -> Result<(&Sample, Option<&M>)>
    {
        match self {
            Self::Branch { attribute, children } => {
                let attr = header.attribute(*attribute);
                let child = attr.code_of(instance.value(*attribute))
                    .and_then(|v| children.get(v))
                    .ok_or_else(|| {
                        let msg = format!(
                            "the instance has no valid value for \
                             the split attribute `{}`",
                            attr.name()
                        );
                        Error::invalid(msg)
                    })?;
                child.leaf_for(header, instance)
            },
            Self::Leaf { records, model } => Ok((records, model.as_ref())),
        }
    }


    /// The label printed at a leaf: the majority class of its records.
    fn label<'a>(&self, header: &'a Sample) -> Option<&'a str> {
        match self {
            Self::Leaf { records, .. } => {
                let counts = records.class_counts();
                utils::max_index(&counts)
                    .and_then(|k| header.class_attribute().value_name(k))
            },
            Self::Branch { .. } => None,
        }
    }


    pub(crate) fn fmt_tree(
        &self,
        header: &Sample,
        level: usize,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result
    {
        match self {
            Self::Branch { attribute, children } => {
                let attr = header.attribute(*attribute);
                for (v, child) in children.iter().enumerate() {
                    writeln!(f)?;
                    for _ in 0..level {
                        write!(f, "|  ")?;
                    }
                    let value = attr.value_name(v).unwrap_or("?");
                    write!(f, "{} = {value}", attr.name())?;
                    child.fmt_tree(header, level + 1, f)?;
                }
                Ok(())
            },
            Self::Leaf { .. } => {
                let label = self.label(header).unwrap_or("null");
                write!(f, ": {label}")
            },
        }
    }


    pub(crate) fn to_dot_info(&self, header: &Sample, id: usize)
        -> (Vec<String>, usize)
    {
        match self {
            Self::Branch { attribute, children } => {
                let attr = header.attribute(*attribute);
                let mut info = vec![format!(
                    "\tnode_{id} [ label = \"{} ?\" ];\n",
                    attr.name()
                )];

                let mut next_id = id + 1;
                for (v, child) in children.iter().enumerate() {
                    let child_id = next_id;
                    let (mut child_info, return_id) = child.to_dot_info(
                        header, child_id
                    );
                    info.append(&mut child_info);

                    let value = attr.value_name(v).unwrap_or("?");
                    let edge = format!(
                        "\tnode_{id} -- node_{child_id} [ label = \"{value}\" ];\n",
                    );
                    info.push(edge);
                    next_id = return_id;
                }

                (info, next_id)
            },
            Self::Leaf { records, .. } => {
                let label = self.label(header).unwrap_or("null");
                let n_records = records.n_instances();
                let info = format!(
                    "\tnode_{id} [ label = \"{label} ({n_records})\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}
