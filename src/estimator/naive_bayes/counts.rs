//! Occurrence counts used by the Naive Bayes classifier.
use serde::{Serialize, Deserialize};

use crate::Sample;


/// Per-class counts of every (attribute, value) pair,
/// stored in one flat table.
/// The values of attribute `j` occupy the columns
/// `offsets[j]..offsets[j] + n_values[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Counts {
    /// `class_counts[k]` is the number of records of class `k`.
    pub(crate) class_counts: Vec<f64>,
    /// `table[k][offsets[j] + v]` is the number of records of class `k`
    /// whose `j`-th value is `v`.
    table: Vec<Vec<f64>>,
    /// `None` for the class attribute.
    offsets: Vec<Option<usize>>,
    pub(crate) n_values: Vec<usize>,
    pub(crate) n_instances: f64,
}


impl Counts {
    /// Counts the records of `sample` in one pass.
    /// Records with a missing class are skipped,
    /// and so are missing attribute values.
    pub(crate) fn of(sample: &Sample) -> Self {
        let class_index = sample.class_index();
        let class = sample.class_attribute();
        let n_classes = class.n_values();

        let mut total = 0usize;
        let mut offsets = Vec::with_capacity(sample.n_attributes());
        let mut n_values = Vec::with_capacity(sample.n_attributes());
        for (j, attr) in sample.attributes().iter().enumerate() {
            if j == class_index {
                offsets.push(None);
                n_values.push(n_classes);
            } else {
                offsets.push(Some(total));
                n_values.push(attr.n_values());
                total += attr.n_values();
            }
        }

        let mut class_counts = vec![0f64; n_classes];
        let mut table = vec![vec![0f64; total]; n_classes];
        let mut n_instances = 0f64;
        for instance in sample.instances() {
            let k = match class.code_of(instance.value(class_index)) {
                Some(k) => k,
                None => { continue; },
            };
            n_instances += 1f64;
            class_counts[k] += 1f64;

            for (j, attr) in sample.attributes().iter().enumerate() {
                let offset = match offsets[j] {
                    Some(offset) => offset,
                    None => { continue; },
                };
                if let Some(v) = attr.code_of(instance.value(j)) {
                    table[k][offset + v] += 1f64;
                }
            }
        }

        Self { class_counts, table, offsets, n_values, n_instances }
    }


    /// The number of records of class `k` whose `j`-th value is `v`.
    #[inline]
    pub(crate) fn get(&self, k: usize, j: usize, v: usize) -> f64 {
        match self.offsets[j] {
            Some(offset) => self.table[k][offset + v],
            None => 0f64,
        }
    }


    /// Returns `true` if `j` is the class attribute.
    #[inline]
    pub(crate) fn is_class(&self, j: usize) -> bool {
        self.offsets[j].is_none()
    }
}
