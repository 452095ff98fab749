use serde::{Serialize, Deserialize};
use tracing::debug;

use crate::{
    Error,
    Result,
    Sample,
    Instance,
    Classifier,
    Regressor,
};
use crate::common::checker;

use super::knn_struct::Knn;
use super::adaptive;
use super::distance::{self, Ranges};
use super::neighbors::NeighborList;


/// The k-nearest-neighbor model.
/// This struct is the output of [`Knn`].
/// It keeps the training records and the running ranges
/// of the numeric attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnnClassifier {
    train: Sample,
    ranges: Ranges,
    config: Knn,
}


impl KnnClassifier {
    pub(super) fn new(train: Sample, config: Knn) -> Self {
        let ranges = Ranges::of(&train);
        Self { train, ranges, config }
    }


    /// Returns the training records.
    pub fn train(&self) -> &Sample {
        &self.train
    }


    /// Returns the configuration.
    pub fn config(&self) -> &Knn {
        &self.config
    }


    /// Appends a training record and extends the numeric ranges.
    /// A record whose class is missing is ignored.
    pub fn update<T: Into<Instance>>(&mut self, instance: T) -> Result<()> {
        let instance = instance.into();
        checker::check_instance(&self.train, &instance)?;
        if instance.is_missing(self.train.class_index()) {
            return Ok(());
        }
        self.ranges.update(&self.train, &instance);
        self.train.push(instance)
    }


    /// The distance between `a` and `b`
    /// under the ranges of the training records extended by `a` and `b`,
    /// i.e., the ranges a query sees in [`Classifier::distribution`].
    pub fn distance(&self, a: &Instance, b: &Instance) -> f64 {
        let ranges = self.ranges
            .extended(&self.train, a)
            .extended(&self.train, b);
        distance::distance(&self.train, &ranges, a, b)
    }


    /// Returns the neighbor list of `instance` at target length `k`.
    /// Each item is the row index of a training record.
    pub fn neighbors(&self, instance: &Instance, k: usize)
        -> Result<NeighborList<usize>>
    {
        checker::check_instance(&self.train, instance)?;
        let ranges = self.ranges.extended(&self.train, instance);
        Ok(self.find_neighbors(&ranges, instance, k, None))
    }


    /// Runs the leave-one-out selection of `k`
    /// under the ranges of the training records.
    /// Returns `1` for a model without records.
    pub fn select_k(&self) -> usize {
        adaptive::select_k(self, &self.ranges)
    }


    /// Scans the training records except `skip`.
    pub(super) fn find_neighbors(
        &self,
        ranges: &Ranges,
        instance: &Instance,
        k: usize,
        skip: Option<usize>,
    ) -> NeighborList<usize>
    {
        let mut neighbors = NeighborList::new(k);
        let records = self.train.instances().iter().enumerate();
        for (i, record) in records {
            if skip == Some(i) {
                continue;
            }
            let d = distance::distance(&self.train, ranges, instance, record);
            neighbors.offer(d, i);
        }
        neighbors
    }


    /// Number of attributes the distance is computed over.
    #[inline]
    fn n_attributes_used(&self) -> f64 {
        (self.train.n_attributes() as f64 - 1f64).max(1f64)
    }


    /// Converts the neighbor list into a distribution.
    /// For a nominal class, each class is seeded with `1 / max(1, N)`
    /// and every neighbor adds its weight to the bucket of its class.
    /// For a numeric class, the single entry is the weighted mean.
    pub(super) fn make_distribution(&self, neighbors: &NeighborList<usize>)
        -> Vec<f64>
    {
        let class_index = self.train.class_index();
        let is_nominal = self.train.class_attribute().is_nominal();
        let n_used = self.n_attributes_used();

        let mut dist;
        let mut total;
        if is_nominal {
            let n_classes = self.train.n_classes();
            let n = self.train.n_instances().max(1) as f64;
            dist = vec![1f64 / n; n_classes];
            total = n_classes as f64 / n;
        } else {
            dist = vec![0f64];
            total = 0f64;
        }

        for &(d, i) in neighbors.iter() {
            let record = &self.train[i];
            let d = (d / n_used).sqrt();
            let weight = self.config.weighting.weight(d) * record.weight();

            let y = record.value(class_index);
            if is_nominal {
                if let Some(k) = self.train.class_attribute().code_of(y) {
                    dist[k] += weight;
                }
            } else {
                dist[0] += y * weight;
            }
            total += weight;
        }

        if total > 0f64 {
            dist.iter_mut().for_each(|p| { *p /= total; });
        }
        dist
    }
}


impl Classifier for KnnClassifier {
    /// Extends the numeric ranges by `instance` (for this query only),
    /// selects `k` if adaptive, and returns the weighted distribution
    /// of the neighbors.
    fn distribution(&self, instance: &Instance) -> Result<Vec<f64>> {
        checker::check_instance(&self.train, instance)?;
        if self.train.is_empty() {
            return Err(Error::Unfit);
        }

        let ranges = self.ranges.extended(&self.train, instance);
        let k = if self.config.adaptive {
            let k = adaptive::select_k(self, &ranges);
            debug!(k, "selected k");
            k
        } else {
            self.config.k
        };

        let neighbors = self.find_neighbors(&ranges, instance, k, None);
        Ok(self.make_distribution(&neighbors))
    }
}


impl Regressor for KnnClassifier {
    fn predict_value(&self, instance: &Instance) -> Result<f64> {
        let class = self.train.class_attribute();
        if class.is_nominal() {
            let msg = format!(
                "cannot predict a value of the nominal class `{}`",
                class.name()
            );
            return Err(Error::invalid(msg));
        }
        let dist = self.distribution(instance)?;
        Ok(dist[0])
    }
}
