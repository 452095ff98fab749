use std::fmt;

use crate::{Error, Result, Sample, Classifier};
use crate::common::utils;


/// Classification statistics of a classifier over a test sample.
/// Records with a missing class are not counted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Number of correctly classified records.
    pub n_correct: usize,
    /// Number of incorrectly classified records.
    pub n_incorrect: usize,
    /// Number of records the classifier gives no classification.
    pub n_unclassified: usize,
    /// Mean over records of the mean absolute difference between
    /// the predicted distribution and the one-hot class vector.
    pub mean_absolute_error: f64,
}


impl Evaluation {
    /// Evaluates `f` over `sample`.
    /// The class of `sample` must be nominal.
    pub fn of<F: Classifier>(f: &F, sample: &Sample) -> Result<Self> {
        let class = sample.class_attribute();
        if !class.is_nominal() {
            let msg = format!("cannot evaluate the numeric class `{}`", class.name());
            return Err(Error::invalid(msg));
        }
        let n_classes = sample.n_classes().max(1) as f64;
        let class_index = sample.class_index();

        let mut eval = Self {
            n_correct: 0,
            n_incorrect: 0,
            n_unclassified: 0,
            mean_absolute_error: 0f64,
        };
        let mut n_counted = 0usize;
        for instance in sample.instances() {
            let y = match class.code_of(instance.value(class_index)) {
                Some(y) => y,
                None => { continue; },
            };
            n_counted += 1;

            let dist = f.distribution(instance)?;
            match utils::max_index(&dist) {
                Some(k) if k == y => { eval.n_correct += 1; },
                Some(_) => { eval.n_incorrect += 1; },
                None => { eval.n_unclassified += 1; },
            }

            let error = dist.iter()
                .enumerate()
                .map(|(k, p)| if k == y { (1f64 - p).abs() } else { p.abs() })
                .sum::<f64>()
                / n_classes;
            eval.mean_absolute_error += error;
        }

        if n_counted > 0 {
            eval.mean_absolute_error /= n_counted as f64;
        }
        Ok(eval)
    }


    /// Number of evaluated records.
    pub fn n_instances(&self) -> usize {
        self.n_correct + self.n_incorrect + self.n_unclassified
    }


    /// The ratio of correctly classified records.
    /// Returns `0` if no record is evaluated.
    pub fn accuracy(&self) -> f64 {
        let n = self.n_instances();
        if n == 0 { 0f64 } else { self.n_correct as f64 / n as f64 }
    }
}


impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.n_instances().max(1) as f64;
        let pct = |count: usize| 100f64 * count as f64 / n;
        writeln!(
            f,
            "Correctly Classified Instances   {:>8}    {:>8.4} %",
            self.n_correct, pct(self.n_correct)
        )?;
        writeln!(
            f,
            "Incorrectly Classified Instances {:>8}    {:>8.4} %",
            self.n_incorrect, pct(self.n_incorrect)
        )?;
        writeln!(
            f,
            "Unclassified Instances           {:>8}    {:>8.4} %",
            self.n_unclassified, pct(self.n_unclassified)
        )?;
        writeln!(
            f,
            "Mean absolute error              {:>8.4}",
            self.mean_absolute_error
        )?;
        write!(
            f,
            "Total Number of Instances        {:>8}",
            self.n_instances()
        )
    }
}
