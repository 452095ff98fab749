use crate::{Error, Result};
use super::sample_struct::Sample;
use super::instance::Instance;


/// A borrowed subset of a [`Sample`].
/// A view holds the row indices into the underlying sample,
/// so splitting a sample never copies a record.
#[derive(Debug, Clone)]
pub struct SampleView<'a> {
    sample: &'a Sample,
    rows: Vec<usize>,
}


impl<'a> SampleView<'a> {
    /// Construct a view over all the records of `sample`.
    pub fn full(sample: &'a Sample) -> Self {
        let rows = (0..sample.n_instances()).collect();
        Self { sample, rows }
    }


    /// Construct a view over the records at `rows`.
    /// Panics if a row is out of bounds.
    pub fn from_rows(sample: &'a Sample, rows: Vec<usize>) -> Self {
        let n_instances = sample.n_instances();
        assert!(
            rows.iter().all(|&i| i < n_instances),
            "row index out of bounds: the sample has {n_instances} records"
        );
        Self { sample, rows }
    }


    /// Returns the underlying sample.
    pub fn sample(&self) -> &'a Sample {
        self.sample
    }


    /// Returns the row indices of this view.
    pub fn rows(&self) -> &[usize] {
        &self.rows[..]
    }


    /// Number of records in this view.
    pub fn len(&self) -> usize {
        self.rows.len()
    }


    /// Returns `true` if this view has no record.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }


    /// Iterates over the records of this view.
    pub fn iter(&self) -> impl Iterator<Item = &'a Instance> + '_ {
        let sample = self.sample;
        self.rows.iter().map(move |&i| &sample[i])
    }


    /// Returns the number of records of each class in this view.
    /// Fails if the class is numeric or a class value is missing.
    pub fn class_counts(&self) -> Result<Vec<f64>> {
        let class_index = self.sample.class_index();
        let class = self.sample.class_attribute();
        if !class.is_nominal() {
            let msg = format!("class `{}` is not nominal", class.name());
            return Err(Error::invalid(msg));
        }

        let mut counts = vec![0f64; class.n_values()];
        for (&row, instance) in self.rows.iter().zip(self.iter()) {
            let k = class.code_of(instance.value(class_index))
                .ok_or_else(|| {
                    Error::invalid(format!("record {row} has no valid class"))
                })?;
            counts[k] += 1f64;
        }
        Ok(counts)
    }


    /// Partitions this view by the values of the nominal attribute `j`.
    /// The `v`-th view holds the records whose `j`-th value is `v`,
    /// in their original order.
    /// Fails if the attribute is numeric or a record misses its value.
    pub fn split_by(&self, j: usize) -> Result<Vec<SampleView<'a>>> {
        let attribute = self.sample.attributes()
            .get(j)
            .ok_or_else(|| {
                Error::invalid(format!("attribute index {j} is out of range"))
            })?;

        if !attribute.is_nominal() {
            let msg = format!(
                "cannot split on the numeric attribute `{}`",
                attribute.name()
            );
            return Err(Error::invalid(msg));
        }

        let mut parts = vec![Vec::new(); attribute.n_values()];
        for &row in self.rows.iter() {
            let value = self.sample[row].value(j);
            let code = attribute.code_of(value)
                .ok_or_else(|| {
                    let msg = format!(
                        "record {row} has no valid value for `{}`",
                        attribute.name()
                    );
                    Error::invalid(msg)
                })?;
            parts[code].push(row);
        }

        let views = parts.into_iter()
            .map(|rows| SampleView::from_rows(self.sample, rows))
            .collect();
        Ok(views)
    }


    /// Copies the records of this view into an owned [`Sample`].
    pub fn to_sample(&self) -> Sample {
        self.sample.subset(&self.rows)
    }
}
