use polars::prelude::*;
use serde::{Serialize, Deserialize};

use std::ops::{Index, Range};

use crate::{Error, Result};
use crate::common::checker;
use super::attribute::Attribute;
use super::instance::{Instance, MISSING};


/// Struct `Sample` holds the header (attributes and the class index)
/// and the records of a data set.
/// Every record pushed into a sample satisfies the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    attributes: Vec<Attribute>,
    class_index: usize,
    instances: Vec<Instance>,
}


impl Sample {
    /// Construct an empty sample with the given header.
    /// `class_index` must point to one of `attributes`.
    pub fn new(attributes: Vec<Attribute>, class_index: usize)
        -> Result<Self>
    {
        if class_index >= attributes.len() {
            let msg = format!(
                "class index {class_index} is out of range \
                 ({} attributes)",
                attributes.len()
            );
            return Err(Error::invalid(msg));
        }
        let sample = Self { attributes, class_index, instances: Vec::new() };
        Ok(sample)
    }


    /// Convert `polars::DataFrame` into `Sample`.
    /// String and boolean columns become nominal attributes
    /// whose values are listed in order of first appearance,
    /// numeric columns become numeric attributes.
    /// Null entries become [`MISSING`].
    pub fn from_dataframe<S>(data: &DataFrame, class: S) -> Result<Self>
        where S: AsRef<str>
    {
        let class = class.as_ref();
        let (n_rows, _) = data.shape();

        let mut attributes = Vec::new();
        let mut columns = Vec::new();
        for series in data.get_columns() {
            let (attribute, column) = column_from_series(series)?;
            attributes.push(attribute);
            columns.push(column);
        }

        let class_index = attributes.iter()
            .position(|attr| attr.name() == class)
            .ok_or_else(|| {
                Error::invalid(format!("no column named `{class}`"))
            })?;

        let instances = (0..n_rows)
            .map(|i| {
                let values = columns.iter()
                    .map(|column| column[i])
                    .collect::<Vec<_>>();
                Instance::new(values)
            })
            .collect::<Vec<_>>();

        let sample = Self { attributes, class_index, instances };
        Ok(sample)
    }


    /// Append a record.
    /// The record must match the header:
    /// same length, and every present nominal value a valid code.
    pub fn push<T: Into<Instance>>(&mut self, instance: T) -> Result<()> {
        let instance = instance.into();
        checker::check_instance(self, &instance)?;
        self.instances.push(instance);
        Ok(())
    }


    /// Returns a pair of the number of records and attributes.
    /// The class attribute is counted as an attribute.
    pub fn shape(&self) -> (usize, usize) {
        (self.instances.len(), self.attributes.len())
    }


    /// Number of records.
    pub fn n_instances(&self) -> usize {
        self.instances.len()
    }


    /// Number of attributes, including the class.
    pub fn n_attributes(&self) -> usize {
        self.attributes.len()
    }


    /// Returns `true` if this sample has no record.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }


    /// Number of classes.
    /// A numeric class counts as a single "class".
    pub fn n_classes(&self) -> usize {
        let class = self.class_attribute();
        if class.is_nominal() { class.n_values() } else { 1 }
    }


    /// Index of the class attribute.
    pub fn class_index(&self) -> usize {
        self.class_index
    }


    /// Returns the class attribute.
    pub fn class_attribute(&self) -> &Attribute {
        &self.attributes[self.class_index]
    }


    /// Returns the `j`-th attribute.
    pub fn attribute(&self, j: usize) -> &Attribute {
        &self.attributes[j]
    }


    /// Returns all attributes.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes[..]
    }


    /// Returns the records.
    pub fn instances(&self) -> &[Instance] {
        &self.instances[..]
    }


    /// Returns the `i`-th record.
    pub fn instance(&self, i: usize) -> &Instance {
        &self.instances[i]
    }


    /// Returns the class value of the `i`-th record.
    pub fn class_value(&self, i: usize) -> f64 {
        self.instances[i].value(self.class_index)
    }


    /// Returns an empty sample with the same header.
    pub fn empty_like(&self) -> Self {
        Self {
            attributes: self.attributes.clone(),
            class_index: self.class_index,
            instances: Vec::new(),
        }
    }


    /// Returns a copy of the records in `range`.
    pub fn range(&self, range: Range<usize>) -> Result<Self> {
        if range.start > range.end || range.end > self.n_instances() {
            let msg = format!(
                "range {range:?} is out of bounds ({} records)",
                self.n_instances()
            );
            return Err(Error::invalid(msg));
        }
        let mut sample = self.empty_like();
        sample.instances = self.instances[range].to_vec();
        Ok(sample)
    }


    /// Returns a copy of the records at `rows`, in the given order.
    /// Panics if a row is out of bounds.
    pub fn subset(&self, rows: &[usize]) -> Self {
        let mut sample = self.empty_like();
        sample.instances = rows.iter()
            .map(|&i| self.instances[i].clone())
            .collect();
        sample
    }


    /// Returns a copy of this sample without the records
    /// whose class value is missing.
    pub fn without_missing_class(&self) -> Self {
        let mut sample = self.empty_like();
        sample.instances = self.instances.iter()
            .filter(|inst| !inst.is_missing(self.class_index))
            .cloned()
            .collect();
        sample
    }


    /// Returns the number of records of each class.
    /// Records with a missing class are not counted.
    /// Returns an empty vector for a numeric class.
    pub fn class_counts(&self) -> Vec<f64> {
        let class = self.class_attribute();
        let mut counts = vec![0f64; class.n_values()];
        self.instances.iter()
            .filter_map(|inst| class.code_of(inst.value(self.class_index)))
            .for_each(|k| { counts[k] += 1f64; });
        counts
    }


    /// Returns `true` if `other` has the same header.
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.class_index == other.class_index
            && self.attributes == other.attributes
    }
}


impl Index<usize> for Sample {
    type Output = Instance;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.instances[idx]
    }
}


fn column_from_series(series: &Series) -> Result<(Attribute, Vec<f64>)> {
    let name = series.name();
    match series.dtype() {
        DataType::Utf8 | DataType::Boolean => {
            let series = series.cast(&DataType::Utf8)?;
            let mut attribute = Attribute::nominal(name, Vec::<String>::new());
            let mut column = Vec::with_capacity(series.len());
            for value in series.utf8()?.into_iter() {
                let value = value.and_then(|v| attribute.code_or_push(v))
                    .map(|code| code as f64)
                    .unwrap_or(MISSING);
                column.push(value);
            }
            Ok((attribute, column))
        },
        dtype if dtype.is_numeric() => {
            let series = series.cast(&DataType::Float64)?;
            let column = series.f64()?
                .into_iter()
                .map(|v| v.unwrap_or(MISSING))
                .collect::<Vec<_>>();
            Ok((Attribute::numeric(name), column))
        },
        dtype => {
            let msg = format!("column `{name}` has unsupported dtype {dtype}");
            Err(Error::invalid(msg))
        },
    }
}
