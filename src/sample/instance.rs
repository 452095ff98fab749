use serde::{Serialize, Deserialize};


/// The marker of a missing value.
/// Test with `f64::is_nan` (or [`Instance::is_missing`]),
/// never with `==`.
pub const MISSING: f64 = f64::NAN;


/// A single record.
/// Nominal values are stored as codes (see [`Attribute`](crate::Attribute)),
/// numeric values as they are, and missing values as [`MISSING`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    #[serde(with = "missing_as_null")]
    values: Vec<f64>,
    weight: f64,
}


impl Instance {
    /// Construct a new instance of unit weight.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, weight: 1f64 }
    }


    /// Set the weight of this instance.
    /// Default weight is `1`.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }


    /// Returns the weight of this instance.
    pub fn weight(&self) -> f64 {
        self.weight
    }


    /// Returns `true` if some value is missing.
    pub fn has_missing(&self) -> bool {
        self.values.iter().any(|v| v.is_nan())
    }


    /// Returns the `i`-th value.
    /// An out-of-range index reads as [`MISSING`].
    #[inline]
    pub fn value(&self, i: usize) -> f64 {
        self.values.get(i).copied().unwrap_or(MISSING)
    }


    /// Returns `true` if the `i`-th value is missing.
    #[inline]
    pub fn is_missing(&self, i: usize) -> bool {
        self.value(i).is_nan()
    }


    /// Returns all values.
    pub fn values(&self) -> &[f64] {
        &self.values[..]
    }


    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }


    /// Returns `true` if this instance has no value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}


impl From<Vec<f64>> for Instance {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}


// JSON has no `NaN`, so missing values are written as `null`.
mod missing_as_null {
    use serde::{Serialize, Deserialize, Serializer, Deserializer};
    use super::MISSING;

    pub(super) fn serialize<S>(values: &[f64], serializer: S)
        -> Result<S::Ok, S::Error>
        where S: Serializer,
    {
        let values = values.iter()
            .map(|v| if v.is_nan() { None } else { Some(*v) })
            .collect::<Vec<Option<f64>>>();
        values.serialize(serializer)
    }


    pub(super) fn deserialize<'de, D>(deserializer: D)
        -> Result<Vec<f64>, D::Error>
        where D: Deserializer<'de>,
    {
        let values = Vec::<Option<f64>>::deserialize(deserializer)?;
        let values = values.into_iter()
            .map(|v| v.unwrap_or(MISSING))
            .collect();
        Ok(values)
    }
}
