use serde::{Serialize, Deserialize};
use std::fmt;


/// The kind of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeKind {
    /// A categorical attribute.
    /// A value of this attribute is stored as the index (code)
    /// of the corresponding entry of the vector.
    Nominal(Vec<String>),
    /// A real-valued attribute.
    Numeric,
}


/// A column header of [`Sample`](crate::Sample).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    kind: AttributeKind,
}


impl Attribute {
    /// Construct a nominal attribute with the given value names.
    /// The `i`-th value name is encoded as `i as f64`.
    pub fn nominal<S, T, I>(name: S, values: I) -> Self
        where S: ToString,
              T: ToString,
              I: IntoIterator<Item = T>,
    {
        let values = values.into_iter()
            .map(|v| v.to_string())
            .collect();
        Self { name: name.to_string(), kind: AttributeKind::Nominal(values) }
    }


    /// Construct a numeric attribute.
    pub fn numeric<S: ToString>(name: S) -> Self {
        Self { name: name.to_string(), kind: AttributeKind::Numeric }
    }


    /// Returns the attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the kind of this attribute.
    pub fn kind(&self) -> &AttributeKind {
        &self.kind
    }


    /// Returns `true` if this attribute is nominal.
    pub fn is_nominal(&self) -> bool {
        matches!(self.kind, AttributeKind::Nominal(_))
    }


    /// Returns `true` if this attribute is numeric.
    pub fn is_numeric(&self) -> bool {
        !self.is_nominal()
    }


    /// Number of distinct values.
    /// Returns `0` for a numeric attribute.
    pub fn n_values(&self) -> usize {
        match &self.kind {
            AttributeKind::Nominal(values) => values.len(),
            AttributeKind::Numeric => 0,
        }
    }


    /// Returns the name of the value encoded as `code`.
    pub fn value_name(&self, code: usize) -> Option<&str> {
        match &self.kind {
            AttributeKind::Nominal(values) => {
                values.get(code).map(|v| v.as_str())
            },
            AttributeKind::Numeric => None,
        }
    }


    /// Returns the code of the value named `value`.
    pub fn index_of(&self, value: &str) -> Option<usize> {
        match &self.kind {
            AttributeKind::Nominal(values) => {
                values.iter().position(|v| v == value)
            },
            AttributeKind::Numeric => None,
        }
    }


    /// Converts a stored value into a valid nominal code.
    /// Returns `None` for a missing value, a non-integral value,
    /// an out-of-range value, or a numeric attribute.
    #[inline]
    pub(crate) fn code_of(&self, value: f64) -> Option<usize> {
        let n_values = self.n_values();
        if value.is_nan() || value < 0f64 || value.fract() != 0f64 {
            return None;
        }
        let code = value as usize;
        (code < n_values).then_some(code)
    }


    /// Returns the code of `value`,
    /// appending it to the value list if it has not been seen yet.
    pub(crate) fn code_or_push(&mut self, value: &str) -> Option<usize> {
        match &mut self.kind {
            AttributeKind::Nominal(values) => {
                let code = match values.iter().position(|v| v == value) {
                    Some(code) => code,
                    None => {
                        values.push(value.to_string());
                        values.len() - 1
                    },
                };
                Some(code)
            },
            AttributeKind::Numeric => None,
        }
    }
}


impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            AttributeKind::Nominal(values) => {
                write!(f, "{} {{{}}}", self.name, values.join(", "))
            },
            AttributeKind::Numeric => write!(f, "{} numeric", self.name),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_01() {
        let attr = Attribute::nominal("outlook", ["sunny", "overcast", "rainy"]);
        assert!(attr.is_nominal());
        assert_eq!(attr.n_values(), 3);
        assert_eq!(attr.value_name(1), Some("overcast"));
        assert_eq!(attr.index_of("rainy"), Some(2));
        assert_eq!(attr.index_of("snowy"), None);
        assert_eq!(attr.to_string(), "outlook {sunny, overcast, rainy}");
    }

    #[test]
    fn test_code_of_01() {
        let attr = Attribute::nominal("a", ["x", "y"]);
        assert_eq!(attr.code_of(1.0), Some(1));
        assert_eq!(attr.code_of(2.0), None);
        assert_eq!(attr.code_of(0.5), None);
        assert_eq!(attr.code_of(f64::NAN), None);

        let num = Attribute::numeric("b");
        assert_eq!(num.code_of(0.0), None);
        assert_eq!(num.n_values(), 0);
    }

    #[test]
    fn test_code_or_push_01() {
        let mut attr = Attribute::nominal("a", Vec::<String>::new());
        assert_eq!(attr.code_or_push("x"), Some(0));
        assert_eq!(attr.code_or_push("y"), Some(1));
        assert_eq!(attr.code_or_push("x"), Some(0));
        assert_eq!(attr.n_values(), 2);
    }
}
