//! The mixed nominal/numeric distance.
use serde::{Serialize, Deserialize};

use crate::{Sample, Instance};
use crate::common::utils;


/// Running per-attribute `[min, max]` of the numeric attributes.
/// The entry is `None` for a nominal attribute
/// or for a numeric attribute without any observed value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Ranges {
    bounds: Vec<Option<(f64, f64)>>,
}


impl Ranges {
    /// Computes the ranges over the records of `sample`.
    pub(crate) fn of(sample: &Sample) -> Self {
        let mut ranges = Self { bounds: vec![None; sample.n_attributes()] };
        for instance in sample.instances() {
            ranges.update(sample, instance);
        }
        ranges
    }


    /// Extends the ranges by the numeric values of `instance`.
    pub(crate) fn update(&mut self, header: &Sample, instance: &Instance) {
        let attrs = header.attributes().iter();
        for ((j, attr), bound) in attrs.enumerate().zip(&mut self.bounds) {
            let x = instance.value(j);
            if !attr.is_numeric() || x.is_nan() {
                continue;
            }
            *bound = match *bound {
                None => Some((x, x)),
                Some((min, max)) => Some((min.min(x), max.max(x))),
            };
        }
    }


    /// Returns a copy of the ranges extended by `instance`.
    pub(crate) fn extended(&self, header: &Sample, instance: &Instance)
        -> Self
    {
        let mut ranges = self.clone();
        ranges.update(header, instance);
        ranges
    }


    /// Maps `x` into `[0, 1]` by the range of the `j`-th attribute.
    /// Returns `0` if the range is unknown or degenerate.
    #[inline]
    pub(crate) fn norm(&self, j: usize, x: f64) -> f64 {
        match self.bounds.get(j).copied().flatten() {
            Some((min, max)) if !utils::eq(min, max) => {
                (x - min) / (max - min)
            },
            _ => 0f64,
        }
    }
}


/// The distance between `a` and `b` over the non-class attributes.
///
/// A nominal attribute contributes `0` if both values are present
/// and equal, `1` otherwise.
/// A numeric attribute contributes `(norm(a) - norm(b))^2`;
/// `1` if both values are missing;
/// if only one is present with normalized value `x`,
/// it contributes `(1 - x)^2` for `x < 0.5` and `x^2` otherwise.
pub(crate) fn distance(
    header: &Sample,
    ranges: &Ranges,
    a: &Instance,
    b: &Instance,
) -> f64
{
    let class_index = header.class_index();
    header.attributes()
        .iter()
        .enumerate()
        .filter(|(j, _)| *j != class_index)
        .map(|(j, attr)| {
            let (x, y) = (a.value(j), b.value(j));
            if attr.is_nominal() {
                if x.is_nan() || y.is_nan() || x != y { 1f64 } else { 0f64 }
            } else {
                let diff = match (x.is_nan(), y.is_nan()) {
                    (true, true) => 1f64,
                    (false, false) => ranges.norm(j, x) - ranges.norm(j, y),
                    (false, true) | (true, false) => {
                        let present = if x.is_nan() { y } else { x };
                        let diff = ranges.norm(j, present);
                        if diff < 0.5 { 1f64 - diff } else { diff }
                    },
                };
                diff * diff
            }
        })
        .sum::<f64>()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attribute, MISSING};

    fn header() -> Sample {
        let attrs = vec![
            Attribute::numeric("x"),
            Attribute::nominal("c", ["p", "q"]),
            Attribute::nominal("class", ["0", "1"]),
        ];
        let mut sample = Sample::new(attrs, 2).unwrap();
        sample.push(vec![0.0, 0.0, 0.0]).unwrap();
        sample.push(vec![10.0, 1.0, 1.0]).unwrap();
        sample
    }

    #[test]
    fn test_norm_01() {
        let sample = header();
        let ranges = Ranges::of(&sample);
        assert_eq!(ranges.norm(0, 5.0), 0.5);
        // nominal attribute has no range.
        assert_eq!(ranges.norm(1, 1.0), 0.0);

        let empty = Ranges::of(&sample.empty_like());
        assert_eq!(empty.norm(0, 5.0), 0.0);
    }

    #[test]
    fn test_distance_01() {
        let sample = header();
        let ranges = Ranges::of(&sample);
        let a = Instance::new(vec![2.0, 0.0, 0.0]);
        let b = Instance::new(vec![7.0, 1.0, 1.0]);
        // (0.2 - 0.7)^2 + 1
        let d = distance(&sample, &ranges, &a, &b);
        assert!((d - 1.25).abs() < 1e-12);
        assert_eq!(distance(&sample, &ranges, &a, &a), 0.0);
    }

    #[test]
    fn test_distance_02() {
        let sample = header();
        let ranges = Ranges::of(&sample);
        let a = Instance::new(vec![2.0, MISSING, 0.0]);
        let b = Instance::new(vec![MISSING, MISSING, 1.0]);
        // numeric: norm(2) = 0.2 < 0.5 -> (1 - 0.2)^2
        // nominal: both missing -> 1
        let d = distance(&sample, &ranges, &a, &b);
        assert!((d - 1.64).abs() < 1e-12);

        let c = Instance::new(vec![MISSING, 0.0, 0.0]);
        // both numeric values missing -> 1, nominal mismatch -> 1
        assert_eq!(distance(&sample, &ranges, &b, &c), 2.0);
    }

    #[test]
    fn test_distance_03() {
        let sample = header();
        let ranges = Ranges::of(&sample);
        let missing = Instance::new(vec![MISSING, 0.0, 0.0]);
        // numeric: norm(9) = 0.9 >= 0.5 -> 0.9^2
        let a = Instance::new(vec![9.0, 0.0, 0.0]);
        let d = distance(&sample, &ranges, &a, &missing);
        assert!((d - 0.81).abs() < 1e-12);
        assert_eq!(d, distance(&sample, &ranges, &missing, &a));

        // the boundary value 0.5 falls on the same side.
        let b = Instance::new(vec![5.0, 0.0, 0.0]);
        let d = distance(&sample, &ranges, &b, &missing);
        assert!((d - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_ranges_extended_01() {
        let sample = header();
        let ranges = Ranges::of(&sample);
        let query = Instance::new(vec![20.0, 0.0, MISSING]);
        let wide = ranges.extended(&sample, &query);
        assert_eq!(wide.norm(0, 10.0), 0.5);
        assert_eq!(ranges.norm(0, 10.0), 1.0);
    }
}
