use rayon::prelude::*;

use serde::{Serialize, Deserialize};

use std::fmt;

use crate::{Result, SampleView};
use crate::common::utils;
use super::measure::SplitStats;


/// Splitting criteria for growing decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criterion {
    /// Information gain.
    InformationGain,
    /// Information gain divided by the number of attribute values.
    /// This criterion penalizes attributes with many values.
    GainOverValueCount,
    /// Information gain divided by the split information.
    /// Attributes whose records share one value are never selected.
    GainRatio,
}


impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InformationGain => "Information gain",
            Self::GainOverValueCount => "Information gain / # of values",
            Self::GainRatio => "Gain ratio",
        };

        write!(f, "{name}")
    }
}


impl Criterion {
    /// The score of a split, or `None` if the split cannot be selected.
    #[inline]
    fn score(&self, stats: &SplitStats) -> Option<f64> {
        match self {
            Self::InformationGain => Some(stats.gain),
            Self::GainOverValueCount => {
                (stats.n_values > 0)
                    .then(|| stats.gain / stats.n_values as f64)
            },
            Self::GainRatio => {
                (!utils::eq(stats.split_info, 0f64))
                    .then(|| stats.gain / stats.split_info)
            },
        }
    }


    /// Returns the best split among `attributes`.
    ///
    /// The scores are computed in parallel, but the selection scans
    /// the attributes in the given order,
    /// starts from `0` and replaces the best only on a strictly
    /// greater score. Hence ties keep the earlier attribute.
    ///
    /// If `above_average_gain` is `true`, only the attributes whose
    /// information gain is above the mean gain are eligible;
    /// if none of them is selected,
    /// the attribute of maximal gain ratio is returned.
    pub(super) fn best_split(
        &self,
        view: &SampleView,
        attributes: &[usize],
        above_average_gain: bool,
    ) -> Result<Option<SplitStats>>
    {
        let stats = attributes.par_iter()
            .map(|&j| SplitStats::of(view, j))
            .collect::<Result<Vec<_>>>()?;

        if stats.is_empty() {
            return Ok(None);
        }

        if !above_average_gain {
            return Ok(argmax(stats.iter(), |s| self.score(s)));
        }

        let mean = stats.iter().map(|s| s.gain).sum::<f64>()
            / stats.len() as f64;
        let eligible = stats.iter().filter(|s| s.gain > mean);
        let best = argmax(eligible, |s| self.score(s))
            .or_else(|| argmax(stats.iter(), |s| Self::GainRatio.score(s)));
        Ok(best)
    }
}


fn argmax<'a, I, F>(candidates: I, score: F) -> Option<SplitStats>
    where I: Iterator<Item = &'a SplitStats>,
          F: Fn(&SplitStats) -> Option<f64>,
{
    let mut max = 0f64;
    let mut best = None;
    for stats in candidates {
        match score(stats) {
            Some(s) if s > max => {
                max = s;
                best = Some(*stats);
            },
            _ => {},
        }
    }
    best
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attribute, Sample};

    // a | b   | class
    // --+-----+------
    // x | p   |   0
    // x | q   |   0
    // x | r   |   1
    // y | s   |   1
    // `b` separates the classes with four values,
    // `a` almost separates them with two values.
    fn toy() -> Sample {
        let attrs = vec![
            Attribute::nominal("a", ["x", "y"]),
            Attribute::nominal("b", ["p", "q", "r", "s"]),
            Attribute::nominal("class", ["0", "1"]),
        ];
        let mut sample = Sample::new(attrs, 2).unwrap();
        sample.push(vec![0.0, 0.0, 0.0]).unwrap();
        sample.push(vec![0.0, 1.0, 0.0]).unwrap();
        sample.push(vec![0.0, 2.0, 1.0]).unwrap();
        sample.push(vec![1.0, 3.0, 1.0]).unwrap();
        sample
    }

    #[test]
    fn test_best_split_01() {
        let sample = toy();
        let view = SampleView::full(&sample);

        let best = Criterion::InformationGain
            .best_split(&view, &[0, 1], false)
            .unwrap()
            .unwrap();
        assert_eq!(best.attribute, 1);
    }

    #[test]
    fn test_best_split_02() {
        let sample = toy();
        let view = SampleView::full(&sample);

        // IG(a) = 0.311, IG(b) = 1.0
        // IG(a) / 2 = 0.156, IG(b) / 4 = 0.25
        let best = Criterion::GainOverValueCount
            .best_split(&view, &[0, 1], false)
            .unwrap()
            .unwrap();
        assert_eq!(best.attribute, 1);

        // GR(a) = 0.311 / 0.811 = 0.384, GR(b) = 1.0 / 2.0 = 0.5
        let best = Criterion::GainRatio
            .best_split(&view, &[0, 1], false)
            .unwrap()
            .unwrap();
        assert_eq!(best.attribute, 1);
    }

    #[test]
    fn test_best_split_03() {
        let sample = toy();
        // Only the first two records: both have `a = x`, class 0.
        let view = SampleView::from_rows(&sample, vec![0, 1]);
        let best = Criterion::InformationGain
            .best_split(&view, &[0, 1], false)
            .unwrap();
        assert_eq!(best, None);
    }

    #[test]
    fn test_best_split_04() {
        let sample = toy();
        let view = SampleView::full(&sample);

        // mean IG = 0.656, only `b` is eligible.
        let best = Criterion::GainRatio
            .best_split(&view, &[0, 1], true)
            .unwrap()
            .unwrap();
        assert_eq!(best.attribute, 1);

        // Duplicate `a`: all gains equal, nothing is above the mean,
        // so the gain ratio decides and the first attribute wins.
        let best = Criterion::GainOverValueCount
            .best_split(&view, &[0, 0], true)
            .unwrap()
            .unwrap();
        assert_eq!(best.attribute, 0);
    }
}
