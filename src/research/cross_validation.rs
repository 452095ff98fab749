use rand::prelude::*;
use colored::Colorize;
use crate::Sample;

use std::iter::Iterator;

const WIDTH: usize = 9;

/// The number of folds set as default.
pub const DEFAULT_N_FOLDS: usize = 10;
/// The seed set as default.
pub const DEFAULT_SEED: u64 = 1234;


/// A struct that generates
/// pairs of training/test sample for cross validation.
/// The test samples of the folds are disjoint and cover the sample.
/// # Example
/// ```no_run
/// use minitrees::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/data/file.csv")
///     .has_header(true)
///     .class_column("class")
///     .read()
///     .unwrap();
/// let cv = CrossValidation::new(&sample)
///     .n_folds(5)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
/// let tree = DecisionTreeBuilder::new(NaiveBayes::new()).build();
/// for (train, test) in cv {
///     let f = tree.fit(&train).unwrap();
///     let eval = Evaluation::of(&f, &test).unwrap();
///     println!("{eval}");
/// }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    sample: &'a Sample,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_sample = sample.n_instances();
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: DEFAULT_N_FOLDS,
            seed: DEFAULT_SEED,
            verbose: false,
            sample,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `10.`
    /// If the sample is smaller than `n_folds`,
    /// each record forms its own fold.
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        assert!(n_folds > 1, "Cross validation needs at least 2 folds.");
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the sample.
    /// By default, `CrossValidation` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// The actual number of folds.
    #[inline]
    fn effective_folds(&self) -> usize {
        self.n_folds.min(self.ix.len())
    }


    /// Returns the range of `self.ix` tested at the `i`-th fold.
    /// The first `n % n_folds` folds hold one more record.
    #[inline]
    fn test_range(&self, i: usize) -> (usize, usize) {
        let n_sample = self.ix.len();
        let n_folds = self.effective_folds();
        let size = n_sample / n_folds;
        let rest = n_sample % n_folds;

        let start = i * size + i.min(rest);
        let end = start + size + usize::from(i < rest);
        (start, end)
    }


    /// Returns the training/test sample for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Sample, Sample) {
        let (start, end) = self.test_range(i);
        let train_ix = self.ix[..start].iter()
            .chain(&self.ix[end..])
            .copied()
            .collect::<Vec<_>>();

        let train = self.sample.subset(&train_ix);
        let test = self.sample.subset(&self.ix[start..end]);
        (train, test)
    }
}


impl<'a> Iterator for CrossValidation<'a> {
    type Item = (Sample, Sample);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.effective_folds() { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.n_instances();
            let test_size = output.1.n_instances();
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}
