use super::knn_struct::{Knn, Weighting};


/// The number of neighbors set as default.
pub const DEFAULT_K: usize = 10;
/// The largest `k` examined by the adaptive selection, set as default.
pub const DEFAULT_UPPER_BOUND: usize = 11;
/// The distance weighting set as default.
pub const DEFAULT_WEIGHTING: Weighting = Weighting::Inverse;


/// A struct that builds [`Knn`].
///
/// # Example
///
/// ```no_run
/// use minitrees::prelude::*;
///
/// // Fixed `k`.
/// let knn = KnnBuilder::new()
///     .k(3)
///     .weighting(Weighting::Similarity)
///     .build();
///
/// // `k` chosen per query by leave-one-out cross-validation
/// // over `1..=11`.
/// let knn = KnnBuilder::new()
///     .adaptive(true)
///     .upper_bound(11)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct KnnBuilder {
    k: usize,
    adaptive: bool,
    upper_bound: usize,
    weighting: Weighting,
    mean_squared: bool,
}


impl KnnBuilder {
    /// Construct a new instance of [`KnnBuilder`].
    /// By default, [`KnnBuilder`] sets the parameters as follows;
    /// ```text
    /// k: DEFAULT_K == 10,
    /// adaptive: true,
    /// upper_bound: DEFAULT_UPPER_BOUND == 11,
    /// weighting: DEFAULT_WEIGHTING == Weighting::Inverse,
    /// mean_squared: false,
    /// ```
    pub fn new() -> Self {
        Self {
            k: DEFAULT_K,
            adaptive: true,
            upper_bound: DEFAULT_UPPER_BOUND,
            weighting: DEFAULT_WEIGHTING,
            mean_squared: false,
        }
    }


    /// Use a fixed number of neighbors `k`.
    /// This turns the adaptive selection off.
    pub fn k(mut self, k: usize) -> Self {
        assert!(k > 0, "k must be positive");
        self.k = k;
        self.adaptive = false;
        self
    }


    /// If `flag` is `true`, `k` is chosen at each query
    /// by leave-one-out cross-validation over `1..=upper_bound`.
    pub fn adaptive(mut self, flag: bool) -> Self {
        self.adaptive = flag;
        self
    }


    /// Set the largest `k` examined by the adaptive selection.
    pub fn upper_bound(mut self, upper_bound: usize) -> Self {
        assert!(upper_bound > 0, "the upper bound must be positive");
        self.upper_bound = upper_bound;
        self
    }


    /// Set the conversion from a distance to a vote weight.
    pub fn weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }


    /// For a numeric class, select `k` by the squared error
    /// instead of the absolute error.
    pub fn mean_squared(mut self, flag: bool) -> Self {
        self.mean_squared = flag;
        self
    }


    /// Build a [`Knn`].
    /// This method consumes `self`.
    pub fn build(self) -> Knn {
        Knn::new(
            self.k,
            self.adaptive,
            self.upper_bound,
            self.weighting,
            self.mean_squared,
        )
    }
}


impl Default for KnnBuilder {
    fn default() -> Self {
        Self::new()
    }
}
