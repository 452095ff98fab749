//! A sorted candidate list of nearest neighbors.


/// A list of `(distance, item)` pairs sorted in ascending distance.
///
/// The list keeps at least `k` pairs (if offered),
/// plus every pair tied with the `k`-th distance.
/// That is, the list is cut only at the first position `i >= k`
/// whose distance differs from the one before it.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborList<T> {
    k: usize,
    items: Vec<(f64, T)>,
}


impl<T> NeighborList<T> {
    /// Construct an empty list of target length `k`.
    /// `k < 1` is treated as `1`.
    pub fn new(k: usize) -> Self {
        Self { k: k.max(1), items: Vec::with_capacity(k + 1) }
    }


    /// The target length.
    pub fn k(&self) -> usize {
        self.k
    }


    /// Number of pairs in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }


    /// Returns `true` if the list has no pair.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }


    /// The largest distance in the list.
    pub fn last_distance(&self) -> Option<f64> {
        self.items.last().map(|(d, _)| *d)
    }


    /// Iterates over the pairs in ascending distance.
    pub fn iter(&self) -> impl Iterator<Item = &(f64, T)> + '_ {
        self.items.iter()
    }


    /// Offers a candidate scanned from the training set.
    /// The candidate is inserted if the list is shorter than `k`
    /// or the distance does not exceed the current last one.
    /// Returns `true` if the candidate was inserted.
    pub fn offer(&mut self, distance: f64, item: T) -> bool {
        let accept = match self.last_distance() {
            None => true,
            Some(last) => self.items.len() < self.k || distance <= last,
        };
        if accept {
            self.insert(distance, item);
        }
        accept
    }


    /// Inserts the pair after every pair of smaller or equal distance,
    /// then cuts the list at the first non-tied position at or after `k`.
    pub fn insert(&mut self, distance: f64, item: T) {
        let at = self.items.partition_point(|(d, _)| *d <= distance);
        self.items.insert(at, (distance, item));
        self.truncate_at(self.k);
    }


    /// Shrinks the target length to `k`
    /// and drops the pairs beyond the `k`-th distance.
    /// The pairs tied with the `k`-th distance are kept.
    /// `k < 1` is treated as `1`.
    pub fn prune_to_k(&mut self, k: usize) {
        self.k = k.max(1);
        self.truncate_at(self.k);
    }


    fn truncate_at(&mut self, k: usize) {
        let cut = (k..self.items.len())
            .find(|&i| self.items[i].0 != self.items[i - 1].0);
        if let Some(cut) = cut {
            self.items.truncate(cut);
        }
    }
}
