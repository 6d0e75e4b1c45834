//! Sparse row vectors.

use serde::{Deserialize, Serialize};

/// A sparse vector stored as parallel, index-sorted arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Create an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a vector from `(index, value)` pairs. Pairs are sorted by index
    /// and explicit zeros are dropped; indices must be unique.
    pub fn from_pairs(mut pairs: Vec<(usize, f64)>) -> Self {
        pairs.sort_unstable_by_key(|(index, _)| *index);
        let (indices, values) = pairs.into_iter().filter(|(_, v)| *v != 0.0).unzip();
        Self { indices, values }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of stored (non-zero) entries.
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Iterate over `(index, value)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Value at `index`, zero when absent.
    pub fn get(&self, index: usize) -> f64 {
        match self.indices.binary_search(&index) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    /// Dot product with a dense vector. Indices past its end contribute nothing.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.iter()
            .filter_map(|(i, v)| dense.get(i).map(|w| w * v))
            .sum()
    }

    /// Add `scale * self` into a dense vector.
    pub fn add_scaled_to(&self, dense: &mut [f64], scale: f64) {
        for (i, v) in self.iter() {
            if let Some(slot) = dense.get_mut(i) {
                *slot += scale * v;
            }
        }
    }

    pub fn norm_squared(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum()
    }

    /// Scale to unit Euclidean length. The zero vector is left unchanged.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm_squared().sqrt();
        if norm > 0.0 {
            for v in &mut self.values {
                *v /= norm;
            }
        }
    }

    /// Append the entries of `other`, shifted right by `offset`.
    ///
    /// `offset` must be past every index already stored.
    pub fn extend_shifted(&mut self, other: &SparseVector, offset: usize) {
        debug_assert!(self.indices.last().is_none_or(|last| *last < offset));
        for (i, v) in other.iter() {
            self.indices.push(i + offset);
            self.values.push(v);
        }
    }
}
