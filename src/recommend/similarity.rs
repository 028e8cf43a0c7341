//! Cosine similarity over weighted feature vectors

use ndarray::{Array2, ArrayView1};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Cosine similarity in [-1, 1]; 0 when either vector has zero length
pub fn cosine(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
	let norm_a = a.dot(&a).sqrt();
	let norm_b = b.dot(&b).sqrt();
	if norm_a == 0.0 || norm_b == 0.0 {
		return 0.0;
	}
	(a.dot(&b) / (norm_a * norm_b)).clamp(-1.0, 1.0)
}

/// Full pairwise similarity matrix. The diagonal is always exactly 1.
pub fn similarity_matrix(features: &Array2<f64>) -> Array2<f64> {
	let n = features.nrows();
	let rows: Vec<Vec<f64>> = (0..n)
		.into_par_iter()
		.map(|i| {
			let row_i = features.row(i);
			(0..n)
				.map(|j| if i == j { 1.0 } else { cosine(row_i, features.row(j)) })
				.collect()
		})
		.collect();

	Array2::from_shape_fn((n, n), |(i, j)| rows[i][j])
}

/// Similarity of one query vector against every row
pub fn similarities_to(features: &Array2<f64>, query: ArrayView1<f64>) -> Vec<f64> {
	(0..features.nrows())
		.into_par_iter()
		.map(|i| cosine(features.row(i), query))
		.collect()
}

/// Indices of the `n` highest scores, descending. Ties keep input order.
pub fn top_n(candidates: impl IntoIterator<Item = (usize, f64)>, n: usize) -> Vec<(usize, f64)> {
	let mut ranked: Vec<(usize, f64)> = candidates.into_iter().collect();
	ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
	ranked.truncate(n);
	ranked
}
