//! Gradient-boosted regression trees.
//!
//! Second-order boosting on squared error: each tree is grown greedily on the
//! gradients of the current ensemble, with an L2 penalty (`lambda`) on leaf
//! weights and a minimum loss reduction (`gamma`) for every split. Rows and
//! features are subsampled per tree from a seeded RNG, so training is
//! reproducible.

use ndarray::{Array2, ArrayView1};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::config::BoostingParams;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
enum Node {
	Leaf {
		value: f64,
	},
	Split {
		feature: usize,
		threshold: f64,
		left: Box<Node>,
		right: Box<Node>,
	},
}

impl Node {
	fn predict(&self, row: ArrayView1<f64>) -> f64 {
		let mut node = self;
		loop {
			match node {
				Node::Leaf { value } => return *value,
				Node::Split { feature, threshold, left, right } => {
					node = if row[*feature] <= *threshold { left } else { right };
				}
			}
		}
	}

	fn depth(&self) -> usize {
		match self {
			Node::Leaf { .. } => 0,
			Node::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
		}
	}
}

struct SplitCandidate {
	feature: usize,
	threshold: f64,
	gain: f64,
}

/// Tree grower for one boosting round
struct TreeBuilder<'a> {
	x: &'a Array2<f64>,
	grad: &'a [f64],
	features: &'a [usize],
	params: &'a BoostingParams,
}

impl TreeBuilder<'_> {
	fn build(&self, rows: &[usize], depth: usize) -> Node {
		let g: f64 = rows.iter().map(|&r| self.grad[r]).sum();
		let h = rows.len() as f64;

		if depth >= self.params.max_depth || rows.len() < 2 {
			return self.leaf(g, h);
		}

		let Some(split) = self.best_split(rows, g, h) else {
			return self.leaf(g, h);
		};

		let (left, right): (Vec<usize>, Vec<usize>) = rows
			.iter()
			.partition(|&&r| self.x[[r, split.feature]] <= split.threshold);

		Node::Split {
			feature: split.feature,
			threshold: split.threshold,
			left: Box::new(self.build(&left, depth + 1)),
			right: Box::new(self.build(&right, depth + 1)),
		}
	}

	fn leaf(&self, g: f64, h: f64) -> Node {
		let weight = -g / (h + self.params.lambda);
		Node::Leaf { value: weight * self.params.learning_rate }
	}

	fn score(&self, g: f64, h: f64) -> f64 {
		g * g / (h + self.params.lambda)
	}

	fn best_split(&self, rows: &[usize], g: f64, h: f64) -> Option<SplitCandidate> {
		let parent = self.score(g, h);
		let mut best: Option<SplitCandidate> = None;

		for &feature in self.features {
			let mut sorted = rows.to_vec();
			sorted.sort_by(|&a, &b| {
				self.x[[a, feature]]
					.partial_cmp(&self.x[[b, feature]])
					.unwrap_or(Ordering::Equal)
			});

			let mut g_left = 0.0;
			for (k, pair) in sorted.windows(2).enumerate() {
				g_left += self.grad[pair[0]];
				let (lo, hi) = (self.x[[pair[0], feature]], self.x[[pair[1], feature]]);
				if lo == hi {
					continue;
				}

				let h_left = (k + 1) as f64;
				let h_right = h - h_left;
				if h_left < self.params.min_child_weight || h_right < self.params.min_child_weight {
					continue;
				}

				let gain = self.score(g_left, h_left) + self.score(g - g_left, h_right) - parent;
				if gain <= self.params.gamma {
					continue;
				}
				if best.as_ref().map_or(true, |b| gain > b.gain) {
					best = Some(SplitCandidate {
						feature,
						threshold: (lo + hi) / 2.0,
						gain,
					});
				}
			}
		}

		best
	}
}

/// Boosted ensemble of regression trees
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostedRegressor {
	params: BoostingParams,
	base_score: f64,
	trees: Vec<Node>,
}

impl GradientBoostedRegressor {
	pub fn new(params: BoostingParams) -> Self {
		Self {
			params,
			base_score: 0.0,
			trees: Vec::new(),
		}
	}

	pub fn fit(&mut self, x: &Array2<f64>, y: &[f64]) -> Result<()> {
		let (n_samples, n_features) = x.dim();
		if n_samples != y.len() {
			return Err(Error::InvalidInput("x and y must have the same number of samples".into()));
		}
		if n_samples == 0 || n_features == 0 {
			return Err(Error::InvalidInput("cannot fit with 0 samples or 0 features".into()));
		}

		self.base_score = y.iter().sum::<f64>() / n_samples as f64;
		self.trees = Vec::with_capacity(self.params.n_estimators);

		let mut rng = StdRng::seed_from_u64(self.params.seed);
		let mut predictions = vec![self.base_score; n_samples];
		let n_rows = ((n_samples as f64 * self.params.subsample).ceil() as usize).clamp(1, n_samples);
		let n_cols = ((n_features as f64 * self.params.colsample).floor() as usize).clamp(1, n_features);

		for _ in 0..self.params.n_estimators {
			let grad: Vec<f64> = predictions.iter().zip(y).map(|(p, t)| p - t).collect();

			let mut rows: Vec<usize> = (0..n_samples).collect();
			rows.shuffle(&mut rng);
			rows.truncate(n_rows);
			rows.sort_unstable();

			let mut features: Vec<usize> = (0..n_features).collect();
			features.shuffle(&mut rng);
			features.truncate(n_cols);
			features.sort_unstable();

			let builder = TreeBuilder {
				x,
				grad: &grad,
				features: &features,
				params: &self.params,
			};
			let tree = builder.build(&rows, 0);

			for (i, pred) in predictions.iter_mut().enumerate() {
				*pred += tree.predict(x.row(i));
			}
			self.trees.push(tree);
		}

		Ok(())
	}

	pub fn predict_row(&self, row: ArrayView1<f64>) -> f64 {
		self.base_score + self.trees.iter().map(|t| t.predict(row)).sum::<f64>()
	}

	pub fn predict(&self, x: &Array2<f64>) -> Vec<f64> {
		x.rows().into_iter().map(|row| self.predict_row(row)).collect()
	}

	pub fn n_trees(&self) -> usize {
		self.trees.len()
	}

	pub fn max_tree_depth(&self) -> usize {
		self.trees.iter().map(Node::depth).max().unwrap_or(0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use ndarray::Array2;

	fn step_data() -> (Array2<f64>, Vec<f64>) {
		// y depends on feature 0 only: a step at x = 50
		let n = 120;
		let x = Array2::from_shape_fn((n, 2), |(i, j)| if j == 0 { i as f64 } else { (i % 7) as f64 });
		let y = (0..n).map(|i| if i < 50 { 100.0 } else { 500.0 }).collect();
		(x, y)
	}

	#[test]
	fn learns_a_step_function() {
		let (x, y) = step_data();
		let mut model = GradientBoostedRegressor::new(BoostingParams::default());
		model.fit(&x, &y).expect("fit");

		assert_eq!(model.n_trees(), 200);
		let preds = model.predict(&x);
		assert!((preds[10] - 100.0).abs() < 15.0, "got {}", preds[10]);
		assert!((preds[100] - 500.0).abs() < 15.0, "got {}", preds[100]);
	}

	#[test]
	fn respects_max_depth() {
		let (x, y) = step_data();
		let params = BoostingParams { n_estimators: 5, max_depth: 2, ..BoostingParams::default() };
		let mut model = GradientBoostedRegressor::new(params);
		model.fit(&x, &y).expect("fit");
		assert!(model.max_tree_depth() <= 2);
	}

	#[test]
	fn training_is_deterministic() {
		let (x, y) = step_data();
		let params = BoostingParams { n_estimators: 20, ..BoostingParams::default() };
		let mut a = GradientBoostedRegressor::new(params);
		let mut b = GradientBoostedRegressor::new(params);
		a.fit(&x, &y).expect("fit");
		b.fit(&x, &y).expect("fit");
		assert_eq!(a, b);
	}

	#[test]
	fn constant_target_predicts_the_constant() {
		let x = Array2::from_shape_fn((10, 1), |(i, _)| i as f64);
		let y = vec![7.0; 10];
		let mut model = GradientBoostedRegressor::new(BoostingParams { n_estimators: 3, ..BoostingParams::default() });
		model.fit(&x, &y).expect("fit");
		assert!(model.predict(&x).iter().all(|p| (p - 7.0).abs() < 1e-9));
	}

	#[test]
	fn rejects_mismatched_shapes() {
		let x: Array2<f64> = Array2::zeros((3, 1));
		let mut model = GradientBoostedRegressor::new(BoostingParams::default());
		assert!(model.fit(&x, &[1.0, 2.0]).is_err());
	}
}
