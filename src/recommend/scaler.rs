//! Column standardization fitted once over the listing population

use ndarray::{Array1, Array2, ArrayView1, Axis};
use serde::{Deserialize, Serialize};

/// Zero-mean, unit-variance scaling per column.
///
/// Uses the population standard deviation. A column with zero variance keeps
/// `std = 1`, so it standardizes to all zeros instead of NaN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
	mean: Array1<f64>,
	std: Array1<f64>,
}

impl StandardScaler {
	pub fn fit(data: &Array2<f64>) -> Self {
		let n = data.nrows().max(1) as f64;
		let mean: Array1<f64> = data
			.axis_iter(Axis(1))
			.map(|col| col.sum() / n)
			.collect();
		let std: Array1<f64> = data
			.axis_iter(Axis(1))
			.zip(mean.iter())
			.map(|(col, &m)| {
				let var = col.iter().map(|v| (v - m).powi(2)).sum::<f64>() / n;
				let std = var.sqrt();
				if std.is_finite() && std > f64::EPSILON {
					std
				} else {
					1.0
				}
			})
			.collect();

		Self { mean, std }
	}

	pub fn transform(&self, data: &Array2<f64>) -> Array2<f64> {
		let mut out = data.clone();
		for (j, mut col) in out.axis_iter_mut(Axis(1)).enumerate() {
			let (m, s) = (self.mean[j], self.std[j]);
			col.mapv_inplace(|v| (v - m) / s);
		}
		out
	}

	pub fn transform_row(&self, row: ArrayView1<f64>) -> Array1<f64> {
		Array1::from_iter(
			row.iter()
				.zip(self.mean.iter().zip(self.std.iter()))
				.map(|(v, (m, s))| (v - m) / s),
		)
	}

	pub fn mean(&self) -> &Array1<f64> {
		&self.mean
	}

	pub fn std(&self) -> &Array1<f64> {
		&self.std
	}
}
