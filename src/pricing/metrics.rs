//! Regression fit-quality metrics

/// Mean absolute error; 0 for empty input
pub fn mean_absolute_error(y_true: &[f64], y_pred: &[f64]) -> f64 {
	if y_true.is_empty() {
		return 0.0;
	}
	let total: f64 = y_true.iter().zip(y_pred).map(|(t, p)| (t - p).abs()).sum();
	total / y_true.len() as f64
}

/// Coefficient of determination. Returns 0 when `y_true` has no variance.
pub fn r2_score(y_true: &[f64], y_pred: &[f64]) -> f64 {
	if y_true.is_empty() {
		return 0.0;
	}
	let mean = y_true.iter().sum::<f64>() / y_true.len() as f64;
	let ss_res: f64 = y_true.iter().zip(y_pred).map(|(t, p)| (t - p).powi(2)).sum();
	let ss_tot: f64 = y_true.iter().map(|t| (t - mean).powi(2)).sum();

	if ss_tot == 0.0 {
		return 0.0;
	}
	1.0 - ss_res / ss_tot
}
