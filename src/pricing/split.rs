//! Reproducible train/test splitting

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffled train and test row indices.
///
/// The test set holds `ceil(n * test_size)` rows, capped so that at least one
/// row is left for training. The same seed always yields the same split.
pub fn train_test_split(n: usize, test_size: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
	let mut indices: Vec<usize> = (0..n).collect();
	let mut rng = StdRng::seed_from_u64(seed);
	indices.shuffle(&mut rng);

	let n_test = ((n as f64 * test_size).ceil() as usize).min(n.saturating_sub(1));
	let test = indices.split_off(n - n_test);
	(indices, test)
}
