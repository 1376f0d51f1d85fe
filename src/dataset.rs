//! Labeled datasets and synthetic two-cluster generation.

use crate::sampling::PolarNormalPair;
use crate::{Matrix, Vector};
use ndarray::Axis;
use rand::Rng;
use rand::distributions::Distribution;
use rand::seq::SliceRandom;

#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self, String> {
        if features.nrows() != labels.len() {
            return Err("Number of samples in features and labels must match".to_string());
        }

        Ok(Self { features, labels })
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// Two mirrored Gaussian clusters in the plane, labeled by a line through
    /// the origin.
    ///
    /// The first `n / 2` points are centered at `center`, the rest at
    /// `-center`; both clusters spread each coordinate by `spread` standard
    /// deviations. A point gets label +1 when it lies above the line
    /// `y = slope * x` and -1 otherwise.
    pub fn mirrored_clusters<R: Rng + ?Sized>(
        n: usize,
        center: (f64, f64),
        spread: f64,
        slope: f64,
        rng: &mut R,
    ) -> Self {
        let mut features = Matrix::zeros((n, 2));
        let mut labels = Vector::zeros(n);
        let half = n / 2;

        for (i, mut row) in features.rows_mut().into_iter().enumerate() {
            let (gx, gy) = PolarNormalPair.sample(rng);
            let (cx, cy) = if i < half {
                center
            } else {
                (-center.0, -center.1)
            };
            row[0] = cx + spread * gx;
            row[1] = cy + spread * gy;
        }

        for i in 0..n {
            labels[i] = if features[(i, 1)] > slope * features[(i, 0)] {
                1.0
            } else {
                -1.0
            };
        }

        Self { features, labels }
    }

    /// A copy of this dataset with polar-normal noise of the given amplitude
    /// added to every feature. Labels are left untouched.
    pub fn with_noise<R: Rng + ?Sized>(&self, amplitude: f64, rng: &mut R) -> Self {
        let mut features = self.features.clone();

        for mut row in features.rows_mut() {
            let mut j = 0;
            while j < row.len() {
                let (a, b) = PolarNormalPair.sample(rng);
                row[j] += amplitude * a;
                if j + 1 < row.len() {
                    row[j + 1] += amplitude * b;
                }
                j += 2;
            }
        }

        Self {
            features,
            labels: self.labels.clone(),
        }
    }

    /// Splits into shuffled train and test datasets.
    pub fn train_test_split<R: Rng + ?Sized>(
        &self,
        test_size: f64,
        rng: &mut R,
    ) -> Result<(Self, Self), String> {
        if test_size <= 0.0 || test_size >= 1.0 {
            return Err("test_size must be between 0 and 1".to_string());
        }

        let n_samples = self.n_samples();
        let n_test = (n_samples as f64 * test_size).round() as usize;
        if n_test == 0 || n_test == n_samples {
            return Err("test_size leaves the train or test side empty".to_string());
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();
        indices.shuffle(rng);
        let (test_idx, train_idx) = indices.split_at(n_test);

        let train = Dataset::new(
            self.features.select(Axis(0), train_idx),
            self.labels.select(Axis(0), train_idx),
        )?;
        let test = Dataset::new(
            self.features.select(Axis(0), test_idx),
            self.labels.select(Axis(0), test_idx),
        )?;

        Ok((train, test))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_rejects_length_mismatch() {
        let features = array![[1.0, 2.0], [3.0, 4.0]];
        let labels = array![1.0];

        assert!(Dataset::new(features, labels).is_err());
    }

    #[test]
    fn test_mirrored_clusters_geometry() {
        let mut rng = StdRng::seed_from_u64(42);
        let dataset = Dataset::mirrored_clusters(200, (5.0, 0.0), 1.0, 1.3, &mut rng);

        assert_eq!(dataset.n_samples(), 200);
        assert_eq!(dataset.n_features(), 2);

        let first_half = dataset.features.slice(ndarray::s![..100, ..]);
        let second_half = dataset.features.slice(ndarray::s![100.., ..]);
        let mean_a = first_half.mean_axis(Axis(0)).unwrap();
        let mean_b = second_half.mean_axis(Axis(0)).unwrap();

        assert!((mean_a[0] - 5.0).abs() < 0.5);
        assert!(mean_a[1].abs() < 0.5);
        assert!((mean_b[0] + 5.0).abs() < 0.5);
        assert!(mean_b[1].abs() < 0.5);
    }

    #[test]
    fn test_mirrored_clusters_label_rule() {
        let mut rng = StdRng::seed_from_u64(7);
        let dataset = Dataset::mirrored_clusters(100, (3.0, -2.0), 2.0, 0.8, &mut rng);

        for i in 0..dataset.n_samples() {
            let (x, y) = (dataset.features[(i, 0)], dataset.features[(i, 1)]);
            let expected = if y > 0.8 * x { 1.0 } else { -1.0 };
            assert_eq!(dataset.labels[i], expected);
        }
    }

    #[test]
    fn test_with_noise_preserves_labels_and_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let dataset = Dataset::mirrored_clusters(50, (5.0, 0.0), 1.0, 1.3, &mut rng);
        let noised = dataset.with_noise(0.5, &mut rng);

        assert_eq!(noised.features.shape(), dataset.features.shape());
        assert_eq!(noised.labels, dataset.labels);
        assert_ne!(noised.features, dataset.features);
    }

    #[test]
    fn test_train_test_split_partitions_samples() {
        let mut rng = StdRng::seed_from_u64(11);
        let dataset = Dataset::mirrored_clusters(100, (5.0, 0.0), 1.0, 1.3, &mut rng);
        let (train, test) = dataset.train_test_split(0.2, &mut rng).unwrap();

        assert_eq!(train.n_samples(), 80);
        assert_eq!(test.n_samples(), 20);

        // a split permutes rows, so feature totals must be preserved
        let total = dataset.features.sum();
        let split_total = train.features.sum() + test.features.sum();
        assert!((total - split_total).abs() < 1e-9);
    }

    #[test]
    fn test_train_test_split_rejects_bad_sizes() {
        let mut rng = StdRng::seed_from_u64(11);
        let dataset = Dataset::mirrored_clusters(10, (5.0, 0.0), 1.0, 1.3, &mut rng);

        assert!(dataset.train_test_split(0.0, &mut rng).is_err());
        assert!(dataset.train_test_split(1.0, &mut rng).is_err());
        assert!(dataset.train_test_split(0.01, &mut rng).is_err());
    }
}
