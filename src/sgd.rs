//! Mini-batch stochastic gradient descent for a linear two-class classifier.
//!
//! The classifier fits a weight vector by descending the least-squares cost
//! of its decision values against ±1 labels, estimating the gradient on
//! uniformly resampled mini-batches and stopping once the relative cost
//! change falls below a tolerance (or an iteration cap is hit).
//!
//! # Examples
//!
//! ```rust
//! use sgdlab::SgdClassifier;
//! use ndarray::array;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let x = array![[0.0, 2.0], [0.0, -2.0], [1.0, 3.0], [-1.0, -3.0]];
//! let y = array![1.0, -1.0, 1.0, -1.0];
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut model = SgdClassifier::new().batch_size(4).max_iterations(500);
//! model.fit(&x, &y, &mut rng).unwrap();
//!
//! let predictions = model.predict(&x).unwrap();
//! assert_eq!(predictions.len(), 4);
//! ```

use crate::{Matrix, Vector, metrics};
use rand::Rng;

/// Step size for gradient updates: one scalar for every iteration, or a
/// per-iteration schedule.
#[derive(Clone, Debug)]
pub enum LearningRate {
    Constant(f64),
    Schedule(Vec<f64>),
}

impl LearningRate {
    /// Rate applied at the given 1-based iteration counter. A schedule is
    /// consumed front to back, one entry per iteration.
    ///
    /// Panics if a schedule has no entry for `iteration`; `fit` checks the
    /// schedule length up front so this cannot happen during a fit.
    pub fn at(&self, iteration: usize) -> f64 {
        match self {
            LearningRate::Constant(eta) => *eta,
            LearningRate::Schedule(etas) => etas[iteration - 1],
        }
    }
}

impl From<f64> for LearningRate {
    fn from(eta: f64) -> Self {
        LearningRate::Constant(eta)
    }
}

impl From<Vec<f64>> for LearningRate {
    fn from(etas: Vec<f64>) -> Self {
        LearningRate::Schedule(etas)
    }
}

#[derive(Clone, Debug)]
pub struct SgdClassifier {
    pub weights: Option<Vector>,
    pub n_iterations: Option<usize>,
    pub converged: bool,
    initial_weights: Option<Vector>,
    learning_rate: LearningRate,
    max_iterations: usize,
    batch_size: usize,
    tolerance: f64,
}

impl SgdClassifier {
    pub fn new() -> Self {
        Self {
            weights: None,
            n_iterations: None,
            converged: false,
            initial_weights: None,
            learning_rate: LearningRate::Constant(0.01),
            max_iterations: 1000,
            batch_size: 32,
            tolerance: 1e-6,
        }
    }

    pub fn learning_rate(mut self, learning_rate: impl Into<LearningRate>) -> Self {
        let learning_rate = learning_rate.into();
        match &learning_rate {
            LearningRate::Constant(eta) => {
                if *eta <= 0.0 {
                    panic!("learning rate must be positive, got {}", eta);
                }
            }
            LearningRate::Schedule(etas) => {
                if etas.is_empty() {
                    panic!("learning-rate schedule must not be empty");
                }
                if let Some(eta) = etas.iter().find(|eta| **eta <= 0.0) {
                    panic!("every scheduled learning rate must be positive, got {}", eta);
                }
            }
        }
        self.learning_rate = learning_rate;
        self
    }

    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        if max_iterations == 0 {
            panic!("max_iterations must be positive");
        }
        self.max_iterations = max_iterations;
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        if batch_size == 0 {
            panic!("batch_size must be positive");
        }
        self.batch_size = batch_size;
        self
    }

    pub fn tolerance(mut self, tolerance: f64) -> Self {
        if tolerance <= 0.0 {
            panic!("tolerance must be positive, got {}", tolerance);
        }
        self.tolerance = tolerance;
        self
    }

    pub fn initial_weights(mut self, initial_weights: Vector) -> Self {
        self.initial_weights = Some(initial_weights);
        self
    }

    /// Fits the weight vector to the labeled samples, drawing mini-batch
    /// indices from `rng`. Hitting the iteration cap without meeting the
    /// tolerance is not an error; the weights reached so far are kept and
    /// `converged` stays false.
    pub fn fit<R: Rng + ?Sized>(
        &mut self,
        x: &Matrix,
        y: &Vector,
        rng: &mut R,
    ) -> Result<(), String> {
        let n_samples = x.nrows();
        let n_features = x.ncols();

        if n_samples == 0 {
            return Err("X must have at least one sample".to_string());
        }
        if n_samples != y.len() {
            return Err("Number of samples in X and y must match".to_string());
        }
        self.validate_labels(y)?;

        let mut w = match &self.initial_weights {
            Some(w0) => {
                if w0.len() != n_features {
                    return Err(format!(
                        "Initial weights have {} entries but X has {} features",
                        w0.len(),
                        n_features
                    ));
                }
                w0.clone()
            }
            None => Vector::ones(n_features),
        };

        if let LearningRate::Schedule(etas) = &self.learning_rate {
            // updates run at counters 1..max_iterations, consuming entries 0..max_iterations-1
            if etas.len() + 1 < self.max_iterations {
                return Err(format!(
                    "Learning-rate schedule has {} entries but up to {} updates may run",
                    etas.len(),
                    self.max_iterations - 1
                ));
            }
        }

        let mut j_prev = metrics::least_squares_cost(&w, x, y)?;
        let mut relative_change = f64::INFINITY;
        let mut k = 1;

        while relative_change > self.tolerance && k < self.max_iterations {
            let mut gradient = Vector::zeros(n_features);
            for _ in 0..self.batch_size {
                let i = rng.gen_range(0..n_samples);
                let row = x.row(i);
                let residual = row.dot(&w) - y[i];
                gradient.scaled_add(2.0 * residual, &row);
            }
            gradient /= self.batch_size as f64;

            w.scaled_add(-self.learning_rate.at(k), &gradient);

            let j_curr = metrics::least_squares_cost(&w, x, y)?;
            if j_prev == 0.0 {
                return Err(
                    "Cost reached exactly zero; the relative-change stopping criterion is undefined"
                        .to_string(),
                );
            }
            relative_change = ((j_curr - j_prev) / j_prev).abs();
            j_prev = j_curr;
            k += 1;
        }

        self.converged = relative_change <= self.tolerance;
        self.n_iterations = Some(k - 1);
        self.weights = Some(w);
        Ok(())
    }

    pub fn decision_function(&self, x: &Matrix) -> Result<Vector, String> {
        let weights = self
            .weights
            .as_ref()
            .ok_or("Model not fitted. Call fit() first.")?;

        if x.ncols() != weights.len() {
            return Err(format!(
                "Number of features in X ({}) doesn't match training data ({})",
                x.ncols(),
                weights.len()
            ));
        }

        Ok(x.dot(weights))
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector, String> {
        let scores = self.decision_function(x)?;
        let predictions = scores.mapv(|score| if score >= 0.0 { 1.0 } else { -1.0 });
        Ok(predictions)
    }

    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64, String> {
        let predictions = self.predict(x)?;
        metrics::accuracy_score(y, &predictions)
    }

    /// Slope of the fitted decision line for 2-feature models, i.e. the line
    /// `w[0]·x + w[1]·y = 0` rewritten as `y = -w[0]/w[1] · x`.
    pub fn decision_boundary_slope(&self) -> Result<f64, String> {
        let weights = self
            .weights
            .as_ref()
            .ok_or("Model not fitted. Call fit() first.")?;

        if weights.len() != 2 {
            return Err(format!(
                "Decision boundary slope is only defined for 2 features, model has {}",
                weights.len()
            ));
        }
        if weights[1] == 0.0 {
            return Err("Decision boundary is vertical; slope is undefined".to_string());
        }

        Ok(-weights[0] / weights[1])
    }

    fn validate_labels(&self, y: &Vector) -> Result<(), String> {
        for &label in y.iter() {
            if label != 1.0 && label != -1.0 {
                return Err("Labels must be -1 or +1 for binary classification".to_string());
            }
        }
        Ok(())
    }
}

impl Default for SgdClassifier {
    fn default() -> Self {
        Self::new()
    }
}
