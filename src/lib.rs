pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod metrics;
pub mod sampling;
pub mod sgd;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

pub use dataset::Dataset;
pub use sampling::PolarNormalPair;
pub use sgd::{LearningRate, SgdClassifier};
