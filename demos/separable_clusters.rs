use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sgdlab::{Dataset, Matrix, SgdClassifier};

fn main() -> Result<(), String> {
    println!("=== SGD Linear Classifier on Separable Clusters ===\n");

    let mut rng = StdRng::seed_from_u64(1234);

    let slope = 1.3_f64;
    let offset = 5.0;
    let spread = 5.0_f64.sqrt();

    // place the cluster centers `offset` units either side of the boundary line
    let norm = (1.0 + slope * slope).sqrt();
    let center = (-slope * offset / norm, offset / norm);

    let dataset = Dataset::mirrored_clusters(150, center, spread, slope, &mut rng);
    let (train, test) = dataset.train_test_split(0.2, &mut rng)?;
    println!(
        "Generated {} samples ({} train / {} test) around the line y = {}x",
        dataset.n_samples(),
        train.n_samples(),
        test.n_samples(),
        slope
    );

    let mut model = SgdClassifier::new()
        .learning_rate(0.01)
        .batch_size(train.n_samples() / 10)
        .tolerance(1e-9)
        .max_iterations(100_000);
    model.fit(&train.features, &train.labels, &mut rng)?;

    println!("\nResults:");
    println!("True boundary slope:      {:.4}", slope);
    println!(
        "Recovered boundary slope: {:.4}",
        model.decision_boundary_slope()?
    );
    println!(
        "Train accuracy: {:.3}",
        model.score(&train.features, &train.labels)?
    );
    println!(
        "Test accuracy:  {:.3}",
        model.score(&test.features, &test.labels)?
    );
    println!(
        "Converged: {} after {} iterations",
        model.converged,
        model.n_iterations.unwrap()
    );

    // probe the fitted boundary on a fresh uniform scatter
    let probe = Matrix::random_using((10, 2), Uniform::new(-10.0, 10.0), &mut rng);
    let labels = model.predict(&probe)?;
    println!("\nPredictions on fresh points:");
    for (point, label) in probe.rows().into_iter().zip(labels.iter()) {
        println!("({:+.2}, {:+.2}) -> {:+.0}", point[0], point[1], label);
    }

    Ok(())
}
