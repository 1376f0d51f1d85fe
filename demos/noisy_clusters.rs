use rand::SeedableRng;
use rand::rngs::StdRng;
use sgdlab::{Dataset, SgdClassifier};

fn main() -> Result<(), String> {
    println!("=== Fit Stability Under Feature Noise ===\n");

    let mut rng = StdRng::seed_from_u64(1234);

    let slope = 1.3_f64;
    let spread = 5.0_f64.sqrt();
    let norm = (1.0 + slope * slope).sqrt();
    let center = (-slope * 5.0 / norm, 5.0 / norm);

    let clean = Dataset::mirrored_clusters(150, center, spread, slope, &mut rng);
    // labels stay attached to the clean geometry; only the features move
    let noised = clean.with_noise(0.1, &mut rng);

    let fit = |data: &Dataset, rng: &mut StdRng| -> Result<SgdClassifier, String> {
        let mut model = SgdClassifier::new()
            .learning_rate(0.01)
            .batch_size(data.n_samples() / 10)
            .tolerance(1e-9)
            .max_iterations(100_000);
        model.fit(&data.features, &data.labels, rng)?;
        Ok(model)
    };

    let model_clean = fit(&clean, &mut rng)?;
    let model_noised = fit(&noised, &mut rng)?;

    println!("True boundary slope:          {:.4}", slope);
    println!(
        "Recovered from clean data:    {:.4}",
        model_clean.decision_boundary_slope()?
    );
    println!(
        "Recovered from noised data:   {:.4}",
        model_noised.decision_boundary_slope()?
    );
    println!(
        "Accuracy on clean features:   {:.3}",
        model_clean.score(&clean.features, &clean.labels)?
    );
    println!(
        "Accuracy on noised features:  {:.3}",
        model_noised.score(&noised.features, &noised.labels)?
    );

    Ok(())
}
