use rand::SeedableRng;
use rand::rngs::StdRng;
use sgdlab::{Dataset, SgdClassifier, metrics};

fn main() -> Result<(), String> {
    println!("=== Constant Rate vs Annealed Schedule ===\n");

    let slope = 1.3_f64;
    let spread = 5.0_f64.sqrt();
    let norm = (1.0 + slope * slope).sqrt();
    let center = (-slope * 5.0 / norm, 5.0 / norm);

    let mut data_rng = StdRng::seed_from_u64(42);
    let dataset = Dataset::mirrored_clusters(500, center, spread, slope, &mut data_rng);

    let max_iterations = 5_000;

    let mut rng = StdRng::seed_from_u64(7);
    let mut constant = SgdClassifier::new()
        .learning_rate(0.01)
        .batch_size(50)
        .tolerance(1e-9)
        .max_iterations(max_iterations);
    constant.fit(&dataset.features, &dataset.labels, &mut rng)?;

    // same starting step as the constant run, decayed as the fit settles
    let schedule: Vec<f64> = (0..max_iterations - 1)
        .map(|k| 0.01 / (1.0 + k as f64 / 1000.0))
        .collect();

    let mut rng = StdRng::seed_from_u64(7);
    let mut annealed = SgdClassifier::new()
        .learning_rate(schedule)
        .batch_size(50)
        .tolerance(1e-9)
        .max_iterations(max_iterations);
    annealed.fit(&dataset.features, &dataset.labels, &mut rng)?;

    let report = |name: &str, model: &SgdClassifier| -> Result<(), String> {
        let weights = model.weights.as_ref().ok_or("model not fitted")?;
        let cost = metrics::least_squares_cost(weights, &dataset.features, &dataset.labels)?;
        println!(
            "{:<10} slope {:.4}  cost {:.6}  iterations {}",
            name,
            model.decision_boundary_slope()?,
            cost,
            model.n_iterations.unwrap_or(0)
        );
        Ok(())
    };

    println!("True boundary slope: {:.4}\n", slope);
    report("constant", &constant)?;
    report("annealed", &annealed)?;

    Ok(())
}
