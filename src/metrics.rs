use crate::{Matrix, Vector};

/// Least-squares cost of a linear model: 0.5 times the mean squared residual
/// of `x · weights` against `y`. Pure function of its inputs.
pub fn least_squares_cost(weights: &Vector, x: &Matrix, y: &Vector) -> Result<f64, String> {
    if weights.len() != x.ncols() {
        return Err(format!(
            "Weight vector has {} entries but X has {} features",
            weights.len(),
            x.ncols()
        ));
    }
    if x.nrows() != y.len() {
        return Err("Number of samples in X and y must match".to_string());
    }
    if x.nrows() == 0 {
        return Err("X must have at least one sample".to_string());
    }

    let residuals = y - &x.dot(weights);
    let mean = residuals.mapv(|r| r * r).mean().unwrap();
    Ok(0.5 * mean)
}

pub fn mean_squared_error(y_true: &Vector, y_pred: &Vector) -> Result<f64, String> {
    if y_true.len() != y_pred.len() {
        return Err("y_true and y_pred must have the same length".to_string());
    }
    if y_true.is_empty() {
        return Err("y_true must have at least one entry".to_string());
    }

    let diff = y_true - y_pred;
    let mse = diff.mapv(|x| x * x).mean().unwrap();
    Ok(mse)
}

pub fn accuracy_score(y_true: &Vector, y_pred: &Vector) -> Result<f64, String> {
    if y_true.len() != y_pred.len() {
        return Err("y_true and y_pred must have the same length".to_string());
    }
    if y_true.is_empty() {
        return Err("y_true must have at least one entry".to_string());
    }

    let hits = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(actual, pred)| (*actual - *pred).abs() < 1e-10)
        .count();
    Ok(hits as f64 / y_true.len() as f64)
}
