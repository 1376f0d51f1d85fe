//! Standard-normal sampling via the Marsaglia polar rejection method.

use rand::Rng;
use rand::distributions::Distribution;

/// Draws pairs of independent standard-normal variates (mean 0, variance 1).
///
/// Candidate points are drawn uniformly from the square [-1, 1]² and rejected
/// until one lands strictly inside the unit disk; the accepted point is then
/// mapped to a normal pair by the polar transform. Roughly 4/π candidate
/// draws are consumed per accepted pair.
pub struct PolarNormalPair;

impl Distribution<(f64, f64)> for PolarNormalPair {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        loop {
            let v1 = rng.gen_range(-1.0..1.0);
            let v2 = rng.gen_range(-1.0..1.0);
            let radius_sq: f64 = v1 * v1 + v2 * v2;
            // A zero radius would put ln(0) into the transform, so it is
            // rejected along with everything on or outside the unit circle.
            if radius_sq > 0.0 && radius_sq < 1.0 {
                let scale = (-2.0 * radius_sq.ln() / radius_sq).sqrt();
                return (v1 * scale, v2 * scale);
            }
        }
    }
}
