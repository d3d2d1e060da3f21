//! Random sampling and distance helpers.

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Uniform sample in `[min, max)`. Returns `min` when the range is empty.
pub fn uniform(rng: &mut ChaCha8Rng, min: f64, max: f64) -> f64 {
    rng.gen::<f64>() * (max - min) + min
}

/// `1.0` or `-1.0` with equal probability.
pub fn random_sign(rng: &mut ChaCha8Rng) -> f64 {
    if rng.gen::<f64>() < 0.5 {
        1.0
    } else {
        -1.0
    }
}

/// Bernoulli trial: true with probability `chance`.
pub fn roll(rng: &mut ChaCha8Rng, chance: f64) -> bool {
    rng.gen::<f64>() < chance
}

/// Uniform point inside the rectangle spanned by `min` and `max`.
pub fn point_in(rng: &mut ChaCha8Rng, min: DVec2, max: DVec2) -> DVec2 {
    let x = uniform(rng, min.x, max.x);
    let y = uniform(rng, min.y, max.y);
    DVec2::new(x, y)
}

/// Euclidean distance between two canvas points.
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    a.distance(b)
}
