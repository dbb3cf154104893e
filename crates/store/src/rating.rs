//! Rating generation.
//!
//! Every record gets its rating from here, exactly once, at stamping
//! time. Ratings are uniform over [1.0, 5.0] and quantized to one
//! decimal digit. Not cryptographically random, and doesn't need to be.

use rand::Rng;

/// Draw a rating in [1.0, 5.0], rounded to one decimal place.
pub fn generate_rating<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let raw: f32 = rng.random_range(1.0..=5.0);
    quantize(raw)
}

/// Round to one decimal digit.
fn quantize(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}
