use crate::entropy::EntropySource;

/// Knuth's multiplicative method: keep multiplying draws while the product
/// stays above `e^-lambda`, then return the number of draws minus one.
pub fn sample<S: EntropySource + ?Sized>(source: &mut S, lambda: f64) -> f64 {
    let limit = (-lambda).exp();
    let mut k: u64 = 1;
    let mut p = source.next_unit();
    // a NaN limit fails the comparison and stops after the first draw
    while p > limit {
        k += 1;
        p *= source.next_unit();
    }
    (k - 1) as f64
}
