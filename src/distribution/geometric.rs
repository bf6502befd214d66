use crate::entropy::EntropySource;

/// Number of trials up to and including the first success, where the success
/// probability is `1 / mean`.
///
/// The result goes through an `i32`, so it saturates for draws extremely
/// close to zero. `mean` must exceed 1; smaller values are not rejected.
pub fn sample<S: EntropySource + ?Sized>(source: &mut S, mean: f64) -> f64 {
    let p = 1.0 / mean;
    let trials = (source.next_unit().ln() / (1.0 - p).ln()).ceil();
    f64::from(trials as i32)
}
