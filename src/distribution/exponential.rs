use crate::entropy::EntropySource;

// takes the rate, not the mean
pub fn sample<S: EntropySource + ?Sized>(source: &mut S, rate: f64) -> f64 {
    -(source.next_unit().ln() / rate)
}
