use crate::entropy::EntropySource;

pub fn sample<S: EntropySource + ?Sized>(source: &mut S, max: f64) -> f64 {
    source.next_unit() * max
}
