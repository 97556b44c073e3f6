use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SMALL_RUNTIME_SAMPLE_SIZE: usize = 15;
const SMALL_RUNTIME_WARM_UP_MS: u64 = 100;
const SMALL_RUNTIME_MEASURE_MS: u64 = 200;
const MEDIUM_RUNTIME_SAMPLE_SIZE: usize = 15;
const MEDIUM_RUNTIME_WARM_UP_MS: u64 = 500;
const MEDIUM_RUNTIME_MEASURE_MS: u64 = 1000;
const LARGE_RUNTIME_SAMPLE_SIZE: usize = 10;
const LARGE_RUNTIME_WARM_UP_MS: u64 = 800;
const LARGE_RUNTIME_MEASURE_MS: u64 = 1500;
const RNG_SEED: u64 = 0x5EED_2026;
const WORD_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

pub fn apply_small_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(SMALL_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(SMALL_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(SMALL_RUNTIME_MEASURE_MS));
}

pub fn apply_medium_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(MEDIUM_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(MEDIUM_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(MEDIUM_RUNTIME_MEASURE_MS));
}

pub fn apply_large_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>) {
    group.sample_size(LARGE_RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(LARGE_RUNTIME_WARM_UP_MS));
    group.measurement_time(Duration::from_millis(LARGE_RUNTIME_MEASURE_MS));
}

/// Picks the runtime config tier for an input of `len` elements.
pub fn apply_runtime_for_len<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, len: usize) {
    if len <= 4096 {
        apply_small_runtime_config(group);
    } else if len <= 65536 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}

/// `len` values drawn uniformly from `0..=max`.
pub fn random_u64s<R: Rng + ?Sized>(rng: &mut R, len: usize, max: u64) -> Vec<u64> {
    (0..len).map(|_| rng.random_range(0..=max)).collect()
}

/// `len` lowercase words of `1..=max_width` letters.
pub fn random_words<R: Rng + ?Sized>(rng: &mut R, len: usize, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    (0..len)
        .map(|_| {
            let width = rng.random_range(1..=max_width);
            (0..width)
                .map(|_| WORD_ALPHABET[rng.random_range(0..WORD_ALPHABET.len())] as char)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generators_respect_bounds() {
        let mut rng = default_rng();
        let values = random_u64s(&mut rng, 256, 9);
        assert_eq!(values.len(), 256);
        assert!(values.iter().all(|&v| v <= 9));

        let words = random_words(&mut rng, 64, 5);
        assert_eq!(words.len(), 64);
        assert!(
            words
                .iter()
                .all(|w| (1..=5).contains(&w.len()) && w.bytes().all(|b| b.is_ascii_lowercase()))
        );
    }

    #[test]
    fn default_rng_is_deterministic() {
        let a = random_u64s(&mut default_rng(), 16, u64::MAX);
        let b = random_u64s(&mut default_rng(), 16, u64::MAX);
        assert_eq!(a, b);
    }
}
