use rand::{Rng, RngCore};

use crate::errors::{GenerationError, Result};

/// Source of uniform choices during generation.
///
/// Implemented for every [`RngCore`], so a seeded `ChaCha8Rng` or a
/// `&mut dyn RngCore` can be injected directly.
pub trait RandomSource {
    /// Pick one element uniformly.
    fn choose<'a, T>(&mut self, candidates: &'a [T]) -> Result<&'a T>;

    /// Draw an integer uniformly from `low..=high`.
    fn range_int(&mut self, low: u32, high: u32) -> u32;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn choose<'a, T>(&mut self, candidates: &'a [T]) -> Result<&'a T> {
        if candidates.is_empty() {
            return Err(GenerationError::EmptyAlphabet(
                "no candidates to choose from".to_string(),
            ));
        }
        let idx = self.random_range(0..candidates.len());
        Ok(&candidates[idx])
    }

    fn range_int(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.random_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn choose_rejects_empty_candidates() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let empty: [char; 0] = [];
        assert!(matches!(
            rng.choose(&empty),
            Err(GenerationError::EmptyAlphabet(_))
        ));
    }

    #[test]
    fn range_int_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..500 {
            let value = rng.range_int(3, 9);
            assert!((3..=9).contains(&value));
        }
        assert_eq!(rng.range_int(4, 4), 4);
    }

    #[test]
    fn same_seed_same_choices() {
        let candidates: Vec<u32> = (0..50).collect();
        let mut left = ChaCha8Rng::seed_from_u64(99);
        let mut right = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(
                left.choose(&candidates).ok(),
                right.choose(&candidates).ok()
            );
        }
    }

    #[test]
    fn works_through_dyn_rng() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let dyn_rng: &mut dyn RngCore = &mut rng;
        let value = dyn_rng.range_int(0, 1);
        assert!(value <= 1);
    }
}
