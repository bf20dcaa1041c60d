//! Random selection without replacement.

use rand::Rng;

/// Draw up to `count` items from `items` without replacement.
///
/// Each draw picks a uniformly random index over the remaining pool and
/// removes it, so the result holds `min(count, items.len())` items with no
/// item appearing twice. When `count >= items.len()` the result is a random
/// permutation of the whole slice.
pub fn sample_without_replacement<T, R>(items: &[T], count: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut pool: Vec<&T> = items.iter().collect();
    let mut picked = Vec::with_capacity(count.min(items.len()));

    while picked.len() < count && !pool.is_empty() {
        let i = rng.gen_range(0..pool.len());
        picked.push(pool.remove(i).clone());
    }

    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn empty_input_yields_empty_sample() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample_without_replacement::<u8, _>(&[], 3, &mut rng).is_empty());
    }

    #[test]
    fn zero_count_yields_empty_sample() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(sample_without_replacement(&[1, 2, 3], 0, &mut rng).is_empty());
    }

    #[test]
    fn both_orders_of_a_pair_are_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<Vec<char>> = (0..200)
            .map(|_| sample_without_replacement(&['a', 'b'], 3, &mut rng))
            .collect();
        let expected: HashSet<Vec<char>> = [vec!['a', 'b'], vec!['b', 'a']].into();
        assert_eq!(seen, expected);
    }

    #[test]
    fn every_single_item_is_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let seen: HashSet<u32> = (0..500)
            .flat_map(|_| sample_without_replacement(&[10, 20, 30, 40], 1, &mut rng))
            .collect();
        assert_eq!(seen, [10, 20, 30, 40].into());
    }
}
