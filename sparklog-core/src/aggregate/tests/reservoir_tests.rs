use crate::aggregate::Reservoir;

use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sample(capacity: usize, n: u32, seed: u64) -> Vec<u32> {
    let mut reservoir = Reservoir::new(capacity, StdRng::seed_from_u64(seed));
    for i in 0..n {
        reservoir.offer(i);
    }
    reservoir.into_items()
}

#[test]
fn keeps_everything_until_full() {
    assert_eq!(sample(10, 4, 1), vec![0, 1, 2, 3]);
}

#[test]
fn first_k_items_fill_slots_in_order() {
    assert_eq!(sample(3, 3, 99), vec![0, 1, 2]);
}

#[test]
fn size_is_min_of_capacity_and_seen() {
    for n in [0u32, 1, 9, 10, 11, 500] {
        let items = sample(10, n, 7);
        assert_eq!(items.len(), (n as usize).min(10), "n = {n}");
    }
}

#[test]
fn sampled_items_are_distinct_stream_members() {
    let mut items = sample(10, 1_000, 3);
    items.sort_unstable();
    items.dedup();

    assert_eq!(items.len(), 10);
    assert!(items.iter().all(|i| *i < 1_000));
}

#[test]
fn fixed_seed_is_reproducible() {
    assert_eq!(sample(10, 5_000, 42), sample(10, 5_000, 42));
}

#[test]
fn different_seeds_usually_differ() {
    let distinct = (0..8)
        .map(|seed| sample(10, 5_000, seed))
        .collect::<std::collections::HashSet<_>>();

    assert!(distinct.len() > 1);
}

#[test]
fn counts_every_offer() {
    let mut reservoir = Reservoir::new(2, StdRng::seed_from_u64(0));
    for i in 0..25 {
        reservoir.offer(i);
    }

    assert_eq!(reservoir.seen(), 25);
    assert_eq!(reservoir.capacity(), 2);
    assert_eq!(reservoir.items().len(), 2);
}

#[test]
fn zero_capacity_never_retains() {
    assert!(sample(0, 100, 5).is_empty());
}

#[test]
fn inclusion_frequency_converges_to_k_over_n() {
    // Arrange
    const K: usize = 10;
    const N: u32 = 50;
    const RUNS: u64 = 4_000;
    let expected = K as f64 / N as f64;
    let mut hits = vec![0u64; N as usize];

    // Act
    for seed in 0..RUNS {
        for item in sample(K, N, seed) {
            hits[item as usize] += 1;
        }
    }

    // Assert
    for (item, count) in hits.iter().enumerate() {
        let freq = *count as f64 / RUNS as f64;
        assert!(
            (freq - expected).abs() < 0.04,
            "item {item} included {freq:.3} of the time, expected {expected:.3}"
        );
    }
}
