use rand::{rngs::StdRng, Rng, SeedableRng};
use std::cmp::Ordering;

const SEED: u64 = 0x5eed;

/// A value carrying the position it had before sorting.
///
/// Only `value` takes part in comparisons, so a stable sort must keep the tags of equal values
/// in increasing order.
#[derive(Debug, Clone, Copy)]
pub struct Tagged {
    pub value: i32,
    pub tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

/// Tags every value with its index.
pub fn tagged(values: &[i32]) -> Vec<Tagged> {
    values
        .iter()
        .enumerate()
        .map(|(tag, &value)| Tagged { value, tag })
        .collect()
}

/// True if equal values kept their original relative order.
pub fn is_stable(sorted: &[Tagged]) -> bool {
    sorted
        .windows(2)
        .all(|w| w[0].value != w[1].value || w[0].tag < w[1].tag)
}

pub fn is_sorted<T: PartialOrd>(slice: &[T]) -> bool {
    slice.windows(2).all(|w| w[0] <= w[1])
}

/// True if both slices hold the same elements with the same multiplicities.
pub fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}

/// Reproducible random values in `low..=high`.
pub fn random_values(seed: u64, len: usize, low: i32, high: i32) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(low..=high)).collect()
}

/// Reproducible random floats in `[0, 1)`.
pub fn random_unit_floats(seed: u64, len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen::<f64>()).collect()
}

/// The input shapes every sorter is run against.
pub struct TestInputs {
    pub random: Vec<i32>,
    pub negatives: Vec<i32>,
    pub sorted: Vec<i32>,
    pub reversed: Vec<i32>,
    pub all_equal: Vec<i32>,
    pub few_unique: Vec<i32>,
}

impl TestInputs {
    pub fn new() -> Self {
        let random = random_values(SEED, 500, 0, 1000);
        let negatives = random_values(SEED + 1, 500, -1000, 1000);

        let mut sorted = random.clone();
        sorted.sort();
        let mut reversed = sorted.clone();
        reversed.reverse();

        TestInputs {
            random,
            negatives,
            sorted,
            reversed,
            all_equal: vec![7; 200],
            few_unique: random_values(SEED + 2, 500, 0, 3),
        }
    }

    /// Every input with a short name, for assertion messages.
    pub fn all(&self) -> [(&'static str, &[i32]); 6] {
        [
            ("random", self.random.as_slice()),
            ("negatives", self.negatives.as_slice()),
            ("sorted", self.sorted.as_slice()),
            ("reversed", self.reversed.as_slice()),
            ("all equal", self.all_equal.as_slice()),
            ("few unique", self.few_unique.as_slice()),
        ]
    }
}

impl Default for TestInputs {
    fn default() -> Self {
        Self::new()
    }
}
