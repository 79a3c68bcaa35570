use rand::Rng;

/// Fixed-capacity uniform sample over a stream of unknown length (algorithm R).
///
/// After `n >= capacity` offers, every offered item is retained with
/// probability `capacity / n`. Retained items stay in their slot until
/// replaced, so the order is insertion order with overwrites, not a ranking.
///
/// The generator is supplied by the caller; a seeded generator makes the
/// sample reproducible.
pub struct Reservoir<T, R> {
    capacity: usize,
    seen: u64,
    items: Vec<T>,
    rng: R,
}

impl<T, R: Rng> Reservoir<T, R> {
    pub fn new(capacity: usize, rng: R) -> Self {
        Self {
            capacity,
            seen: 0,
            items: Vec::with_capacity(capacity),
            rng,
        }
    }

    pub fn offer(&mut self, item: T) {
        self.seen += 1;

        if self.items.len() < self.capacity {
            self.items.push(item);
            return;
        }

        // j in [1, seen]; keep when it lands on one of the slots
        let j = self.rng.random_range(1..=self.seen);
        if j <= self.capacity as u64 {
            self.items[(j - 1) as usize] = item;
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items offered so far.
    pub fn seen(&self) -> u64 {
        self.seen
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}
