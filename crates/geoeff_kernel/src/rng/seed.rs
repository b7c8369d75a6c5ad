//! Explicit seed counter for decorrelated evaluations.

/// Distance between the seeds handed to consecutive evaluations.
///
/// One evaluation consumes two seeds: `s` for the source positions and
/// `s + 1` for the emission directions. A stride of two keeps the emission
/// seed of one evaluation from reappearing as the source seed of the next.
pub const SEED_STRIDE: u64 = 2;

/// Monotonic seed counter.
///
/// Owned by whoever drives a sequence of evaluations (normally the sweep
/// driver) and passed by value into each evaluation. Arithmetic wraps, so any
/// `u64` is a valid starting point.
///
/// The counter steps once per distance, by [`SEED_STRIDE`], rather than once
/// per estimator call. Each call uses both `s` and `s + 1`, and the outer and
/// inner discs of an annular detector share the seed of their distance.
///
/// # Examples
///
/// ```rust
/// use geoeff_kernel::rng::{SeedSequence, SEED_STRIDE};
///
/// let mut seeds = SeedSequence::new(100);
/// assert_eq!(seeds.advance(), 100);
/// assert_eq!(seeds.advance(), 100 + SEED_STRIDE);
/// assert_eq!(seeds.current(), 100 + 2 * SEED_STRIDE);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeedSequence {
    next: u64,
}

impl SeedSequence {
    /// Creates a sequence starting at `initial`.
    #[inline]
    pub fn new(initial: u64) -> Self {
        Self { next: initial }
    }

    /// Returns the seed the next call to [`advance`](Self::advance) will hand out.
    #[inline]
    pub fn current(&self) -> u64 {
        self.next
    }

    /// Returns the current seed and moves the counter forward.
    #[inline]
    pub fn advance(&mut self) -> u64 {
        let seed = self.next;
        self.next = self.next.wrapping_add(SEED_STRIDE);
        seed
    }

    /// Returns the seeds for the next `count` evaluations without consuming them.
    ///
    /// Used to hand out seeds up front when evaluations run in parallel.
    pub fn peek_many(&self, count: usize) -> Vec<u64> {
        let mut copy = *self;
        (0..count).map(|_| copy.advance()).collect()
    }
}
