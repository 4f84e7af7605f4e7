//! Configuration for buffer growth behavior.
//!
//! This module provides the arithmetic that decides how large an allocation
//! becomes when a buffer grows or shrinks:
//!
//! - [`GrowthPolicy`] - Doubling growth capped by a cache bound
//!
//! The bound of a [`GrowableBuffer`](crate::GrowableBuffer) is fixed by its
//! `CACHE` const parameter; the policy is exposed so callers can predict
//! capacities.
//!
//! # Example
//!
//! ```
//! use growbuf::GrowthPolicy;
//!
//! // No cache: every allocation is an exact fit
//! let exact = GrowthPolicy::exact();
//! assert_eq!(exact.target(10, 11), 11);
//!
//! // With a cache bound growth doubles, but never more than
//! // `old_size + cache_bound`
//! let cached = GrowthPolicy::new(64);
//! assert_eq!(cached.target(10, 11), 22);
//! assert_eq!(cached.target(1000, 1001), 1064);
//! ```

/// Default cache bound (no speculative over-allocation).
pub const DEFAULT_CACHE_BOUND: usize = 0;

/// Growth arithmetic for buffer allocations.
///
/// For a buffer currently holding `old_size` elements that is asked to hold
/// `requested` elements, the allocation target is:
///
/// ```text
/// max(requested, min(2 * requested, old_size + cache_bound))
/// ```
///
/// Doubling amortizes repeated small appends, and the cache bound caps how
/// far past the previous logical size an allocation may reach. A bound of 0
/// yields exact-fit allocations on every grow. The result is never smaller
/// than `requested`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    /// Maximum over-allocation beyond the previous logical size.
    cache_bound: usize,
}

impl GrowthPolicy {
    /// Creates a policy with the given cache bound.
    ///
    /// # Example
    ///
    /// ```
    /// use growbuf::GrowthPolicy;
    ///
    /// let policy = GrowthPolicy::new(4096);
    /// assert_eq!(policy.cache_bound(), 4096);
    /// ```
    pub const fn new(cache_bound: usize) -> Self {
        Self { cache_bound }
    }

    /// A policy that never over-allocates.
    pub const fn exact() -> Self {
        Self { cache_bound: 0 }
    }

    /// Returns the cache bound.
    pub const fn cache_bound(&self) -> usize {
        self.cache_bound
    }

    /// Returns true if every allocation is an exact fit.
    pub const fn is_exact(&self) -> bool {
        self.cache_bound == 0
    }

    /// Computes the allocation target for a resize from `old_size` to
    /// `requested` elements.
    ///
    /// Arithmetic saturates, so huge requests produce huge targets which the
    /// allocator then rejects, instead of wrapping around.
    pub const fn target(&self, old_size: usize, requested: usize) -> usize {
        let doubled = requested.saturating_mul(2);
        let capped = old_size.saturating_add(self.cache_bound);
        let speculative = if doubled < capped { doubled } else { capped };

        if requested > speculative {
            requested
        } else {
            speculative
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_BOUND)
    }
}
