//! TTL Module
//!
//! Signed lifetime requested for a new entry.

use std::time::{Duration, Instant};

use crate::cache::{DEFAULT_TTL, MAX_TTL};

// == Ttl ==
/// Lifetime requested for an entry at insertion time.
///
/// A negative lifetime is representable: the entry is inserted already past
/// its deadline and the post-insert sweep removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ttl {
    /// No lifetime given; [`DEFAULT_TTL`] applies
    #[default]
    Default,
    /// Expires this long after insertion
    After(Duration),
    /// Deadline passed this long before insertion
    Elapsed(Duration),
}

impl Ttl {
    // == Deadline ==
    /// Resolves the lifetime to an absolute deadline as of `now`.
    ///
    /// Zero in either direction falls back to [`DEFAULT_TTL`], and forward
    /// lifetimes are clamped to [`MAX_TTL`]. Returns `None` for an elapsed
    /// lifetime whose deadline is not representable on the monotonic clock;
    /// such an entry is dead on arrival.
    pub fn deadline(self, now: Instant) -> Option<Instant> {
        match self {
            Ttl::After(ttl) if !ttl.is_zero() => Some(now + ttl.min(MAX_TTL)),
            Ttl::Elapsed(ago) if !ago.is_zero() => now.checked_sub(ago),
            _ => Some(now + DEFAULT_TTL),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_default_and_zero_use_default_ttl() {
        let now = Instant::now();
        let expected = Some(now + DEFAULT_TTL);

        assert_eq!(Ttl::Default.deadline(now), expected);
        assert_eq!(Ttl::After(Duration::ZERO).deadline(now), expected);
        assert_eq!(Ttl::Elapsed(Duration::ZERO).deadline(now), expected);
    }

    #[test]
    fn test_after_is_clamped() {
        let now = Instant::now();

        assert_eq!(Ttl::After(5 * SECOND).deadline(now), Some(now + 5 * SECOND));
        assert_eq!(Ttl::After(Duration::MAX).deadline(now), Some(now + MAX_TTL));
    }

    #[test]
    fn test_elapsed_deadline_is_in_the_past() {
        let now = Instant::now() + 10 * SECOND;

        assert_eq!(Ttl::Elapsed(SECOND).deadline(now), Some(now - SECOND));
        assert_eq!(Ttl::Elapsed(Duration::MAX).deadline(now), None);
    }
}
