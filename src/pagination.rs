//! Page/frame count tracking with identity generations.
//!
//! Adapters resolve their page or frame count asynchronously. Every report
//! carries the [`Generation`] the adapter was mounted with, so a late report
//! for a document that has since been replaced is recognised and dropped.

use tracing::debug;

/// Identity tag of the currently loaded document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Raw counter value.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    #[inline]
    fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }
}

/// Holds the page/frame count reported for the current generation.
///
/// ## Example
///
/// ```rust
/// use docview_core::PageCountTracker;
///
/// let mut pages = PageCountTracker::new();
/// let first = pages.reset();
/// let second = pages.reset(); // document replaced
///
/// assert!(!pages.report(first, 3)); // stale
/// assert!(pages.report(second, 12));
/// assert_eq!(pages.count(), Some(12));
/// assert_eq!(pages.label().as_deref(), Some("12 pages"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct PageCountTracker {
    generation: Generation,
    count: Option<usize>,
}

impl PageCountTracker {
    /// Create an empty tracker at the initial generation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the count and start a new generation.
    pub fn reset(&mut self) -> Generation {
        self.generation = self.generation.next();
        self.count = None;
        self.generation
    }

    /// Store a count reported by an adapter.
    ///
    /// Only the first report for the current generation is kept; stale and
    /// duplicate reports are dropped. Returns true if the count was stored.
    pub fn report(&mut self, generation: Generation, count: usize) -> bool {
        if generation != self.generation {
            debug!(
                stale = generation.get(),
                current = self.generation.get(),
                count,
                "dropping page count for superseded document"
            );
            return false;
        }
        if self.count.is_some() {
            debug!(generation = generation.get(), count, "dropping duplicate page count");
            return false;
        }
        self.count = Some(count);
        true
    }

    /// Current generation.
    #[inline]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Reported count, if any.
    #[inline]
    pub fn count(&self) -> Option<usize> {
        self.count
    }

    /// Readout text such as `"12 pages"`. A zero count has no readout.
    pub fn label(&self) -> Option<String> {
        self.count
            .filter(|&n| n > 0)
            .map(|n| format!("{} pages", n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_empty() {
        let pages = PageCountTracker::new();
        assert_eq!(pages.count(), None);
        assert_eq!(pages.label(), None);
    }

    #[test]
    fn reset_clears_and_advances() {
        let mut pages = PageCountTracker::new();
        let gen = pages.reset();
        assert!(pages.report(gen, 5));

        let next = pages.reset();
        assert!(next > gen);
        assert_eq!(pages.count(), None);
    }

    #[test]
    fn stale_report_is_ignored() {
        let mut pages = PageCountTracker::new();
        let old = pages.reset();
        let current = pages.reset();
        assert!(pages.report(current, 4));

        assert!(!pages.report(old, 99));
        assert_eq!(pages.count(), Some(4));
    }

    #[test]
    fn count_is_written_once() {
        let mut pages = PageCountTracker::new();
        let gen = pages.reset();
        assert!(pages.report(gen, 7));
        assert!(!pages.report(gen, 8));
        assert_eq!(pages.count(), Some(7));
    }

    #[test]
    fn zero_count_has_no_label() {
        let mut pages = PageCountTracker::new();
        let gen = pages.reset();
        pages.report(gen, 0);
        assert_eq!(pages.count(), Some(0));
        assert_eq!(pages.label(), None);
    }

    proptest! {
        #[test]
        fn superseded_reports_never_land(resets in 2usize..20, stale_at in 0usize..19, count in 1usize..1000) {
            let mut pages = PageCountTracker::new();
            let generations: Vec<_> = (0..resets).map(|_| pages.reset()).collect();
            let stale = generations[stale_at % (resets - 1)];

            prop_assert!(!pages.report(stale, count));
            prop_assert_eq!(pages.count(), None);
        }
    }
}
