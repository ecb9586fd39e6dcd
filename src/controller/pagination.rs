//! Page window arithmetic shared by every list view.

/// Page sizes offered by the pallet list
pub const PALLET_PAGE_SIZES: &[u32] = &[5, 10, 20, 50];

/// Page sizes offered by the pack list and the overview report
pub const PACK_PAGE_SIZES: &[u32] = &[10, 20, 50];

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// `(limit, offset)` window over a collection of `total` items.
///
/// Invariant: `offset` never points past the start of the last page once a
/// total is known (see [`PageWindow::set_total`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    sizes: &'static [u32],
    limit: u32,
    offset: u64,
    total: u64,
}

impl PageWindow {
    /// Create a window using `default_limit` if it is one of `sizes`, else the first size
    pub fn new(sizes: &'static [u32], default_limit: u32) -> Self {
        let limit = if sizes.contains(&default_limit) {
            default_limit
        } else {
            sizes.first().copied().unwrap_or(DEFAULT_PAGE_SIZE)
        };
        Self {
            sizes,
            limit: limit.max(1),
            offset: 0,
            total: 0,
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn sizes(&self) -> &'static [u32] {
        self.sizes
    }

    /// 1-based page number
    pub fn page(&self) -> u64 {
        self.offset / u64::from(self.limit) + 1
    }

    /// Number of pages, at least 1 even for an empty collection
    pub fn page_count(&self) -> u64 {
        page_count(self.total, self.limit)
    }

    pub fn has_prev(&self) -> bool {
        self.page() > 1
    }

    pub fn has_next(&self) -> bool {
        self.page() < self.page_count()
    }

    /// Start offset of the last page
    pub fn last_page_start(&self) -> u64 {
        (self.page_count() - 1) * u64::from(self.limit)
    }

    pub fn prev_offset(&self) -> u64 {
        self.offset.saturating_sub(u64::from(self.limit))
    }

    pub fn next_offset(&self) -> u64 {
        self.last_page_start().min(self.offset + u64::from(self.limit))
    }

    /// Step back one page. Returns whether the window moved.
    pub fn go_prev(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.move_to(self.prev_offset())
    }

    /// Step forward one page. Returns whether the window moved.
    pub fn go_next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.move_to(self.next_offset())
    }

    /// Back to the first page. Returns whether the window moved.
    pub fn reset(&mut self) -> bool {
        self.move_to(0)
    }

    fn move_to(&mut self, offset: u64) -> bool {
        let changed = self.offset != offset;
        self.offset = offset;
        changed
    }

    /// Change the page size. Resets to the first page; returns whether anything changed.
    ///
    /// Sizes outside the offered choices are rejected.
    pub fn set_limit(&mut self, limit: u32) -> bool {
        if !self.sizes.contains(&limit) {
            return false;
        }
        let changed = self.limit != limit || self.offset != 0;
        self.limit = limit;
        self.offset = 0;
        changed
    }

    /// Switch to the next offered page size, wrapping around
    pub fn cycle_limit(&mut self) -> bool {
        let next = match self.sizes.iter().position(|s| *s == self.limit) {
            Some(i) => self.sizes[(i + 1) % self.sizes.len()],
            None => self.sizes.first().copied().unwrap_or(DEFAULT_PAGE_SIZE),
        };
        self.set_limit(next)
    }

    /// Record a new total. If the offset now lies beyond the last page it is
    /// clamped to that page's start and `true` is returned so the caller can
    /// refetch. Clamping only ever decreases the offset.
    pub fn set_total(&mut self, total: u64) -> bool {
        self.total = total;
        let last = self.last_page_start();
        if self.offset > last {
            self.offset = last;
            true
        } else {
            false
        }
    }
}

/// `max(1, ceil(total / limit))`
pub fn page_count(total: u64, limit: u32) -> u64 {
    let limit = u64::from(limit.max(1));
    total.div_ceil(limit).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(limit: u32) -> PageWindow {
        PageWindow::new(PALLET_PAGE_SIZES, limit)
    }

    #[test]
    fn test_page_count_formula() {
        for limit in [1u32, 5, 10, 20, 50] {
            for total in 0u64..=230 {
                let expected = std::cmp::max(1, total.div_ceil(u64::from(limit)));
                assert_eq!(page_count(total, limit), expected, "total={total} limit={limit}");
            }
        }
        assert_eq!(page_count(0, 20), 1);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
    }

    #[test]
    fn test_default_limit_must_be_offered() {
        assert_eq!(PageWindow::new(PACK_PAGE_SIZES, 20).limit(), 20);
        assert_eq!(PageWindow::new(PACK_PAGE_SIZES, 5).limit(), 10);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut w = window(10);
        w.set_total(25);
        assert_eq!(w.page(), 1);
        assert!(!w.has_prev());
        assert!(!w.go_prev());

        assert!(w.go_next());
        assert_eq!(w.offset(), 10);
        assert!(w.go_next());
        assert_eq!(w.offset(), 20);
        assert_eq!(w.page(), 3);
        assert!(!w.has_next());
        assert!(!w.go_next());

        assert!(w.go_prev());
        assert_eq!(w.offset(), 10);
    }

    #[test]
    fn test_set_limit_resets_offset() {
        let mut w = window(5);
        w.set_total(100);
        w.go_next();
        w.go_next();
        assert_eq!(w.offset(), 10);

        assert!(w.set_limit(20));
        assert_eq!(w.offset(), 0);
        assert_eq!(w.limit(), 20);
    }

    #[test]
    fn test_set_limit_rejects_unoffered_size() {
        let mut w = window(20);
        assert!(!w.set_limit(7));
        assert_eq!(w.limit(), 20);
    }

    #[test]
    fn test_cycle_limit_wraps() {
        let mut w = window(50);
        assert!(w.cycle_limit());
        assert_eq!(w.limit(), 5);
    }

    #[test]
    fn test_shrinking_total_clamps_once() {
        let mut w = window(10);
        w.set_total(50);
        while w.go_next() {}
        assert_eq!(w.offset(), 40);

        assert!(w.set_total(15));
        assert_eq!(w.offset(), 10);
        assert!(!w.set_total(15));
        assert_eq!(w.offset(), 10);
    }

    #[test]
    fn test_clamp_of_valid_offset_is_noop() {
        let mut w = window(10);
        w.set_total(50);
        w.go_next();
        assert!(!w.set_total(50));
        assert!(!w.set_total(11));
        assert_eq!(w.offset(), 10);
    }

    #[test]
    fn test_empty_total_clamps_to_zero() {
        let mut w = window(10);
        w.set_total(30);
        w.go_next();
        assert!(w.set_total(0));
        assert_eq!(w.offset(), 0);
        assert_eq!(w.page(), 1);
        assert_eq!(w.page_count(), 1);
    }

    #[test]
    fn test_page_within_bounds_after_clamp() {
        for limit in [5u32, 10, 20, 50] {
            let mut w = window(limit);
            w.set_total(500);
            for _ in 0..7 {
                w.go_next();
            }
            for total in [0u64, 1, 4, 5, 19, 33, 120, 499] {
                w.set_total(total);
                assert!(w.page() >= 1);
                assert!(w.page() <= w.page_count(), "limit={limit} total={total}");
            }
        }
    }
}
