//! Fixed-size paging over the people collection.
//!
//! Pages are 1-based and hold [`PAGE_SIZE`] records. The query value is
//! never rejected: absent, empty, non-numeric, zero and negative values all
//! mean page 1, and a page past the end is simply empty.

use core::num::{IntErrorKind, NonZeroUsize};
use core::ops::Range;

/// Number of records per page.
pub const PAGE_SIZE: usize = 10;

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Page(NonZeroUsize);

impl Page {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Page `number`, with `0` clamped to the first page.
    pub const fn new(number: usize) -> Self {
        match NonZeroUsize::new(number) {
            Some(number) => Self(number),
            None => Self::FIRST,
        }
    }

    /// Interpret a raw `page` query value.
    ///
    /// Numbers too large for `usize` saturate, which always yields an empty
    /// window.
    pub fn from_query(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::FIRST;
        };
        match raw.parse::<usize>() {
            Ok(number) => Self::new(number),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Self(NonZeroUsize::MAX),
            Err(_) => Self::FIRST,
        }
    }

    /// The 1-based page number.
    pub const fn number(self) -> usize {
        self.0.get()
    }

    /// Index range of this page within a collection of `total` records.
    ///
    /// Both ends are clipped to `total`.
    pub fn window(self, total: usize) -> Range<usize> {
        let number = self.number();
        let start = number.saturating_sub(1).saturating_mul(PAGE_SIZE).min(total);
        let end = number.saturating_mul(PAGE_SIZE).min(total);
        start..end
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::FIRST
    }
}

/// The records on `page`. Out-of-range pages yield an empty slice.
pub fn paginate<T>(items: &[T], page: Page) -> &[T] {
    items.get(page.window(items.len())).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_garbage_values_mean_first_page() {
        for raw in [None, Some(""), Some("   "), Some("abc"), Some("2.5"), Some("1e3")] {
            assert_eq!(Page::from_query(raw), Page::FIRST, "{raw:?}");
        }
    }

    #[test]
    fn zero_and_negative_clamp_to_first_page() {
        assert_eq!(Page::from_query(Some("0")), Page::FIRST);
        assert_eq!(Page::from_query(Some("-1")), Page::FIRST);
        assert_eq!(Page::from_query(Some("-40")), Page::FIRST);
        assert_eq!(Page::new(0), Page::FIRST);
    }

    #[test]
    fn numeric_values_parse() {
        assert_eq!(Page::from_query(Some("3")).number(), 3);
        assert_eq!(Page::from_query(Some(" 2 ")).number(), 2);
        assert_eq!(Page::from_query(Some("007")).number(), 7);
    }

    #[test]
    fn overflowing_value_is_past_the_end() {
        let page = Page::from_query(Some("99999999999999999999999999"));
        assert_eq!(page.number(), usize::MAX);
        assert!(page.window(26).is_empty());
    }

    #[test]
    fn window_is_clipped_to_total() {
        assert_eq!(Page::new(1).window(26), 0..10);
        assert_eq!(Page::new(3).window(26), 20..26);
        assert_eq!(Page::new(4).window(26), 26..26);
        assert_eq!(Page::new(1).window(0), 0..0);
    }

    #[test]
    fn page_sizes_for_twenty_six_records() {
        let items: Vec<u32> = (0..26).collect();
        assert_eq!(paginate(&items, Page::new(1)).len(), 10);
        assert_eq!(paginate(&items, Page::new(2)).len(), 10);
        assert_eq!(paginate(&items, Page::new(3)), &[20, 21, 22, 23, 24, 25]);
        assert!(paginate(&items, Page::new(4)).is_empty());
    }

    #[test]
    fn result_length_formula_holds() {
        for total in [0_usize, 1, 9, 10, 11, 26, 100] {
            let items = vec![(); total];
            for number in 1..=12 {
                let expected = PAGE_SIZE.min(total.saturating_sub((number - 1) * PAGE_SIZE));
                assert_eq!(
                    paginate(&items, Page::new(number)).len(),
                    expected,
                    "total={total} page={number}"
                );
            }
        }
    }
}
