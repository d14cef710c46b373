use crate::constants::carousel::PAGE_SIZE;
use std::ops::Range;

/// Page position of the carousel over a sequence of `len` models.
///
/// `page_offset` is always a multiple of `page_size` and never passes the
/// start of the last page. Navigation past either end is a no-op, not a
/// wrap-around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    page_offset: usize,
    page_size: usize,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl CarouselState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_offset: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page_offset(&self) -> usize {
        self.page_offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn can_advance(&self, len: usize) -> bool {
        self.page_offset + self.page_size < len
    }

    pub fn can_retreat(&self) -> bool {
        self.page_offset >= self.page_size
    }

    /// Move to the next page. Returns whether the offset changed.
    pub fn next(&mut self, len: usize) -> bool {
        if !self.can_advance(len) {
            return false;
        }
        self.page_offset += self.page_size;
        debug_assert!(self.page_offset <= self.max_offset(len));
        true
    }

    /// Move to the previous page. Returns whether the offset changed.
    pub fn previous(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        self.page_offset -= self.page_size;
        true
    }

    /// Indices of the models on the current page.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let end = (self.page_offset + self.page_size).min(len);
        self.page_offset.min(end)..end
    }

    /// Start of the last page, or 0 when there are no models.
    pub fn max_offset(&self, len: usize) -> usize {
        match len {
            0 => 0,
            _ => (len - 1) / self.page_size * self.page_size,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_offset / self.page_size
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_models_page_forward_and_back() {
        let len = 6;
        let mut state = CarouselState::default();
        assert_eq!(state.visible_range(len), 0..3);

        assert!(state.next(len));
        assert_eq!(state.visible_range(len), 3..6);

        assert!(!state.next(len));
        assert_eq!(state.visible_range(len), 3..6);

        assert!(state.previous());
        assert_eq!(state.visible_range(len), 0..3);

        assert!(!state.previous());
        assert_eq!(state.page_offset(), 0);
    }

    #[test]
    fn last_page_may_be_short() {
        let mut state = CarouselState::default();
        assert!(state.next(7));
        assert!(state.next(7));
        assert_eq!(state.visible_range(7), 6..7);
        assert!(!state.next(7));
        assert_eq!(state.page_index(), 2);
        assert_eq!(state.page_count(7), 3);
    }

    #[test]
    fn empty_carousel_never_moves() {
        let mut state = CarouselState::default();
        assert!(!state.next(0));
        assert!(!state.previous());
        assert_eq!(state.visible_range(0), 0..0);
        assert_eq!(state.max_offset(0), 0);
        assert_eq!(state.page_count(0), 0);
    }

    #[test]
    fn offset_stays_a_bounded_multiple_of_page_size() {
        // Deterministic pseudo-random walk over next/previous for many lengths.
        for len in 0..20 {
            let mut state = CarouselState::default();
            let mut seed: u32 = 0x9e37_79b9 ^ len as u32;

            for _ in 0..200 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;

                let before = state;
                let moved = if seed % 2 == 0 {
                    state.next(len)
                } else {
                    state.previous()
                };

                assert_eq!(moved, before != state);
                assert_eq!(state.page_offset() % state.page_size(), 0);
                assert!(state.page_offset() <= state.max_offset(len));

                let visible = state.visible_range(len).len();
                assert_eq!(visible, 3.min(len - state.page_offset()));
            }
        }
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let state = CarouselState::new(0);
        assert_eq!(state.page_size(), 1);
    }
}
