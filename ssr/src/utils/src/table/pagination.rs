use std::{fmt, ops::Range, str::FromStr};

use consts::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};

/// Rows per page, restricted to the sizes the page-size selector offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageSize(usize);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageSizeError {
    #[error("unsupported page size: {0}")]
    Unsupported(usize),
    #[error("page size is not a number: {0:?}")]
    NotANumber(String),
}

impl PageSize {
    pub fn new(size: usize) -> Result<Self, PageSizeError> {
        if PAGE_SIZE_OPTIONS.contains(&size) {
            Ok(Self(size))
        } else {
            Err(PageSizeError::Unsupported(size))
        }
    }

    pub fn options() -> impl Iterator<Item = PageSize> {
        PAGE_SIZE_OPTIONS.into_iter().map(PageSize)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageSize {
    type Err = PageSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let size = s
            .trim()
            .parse::<usize>()
            .map_err(|_| PageSizeError::NotANumber(s.to_string()))?;
        Self::new(size)
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PageSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

/// Current page and page size. The stored index may run past the end after
/// the row count shrinks, every read clamps it against the row count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: PageSize,
}

impl PaginationState {
    pub fn page_count(&self, row_count: usize) -> usize {
        row_count.div_ceil(self.page_size.get())
    }

    pub fn clamped_index(&self, row_count: usize) -> usize {
        self.page_index
            .min(self.page_count(row_count).saturating_sub(1))
    }

    pub fn set_page_index(&mut self, page_index: usize, row_count: usize) {
        self.page_index = page_index.min(self.page_count(row_count).saturating_sub(1));
    }

    /// Changes the page size while keeping the first visible row on screen.
    pub fn set_page_size(&mut self, page_size: PageSize) {
        let top_row = self.page_index * self.page_size.get();
        self.page_size = page_size;
        self.page_index = top_row / page_size.get();
    }

    pub fn can_previous_page(&self, row_count: usize) -> bool {
        self.clamped_index(row_count) > 0
    }

    pub fn can_next_page(&self, row_count: usize) -> bool {
        self.clamped_index(row_count) + 1 < self.page_count(row_count)
    }

    /// Positions within the filtered rows shown on the current page.
    pub fn page_range(&self, row_count: usize) -> Range<usize> {
        let start = self.clamped_index(row_count) * self.page_size.get();
        let end = (start + self.page_size.get()).min(row_count);
        start.min(end)..end
    }
}

/// Maps the 1-based "go to page" input to a page index. Blank, non-numeric
/// and sub-1 input all land on the first page.
pub fn page_index_from_input(input: &str) -> usize {
    match input.trim().parse::<f64>() {
        Ok(page) if page.is_finite() && page >= 1.0 => page.floor() as usize - 1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn page_size_only_accepts_selector_values() {
        assert_eq!(PageSize::new(30).map(PageSize::get), Ok(30));
        assert_eq!(PageSize::new(25), Err(PageSizeError::Unsupported(25)));
        assert_eq!(
            "ten".parse::<PageSize>(),
            Err(PageSizeError::NotANumber("ten".to_string()))
        );
        assert_eq!(PageSize::default().get(), 10);
        assert_eq!(
            PageSize::options().map(PageSize::get).collect::<Vec<_>>(),
            vec![10, 20, 30, 40, 50]
        );
    }

    #[test]
    fn page_count_rounds_up() {
        let state = PaginationState::default();
        assert_eq!(state.page_count(0), 0);
        assert_eq!(state.page_count(10), 1);
        assert_eq!(state.page_count(11), 2);
    }

    #[test]
    fn last_page_is_partial() {
        let mut state = PaginationState::default();
        state.set_page_index(2, 25);
        assert_eq!(state.page_range(25), 20..25);
        assert!(state.can_previous_page(25));
        assert!(!state.can_next_page(25));
    }

    #[test]
    fn set_page_index_clamps_to_last_page() {
        let mut state = PaginationState::default();
        state.set_page_index(99, 35);
        assert_eq!(state.page_index, 3);
        state.set_page_index(4, 0);
        assert_eq!(state.page_index, 0);
    }

    #[test]
    fn reads_clamp_a_stale_index() {
        let state = PaginationState {
            page_index: 5,
            page_size: PageSize::default(),
        };
        assert_eq!(state.page_range(12), 10..12);
        assert_eq!(state.page_range(0), 0..0);
        assert!(!state.can_next_page(12));
    }

    #[test]
    fn page_size_change_keeps_top_row_visible() {
        let mut state = PaginationState::default();
        state.set_page_index(4, 100);
        state.set_page_size(PageSize::new(30).unwrap());
        assert_eq!(state.page_index, 1);
        assert_eq!(state.page_range(100), 30..60);
    }

    #[test]
    fn jump_input_is_one_based() {
        assert_eq!(page_index_from_input("2"), 1);
        assert_eq!(page_index_from_input(" 3 "), 2);
        assert_eq!(page_index_from_input("1"), 0);
        assert_eq!(page_index_from_input("0"), 0);
        assert_eq!(page_index_from_input("-4"), 0);
        assert_eq!(page_index_from_input(""), 0);
        assert_eq!(page_index_from_input("abc"), 0);
    }

    #[test]
    fn first_page_has_no_previous() {
        let state = PaginationState::default();
        assert!(!state.can_previous_page(50));
        assert!(state.can_next_page(50));
        assert!(!state.can_next_page(0));
    }
}
