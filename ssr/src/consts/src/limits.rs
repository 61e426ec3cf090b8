// Pagination limits
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];
pub const DEFAULT_PAGE_SIZE: usize = 10;

// Search box debounce, in milliseconds
pub const SEARCH_DEBOUNCE_MS: f64 = 300.0;
