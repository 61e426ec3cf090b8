mod limits;

pub use limits::*;

pub const DEFAULT_NO_DATA_MESSAGE: &str = "Oops! No Data to Display";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const SEARCH_PLACEHOLDER: &str = "Search...";

pub const SORT_ASC_GLYPH: &str = " 🔼";
pub const SORT_DESC_GLYPH: &str = " 🔽";
