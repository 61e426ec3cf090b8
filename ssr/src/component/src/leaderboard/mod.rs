pub mod pagination;
pub mod period_selector;
pub mod search_bar;
pub mod table;
pub mod table_header;
pub mod types;

pub use table::{Table, TableComponent};
pub use types::TableColumn;
