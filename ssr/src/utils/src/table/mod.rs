//! Headless table engine: columns, global filtering, sorting and pagination
//! over caller-owned rows. Rows are never copied, the row model only carries
//! indices into the caller's slice.

mod cell;
mod column;
mod filter;
mod pagination;
mod row_model;
mod sort;

pub use cell::CellValue;
pub use column::ColumnDef;
pub use filter::filter_rows;
pub use pagination::{page_index_from_input, PageSize, PageSizeError, PaginationState};
pub use row_model::{build_row_model, RowModel};
pub use sort::{sort_rows, ColumnSort, SortDirection, SortingState};
