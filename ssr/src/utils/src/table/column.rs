use std::{fmt, sync::Arc};

use super::CellValue;

type Accessor<T> = Arc<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Describes one column: how to read its value from a row and whether the
/// value takes part in sorting and global filtering.
pub struct ColumnDef<T> {
    pub id: String,
    pub header: String,
    accessor: Accessor<T>,
    pub enable_sorting: bool,
    pub enable_global_filter: bool,
}

impl<T> ColumnDef<T> {
    pub fn new<V>(
        id: impl Into<String>,
        accessor: impl Fn(&T) -> V + Send + Sync + 'static,
    ) -> Self
    where
        V: Into<CellValue>,
    {
        let id = id.into();
        Self {
            header: id.clone(),
            id,
            accessor: Arc::new(move |row| accessor(row).into()),
            enable_sorting: true,
            enable_global_filter: true,
        }
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    pub fn sortable(mut self, enable: bool) -> Self {
        self.enable_sorting = enable;
        self
    }

    pub fn filterable(mut self, enable: bool) -> Self {
        self.enable_global_filter = enable;
        self
    }

    pub fn value(&self, row: &T) -> CellValue {
        (self.accessor)(row)
    }
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            header: self.header.clone(),
            accessor: self.accessor.clone(),
            enable_sorting: self.enable_sorting,
            enable_global_filter: self.enable_global_filter,
        }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("id", &self.id)
            .field("header", &self.header)
            .field("enable_sorting", &self.enable_sorting)
            .field("enable_global_filter", &self.enable_global_filter)
            .finish_non_exhaustive()
    }
}
