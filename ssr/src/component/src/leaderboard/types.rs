use std::sync::Arc;

use leptos::prelude::*;
use utils::table::ColumnDef;

type HeaderFn = Arc<dyn Fn() -> AnyView + Send + Sync>;
type CellFn<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// Column as the table renders it: the engine definition plus optional
/// header and cell views. Without them the header shows the column's header
/// text and the cell shows the accessor value.
pub struct TableColumn<T> {
    pub def: ColumnDef<T>,
    header: Option<HeaderFn>,
    cell: Option<CellFn<T>>,
}

impl<T> TableColumn<T> {
    pub fn new(def: ColumnDef<T>) -> Self {
        Self {
            def,
            header: None,
            cell: None,
        }
    }

    pub fn with_header<V>(mut self, header: impl Fn() -> V + Send + Sync + 'static) -> Self
    where
        V: IntoView + 'static,
    {
        self.header = Some(Arc::new(move || header().into_any()));
        self
    }

    pub fn with_cell<V>(mut self, cell: impl Fn(&T) -> V + Send + Sync + 'static) -> Self
    where
        V: IntoView + 'static,
    {
        self.cell = Some(Arc::new(move |row| cell(row).into_any()));
        self
    }

    pub fn render_header(&self) -> AnyView {
        match &self.header {
            Some(header) => header(),
            None => self.def.header.clone().into_any(),
        }
    }

    pub fn render_cell(&self, row: &T) -> AnyView {
        match &self.cell {
            Some(cell) => cell(row),
            None => self.def.value(row).to_string().into_any(),
        }
    }
}

impl<T> From<ColumnDef<T>> for TableColumn<T> {
    fn from(def: ColumnDef<T>) -> Self {
        Self::new(def)
    }
}

impl<T> Clone for TableColumn<T> {
    fn clone(&self) -> Self {
        Self {
            def: self.def.clone(),
            header: self.header.clone(),
            cell: self.cell.clone(),
        }
    }
}
