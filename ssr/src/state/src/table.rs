use leptos::prelude::*;
use utils::table::{
    build_row_model, ColumnDef, PageSize, PaginationState, RowModel, SortDirection, SortingState,
};

/// Reactive table state for one mounted table.
///
/// Filter, sort and pagination live in signals; the row model is a memo over
/// them and the caller's `data` / `columns`, so it recomputes whenever any of
/// those change. A page index chosen before the latest `data` change is read
/// as the first page.
pub struct TableState<T: Send + Sync + 'static> {
    data: Signal<Vec<T>>,
    columns: Signal<Vec<ColumnDef<T>>>,
    pub global_filter: RwSignal<String>,
    pub sorting: RwSignal<SortingState>,
    pub pagination: RwSignal<PaginationState>,
    data_version: Memo<u64>,
    paged_at: RwSignal<u64>,
    row_model: Memo<RowModel>,
}

impl<T: Send + Sync + 'static> Clone for TableState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for TableState<T> {}

impl<T: Send + Sync + 'static> TableState<T> {
    pub fn new(data: Signal<Vec<T>>, columns: Signal<Vec<ColumnDef<T>>>) -> Self {
        let global_filter = RwSignal::new(String::new());
        let sorting = RwSignal::new(SortingState::default());
        let pagination = RwSignal::new(PaginationState::default());
        let data_version = Memo::new(move |prev: Option<&u64>| {
            data.track();
            prev.map_or(0, |v| v + 1)
        });
        // data version the stored page index was chosen against
        let paged_at = RwSignal::new(0);

        let row_model = Memo::new(move |_| {
            let filter = global_filter.get();
            let sorting = sorting.get();
            let mut pagination = pagination.get();
            if paged_at.get() != data_version.get() {
                pagination.page_index = 0;
            }
            data.with(|data| {
                columns.with(|columns| {
                    build_row_model(data, columns, &filter, &sorting, &pagination)
                })
            })
        });

        Self {
            data,
            columns,
            global_filter,
            sorting,
            pagination,
            data_version,
            paged_at,
            row_model,
        }
    }

    /// Drops a page index left over from before the latest data change.
    fn sync_data_version(&self) {
        let version = self.data_version.get_untracked();
        if self.paged_at.get_untracked() != version {
            log::debug!("table data changed, back to the first page");
            self.pagination.update(|p| p.page_index = 0);
            self.paged_at.set(version);
        }
    }

    pub fn row_model(&self) -> RowModel {
        self.row_model.get()
    }

    pub fn filtered_count(&self) -> usize {
        self.row_model.with(|m| m.filtered_count)
    }

    pub fn set_global_filter(&self, value: String) {
        if self.global_filter.with_untracked(|f| *f == value) {
            return;
        }
        log::debug!("table filter set to {value:?}");
        self.global_filter.set(value);
        self.reset_page_index();
    }

    pub fn can_sort(&self, column_id: &str) -> bool {
        self.columns
            .with_untracked(|cols| cols.iter().any(|c| c.id == column_id && c.enable_sorting))
    }

    /// Header click handler. `multi` adds the column to the existing sort
    /// instead of replacing it.
    pub fn toggle_sorting(&self, column_id: &str, multi: bool) {
        if !self.can_sort(column_id) {
            log::debug!("ignoring sort toggle on {column_id}");
            return;
        }
        self.sorting.update(|s| s.toggle(column_id, multi));
        log::debug!(
            "table sorting now {:?}",
            self.sorting.with_untracked(|s| s.clone())
        );
        self.reset_page_index();
    }

    pub fn sort_direction(&self, column_id: &str) -> Option<SortDirection> {
        self.sorting.with(|s| s.direction(column_id))
    }

    pub fn page_index(&self) -> usize {
        self.row_model.with(|m| m.page_index)
    }

    pub fn page_count(&self) -> usize {
        self.row_model.with(|m| m.page_count)
    }

    pub fn page_size(&self) -> PageSize {
        self.pagination.with(|p| p.page_size)
    }

    pub fn can_previous_page(&self) -> bool {
        self.row_model.with(|m| m.page_index > 0)
    }

    pub fn can_next_page(&self) -> bool {
        self.row_model.with(|m| m.page_index + 1 < m.page_count)
    }

    pub fn set_page_index(&self, page_index: usize) {
        self.sync_data_version();
        let row_count = self.row_model.with_untracked(|m| m.filtered_count);
        self.pagination
            .update(|p| p.set_page_index(page_index, row_count));
    }

    pub fn first_page(&self) {
        self.set_page_index(0);
    }

    pub fn previous_page(&self) {
        let current = self.row_model.with_untracked(|m| m.page_index);
        self.set_page_index(current.saturating_sub(1));
    }

    pub fn next_page(&self) {
        let current = self.row_model.with_untracked(|m| m.page_index);
        self.set_page_index(current + 1);
    }

    pub fn last_page(&self) {
        let count = self.row_model.with_untracked(|m| m.page_count);
        self.set_page_index(count.saturating_sub(1));
    }

    pub fn set_page_size(&self, page_size: PageSize) {
        log::debug!("table page size set to {page_size}");
        self.sync_data_version();
        self.pagination.update(|p| p.set_page_size(page_size));
    }

    pub fn reset_page_index(&self) {
        self.paged_at.set(self.data_version.get_untracked());
        self.pagination.update(|p| p.page_index = 0);
    }
}

impl<T: Clone + Send + Sync + 'static> TableState<T> {
    /// Rows on the current page, in display order.
    pub fn page_rows(&self) -> Vec<T> {
        self.page_entries().into_iter().map(|(_, row)| row).collect()
    }

    /// Like [`Self::page_rows`], paired with each row's index in `data`.
    pub fn page_entries(&self) -> Vec<(usize, T)> {
        let rows = self.row_model.with(|m| m.rows.clone());
        self.data.with(|data| {
            rows.iter()
                .filter_map(|&i| data.get(i).map(|row| (i, row.clone())))
                .collect()
        })
    }
}
