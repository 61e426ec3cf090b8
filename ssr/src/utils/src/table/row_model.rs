use super::{filter_rows, sort_rows, ColumnDef, PaginationState, SortingState};

/// Rows visible on the current page, as indices into the source data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowModel {
    pub rows: Vec<usize>,
    /// Rows left after global filtering, across all pages.
    pub filtered_count: usize,
    pub page_index: usize,
    pub page_count: usize,
}

impl RowModel {
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

/// Runs the filter, sort and pagination stages over `data`.
pub fn build_row_model<T>(
    data: &[T],
    columns: &[ColumnDef<T>],
    global_filter: &str,
    sorting: &SortingState,
    pagination: &PaginationState,
) -> RowModel {
    let mut rows = filter_rows(data, columns, global_filter);
    sort_rows(data, columns, sorting, &mut rows);

    let filtered_count = rows.len();
    let page = pagination.page_range(filtered_count);

    RowModel {
        rows: rows[page].to_vec(),
        filtered_count,
        page_index: pagination.clamped_index(filtered_count),
        page_count: pagination.page_count(filtered_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::PageSize;
    use pretty_assertions::assert_eq;

    #[derive(Clone)]
    struct Entry {
        username: String,
        score: u32,
    }

    fn entries(n: usize) -> Vec<Entry> {
        (0..n)
            .map(|i| Entry {
                username: format!("player{i}"),
                score: (i as u32 * 7) % 100,
            })
            .collect()
    }

    fn columns() -> Vec<ColumnDef<Entry>> {
        vec![
            ColumnDef::new("username", |e: &Entry| e.username.clone()).header("Username"),
            ColumnDef::new("score", |e: &Entry| e.score).header("Score"),
        ]
    }

    #[test]
    fn page_holds_min_of_page_size_and_remaining_rows() {
        let data = entries(23);
        let cols = columns();
        let sorting = SortingState::default();

        for (page_index, expected) in [(0, 10), (1, 10), (2, 3)] {
            let pagination = PaginationState {
                page_index,
                page_size: PageSize::default(),
            };
            let model = build_row_model(&data, &cols, "", &sorting, &pagination);
            assert_eq!(model.rows.len(), expected);
            assert_eq!(model.page_count, 3);
        }
    }

    #[test]
    fn unique_substring_leaves_one_row() {
        let data = entries(23);
        let model = build_row_model(
            &data,
            &columns(),
            "player17",
            &SortingState::default(),
            &PaginationState::default(),
        );
        assert_eq!(model.rows, vec![17]);
        assert_eq!(model.filtered_count, 1);
    }

    #[test]
    fn page_size_thirty_page_two_shows_rows_thirty_to_sixty() {
        let data = entries(100);
        let mut pagination = PaginationState::default();
        pagination.set_page_size(PageSize::new(30).unwrap());
        pagination.set_page_index(crate::table::page_index_from_input("2"), data.len());

        let model = build_row_model(
            &data,
            &columns(),
            "",
            &SortingState::default(),
            &pagination,
        );
        assert_eq!(model.rows, (30..60).collect::<Vec<_>>());
        assert_eq!(model.page_index, 1);
    }

    #[test]
    fn pages_slice_the_sorted_rows() {
        let data = entries(12);
        let mut sorting = SortingState::default();
        sorting.toggle("score", false);
        sorting.toggle("score", false);

        let model = build_row_model(
            &data,
            &columns(),
            "",
            &sorting,
            &PaginationState::default(),
        );
        let scores: Vec<u32> = model.rows.iter().map(|&i| data[i].score).collect();
        let mut expected: Vec<u32> = data.iter().map(|e| e.score).collect();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected.truncate(10);
        assert_eq!(scores, expected);
    }

    #[test]
    fn empty_data_is_an_empty_model() {
        let model = build_row_model(
            &Vec::<Entry>::new(),
            &columns(),
            "",
            &SortingState::default(),
            &PaginationState::default(),
        );
        assert!(model.is_empty());
        assert_eq!(model.page_count, 0);
        assert!(model.rows.is_empty());
    }
}
