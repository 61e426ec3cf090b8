use super::ColumnDef;

/// Indices of the rows matching `query` on any globally filterable column.
///
/// Matching is a case-insensitive substring test against the displayed value.
/// An empty query keeps every row.
pub fn filter_rows<T>(data: &[T], columns: &[ColumnDef<T>], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..data.len()).collect();
    }

    let needle = query.to_lowercase();
    let searchable: Vec<&ColumnDef<T>> =
        columns.iter().filter(|c| c.enable_global_filter).collect();

    data.iter()
        .enumerate()
        .filter(|(_, row)| {
            searchable
                .iter()
                .any(|col| col.value(row).to_string().to_lowercase().contains(&needle))
        })
        .map(|(idx, _)| idx)
        .collect()
}
