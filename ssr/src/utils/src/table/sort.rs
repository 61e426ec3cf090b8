use std::cmp::Ordering;

use consts::{SORT_ASC_GLYPH, SORT_DESC_GLYPH};
use serde::{Deserialize, Serialize};

use super::{CellValue, ColumnDef};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Marker appended to a sorted column's header label.
    pub fn glyph(self) -> &'static str {
        match self {
            SortDirection::Asc => SORT_ASC_GLYPH,
            SortDirection::Desc => SORT_DESC_GLYPH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    pub id: String,
    pub desc: bool,
}

/// Active sorts, highest priority first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingState(Vec<ColumnSort>);

impl SortingState {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnSort> {
        self.0.iter()
    }

    pub fn direction(&self, column_id: &str) -> Option<SortDirection> {
        self.0.iter().find(|s| s.id == column_id).map(|s| {
            if s.desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            }
        })
    }

    /// Advances `column_id` through unsorted -> ascending -> descending -> unsorted.
    ///
    /// Without `multi` every other column is dropped. With `multi` a newly sorted
    /// column is appended after the existing ones.
    pub fn toggle(&mut self, column_id: &str, multi: bool) {
        let next = match self.direction(column_id) {
            None => Some(false),
            Some(SortDirection::Asc) => Some(true),
            Some(SortDirection::Desc) => None,
        };

        if !multi {
            self.0.retain(|s| s.id == column_id);
        }

        match (self.0.iter().position(|s| s.id == column_id), next) {
            (Some(idx), Some(desc)) => self.0[idx].desc = desc,
            (Some(idx), None) => {
                self.0.remove(idx);
            }
            (None, Some(desc)) => self.0.push(ColumnSort {
                id: column_id.to_string(),
                desc,
            }),
            (None, None) => {}
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl FromIterator<ColumnSort> for SortingState {
    fn from_iter<I: IntoIterator<Item = ColumnSort>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Reorders `rows` (indices into `data`) according to `sorting`.
///
/// Sorts naming unknown or non-sortable columns are skipped. Empty values
/// always go last, whatever the direction. The sort is stable.
pub fn sort_rows<T>(
    data: &[T],
    columns: &[ColumnDef<T>],
    sorting: &SortingState,
    rows: &mut Vec<usize>,
) {
    let keys: Vec<(&ColumnDef<T>, bool)> = sorting
        .iter()
        .filter_map(|s| {
            let col = columns.iter().find(|c| c.id == s.id && c.enable_sorting);
            if col.is_none() {
                log::warn!("skipping sort on unknown or unsortable column {:?}", s.id);
            }
            col.map(|c| (c, s.desc))
        })
        .collect();
    if keys.is_empty() {
        return;
    }

    let mut decorated: Vec<(usize, Vec<CellValue>)> = rows
        .iter()
        .filter_map(|&idx| {
            let row = data.get(idx)?;
            Some((idx, keys.iter().map(|(col, _)| col.value(row)).collect()))
        })
        .collect();

    decorated.sort_by(|(_, a), (_, b)| {
        keys.iter()
            .zip(a.iter().zip(b.iter()))
            .map(|((_, desc), (va, vb))| compare_keys(va, vb, *desc))
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    });

    *rows = decorated.into_iter().map(|(idx, _)| idx).collect();
}

fn compare_keys(a: &CellValue, b: &CellValue, desc: bool) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) if desc => a.compare(b).reverse(),
        (false, false) => a.compare(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(ids: &[(&str, bool)]) -> SortingState {
        ids.iter()
            .map(|(id, desc)| ColumnSort {
                id: id.to_string(),
                desc: *desc,
            })
            .collect()
    }

    #[test]
    fn three_toggles_return_to_unsorted() {
        let mut state = SortingState::default();
        state.toggle("score", false);
        assert_eq!(state.direction("score"), Some(SortDirection::Asc));
        state.toggle("score", false);
        assert_eq!(state.direction("score"), Some(SortDirection::Desc));
        state.toggle("score", false);
        assert!(state.is_empty());
    }

    #[test]
    fn single_toggle_replaces_other_columns() {
        let mut state = sorted(&[("name", true)]);
        state.toggle("score", false);
        assert_eq!(state, sorted(&[("score", false)]));
    }

    #[test]
    fn multi_toggle_keeps_insertion_order() {
        let mut state = SortingState::default();
        state.toggle("score", true);
        state.toggle("name", true);
        state.toggle("score", true);
        assert_eq!(state, sorted(&[("score", true), ("name", false)]));

        state.toggle("score", true);
        assert_eq!(state, sorted(&[("name", false)]));
    }

    #[test]
    fn sorts_by_priority_and_keeps_ties_stable() {
        let data = vec![("b", 2u32), ("a", 1), ("c", 2), ("d", 1)];
        let columns = vec![
            ColumnDef::new("name", |r: &(&'static str, u32)| r.0),
            ColumnDef::new("score", |r: &(&'static str, u32)| r.1),
        ];

        let mut rows: Vec<usize> = (0..data.len()).collect();
        sort_rows(&data, &columns, &sorted(&[("score", true)]), &mut rows);
        assert_eq!(rows, vec![0, 2, 1, 3]);

        let mut rows: Vec<usize> = (0..data.len()).collect();
        sort_rows(
            &data,
            &columns,
            &sorted(&[("score", false), ("name", true)]),
            &mut rows,
        );
        assert_eq!(rows, vec![3, 1, 2, 0]);
    }

    #[test]
    fn empty_values_go_last_in_both_directions() {
        let data = vec![Some(3u32), None, Some(1)];
        let columns = vec![ColumnDef::new("reward", |r: &Option<u32>| *r)];

        for (desc, expected) in [(false, vec![2, 0, 1]), (true, vec![0, 2, 1])] {
            let mut rows = vec![0, 1, 2];
            sort_rows(&data, &columns, &sorted(&[("reward", desc)]), &mut rows);
            assert_eq!(rows, expected);
        }
    }

    #[test]
    fn non_sortable_columns_are_ignored() {
        let data = vec![2u32, 1];
        let columns = vec![ColumnDef::new("n", |r: &u32| *r).sortable(false)];
        let mut rows = vec![0, 1];
        sort_rows(&data, &columns, &sorted(&[("n", false)]), &mut rows);
        assert_eq!(rows, vec![0, 1]);
    }

    #[test]
    fn unknown_columns_are_skipped_in_favour_of_later_keys() {
        let data = vec![2u32, 1];
        let columns = vec![ColumnDef::new("n", |r: &u32| *r)];
        let mut rows = vec![0, 1];
        sort_rows(
            &data,
            &columns,
            &sorted(&[("missing", true), ("n", false)]),
            &mut rows,
        );
        assert_eq!(rows, vec![1, 0]);
    }
}
