use super::types::TableColumn;
use leptos::prelude::*;
use state::table::TableState;
use utils::table::SortDirection;

/// Header row. Sortable headers toggle their column on click, shift-click
/// adds the column to the current sort.
#[component]
pub fn TableHeaderRow<T>(
    #[prop(into)] columns: Signal<Vec<TableColumn<T>>>,
    table: TableState<T>,
) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    view! {
        <tr class="border-b border-neutral-800">
            {move || {
                columns
                    .get()
                    .into_iter()
                    .map(|col| {
                        let sortable = col.def.enable_sorting;
                        let id = col.def.id.clone();
                        let glyph = {
                            let id = id.clone();
                            move || table.sort_direction(&id).map(SortDirection::glyph)
                        };

                        view! {
                            <th class="text-left py-3 px-4 text-xs text-neutral-400 font-medium">
                                <div
                                    class=if sortable {
                                        "cursor-pointer select-none hover:text-white transition-colors"
                                    } else {
                                        ""
                                    }
                                    on:click=move |ev: leptos::ev::MouseEvent| {
                                        if sortable {
                                            table.toggle_sorting(&id, ev.shift_key());
                                        }
                                    }
                                >
                                    {col.render_header()}
                                    {glyph}
                                </div>
                            </th>
                        }
                    })
                    .collect_view()
            }}
        </tr>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use consts::{SORT_ASC_GLYPH, SORT_DESC_GLYPH};
    use leptos::tachys::view::RenderHtml;
    use utils::table::ColumnDef;

    fn columns() -> Vec<TableColumn<(String, u32)>> {
        vec![
            ColumnDef::new("name", |r: &(String, u32)| r.0.clone())
                .header("Name")
                .into(),
            ColumnDef::new("score", |r: &(String, u32)| r.1)
                .header("Score")
                .into(),
        ]
    }

    fn render_with(toggles: &[(&str, bool)]) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let columns = columns();
            let defs: Vec<_> = columns.iter().map(|c| c.def.clone()).collect();
            let data = vec![("ann".to_string(), 3), ("bob".to_string(), 1)];
            let table = TableState::new(Signal::stored(data), Signal::stored(defs));
            for (id, multi) in toggles {
                table.toggle_sorting(id, *multi);
            }
            view! { <TableHeaderRow columns=columns table=table /> }.to_html()
        })
    }

    #[test]
    fn unsorted_headers_have_no_glyph() {
        let html = render_with(&[]);
        assert!(html.contains("Name"));
        assert!(!html.contains(SORT_ASC_GLYPH));
        assert!(!html.contains(SORT_DESC_GLYPH));
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle).unwrap_or_else(|| panic!("{needle:?} missing from {html}"))
    }

    #[test]
    fn sorted_header_shows_direction_glyph() {
        let html = render_with(&[("score", false)]);
        assert_eq!(html.matches(SORT_ASC_GLYPH).count(), 1);
        assert!(position(&html, SORT_ASC_GLYPH) > position(&html, "Score"));

        let html = render_with(&[("score", false), ("score", false)]);
        assert_eq!(html.matches(SORT_DESC_GLYPH).count(), 1);
        assert!(!html.contains(SORT_ASC_GLYPH));
        assert!(position(&html, SORT_DESC_GLYPH) > position(&html, "Score"));
    }

    #[test]
    fn shift_sort_marks_both_headers() {
        let html = render_with(&[("name", false), ("score", true), ("score", true)]);
        let asc = position(&html, SORT_ASC_GLYPH);
        let desc = position(&html, SORT_DESC_GLYPH);
        assert!(position(&html, "Name") < asc);
        assert!(asc < position(&html, "Score"));
        assert!(position(&html, "Score") < desc);
    }
}
