use super::{
    pagination::PaginationBar, period_selector::PeriodSelector, search_bar::SearchBar,
    table_header::TableHeaderRow, types::TableColumn,
};
use consts::{DEFAULT_NO_DATA_MESSAGE, LOADING_MESSAGE};
use leptos::prelude::*;
use state::table::TableState;
use utils::period::Period;

/// Public entry point for the leaderboard table. Props are handed to
/// [`Table`] as they are.
#[component]
pub fn TableComponent<T>(
    #[prop(into)] data: Signal<Vec<T>>,
    #[prop(into)] columns: Signal<Vec<TableColumn<T>>>,
    #[prop(into, optional)] loading: Signal<bool>,
    #[prop(into, optional)] no_data: Option<String>,
    #[prop(into)] option: Signal<Period>,
    #[prop(into)] set_option: Callback<Period>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    view! {
        <Table
            data=data
            columns=columns
            loading=loading
            no_data=no_data
            option=option
            set_option=set_option
        />
    }
}

#[component]
pub fn Table<T>(
    data: Signal<Vec<T>>,
    columns: Signal<Vec<TableColumn<T>>>,
    loading: Signal<bool>,
    #[prop(optional_no_strip)] no_data: Option<String>,
    option: Signal<Period>,
    set_option: Callback<Period>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let defs = Signal::derive(move || {
        columns.with(|cols| cols.iter().map(|c| c.def.clone()).collect::<Vec<_>>())
    });
    let table = TableState::new(data, defs);

    let no_data = no_data.unwrap_or_else(|| DEFAULT_NO_DATA_MESSAGE.to_string());
    let is_empty = move || !loading.get() && table.filtered_count() == 0;
    let has_rows = move || !loading.get() && table.filtered_count() > 0;

    view! {
        <div class="w-full flex flex-col gap-4">
            <div class="flex flex-col md:flex-row gap-3 items-start md:items-center justify-between">
                <PeriodSelector option=option set_option=set_option />
                <SearchBar on_search=move |query: String| table.set_global_filter(query) />
            </div>
            <div class="w-full overflow-x-auto rounded-lg border border-neutral-800">
                <table class="w-full">
                    <thead>
                        <TableHeaderRow columns=columns table=table />
                    </thead>
                    <tbody>
                        {move || {
                            (!loading.get())
                                .then(|| {
                                    let cols = columns.get();
                                    table
                                        .page_entries()
                                        .into_iter()
                                        .map(|(id, row)| {
                                            view! {
                                                <tr
                                                    data-row-id=id.to_string()
                                                    class="border-b border-neutral-800 hover:bg-neutral-900/50 transition-colors"
                                                >
                                                    {cols
                                                        .iter()
                                                        .map(|col| {
                                                            view! {
                                                                <td class="py-3 px-4">
                                                                    <div>{col.render_cell(&row)}</div>
                                                                </td>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                })
                        }}
                    </tbody>
                </table>
                <Show when=move || loading.get()>
                    <section class="h-64 w-full flex items-center justify-center text-neutral-400">
                        <section>{LOADING_MESSAGE}</section>
                    </section>
                </Show>
                <Show when=is_empty>
                    <section class="h-64 w-full flex items-center justify-center">
                        <p class="text-gray-400">{no_data.clone()}</p>
                    </section>
                </Show>
            </div>
            <div class="h-2" />
            <Show when=has_rows>
                <PaginationBar table=table />
            </Show>
        </div>
    }
}
