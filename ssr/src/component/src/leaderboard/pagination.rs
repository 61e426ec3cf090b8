use leptos::prelude::*;
use state::table::TableState;
use utils::table::{page_index_from_input, PageSize};

#[component]
fn PageButton(
    #[prop(into)] disabled: Signal<bool>,
    on_click: impl Fn() + 'static,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "border rounded-sm p-1 text-xs capitalize {}",
                    if disabled.get() {
                        "bg-neutral-400 opacity-60 cursor-not-allowed"
                    } else {
                        "bg-[#00B39F] text-white cursor-pointer"
                    },
                )
            }
            disabled=move || disabled.get()
            on:click=move |_| on_click()
        >
            {children()}
        </button>
    }
}

/// First / previous / next / last buttons, a 1-based page jump and the
/// page-size selector.
#[component]
pub fn PaginationBar<T>(table: TableState<T>) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let no_previous = Signal::derive(move || !table.can_previous_page());
    let no_next = Signal::derive(move || !table.can_next_page());

    view! {
        <section class="w-full flex items-center justify-center my-5">
            <div class="flex flex-col md:flex-row items-center justify-between gap-3">
                <div class="flex items-center gap-1">
                    <PageButton disabled=no_previous on_click=move || table.first_page()>
                        "<<"
                    </PageButton>
                    <PageButton disabled=no_previous on_click=move || table.previous_page()>
                        "← Prev"
                    </PageButton>
                    <PageButton disabled=no_next on_click=move || table.next_page()>
                        "Next →"
                    </PageButton>
                    <PageButton disabled=no_next on_click=move || table.last_page()>
                        ">>"
                    </PageButton>
                </div>
                <div class="flex items-center">
                    <span class="flex items-center gap-1 text-xs md:ml-5">
                        <div>"Page"</div>
                        <strong>
                            {move || format!("{} of {}", table.page_index() + 1, table.page_count())}
                        </strong>
                        "| Go to page:"
                        <input
                            type="number"
                            min="1"
                            class="w-16 p-1 border border-gray-500 rounded-sm bg-transparent"
                            prop:value=move || (table.page_index() + 1).to_string()
                            on:input=move |ev| {
                                table.set_page_index(page_index_from_input(&event_target_value(&ev)));
                            }
                        />
                    </span>
                    <select
                        class="ml-2 w-24 p-1 border border-gray-500 rounded-sm bg-transparent text-xs"
                        prop:value=move || table.page_size().to_string()
                        on:change=move |ev| {
                            match event_target_value(&ev).parse::<PageSize>() {
                                Ok(size) => table.set_page_size(size),
                                Err(e) => log::warn!("ignoring page size selection: {e}"),
                            }
                        }
                    >
                        {PageSize::options()
                            .map(|size| {
                                view! {
                                    <option
                                        class="text-xs"
                                        value=size.to_string()
                                        selected=move || table.page_size() == size
                                    >
                                        {format!("Show {size}")}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
        </section>
    }
}
