use consts::{SEARCH_DEBOUNCE_MS, SEARCH_PLACEHOLDER};
use leptos::prelude::*;
use leptos_use::use_debounce_fn;

#[component]
pub fn SearchBar(on_search: impl Fn(String) + Clone + 'static) -> impl IntoView {
    let (search_value, set_search_value) = signal(String::new());

    let on_search_debounced = on_search.clone();

    // Debounced search function - triggers after the user stops typing
    let debounced_search = use_debounce_fn(
        move || {
            on_search_debounced(search_value.get_untracked());
        },
        SEARCH_DEBOUNCE_MS,
    );

    view! {
        <div class="relative w-full md:w-64">
            <div class="absolute inset-y-0 left-0 flex items-center pl-3 pointer-events-none">
                <svg
                    class="w-4 h-4 text-gray-400"
                    fill="none"
                    stroke="currentColor"
                    viewBox="0 0 24 24"
                >
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"
                    />
                </svg>
            </div>

            <input
                type="search"
                class="w-full pl-9 pr-3 py-2 bg-neutral-900 border border-neutral-800 rounded-md text-sm text-white placeholder-gray-400 focus:outline-none focus:border-[#00B39F] transition-colors"
                placeholder=SEARCH_PLACEHOLDER
                prop:value=move || search_value.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_search_value.set(value.clone());

                    if value.is_empty() {
                        // Clearing the box shows every row again right away
                        on_search(String::new());
                    } else {
                        debounced_search();
                    }
                }
            />
        </div>
    }
}
