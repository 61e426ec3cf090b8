use leptos::prelude::*;
use utils::period::Period;

/// Time-range dropdown. The selected value is owned by the caller; a change
/// is only forwarded through `set_option`.
#[component]
pub fn PeriodSelector(
    #[prop(into)] option: Signal<Period>,
    #[prop(into)] set_option: Callback<Period>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-2 text-sm">
            <span class="text-neutral-400">"Filter By"</span>
            <select
                class="bg-neutral-900 border border-neutral-800 rounded-md px-2 py-1 text-white"
                prop:value=move || option.get().value().to_string()
                on:change=move |ev| forward_period(&event_target_value(&ev), set_option)
            >
                {Period::ALL
                    .into_iter()
                    .map(|period| {
                        view! {
                            <option
                                class="text-xs"
                                value=period.value()
                                selected=move || option.get() == period
                            >
                                {period.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

fn forward_period(value: &str, set_option: Callback<Period>) {
    match value.parse::<Period>() {
        Ok(period) => set_option.run(period),
        Err(e) => log::warn!("ignoring period selection: {e}"),
    }
}
