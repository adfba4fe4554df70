//! Doctor search box with a debounced text query and a specialization
//! filter.
//!
//! DESIGN
//! ======
//! Keystrokes land in a local buffer immediately; the shared search state is
//! written only when the `Debouncer` generation scheduled by the latest
//! keystroke fires. Specialization options are fetched once per mount.

use leptos::prelude::*;

use crate::state::AppContext;
use crate::state::search::SearchState;
use crate::util::debounce::Debouncer;
#[cfg(feature = "hydrate")]
use crate::util::debounce::SEARCH_DEBOUNCE_MS;

#[component]
pub fn SearchInput() -> impl IntoView {
    let ctx = AppContext::expect();
    let search = ctx.search();
    let local_query = RwSignal::new(search.get_untracked().query);
    let specializations = RwSignal::new(Vec::<String>::new());
    let filter_open = RwSignal::new(false);
    let debouncer = StoredValue::new(Debouncer::<String>::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_specializations().await {
            Ok(list) => specializations.set(list),
            Err(e) => log::error!("failed to fetch specializations: {e}"),
        }
    });

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        local_query.set(value.clone());
        let mut generation = 0;
        debouncer.update_value(|d| generation = d.push(value));
        #[cfg(feature = "hydrate")]
        gloo_timers::callback::Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            let mut committed = None;
            debouncer.update_value(|d| committed = d.fire(generation));
            if let Some(query) = committed {
                ctx.commit_query(&query);
            }
        })
        .forget();
        #[cfg(not(feature = "hydrate"))]
        let _ = generation;
    };

    let on_specialization = move |ev: leptos::ev::Event| {
        ctx.set_specialization(&event_target_value(&ev));
        filter_open.set(false);
    };

    view! {
        <div class="search">
            <div class="search__box">
                <input
                    class="search__input"
                    type="text"
                    placeholder="Search doctor..."
                    prop:value=move || local_query.get()
                    on:input=on_input
                />
            </div>
            <button
                class="search__filter-toggle"
                class:search__filter-toggle--active=move || search.with(SearchState::is_filtered)
                type="button"
                aria-label="Filter by specialization"
                on:click=move |_| filter_open.update(|open| *open = !*open)
            >
                "Filter"
            </button>
            <Show when=move || filter_open.get()>
                <div class="search__filter">
                    <label class="search__filter-label">"Filter by Specialization"</label>
                    <select
                        class="search__filter-select"
                        prop:value=move || search.get().specialization
                        on:change=on_specialization
                    >
                        <option value="">"All Specializations"</option>
                        <For
                            each=move || specializations.get()
                            key=|spec| spec.clone()
                            children=|spec| {
                                let value = spec.clone();
                                view! { <option value=value>{spec}</option> }
                            }
                        />
                    </select>
                </div>
            </Show>
        </div>
    }
}
