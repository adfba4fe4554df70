//! Prev/Next pager shared by the listing pages.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

/// Pager controls. `numbered` adds one button per page between Prev and
/// Next; otherwise a "Page X of Y" label is shown. Bounds come from the
/// listing (`can_prev`/`can_next`) and requested pages are clamped there.
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] can_prev: Signal<bool>,
    #[prop(into)] can_next: Signal<bool>,
    on_page: Callback<u32>,
    #[prop(optional)] numbered: bool,
) -> impl IntoView {
    let prev_disabled = move || !can_prev.get();
    let next_disabled = move || !can_next.get();

    view! {
        <div class="pagination">
            <button
                class="pagination__button"
                disabled=prev_disabled
                on:click=move |_| on_page.run(page.get_untracked().saturating_sub(1).max(1))
            >
                "Prev"
            </button>
            {move || {
                if numbered {
                    page_numbers(total_pages.get())
                        .into_iter()
                        .map(|p| {
                            view! {
                                <button
                                    class="pagination__button"
                                    class:pagination__button--active=move || page.get() == p
                                    on:click=move |_| on_page.run(p)
                                >
                                    {p}
                                </button>
                            }
                        })
                        .collect_view()
                        .into_any()
                } else {
                    view! {
                        <span class="pagination__label">{page_label(page.get(), total_pages.get())}</span>
                    }
                        .into_any()
                }
            }}
            <button
                class="pagination__button"
                disabled=next_disabled
                on:click=move |_| on_page.run(page.get_untracked() + 1)
            >
                "Next"
            </button>
        </div>
    }
}

/// Page buttons to render, `1..=total` with at least one.
pub fn page_numbers(total_pages: u32) -> Vec<u32> {
    (1..=total_pages.max(1)).collect()
}

pub fn page_label(page: u32, total_pages: u32) -> String {
    format!("Page {page} of {}", total_pages.max(1))
}
