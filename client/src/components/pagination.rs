//! Page selector for the post list.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::state::posts::PostListState;

/// One-based label for a zero-based page index.
pub fn page_label(page: u32) -> String {
    (page + 1).to_string()
}

pub fn page_class(page: u32, current: u32) -> &'static str {
    if page == current { "pagination__page pagination__page--active" } else { "pagination__page" }
}

/// Hidden when there is a single page. `on_select` only receives in-range pages.
#[component]
pub fn Pagination(#[prop(into)] state: Signal<PostListState>, on_select: Callback<u32>) -> impl IntoView {
    let select = move |page: u32| {
        if state.with(|s| s.can_go_to(page)) {
            on_select.run(page);
        }
    };

    view! {
        <Show when=move || state.with(PostListState::show_pagination)>
            <nav class="pagination">
                <button
                    class="pagination__step"
                    disabled=move || !state.with(PostListState::has_prev)
                    on:click=move |_| {
                        let current = state.with(|s| s.page);
                        if current > 0 {
                            select(current - 1);
                        }
                    }
                >
                    "‹"
                </button>
                {move || {
                    let current = state.with(|s| s.page);
                    state
                        .with(PostListState::page_numbers)
                        .map(|page| {
                            view! {
                                <button class=page_class(page, current) on:click=move |_| select(page)>
                                    {page_label(page)}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="pagination__step"
                    disabled=move || !state.with(PostListState::has_next)
                    on:click=move |_| select(state.with(|s| s.page) + 1)
                >
                    "›"
                </button>
            </nav>
        </Show>
    }
}
