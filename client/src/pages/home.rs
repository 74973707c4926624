//! Home page listing posts with pagination and a write button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::pagination::Pagination;
use crate::components::post_card::PostCard;
use crate::state::auth::AuthState;
use crate::state::posts::PostListState;
use crate::util::auth::LOGIN_REQUIRED_MESSAGE;
use crate::util::dialog;

/// Anyone may browse; writing requires a session.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let list = RwSignal::new(PostListState { loading: true, ..PostListState::default() });

    fetch_page(list, 0);

    let on_select = Callback::new(move |page: u32| fetch_page(list, page));
    let on_deleted = Callback::new(move |()| fetch_page(list, list.with_untracked(|s| s.page)));

    let on_write = move |_| {
        if auth.with(AuthState::is_authenticated) {
            navigate("/posts/new", NavigateOptions::default());
        } else {
            dialog::alert(LOGIN_REQUIRED_MESSAGE);
            navigate(forum_api::navigation::LOGIN_PATH, NavigateOptions::default());
        }
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Posts"</h1>
                <button class="btn btn--primary" on:click=on_write>
                    "Write"
                </button>
            </header>
            <Show
                when=move || !list.with(|s| s.loading)
                fallback=|| view! { <div class="home-page__skeleton"></div> }
            >
                <Show
                    when=move || list.with(|s| !s.items.is_empty())
                    fallback=|| {
                        view! {
                            <div class="home-page__empty">
                                <p>"No posts yet."</p>
                                <p>"Be the first to write one!"</p>
                            </div>
                        }
                    }
                >
                    <div class="home-page__list">
                        <For
                            each=move || list.with(|s| s.items.clone())
                            key=|post| post.id
                            children=move |post| view! { <PostCard post=post on_deleted=on_deleted/> }
                        />
                    </div>
                    <Pagination state=list on_select=on_select/>
                </Show>
            </Show>
        </div>
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn fetch_page(list: RwSignal<PostListState>, page: u32) {
    list.update(|s| s.loading = true);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::client();
        let result = forum_api::PostApi::new(&api).list(page, forum_api::posts::DEFAULT_PAGE_SIZE).await;
        match result.map(forum_api::types::ApiEnvelope::into_data) {
            Ok(Some(fetched)) => list.update(|s| s.apply_page(fetched)),
            Ok(None) => list.update(|s| s.loading = false),
            Err(e) => {
                if e.is_cancelled() {
                    // A newer fetch for the same page owns the list now.
                    return;
                }
                list.update(|s| s.loading = false);
                if crate::util::errors::present_error(&e, true).is_some() {
                    dialog::alert("Failed to load posts.");
                }
            }
        }
    });

    #[cfg(not(feature = "csr"))]
    list.update(|s| s.loading = false);
}
