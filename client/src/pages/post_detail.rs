//! Post detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads go through the public-read path, so anonymous visitors hitting a 403
//! keep their (empty) session and simply see nothing. The author additionally
//! gets edit and delete controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use forum_api::types::PostDetail;

use crate::components::post_card::edit_href;
use crate::state::auth::AuthState;
use crate::util::dialog;
use crate::util::validate::parse_post_id;

#[component]
pub fn PostDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let post = RwSignal::new(None::<PostDetail>);
    let loading = RwSignal::new(true);
    // Route id the latest load belongs to; responses for older ids are dropped.
    let current = RwSignal::new(None::<i64>);

    let post_id = move || params.with(|p| p.get("id")).as_deref().and_then(parse_post_id);

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let Some(id) = post_id() else {
                loading.set(false);
                return;
            };
            if current.get_untracked() == Some(id) {
                return;
            }
            current.set(Some(id));
            loading.set(true);
            load_post(id, post, loading, current, navigate.clone());
        });
    }

    let is_author = move || post.with(|p| p.as_ref().is_some_and(|p| auth.with(|s| s.is_author(&p.username))));

    let navigate = StoredValue::new_local(navigate);
    let on_delete = move |_| {
        let Some(id) = post_id() else {
            return;
        };
        if dialog::confirm("Delete this post?") {
            delete_post(id, navigate.get_value());
        }
    };

    view! {
        <div class="post-page">
            <Show when=move || !loading.get() fallback=|| view! { <div class="post-page__skeleton"></div> }>
                {move || {
                    post.get()
                        .map(|p| {
                            view! {
                                <article class="post-detail">
                                    <header class="post-detail__header">
                                        <h1>{p.title}</h1>
                                        <div class="post-detail__meta">
                                            <span class="post-detail__author">{p.username}</span>
                                            <span class="post-detail__views">{format!("Views {}", p.view)}</span>
                                        </div>
                                    </header>
                                    <p class="post-detail__body">{p.body}</p>
                                </article>
                            }
                        })
                }}
                <Show when=is_author>
                    <div class="post-detail__actions">
                        <a class="btn btn--ghost" href=move || post_id().map(edit_href).unwrap_or_default()>
                            "Edit"
                        </a>
                        <button class="btn btn--danger" on:click=on_delete.clone()>
                            "Delete"
                        </button>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn load_post<F>(
    id: i64,
    post: RwSignal<Option<PostDetail>>,
    loading: RwSignal<bool>,
    current: RwSignal<Option<i64>>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::client();
        let result = forum_api::PostApi::new(&api).get(id).await;
        if current.get_untracked() != Some(id) {
            return;
        }
        loading.set(false);
        match result {
            Ok(envelope) => post.set(envelope.into_data()),
            Err(e) => {
                if let Some(message) = crate::util::errors::present_error(&e, true) {
                    dialog::alert(&message);
                    navigate("/", NavigateOptions::default());
                }
            }
        }
    });

    #[cfg(not(feature = "csr"))]
    loading.set(false);
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn delete_post<F>(id: i64, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::client();
        match forum_api::PostApi::new(&api).delete(id).await {
            Ok(_) => navigate("/", NavigateOptions::default()),
            Err(e) => {
                if let Some(message) = crate::util::errors::present_error(&e, false) {
                    dialog::alert(&message);
                }
            }
        }
    });
}
