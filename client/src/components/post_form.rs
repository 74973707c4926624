//! Title/body form shared by the new and edit pages.

#[cfg(test)]
#[path = "post_form_test.rs"]
mod post_form_test;

use leptos::prelude::*;

use forum_api::types::PostDraft;

use crate::util::dialog;
use crate::util::validate::{FieldErrors, validate_post};

pub fn submit_label(editing: bool, submitting: bool) -> &'static str {
    match (submitting, editing) {
        (true, _) => "Saving...",
        (false, true) => "Update",
        (false, false) => "Publish",
    }
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn success_message(editing: bool) -> &'static str {
    if editing { "Post updated." } else { "Post published." }
}

/// Creates a post, or updates `post_id` when given.
#[component]
pub fn PostForm(
    #[prop(optional)] initial: Option<PostDraft>,
    #[prop(optional)] post_id: Option<i64>,
    on_success: Callback<()>,
) -> impl IntoView {
    let initial = initial.unwrap_or_default();
    let title = RwSignal::new(initial.title);
    let body = RwSignal::new(initial.body);
    let errors = RwSignal::new(FieldErrors::new());
    let submitting = RwSignal::new(false);
    let editing = post_id.is_some();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let draft = PostDraft { title: title.get(), body: body.get() };
        let found = validate_post(&draft.title, &draft.body);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        submitting.set(true);
        save_post(post_id, draft, submitting, on_success);
    };

    let field_error = move |field: &'static str| move || errors.with(|e| e.get(field).copied().unwrap_or_default());

    view! {
        <form class="post-form" on:submit=on_submit>
            <label class="post-form__label" for="title">
                "Title"
            </label>
            <input
                id="title"
                class="post-form__input"
                placeholder="Enter a title"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />
            <p class="post-form__error">{field_error("title")}</p>

            <label class="post-form__label" for="body">
                "Content"
            </label>
            <textarea
                id="body"
                class="post-form__textarea"
                rows="15"
                placeholder="Enter your content"
                prop:value=move || body.get()
                on:input=move |ev| body.set(event_target_value(&ev))
            ></textarea>
            <p class="post-form__error">{field_error("body")}</p>

            <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                {move || submit_label(editing, submitting.get())}
            </button>
        </form>
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn save_post(post_id: Option<i64>, draft: PostDraft, submitting: RwSignal<bool>, on_success: Callback<()>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::client();
        let posts = forum_api::PostApi::new(&api);
        let result = match post_id {
            Some(id) => posts.update(id, &draft).await,
            None => posts.create(&draft).await,
        };
        submitting.set(false);
        match result {
            Ok(_) => {
                dialog::alert(success_message(post_id.is_some()));
                on_success.run(());
            }
            Err(e) => {
                if let Some(message) = crate::util::errors::present_error(&e, false) {
                    dialog::alert(&message);
                }
            }
        }
    });
}
