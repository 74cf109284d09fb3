/// Create/edit form for a review draft.
/// Binds whichever draft buffer is live (selected by the store's mode) to
/// the inputs; submitting while busy is a no-op and the button says so.
use leptos::ev::SubmitEvent;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::state::{Mode, ReviewStore};

#[component]
pub fn ReviewForm(
    store: ReviewStore,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    // Read the field out of the live draft buffer.
    let reviewer_name = move || match store.mode.get() {
        Mode::Creating => store.draft_new.get().reviewer_name,
        Mode::Editing => store
            .draft_edit
            .get()
            .map(|d| d.fields.reviewer_name)
            .unwrap_or_default(),
    };
    let text = move || match store.mode.get() {
        Mode::Creating => store.draft_new.get().text,
        Mode::Editing => store
            .draft_edit
            .get()
            .map(|d| d.fields.text)
            .unwrap_or_default(),
    };
    let rating = move || match store.mode.get() {
        Mode::Creating => store.draft_new.get().rating.to_string(),
        Mode::Editing => store
            .draft_edit
            .get()
            .map(|d| d.fields.rating.to_string())
            .unwrap_or_default(),
    };

    let handle_file = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        store.attach_image(file);
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if store.busy.get_untracked() {
            return;
        }
        on_submit.call(());
    };

    let submit_label = move || {
        if store.busy.get() {
            "Processing...".to_string()
        } else {
            match store.mode.get() {
                Mode::Creating => "Create Review".to_string(),
                Mode::Editing => "Update Review".to_string(),
            }
        }
    };

    view! {
        <form class="review-form" on:submit=handle_submit>
            <h3>
                {move || match store.mode.get() {
                    Mode::Creating => "Create New Review",
                    Mode::Editing => "Edit Review",
                }}
            </h3>
            <input
                type="text"
                placeholder="Reviewer Name"
                prop:value=reviewer_name
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    store.update_draft(move |d| d.reviewer_name = value);
                }
            />
            <input
                type="text"
                placeholder="Review Text"
                prop:value=text
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    store.update_draft(move |d| d.text = value);
                }
            />
            <input
                type="number"
                placeholder="Rating (1-5)"
                min="1"
                max="5"
                prop:value=rating
                on:input=move |ev| {
                    // min/max are a hint only; out-of-range values go to the
                    // server as typed.
                    match event_target_value(&ev).parse::<i32>() {
                        Ok(parsed) => store.update_draft(move |d| d.rating = parsed),
                        // Re-sync the widget with the draft when the text
                        // does not parse, so the two cannot diverge.
                        Err(_) => {
                            if let Some(input) = ev
                                .target()
                                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
                            {
                                input.set_value(&rating());
                            }
                        }
                    }
                }
            />
            <input type="file" accept="image/*" on:change=handle_file />
            <button type="submit" class="submit-button" disabled=move || store.busy.get()>
                {submit_label}
            </button>
            {move || (store.mode.get() == Mode::Editing).then(|| view! {
                <button
                    type="button"
                    class="cancel-button"
                    on:click=move |_| on_cancel.call(())
                >
                    {"Cancel"}
                </button>
            })}
        </form>
    }
}
