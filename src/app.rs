/// Main entry point for the review management screen.
/// Wires the state store, the sync client, and the form/list components
/// together; all network work goes through the intents in `actions`.
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use wasm_bindgen_futures::spawn_local;

use crate::actions;
use crate::api::SyncClient;
use crate::components::{review_form::ReviewForm, reviews_list::ReviewsList};
use crate::config;
use crate::models::review::Review;
use crate::state::ReviewStore;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = ReviewStore::new();
    let client = SyncClient::new(config::api_base(), config::bearer_token());

    // Initial load of the canonical list.
    {
        let client = client.clone();
        spawn_local(async move {
            actions::load_reviews(&client, store).await;
        });
    }

    let on_submit = {
        let client = client.clone();
        Callback::new(move |_| {
            let client = client.clone();
            spawn_local(async move {
                actions::submit(&client, store).await;
            });
        })
    };

    let on_cancel = Callback::new(move |_| store.cancel_edit());

    let on_edit = Callback::new(move |review: Review| store.begin_edit(&review));

    let on_delete = {
        let client = client.clone();
        Callback::new(move |id: String| {
            let client = client.clone();
            spawn_local(async move {
                actions::remove_review(&client, store, id).await;
            });
        })
    };

    view! {
        <Title text="Review Management"/>
        <div class="container">
            <h2>{"Review Management"}</h2>

            // Errors sit right under the heading and only clear on the
            // next successful operation, never on a timer.
            {move || store.last_error.get().map(|message| view! {
                <div class="error-banner">{message}</div>
            })}

            <ReviewForm store=store on_submit=on_submit on_cancel=on_cancel/>
            <ReviewsList store=store on_edit=on_edit on_delete=on_delete/>
        </div>
    }
}
