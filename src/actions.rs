/// Async intents dispatched by the view layer.
/// Each one calls the sync client, then mutates the store through its named
/// operations. Every successful mutation triggers a full list refresh: the
/// server owns derived fields (id, stored image URL), so re-fetching beats
/// patching local state with a guess.
use leptos::logging::{error, log};
use leptos::SignalGetUntracked;

use crate::api::{ApiError, SyncClient};
use crate::state::{Mode, ReviewStore};

/// Fetch the canonical list. On failure the current list stays untouched.
pub async fn load_reviews(client: &SyncClient, store: ReviewStore) {
    match client.list().await {
        Ok(reviews) => {
            log!("[SYNC] fetched {} reviews", reviews.len());
            store.replace_reviews(reviews);
            store.clear_error();
        }
        Err(err) => {
            error!("[SYNC] list failed: {err}");
            store.set_error(format!("Failed to fetch reviews: {err}"));
        }
    }
}

/// Submit whichever draft is live.
pub async fn submit(client: &SyncClient, store: ReviewStore) {
    match store.mode.get_untracked() {
        Mode::Creating => submit_create(client, store).await,
        Mode::Editing => submit_update(client, store).await,
    }
}

pub async fn submit_create(client: &SyncClient, store: ReviewStore) {
    // UI-affordance guard, not a lock: the submit button is disabled while
    // busy and this early return backs it up.
    if store.busy.get_untracked() {
        return;
    }
    store.set_busy(true);
    let draft = store.draft_new.get_untracked();
    let image = store.pending_image.get_untracked();
    match client.create(&draft, image.as_ref()).await {
        Ok(()) => {
            // load_reviews clears the error itself on success; a failed
            // refresh must keep its own message visible.
            load_reviews(client, store).await;
            store.finish_create();
        }
        Err(err) => {
            error!("[SYNC] create failed: {err}");
            store.set_error(user_message("Error creating review", err));
        }
    }
    store.set_busy(false);
}

pub async fn submit_update(client: &SyncClient, store: ReviewStore) {
    if store.busy.get_untracked() {
        return;
    }
    let Some(draft) = store.draft_edit.get_untracked() else {
        return;
    };
    store.set_busy(true);
    let image = store.pending_image.get_untracked();
    match client.update(&draft.id, &draft.fields, image.as_ref()).await {
        Ok(()) => {
            load_reviews(client, store).await;
            store.finish_edit();
        }
        Err(err) => {
            // Stay in edit mode; the typed draft is never thrown away.
            error!("[SYNC] update failed: {err}");
            store.set_error(user_message("Error updating review", err));
        }
    }
    store.set_busy(false);
}

pub async fn remove_review(client: &SyncClient, store: ReviewStore, id: String) {
    match client.delete(&id).await {
        Ok(()) => load_reviews(client, store).await,
        Err(err) => {
            error!("[SYNC] delete failed: {err}");
            store.set_error(format!("Error deleting review: {err}"));
        }
    }
}

/// Validation messages already tell the user what to fix; everything else
/// gets an operation prefix.
fn user_message(prefix: &str, err: ApiError) -> String {
    match err {
        ApiError::Validation(message) => message,
        other => format!("{prefix}: {other}"),
    }
}
