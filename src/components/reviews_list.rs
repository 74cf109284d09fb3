/// Card list for the fetched reviews, one card per record with Edit and
/// Delete actions.
use leptos::*;

use crate::models::review::Review;
use crate::state::ReviewStore;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

#[component]
pub fn ReviewsList(
    store: ReviewStore,
    on_edit: Callback<Review>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="reviews-grid">
            {move || store.reviews.get().into_iter().map(|review| {
                let edit_target = review.clone();
                let delete_id = review.id.clone();
                view! {
                    <div class="review-card">
                        <img
                            src=review.image.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
                            alt=review.reviewer_name.clone()
                        />
                        <h3>{review.reviewer_name.clone()}</h3>
                        <p class="review-text">{review.text.clone()}</p>
                        <p class="review-rating">{format!("Rating: {}", review.rating)}</p>
                        <div class="review-actions">
                            <button
                                class="edit-button"
                                on:click=move |_| on_edit.call(edit_target.clone())
                            >
                                {"Edit"}
                            </button>
                            <button
                                class="delete-button"
                                on:click=move |_| on_delete.call(delete_id.clone())
                            >
                                {"Delete"}
                            </button>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
