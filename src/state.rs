/// Central UI state for the review management screen.
/// Everything the renderer shows lives in this signal bundle, and all
/// mutation goes through the named operations below; the view layer and
/// the sync code never write the signals ad hoc.
use leptos::*;
use web_sys::File;

use crate::models::review::{Review, ReviewDraft};

/// The form is always visible; mode only switches which draft buffer is
/// bound and what the submit button says.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Creating,
    Editing,
}

/// Edit buffer plus the id of the record being edited.
#[derive(Clone, Debug, PartialEq)]
pub struct EditDraft {
    pub id: String,
    pub fields: ReviewDraft,
}

#[derive(Clone, Copy)]
pub struct ReviewStore {
    pub reviews: RwSignal<Vec<Review>>,
    pub draft_new: RwSignal<ReviewDraft>,
    pub draft_edit: RwSignal<Option<EditDraft>>,
    pub pending_image: RwSignal<Option<File>>,
    pub mode: RwSignal<Mode>,
    pub busy: RwSignal<bool>,
    pub last_error: RwSignal<Option<String>>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self {
            reviews: create_rw_signal(Vec::new()),
            draft_new: create_rw_signal(ReviewDraft::default()),
            draft_edit: create_rw_signal(None),
            pending_image: create_rw_signal(None),
            mode: create_rw_signal(Mode::Creating),
            busy: create_rw_signal(false),
            last_error: create_rw_signal(None),
        }
    }

    /// Wholesale replacement with the server's canonical collection.
    pub fn replace_reviews(&self, reviews: Vec<Review>) {
        self.reviews.set(reviews);
    }

    /// Seed the edit buffer from an existing record and switch modes.
    pub fn begin_edit(&self, review: &Review) {
        self.draft_edit.set(Some(EditDraft {
            id: review.id.clone(),
            fields: ReviewDraft::from(review),
        }));
        self.mode.set(Mode::Editing);
    }

    /// Discard the edit buffer without submitting.
    pub fn cancel_edit(&self) {
        self.draft_edit.set(None);
        self.pending_image.set(None);
        self.mode.set(Mode::Creating);
    }

    /// Reset the create buffer after a successful submit.
    pub fn finish_create(&self) {
        self.draft_new.set(ReviewDraft::default());
        self.pending_image.set(None);
    }

    /// Leave edit mode after a successful update.
    pub fn finish_edit(&self) {
        self.draft_edit.set(None);
        self.pending_image.set(None);
        self.mode.set(Mode::Creating);
    }

    /// Apply a field change to whichever draft buffer is live.
    pub fn update_draft(&self, apply: impl FnOnce(&mut ReviewDraft)) {
        match self.mode.get_untracked() {
            Mode::Creating => self.draft_new.update(apply),
            Mode::Editing => self.draft_edit.update(|draft| {
                if let Some(draft) = draft {
                    apply(&mut draft.fields);
                }
            }),
        }
    }

    pub fn attach_image(&self, file: Option<File>) {
        self.pending_image.set(file);
    }

    pub fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    /// Always replaces any previous message, never accumulates.
    pub fn set_error(&self, message: impl Into<String>) {
        self.last_error.set(Some(message.into()));
    }

    pub fn clear_error(&self) {
        self.last_error.set(None);
    }
}

impl Default for ReviewStore {
    fn default() -> Self {
        Self::new()
    }
}
