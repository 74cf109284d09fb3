// src/models/review.rs
use serde::{Deserialize, Serialize};

/// A review record as the server stores it. The server is authoritative:
/// records are never constructed or deleted locally, only fetched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub id: String, // Server-assigned, immutable once created
    #[serde(rename = "reviewerName")]
    pub reviewer_name: String,
    pub text: String,
    pub rating: i32, // Intended domain 1-5, validated server-side
    pub image: Option<String>, // Server-resolved URL to the stored image
}

/// Local, unsaved, in-progress copy of a record's editable fields.
/// The pending image file is tracked separately (it is a binary
/// attachment, not a text field).
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub text: String,
    pub reviewer_name: String,
    pub rating: i32,
}

impl Default for ReviewDraft {
    fn default() -> Self {
        Self {
            text: String::new(),
            reviewer_name: String::new(),
            rating: 1,
        }
    }
}

impl From<&Review> for ReviewDraft {
    fn from(review: &Review) -> Self {
        Self {
            text: review.text.clone(),
            reviewer_name: review.reviewer_name.clone(),
            rating: review.rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_parses_wire_format() {
        let json = r#"[{"id":"42","reviewerName":"Ann","text":"Great!","rating":5,"image":"http://cdn/img.png"}]"#;
        let reviews: Vec<Review> = serde_json::from_str(json).unwrap();
        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].id, "42");
        assert_eq!(reviews[0].reviewer_name, "Ann");
        assert_eq!(reviews[0].rating, 5);
        assert_eq!(reviews[0].image.as_deref(), Some("http://cdn/img.png"));
    }

    #[test]
    fn review_tolerates_missing_image() {
        let json = r#"{"id":"7","reviewerName":"Bo","text":"ok","rating":3,"image":null}"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert!(review.image.is_none());
    }

    #[test]
    fn draft_seeded_from_record_copies_editable_fields() {
        let review = Review {
            id: "42".into(),
            reviewer_name: "Ann".into(),
            text: "Great!".into(),
            rating: 5,
            image: Some("http://cdn/img.png".into()),
        };
        let draft = ReviewDraft::from(&review);
        assert_eq!(draft.text, "Great!");
        assert_eq!(draft.reviewer_name, "Ann");
        assert_eq!(draft.rating, 5);
    }

    #[test]
    fn empty_draft_defaults_rating_to_one() {
        assert_eq!(ReviewDraft::default().rating, 1);
    }
}
