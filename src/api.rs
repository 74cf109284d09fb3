/// Sync client for the remote review API.
/// All writes go out as multipart form data, reads come back as JSON, and
/// every successful mutation is followed upstream by a full list refresh so
/// the client never renders a guessed representation of a record it just
/// wrote.
use gloo_net::http::{Request, Response};
use serde::Deserialize;
use thiserror::Error;
use web_sys::{File, FormData};

use crate::models::review::{Review, ReviewDraft};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Required local fields are missing; never reaches the network.
    #[error("{0}")]
    Validation(String),
    /// The request could not be sent or the response could not be parsed.
    #[error("network error: {0}")]
    Network(String),
    /// Non-2xx response, with the server-supplied message when one parses.
    #[error("{message}")]
    Server { status: u16, message: String },
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// Error body the server sends alongside non-2xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct SyncClient {
    base: String,
    token: String,
}

impl SyncClient {
    pub fn new(base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            token: token.into(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/api/reviews", self.base)
    }

    fn create_url(&self) -> String {
        format!("{}/api/reviews/create", self.base)
    }

    /// The id is joined as a proper path segment.
    fn item_url(&self, id: &str) -> String {
        format!("{}/api/reviews/{}", self.base, id)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Fetch the canonical review collection.
    pub async fn list(&self) -> Result<Vec<Review>, ApiError> {
        let response = Request::get(&self.collection_url())
            .header("Authorization", &self.bearer())
            .send()
            .await?;
        if response.ok() {
            Ok(response.json::<Vec<Review>>().await?)
        } else {
            Err(server_error(&response, "Failed to fetch reviews").await)
        }
    }

    /// Create a new review. Text, reviewer name and image must all be
    /// present; otherwise this fails locally without issuing a request.
    pub async fn create(&self, draft: &ReviewDraft, image: Option<&File>) -> Result<(), ApiError> {
        validate_create(draft, image.is_some())?;
        let form = multipart_body(draft, image)?;
        let response = Request::post(&self.create_url())
            .header("Authorization", &self.bearer())
            .body(form)?
            .send()
            .await?;
        expect_ok(&response, "Failed to create review").await
    }

    /// Update an existing review. Omitting the image means "keep the
    /// server's stored image".
    pub async fn update(
        &self,
        id: &str,
        draft: &ReviewDraft,
        image: Option<&File>,
    ) -> Result<(), ApiError> {
        validate_update(draft)?;
        let form = multipart_body(draft, image)?;
        let response = Request::put(&self.item_url(id))
            .header("Authorization", &self.bearer())
            .body(form)?
            .send()
            .await?;
        expect_ok(&response, "Failed to update review").await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = Request::delete(&self.item_url(id))
            .header("Authorization", &self.bearer())
            .send()
            .await?;
        expect_ok(&response, "Failed to delete review").await
    }
}

pub fn validate_create(draft: &ReviewDraft, has_image: bool) -> Result<(), ApiError> {
    if draft.text.is_empty() || draft.reviewer_name.is_empty() || !has_image {
        return Err(ApiError::Validation(
            "Text, reviewer name, and image are required".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_update(draft: &ReviewDraft) -> Result<(), ApiError> {
    if draft.text.is_empty() || draft.reviewer_name.is_empty() {
        return Err(ApiError::Validation(
            "Text and reviewer name are required for update".to_string(),
        ));
    }
    Ok(())
}

/// Rating goes over the wire as provided; the 1-5 domain is the server's
/// to enforce.
fn multipart_body(draft: &ReviewDraft, image: Option<&File>) -> Result<FormData, ApiError> {
    let form = FormData::new()
        .map_err(|_| ApiError::Network("failed to build form data".to_string()))?;
    form.append_with_str("text", &draft.text)
        .and_then(|_| form.append_with_str("reviewerName", &draft.reviewer_name))
        .and_then(|_| form.append_with_str("rating", &draft.rating.to_string()))
        .map_err(|_| ApiError::Network("failed to build form data".to_string()))?;
    if let Some(file) = image {
        form.append_with_blob("image", file)
            .map_err(|_| ApiError::Network("failed to attach image".to_string()))?;
    }
    Ok(form)
}

async fn expect_ok(response: &Response, fallback: &str) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        Err(server_error(response, fallback).await)
    }
}

async fn server_error(response: &Response, fallback: &str) -> ApiError {
    let message = match response.json::<ErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => fallback.to_string(),
    };
    ApiError::Server {
        status: response.status(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(text: &str, name: &str) -> ReviewDraft {
        ReviewDraft {
            text: text.to_string(),
            reviewer_name: name.to_string(),
            rating: 5,
        }
    }

    #[test]
    fn item_url_joins_id_as_path_segment() {
        let client = SyncClient::new("http://localhost:5000", "t");
        // Regression: the id must be separated from the collection path.
        assert_eq!(client.item_url("42"), "http://localhost:5000/api/reviews/42");
    }

    #[test]
    fn trailing_slash_on_base_is_normalized() {
        let client = SyncClient::new("http://localhost:5000/", "t");
        assert_eq!(client.collection_url(), "http://localhost:5000/api/reviews");
        assert_eq!(
            client.create_url(),
            "http://localhost:5000/api/reviews/create"
        );
    }

    #[test]
    fn empty_base_targets_same_origin() {
        let client = SyncClient::new("", "t");
        assert_eq!(client.item_url("42"), "/api/reviews/42");
    }

    #[test]
    fn bearer_header_carries_token() {
        let client = SyncClient::new("", "secret-token");
        assert_eq!(client.bearer(), "Bearer secret-token");
    }

    #[test]
    fn create_requires_text_name_and_image() {
        assert!(validate_create(&draft("Great!", "Ann"), true).is_ok());
        for (d, has_image) in [
            (draft("", "Ann"), true),
            (draft("Great!", ""), true),
            (draft("Great!", "Ann"), false),
        ] {
            match validate_create(&d, has_image) {
                Err(ApiError::Validation(msg)) => {
                    assert_eq!(msg, "Text, reviewer name, and image are required")
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn update_requires_text_and_name_but_not_image() {
        assert!(validate_update(&draft("Edited", "Ann")).is_ok());
        assert!(matches!(
            validate_update(&draft("", "Ann")),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_update(&draft("Edited", "")),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn error_display_is_human_readable() {
        let server = ApiError::Server {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(server.to_string(), "boom");
        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.to_string(), "network error: connection refused");
    }

    #[test]
    fn server_error_body_parses_message_field() {
        let body: ErrorBody = serde_json::from_str(r#"{"message":"token expired"}"#).unwrap();
        assert_eq!(body.message, "token expired");
    }
}
