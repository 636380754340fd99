//! Blog post HTTP routes
//!
//! One handler per store operation. Request bodies are decoded leniently:
//! a malformed or missing JSON body validates the same way as an empty one,
//! and wrong-shaped fields are treated as absent.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::observability::Logger;
use crate::store::{Post, PostStore};

use super::errors::ApiResult;

// ==================
// Shared State
// ==================

/// Post store shared across handlers.
///
/// A single `RwLock` serializes all store access; every critical section is
/// a short synchronous call with no await inside.
pub struct AppState {
    pub store: RwLock<PostStore>,
}

impl AppState {
    pub fn new(store: PostStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// State holding the fixture collection the server boots with.
    pub fn seeded() -> Self {
        Self::new(PostStore::seeded())
    }
}

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================
// Post Routes
// ==================

/// Create post routes, nested under `/api` by the server.
pub fn post_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/posts", get(list_posts_handler))
        .route("/posts", post(create_post_handler))
        .route("/posts/search", get(search_posts_handler))
        .route("/posts/:id", put(update_post_handler))
        .route("/posts/:id", delete(delete_post_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// Decode a request body without rejecting it. Invalid JSON becomes null,
/// so downstream validation reports missing fields instead of a parse error.
fn decode_body(body: &Bytes) -> Value {
    serde_json::from_slice(body).unwrap_or(Value::Null)
}

/// Extract a string field from a decoded body. Non-string values count as
/// absent.
fn string_field<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field).and_then(Value::as_str)
}

// ==================
// Handlers
// ==================

async fn list_posts_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<Post>>> {
    let posts = state
        .store
        .read()
        .await
        .list(query.sort.as_deref(), query.direction.as_deref())?;
    Ok(Json(posts))
}

async fn create_post_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<Post>)> {
    let body = decode_body(&body);
    let title = string_field(&body, "title").unwrap_or("");
    let content = string_field(&body, "content").unwrap_or("");

    let post = state.store.write().await.create(title, content)?;
    Logger::info("POST_CREATED", &[("id", &post.id.to_string())]);

    Ok((StatusCode::CREATED, Json(post)))
}

async fn update_post_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
    body: Bytes,
) -> ApiResult<Json<Post>> {
    let body = decode_body(&body);
    let title = string_field(&body, "title");
    let content = string_field(&body, "content");

    let post = state.store.write().await.update(id, title, content)?;
    Logger::info("POST_UPDATED", &[("id", &id.to_string())]);

    Ok(Json(post))
}

async fn delete_post_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<MessageResponse>> {
    state.store.write().await.delete(id)?;
    Logger::info("POST_DELETED", &[("id", &id.to_string())]);

    Ok(Json(MessageResponse {
        message: format!("Post with id {} has been deleted successfully.", id),
    }))
}

async fn search_posts_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Post>> {
    let posts = state.store.read().await.search(
        query.title.as_deref().unwrap_or(""),
        query.content.as_deref().unwrap_or(""),
    );
    Json(posts)
}
