//! API handlers

use std::num::IntErrorKind;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::error::ErrorBody;
use crate::api::{ApiError, AppState, ContactSubmission};
use crate::types::{ContactForm, Item, ItemId, NewItem};
use crate::Error;

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact_form.html");
const CONTACT_TITLE: &str = "Contact Us";

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

#[derive(Debug, Serialize, ToSchema)]
#[schema(example = json!({ "status": "healthy" }))]
pub struct HealthResponse {
    pub status: String,
}

/// List every item
#[utoipa::path(
    get,
    path = "/items",
    tag = "items",
    responses((status = 200, description = "All items in insertion order", body = [Item]))
)]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    Json(state.items.list().await)
}

/// Fetch a single item
#[utoipa::path(
    get,
    path = "/items/{item_id}",
    tag = "items",
    params(("item_id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "The item", body = Item),
        (status = 400, description = "Identifier is not an integer", body = ErrorBody),
        (status = 404, description = "No item has this identifier", body = ErrorBody)
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let item_id = parse_item_id(&item_id)?;
    let item = state.items.get(item_id).await?;
    Ok(Json(item))
}

/// Parse a path identifier.
///
/// Integers outside the `ItemId` range can never have been assigned, so they
/// are reported as missing rather than malformed.
fn parse_item_id(raw: &str) -> Result<ItemId, ApiError> {
    match raw.parse::<ItemId>() {
        Ok(id) => Ok(id),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Err(Error::ItemNotFound(ItemId::MAX).into()),
            IntErrorKind::NegOverflow => Err(Error::ItemNotFound(ItemId::MIN).into()),
            _ => Err(ApiError::bad_request(format!(
                "item id must be an integer, got `{raw}`"
            ))),
        },
    }
}

/// Create an item; the store assigns its id
#[utoipa::path(
    post,
    path = "/items",
    tag = "items",
    request_body = NewItem,
    responses((status = 201, description = "The created item", body = Item))
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<NewItem>,
) -> (StatusCode, Json<Item>) {
    let item = state.items.create(payload).await;
    (StatusCode::CREATED, Json(item))
}

/// Render the contact form page
#[utoipa::path(
    get,
    path = "/contact",
    tag = "forms",
    responses((status = 200, description = "Contact form page", content_type = "text/html", body = String))
)]
pub async fn contact_page() -> Html<String> {
    Html(render_contact_page(CONTACT_TITLE))
}

fn render_contact_page(title: &str) -> String {
    CONTACT_TEMPLATE.replace("{{ title }}", title)
}

/// Accept a contact submission and echo it back.
///
/// Both urlencoded and multipart bodies are accepted.
#[utoipa::path(
    post,
    path = "/submit-form",
    tag = "forms",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "The recorded submission", body = ContactForm),
        (status = 422, description = "A form field is missing")
    )
)]
pub async fn submit_form(
    State(state): State<AppState>,
    ContactSubmission(form): ContactSubmission,
) -> Json<ContactForm> {
    Json(state.submissions.append(form).await)
}

/// List every contact submission
#[utoipa::path(
    get,
    path = "/submissions",
    tag = "forms",
    responses((status = 200, description = "All submissions in order", body = [ContactForm]))
)]
pub async fn list_submissions(State(state): State<AppState>) -> Json<Vec<ContactForm>> {
    Json(state.submissions.list().await)
}
