//! Contact Routes - detail page loader and its actions
//!
//! HTTP handlers that delegate to ContactService for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Form, Json, Router,
};

use contacts::render_contact;

use super::into_http_error;
use crate::models::{ContactPageResponse, ContactResponse, EditContactForm, FavouriteForm};
use crate::AppState;

/// Load a contact with its rendering instructions
#[utoipa::path(
    get,
    path = "/contacts/{contact_id}",
    params(
        ("contact_id" = String, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Contact found", body = ContactPageResponse),
        (status = 404, description = "No contact found for the ID", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Contact"
)]
pub async fn get_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> Result<Json<ContactPageResponse>, (StatusCode, String)> {
    let contact = state
        .contact_service
        .load(&contact_id)
        .await
        .map_err(into_http_error)?;

    let view = render_contact(&contact);

    Ok(Json(ContactPageResponse {
        contact: contact.into(),
        view,
    }))
}

/// Set or clear the favourite flag
#[utoipa::path(
    post,
    path = "/contacts/{contact_id}",
    params(
        ("contact_id" = String, Path, description = "Contact ID")
    ),
    request_body(content = FavouriteForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Favourite updated", body = ContactResponse),
        (status = 404, description = "No contact found for the ID", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Contact"
)]
pub async fn update_favourite(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Json<ContactResponse>, (StatusCode, String)> {
    let form = FavouriteForm::from_pairs(pairs);
    let contact = state
        .contact_service
        .toggle_favourite(&contact_id, form.favourite.as_deref())
        .await
        .map_err(into_http_error)?;

    Ok(Json(contact.into()))
}

/// Edit a contact's details
#[utoipa::path(
    post,
    path = "/contacts/{contact_id}/edit",
    params(
        ("contact_id" = String, Path, description = "Contact ID")
    ),
    request_body(content = EditContactForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Contact updated", body = ContactResponse),
        (status = 404, description = "No contact found for the ID", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Contact"
)]
pub async fn edit_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
    Form(form): Form<EditContactForm>,
) -> Result<Json<ContactResponse>, (StatusCode, String)> {
    let contact = state
        .contact_service
        .edit(&contact_id, form.into())
        .await
        .map_err(into_http_error)?;

    Ok(Json(contact.into()))
}

/// Delete a contact
#[utoipa::path(
    post,
    path = "/contacts/{contact_id}/destroy",
    params(
        ("contact_id" = String, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Contact deleted"),
        (status = 404, description = "No contact found for the ID", body = String),
        (status = 500, description = "Internal server error")
    ),
    tag = "Contact"
)]
pub async fn destroy_contact(
    State(state): State<AppState>,
    Path(contact_id): Path<String>,
) -> Result<Json<serde_json::Value>, (StatusCode, String)> {
    state
        .contact_service
        .destroy(&contact_id)
        .await
        .map_err(into_http_error)?;

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Contact deleted"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/contacts/:contact_id",
            get(get_contact).post(update_favourite),
        )
        .route("/contacts/:contact_id/edit", post(edit_contact))
        .route("/contacts/:contact_id/destroy", post(destroy_contact))
}
