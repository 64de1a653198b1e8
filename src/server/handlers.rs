//! HTTP handlers for the label form, sheet upload, and label download.

use axum::extract::{Multipart, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use chrono::Local;
use serde::Serialize;

use crate::label::{self, LabelRequest};
use crate::sheet;

use super::error::{AppError, AppResult};
use super::html;
use super::state::AppState;

/// Today's date exactly as the renderer will print it.
fn print_date_today() -> String {
    Local::now().format(label::DATE_FORMAT).to_string()
}

/// GET / -- the label form with the products preloaded at startup.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(html::index_page(&state.products, None, &print_date_today()))
}

/// POST /products -- parse an uploaded spreadsheet and re-render the form
/// with its product list.
///
/// The parsed list travels back inside the page; nothing is cached on the
/// server.
pub async fn upload_products(mut multipart: Multipart) -> AppResult<Html<String>> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        upload = Some((filename, data));
        break;
    }

    let Some((filename, data)) = upload else {
        return Err(AppError::BadRequest(
            "No spreadsheet file in upload".to_string(),
        ));
    };

    let products = sheet::products_from_upload(&filename, &data)?;
    tracing::info!(file = %filename, count = products.len(), "Parsed uploaded sheet");

    let notice = format!("Loaded {} products from {}", products.len(), filename);
    Ok(Html(html::index_page(
        &products,
        Some(&notice),
        &print_date_today(),
    )))
}

/// POST /labels -- render the requested label and return it as a PDF
/// download.
pub async fn create_label(Form(request): Form<LabelRequest>) -> AppResult<Response> {
    let label = label::render(&request)?;
    tracing::info!(
        name = %request.name,
        size = %request.size,
        bytes = label.bytes.len(),
        "Rendered label"
    );

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", label.filename),
        ),
    ];
    Ok((headers, label.bytes).into_response())
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- returns service health.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
