use axum::{
	Json, Router,
	extract::{Path, Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use rust_decimal::Decimal;

use hearth_domain::criteria::SearchCriteria;
use hearth_service::{
	ChatMessageRequest, ChatMessageResponse, ListingSummary, SearchResponse, ServiceError,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/chatbot/message", post(chatbot_message))
		.route("/api/properties/search", get(search_properties))
		.route("/api/properties/featured", get(featured_properties))
		.route("/api/properties/latest", get(latest_properties))
		.route("/api/properties/{id}", get(property_details))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn chatbot_message(
	State(state): State<AppState>,
	Json(payload): Json<ChatMessageRequest>,
) -> Result<Json<ChatMessageResponse>, ApiError> {
	let response = state.service.process_message(payload).await?;
	Ok(Json(response))
}

/// Search filters as they appear in deep links and the search form. Field
/// names are PascalCase on the wire; absent or malformed values degrade to
/// "unconstrained" during criteria normalization.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchParams {
	keyword: Option<String>,
	property_type: Option<String>,
	listing_type: Option<String>,
	city: Option<String>,
	min_price: Option<Decimal>,
	max_price: Option<Decimal>,
	min_bedrooms: Option<i32>,
	max_bedrooms: Option<i32>,
}
impl SearchParams {
	fn into_criteria(self) -> SearchCriteria {
		SearchCriteria {
			keyword: self.keyword,
			property_kind: self.property_type,
			listing_kind: self.listing_type,
			city: self.city,
			min_price: self.min_price,
			max_price: self.max_price,
			min_bedrooms: self.min_bedrooms,
			max_bedrooms: self.max_bedrooms,
		}
	}
}

async fn search_properties(
	State(state): State<AppState>,
	Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search(params.into_criteria()).await?;
	Ok(Json(response))
}

async fn featured_properties(
	State(state): State<AppState>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.featured().await?;
	Ok(Json(response))
}

async fn latest_properties(
	State(state): State<AppState>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.latest().await?;
	Ok(Json(response))
}

async fn property_details(
	State(state): State<AppState>,
	Path(id): Path<i64>,
) -> Result<Json<ListingSummary>, ApiError> {
	match state.service.listing(id).await? {
		Some(summary) => Ok(Json(summary)),
		None => Err(ApiError::new(StatusCode::NOT_FOUND, format!("Listing {id} not found."))),
	}
}

#[derive(Debug, serde::Serialize)]
struct ErrorBody {
	error: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}
impl ApiError {
	fn new(status: StatusCode, message: impl Into<String>) -> Self {
		Self { status, message: message.into() }
	}
}
impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } =>
				ApiError::new(StatusCode::BAD_REQUEST, message),
			ServiceError::Storage { message } | ServiceError::Provider { message } => {
				tracing::error!(error = %message, "Request failed.");

				ApiError::new(
					StatusCode::INTERNAL_SERVER_ERROR,
					"An internal error occurred.",
				)
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error: self.message };

		(self.status, Json(body)).into_response()
	}
}
