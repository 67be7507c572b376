use axum::{
	body::Body,
	extract::rejection,
	http::{Response, StatusCode},
	response::IntoResponse,
	Json,
};
use serde::Serialize;

use crate::store;

/// Error type for the application.
///
/// The Display trait is not sent to the client, so it can show
/// sensitive information.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("validation error: {0}")]
	Validation(#[from] validator::ValidationErrors),
	#[error("json error: {0}")]
	Json(#[from] rejection::JsonRejection),
	#[error("query error: {0}")]
	Query(#[from] rejection::QueryRejection),
	#[error("malformed post id {0}")]
	MalformedPostId(String),
	#[error("unknown post {0}")]
	UnknownPost(String),
	#[error("store error: {0}")]
	Store(#[from] store::Error),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub success: bool,
	pub errors: Vec<String>,
}

impl IntoResponse for Error {
	fn into_response(self) -> Response<Body> {
		let (status, errors) = match self {
			Error::Validation(errors) => (
				StatusCode::BAD_REQUEST,
				errors
					.field_errors()
					.into_iter()
					.flat_map(move |(field, errors)| {
						errors
							.into_iter()
							.map(move |error| format!("{field}: {error}"))
					})
					.collect(),
			),
			Error::Json(error) => (StatusCode::BAD_REQUEST, vec![error.to_string()]),
			Error::Query(error) => (StatusCode::BAD_REQUEST, vec![error.to_string()]),
			Error::MalformedPostId(id) => (
				StatusCode::BAD_REQUEST,
				vec![format!("malformed post id: {id}")],
			),
			Error::UnknownPost(id) => (StatusCode::NOT_FOUND, vec![format!("unknown post: {id}")]),
			Error::Store(error) => {
				tracing::error!("store error: {error}");

				(StatusCode::INTERNAL_SERVER_ERROR, Vec::new())
			}
		};

		(
			status,
			Json(ErrorResponse {
				success: false,
				errors,
			}),
		)
			.into_response()
	}
}
