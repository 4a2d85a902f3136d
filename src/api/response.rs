use actix_web::http::StatusCode;
use actix_web::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;

use super::cors::ALLOW_ORIGIN;
use crate::error::AppError;

/// 200 JSON response carrying the CORS origin header.
pub fn json_ok<T: Serialize>(body: T) -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN))
        .json(body)
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Config(_) | AppError::Storage(_) | AppError::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN))
            .json(json!({
                "success": false,
                "error": self.to_string(),
            }))
    }
}
