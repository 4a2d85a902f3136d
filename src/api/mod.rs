pub mod cors;
pub mod employees;
pub mod requests;
pub mod response;

use std::str::FromStr;

use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Deserializer, de};

use crate::error::AppError;

/// Treats a missing or blank query value as absent.
pub(crate) fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("unsupported value: {value}"))),
    }
}

/// Any method/action combination the resources do not serve.
pub async fn invalid_action() -> Result<HttpResponse, AppError> {
    Err(AppError::validation("Invalid action"))
}

/// Scope fallback: answers every pre-flight, rejects everything else.
pub async fn fallback(req: HttpRequest) -> Result<HttpResponse, AppError> {
    if *req.method() == Method::OPTIONS {
        return Ok(cors::REQUESTS.respond());
    }
    invalid_action().await
}

/// Turns extractor failures into `{"success": false, "error": ...}` bodies.
pub fn extractor_configs(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .content_type_required(false)
            .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::validation(err.to_string()).into()),
    );
}
