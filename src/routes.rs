use crate::{
    api::{self, cors, employees, requests},
    config::Config,
    error::AppError,
};
use actix_governor::{
    Governor, GovernorConfig, GovernorConfigBuilder, PeerIpKeyExtractor,
    governor::middleware::NoOpMiddleware,
};
use actix_web::{Scope, http::Method, web};

pub type RateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-IP limiter shared by every worker.
pub fn rate_limit(config: &Config) -> Result<RateLimit, AppError> {
    let requests_per_min = config.rate_api_per_min.max(1);
    let per_ms = 60_000 / requests_per_min as u64;

    GovernorConfigBuilder::default()
        .per_millisecond(per_ms.max(1))
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .ok_or_else(|| AppError::Config("invalid rate limit settings".to_string()))
}

pub fn configure(cfg: &mut web::ServiceConfig, config: &Config, rate_limit: &RateLimit) {
    cfg.service(api_scope(&config.api_prefix).wrap(Governor::new(rate_limit)));
}

/// Both handlers under `prefix`, without rate limiting.
pub fn api_scope(prefix: &str) -> Scope {
    web::scope(prefix)
        .configure(api::extractor_configs)
        // /requests
        .service(
            web::resource("/requests")
                .route(web::get().to(requests::get_requests))
                .route(web::post().to(requests::post_requests))
                .route(web::method(Method::OPTIONS).to(cors::requests_preflight))
                .default_service(web::to(api::invalid_action)),
        )
        // /employees
        .service(
            web::resource("/employees")
                .route(web::get().to(employees::get_employees))
                .route(web::post().to(employees::post_employees))
                .route(web::method(Method::OPTIONS).to(cors::employees_preflight))
                .default_service(web::to(api::invalid_action)),
        )
        .default_service(web::to(api::fallback))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_accepts_zero_as_one_per_minute() {
        let config = Config {
            rate_api_per_min: 0,
            ..Config::for_tests()
        };
        assert!(rate_limit(&config).is_ok());
    }

    #[test]
    fn rate_limit_accepts_high_rates() {
        let config = Config {
            rate_api_per_min: 120_000,
            ..Config::for_tests()
        };
        assert!(rate_limit(&config).is_ok());
    }
}
