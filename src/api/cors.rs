use actix_web::HttpResponse;
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE,
};

pub const ALLOW_ORIGIN: &str = "*";
pub const MAX_AGE_SECS: &str = "86400";

/// What a resource advertises to browsers on pre-flight.
#[derive(Debug, Clone, Copy)]
pub struct Preflight {
    pub methods: &'static str,
    pub headers: &'static str,
}

pub const REQUESTS: Preflight = Preflight {
    methods: "GET, POST, OPTIONS",
    headers: "Content-Type, X-User-Id",
};

pub const EMPLOYEES: Preflight = Preflight {
    methods: "GET, POST, PUT, DELETE, OPTIONS",
    headers: "Content-Type",
};

impl Preflight {
    /// 200 with an empty body and the CORS headers only.
    pub fn respond(self) -> HttpResponse {
        HttpResponse::Ok()
            .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN))
            .insert_header((ACCESS_CONTROL_ALLOW_METHODS, self.methods))
            .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, self.headers))
            .insert_header((ACCESS_CONTROL_MAX_AGE, MAX_AGE_SECS))
            .finish()
    }
}

pub async fn requests_preflight() -> HttpResponse {
    REQUESTS.respond()
}

pub async fn employees_preflight() -> HttpResponse {
    EMPLOYEES.respond()
}
