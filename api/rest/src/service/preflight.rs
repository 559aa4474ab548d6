use actix_web::{guard, http::header, web, HttpResponse};

pub const ALLOWED_METHODS: [&str; 3] = ["GET", "POST", "OPTIONS"];
pub const ALLOWED_HEADERS: [&str; 4] = ["authorization", "x-client-info", "apikey", "content-type"];

/// Answers every OPTIONS request, including ones `Cors` does not treat as a
/// preflight, ahead of any bearer guard.
pub fn preflight_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{tail:.*}")
            .guard(guard::Options())
            .to(preflight),
    );
}

async fn preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS.join(", ")))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS.join(", ")))
        .finish()
}
