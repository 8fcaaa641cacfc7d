//! HTTP handlers and template rendering helpers.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use tera::{Context, Tera};

pub mod main;
pub mod search;

/// Renders `template` into memory and only then builds a `200 OK` response,
/// so a failing template never produces a partial page.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, template, context, StatusCode::OK)
}

/// Same as [`render_template`] with an explicit success status.
pub fn render_template_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
