use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::dto::search::SearchView;
use crate::routes::{render_template, render_template_with_status};

#[get("/")]
/// Show the empty search page.
pub async fn show_index(tera: web::Data<Tera>) -> impl Responder {
    let mut context = Context::new();
    context.insert("search", &Option::<SearchView>::None);

    render_template(&tera, "main/index.html", &context)
}

/// Fallback for every unmatched path.
pub async fn not_found(tera: web::Data<Tera>) -> HttpResponse {
    let mut context = Context::new();
    context.insert("search", &Option::<SearchView>::None);

    let response = render_template_with_status(
        &tera,
        "main/not_found.html",
        &context,
        StatusCode::NOT_FOUND,
    );

    if response.status() == StatusCode::NOT_FOUND {
        response
    } else {
        HttpResponse::NotFound().finish()
    }
}
