use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::forms::search::SearchForm;
use crate::news::NewsClient;
use crate::routes::render_template;
use crate::services::{ServiceError, search as search_service};

const PLAIN_TEXT: &str = "text/plain; charset=utf-8";

#[get("/search")]
/// Fetch and render one page of articles matching `q`.
pub async fn search(
    params: web::Query<SearchForm>,
    client: web::Data<dyn NewsClient>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match search_service::search_news(client.get_ref(), params.into_inner()).await {
        Ok(view) => {
            let mut context = Context::new();
            context.insert("search", &view);

            render_template(&tera, "main/index.html", &context)
        }
        Err(ServiceError::Form(message)) => {
            log::warn!("Rejected search request: {message}");
            HttpResponse::BadRequest()
                .content_type(PLAIN_TEXT)
                .body(message)
        }
        Err(err) => HttpResponse::InternalServerError()
            .content_type(PLAIN_TEXT)
            .body(err.to_string()),
    }
}
