use actix_web::{get, http::StatusCode, web, HttpResponse};
use askama::Template;

use crate::configuration::UiSettings;

use super::{render_page, FETCH_FAILED_ADVISORY};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    keywords: Vec<String>,
    advisory: &'static str,
}

#[get("/")]
pub async fn default(ui: web::Data<UiSettings>) -> HttpResponse {
    render_page(
        &IndexTemplate {
            keywords: ui.keywords.clone(),
            advisory: FETCH_FAILED_ADVISORY,
        },
        StatusCode::OK,
    )
}
