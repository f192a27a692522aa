pub mod default_route;
pub mod report_route;
pub mod reports_page_route;

use actix_web::{http::StatusCode, HttpResponse};
use askama::Template;

pub const FETCH_FAILED_ADVISORY: &str =
    "Could not load real-time reports. Please ensure the scraper server is running.";

fn render_page<T: Template>(template: &T, status: StatusCode) -> HttpResponse {
    match template.render() {
        Ok(body) => HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render template: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
