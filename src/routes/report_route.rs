use actix_web::{get, web, HttpResponse};
use serde::Deserialize;

use crate::services::ReportSource;

#[derive(Deserialize)]
pub struct ReportsQuery {
    pub keyword: Option<String>,
}

#[get("/reports")]
pub async fn get_reports(
    report_source: web::Data<ReportSource>,
    query: web::Query<ReportsQuery>,
) -> HttpResponse {
    match report_source.search(query.keyword.as_deref()).await {
        Ok(reports) => HttpResponse::Ok().json(reports),
        Err(e) => {
            log::error!(
                "Error scraping reports from {}: {:?}",
                report_source.listing_url(),
                e
            );
            HttpResponse::InternalServerError()
                .json(serde_json::json!({ "error": "Failed to fetch reports" }))
        }
    }
}
