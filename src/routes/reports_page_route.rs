use actix_web::{get, http::StatusCode, web, HttpResponse};
use askama::Template;

use crate::{domain::report::Report, services::ReportSource};

use super::{render_page, report_route::ReportsQuery, FETCH_FAILED_ADVISORY};

const SUMMARY_PREVIEW_CHARS: usize = 150;

#[derive(Template)]
#[template(path = "reports.html")]
struct ReportsTemplate {
    keyword: String,
    cards: Vec<ReportCard>,
    awaiting_keyword: bool,
    failed: bool,
    advisory: &'static str,
}

struct ReportCard {
    title: String,
    summary: String,
    date: String,
    report_type: String,
    tags: Vec<String>,
    full_url: String,
}

impl From<Report> for ReportCard {
    fn from(value: Report) -> Self {
        Self {
            tags: value.topic_tags(),
            summary: preview(&value.summary),
            title: value.title,
            date: value.date,
            report_type: value.report_type,
            full_url: value.full_url,
        }
    }
}

fn preview(summary: &str) -> String {
    match summary.char_indices().nth(SUMMARY_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &summary[..cut]),
        None => summary.to_string(),
    }
}

#[get("/reports")]
pub async fn reports_page(
    report_source: web::Data<ReportSource>,
    query: web::Query<ReportsQuery>,
) -> HttpResponse {
    let keyword = query.keyword.clone().unwrap_or_default();

    if keyword.trim().is_empty() {
        return render_page(
            &ReportsTemplate {
                keyword,
                cards: vec![],
                awaiting_keyword: true,
                failed: false,
                advisory: FETCH_FAILED_ADVISORY,
            },
            StatusCode::OK,
        );
    }

    let result = report_source.search(Some(keyword.as_str())).await;

    let (cards, failed, status): (Vec<ReportCard>, bool, StatusCode) = match result {
        Ok(reports) => (
            reports.into_iter().map(ReportCard::from).collect(),
            false,
            StatusCode::OK,
        ),
        Err(e) => {
            log::error!("Error rendering reports for {:?}: {:?}", keyword, e);
            (vec![], true, StatusCode::INTERNAL_SERVER_ERROR)
        }
    };

    render_page(
        &ReportsTemplate {
            keyword,
            cards,
            awaiting_keyword: false,
            failed,
            advisory: FETCH_FAILED_ADVISORY,
        },
        status,
    )
}
