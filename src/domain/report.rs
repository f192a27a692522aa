use serde::{Deserialize, Serialize};
use url::Url;

/// One publication row scraped from the listing table.
///
/// `id` is the row's position among every body row of the table, so ids in a
/// response are not contiguous when untitled rows were dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: usize,
    pub title: String,
    pub summary: String,
    pub date: String,
    #[serde(rename = "type")]
    pub report_type: String,
    pub topics: String,
    #[serde(rename = "fullUrl")]
    pub full_url: String,
}

impl Report {
    pub fn topic_tags(&self) -> Vec<String> {
        self.topics
            .split(',')
            .map(|topic| topic.trim().to_string())
            .filter(|topic| !topic.is_empty())
            .collect()
    }
}

/// Turns the href of a title link into an absolute url.
///
/// No link falls back to the listing page itself, http(s) links are kept
/// verbatim and anything else is glued onto the site origin. Other schemes
/// (`javascript:`, `data:`, ...) never survive as-is.
pub fn resolve_link(href: Option<&str>, base_url: &str, site_origin: &str) -> String {
    match href.map(str::trim) {
        None | Some("") => base_url.to_string(),
        Some(link) => match Url::parse(link) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => link.to_string(),
            _ => format!("{}{}", site_origin, link),
        },
    }
}
