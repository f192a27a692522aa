use super::report::Report;

/// Keeps reports whose title, summary or topics contain `keyword`, ignoring case.
/// A missing or empty keyword returns the input as is.
pub fn filter_reports(reports: Vec<Report>, keyword: Option<&str>) -> Vec<Report> {
    let needle = match keyword {
        Some(k) if !k.is_empty() => k.to_lowercase(),
        _ => return reports,
    };

    reports
        .into_iter()
        .filter(|report| {
            [&report.title, &report.summary, &report.topics]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}
