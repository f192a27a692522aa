use scraper::{ElementRef, Html, Selector};

use crate::{
    domain::report::{resolve_link, Report},
    error::{ReportError, Result},
};

// Column positions (1-based, as in `:nth-child`) of the publications table.
pub const TITLE_COLUMN: usize = 1;
pub const SUMMARY_COLUMN: usize = 2;
pub const DATE_COLUMN: usize = 3;
pub const TYPE_COLUMN: usize = 4;
pub const TOPICS_COLUMN: usize = 5;

const ROW_SELECTOR: &str = "table tbody tr";

struct RowSelectors {
    title_link: Selector,
    title: Selector,
    summary: Selector,
    date: Selector,
    report_type: Selector,
    topics: Selector,
}

impl RowSelectors {
    fn new() -> Result<Self> {
        Ok(RowSelectors {
            title_link: parse_selector(&format!("td:nth-child({}) a", TITLE_COLUMN))?,
            title: column_selector(TITLE_COLUMN)?,
            summary: column_selector(SUMMARY_COLUMN)?,
            date: column_selector(DATE_COLUMN)?,
            report_type: column_selector(TYPE_COLUMN)?,
            topics: column_selector(TOPICS_COLUMN)?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| ReportError::Extraction(format!("invalid selector `{}`: {:?}", css, e)))
}

fn column_selector(column: usize) -> Result<Selector> {
    parse_selector(&format!("td:nth-child({})", column))
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn cell_text(row: ElementRef, selector: &Selector) -> String {
    row.select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

/// Number of body rows in the listing table, titled or not.
pub fn count_rows(markup: &str) -> Result<usize> {
    let row_selector = parse_selector(ROW_SELECTOR)?;
    Ok(Html::parse_document(markup).select(&row_selector).count())
}

/// Converts the listing markup into reports, in document order.
///
/// Rows whose title is blank are dropped after their id has been assigned.
/// A page without the table yields no reports rather than an error.
pub fn extract_reports(markup: &str, base_url: &str, site_origin: &str) -> Result<Vec<Report>> {
    let row_selector = parse_selector(ROW_SELECTOR)?;
    let selectors = RowSelectors::new()?;
    let document = Html::parse_document(markup);

    let mut scanned = 0;
    let mut reports = vec![];

    for (id, row) in document.select(&row_selector).enumerate() {
        scanned += 1;

        let title_link = row.select(&selectors.title_link).next();
        let title = match title_link {
            Some(link) => element_text(link),
            None => cell_text(row, &selectors.title),
        };
        if title.is_empty() {
            continue;
        }

        let href = title_link.and_then(|link| link.value().attr("href"));

        reports.push(Report {
            id,
            title,
            summary: cell_text(row, &selectors.summary),
            date: cell_text(row, &selectors.date),
            report_type: cell_text(row, &selectors.report_type),
            topics: cell_text(row, &selectors.topics),
            full_url: resolve_link(href, base_url, site_origin),
        });
    }

    log::info!(
        "Scanned {} table rows, extracted {} reports",
        scanned,
        reports.len()
    );

    Ok(reports)
}
