// Fetches the listing once and prints what the extractor sees. Handy when the
// upstream layout changes and the API starts returning empty arrays.

use env_logger::Env;
use seagrant::{
    configuration::get_configuration,
    services::{count_rows, extract_reports, ReportSource},
};

const PREVIEW_ROWS: usize = 5;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let configuration = get_configuration()?;
    let upstream = &configuration.upstream;
    let report_source = ReportSource::new(upstream)?;

    let markup = report_source.fetch_markup().await?;
    println!("Table rows found: {}", count_rows(&markup)?);

    let reports = extract_reports(&markup, &upstream.listing_url, &upstream.site_origin)?;
    for report in reports.iter().take(PREVIEW_ROWS) {
        println!("Row {}: {} -> {}", report.id, report.title, report.full_url);
    }

    Ok(())
}
