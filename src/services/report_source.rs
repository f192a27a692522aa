use crate::{
    configuration::UpstreamSettings,
    domain::{report::Report, report_filter::filter_reports},
    error::Result,
};

use super::{extract_reports, ListingFetcher};

/// Fetch, extract and filter the listing on every call. Nothing is kept between calls.
pub struct ReportSource {
    fetcher: ListingFetcher,
    listing_url: String,
    site_origin: String,
}

impl ReportSource {
    pub fn new(upstream: &UpstreamSettings) -> reqwest::Result<Self> {
        Ok(ReportSource {
            fetcher: ListingFetcher::new(&upstream.user_agent)?,
            listing_url: upstream.listing_url.clone(),
            site_origin: upstream.site_origin.clone(),
        })
    }

    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    pub async fn fetch_markup(&self) -> Result<String> {
        self.fetcher.fetch(&self.listing_url).await
    }

    pub async fn search(&self, keyword: Option<&str>) -> Result<Vec<Report>> {
        let markup = self.fetch_markup().await?;
        let reports = extract_reports(&markup, &self.listing_url, &self.site_origin)?;

        Ok(filter_reports(reports, keyword))
    }
}
