use reqwest::Client;

use crate::error::Result;

/// Plain GET of the listing page. One request per call: no cache, no retry.
pub struct ListingFetcher {
    client: Client,
}

impl ListingFetcher {
    pub fn new(user_agent: &str) -> reqwest::Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(ListingFetcher { client })
    }

    pub async fn fetch(&self, url: &str) -> Result<String> {
        let markup = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        log::info!("Fetched {} bytes from {}", markup.len(), url);
        Ok(markup)
    }
}
