use std::net::TcpListener;

use env_logger::Env;
use seagrant::{configuration::get_configuration, services::ReportSource, startup::run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration()?;

    let address = configuration.application.address();
    let listener = TcpListener::bind(&address)?;
    let report_source = ReportSource::new(&configuration.upstream)?;

    log::info!("Server running on http://{}", address);
    log::info!("Scraping {}", configuration.upstream.listing_url);

    run(listener, report_source, configuration.ui)?.await?;
    Ok(())
}
