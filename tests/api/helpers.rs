use std::net::TcpListener;

use actix_web::{http::StatusCode, web, App, HttpResponse, HttpServer};
use seagrant::{
    configuration::{UiSettings, UpstreamSettings, DEFAULT_KEYWORDS},
    services::ReportSource,
    startup::run,
};

pub const SITE_ORIGIN: &str = "https://www.scseagrant.org";

pub const ONE_ROW_LISTING: &str = r#"<html><body>
<table>
  <thead><tr><th>Title</th><th>Summary</th><th>Date</th><th>Type</th><th>Topics</th></tr></thead>
  <tbody>
    <tr>
      <td><a href="/docs/1.pdf">Coastal Erosion Report</a></td>
      <td>Study of erosion</td>
      <td>2023-01-01</td>
      <td>PDF</td>
      <td>Erosion, Coastal</td>
    </tr>
  </tbody>
</table>
</body></html>"#;

pub const MIXED_LISTING: &str = r#"<html><body>
<table><tbody>
  <tr><td><a href="/docs/oyster.pdf">Oyster Reef Restoration</a></td><td>Reef monitoring</td><td>2022</td><td>Fact Sheet</td><td>Oyster</td></tr>
  <tr><td><a href="/docs/blank.pdf"> </a></td><td>Wetland row without a title</td><td></td><td></td><td></td></tr>
  <tr><td><a href="https://repository.library.noaa.gov/view/noaa/1">Tidal Marsh Atlas</a></td><td>Mapping of wetlands</td><td>2021</td><td>Atlas</td><td>Wetland, Coastal</td></tr>
</tbody></table>
</body></html>"#;

pub enum Upstream {
    Page(&'static str),
    Status(u16),
    Unreachable,
}

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

async fn listing(upstream: web::Data<Upstream>) -> HttpResponse {
    match upstream.get_ref() {
        Upstream::Page(markup) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(*markup),
        Upstream::Status(code) => {
            HttpResponse::build(StatusCode::from_u16(*code).unwrap()).body("upstream says no")
        }
        Upstream::Unreachable => unreachable!(),
    }
}

fn bind_random_port() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

async fn spawn_upstream(upstream: Upstream) -> String {
    let (listener, port) = bind_random_port();
    let listing_url = format!("http://127.0.0.1:{}/publications-search/", port);

    if let Upstream::Unreachable = upstream {
        drop(listener);
        return listing_url;
    }

    let upstream = web::Data::new(upstream);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(upstream.clone())
            .route("/publications-search/", web::get().to(listing))
    })
    .workers(1)
    .listen(listener)
    .expect("Failed to listen on upstream address")
    .run();
    tokio::spawn(server);

    listing_url
}

pub async fn spawn_app(upstream: Upstream) -> TestApp {
    let listing_url = spawn_upstream(upstream).await;

    let upstream = UpstreamSettings {
        listing_url,
        site_origin: SITE_ORIGIN.to_string(),
        user_agent: "seagrant-tests".to_string(),
    };
    let ui = UiSettings {
        keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
    };
    let report_source = ReportSource::new(&upstream).expect("Failed to build report source");

    let (listener, port) = bind_random_port();
    let server = run(listener, report_source, ui).expect("Failed to bind address");
    tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        client: reqwest::Client::new(),
    }
}
