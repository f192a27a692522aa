use std::net::TcpListener;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{
    dev::Server,
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};

use crate::{
    configuration::UiSettings,
    routes::{default_route, report_route, reports_page_route},
    services::ReportSource,
};

pub fn run(
    listener: TcpListener,
    report_source: ReportSource,
    ui: UiSettings,
) -> Result<Server, std::io::Error> {
    let report_source = Data::new(report_source);
    let ui = Data::new(ui);

    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .send_wildcard()
            .allowed_methods(vec!["GET"])
            .allow_any_header();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(default_route::default)
            .service(web::scope("/api").service(report_route::get_reports))
            .service(reports_page_route::reports_page)
            .app_data(report_source.clone())
            .app_data(ui.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
