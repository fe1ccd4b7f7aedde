//
// Copyright (c) 2025 Nathan Fiedler
//

//! The main application binary that serves the marketing site and the
//! contact endpoint behind the sales banner.

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_cors::Cors;
    use actix_files::Files;
    use actix_web::{http, middleware, web};
    use immo1301::data::sources::{SmtpConfig, SmtpMailSource};
    use immo1301::domain::sources::MailDataSource;
    use immo1301::preso::api;
    use immo1301::preso::leptos::{shell, App};
    use leptos::config::get_configuration;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use log::{error, info};
    use std::io;
    use std::sync::Arc;

    dotenvy::dotenv().ok();
    env_logger::init();
    let conf = get_configuration(None)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
    // fail early if the relay credentials are missing, there is no point in
    // serving a contact form that cannot deliver anything
    let config = SmtpConfig::from_env().map_err(|err| {
        error!("mail relay configuration error: {}", err);
        io::Error::new(io::ErrorKind::Other, err.to_string())
    })?;
    let mail_source: Arc<dyn MailDataSource> = Arc::new(SmtpMailSource::new(config));
    let addr = conf.leptos_options.site_addr;
    info!("listening on http://{}/...", addr);
    actix_web::HttpServer::new(move || {
        let routes = generate_route_list(App);
        let leptos_options = &conf.leptos_options;
        let site_root = leptos_options.site_root.clone().to_string();
        actix_web::App::new()
            .app_data(web::Data::new(mail_source.clone()))
            .wrap(middleware::Logger::default())
            .wrap(
                // Respond to OPTIONS requests for CORS support.
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST"])
                    .allowed_headers(vec![http::header::AUTHORIZATION, http::header::ACCEPT])
                    .allowed_header(http::header::CONTENT_TYPE)
                    .max_age(3600),
            )
            .service(web::resource("/api/send").route(web::post().to(api::send)))
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/assets", &site_root))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no server-side main when compiling for the browser; see lib.rs for the
    // hydrate entry point
}
