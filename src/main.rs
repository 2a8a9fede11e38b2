use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use ytquiz_server::{app_state::AppState, config::Config, handlers};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let host = config.web_server_host.clone();
    let port = config.web_server_port;

    let state = AppState::new(config);

    log::info!("starting HTTP server on {host}:{port}");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Logger::default())
            // Open CORS: the quiz frontend is served from another origin.
            .wrap(Cors::permissive())
            .service(handlers::root)
            .service(handlers::health_check)
            .service(handlers::generate_quiz)
            .service(handlers::submit_quiz)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
