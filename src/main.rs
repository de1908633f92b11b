use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use genius_server::{app_state::AppState, config::Config, handlers};

const JSON_LIMIT_BYTES: usize = 50 * 1024 * 1024;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    log::info!(
        "Genius Educational Software Backend starting on {}:{}",
        config.web_server_host,
        config.web_server_port
    );
    log::info!(
        "SendGrid API key: {}",
        if config.sendgrid_configured() { "configured" } else { "missing" }
    );
    log::info!(
        "Twilio credentials: {}",
        if config.twilio_configured() { "configured" } else { "missing" }
    );
    log::info!(
        "Claude API key: {}",
        if config.anthropic_configured() { "configured" } else { "missing" }
    );

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    let state = AppState::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::JsonConfig::default().limit(JSON_LIMIT_BYTES))
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .service(handlers::index)
            .service(handlers::health)
            .service(handlers::generate_quiz)
            .service(handlers::send_quiz_materials)
            .default_service(web::route().to(handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
