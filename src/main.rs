mod booking;
mod carousel;
mod catalog;
mod config;
mod contact;
mod content;
mod countdown;
mod gallery;
mod routes;
mod session;
mod state;
mod submit;
mod templates;
mod ticker;
mod validation;

use actix_files::Files;
use actix_web::{middleware, web, App, HttpServer};

use crate::{config::SiteConfig, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(err) = run().await {
        eprintln!("Startup error: {err}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let config = SiteConfig::from_env()?;
    let address = config.address();
    let static_dir = config.static_dir.clone();
    log::info!(
        "Promotion countdown ends at {}, simulated submit delay {} ms",
        config.promo_ends_at.to_rfc3339(),
        config.submit_delay.as_millis()
    );

    let state = AppState::new(config);
    let ticker = ticker::spawn(state.clone());

    log::info!("Starting Lepri Hair Spa on http://{address}");

    let served = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(middleware::Logger::default())
            .service(Files::new("/static", &static_dir).prefer_utf8(true))
            .configure(routes::configure)
    })
    .bind(address)?
    .run()
    .await;

    ticker.abort();
    served?;
    Ok(())
}
