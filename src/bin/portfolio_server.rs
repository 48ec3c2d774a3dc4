use actix_web::{middleware, web, App, HttpServer};
use anyhow::{Context, Result};
use env_logger::Env;
use log::info;

use portfolio_ratios::collector::{Collector, UniformSampler};
use portfolio_ratios::config::Config;
use portfolio_ratios::http::portfolio::server::{configure, cors};
use portfolio_ratios::source::coingecko::CoinGecko;

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env()?;

    let source = CoinGecko::new(config.upstream_url.clone());
    let collector = web::Data::new(Collector::new(
        source,
        UniformSampler,
        config.instrument.clone(),
    ));

    info!(
        "Server listening at http://{}:{}, live instrument {} from {}",
        config.address, config.port, config.instrument, config.upstream_url
    );

    HttpServer::new(move || {
        App::new()
            .app_data(collector.clone())
            .wrap(cors())
            .wrap(middleware::Logger::default())
            .configure(configure::<CoinGecko, UniformSampler>)
    })
    .bind((config.address.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.address, config.port))?
    .run()
    .await?;
    Ok(())
}
