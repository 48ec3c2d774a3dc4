use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::asset::Portfolio;
use crate::ratio::AllocationResult;
use crate::source::SourceError;

pub type PortfolioRatiosResponse = Portfolio<AllocationResult>;

#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Display, Error)]
pub enum PortfolioError {
    #[display("upstream failure: {_0}")]
    Upstream(#[error(source)] SourceError),
}

impl PortfolioError {
    /// What the caller is told. The cause stays in the server log.
    pub fn public_message(&self) -> &'static str {
        match self {
            PortfolioError::Upstream(SourceError::Status(_)) => {
                "Failed to fetch data from an external API."
            }
            PortfolioError::Upstream(_) => "An internal server error occurred.",
        }
    }
}

impl ResponseError for PortfolioError {
    fn status_code(&self) -> StatusCode {
        match self {
            PortfolioError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.public_message().to_string(),
        })
    }
}

pub mod server {
    use actix_web::middleware::DefaultHeaders;
    use actix_web::{web, HttpResponse};
    use log::error;

    use super::{PortfolioError, PortfolioRatiosResponse};
    use crate::collector::{ChangeSampler, Collector};
    use crate::ratio::calculate;
    use crate::source::ChangeSource;

    const INDEX_HTML: &str = include_str!("../../public/index.html");
    const MAIN_JS: &str = include_str!("../../public/main.js");

    pub async fn portfolio_ratios<S, R>(
        collector: web::Data<Collector<S, R>>,
    ) -> Result<web::Json<PortfolioRatiosResponse>, PortfolioError>
    where
        S: ChangeSource + 'static,
        R: ChangeSampler + 'static,
    {
        match collector.collect().await {
            Ok(changes) => Ok(web::Json(calculate(&changes))),
            Err(e) => {
                error!(
                    "PORTFOLIO: failed to collect changes for {}: {}",
                    collector.instrument(),
                    e
                );
                Err(PortfolioError::Upstream(e))
            }
        }
    }

    pub async fn index() -> HttpResponse {
        HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(INDEX_HTML)
    }

    pub async fn main_js() -> HttpResponse {
        HttpResponse::Ok()
            .content_type("text/javascript; charset=utf-8")
            .body(MAIN_JS)
    }

    /// Open CORS, the page may be hosted elsewhere.
    pub fn cors() -> DefaultHeaders {
        DefaultHeaders::new().add(("Access-Control-Allow-Origin", "*"))
    }

    /// Registers the API route and the page. The app must carry a `web::Data<Collector<S, R>>`.
    pub fn configure<S, R>(cfg: &mut web::ServiceConfig)
    where
        S: ChangeSource + 'static,
        R: ChangeSampler + 'static,
    {
        cfg.route(
            "/api/portfolio-ratios",
            web::get().to(portfolio_ratios::<S, R>),
        )
        .route("/", web::get().to(index))
        .route("/main.js", web::get().to(main_js));
    }
}
