pub mod cli;
pub mod converter;
pub mod core;
pub mod locator;
pub mod providers;

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info};

use crate::converter::{CurrencyConverter, LocatedCurrencyConverter, REQUESTER_SERVICE};
use crate::core::config::AppConfig;
use crate::core::requester::Requester;
use crate::locator::Locator;
use crate::providers::HttpRequester;

/// How the converter obtains its HTTP transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wiring {
    /// Constructor injection: the transport is passed in directly.
    Injected,
    /// Service locator: the transport is resolved by name from the global
    /// registry.
    Located,
}

pub struct ConvertRequest {
    pub from: String,
    pub to: String,
    pub wiring: Wiring,
}

/// Loads configuration, wires a converter per `request.wiring` and fetches
/// the exchange rate.
pub async fn run_convert(request: &ConvertRequest, config_path: Option<&str>) -> Result<f64> {
    info!("Currency converter starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let requester: Arc<dyn Requester> = Arc::new(HttpRequester::new()?);

    match request.wiring {
        Wiring::Injected => {
            let converter = CurrencyConverter::new(requester, &config.provider);
            converter.convert(&request.from, &request.to).await
        }
        Wiring::Located => {
            Locator::global().register(REQUESTER_SERVICE, move || {
                Box::new(Arc::clone(&requester))
            });
            let converter = LocatedCurrencyConverter::from_locator(Locator::global(), &config.provider)?;
            converter.convert(&request.from, &request.to).await
        }
    }
}
