//! Currency conversion against the exchange-rate API, wired two ways:
//! constructor injection and service-locator resolution.

use anyhow::{Result, anyhow};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

use crate::core::config::ProviderConfig;
use crate::core::requester::Requester;
use crate::locator::Locator;

/// Name the locator-wired converter resolves its transport under.
pub const REQUESTER_SERVICE: &str = "requester";

/// Converter that receives its transport through the constructor.
pub struct CurrencyConverter {
    requester: Arc<dyn Requester>,
    base_url: String,
    api_key: String,
}

impl CurrencyConverter {
    pub fn new(requester: Arc<dyn Requester>, provider: &ProviderConfig) -> Self {
        CurrencyConverter {
            requester,
            base_url: provider.base_url.clone(),
            api_key: provider.api_key.clone(),
        }
    }

    /// Fetches the exchange rate for `from` -> `to`.
    ///
    /// The response is the compact ("ultra") format, a flat map keyed by
    /// `FROM_TO`. A response without a numeric value under that key is an
    /// error naming both codes; transport errors propagate unchanged.
    pub async fn convert(&self, from: &str, to: &str) -> Result<f64> {
        let pair = format!("{from}_{to}");
        let params = [
            ("q", pair.clone()),
            ("apiKey", self.api_key.clone()),
            ("compact", "ultra".to_string()),
        ];

        debug!("Requesting exchange rate for {pair}");
        let data = self.requester.get(&self.base_url, &params).await?;

        data.get(&pair)
            .and_then(Value::as_f64)
            .ok_or_else(|| anyhow!("Cannot convert from {from} to {to}"))
    }
}

/// Converter that pulls its transport out of a service locator instead of
/// taking it as a constructor argument.
pub struct LocatedCurrencyConverter {
    inner: CurrencyConverter,
}

impl std::fmt::Debug for LocatedCurrencyConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocatedCurrencyConverter")
            .finish_non_exhaustive()
    }
}

impl LocatedCurrencyConverter {
    /// Resolves an `Arc<dyn Requester>` registered under
    /// [`REQUESTER_SERVICE`]; fails when nothing is registered or the
    /// factory yields another type.
    pub fn from_locator(locator: &Locator, provider: &ProviderConfig) -> Result<Self> {
        let requester = locator.resolve::<Arc<dyn Requester>>(REQUESTER_SERVICE)?;
        Ok(LocatedCurrencyConverter {
            inner: CurrencyConverter::new(requester, provider),
        })
    }

    pub async fn convert(&self, from: &str, to: &str) -> Result<f64> {
        self.inner.convert(from, to).await
    }
}
