//! Calculator Module definition

use std::sync::Arc;

use anyhow::{Context, Result};
use calculator_sdk::CalculatorApi;
use figment::Figment;
use tracing::{debug, info};

use crate::config::CalculatorConfig;
use crate::domain::Service;
use crate::local_client::CalculatorLocalClient;

/// Calculator module.
///
/// Owns the domain service and hands out the `CalculatorApi` client.
#[derive(Clone)]
pub struct CalculatorModule {
    service: Arc<Service>,
    client: Arc<dyn CalculatorApi>,
}

impl CalculatorModule {
    /// Initializes the module from the host configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the `calculator` configuration section is invalid.
    pub fn init(figment: &Figment) -> Result<Self> {
        info!("Initializing calculator module");

        let cfg = CalculatorConfig::from_figment(figment)
            .context("invalid calculator module configuration")?;
        debug!(overflow = ?cfg.overflow, "Loaded calculator config");

        let module = Self::with_config(&cfg);
        info!(overflow = ?module.service.policy(), "calculator module initialized");
        Ok(module)
    }

    #[must_use]
    pub fn with_config(cfg: &CalculatorConfig) -> Self {
        let service = Arc::new(Service::new(cfg.overflow));
        let client: Arc<dyn CalculatorApi> = Arc::new(CalculatorLocalClient::new(service.clone()));
        Self { service, client }
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn CalculatorApi> {
        self.client.clone()
    }
}

impl Default for CalculatorModule {
    fn default() -> Self {
        Self::with_config(&CalculatorConfig::default())
    }
}
