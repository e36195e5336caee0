//! AssistantConfig: BaseConfig + lookup config. Use load() for env-based loading.

use anyhow::Result;
use lookup::{EnvLookupConfig, LookupConfig};

use super::BaseConfig;

pub struct AssistantConfig {
    pub base: BaseConfig,
    pub lookup: EnvLookupConfig,
}

impl AssistantConfig {
    /// Load full config from environment variables.
    /// Call validate() after load to check config before init.
    pub fn load() -> Result<Self> {
        let base = BaseConfig::load()?;
        let lookup = EnvLookupConfig::from_env()?;
        Ok(Self { base, lookup })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.lookup.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn lookup(&self) -> &dyn LookupConfig {
        &self.lookup
    }

    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn log_to_console(&self) -> bool {
        self.base.log_to_console
    }
    pub fn assistant_name(&self) -> &str {
        &self.base.assistant_name
    }
    pub fn thinking_message(&self) -> &str {
        &self.base.thinking_message
    }
    pub fn welcome_message(&self) -> &str {
        &self.base.welcome_message
    }
}
