//! Assistant configuration: BaseConfig (front end + log) + lookup sources.

mod assistant_config;
mod base;


pub use assistant_config::AssistantConfig;
pub use base::{
    BaseConfig, DEFAULT_ASSISTANT_NAME, DEFAULT_LOG_FILE, DEFAULT_THINKING_MESSAGE,
    DEFAULT_WELCOME_MESSAGE,
};
