//! Base config: chat front end and logging. Loaded from env.

use anyhow::Result;
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/healthbot.log";
pub const DEFAULT_ASSISTANT_NAME: &str = "HealthCare360";
pub const DEFAULT_THINKING_MESSAGE: &str = "Thinking...";
pub const DEFAULT_WELCOME_MESSAGE: &str = "Hello! I'm your HealthCare360 AI Assistant. I can help answer questions on health topics, provide general information, or assist with any other queries you might have. How can I help you today?";

/// Base config: front end text and logging only.
#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// LOG_FILE
    pub log_file: String,
    /// LOG_TO_CONSOLE; mirrors logs to stderr
    pub log_to_console: bool,
    /// ASSISTANT_NAME, shown before every reply
    pub assistant_name: String,
    /// THINKING_MESSAGE, printed while a reply is being resolved
    pub thinking_message: String,
    /// WELCOME_MESSAGE, first message of every chat session
    pub welcome_message: String,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            log_file: DEFAULT_LOG_FILE.to_string(),
            log_to_console: false,
            assistant_name: DEFAULT_ASSISTANT_NAME.to_string(),
            thinking_message: DEFAULT_THINKING_MESSAGE.to_string(),
            welcome_message: DEFAULT_WELCOME_MESSAGE.to_string(),
        }
    }
}

impl BaseConfig {
    /// Load from environment variables.
    pub fn load() -> Result<Self> {
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let log_to_console = env::var("LOG_TO_CONSOLE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(false);
        let assistant_name =
            env::var("ASSISTANT_NAME").unwrap_or_else(|_| DEFAULT_ASSISTANT_NAME.to_string());
        let thinking_message =
            env::var("THINKING_MESSAGE").unwrap_or_else(|_| DEFAULT_THINKING_MESSAGE.to_string());
        let welcome_message =
            env::var("WELCOME_MESSAGE").unwrap_or_else(|_| DEFAULT_WELCOME_MESSAGE.to_string());

        Ok(Self {
            log_file,
            log_to_console,
            assistant_name,
            thinking_message,
            welcome_message,
        })
    }

    /// Validate config (log file and assistant name must be non-empty).
    pub fn validate(&self) -> Result<()> {
        if self.log_file.trim().is_empty() {
            anyhow::bail!("LOG_FILE is set but empty");
        }
        if self.assistant_name.trim().is_empty() {
            anyhow::bail!("ASSISTANT_NAME is set but empty");
        }
        Ok(())
    }
}
