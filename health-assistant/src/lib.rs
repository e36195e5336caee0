//! HealthCare360 assistant front end: config, CLI, component wiring and the chat session runner.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;

pub use cli::{Cli, Commands};
pub use components::{build_lookup_sources, build_resolver};
pub use config::{AssistantConfig, BaseConfig};
pub use runner::{ask_once, render_message, run_ask, run_chat, run_session};
