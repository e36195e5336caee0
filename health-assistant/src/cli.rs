//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "healthbot")]
#[command(about = "HealthCare360 assistant: chat or ask a single question", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive chat session on stdin/stdout (/history, /quit).
    Chat,
    /// Answer one question and exit.
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

impl Commands {
    /// The `ask` words joined back into one question.
    pub fn question(&self) -> Option<String> {
        match self {
            Self::Ask { question } => Some(question.join(" ")),
            Self::Chat => None,
        }
    }
}
