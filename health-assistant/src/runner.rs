//! Chat session runner: reads lines, resolves replies in order, keeps the transcript in memory.

use anyhow::Result;
use assistant_core::{Conversation, Message, Sender};
use chrono::Local;
use responder_handlers::ResponseResolver;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, instrument};

use super::components::build_resolver;
use super::config::{AssistantConfig, BaseConfig};

/// Label shown before user messages in the transcript.
pub const USER_LABEL: &str = "You";

/// One transcript line: `{who} [HH:MM]: {text}`, local time.
pub fn render_message(assistant_name: &str, message: &Message) -> String {
    let who = match message.sender {
        Sender::User => USER_LABEL,
        Sender::Bot => assistant_name,
    };
    format!(
        "{} [{}]: {}",
        who,
        message.created_at.with_timezone(&Local).format("%H:%M"),
        message.text
    )
}

/// What the session does with one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command<'a> {
    Skip,
    Quit,
    History,
    Ask(&'a str),
}

fn parse_line(line: &str) -> Command<'_> {
    match line.trim() {
        "" => Command::Skip,
        "/quit" | "/exit" => Command::Quit,
        "/history" => Command::History,
        text => Command::Ask(text),
    }
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, line: &str) -> Result<()> {
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}

/// Runs one chat session until `/quit`, `/exit` or end of input; returns the transcript.
///
/// Lines are handled strictly in order: the next line is read only after the previous reply
/// has been written.
#[instrument(skip_all)]
pub async fn run_session<R, W>(
    resolver: &ResponseResolver,
    base: &BaseConfig,
    input: R,
    output: &mut W,
) -> Result<Conversation>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut conversation = Conversation::new();
    let welcome = conversation.push_bot(base.welcome_message.as_str());
    write_line(output, &render_message(&base.assistant_name, welcome)).await?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Command::Skip => continue,
            Command::Quit => {
                info!(messages = conversation.len(), "step: session ended by user");
                break;
            }
            Command::History => {
                for message in conversation.messages() {
                    write_line(output, &render_message(&base.assistant_name, message)).await?;
                }
            }
            Command::Ask(text) => {
                let user = conversation.push_user(text);
                info!(message_id = %user.id, text_len = text.len(), "step: user message received");
                write_line(output, &base.thinking_message).await?;

                let reply = resolver.resolve(text).await;
                let bot = conversation.push_bot(reply);
                write_line(output, &render_message(&base.assistant_name, bot)).await?;
            }
        }
    }

    Ok(conversation)
}

/// Resolves a single question and writes the bare reply.
#[instrument(skip_all)]
pub async fn ask_once<W: AsyncWrite + Unpin>(
    resolver: &ResponseResolver,
    question: &str,
    output: &mut W,
) -> Result<String> {
    let reply = resolver.resolve(question).await;
    write_line(output, &reply).await?;
    Ok(reply)
}

/// Interactive chat on stdin/stdout.
pub async fn run_chat(config: &AssistantConfig) -> Result<()> {
    let resolver = build_resolver(config.lookup())?;
    info!(assistant = %config.assistant_name(), "Chat session started");

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let conversation = run_session(&resolver, config.base(), stdin, &mut stdout).await?;

    info!(
        user_messages = conversation.count_from(Sender::User),
        bot_messages = conversation.count_from(Sender::Bot),
        "Chat session finished"
    );
    Ok(())
}

/// One-shot question on stdout.
pub async fn run_ask(config: &AssistantConfig, question: &str) -> Result<()> {
    let resolver = build_resolver(config.lookup())?;
    let mut stdout = tokio::io::stdout();
    ask_once(&resolver, question, &mut stdout).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_parse_line() {
        assert_eq!(parse_line("   "), Command::Skip);
        assert_eq!(parse_line("/quit"), Command::Quit);
        assert_eq!(parse_line(" /exit "), Command::Quit);
        assert_eq!(parse_line("/history"), Command::History);
        assert_eq!(parse_line("  where is paris "), Command::Ask("where is paris"));
    }

    #[test]
    fn test_render_message() {
        let mut message = Message::from_bot("Hello!");
        message.created_at = Utc.with_ymd_and_hms(2026, 10, 19, 8, 5, 0).unwrap();
        let hhmm = message
            .created_at
            .with_timezone(&Local)
            .format("%H:%M")
            .to_string();

        assert_eq!(
            render_message("HealthCare360", &message),
            format!("HealthCare360 [{}]: Hello!", hhmm)
        );

        message.sender = Sender::User;
        assert_eq!(
            render_message("HealthCare360", &message),
            format!("You [{}]: Hello!", hhmm)
        );
    }
}
