//! Integration tests for the chat session runner.
//!
//! Input is an in-memory byte slice and output a `Vec<u8>`; every external source is a stub that
//! fails, so replies come from the local rules or the canned fallback.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assistant_core::Sender;
use async_trait::async_trait;
use chrono::{Local, TimeZone};
use health_assistant::{ask_once, run_session, BaseConfig};
use lookup::{LookupError, LookupService};
use responder_handlers::{
    FixedClock, FixedJokePicker, LookupSources, ResponseResolver, RuleTable,
};

struct DownLookup {
    calls: AtomicUsize,
}

#[async_trait]
impl LookupService for DownLookup {
    fn name(&self) -> &str {
        "down"
    }

    async fn lookup(&self, _query: &str) -> Result<String, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(LookupError::network("connection refused"))
    }
}

fn resolver(source: Arc<DownLookup>) -> ResponseResolver {
    ResponseResolver::with_rules(
        RuleTable::health_defaults(),
        LookupSources {
            geocoder: source.clone(),
            trivia: source.clone(),
            encyclopedia: source.clone(),
            web_answer: source,
        },
        Arc::new(FixedClock(
            Local.with_ymd_and_hms(2026, 10, 19, 9, 30, 0).unwrap(),
        )),
        Arc::new(FixedJokePicker(0)),
    )
}

fn down() -> Arc<DownLookup> {
    Arc::new(DownLookup {
        calls: AtomicUsize::new(0),
    })
}

fn base() -> BaseConfig {
    BaseConfig {
        assistant_name: "HealthCare360".to_string(),
        thinking_message: "Thinking...".to_string(),
        welcome_message: "Welcome!".to_string(),
        ..BaseConfig::default()
    }
}

async fn run(input: &str) -> (Vec<String>, assistant_core::Conversation, Arc<DownLookup>) {
    let source = down();
    let mut output = Vec::new();
    let conversation = run_session(&resolver(source.clone()), &base(), input.as_bytes(), &mut output)
        .await
        .unwrap();
    let lines = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    (lines, conversation, source)
}

/// **Test: The session opens with the welcome message and answers each line in order.**
#[tokio::test]
async fn test_session_welcome_then_replies() {
    let (lines, conversation, source) = run("hello\nthank you\n").await;

    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("HealthCare360 ["));
    assert!(lines[0].ends_with("]: Welcome!"));
    assert_eq!(lines[1], "Thinking...");
    assert!(lines[2].contains("]: Hello! How can I assist you today?"));
    assert_eq!(lines[3], "Thinking...");
    assert!(lines[4].contains("]: You're welcome!"));

    assert_eq!(conversation.len(), 5);
    assert_eq!(conversation.count_from(Sender::User), 2);
    assert_eq!(conversation.messages()[1].text, "hello");
    assert_eq!(conversation.messages()[3].text, "thank you");
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

/// **Test: Blank lines are skipped; nothing is recorded for them.**
#[tokio::test]
async fn test_blank_lines_ignored() {
    let (lines, conversation, _) = run("\n   \n\n").await;

    assert_eq!(lines.len(), 1);
    assert_eq!(conversation.len(), 1);
}

/// **Test: /quit ends the session; later lines are never resolved.**
#[tokio::test]
async fn test_quit_stops_reading() {
    let (_, conversation, source) = run("/quit\nwho is ada lovelace\n").await;

    assert_eq!(conversation.len(), 1);
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);

    let (_, conversation, _) = run("/exit\nhello\n").await;
    assert_eq!(conversation.len(), 1);
}

/// **Test: /history reprints the transcript so far, with user lines labelled "You".**
#[tokio::test]
async fn test_history_prints_transcript() {
    let (lines, conversation, _) = run("hi\n/history\n").await;

    assert_eq!(lines.len(), 6);
    assert!(lines[3].ends_with("]: Welcome!"));
    assert!(lines[4].starts_with("You ["));
    assert!(lines[4].ends_with("]: hi"));
    assert!(lines[5].contains("]: Hello!"));
    assert_eq!(conversation.len(), 3);
}

/// **Test: When every source is down the session still replies with the canned text.**
#[tokio::test]
async fn test_unknown_question_gets_fallback() {
    let (lines, _, source) = run("who is ada lovelace\n").await;

    assert!(lines[2].contains("I don't have specific information about ada lovelace"));
    // trivia, encyclopedia, web answer
    assert_eq!(source.calls.load(Ordering::SeqCst), 3);
}

/// **Test: ask_once writes only the bare reply.**
#[tokio::test]
async fn test_ask_once() {
    let mut output = Vec::new();
    let reply = ask_once(&resolver(down()), "what time is it", &mut output)
        .await
        .unwrap();

    assert_eq!(
        reply,
        "The current time is 9:30:00 AM. Note that this is based on your device's time."
    );
    assert_eq!(String::from_utf8(output).unwrap(), format!("{}\n", reply));
}
