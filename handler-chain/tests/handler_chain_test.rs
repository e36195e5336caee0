//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: before/after order, before stopping the chain, the first Reply winning and being passed
//! to after, Ignore/Continue falling through, and handler errors propagating.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assistant_core::{Handler, HandlerError, HandlerResponse, Message};
use handler_chain::HandlerChain;

fn create_test_message(text: &str) -> Message {
    Message::from_user(text)
}

/// **Test: Handler before and after run; handle runs once.**
///
/// **Setup:** One handler (counts before/after), one handler (counts handle).
/// **Action:** `chain.handle(&message)`.
/// **Expected:** before_count=1, handle_count=1, after_count=1; response is Continue.
#[tokio::test]
async fn test_handler_chain_with_handler() {
    let before_count = Arc::new(AtomicUsize::new(0));
    let after_count = Arc::new(AtomicUsize::new(0));
    let handle_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(TestBeforeAfterHandler::new(
            before_count.clone(),
            after_count.clone(),
        )))
        .add_handler(Arc::new(TestHandler::new(handle_count.clone())));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Continue);
    assert_eq!(before_count.load(Ordering::SeqCst), 1);
    assert_eq!(handle_count.load(Ordering::SeqCst), 1);
    assert_eq!(after_count.load(Ordering::SeqCst), 1);
}

/// **Test: Handler before returns false stops the chain; handle is not run.**
#[tokio::test]
async fn test_handler_stops_chain() {
    struct BlockingHandler;

    #[async_trait::async_trait]
    impl Handler for BlockingHandler {
        async fn before(&self, _message: &Message) -> assistant_core::Result<bool> {
            Ok(false)
        }
    }

    let handle_count = Arc::new(AtomicUsize::new(0));

    let chain = HandlerChain::new()
        .add_handler(Arc::new(BlockingHandler))
        .add_handler(Arc::new(TestHandler::new(handle_count.clone())));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Stop);
    assert_eq!(handle_count.load(Ordering::SeqCst), 0);
}

/// **Test: First Reply wins; later handlers are not asked; after sees the reply.**
#[tokio::test]
async fn test_first_reply_stops_chain_and_passes_to_after() {
    let after_count = Arc::new(AtomicUsize::new(0));
    let late_count = Arc::new(AtomicUsize::new(0));

    struct CaptureResponseHandler {
        after_count: Arc<AtomicUsize>,
    }

    #[async_trait::async_trait]
    impl Handler for CaptureResponseHandler {
        async fn after(
            &self,
            _message: &Message,
            response: &HandlerResponse,
        ) -> assistant_core::Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            assert_eq!(response, &HandlerResponse::Reply("first".to_string()));
            Ok(())
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(CaptureResponseHandler {
            after_count: after_count.clone(),
        }))
        .add_handler(Arc::new(ReplyHandler("first")))
        .add_handler(Arc::new(ReplyHandler("second")))
        .add_handler(Arc::new(TestHandler::new(late_count.clone())));

    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("first".to_string()));
    assert_eq!(after_count.load(Ordering::SeqCst), 1);
    assert_eq!(late_count.load(Ordering::SeqCst), 0);
}

/// **Test: Ignore and Continue both fall through to the next handler.**
#[tokio::test]
async fn test_ignore_and_continue_fall_through() {
    struct IgnoreHandler;

    #[async_trait::async_trait]
    impl Handler for IgnoreHandler {
        async fn handle(&self, _message: &Message) -> assistant_core::Result<HandlerResponse> {
            Ok(HandlerResponse::Ignore)
        }
    }

    let handle_count = Arc::new(AtomicUsize::new(0));
    let chain = HandlerChain::new()
        .add_handler(Arc::new(IgnoreHandler))
        .add_handler(Arc::new(TestHandler::new(handle_count.clone())))
        .add_handler(Arc::new(ReplyHandler("last")));

    assert_eq!(chain.len(), 3);
    let result = chain.handle(&create_test_message("test")).await.unwrap();

    assert_eq!(result, HandlerResponse::Reply("last".to_string()));
    assert_eq!(handle_count.load(Ordering::SeqCst), 1);
}

/// **Test: An error from handle propagates out of the chain.**
#[tokio::test]
async fn test_handler_error_propagates() {
    struct FailingHandler;

    #[async_trait::async_trait]
    impl Handler for FailingHandler {
        async fn handle(&self, _message: &Message) -> assistant_core::Result<HandlerResponse> {
            Err(HandlerError::EmptyContent.into())
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(FailingHandler))
        .add_handler(Arc::new(ReplyHandler("unreachable")));

    assert!(chain.handle(&create_test_message("")).await.is_err());
}

/// **Test: Empty chain returns Continue.**
#[tokio::test]
async fn test_empty_chain_returns_continue() {
    let chain = HandlerChain::new();
    assert!(chain.is_empty());
    let result = chain.handle(&create_test_message("test")).await.unwrap();
    assert_eq!(result, HandlerResponse::Continue);
}

/// **Test: Multiple handlers run before in order (first, second), after in reverse (second, first).**
#[tokio::test]
async fn test_multiple_handlers_executed_in_order() {
    let order = Arc::new(std::sync::Mutex::new(Vec::new()));

    struct OrderHandler {
        name: String,
        order: Arc<std::sync::Mutex<Vec<String>>>,
    }

    #[async_trait::async_trait]
    impl Handler for OrderHandler {
        async fn before(&self, _message: &Message) -> assistant_core::Result<bool> {
            self.order.lock().unwrap().push(format!("before_{}", self.name));
            Ok(true)
        }

        async fn after(
            &self,
            _message: &Message,
            _response: &HandlerResponse,
        ) -> assistant_core::Result<()> {
            self.order.lock().unwrap().push(format!("after_{}", self.name));
            Ok(())
        }
    }

    let chain = HandlerChain::new()
        .add_handler(Arc::new(OrderHandler {
            name: "first".to_string(),
            order: order.clone(),
        }))
        .add_handler(Arc::new(OrderHandler {
            name: "second".to_string(),
            order: order.clone(),
        }));

    chain.handle(&create_test_message("test")).await.unwrap();

    let executed = order.lock().unwrap();
    assert_eq!(
        *executed,
        vec!["before_first", "before_second", "after_second", "after_first"]
    );
}

// --- Helpers used by tests ---

struct ReplyHandler(&'static str);

#[async_trait::async_trait]
impl Handler for ReplyHandler {
    async fn handle(&self, _message: &Message) -> assistant_core::Result<HandlerResponse> {
        Ok(HandlerResponse::Reply(self.0.to_string()))
    }
}

struct TestBeforeAfterHandler {
    before_count: Arc<AtomicUsize>,
    after_count: Arc<AtomicUsize>,
}

impl TestBeforeAfterHandler {
    fn new(before_count: Arc<AtomicUsize>, after_count: Arc<AtomicUsize>) -> Self {
        Self {
            before_count,
            after_count,
        }
    }
}

#[async_trait::async_trait]
impl Handler for TestBeforeAfterHandler {
    async fn before(&self, _message: &Message) -> assistant_core::Result<bool> {
        self.before_count.fetch_add(1, Ordering::SeqCst);
        Ok(true)
    }

    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> assistant_core::Result<()> {
        self.after_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct TestHandler {
    handle_count: Arc<AtomicUsize>,
}

impl TestHandler {
    fn new(handle_count: Arc<AtomicUsize>) -> Self {
        Self { handle_count }
    }
}

#[async_trait::async_trait]
impl Handler for TestHandler {
    async fn handle(&self, _message: &Message) -> assistant_core::Result<HandlerResponse> {
        self.handle_count.fetch_add(1, Ordering::SeqCst);
        Ok(HandlerResponse::Continue)
    }
}
