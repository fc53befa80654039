use reqflow_core::{Llm, LlmRequest, LlmResponse, ReqflowError, Result};
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error(String),
}

/// Deterministic model stub for tests.
///
/// Queued replies are returned in order, one per `generate` call. In echo
/// mode an exhausted queue returns the rendered prompt itself, which makes
/// the final pipeline state a pure function of the initial state.
pub struct MockLlm {
    name: String,
    replies: Mutex<VecDeque<MockReply>>,
    echo: bool,
}

impl MockLlm {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), replies: Mutex::new(VecDeque::new()), echo: false }
    }

    /// A mock that answers every request with the prompt it was given.
    pub fn echo(name: impl Into<String>) -> Self {
        Self { name: name.into(), replies: Mutex::new(VecDeque::new()), echo: true }
    }

    #[must_use]
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(MockReply::Text(text.into()));
        self
    }

    /// Queues an invocation failure, for exercising error-policy paths.
    #[must_use]
    pub fn with_error(self, message: impl Into<String>) -> Self {
        self.replies.lock().unwrap().push_back(MockReply::Error(message.into()));
        self
    }
}

#[async_trait::async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate(&self, req: LlmRequest) -> Result<LlmResponse> {
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Text(text)) => Ok(LlmResponse::new(text)),
            Some(MockReply::Error(message)) => Err(ReqflowError::Model(message)),
            None if self.echo => Ok(LlmResponse::new(req.prompt)),
            None => Err(ReqflowError::Model(format!(
                "mock model '{}' has no queued replies",
                self.name
            ))),
        }
    }
}
