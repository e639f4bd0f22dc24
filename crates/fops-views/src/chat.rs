//! Chat view: an append-only conversation with a single request in flight.

use fops_auth::AuthSession;
use fops_client::ApiClient;
use fops_core::entities::{ChatMessage, ChatRequest, ChatResponse};

use crate::error::ViewError;

pub const GREETING: &str =
    "Hello! I'm here to help you with your franchise operations manual. What can I help you with today?";

/// Reply used when the backend answered without answer text.
pub const EMPTY_ANSWER_REPLY: &str = "I encountered an error.";

/// Reply used when the request itself failed.
pub const ERROR_REPLY: &str = "Sorry, I encountered an error. Please try again.";

/// A question that has been appended and is waiting for its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending turn keeps the view loading until completed"]
pub struct PendingTurn {
    request: ChatRequest,
}

impl PendingTurn {
    #[must_use]
    pub const fn request(&self) -> &ChatRequest {
        &self.request
    }
}

pub struct ChatView<S> {
    client: ApiClient,
    session: S,
    manual_name: String,
    messages: Vec<ChatMessage>,
    input: String,
    is_loading: bool,
}

impl<S: AuthSession> ChatView<S> {
    #[must_use]
    pub fn new(client: ApiClient, session: S, manual_name: impl Into<String>) -> Self {
        Self {
            client,
            session,
            manual_name: manual_name.into(),
            messages: vec![ChatMessage::ai(GREETING)],
            input: String::new(),
            is_loading: false,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, draft: impl Into<String>) {
        self.input = draft.into();
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub const fn session(&self) -> &S {
        &self.session
    }

    /// Whether the header shows the "Admin Portal" link.
    #[must_use]
    pub fn shows_admin_link(&self) -> bool {
        self.session.user().is_some_and(|user| user.is_admin())
    }

    /// Start a turn.
    ///
    /// Returns `None` without touching state when the question is blank, a
    /// request is already in flight, or the session is signed out. Otherwise
    /// appends the user message, clears the draft and marks the view loading.
    pub fn begin(&mut self, question: &str) -> Option<PendingTurn> {
        if question.trim().is_empty() || self.is_loading || !self.session.is_signed_in() {
            return None;
        }

        self.messages.push(ChatMessage::user(question));
        self.input.clear();
        self.is_loading = true;
        Some(PendingTurn {
            request: ChatRequest {
                question: question.to_string(),
                manual_name: self.manual_name.clone(),
            },
        })
    }

    /// Send a pending turn to `POST /chat`.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] if no token is available or the request fails.
    pub async fn send(&self, turn: &PendingTurn) -> Result<ChatResponse, ViewError> {
        let token = crate::require_token(&self.session).await?;
        Ok(self.client.chat(&token, &turn.request).await?)
    }

    /// Finish a turn: append the AI reply and clear the loading flag.
    pub fn complete(&mut self, turn: PendingTurn, outcome: Result<ChatResponse, ViewError>) {
        let reply = match outcome {
            Ok(response) => {
                let content = response
                    .answer
                    .filter(|answer| !answer.is_empty())
                    .unwrap_or_else(|| EMPTY_ANSWER_REPLY.to_string());
                ChatMessage {
                    citations: response.citations,
                    refused: response.refused,
                    ..ChatMessage::ai(content)
                }
            }
            Err(error) => {
                tracing::warn!(%error, question = %turn.request.question, "chat request failed");
                ChatMessage::ai(ERROR_REPLY)
            }
        };
        self.messages.push(reply);
        self.is_loading = false;
    }

    /// Ask `question` and wait for the reply. A no-op when [`Self::begin`]
    /// declines the turn.
    pub async fn ask(&mut self, question: &str) {
        let Some(turn) = self.begin(question) else {
            return;
        };
        let outcome = self.send(&turn).await;
        self.complete(turn, outcome);
    }

    /// Ask whatever is in the draft input.
    pub async fn submit(&mut self) {
        let question = self.input.clone();
        self.ask(&question).await;
    }
}
