//! Dialogue sessions: process one turn of a keyed conversation.
//!
//! [`DialogueSessions`] maps session identifiers to [`DialogueFlow`]s and is
//! the single entry point an outer layer (HTTP, CLI) calls per analyst turn.
//! Each flow sits behind its own async mutex, so turns of one session are
//! serialized while distinct sessions proceed independently.

use crate::config::DialogueParams;
use crate::ports::dialogue_service::DialogueService;
use crate::use_cases::dialogue_flow::{DialogueError, DialogueFlow};
use pir_domain::{DialogueAction, DialogueResponse, DialogueState, Perspective};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Input for one dialogue turn.
#[derive(Debug, Clone)]
pub struct DialogueTurn {
    pub session_id: String,
    pub message: String,
    /// Raw perspective tokens; empty means the neutral default
    pub perspectives: Vec<String>,
    pub approved: Option<bool>,
}

impl DialogueTurn {
    pub fn new(session_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            message: message.into(),
            perspectives: vec![Perspective::Neutral.as_str().to_string()],
            approved: None,
        }
    }

    pub fn with_perspectives<S: Into<String>>(
        mut self,
        perspectives: impl IntoIterator<Item = S>,
    ) -> Self {
        self.perspectives = perspectives.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_approval(mut self, approved: bool) -> Self {
        self.approved = Some(approved);
        self
    }
}

/// Output of one dialogue turn, ready for a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogueTurnOutput {
    pub action: DialogueAction,
    pub content: String,
    /// `question`, `summary`, `pir` or `complete`
    pub response_type: &'static str,
    pub is_final: bool,
}

impl From<DialogueResponse> for DialogueTurnOutput {
    fn from(response: DialogueResponse) -> Self {
        Self {
            action: response.action,
            response_type: response.action.response_type(),
            is_final: response.is_final(),
            content: response.content,
        }
    }
}

/// Registry of live dialogues keyed by session id.
pub struct DialogueSessions {
    service: Arc<dyn DialogueService>,
    params: DialogueParams,
    sessions: Mutex<HashMap<String, Arc<Mutex<DialogueFlow>>>>,
}

impl DialogueSessions {
    pub fn new(service: Arc<dyn DialogueService>) -> Self {
        Self {
            service,
            params: DialogueParams::default(),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    /// Limits applied to dialogues created from now on.
    pub fn with_params(mut self, params: DialogueParams) -> Self {
        self.params = params;
        self
    }

    /// Process one turn, creating the session on first use.
    pub async fn process_turn(
        &self,
        turn: DialogueTurn,
    ) -> Result<DialogueTurnOutput, DialogueError> {
        let flow = self.session(&turn.session_id).await;
        let mut flow = flow.lock().await;

        let perspectives = if turn.perspectives.is_empty() {
            vec![Perspective::Neutral.as_str().to_string()]
        } else {
            turn.perspectives
        };

        let response = flow
            .process_user_message(
                &turn.message,
                self.service.as_ref(),
                perspectives.as_slice(),
                turn.approved,
            )
            .await?;

        Ok(response.into())
    }

    /// Current state of a session, if it exists
    pub async fn state_of(&self, session_id: &str) -> Option<DialogueState> {
        let flow = self.sessions.lock().await.get(session_id).cloned()?;
        let flow = flow.lock().await;
        Some(flow.state())
    }

    /// Snapshot of a session's flow, if it exists
    pub async fn snapshot(&self, session_id: &str) -> Option<DialogueFlow> {
        let flow = self.sessions.lock().await.get(session_id).cloned()?;
        let flow = flow.lock().await;
        Some(flow.clone())
    }

    /// Drop a session. Returns `true` if it existed.
    pub async fn remove(&self, session_id: &str) -> bool {
        self.sessions.lock().await.remove(session_id).is_some()
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }

    async fn session(&self, session_id: &str) -> Arc<Mutex<DialogueFlow>> {
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                debug!("Creating dialogue session {}", session_id);
                Arc::new(Mutex::new(DialogueFlow::with_params(self.params)))
            })
            .clone()
    }
}
