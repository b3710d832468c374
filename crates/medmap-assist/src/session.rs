//! Chat session state.
//!
//! A session owns an append-only transcript and at most one staged reply.
//! Submitting runs the search immediately but holds the reply until the
//! simulated latency elapses; `poll` releases it. While a reply is staged,
//! competing submissions are rejected with `QueryInFlight` (never queued),
//! so transcript entries cannot interleave. A staged reply is never
//! cancelled: it always completes and appends.
//!
//! Time is injected: both `submit` and `poll` take `now`, so the session
//! never reads the clock and tests control latency exactly.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use medmap_contracts::{
    chat::{ConversationMessage, MessageRole},
    error::{MedMapError, MedMapResult},
    facility::Facility,
    geo::GeoPoint,
    query::SearchOutcome,
    resource::AvailabilityRecord,
};
use medmap_core::search;

/// Simulated processing latency before a reply becomes visible.
pub const RESPONSE_DELAY_MS: i64 = 1000;

const GREETING: &str = "Hi! I'm MedMap Assist, your guide to finding medical resources in Naga City.\n\n\
I can help you find:\n\
- Blood supplies\n\
- Medicines\n\
- Hospital beds\n\
- Medical equipment\n\n\
How can I help you today?";

/// A computed reply waiting out the simulated latency.
struct StagedReply {
    outcome: SearchOutcome,
    due_at: DateTime<Utc>,
}

/// One user's conversation with the assistant.
pub struct ChatSession {
    messages: Vec<ConversationMessage>,
    staged: Option<StagedReply>,
    last_outcome: Option<SearchOutcome>,
}

impl ChatSession {
    /// Start a session with the assistant's greeting in the transcript.
    pub fn new() -> Self {
        Self {
            messages: vec![ConversationMessage::new(MessageRole::Bot, GREETING)],
            staged: None,
            last_outcome: None,
        }
    }

    /// The transcript so far, oldest first.
    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// True while a reply is staged and not yet released by `poll`.
    pub fn is_processing(&self) -> bool {
        self.staged.is_some()
    }

    /// The structured result of the most recently completed search, for
    /// UIs that render cards instead of prose.
    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }

    /// Submit a query.
    ///
    /// Appends the user message and stages the bot reply to become visible
    /// at `now + RESPONSE_DELAY_MS`. Blank input is `InvalidRequest`; a
    /// staged reply is `QueryInFlight`.
    pub fn submit(
        &mut self,
        text: &str,
        snapshot: &[AvailabilityRecord],
        facilities: &[Facility],
        user_location: Option<GeoPoint>,
        now: DateTime<Utc>,
    ) -> MedMapResult<()> {
        let query = text.trim();
        if query.is_empty() {
            return Err(MedMapError::InvalidRequest {
                reason: "query text is empty".to_string(),
            });
        }
        if self.staged.is_some() {
            return Err(MedMapError::QueryInFlight);
        }

        self.messages
            .push(ConversationMessage::new(MessageRole::User, query));

        let outcome = search(query, snapshot, facilities, user_location);
        debug!(query, results = outcome.matches.len(), "reply staged");

        self.staged = Some(StagedReply {
            outcome,
            due_at: now + Duration::milliseconds(RESPONSE_DELAY_MS),
        });

        Ok(())
    }

    /// Release the staged reply if its latency has elapsed.
    ///
    /// Appends the bot message to the transcript and returns it; `None`
    /// while nothing is due.
    pub fn poll(&mut self, now: DateTime<Utc>) -> Option<&ConversationMessage> {
        let due = self.staged.as_ref().is_some_and(|s| now >= s.due_at);
        if !due {
            return None;
        }

        if let Some(staged) = self.staged.take() {
            self.messages.push(ConversationMessage::new(
                MessageRole::Bot,
                staged.outcome.message.clone(),
            ));
            self.last_outcome = Some(staged.outcome);
        }
        self.messages.last()
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
