//! In-memory implementation of `AlertLog`.
//!
//! `InMemoryAlertLog` is the reference implementation of the `AlertLog`
//! trait: a bounded, newest-first ring kept behind an `Arc<Mutex<_>>` so
//! the admin surface can read while SOS flows append. Once at capacity
//! (default 10), each append evicts the oldest alert.
//!
//! Change notification is subscription-based: `subscribe()` hands out an
//! `mpsc::Receiver` that sees one `AlertEvent` per append. Receivers that
//! have been dropped are pruned on the next publish.

use std::collections::VecDeque;
use std::sync::{
    mpsc::{self, Receiver, Sender},
    Arc, Mutex,
};

use tracing::{debug, info};

use medmap_contracts::{
    emergency::EmergencyAlert,
    error::{MedMapError, MedMapResult},
};
use medmap_core::traits::AlertLog;

/// How many alerts the log retains by default.
pub const DEFAULT_CAPACITY: usize = 10;

/// A change notification published to subscribers on every append.
#[derive(Debug, Clone)]
pub enum AlertEvent {
    Appended { alert: EmergencyAlert },
}

// ── Internal mutable state ────────────────────────────────────────────────────

/// The mutable interior of an `InMemoryAlertLog`.
pub(crate) struct AlertLogState {
    /// Retained alerts, newest first.
    pub(crate) entries: VecDeque<EmergencyAlert>,
    /// Live subscriber channels.
    pub(crate) subscribers: Vec<Sender<AlertEvent>>,
}

// ── Public log ────────────────────────────────────────────────────────────────

/// A bounded, in-memory, append-only alert log.
///
/// # Thread safety
///
/// `append()` and `recent()` both acquire a `Mutex` internally; the log is
/// `Send + Sync` and may be shared behind an `Arc` across threads.
pub struct InMemoryAlertLog {
    capacity: usize,
    state: Arc<Mutex<AlertLogState>>,
}

impl InMemoryAlertLog {
    /// Create a log with the default capacity of ten alerts.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a log retaining at most `capacity` alerts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            state: Arc::new(Mutex::new(AlertLogState {
                entries: VecDeque::new(),
                subscribers: Vec::new(),
            })),
        }
    }

    /// Register a subscriber that receives one [`AlertEvent`] per append.
    pub fn subscribe(&self) -> Receiver<AlertEvent> {
        let (tx, rx) = mpsc::channel();
        let mut state = self.state.lock().expect("alert log lock poisoned");
        state.subscribers.push(tx);
        rx
    }

    /// The number of alerts currently retained.
    pub fn len(&self) -> usize {
        self.state.lock().expect("alert log lock poisoned").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryAlertLog {
    fn default() -> Self {
        Self::new()
    }
}

// ── AlertLog impl ─────────────────────────────────────────────────────────────

impl AlertLog for InMemoryAlertLog {
    /// Prepend one alert, evicting from the oldest end past capacity, then
    /// notify subscribers.
    ///
    /// Returns `Err(AlertWriteFailed)` only if the internal mutex is
    /// poisoned, which cannot happen under normal operation.
    fn append(&self, alert: &EmergencyAlert) -> MedMapResult<()> {
        let mut state = self.state.lock().map_err(|e| MedMapError::AlertWriteFailed {
            reason: format!("alert log lock poisoned: {}", e),
        })?;

        state.entries.push_front(alert.clone());
        while state.entries.len() > self.capacity {
            if let Some(evicted) = state.entries.pop_back() {
                debug!(alert_id = %evicted.id, "capacity reached, oldest alert evicted");
            }
        }

        // Prune dead subscribers as a side effect of publishing.
        let event_alert = alert.clone();
        state.subscribers.retain(|tx| {
            tx.send(AlertEvent::Appended {
                alert: event_alert.clone(),
            })
            .is_ok()
        });

        info!(
            alert_id = %alert.id,
            retained = state.entries.len(),
            subscribers = state.subscribers.len(),
            "emergency alert appended"
        );

        Ok(())
    }

    /// Return up to `limit` alerts, newest first.
    fn recent(&self, limit: usize) -> MedMapResult<Vec<EmergencyAlert>> {
        let state = self.state.lock().map_err(|e| MedMapError::AlertWriteFailed {
            reason: format!("alert log lock poisoned: {}", e),
        })?;

        Ok(state.entries.iter().take(limit).cloned().collect())
    }
}
