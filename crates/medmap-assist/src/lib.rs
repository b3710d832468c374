//! # medmap-assist
//!
//! The chat assistant session layer for MedMap Naga.
//!
//! Both assistant surfaces (the full chat page and the popup widget) drive
//! a [`ChatSession`]: an append-only transcript, a busy guard that rejects
//! competing submissions while a reply is staged, and a simulated latency
//! released by polling. The actual matching runs through
//! `medmap_core::search`; there is no assistant-local copy of it.

pub mod faq;
pub mod session;

pub use faq::{FaqEntry, FaqTopic, FAQ_ENTRIES};
pub use session::{ChatSession, RESPONSE_DELAY_MS};
