//! crates/specter_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any storage or serialization format.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A quote produced by the generation client. Ephemeral until saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuote {
    pub text: String,
    pub topic: Option<String>,
}

/// A structured advice response produced by the generation client.
/// Ephemeral, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAdvice {
    /// A direct, punchy statement telling the user what to do.
    pub advice: String,
    /// The strategic mindset behind it, in a sentence or two.
    pub strategy: String,
}

/// A quote promoted to durable storage with an id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedQuote {
    pub id: Uuid,
    pub text: String,
    pub topic: Option<String>,
    pub saved_at: DateTime<Utc>,
}

/// The four screens of the application. Exactly one is active at a time;
/// `Home` is the initial state and the universal back target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Home,
    Quotes,
    Advice,
    Saved,
}
