//! crates/specter_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like remote APIs or
//! disk storage.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{GeneratedAdvice, GeneratedQuote, SavedQuote};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., network, disk).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The generation credential is absent. Raised before any network attempt.
    #[error("API key is missing")]
    MissingCredential,
    /// The remote generation call failed in transport or was rejected by the API.
    #[error("Generation request failed: {0}")]
    Generation(String),
    /// The remote response could not be decoded into the expected shape.
    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),
    /// The vault could not be written or re-read.
    #[error("Storage error: {0}")]
    Storage(String),
    /// A catch-all for any other unexpected errors.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// The boundary component wrapping the remote text-generation API.
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generates a short persona quote, optionally about `topic`.
    ///
    /// The returned quote's `topic` field equals the requested topic exactly.
    /// An empty remote response is substituted with a fixed fallback quote; a
    /// transport or API failure surfaces as [`PortError::Generation`] and the
    /// caller decides whether to swallow it.
    async fn fetch_quote(&self, topic: Option<&str>) -> PortResult<GeneratedQuote>;

    /// Generates structured advice for a free-text situation description.
    ///
    /// This operation never surfaces a remote failure: an empty, malformed, or
    /// failed response yields a fixed fallback advice/strategy pair. Only the
    /// missing-credential precondition is reported as an error.
    async fn fetch_advice(&self, situation: &str) -> PortResult<GeneratedAdvice>;
}

/// The result of filing a quote in the vault.
#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub quote: SavedQuote,
    /// False when an entry with identical text already existed. The existing
    /// entry is returned untouched in that case.
    pub newly_added: bool,
}

#[async_trait]
pub trait QuoteVaultService: Send + Sync {
    /// Reads the full saved list, most-recently-saved first.
    ///
    /// A missing or unparseable store is treated as empty, never as an error.
    async fn load_all(&self) -> PortResult<Vec<SavedQuote>>;

    /// Files a quote unless one with identical `text` is already stored.
    /// Deduplication is by text only; a new entry is prepended to the list.
    async fn save_one(&self, quote: &GeneratedQuote) -> PortResult<SaveOutcome>;

    /// Removes the entry with the given id, if any, and returns the resulting
    /// list. Deleting an unknown id leaves the stored list unchanged.
    async fn delete_one(&self, id: Uuid) -> PortResult<Vec<SavedQuote>>;
}

/// The outcome of a best-effort share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed off to a native share facility.
    Shared,
    /// Copied to the clipboard as a fallback.
    Copied,
    /// No share or clipboard facility was available, or the user backed out.
    /// Callers treat this as a silent no-op.
    Unavailable,
}

#[async_trait]
pub trait ShareService: Send + Sync {
    /// Shares a formatted text summary through the platform's facilities.
    async fn share(&self, title: &str, text: &str) -> PortResult<ShareOutcome>;
}
