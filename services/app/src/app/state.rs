//! services/app/src/app/state.rs
//!
//! Defines the application's shared and session-specific states.

use crate::config::Config;
use specter_core::domain::{GeneratedAdvice, GeneratedQuote, ViewState};
use specter_core::ports::{GenerationService, QuoteVaultService, ShareService};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

//=========================================================================================
// AppState (Shared Across the Whole Application)
//=========================================================================================

/// The shared application state, created once at startup.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn GenerationService>,
    pub vault: Arc<dyn QuoteVaultService>,
    pub share: Arc<dyn ShareService>,
    pub config: Arc<Config>,
}

//=========================================================================================
// Session (The Active View and Its Ephemeral State)
//=========================================================================================

/// The mutable UI state: the active view plus the per-view ephemera.
pub struct Session {
    pub view: ViewState,
    pub current_quote: Option<GeneratedQuote>,
    /// Whether the current quote has already been filed in the vault.
    pub quote_saved: bool,
    pub current_advice: Option<GeneratedAdvice>,
    /// Gates resubmission while a generation call is outstanding.
    pub loading: bool,
    /// A transient message, cleared automatically after a short delay.
    pub notification: Option<String>,
    /// Cancels the pending notification clear when a newer one arrives.
    pub notification_timer: CancellationToken,
}

impl Session {
    pub fn new() -> Self {
        Self {
            view: ViewState::Home,
            current_quote: None,
            quote_saved: false,
            current_advice: None,
            loading: false,
            notification: None,
            notification_timer: CancellationToken::new(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
