//! services/app/src/app/controller.rs
//!
//! The view-state controller. Every transition of the four-screen state
//! machine goes through an explicit method here, independent of the terminal
//! front end that drives it.

use crate::app::state::{AppState, Session};
use specter_core::domain::{GeneratedAdvice, GeneratedQuote, SavedQuote, ViewState};
use specter_core::ports::{PortResult, ShareOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use uuid::Uuid;

/// How long a transient notification stays visible.
const NOTIFICATION_TTL: Duration = Duration::from_secs(2);

/// The title handed to the share facility.
const SHARE_TITLE: &str = "The Specter Standard";

pub const NOTIFY_FILED: &str = "Evidence Filed";
pub const NOTIFY_DUPLICATE: &str = "Already in the Vault";
pub const NOTIFY_COPIED: &str = "Copied to clipboard";

/// Reported by the generation entry points so the front end knows whether
/// anything was submitted.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The call ran to completion, successfully or with a logged failure.
    Completed,
    /// A generation call was already outstanding; the input was ignored.
    Busy,
    /// The input was blank; nothing was submitted.
    EmptyInput,
}

/// A point-in-time copy of the session, handed to the presentation layer.
/// Snapshots must be re-taken after any mutation.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub view: ViewState,
    pub current_quote: Option<GeneratedQuote>,
    pub quote_saved: bool,
    pub current_advice: Option<GeneratedAdvice>,
    pub loading: bool,
    pub notification: Option<String>,
}

/// Formats a quote for sharing.
pub fn format_quote_share(text: &str) -> String {
    format!("\"{}\" - Harvey Specter", text)
}

/// Formats an advice pair for sharing.
pub fn format_advice_share(advice: &GeneratedAdvice) -> String {
    format!(
        "\"{}\"\n\nStrategy: {}\n- Harvey Specter",
        advice.advice, advice.strategy
    )
}

pub struct Controller {
    app: AppState,
    session: Arc<Mutex<Session>>,
}

impl Controller {
    pub fn new(app: AppState) -> Self {
        Self {
            app,
            session: Arc::new(Mutex::new(Session::new())),
        }
    }

    /// Takes a point-in-time copy of the session for rendering.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let session = self.session.lock().await;
        SessionSnapshot {
            view: session.view,
            current_quote: session.current_quote.clone(),
            quote_saved: session.quote_saved,
            current_advice: session.current_advice.clone(),
            loading: session.loading,
            notification: session.notification.clone(),
        }
    }

    /// Switches the active view. Leaving a generator screen drops its
    /// ephemeral content; an outstanding generation call keeps the loading
    /// gate up until it resolves.
    pub async fn navigate(&self, view: ViewState) {
        let mut session = self.session.lock().await;
        if session.view == view {
            return;
        }
        session.view = view;
        session.current_quote = None;
        session.current_advice = None;
        session.quote_saved = false;
    }

    /// Generates a new quote for the Quotes view. A blank topic requests a
    /// generic iconic quote.
    pub async fn generate_quote(&self, topic: Option<&str>) -> SubmitOutcome {
        {
            let mut session = self.session.lock().await;
            if session.loading {
                return SubmitOutcome::Busy;
            }
            session.loading = true;
            session.quote_saved = false;
        }

        let topic = topic.map(str::trim).filter(|t| !t.is_empty());
        let result = self.app.generator.fetch_quote(topic).await;

        let mut session = self.session.lock().await;
        session.loading = false;
        match result {
            Ok(quote) => {
                // A result that lands after the user left the view is stale
                // and must not be displayed.
                if session.view == ViewState::Quotes {
                    session.current_quote = Some(quote);
                }
            }
            Err(e) => {
                // The quote flow swallows failures: no content update, the
                // prior quote stays on screen, loading simply ends.
                error!("Quote generation failed: {}", e);
            }
        }
        SubmitOutcome::Completed
    }

    /// Requests advice for a free-text situation in the Advice view.
    pub async fn request_advice(&self, situation: &str) -> SubmitOutcome {
        if situation.trim().is_empty() {
            return SubmitOutcome::EmptyInput;
        }
        {
            let mut session = self.session.lock().await;
            if session.loading {
                return SubmitOutcome::Busy;
            }
            session.loading = true;
        }

        let result = self.app.generator.fetch_advice(situation).await;

        let mut session = self.session.lock().await;
        session.loading = false;
        match result {
            Ok(advice) => {
                if session.view == ViewState::Advice {
                    session.current_advice = Some(advice);
                }
            }
            Err(e) => {
                // Only the credential precondition can get here; the advice
                // path substitutes a fallback for everything else.
                error!("Advice generation failed: {}", e);
            }
        }
        SubmitOutcome::Completed
    }

    /// Files the current quote in the vault and raises the matching
    /// notification. A no-op when no quote is on screen.
    pub async fn save_current_quote(&self) -> PortResult<()> {
        let quote = {
            let session = self.session.lock().await;
            match session.current_quote.clone() {
                Some(quote) => quote,
                None => return Ok(()),
            }
        };

        let outcome = self.app.vault.save_one(&quote).await?;
        {
            let mut session = self.session.lock().await;
            session.quote_saved = true;
        }

        if outcome.newly_added {
            info!("Filed quote {} in the vault", outcome.quote.id);
            self.notify(NOTIFY_FILED).await;
        } else {
            self.notify(NOTIFY_DUPLICATE).await;
        }
        Ok(())
    }

    /// Shares the current quote, if any.
    pub async fn share_current_quote(&self) -> PortResult<()> {
        let quote = {
            let session = self.session.lock().await;
            match session.current_quote.clone() {
                Some(quote) => quote,
                None => return Ok(()),
            }
        };
        self.share_text(&format_quote_share(&quote.text)).await
    }

    /// Shares the current advice pair, if any.
    pub async fn share_current_advice(&self) -> PortResult<()> {
        let advice = {
            let session = self.session.lock().await;
            match session.current_advice.clone() {
                Some(advice) => advice,
                None => return Ok(()),
            }
        };
        self.share_text(&format_advice_share(&advice)).await
    }

    /// Shares a quote from the saved list.
    pub async fn share_saved(&self, quote: &SavedQuote) -> PortResult<()> {
        self.share_text(&format_quote_share(&quote.text)).await
    }

    /// Loads the saved list, most-recently-saved first.
    pub async fn saved_quotes(&self) -> PortResult<Vec<SavedQuote>> {
        self.app.vault.load_all().await
    }

    /// Deletes a saved quote and returns the fresh list.
    pub async fn delete_saved(&self, id: Uuid) -> PortResult<Vec<SavedQuote>> {
        self.app.vault.delete_one(id).await
    }

    /// Installs a transient notification and arms its single-shot clear
    /// timer. A newer notification cancels and replaces any pending clear.
    pub async fn notify(&self, message: &str) {
        let token = {
            let mut session = self.session.lock().await;
            session.notification = Some(message.to_string());
            session.notification_timer.cancel();
            session.notification_timer = CancellationToken::new();
            session.notification_timer.clone()
        };

        let session_lock = Arc::clone(&self.session);
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(NOTIFICATION_TTL) => {
                    let mut session = session_lock.lock().await;
                    session.notification = None;
                }
            }
        });
    }

    async fn share_text(&self, text: &str) -> PortResult<()> {
        match self.app.share.share(SHARE_TITLE, text).await? {
            ShareOutcome::Copied => self.notify(NOTIFY_COPIED).await,
            // A native share needs no confirmation, and an unavailable
            // facility is a silent no-op.
            ShareOutcome::Shared | ShareOutcome::Unavailable => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_share_text_is_attributed() {
        assert_eq!(
            format_quote_share("Winners don't make excuses"),
            "\"Winners don't make excuses\" - Harvey Specter"
        );
    }

    #[test]
    fn advice_share_text_includes_the_strategy() {
        let advice = GeneratedAdvice {
            advice: "Close the deal.".to_string(),
            strategy: "Set the terms first.".to_string(),
        };
        let text = format_advice_share(&advice);
        assert!(text.starts_with("\"Close the deal.\""));
        assert!(text.contains("Strategy: Set the terms first."));
        assert!(text.ends_with("- Harvey Specter"));
    }
}
