//! services/app/src/adapters/vault.rs
//!
//! This module contains the saved-quotes vault, the concrete implementation
//! of the `QuoteVaultService` port. The vault is a single namespaced JSON
//! file holding the full ordered list; every mutation is a whole-list
//! read-modify-write. Concurrent writers are not coordinated: the last
//! writer wins, a known limitation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use specter_core::domain::{GeneratedQuote, SavedQuote};
use specter_core::ports::{PortError, PortResult, QuoteVaultService, SaveOutcome};
use std::path::PathBuf;
use tracing::{error, warn};
use uuid::Uuid;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// A file-backed vault that implements the `QuoteVaultService` port.
#[derive(Clone)]
pub struct JsonFileVault {
    path: PathBuf,
}

impl JsonFileVault {
    /// Creates a new `JsonFileVault` over the given storage file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads and decodes the stored list. A missing file, an unreadable
    /// file, and a parse failure are all treated as an empty store.
    async fn read_records(&self) -> Vec<SavedQuoteRecord> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Failed to read vault at {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                error!("Failed to parse saved quotes, treating the vault as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Persists the full list, creating the parent directory on first write.
    async fn write_records(&self, records: &[SavedQuoteRecord]) -> PortResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PortError::Storage(e.to_string()))?;
        }

        let raw = serde_json::to_string_pretty(records)
            .map_err(|e| PortError::Storage(e.to_string()))?;
        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| PortError::Storage(e.to_string()))
    }
}

//=========================================================================================
// "Impure" Storage Record Structs
//=========================================================================================

#[derive(Clone, Serialize, Deserialize)]
struct SavedQuoteRecord {
    id: Uuid,
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    topic: Option<String>,
    // Stored as an integer millisecond timestamp.
    #[serde(rename = "savedAt", with = "chrono::serde::ts_milliseconds")]
    saved_at: DateTime<Utc>,
}

impl SavedQuoteRecord {
    fn to_domain(self) -> SavedQuote {
        SavedQuote {
            id: self.id,
            text: self.text,
            topic: self.topic,
            saved_at: self.saved_at,
        }
    }

    fn from_domain(quote: &SavedQuote) -> Self {
        Self {
            id: quote.id,
            text: quote.text.clone(),
            topic: quote.topic.clone(),
            saved_at: quote.saved_at,
        }
    }
}

//=========================================================================================
// `QuoteVaultService` Trait Implementation
//=========================================================================================

#[async_trait]
impl QuoteVaultService for JsonFileVault {
    async fn load_all(&self) -> PortResult<Vec<SavedQuote>> {
        Ok(self
            .read_records()
            .await
            .into_iter()
            .map(SavedQuoteRecord::to_domain)
            .collect())
    }

    async fn save_one(&self, quote: &GeneratedQuote) -> PortResult<SaveOutcome> {
        let mut records = self.read_records().await;

        // Deduplication is by text only. The first save of a given text wins:
        // a duplicate neither refreshes the timestamp nor reorders the entry.
        if let Some(existing) = records.iter().find(|r| r.text == quote.text) {
            return Ok(SaveOutcome {
                quote: existing.clone().to_domain(),
                newly_added: false,
            });
        }

        let saved = SavedQuote {
            id: Uuid::new_v4(),
            text: quote.text.clone(),
            topic: quote.topic.clone(),
            saved_at: Utc::now(),
        };
        records.insert(0, SavedQuoteRecord::from_domain(&saved));
        self.write_records(&records).await?;

        Ok(SaveOutcome {
            quote: saved,
            newly_added: true,
        })
    }

    async fn delete_one(&self, id: Uuid) -> PortResult<Vec<SavedQuote>> {
        let mut records = self.read_records().await;
        records.retain(|r| r.id != id);
        self.write_records(&records).await?;

        Ok(records
            .into_iter()
            .map(SavedQuoteRecord::to_domain)
            .collect())
    }
}
