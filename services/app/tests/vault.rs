//! services/app/tests/vault.rs
//!
//! Integration tests for the file-backed saved-quotes vault.

use app_lib::adapters::JsonFileVault;
use specter_core::domain::GeneratedQuote;
use specter_core::ports::QuoteVaultService;
use std::path::PathBuf;
use tempfile::tempdir;
use uuid::Uuid;

fn quote(text: &str, topic: Option<&str>) -> GeneratedQuote {
    GeneratedQuote {
        text: text.to_string(),
        topic: topic.map(str::to_string),
    }
}

fn vault_at(dir: &tempfile::TempDir) -> (JsonFileVault, PathBuf) {
    let path = dir.path().join("specter_saved_quotes.json");
    (JsonFileVault::new(path.clone()), path)
}

#[tokio::test]
async fn a_missing_store_loads_as_empty() {
    let dir = tempdir().unwrap();
    let (vault, _) = vault_at(&dir);

    assert!(vault.load_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn saving_prepends_so_the_newest_entry_comes_first() {
    let dir = tempdir().unwrap();
    let (vault, _) = vault_at(&dir);

    vault.save_one(&quote("First blood", None)).await.unwrap();
    let outcome = vault
        .save_one(&quote("Second wind", Some("Risk")))
        .await
        .unwrap();
    assert!(outcome.newly_added);

    let all = vault.load_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].text, "Second wind");
    assert_eq!(all[0].topic.as_deref(), Some("Risk"));
    assert_eq!(all[1].text, "First blood");
    assert_ne!(all[0].id, all[1].id);
}

#[tokio::test]
async fn duplicate_text_is_deduplicated_even_across_topics() {
    let dir = tempdir().unwrap();
    let (vault, _) = vault_at(&dir);

    let first = vault
        .save_one(&quote("Winners don't make excuses", Some("Loyalty")))
        .await
        .unwrap();
    assert!(first.newly_added);

    let second = vault
        .save_one(&quote("Winners don't make excuses", Some("Risk")))
        .await
        .unwrap();
    assert!(!second.newly_added);
    // First-saved-wins: the existing entry is returned untouched.
    assert_eq!(second.quote.id, first.quote.id);
    assert_eq!(second.quote.saved_at, first.quote.saved_at);
    assert_eq!(second.quote.topic.as_deref(), Some("Loyalty"));

    assert_eq!(vault.load_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_an_unknown_id_leaves_the_list_unchanged() {
    let dir = tempdir().unwrap();
    let (vault, _) = vault_at(&dir);

    let saved = vault.save_one(&quote("Keep me", None)).await.unwrap();
    let after = vault.delete_one(Uuid::new_v4()).await.unwrap();

    assert_eq!(after.len(), 1);
    assert_eq!(after[0].id, saved.quote.id);
    assert_eq!(vault.load_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn load_reflects_the_net_effect_of_saves_and_deletes() {
    let dir = tempdir().unwrap();
    let (vault, _) = vault_at(&dir);

    vault.save_one(&quote("Alpha", None)).await.unwrap();
    let beta = vault.save_one(&quote("Beta", None)).await.unwrap();
    vault.save_one(&quote("Gamma", None)).await.unwrap();

    let after = vault.delete_one(beta.quote.id).await.unwrap();
    let texts: Vec<_> = after.iter().map(|q| q.text.as_str()).collect();
    assert_eq!(texts, ["Gamma", "Alpha"]);

    // A fresh read sees exactly the same list.
    let reloaded = vault.load_all().await.unwrap();
    assert_eq!(reloaded, after);
}

#[tokio::test]
async fn an_unparseable_store_is_treated_as_empty() {
    let dir = tempdir().unwrap();
    let (vault, path) = vault_at(&dir);

    tokio::fs::write(&path, "not json {{{").await.unwrap();
    assert!(vault.load_all().await.unwrap().is_empty());

    // The vault recovers on the next write.
    vault.save_one(&quote("Fresh start", None)).await.unwrap();
    let all = vault.load_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].text, "Fresh start");
}

#[tokio::test]
async fn timestamps_are_persisted_as_integer_milliseconds() {
    let dir = tempdir().unwrap();
    let (vault, path) = vault_at(&dir);

    vault.save_one(&quote("On the record", None)).await.unwrap();

    let raw = tokio::fs::read_to_string(&path).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(value[0]["savedAt"].is_i64());
    assert!(value[0]["id"].is_string());
}
