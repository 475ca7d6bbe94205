//! services/app/src/adapters/share.rs
//!
//! Best-effort share support. A terminal has no native share sheet, so
//! sharing resolves to copying a formatted text summary to the system
//! clipboard through whichever clipboard utility the platform provides.

use async_trait::async_trait;
use specter_core::ports::{PortError, PortResult, ShareOutcome, ShareService};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Clipboard utilities probed in order. The first one that accepts the text wins.
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip", &[]),
];

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements the `ShareService` port with the OS clipboard.
#[derive(Clone, Default)]
pub struct ClipboardShareAdapter;

impl ClipboardShareAdapter {
    /// Creates a new `ClipboardShareAdapter`.
    pub fn new() -> Self {
        Self
    }

    /// Pipes `text` into a clipboard utility, reporting whether it accepted it.
    async fn copy_with(program: &str, args: &[&str], text: &str) -> std::io::Result<bool> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
        }
        let status = child.wait().await?;
        Ok(status.success())
    }
}

//=========================================================================================
// `ShareService` Trait Implementation
//=========================================================================================

#[async_trait]
impl ShareService for ClipboardShareAdapter {
    async fn share(&self, _title: &str, text: &str) -> PortResult<ShareOutcome> {
        for (program, args) in CLIPBOARD_COMMANDS {
            match Self::copy_with(program, args, text).await {
                Ok(true) => return Ok(ShareOutcome::Copied),
                Ok(false) => continue,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => return Err(PortError::Unexpected(e.to_string())),
            }
        }

        debug!("No clipboard utility available; share is a no-op");
        Ok(ShareOutcome::Unavailable)
    }
}
