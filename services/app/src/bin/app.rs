//! services/app/src/bin/app.rs

use app_lib::{
    adapters::{ClipboardShareAdapter, GeminiGenerationAdapter, JsonFileVault},
    app::{AppState, Controller},
    config::Config,
    error::AppError,
    ui,
};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use specter_core::domain::{SavedQuote, ViewState};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Vault at {}", config.vault_path.display());
    if config.gemini_api_key.is_none() {
        info!("GEMINI_API_KEY is not set; generation will be unavailable until it is");
    }

    // --- 2. Initialize Service Adapters ---
    let generator = Arc::new(GeminiGenerationAdapter::new(
        config.gemini_api_key.clone(),
        config.quote_model.clone(),
        config.advice_model.clone(),
    ));
    let vault = Arc::new(JsonFileVault::new(config.vault_path.clone()));
    let share = Arc::new(ClipboardShareAdapter::new());

    // --- 3. Build the Shared AppState & Controller ---
    let app_state = AppState {
        generator,
        vault,
        share,
        config: config.clone(),
    };
    let controller = Controller::new(app_state);

    // --- 4. Run the Terminal Loop ---
    run(&controller).await
}

/// The interactive read loop: one command or free-text submission per line,
/// dispatched to the controller by the active view.
async fn run(controller: &Controller) -> Result<(), AppError> {
    let mut editor = DefaultEditor::new()?;
    // The presentation layer's snapshot of the vault; re-synced after every
    // mutation while the Saved view is open.
    let mut saved: Vec<SavedQuote> = Vec::new();

    ui::print_home();

    loop {
        let snapshot = controller.snapshot().await;
        ui::print_notification(&snapshot);

        let line = match editor.readline(ui::prompt_for(snapshot.view)) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C cancels the current input.
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };

        let input = line.trim().to_string();
        if !input.is_empty() {
            let _ = editor.add_history_entry(&input);
        }

        match input.as_str() {
            "/quit" | "/q" | "/exit" => break,
            "/help" | "/h" | "/?" => ui::print_help(snapshot.view),
            "/home" | "/back" => enter_view(controller, ViewState::Home, &mut saved).await?,
            "/quotes" | "/playbook" => {
                enter_view(controller, ViewState::Quotes, &mut saved).await?
            }
            "/advice" | "/counsel" => enter_view(controller, ViewState::Advice, &mut saved).await?,
            "/vault" | "/saved" => enter_view(controller, ViewState::Saved, &mut saved).await?,
            "/save" if snapshot.view == ViewState::Quotes => {
                if let Err(e) = controller.save_current_quote().await {
                    error!("Failed to file the quote: {}", e);
                }
            }
            "/share" => match snapshot.view {
                ViewState::Quotes => controller.share_current_quote().await?,
                ViewState::Advice => controller.share_current_advice().await?,
                ViewState::Saved => println!("  Usage: /share <n>"),
                ViewState::Home => {}
            },
            _ => {
                if let Some(rest) = input.strip_prefix("/share ") {
                    if snapshot.view == ViewState::Saved {
                        if let Some(quote) = pick(&saved, rest) {
                            controller.share_saved(&quote).await?;
                        } else {
                            println!("  No such entry: {}", rest);
                        }
                        continue;
                    }
                }
                if let Some(rest) = input.strip_prefix("/delete ") {
                    if snapshot.view == ViewState::Saved {
                        if let Some(quote) = pick(&saved, rest) {
                            saved = controller.delete_saved(quote.id).await?;
                            ui::print_saved(&saved);
                        } else {
                            println!("  No such entry: {}", rest);
                        }
                        continue;
                    }
                }
                if input.starts_with('/') {
                    println!("  Unknown command: {} (try /help)", input);
                    continue;
                }
                submit(controller, snapshot.view, &input, &mut saved).await?;
            }
        }
    }

    Ok(())
}

/// Navigates to a view and renders it. Entering the Playbook opens with a
/// fresh generic quote, as the original screen did; entering the Vault
/// re-reads the canonical list from storage.
async fn enter_view(
    controller: &Controller,
    view: ViewState,
    saved: &mut Vec<SavedQuote>,
) -> Result<(), AppError> {
    controller.navigate(view).await;
    match view {
        ViewState::Home => ui::print_home(),
        ViewState::Quotes => {
            ui::print_quotes_header();
            ui::print_loading(view);
            controller.generate_quote(None).await;
            ui::print_quote(&controller.snapshot().await);
        }
        ViewState::Advice => ui::print_advice_header(),
        ViewState::Saved => {
            *saved = controller.saved_quotes().await?;
            ui::print_saved(saved);
        }
    }
    Ok(())
}

/// Routes free-text input by the active view.
async fn submit(
    controller: &Controller,
    view: ViewState,
    input: &str,
    saved: &mut Vec<SavedQuote>,
) -> Result<(), AppError> {
    match view {
        ViewState::Home => match input {
            "1" => enter_view(controller, ViewState::Quotes, saved).await?,
            "2" => enter_view(controller, ViewState::Advice, saved).await?,
            "3" => enter_view(controller, ViewState::Saved, saved).await?,
            "" => {}
            _ => println!("  Pick a number, or /help."),
        },
        ViewState::Quotes => {
            // Any text is a topic; a bare Enter asks for a generic quote.
            let topic = if input.is_empty() { None } else { Some(input) };
            ui::print_loading(view);
            controller.generate_quote(topic).await;
            ui::print_quote(&controller.snapshot().await);
        }
        ViewState::Advice => {
            if input.is_empty() {
                ui::print_advice(&controller.snapshot().await);
                return Ok(());
            }
            ui::print_loading(view);
            controller.request_advice(input).await;
            ui::print_advice(&controller.snapshot().await);
        }
        ViewState::Saved => {
            if !input.is_empty() {
                println!("  /share <n>, /delete <n>, or /home.");
            }
        }
    }
    Ok(())
}

/// Resolves a 1-based listing index against the vault snapshot.
fn pick(saved: &[SavedQuote], raw_index: &str) -> Option<SavedQuote> {
    let index: usize = raw_index.trim().parse().ok()?;
    saved.get(index.checked_sub(1)?).cloned()
}
