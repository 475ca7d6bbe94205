//! services/app/src/ui/mod.rs
//!
//! Terminal presentation. Pure templating over session snapshots; no
//! business logic lives here.

use crate::app::SessionSnapshot;
use colored::Colorize;
use specter_core::domain::{SavedQuote, ViewState};

/// The home screen: banner plus the three destinations.
pub fn print_home() {
    println!();
    println!("  {}", "W I N N I N G".bold());
    println!("  {}", "is the only option".dimmed());
    println!();
    println!("  {}  The Playbook    {}", "1.".bold(), "(/quotes)".dimmed());
    println!("  {}  Consultation    {}", "2.".bold(), "(/advice)".dimmed());
    println!("  {}  The Vault       {}", "3.".bold(), "(/vault)".dimmed());
    println!();
    println!("  {}", "/help for commands, /quit to leave".dimmed());
}

/// The Playbook header, printed when the Quotes view is entered.
pub fn print_quotes_header() {
    println!();
    println!("  {}", "THE PLAYBOOK".bold());
    println!("  {}", "Daily wisdom from the best closer in the city".dimmed());
    println!();
    println!(
        "  {}",
        "Type a topic (e.g. Loyalty, Risk) for a new quote, or press Enter for a random one."
            .dimmed()
    );
    println!("  {}", "/save files it, /share copies it, /home goes back.".dimmed());
}

/// The quote card, or a placeholder when nothing has been generated yet.
pub fn print_quote(snapshot: &SessionSnapshot) {
    println!();
    match &snapshot.current_quote {
        Some(quote) => {
            println!("  \u{201c}{}\u{201d}", quote.text.bold());
            println!();
            match &quote.topic {
                Some(topic) if !topic.trim().is_empty() => println!(
                    "  {} {}",
                    "— Harvey Specter, on".dimmed(),
                    topic.dimmed()
                ),
                _ => println!("  {}", "— Harvey Specter, Name Partner".dimmed()),
            }
            if snapshot.quote_saved {
                println!("  {}", "(in the vault)".dimmed());
            }
        }
        None => println!("  {}", "Ready to close the deal?".italic().dimmed()),
    }
}

/// The Strategic Counsel header, printed when the Advice view is entered.
pub fn print_advice_header() {
    println!();
    println!("  {}", "STRATEGIC COUNSEL".bold());
    println!("  {}", "What would Harvey do?".dimmed());
    println!();
    println!(
        "  {}",
        "Describe your situation. Be brief. I haven't got all day.".dimmed()
    );
    println!("  {}", "/share copies the counsel, /home goes back.".dimmed());
}

/// The advice cards: the move, then the strategy behind it.
pub fn print_advice(snapshot: &SessionSnapshot) {
    println!();
    match &snapshot.current_advice {
        Some(advice) => {
            println!("  {}", "THE MOVE".bold());
            println!("  \u{201c}{}\u{201d}", advice.advice.bold());
            println!();
            println!("  {}", "THE STRATEGY".bold());
            println!("  {}", advice.strategy);
        }
        None => println!("  {}", "State your case.".italic().dimmed()),
    }
}

/// The vault listing, most-recently-saved first.
pub fn print_saved(quotes: &[SavedQuote]) {
    println!();
    println!("  {}", "THE VAULT".bold());
    println!("  {}", "Winning strategies on record".dimmed());
    println!();
    if quotes.is_empty() {
        println!(
            "  {}",
            "\u{201c}Evidence is everything. You have none.\u{201d}".italic().dimmed()
        );
        println!("  {}", "Start saving quotes to build your case.".dimmed());
        return;
    }

    for (index, quote) in quotes.iter().enumerate() {
        println!("  {} \u{201c}{}\u{201d}", format!("{}.", index + 1).bold(), quote.text);
        let filed = quote.saved_at.format("%b %e, %Y");
        match &quote.topic {
            Some(topic) if !topic.trim().is_empty() => {
                println!("     {}", format!("{} · filed {}", topic, filed).dimmed())
            }
            _ => println!("     {}", format!("filed {}", filed).dimmed()),
        }
    }
    println!();
    println!("  {}", "/share <n> copies an entry, /delete <n> destroys it.".dimmed());
}

/// A transient notification banner.
pub fn print_notification(snapshot: &SessionSnapshot) {
    if let Some(notification) = &snapshot.notification {
        println!("  {}", notification.to_uppercase().bold().reversed());
    }
}

/// The in-flight marker shown while a generation call is outstanding.
pub fn print_loading(view: ViewState) {
    match view {
        ViewState::Advice => println!("  {}", "Analysing...".dimmed()),
        _ => println!("  {}", "Thinking...".dimmed()),
    }
}

/// The per-view readline prompt.
pub fn prompt_for(view: ViewState) -> &'static str {
    match view {
        ViewState::Home => "specter> ",
        ViewState::Quotes => "playbook> ",
        ViewState::Advice => "counsel> ",
        ViewState::Saved => "vault> ",
    }
}

/// The command reference.
pub fn print_help(view: ViewState) {
    println!();
    println!("  {}", "Commands".bold());
    println!("    /home, /back       Return to the home screen");
    println!("    /quotes, /playbook Open the quote generator");
    println!("    /advice, /counsel  Open the strategic counsel");
    println!("    /vault, /saved     Open the saved vault");
    println!("    /help              Show this reference");
    println!("    /quit              Leave");
    match view {
        ViewState::Quotes => {
            println!("    /save              File the quote on screen");
            println!("    /share             Copy the quote on screen");
            println!("    <topic> or Enter   Generate a new quote");
        }
        ViewState::Advice => {
            println!("    /share             Copy the counsel on screen");
            println!("    <situation>        Ask for counsel");
        }
        ViewState::Saved => {
            println!("    /share <n>         Copy the n-th entry");
            println!("    /delete <n>        Destroy the n-th entry");
        }
        ViewState::Home => {}
    }
}
