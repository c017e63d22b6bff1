//! CLI module for folio.
//!
//! This module provides the command-line front end:
//! - Argument parsing
//! - Plain-text rendering of hydrated sections
//! - Command dispatch against a [`Portfolio`]
//!
//! # Usage
//!
//! ```ignore
//! use folio::cli::{parse_args, run_command};
//!
//! let command = parse_args(std::env::args());
//! runtime.block_on(run_command(&portfolio, command))?;
//! ```

pub mod args;
pub mod render;

pub use args::{parse_args, CliCommand, ThemeAction, USAGE};
pub use render::render_snapshot;

use color_eyre::eyre::eyre;
use color_eyre::Result;

use crate::content::SubmissionStatus;
use crate::portfolio::Portfolio;

/// The current version of folio, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Carousel periods printed by `show --watch`.
pub const WATCH_TICKS: usize = 5;

/// Run a command that needs the wired client.
///
/// `Version`, `Help` and `Invalid` need no client and are handled by the
/// binary before the runtime starts; passing them here is an error.
pub async fn run_command(portfolio: &Portfolio, command: CliCommand) -> Result<()> {
    match command {
        CliCommand::Show { watch: false } => {
            let snapshot = portfolio.hydrate_all().await;
            let theme = portfolio.preferences().current();
            print!("{}", render_snapshot(&snapshot, portfolio.gateway(), theme));
            Ok(())
        }
        CliCommand::Show { watch: true } => watch_subtitles(portfolio).await,
        CliCommand::Theme(action) => {
            let prefs = portfolio.preferences();
            let theme = match action {
                ThemeAction::Show => prefs.current(),
                ThemeAction::Toggle => prefs.toggle(),
                ThemeAction::Set(theme) => prefs.set(theme),
            };
            println!("{}", theme);
            Ok(())
        }
        CliCommand::Contact(form) => match portfolio.send_contact(form).await {
            SubmissionStatus::Success => {
                println!("Message sent.");
                Ok(())
            }
            SubmissionStatus::Failed(message) => Err(eyre!(message)),
            other => Err(eyre!("Unexpected submission state: {:?}", other)),
        },
        CliCommand::Logout => {
            portfolio.logout().await?;
            println!("Signed out.");
            Ok(())
        }
        other @ (CliCommand::Version | CliCommand::Help | CliCommand::Invalid(_)) => {
            Err(eyre!("{:?} does not run against the client", other))
        }
    }
}

async fn watch_subtitles(portfolio: &Portfolio) -> Result<()> {
    let Some(hero) = portfolio.start_hero() else {
        return Ok(());
    };
    println!("{}", hero.hero().value.title);

    let carousel = hero.carousel();
    let mut updates = carousel.subscribe();
    println!("  {}", carousel.current());

    for _ in 0..WATCH_TICKS {
        if updates.changed().await.is_err() {
            break;
        }
        let current = updates.borrow_and_update().current().to_string();
        println!("  {}", current);
    }

    hero.stop();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{FixedHostPreference, InMemoryStore, MockHttpClient};
    use crate::config::ClientConfig;
    use crate::preferences::Theme;
    use std::sync::Arc;

    fn portfolio(store: &InMemoryStore) -> Portfolio {
        Portfolio::new(
            ClientConfig::new(),
            Arc::new(MockHttpClient::new()),
            Arc::new(store.clone()),
            &FixedHostPreference::none(),
        )
    }

    #[test]
    fn test_version_is_not_empty() {
        assert!(!VERSION.is_empty());
        assert!(VERSION.split('.').count() >= 2);
    }

    #[tokio::test]
    async fn test_theme_toggle_command() {
        let store = InMemoryStore::new();
        let portfolio = portfolio(&store);

        run_command(&portfolio, CliCommand::Theme(ThemeAction::Toggle))
            .await
            .unwrap();
        assert_eq!(portfolio.preferences().current(), Theme::Light);
    }

    #[tokio::test]
    async fn test_client_free_commands_rejected() {
        let portfolio = portfolio(&InMemoryStore::new());
        assert!(run_command(&portfolio, CliCommand::Version).await.is_err());
    }
}
