//! Terminal implementations of the dispatch ports, used by the CLI.

use async_trait::async_trait;
use colored::Colorize;

use crate::domain::ports::{Browser, DiagnosticsSink, DispatchError, NavigationRequest, Navigator};

/// Prints screen transitions instead of performing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNavigator;

#[async_trait]
impl Navigator for ConsoleNavigator {
    async fn navigate(&self, request: NavigationRequest) -> Result<(), DispatchError> {
        let target = format!("{} → {}", request.navigator, request.screen);
        match request.card {
            Some(card) => println!(
                "{} {} (cardConfig: {})",
                "navigate".green().bold(),
                target,
                card.label().cyan()
            ),
            None => println!("{} {}", "navigate".green().bold(), target),
        }
        Ok(())
    }
}

/// Prints browser launches instead of performing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleBrowser;

#[async_trait]
impl Browser for ConsoleBrowser {
    async fn open_in_app(&self, url: &str) -> Result<(), DispatchError> {
        println!("{} {}", "open in-app browser".yellow().bold(), url);
        Ok(())
    }

    async fn open_external(&self, url: &str) -> Result<(), DispatchError> {
        println!("{} {}", "open system browser".yellow().bold(), url);
        Ok(())
    }
}

/// Prints diagnostics to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDiagnostics;

impl DiagnosticsSink for ConsoleDiagnostics {
    fn debug(&self, message: &str) {
        eprintln!("{} {}", "debug:".dimmed(), message.dimmed());
    }
}
